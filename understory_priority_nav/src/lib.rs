// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_priority_nav --heading-base-level=0

//! Understory Priority Nav: a headless priority navigation engine.
//!
//! ## Overview
//!
//! A priority navigation menu shows as many items as fit along its axis. When
//! space runs out, the lowest-priority (last) items move into a secondary,
//! togglable menu, and they come back once space is reclaimed.
//!
//! This crate is the part of that pattern with real invariants: which items
//! are visible, which are hidden, and the extent the visible list occupied
//! each time an item was pushed out. It does not measure anything itself.
//! Hosts report sizes through an [`ExtentProvider`](crate::measure::ExtentProvider)
//! and mirror the returned [`NavEvent`](crate::types::NavEvent)s in their UI.
//!
//! ## Pieces
//!
//! - [`OverflowState`](crate::state::OverflowState): the visible/hidden partition and
//!   the stack of recorded extents, pushed and popped in strict LIFO order.
//! - [`OverflowEngine`](crate::engine::OverflowEngine): the update/refresh loops
//!   that keep the partition consistent with available space.
//! - [`ToggleController`](crate::toggle::ToggleController): whether the disclosure
//!   control is shown and its panel open, plus the [`is_at_minimum`](crate::toggle::is_at_minimum) predicate.
//! - [`MenuConfiguration`](crate::config::MenuConfiguration): direction, breakpoints,
//!   minimum items, and lifecycle [`Hooks`](crate::config::Hooks).
//! - [`PriorityNav`](crate::nav::PriorityNav): load/resize/orientation/click entry points
//!   for a host's event adapter; [`NavRegistry`](crate::registry::NavRegistry) keeps
//!   several independent menus by name.
//!
//! ## Example
//!
//! ```
//! use kurbo::Size;
//! use understory_priority_nav::config::MenuConfiguration;
//! use understory_priority_nav::measure::StackLayout;
//! use understory_priority_nav::nav::{MenuAnchors, PriorityNav};
//! use understory_priority_nav::types::{Direction, Directive, NavEvent};
//!
//! // Five 120px items and a 20px "more" button.
//! let layout = |width: f64| {
//!     StackLayout::new(Direction::Horizontal, Size::new(width, 40.0), |_: &u32| {
//!         Size::new(120.0, 40.0)
//!     })
//!     .with_toggle(Size::new(20.0, 40.0))
//! };
//!
//! let anchors = MenuAnchors::new("list", "more-list", "more", 0..5_u32);
//! let mut nav = PriorityNav::attach(anchors, MenuConfiguration::default()).unwrap();
//!
//! // 600px of items in 500px: the last item overflows and the button appears.
//! let events = nav.on_load(&layout(500.0));
//! assert_eq!(events, [NavEvent::Hidden(4), NavEvent::Control(Directive::Show)]);
//!
//! // Room again: the item returns and the button goes away.
//! let events = nav.on_resize(&layout(650.0));
//! assert_eq!(events, [NavEvent::Restored(4), NavEvent::Control(Directive::Hide)]);
//! assert!(nav.state().is_empty());
//! ```
//!
//! ## Concurrency
//!
//! Everything runs synchronously on the caller's thread. Each menu owns its
//! state exclusively; hosts must not call back into a menu from inside an
//! extent query.
//!
//! ## Logging
//!
//! Diagnostics go through the [`log`] facade. No logger is installed.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod config;
pub mod engine;
pub mod error;
pub mod measure;
pub mod nav;
pub mod registry;
pub mod state;
pub mod toggle;
pub mod types;

pub use config::{Breakpoints, Hooks, Lifecycle, MenuConfiguration, MenuOptions};
pub use engine::OverflowEngine;
pub use error::{Error, Result};
pub use measure::{ExtentProvider, StackLayout};
pub use nav::{MenuAnchors, PriorityNav};
pub use registry::NavRegistry;
pub use state::OverflowState;
pub use toggle::{ToggleController, ToggleFlags};
pub use types::{Anchor, Direction, Directive, NavEvent};
