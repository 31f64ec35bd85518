// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Toggle controller: visibility of the disclosure control and its panel.
//!
//! The controller only tracks *whether* the control is shown and the panel
//! open. Each operation returns a [`Directive`] when the state changed and
//! `None` when it was already in the requested state, so hosts can apply
//! directives blindly.

use crate::types::Directive;

bitflags::bitflags! {
    /// Toggle control state.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct ToggleFlags: u8 {
        /// The control is shown and takes part in layout.
        const ACTIVE = 0b0000_0001;
        /// The hidden panel is disclosed.
        const OPEN   = 0b0000_0010;
    }
}

/// Visibility policy for the disclosure control.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ToggleController {
    flags: ToggleFlags,
}

impl ToggleController {
    /// A hidden control with a closed panel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current flags.
    pub fn flags(&self) -> ToggleFlags {
        self.flags
    }

    /// True while the control is shown.
    pub fn is_active(&self) -> bool {
        self.flags.contains(ToggleFlags::ACTIVE)
    }

    /// True while the panel is open.
    pub fn is_open(&self) -> bool {
        self.flags.contains(ToggleFlags::OPEN)
    }

    /// Show the control.
    pub fn show(&mut self) -> Option<Directive> {
        self.set(ToggleFlags::ACTIVE, true, Directive::Show)
    }

    /// Hide the control. No-op if already hidden.
    pub fn hide(&mut self) -> Option<Directive> {
        self.set(ToggleFlags::ACTIVE, false, Directive::Hide)
    }

    /// Open the panel.
    pub fn open(&mut self) -> Option<Directive> {
        self.set(ToggleFlags::OPEN, true, Directive::Open)
    }

    /// Close the panel.
    pub fn close(&mut self) -> Option<Directive> {
        self.set(ToggleFlags::OPEN, false, Directive::Close)
    }

    /// Invert the panel state. Always yields a directive.
    pub fn toggle(&mut self) -> Directive {
        let directive = if self.is_open() {
            Directive::Close
        } else {
            Directive::Open
        };
        self.flags.toggle(ToggleFlags::OPEN);
        directive
    }

    fn set(&mut self, flag: ToggleFlags, on: bool, directive: Directive) -> Option<Directive> {
        if self.flags.contains(flag) == on {
            return None;
        }
        self.flags.set(flag, on);
        Some(directive)
    }
}

/// True when a menu cannot give up more items.
///
/// `visible_count` counts every child of the visible list, `reserved_slots` of
/// which are not items (typically the toggle control).
pub fn is_at_minimum(visible_count: usize, reserved_slots: usize, min_items: usize) -> bool {
    visible_count.saturating_sub(reserved_slots) <= min_items
}
