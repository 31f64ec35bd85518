// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Entry points for a host's event adapter.
//!
//! ## Overview
//!
//! [`PriorityNav`] binds one menu's structural anchors, its
//! [`MenuConfiguration`], and an [`OverflowEngine`]. The host forwards
//! environment signals to it:
//!
//! | Signal             | Entry point                              | Engine call  |
//! |--------------------|------------------------------------------|--------------|
//! | load               | [`on_load`](PriorityNav::on_load)        | `update`     |
//! | resize             | [`on_resize`](PriorityNav::on_resize)    | `update`     |
//! | orientation change | [`on_orientation_change`](PriorityNav::on_orientation_change) | `refresh` |
//! | toggle click       | [`on_toggle_click`](PriorityNav::on_toggle_click) | `toggle` |
//!
//! Each entry point returns the [`NavEvent`]s to mirror (move an item,
//! show/hide the control, open/close the panel) and runs the matching
//! [`Hooks`](crate::config::Hooks).
//!
//! Entry points must not be re-entered from inside an [`ExtentProvider`]
//! callback; `&mut self` makes that impossible through this API.
//!
//! ## Missing anchors
//!
//! Pages may render only some menu variants. [`PriorityNav::attach`] returns
//! `None` when the visible list, hidden list, or toggle control is absent, so
//! the host simply has nothing to drive.

use alloc::vec::Vec;

use crate::config::{Lifecycle, MenuConfiguration};
use crate::engine::OverflowEngine;
use crate::error::{Error, Result};
use crate::measure::ExtentProvider;
use crate::state::OverflowState;
use crate::toggle::{ToggleController, is_at_minimum};
use crate::types::{Anchor, Directive, NavEvent};

/// Children of the visible list that are not items.
pub const TOGGLE_SLOTS: usize = 1;

/// Structural elements of a menu as discovered by the host.
///
/// `H` is the host's handle for structural elements; `K` the item handle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuAnchors<H, K> {
    /// The primary list.
    pub visible_list: Option<H>,
    /// The secondary list.
    pub hidden_list: Option<H>,
    /// The disclosure control.
    pub toggle: Option<H>,
    /// Items in priority order.
    pub items: Vec<K>,
}

impl<H, K> Default for MenuAnchors<H, K> {
    fn default() -> Self {
        Self {
            visible_list: None,
            hidden_list: None,
            toggle: None,
            items: Vec::new(),
        }
    }
}

impl<H, K> MenuAnchors<H, K> {
    /// Anchors with every structural element present.
    pub fn new(
        visible_list: H,
        hidden_list: H,
        toggle: H,
        items: impl IntoIterator<Item = K>,
    ) -> Self {
        Self {
            visible_list: Some(visible_list),
            hidden_list: Some(hidden_list),
            toggle: Some(toggle),
            items: items.into_iter().collect(),
        }
    }
}

/// Structural elements of a running menu.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Anchors<H> {
    /// The primary list.
    pub visible_list: H,
    /// The secondary list.
    pub hidden_list: H,
    /// The disclosure control.
    pub toggle: H,
}

/// One priority navigation menu.
pub struct PriorityNav<H, K> {
    anchors: Anchors<H>,
    config: MenuConfiguration,
    engine: OverflowEngine<K>,
}

impl<H: core::fmt::Debug, K: Copy + core::fmt::Debug> core::fmt::Debug for PriorityNav<H, K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PriorityNav")
            .field("anchors", &self.anchors)
            .field("direction", &self.engine.direction())
            .field("visible", &self.engine.state().visible())
            .field("hidden", &self.engine.state().len())
            .field("toggle", &self.engine.toggle_controller().flags())
            .field("hooks", self.config.hooks())
            .finish_non_exhaustive()
    }
}

impl<H, K: Copy> PriorityNav<H, K> {
    /// Bind a menu, failing if a structural anchor is missing.
    pub fn new(anchors: MenuAnchors<H, K>, config: MenuConfiguration) -> Result<Self> {
        let MenuAnchors {
            visible_list,
            hidden_list,
            toggle,
            items,
        } = anchors;
        let visible_list = visible_list.ok_or(Error::MissingAnchor(Anchor::VisibleList))?;
        let hidden_list = hidden_list.ok_or(Error::MissingAnchor(Anchor::HiddenList))?;
        let toggle = toggle.ok_or(Error::MissingAnchor(Anchor::Toggle))?;
        Ok(Self {
            anchors: Anchors {
                visible_list,
                hidden_list,
                toggle,
            },
            engine: OverflowEngine::new(config.direction(), items),
            config,
        })
    }

    /// Bind a menu, or do nothing if a structural anchor is missing.
    pub fn attach(anchors: MenuAnchors<H, K>, config: MenuConfiguration) -> Option<Self> {
        match Self::new(anchors, config) {
            Ok(nav) => Some(nav),
            Err(err) => {
                log::debug!("priority nav: not initialized: {err}");
                None
            }
        }
    }

    /// Tear down, handing back the anchors with items in priority order.
    pub fn detach(self) -> MenuAnchors<H, K> {
        let Anchors {
            visible_list,
            hidden_list,
            toggle,
        } = self.anchors;
        MenuAnchors {
            visible_list: Some(visible_list),
            hidden_list: Some(hidden_list),
            toggle: Some(toggle),
            items: self.engine.into_state().into_items(),
        }
    }

    /// Structural anchors.
    pub fn anchors(&self) -> &Anchors<H> {
        &self.anchors
    }

    /// Resolved configuration.
    pub fn config(&self) -> &MenuConfiguration {
        &self.config
    }

    /// Current partition.
    pub fn state(&self) -> &OverflowState<K> {
        self.engine.state()
    }

    /// Current toggle state.
    pub fn toggle_controller(&self) -> &ToggleController {
        self.engine.toggle_controller()
    }

    /// The underlying engine.
    pub fn engine(&self) -> &OverflowEngine<K> {
        &self.engine
    }

    /// Initial layout pass.
    ///
    /// Runs `on_load`, updates, then runs `on_init`.
    pub fn on_load(&mut self, provider: &impl ExtentProvider<K>) -> Vec<NavEvent<K>> {
        log::debug!("priority nav: load");
        self.config.fire(Lifecycle::Load);
        let events = self.engine.update(provider);
        self.notify(&events);
        self.config.fire(Lifecycle::Init);
        events
    }

    /// The available space changed.
    pub fn on_resize(&mut self, provider: &impl ExtentProvider<K>) -> Vec<NavEvent<K>> {
        log::debug!("priority nav: resize");
        let mut events = Vec::new();
        self.engine.update_into(provider, &mut events);
        self.engine.close_empty_into(&mut events);
        self.notify(&events);
        self.config.fire(Lifecycle::Resize);
        events
    }

    /// The available space changed by a large, possibly non-monotonic amount.
    ///
    /// Only returns items while the container has room for more than the list
    /// occupies, so the last returned item may overflow again. Follow with
    /// [`on_resize`](Self::on_resize) once the new layout has settled.
    pub fn on_orientation_change(&mut self, provider: &impl ExtentProvider<K>) -> Vec<NavEvent<K>> {
        log::debug!("priority nav: orientation change");
        let events = self.engine.refresh(provider);
        self.notify(&events);
        events
    }

    /// The toggle control was activated.
    pub fn on_toggle_click(&mut self) -> Vec<NavEvent<K>> {
        let events = self.engine.toggle_events();
        self.notify(&events);
        self.config.fire(Lifecycle::HiddenMenuToggle);
        events
    }

    /// True when the visible list holds no more than `min_items` items.
    pub fn is_at_minimum(&self) -> bool {
        is_at_minimum(
            self.engine.state().visible().len() + TOGGLE_SLOTS,
            TOGGLE_SLOTS,
            self.config.min_items(),
        )
    }

    /// True when `viewport_width` is past the start breakpoint.
    pub fn is_breakpoint(&self, viewport_width: f64) -> bool {
        f64::from(self.config.breakpoint()) < viewport_width
    }

    /// Name of the named breakpoint in effect at `viewport_width`.
    pub fn active_breakpoint(&self, viewport_width: f64) -> Option<&str> {
        self.config.breakpoints().active(viewport_width)
    }

    fn notify(&mut self, events: &[NavEvent<K>]) {
        for event in events {
            match event {
                NavEvent::Hidden(_) | NavEvent::Restored(_) => self.config.fire(Lifecycle::ItemMove),
                NavEvent::Control(Directive::Open) => self.config.fire(Lifecycle::HiddenMenuOpen),
                NavEvent::Control(Directive::Close) => {
                    self.config.fire(Lifecycle::HiddenMenuClose);
                }
                NavEvent::Control(Directive::Show | Directive::Hide) => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Hooks, MenuOptions};
    use crate::measure::StackLayout;
    use crate::types::Direction;
    use alloc::rc::Rc;
    use alloc::vec;
    use core::cell::RefCell;
    use kurbo::Size;

    fn item(_: &u32) -> Size {
        Size::new(120.0, 40.0)
    }

    fn row(width: f64) -> StackLayout<fn(&u32) -> Size> {
        StackLayout::new(Direction::Horizontal, Size::new(width, 40.0), item as fn(&u32) -> Size)
            .with_toggle(Size::new(20.0, 40.0))
    }

    fn anchors() -> MenuAnchors<&'static str, u32> {
        MenuAnchors::new("visible", "hidden", "more", 0..5)
    }

    fn recording() -> (Hooks, Rc<RefCell<Vec<&'static str>>>) {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut hooks = Hooks::new();
        for (point, name) in [
            (Lifecycle::Load, "load"),
            (Lifecycle::Init, "init"),
            (Lifecycle::HiddenMenuOpen, "open"),
            (Lifecycle::HiddenMenuClose, "close"),
            (Lifecycle::HiddenMenuToggle, "toggle"),
            (Lifecycle::Resize, "resize"),
            (Lifecycle::ItemMove, "move"),
        ] {
            let log = log.clone();
            hooks = hooks.with(point, move || log.borrow_mut().push(name));
        }
        (hooks, log)
    }

    #[test]
    fn missing_anchor_is_reported_by_new() {
        let mut a = anchors();
        a.toggle = None;
        let err = PriorityNav::new(a, MenuConfiguration::default()).unwrap_err();
        assert_eq!(err, Error::MissingAnchor(Anchor::Toggle));

        let mut a = anchors();
        a.hidden_list = None;
        let err = PriorityNav::new(a, MenuConfiguration::default()).unwrap_err();
        assert_eq!(err, Error::MissingAnchor(Anchor::HiddenList));
    }

    #[test]
    fn missing_anchor_makes_attach_a_no_op() {
        let a: MenuAnchors<&str, u32> = MenuAnchors {
            items: vec![1, 2],
            ..Default::default()
        };
        assert!(PriorityNav::attach(a, MenuConfiguration::default()).is_none());
    }

    #[test]
    fn load_fires_hooks_around_first_update() {
        let (hooks, log) = recording();
        let config = MenuConfiguration::from_options(MenuOptions::default(), hooks);
        let mut nav = PriorityNav::attach(anchors(), config).unwrap();
        let events = nav.on_load(&row(500.0));
        assert_eq!(
            events,
            vec![NavEvent::Hidden(4), NavEvent::Control(Directive::Show)]
        );
        assert_eq!(*log.borrow(), vec!["load", "move", "init"]);
    }

    #[test]
    fn resize_pops_back_and_fires_resize() {
        let (hooks, log) = recording();
        let config = MenuConfiguration::from_options(MenuOptions::default(), hooks);
        let mut nav = PriorityNav::attach(anchors(), config).unwrap();
        let _ = nav.on_load(&row(500.0));
        let _ = nav.on_toggle_click();
        log.borrow_mut().clear();

        let events = nav.on_resize(&row(650.0));
        assert_eq!(
            events,
            vec![
                NavEvent::Restored(4),
                NavEvent::Control(Directive::Hide),
                NavEvent::Control(Directive::Close),
            ]
        );
        assert_eq!(*log.borrow(), vec!["move", "close", "resize"]);
        assert!(nav.state().is_empty());
        assert!(!nav.toggle_controller().is_open());
    }

    #[test]
    fn toggle_click_fires_open_close_then_toggle() {
        let (hooks, log) = recording();
        let config = MenuConfiguration::from_options(MenuOptions::default(), hooks);
        let mut nav = PriorityNav::attach(anchors(), config).unwrap();
        assert_eq!(
            nav.on_toggle_click(),
            vec![NavEvent::Control(Directive::Open)]
        );
        assert_eq!(
            nav.on_toggle_click(),
            vec![NavEvent::Control(Directive::Close)]
        );
        assert_eq!(*log.borrow(), vec!["open", "toggle", "close", "toggle"]);
    }

    #[test]
    fn orientation_change_refreshes() {
        let mut nav = PriorityNav::attach(anchors(), MenuConfiguration::default()).unwrap();
        let _ = nav.on_load(&row(300.0));
        assert_eq!(nav.state().len(), 3);
        let events = nav.on_orientation_change(&row(900.0));
        assert_eq!(
            events,
            vec![
                NavEvent::Restored(2),
                NavEvent::Restored(3),
                NavEvent::Restored(4),
                NavEvent::Control(Directive::Hide),
            ]
        );
        assert_eq!(nav.state().visible(), &[0, 1, 2, 3, 4]);
    }

    #[test]
    fn minimum_counts_visible_items_only() {
        let options = MenuOptions {
            min_items: Some(2),
            ..Default::default()
        };
        let config = MenuConfiguration::from_options(options, Hooks::new());
        let mut nav = PriorityNav::attach(anchors(), config).unwrap();
        assert!(!nav.is_at_minimum());
        // 260 wide: 600, 480, 360 overflow; two items stay.
        let _ = nav.on_load(&row(260.0));
        assert_eq!(nav.state().visible(), &[0, 1]);
        assert!(nav.is_at_minimum());
    }

    #[test]
    fn breakpoints_are_exposed() {
        let nav = PriorityNav::attach(anchors(), MenuConfiguration::default()).unwrap();
        assert!(!nav.is_breakpoint(300.0));
        assert!(nav.is_breakpoint(301.0));
        assert_eq!(nav.active_breakpoint(1024.0), Some("large"));
    }

    #[test]
    fn vertical_configuration_drives_the_engine() {
        let attrs = MenuOptions::from_attributes([("data-direction", "vertical")]);
        let config = MenuConfiguration::resolve(attrs, MenuOptions::default(), Hooks::new());
        let nav = PriorityNav::attach(anchors(), config).unwrap();
        assert_eq!(nav.engine().direction(), Direction::Vertical);
    }

    #[test]
    fn detach_returns_items_in_priority_order() {
        let mut nav = PriorityNav::attach(anchors(), MenuConfiguration::default()).unwrap();
        let _ = nav.on_load(&row(300.0));
        let a = nav.detach();
        assert_eq!(a.items, vec![0, 1, 2, 3, 4]);
        assert_eq!(a.toggle, Some("more"));
        let debug = alloc::format!("{:?}", PriorityNav::attach(a, MenuConfiguration::default()));
        assert!(debug.contains("PriorityNav"));
    }

    #[test]
    fn orientation_change_can_overshoot_until_the_next_resize() {
        let mut nav = PriorityNav::attach(anchors(), MenuConfiguration::default()).unwrap();
        let _ = nav.on_load(&row(300.0));
        assert_eq!(nav.state().extents(), &[600.0, 480.0, 360.0]);

        let p = row(450.0);
        let events = nav.on_orientation_change(&p);
        assert_eq!(events, [NavEvent::Restored(2), NavEvent::Restored(3)]);
        assert_eq!(nav.engine().occupied(&p), 480.0);
        assert_eq!(nav.engine().available(&p), 430.0);

        let events = nav.on_resize(&p);
        assert_eq!(events, [NavEvent::Hidden(3)]);
        assert_eq!(nav.state().visible(), &[0, 1, 2]);
        assert!(nav.engine().occupied(&p) <= nav.engine().available(&p));
    }

    #[test]
    fn debug_lists_installed_hooks() {
        let config =
            MenuConfiguration::from_options(MenuOptions::default(), Hooks::new().on_resize(|| {}));
        let nav = PriorityNav::attach(anchors(), config).unwrap();
        let debug = alloc::format!("{nav:?}");
        assert!(debug.contains("hooks: {Resize}"), "{debug}");
    }
}
