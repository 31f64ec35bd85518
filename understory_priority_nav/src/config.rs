// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Menu configuration: options, breakpoints, lifecycle hooks, and their precedence.
//!
//! ## Precedence
//!
//! A [`MenuConfiguration`] is assembled once from three layers, lowest first:
//!
//! 1. Built-in defaults (see [`MenuConfiguration::default`]).
//! 2. Options read from the menu element's attributes ([`MenuOptions::from_attributes`]).
//! 3. Options passed explicitly by the caller.
//!
//! ```
//! use understory_priority_nav::config::{MenuConfiguration, MenuOptions, Hooks};
//! use understory_priority_nav::types::Direction;
//!
//! let attrs = MenuOptions::from_attributes([("data-direction", "vertical"), ("data-min-items", "3")]);
//! let caller = MenuOptions { min_items: Some(2), ..Default::default() };
//! let config = MenuConfiguration::resolve(attrs, caller, Hooks::new());
//!
//! assert_eq!(config.direction(), Direction::Vertical);
//! assert_eq!(config.min_items(), 2);
//! assert_eq!(config.breakpoint(), 300);
//! ```

use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

use crate::error::{Error, Result};
use crate::types::Direction;

/// Attribute carrying the menu direction.
pub const ATTR_DIRECTION: &str = "data-direction";
/// Attribute carrying the start breakpoint.
pub const ATTR_START_BREAKPOINT: &str = "data-start-breakpoint";
/// Attribute carrying the minimum item count.
pub const ATTR_MIN_ITEMS: &str = "data-min-items";

/// Default start breakpoint in pixels.
pub const DEFAULT_BREAKPOINT: u32 = 300;
/// Default minimum number of items kept visible.
pub const DEFAULT_MIN_ITEMS: usize = 1;

/// Named pixel thresholds.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Breakpoints(BTreeMap<String, u32>);

impl Default for Breakpoints {
    fn default() -> Self {
        [
            ("small", 0),
            ("medium", 640),
            ("large", 1024),
            ("xlarge", 1200),
            ("xxlarge", 1440),
        ]
        .into_iter()
        .collect()
    }
}

impl<S: Into<String>> FromIterator<(S, u32)> for Breakpoints {
    fn from_iter<I: IntoIterator<Item = (S, u32)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl Breakpoints {
    /// An empty table.
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    /// Threshold for `name`.
    pub fn get(&self, name: &str) -> Option<u32> {
        self.0.get(name).copied()
    }

    /// Set the threshold for `name`, returning the previous one.
    pub fn insert(&mut self, name: impl Into<String>, px: u32) -> Option<u32> {
        self.0.insert(name.into(), px)
    }

    /// Name of the largest threshold not above `width`.
    ///
    /// Ties resolve to the alphabetically first name.
    pub fn active(&self, width: f64) -> Option<&str> {
        let mut best: Option<(&str, u32)> = None;
        for (name, &px) in &self.0 {
            if f64::from(px) > width {
                continue;
            }
            if best.is_none_or(|(_, b)| px > b) {
                best = Some((name.as_str(), px));
            }
        }
        best.map(|(name, _)| name)
    }

    /// Iterate `(name, threshold)` pairs by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.0.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// Number of named thresholds.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if no thresholds are defined.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One layer of recognized options; `None` leaves the lower layer in place.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct MenuOptions {
    /// Layout direction.
    pub direction: Option<Direction>,
    /// Start breakpoint in pixels.
    pub breakpoint: Option<u32>,
    /// Named breakpoint table.
    pub breakpoints: Option<Breakpoints>,
    /// Minimum number of items kept visible.
    pub min_items: Option<usize>,
}

impl MenuOptions {
    /// Read options from element attributes, ignoring values that do not parse.
    ///
    /// Unknown attributes and empty values are skipped.
    pub fn from_attributes<'a>(attrs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut out = Self::default();
        for (name, value) in attrs {
            if let Err(err) = out.apply_attribute(name, value) {
                log::warn!("priority nav: ignoring attribute: {err}");
            }
        }
        out
    }

    /// Read options from element attributes, failing on the first bad value.
    pub fn try_from_attributes<'a>(
        attrs: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self> {
        let mut out = Self::default();
        for (name, value) in attrs {
            out.apply_attribute(name, value)?;
        }
        Ok(out)
    }

    /// Overlay `over` on `self`; options set in `over` win.
    pub fn merge(self, over: Self) -> Self {
        Self {
            direction: over.direction.or(self.direction),
            breakpoint: over.breakpoint.or(self.breakpoint),
            breakpoints: over.breakpoints.or(self.breakpoints),
            min_items: over.min_items.or(self.min_items),
        }
    }

    fn apply_attribute(&mut self, name: &str, value: &str) -> Result<()> {
        if value.is_empty() {
            return Ok(());
        }
        match name {
            ATTR_DIRECTION => self.direction = Some(value.parse()?),
            ATTR_START_BREAKPOINT => self.breakpoint = Some(parse_number(name, value)?),
            ATTR_MIN_ITEMS => self.min_items = Some(parse_number(name, value)?),
            _ => {}
        }
        Ok(())
    }
}

fn parse_number<T: core::str::FromStr>(name: &str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| Error::InvalidAttribute {
        name: name.to_string(),
        value: value.to_string(),
    })
}

/// Points in a menu's life where a hook may run.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Lifecycle {
    /// Before the first update.
    Load,
    /// After the first update completed.
    Init,
    /// The hidden panel opened.
    HiddenMenuOpen,
    /// The hidden panel closed.
    HiddenMenuClose,
    /// The toggle control was activated.
    HiddenMenuToggle,
    /// A resize was handled.
    Resize,
    /// An item moved between the visible and hidden lists.
    ItemMove,
}

impl Lifecycle {
    const COUNT: usize = 7;

    /// Every lifecycle point, in declaration order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Load,
        Self::Init,
        Self::HiddenMenuOpen,
        Self::HiddenMenuClose,
        Self::HiddenMenuToggle,
        Self::Resize,
        Self::ItemMove,
    ];

    const fn slot(self) -> usize {
        self as usize
    }
}

type Hook = Box<dyn FnMut()>;

/// Lifecycle callbacks. Unset hooks are no-ops.
#[derive(Default)]
pub struct Hooks {
    slots: [Option<Hook>; Lifecycle::COUNT],
}

impl core::fmt::Debug for Hooks {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let mut set = f.debug_set();
        for point in Lifecycle::ALL {
            if self.slots[point.slot()].is_some() {
                set.entry(&point);
            }
        }
        set.finish()
    }
}

impl Hooks {
    /// No hooks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install `f` at `point`, replacing any previous hook there.
    pub fn with(mut self, point: Lifecycle, f: impl FnMut() + 'static) -> Self {
        self.slots[point.slot()] = Some(Box::new(f));
        self
    }

    /// Install the `onLoad` hook.
    pub fn on_load(self, f: impl FnMut() + 'static) -> Self {
        self.with(Lifecycle::Load, f)
    }

    /// Install the `onInit` hook.
    pub fn on_init(self, f: impl FnMut() + 'static) -> Self {
        self.with(Lifecycle::Init, f)
    }

    /// Install the `onHiddenMenuOpen` hook.
    pub fn on_hidden_menu_open(self, f: impl FnMut() + 'static) -> Self {
        self.with(Lifecycle::HiddenMenuOpen, f)
    }

    /// Install the `onHiddenMenuClose` hook.
    pub fn on_hidden_menu_close(self, f: impl FnMut() + 'static) -> Self {
        self.with(Lifecycle::HiddenMenuClose, f)
    }

    /// Install the `onHiddenMenuToggle` hook.
    pub fn on_hidden_menu_toggle(self, f: impl FnMut() + 'static) -> Self {
        self.with(Lifecycle::HiddenMenuToggle, f)
    }

    /// Install the `onResize` hook.
    pub fn on_resize(self, f: impl FnMut() + 'static) -> Self {
        self.with(Lifecycle::Resize, f)
    }

    /// Install the `onItemMove` hook.
    pub fn on_item_move(self, f: impl FnMut() + 'static) -> Self {
        self.with(Lifecycle::ItemMove, f)
    }

    /// True if a hook is installed at `point`.
    pub fn is_set(&self, point: Lifecycle) -> bool {
        self.slots[point.slot()].is_some()
    }

    /// Run the hook at `point`, if any.
    pub fn fire(&mut self, point: Lifecycle) {
        if let Some(hook) = &mut self.slots[point.slot()] {
            hook();
        }
    }
}

/// Resolved configuration of one menu. Read-only once built.
#[derive(Debug)]
pub struct MenuConfiguration {
    direction: Direction,
    breakpoint: u32,
    breakpoints: Breakpoints,
    min_items: usize,
    hooks: Hooks,
}

impl Default for MenuConfiguration {
    fn default() -> Self {
        Self {
            direction: Direction::default(),
            breakpoint: DEFAULT_BREAKPOINT,
            breakpoints: Breakpoints::default(),
            min_items: DEFAULT_MIN_ITEMS,
            hooks: Hooks::new(),
        }
    }
}

impl MenuConfiguration {
    /// Defaults, then `attributes`, then `overrides`.
    pub fn resolve(attributes: MenuOptions, overrides: MenuOptions, hooks: Hooks) -> Self {
        let defaults = Self::default();
        let options = attributes.merge(overrides);
        Self {
            direction: options.direction.unwrap_or(defaults.direction),
            breakpoint: options.breakpoint.unwrap_or(defaults.breakpoint),
            breakpoints: options.breakpoints.unwrap_or(defaults.breakpoints),
            min_items: options.min_items.unwrap_or(defaults.min_items),
            hooks,
        }
    }

    /// Defaults overlaid with `options`.
    pub fn from_options(options: MenuOptions, hooks: Hooks) -> Self {
        Self::resolve(MenuOptions::default(), options, hooks)
    }

    /// Layout direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// True for vertical menus.
    pub fn is_vertical(&self) -> bool {
        self.direction == Direction::Vertical
    }

    /// Start breakpoint in pixels.
    pub fn breakpoint(&self) -> u32 {
        self.breakpoint
    }

    /// Named breakpoint table.
    pub fn breakpoints(&self) -> &Breakpoints {
        &self.breakpoints
    }

    /// Minimum number of items kept visible.
    pub fn min_items(&self) -> usize {
        self.min_items
    }

    /// Installed hooks.
    pub fn hooks(&self) -> &Hooks {
        &self.hooks
    }

    pub(crate) fn fire(&mut self, point: Lifecycle) {
        self.hooks.fire(point);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec::Vec;
    use core::cell::Cell;

    #[test]
    fn defaults_match_documented_values() {
        let c = MenuConfiguration::default();
        assert_eq!(c.direction(), Direction::Horizontal);
        assert_eq!(c.breakpoint(), 300);
        assert_eq!(c.min_items(), 1);
        assert!(!c.is_vertical());
        let names: Vec<_> = c.breakpoints().iter().collect();
        assert_eq!(
            names,
            [
                ("large", 1024),
                ("medium", 640),
                ("small", 0),
                ("xlarge", 1200),
                ("xxlarge", 1440),
            ]
        );
    }

    #[test]
    fn attributes_override_defaults_and_caller_overrides_attributes() {
        let attrs = MenuOptions::from_attributes([
            (ATTR_DIRECTION, "vertical"),
            (ATTR_START_BREAKPOINT, "480"),
            (ATTR_MIN_ITEMS, "4"),
        ]);
        let caller = MenuOptions {
            breakpoint: Some(200),
            ..Default::default()
        };
        let c = MenuConfiguration::resolve(attrs, caller, Hooks::new());
        assert_eq!(c.direction(), Direction::Vertical);
        assert_eq!(c.breakpoint(), 200);
        assert_eq!(c.min_items(), 4);
    }

    #[test]
    fn bad_attributes_are_skipped_leniently() {
        let o = MenuOptions::from_attributes([
            (ATTR_DIRECTION, "sideways"),
            (ATTR_MIN_ITEMS, "many"),
            (ATTR_START_BREAKPOINT, ""),
            ("data-unrelated", "x"),
        ]);
        assert_eq!(o, MenuOptions::default());
    }

    #[test]
    fn strict_attribute_parsing_reports_the_culprit() {
        let err = MenuOptions::try_from_attributes([(ATTR_MIN_ITEMS, "-1")]).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidAttribute {
                name: ATTR_MIN_ITEMS.into(),
                value: "-1".into(),
            }
        );
        let ok = MenuOptions::try_from_attributes([(ATTR_START_BREAKPOINT, " 768 ")]).unwrap();
        assert_eq!(ok.breakpoint, Some(768));
    }

    #[test]
    fn active_breakpoint_is_largest_not_above_width() {
        let b = Breakpoints::default();
        assert_eq!(b.active(0.0), Some("small"));
        assert_eq!(b.active(639.9), Some("small"));
        assert_eq!(b.active(640.0), Some("medium"));
        assert_eq!(b.active(1300.0), Some("xlarge"));
        assert_eq!(b.active(5000.0), Some("xxlarge"));
        assert_eq!(Breakpoints::empty().active(100.0), None);
    }

    #[test]
    fn breakpoint_table_can_be_edited() {
        let mut b = Breakpoints::empty();
        assert!(b.is_empty());
        assert_eq!(b.insert("tablet", 768), None);
        assert_eq!(b.insert("tablet", 800), Some(768));
        assert_eq!(b.get("tablet"), Some(800));
        assert_eq!(b.len(), 1);
    }

    #[test]
    fn hooks_fire_only_where_installed() {
        let count = Rc::new(Cell::new(0));
        let c2 = count.clone();
        let mut hooks = Hooks::new().on_resize(move || c2.set(c2.get() + 1));
        assert!(hooks.is_set(Lifecycle::Resize));
        assert!(!hooks.is_set(Lifecycle::Load));
        hooks.fire(Lifecycle::Load);
        hooks.fire(Lifecycle::Resize);
        hooks.fire(Lifecycle::Resize);
        assert_eq!(count.get(), 2);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn options_deserialize_from_camel_case() {
        let o: MenuOptions =
            serde_json::from_str(r#"{"direction":"vertical","minItems":2,"breakpoints":{"tiny":10}}"#)
                .unwrap();
        assert_eq!(o.direction, Some(Direction::Vertical));
        assert_eq!(o.min_items, Some(2));
        assert_eq!(o.breakpoint, None);
        assert_eq!(o.breakpoints.unwrap().get("tiny"), Some(10));
    }
}
