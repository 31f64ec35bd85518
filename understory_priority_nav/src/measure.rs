// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Extent provider seam and axis-aware measurements.
//!
//! ## Overview
//!
//! The engine never computes layout. It asks an [`ExtentProvider`] for the
//! current sizes of the container, the toggle control, an optional trailing
//! element, and the list formed by the currently visible items, then reduces
//! them to two numbers along the menu [`Direction`]:
//!
//! - [`available`]: the extent the visible list may occupy.
//! - [`occupied`]: the extent the visible list currently occupies.
//!
//! Providers must be synchronous and side-effect free; the engine measures
//! again after every move.
//!
//! [`StackLayout`] is a ready-made provider for hosts that know each item's
//! size and lay items out back to back.

use kurbo::Size;

use crate::types::Direction;

/// Spacing unit reserved below a vertical menu's trailing element.
pub const VERTICAL_SPACING: f64 = 1.0;

/// Source of the sizes the engine measures against.
///
/// `K` is the item handle type. Sizes are two dimensional; the engine picks
/// the component matching the menu [`Direction`].
pub trait ExtentProvider<K> {
    /// Size of the container that hosts the visible list.
    fn container(&self) -> Size;

    /// Size of the toggle control.
    fn toggle(&self) -> Size;

    /// Size of the element trailing a vertical menu.
    ///
    /// Only consulted for [`Direction::Vertical`].
    fn trailing(&self) -> Size {
        Size::ZERO
    }

    /// Size of the visible list when it holds exactly `visible`, in order.
    fn list(&self, visible: &[K]) -> Size;
}

impl<K, P: ExtentProvider<K> + ?Sized> ExtentProvider<K> for &P {
    fn container(&self) -> Size {
        (**self).container()
    }

    fn toggle(&self) -> Size {
        (**self).toggle()
    }

    fn trailing(&self) -> Size {
        (**self).trailing()
    }

    fn list(&self, visible: &[K]) -> Size {
        (**self).list(visible)
    }
}

/// Extent the visible list may occupy.
///
/// Horizontal: the container width. Vertical: the container height minus the
/// trailing element and one [`VERTICAL_SPACING`] unit. Either way the toggle
/// control's extent is subtracted while it is `toggle_active`.
pub fn available<K>(
    direction: Direction,
    provider: &impl ExtentProvider<K>,
    toggle_active: bool,
) -> f64 {
    let container = direction.extent(provider.container());
    let menu = match direction {
        Direction::Horizontal => container,
        Direction::Vertical => {
            container - direction.extent(provider.trailing()) - VERTICAL_SPACING
        }
    };
    if toggle_active {
        menu - direction.extent(provider.toggle())
    } else {
        menu
    }
}

/// Extent the visible list currently occupies.
pub fn occupied<K>(direction: Direction, provider: &impl ExtentProvider<K>, visible: &[K]) -> f64 {
    direction.extent(provider.list(visible))
}

/// A provider that stacks item sizes back to back along one axis.
///
/// The list extent is the sum of item extents plus `gap` between neighbors;
/// its cross extent is the largest item's.
pub struct StackLayout<F> {
    /// Axis the items are stacked along.
    pub direction: Direction,
    /// Container size.
    pub container: Size,
    /// Toggle control size.
    pub toggle: Size,
    /// Trailing element size (vertical menus).
    pub trailing: Size,
    /// Space between neighboring items.
    pub gap: f64,
    /// Size of a single item.
    pub item_size: F,
}

impl<F> core::fmt::Debug for StackLayout<F> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StackLayout")
            .field("direction", &self.direction)
            .field("container", &self.container)
            .field("toggle", &self.toggle)
            .field("trailing", &self.trailing)
            .field("gap", &self.gap)
            .finish_non_exhaustive()
    }
}

impl<F> StackLayout<F> {
    /// Create a layout with no toggle, trailing element, or gap.
    pub fn new(direction: Direction, container: Size, item_size: F) -> Self {
        Self {
            direction,
            container,
            toggle: Size::ZERO,
            trailing: Size::ZERO,
            gap: 0.0,
            item_size,
        }
    }

    /// Set the toggle control size.
    pub fn with_toggle(mut self, toggle: Size) -> Self {
        self.toggle = toggle;
        self
    }

    /// Set the trailing element size.
    pub fn with_trailing(mut self, trailing: Size) -> Self {
        self.trailing = trailing;
        self
    }

    /// Set the gap between neighboring items.
    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }
}

impl<K, F: Fn(&K) -> Size> ExtentProvider<K> for StackLayout<F> {
    fn container(&self) -> Size {
        self.container
    }

    fn toggle(&self) -> Size {
        self.toggle
    }

    fn trailing(&self) -> Size {
        self.trailing
    }

    fn list(&self, visible: &[K]) -> Size {
        let mut main = 0.0;
        let mut cross = 0.0_f64;
        for (i, item) in visible.iter().enumerate() {
            let size = (self.item_size)(item);
            if i > 0 {
                main += self.gap;
            }
            main += self.direction.extent(size);
            cross = cross.max(self.direction.cross_extent(size));
        }
        self.direction.pack(main, cross)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(_: &u32) -> Size {
        Size::new(120.0, 30.0)
    }

    #[test]
    fn horizontal_available_subtracts_active_toggle() {
        let p = StackLayout::new(Direction::Horizontal, Size::new(500.0, 40.0), fixed)
            .with_toggle(Size::new(20.0, 40.0));
        assert_eq!(available::<u32>(Direction::Horizontal, &p, false), 500.0);
        assert_eq!(available::<u32>(Direction::Horizontal, &p, true), 480.0);
    }

    #[test]
    fn vertical_available_reserves_trailing_and_spacing() {
        let p = StackLayout::new(Direction::Vertical, Size::new(200.0, 400.0), fixed)
            .with_toggle(Size::new(200.0, 30.0))
            .with_trailing(Size::new(200.0, 49.0));
        assert_eq!(available::<u32>(Direction::Vertical, &p, false), 350.0);
        assert_eq!(available::<u32>(Direction::Vertical, &p, true), 320.0);
    }

    #[test]
    fn stack_sums_main_axis_and_maxes_cross_axis() {
        let p = StackLayout::new(Direction::Horizontal, Size::ZERO, |k: &u32| {
            Size::new(f64::from(*k) * 10.0, f64::from(*k))
        })
        .with_gap(5.0);
        assert_eq!(p.list(&[1, 2, 3]), Size::new(70.0, 3.0));
        assert_eq!(p.list(&[]), Size::ZERO);
        assert_eq!(occupied(Direction::Horizontal, &p, &[4]), 40.0);
    }

    #[test]
    fn vertical_stack_uses_heights() {
        let p = StackLayout::new(Direction::Vertical, Size::ZERO, fixed);
        assert_eq!(occupied(Direction::Vertical, &p, &[1, 2]), 60.0);
        assert_eq!(p.list(&[1_u32, 2]).width, 120.0);
    }
}
