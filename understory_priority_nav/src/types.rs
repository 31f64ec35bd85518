// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared types: layout direction, visibility directives, emitted events, and anchors.

use core::fmt;
use core::str::FromStr;

use alloc::string::ToString;
use kurbo::Size;

use crate::error::Error;

/// Layout axis of a menu.
///
/// Selects which component of a [`Size`] is the menu's extent.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Direction {
    /// Items flow left to right; extents are widths.
    #[default]
    Horizontal,
    /// Items flow top to bottom; extents are heights.
    Vertical,
}

impl Direction {
    /// The extent of `size` along this axis.
    #[inline]
    pub fn extent(self, size: Size) -> f64 {
        match self {
            Self::Horizontal => size.width,
            Self::Vertical => size.height,
        }
    }

    /// The extent of `size` across this axis.
    #[inline]
    pub fn cross_extent(self, size: Size) -> f64 {
        match self {
            Self::Horizontal => size.height,
            Self::Vertical => size.width,
        }
    }

    /// Build a size from a main-axis and a cross-axis extent.
    #[inline]
    pub fn pack(self, main: f64, cross: f64) -> Size {
        match self {
            Self::Horizontal => Size::new(main, cross),
            Self::Vertical => Size::new(cross, main),
        }
    }

    /// The attribute spelling of this direction.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "horizontal" => Ok(Self::Horizontal),
            "vertical" => Ok(Self::Vertical),
            other => Err(Error::InvalidDirection(other.to_string())),
        }
    }
}

/// Visibility directive for the toggle control and its hidden panel.
///
/// Issued by [`ToggleController`](crate::toggle::ToggleController) only when
/// the corresponding state actually changes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Directive {
    /// Show the toggle control; it now takes part in layout.
    Show,
    /// Hide the toggle control.
    Hide,
    /// Disclose the hidden panel.
    Open,
    /// Close the hidden panel.
    Close,
}

/// A state change the host must mirror.
///
/// Returned in order by the [engine](crate::engine::OverflowEngine) and the
/// [`PriorityNav`](crate::nav::PriorityNav) entry points.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NavEvent<K> {
    /// The item left the visible list and is now first in the hidden list.
    Hidden(K),
    /// The item left the hidden list and is now last in the visible list,
    /// immediately before the toggle control.
    Restored(K),
    /// The toggle control or its panel changed.
    Control(Directive),
}

impl<K> NavEvent<K> {
    /// True for [`Hidden`](Self::Hidden) and [`Restored`](Self::Restored).
    pub fn is_item_move(&self) -> bool {
        matches!(self, Self::Hidden(_) | Self::Restored(_))
    }
}

/// Structural elements a menu needs before it can run.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Anchor {
    /// The primary list holding visible items and the toggle control.
    VisibleList,
    /// The secondary list receiving overflowed items.
    HiddenList,
    /// The disclosure control.
    Toggle,
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::VisibleList => "visible list",
            Self::HiddenList => "hidden list",
            Self::Toggle => "toggle control",
        })
    }
}
