// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type shared by the crate.

use alloc::string::String;

use crate::types::Anchor;

/// Result alias with [`Error`] as the default error type.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors reported by priority navigation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An overflow pop was requested while nothing is overflowed.
    ///
    /// Correct engine logic never produces this.
    #[error("overflow stack is empty")]
    EmptyStack,

    /// An overflow push was requested while no item is visible.
    #[error("no visible item left to overflow")]
    NoVisibleItems,

    /// A structural element is absent, so the menu cannot run.
    #[error("missing {0}")]
    MissingAnchor(Anchor),

    /// A direction string was neither `horizontal` nor `vertical`.
    #[error("invalid direction `{0}`, expected `horizontal` or `vertical`")]
    InvalidDirection(String),

    /// A numeric attribute could not be parsed.
    #[error("invalid value `{value}` for attribute `{name}`")]
    InvalidAttribute {
        /// Attribute name.
        name: String,
        /// Raw attribute value.
        value: String,
    },
}
