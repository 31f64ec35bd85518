// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overflow state: the visible/hidden partition and the stack of recorded extents.
//!
//! Items are kept in priority order. Overflow always takes the last visible
//! item and puts it in front of the hidden list, so the hidden list reads in
//! priority order too and returning its first item restores the original order.
//!
//! Every push records one extent and every pop removes one, so the stack length
//! always equals the hidden item count.

use alloc::collections::VecDeque;
use alloc::collections::vec_deque;
use alloc::vec::Vec;

use crate::error::{Error, Result};

/// An item relocated by a push or pop, together with its recorded extent.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Moved<K> {
    /// The relocated item.
    pub item: K,
    /// The extent recorded when the item was overflowed.
    pub extent: f64,
}

/// Visible/hidden partition of a menu's items.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct OverflowState<K> {
    visible: Vec<K>,
    hidden: VecDeque<K>,
    // One entry per hidden item; the top belongs to `hidden[0]`.
    stack: Vec<f64>,
}

impl<K: Copy> OverflowState<K> {
    /// Create a state with every item visible, in priority order.
    pub fn new(items: impl IntoIterator<Item = K>) -> Self {
        Self {
            visible: items.into_iter().collect(),
            hidden: VecDeque::new(),
            stack: Vec::new(),
        }
    }

    /// Overflow the lowest-priority visible item, recording `extent`.
    ///
    /// `extent` is the occupied extent of the visible list measured just before
    /// the push; it later serves as the threshold for bringing the item back.
    ///
    /// Returns [`Error::NoVisibleItems`] when nothing is left to overflow.
    pub fn push_overflow(&mut self, extent: f64) -> Result<K> {
        debug_assert!(extent.is_finite(), "overflow extent must be finite");
        let item = self.visible.pop().ok_or(Error::NoVisibleItems)?;
        self.hidden.push_front(item);
        self.stack.push(extent);
        log::trace!(
            "overflow push: extent={extent}, hidden={}",
            self.hidden.len()
        );
        self.check();
        Ok(item)
    }

    /// Return the highest-priority hidden item to the end of the visible list.
    ///
    /// Returns [`Error::EmptyStack`] when nothing is overflowed.
    pub fn try_pop_overflow(&mut self) -> Result<Moved<K>> {
        let extent = self.stack.pop().ok_or(Error::EmptyStack)?;
        let Some(item) = self.hidden.pop_front() else {
            // Unreachable while the stack and the hidden list stay in lockstep.
            self.stack.push(extent);
            return Err(Error::EmptyStack);
        };
        self.visible.push(item);
        log::trace!("overflow pop: extent={extent}, hidden={}", self.hidden.len());
        self.check();
        Ok(Moved { item, extent })
    }

    /// Like [`try_pop_overflow`](Self::try_pop_overflow), for callers that
    /// have already checked the stack.
    ///
    /// # Panics
    ///
    /// Panics if nothing is overflowed.
    #[track_caller]
    pub fn pop_overflow(&mut self) -> Moved<K> {
        match self.try_pop_overflow() {
            Ok(moved) => moved,
            Err(err) => panic!("pop_overflow: {err}"),
        }
    }

    /// True when nothing is overflowed.
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Number of overflowed items.
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Extent recorded by the most recent push, if any.
    pub fn top(&self) -> Option<f64> {
        self.stack.last().copied()
    }

    /// Recorded extents, oldest push first.
    pub fn extents(&self) -> &[f64] {
        &self.stack
    }

    /// Visible items in priority order.
    pub fn visible(&self) -> &[K] {
        &self.visible
    }

    /// Hidden items in priority order (most recently hidden first).
    pub fn hidden(&self) -> vec_deque::Iter<'_, K> {
        self.hidden.iter()
    }

    /// Total number of items, visible and hidden.
    pub fn item_count(&self) -> usize {
        self.visible.len() + self.hidden.len()
    }

    /// Consume the state, yielding every item in priority order.
    pub fn into_items(self) -> Vec<K> {
        let mut items = self.visible;
        items.extend(self.hidden);
        items
    }

    #[inline]
    fn check(&self) {
        debug_assert_eq!(
            self.stack.len(),
            self.hidden.len(),
            "overflow stack out of step with hidden items"
        );
    }
}
