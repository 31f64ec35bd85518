// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overflow engine: keeps the visible/hidden partition consistent with available space.
//!
//! ## Update
//!
//! Each step of [`OverflowEngine::update`] measures the visible list's
//! [`occupied`](crate::measure::occupied) extent against the
//! [`available`](crate::measure::available) extent, then:
//!
//! 1. If the list overflows, pushes the last visible item, recording the
//!    occupied extent measured just before the push.
//! 2. Otherwise, if the available extent is larger than the extent recorded by
//!    the most recent push, pops that item back. Once nothing is overflowed the
//!    control is hidden.
//! 3. While anything is overflowed the control is shown.
//! 4. Measures again. Another step follows after a pop, or while the list
//!    still overflows.
//!
//! Showing or hiding the control changes the available extent, so every
//! decision works on fresh measurements rather than values captured earlier.
//!
//! ## Termination
//!
//! Measurements are fixed during one call, so each item leaves and returns at
//! most once. Steps are capped at `2 * item_count + 1`; hitting the cap is
//! logged and the call returns with whatever state it reached.
//!
//! ## Refresh
//!
//! [`OverflowEngine::refresh`] handles large, non-monotonic space changes such
//! as an orientation flip: it pops items back while the container has room for
//! more than the list occupies, then closes the panel if nothing is left hidden.

use alloc::vec;
use alloc::vec::Vec;

use crate::measure::{self, ExtentProvider};
use crate::state::{Moved, OverflowState};
use crate::toggle::ToggleController;
use crate::types::{Direction, Directive, NavEvent};

/// Priority navigation engine for one menu instance.
///
/// Owns the [`OverflowState`] and the [`ToggleController`]; nothing else
/// mutates them. Entry points return the [`NavEvent`]s the host must mirror,
/// in the order they happened.
#[derive(Clone, Debug, PartialEq)]
pub struct OverflowEngine<K> {
    direction: Direction,
    state: OverflowState<K>,
    toggle: ToggleController,
}

impl<K: Copy> OverflowEngine<K> {
    /// Create an engine with every item visible, in priority order.
    pub fn new(direction: Direction, items: impl IntoIterator<Item = K>) -> Self {
        Self {
            direction,
            state: OverflowState::new(items),
            toggle: ToggleController::new(),
        }
    }

    /// Layout direction.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Current partition.
    pub fn state(&self) -> &OverflowState<K> {
        &self.state
    }

    /// Consume the engine, keeping only its partition.
    pub fn into_state(self) -> OverflowState<K> {
        self.state
    }

    /// Current toggle state.
    pub fn toggle_controller(&self) -> &ToggleController {
        &self.toggle
    }

    /// Extent the visible list may occupy right now.
    pub fn available(&self, provider: &impl ExtentProvider<K>) -> f64 {
        measure::available(self.direction, provider, self.toggle.is_active())
    }

    /// Extent the visible list occupies right now.
    pub fn occupied(&self, provider: &impl ExtentProvider<K>) -> f64 {
        measure::occupied(self.direction, provider, self.state.visible())
    }

    /// Move items between the visible and hidden lists until the visible list
    /// fits and nothing more can come back.
    pub fn update(&mut self, provider: &impl ExtentProvider<K>) -> Vec<NavEvent<K>> {
        let mut events = Vec::new();
        self.update_into(provider, &mut events);
        events
    }

    /// Pop items back while there is room for more than the list occupies.
    pub fn refresh(&mut self, provider: &impl ExtentProvider<K>) -> Vec<NavEvent<K>> {
        let mut events = Vec::new();
        self.refresh_into(provider, &mut events);
        events
    }

    /// Invert the hidden panel.
    pub fn toggle(&mut self) -> Directive {
        self.toggle.toggle()
    }

    /// Like [`toggle`](Self::toggle), as an event list.
    pub fn toggle_events(&mut self) -> Vec<NavEvent<K>> {
        vec![NavEvent::Control(self.toggle())]
    }

    /// Hide the control and close its panel if nothing is overflowed.
    pub fn close_empty_hidden_menu(&mut self) -> Vec<NavEvent<K>> {
        let mut events = Vec::new();
        self.close_empty_into(&mut events);
        events
    }

    pub(crate) fn update_into(
        &mut self,
        provider: &impl ExtentProvider<K>,
        events: &mut Vec<NavEvent<K>>,
    ) {
        let bound = 2 * self.state.item_count() + 1;
        for _ in 0..bound {
            if !self.update_step(provider, events) {
                return;
            }
        }
        log::warn!("priority nav: update stopped after {bound} steps without converging");
    }

    pub(crate) fn refresh_into(
        &mut self,
        provider: &impl ExtentProvider<K>,
        events: &mut Vec<NavEvent<K>>,
    ) {
        // Each pop shrinks the stack, so this runs at most `len` times.
        while !self.state.is_empty() && self.available(provider) > self.occupied(provider) {
            self.pop(events);
        }
        self.close_empty_into(events);
    }

    pub(crate) fn close_empty_into(&mut self, events: &mut Vec<NavEvent<K>>) {
        if self.state.is_empty() {
            emit(events, self.toggle.hide());
            emit(events, self.toggle.close());
        }
    }

    /// One level of the update recursion. Returns true when another step is due.
    fn update_step(
        &mut self,
        provider: &impl ExtentProvider<K>,
        events: &mut Vec<NavEvent<K>>,
    ) -> bool {
        let occupied = self.occupied(provider);
        let available = self.available(provider);
        let mut popped = false;

        if occupied > available {
            match self.state.push_overflow(occupied) {
                Ok(item) => events.push(NavEvent::Hidden(item)),
                Err(err) => {
                    // Nothing visible is left; the list cannot shrink further.
                    log::debug!("priority nav: {err}");
                    return false;
                }
            }
        } else {
            if let Some(top) = self.state.top()
                && available > top
            {
                self.pop(events);
                popped = true;
            }
            if self.state.is_empty() {
                emit(events, self.toggle.hide());
            }
        }

        if !self.state.is_empty() {
            emit(events, self.toggle.show());
        }

        popped || self.occupied(provider) > self.available(provider)
    }

    fn pop(&mut self, events: &mut Vec<NavEvent<K>>) {
        let Moved { item, .. } = self.state.pop_overflow();
        events.push(NavEvent::Restored(item));
        self.close_empty_into(events);
    }
}

fn emit<K>(events: &mut Vec<NavEvent<K>>, directive: Option<Directive>) {
    events.extend(directive.map(NavEvent::Control));
}
