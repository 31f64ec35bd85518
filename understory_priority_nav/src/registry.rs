// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Independent menus keyed by name.
//!
//! A page may carry several priority navigation menus. Each is registered
//! under its own name (for example the value of its `ds-menu` attribute) and
//! owns its own state; nothing is shared between entries.

use alloc::collections::BTreeMap;
use alloc::string::String;

use crate::config::MenuConfiguration;
use crate::nav::{MenuAnchors, PriorityNav};

/// Menus keyed by name.
pub struct NavRegistry<H, K> {
    menus: BTreeMap<String, PriorityNav<H, K>>,
}

impl<H, K> Default for NavRegistry<H, K> {
    fn default() -> Self {
        Self {
            menus: BTreeMap::new(),
        }
    }
}

impl<H: core::fmt::Debug, K: Copy + core::fmt::Debug> core::fmt::Debug for NavRegistry<H, K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_map().entries(self.menus.iter()).finish()
    }
}

impl<H, K: Copy> NavRegistry<H, K> {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind a menu under `name`.
    ///
    /// Returns false and stores nothing if an anchor is missing. A menu already
    /// registered under `name` is replaced.
    pub fn attach(
        &mut self,
        name: impl Into<String>,
        anchors: MenuAnchors<H, K>,
        config: MenuConfiguration,
    ) -> bool {
        let name = name.into();
        let Some(nav) = PriorityNav::attach(anchors, config) else {
            return false;
        };
        if self.menus.insert(name, nav).is_some() {
            log::debug!("priority nav: replaced an existing menu");
        }
        true
    }

    /// Remove the menu registered under `name`, handing back its anchors.
    pub fn detach(&mut self, name: &str) -> Option<MenuAnchors<H, K>> {
        self.menus.remove(name).map(PriorityNav::detach)
    }

    /// The menu registered under `name`.
    pub fn get(&self, name: &str) -> Option<&PriorityNav<H, K>> {
        self.menus.get(name)
    }

    /// The menu registered under `name`, mutably.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut PriorityNav<H, K>> {
        self.menus.get_mut(name)
    }

    /// True if a menu is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.menus.contains_key(name)
    }

    /// Registered names in order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.menus.keys().map(String::as_str)
    }

    /// Every menu, mutably, by name.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (&str, &mut PriorityNav<H, K>)> + '_ {
        self.menus.iter_mut().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of registered menus.
    pub fn len(&self) -> usize {
        self.menus.len()
    }

    /// True if no menu is registered.
    pub fn is_empty(&self) -> bool {
        self.menus.is_empty()
    }
}
