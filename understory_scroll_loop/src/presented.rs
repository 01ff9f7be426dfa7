// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bookkeeping for items that have already been fully presented.
//!
//! Realized items come and go as the window moves. When an item scrolls back
//! into view, a renderer usually wants to show it immediately instead of
//! replaying a placeholder or fade-in. [`PresentedSet`] remembers which item
//! keys have been fully presented at least once. It is an explicit value owned
//! by the presentation layer for the lifetime of a session, never global
//! state.

use core::hash::Hash;

use hashbrown::HashSet;

/// Set of item keys that have been fully presented before.
#[derive(Clone, Debug)]
pub struct PresentedSet<K> {
    keys: HashSet<K>,
}

impl<K> Default for PresentedSet<K> {
    fn default() -> Self {
        Self {
            keys: HashSet::new(),
        }
    }
}

impl<K: Eq + Hash> PresentedSet<K> {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records that `key` has been fully presented.
    ///
    /// Returns `true` if this is the first time.
    pub fn mark(&mut self, key: K) -> bool {
        self.keys.insert(key)
    }

    /// Returns `true` if `key` has been presented before.
    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.keys.contains(key)
    }

    /// Forgets `key`, for example after its content changed.
    ///
    /// Returns `true` if it was present.
    pub fn forget(&mut self, key: &K) -> bool {
        self.keys.remove(key)
    }

    /// Forgets every key.
    pub fn clear(&mut self) {
        self.keys.clear();
    }

    /// Number of presented keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` if nothing has been presented yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}
