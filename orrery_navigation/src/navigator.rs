// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// How stepping behaves at either end of the sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum WrapMode {
    /// Stepping past either end is a no-op.
    #[default]
    Clamp,
    /// Stepping past the last item returns to the first, and vice versa.
    ///
    /// Kept for hosts that still present the older wrap-around pager.
    Cycle,
}

/// The active index together with the sequence length.
///
/// For a non-empty sequence `active < total` always holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct NavigationState {
    /// Index of the active item.
    pub active: usize,
    /// Number of items in the sequence.
    pub total: usize,
}

/// Tracks the active item of a borrowed, ordered sequence.
///
/// The sequence is never copied or mutated. Every derived value is computed
/// from `(active, items)` on each call.
///
/// A [`revision`](Self::revision) counter is bumped whenever the active index
/// or the sequence changes, so presentation code can cheaply tell whether a
/// re-render is due.
#[derive(Clone, Debug)]
pub struct PeriodNavigator<'a, T> {
    items: &'a [T],
    active: usize,
    wrap_mode: WrapMode,
    revision: u64,
}

impl<'a, T> PeriodNavigator<'a, T> {
    /// Creates a navigator over `items` with the first item active.
    #[must_use]
    pub fn new(items: &'a [T]) -> Self {
        Self {
            items,
            active: 0,
            wrap_mode: WrapMode::Clamp,
            revision: 0,
        }
    }

    /// Sets the wrap policy, consuming and returning the navigator.
    #[must_use]
    pub fn with_wrap_mode(mut self, mode: WrapMode) -> Self {
        self.wrap_mode = mode;
        self
    }

    /// Sets the wrap policy.
    pub fn set_wrap_mode(&mut self, mode: WrapMode) {
        self.wrap_mode = mode;
    }

    /// Returns the wrap policy.
    #[must_use]
    pub fn wrap_mode(&self) -> WrapMode {
        self.wrap_mode
    }

    /// Returns the borrowed sequence.
    #[must_use]
    pub fn items(&self) -> &'a [T] {
        self.items
    }

    /// Replaces the sequence, re-clamping the active index into range.
    ///
    /// An empty sequence leaves the active index at `0`.
    pub fn set_items(&mut self, items: &'a [T]) {
        let same_slice = core::ptr::eq(self.items, items);
        self.items = items;
        let clamped = self.active.min(items.len().saturating_sub(1));
        if !same_slice || clamped != self.active {
            self.active = clamped;
            self.bump_revision();
        }
    }

    /// Returns the index of the active item.
    #[must_use]
    pub fn active(&self) -> usize {
        self.active
    }

    /// Returns the number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the sequence has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the active index and length as one value.
    #[must_use]
    pub fn state(&self) -> NavigationState {
        NavigationState {
            active: self.active,
            total: self.items.len(),
        }
    }

    /// Returns the active item, or `None` for an empty sequence.
    #[must_use]
    pub fn active_item(&self) -> Option<&'a T> {
        self.items.get(self.active)
    }

    /// Returns `true` if the first item is active.
    #[must_use]
    pub fn is_first(&self) -> bool {
        self.active == 0
    }

    /// Returns `true` if the last item is active.
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.active + 1 == self.items.len()
    }

    /// Returns how far along the sequence the active item sits, in `[0, 100]`.
    ///
    /// Sequences of zero or one item report `0`.
    #[must_use]
    pub fn progress(&self) -> f64 {
        let len = self.items.len();
        if len <= 1 {
            return 0.0;
        }
        let step = 100.0 / (len - 1) as f64;
        self.active as f64 * step
    }

    /// Makes `index` active if it is in range.
    ///
    /// Out-of-range indices are ignored. Returns `true` if the active index
    /// changed.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.items.len() || index == self.active {
            return false;
        }
        self.active = index;
        self.bump_revision();
        true
    }

    /// Steps to the following item.
    ///
    /// At the last item this is a no-op under [`WrapMode::Clamp`] and moves to
    /// the first item under [`WrapMode::Cycle`]. Returns `true` if the active
    /// index changed.
    pub fn next(&mut self) -> bool {
        let len = self.items.len();
        match self.wrap_mode {
            WrapMode::Clamp => self.select(self.active + 1),
            WrapMode::Cycle if len > 0 => self.select((self.active + 1) % len),
            WrapMode::Cycle => false,
        }
    }

    /// Steps to the preceding item.
    ///
    /// At the first item this is a no-op under [`WrapMode::Clamp`] and moves to
    /// the last item under [`WrapMode::Cycle`]. Returns `true` if the active
    /// index changed.
    pub fn prev(&mut self) -> bool {
        match (self.active.checked_sub(1), self.wrap_mode) {
            (Some(index), _) => self.select(index),
            (None, WrapMode::Clamp) => false,
            (None, WrapMode::Cycle) => self.select(self.items.len().saturating_sub(1)),
        }
    }

    /// Returns the change counter.
    ///
    /// It starts at `0` and is bumped only by calls that changed the active
    /// index or replaced the sequence.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
