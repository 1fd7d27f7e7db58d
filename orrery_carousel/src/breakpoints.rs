// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

/// Maps a viewport width to a slides-per-view count.
///
/// Each entry applies from its minimum width upward until the next entry
/// takes over. Widths below the first entry use the base value.
#[derive(Clone, Debug, PartialEq)]
pub struct Breakpoints {
    base: f64,
    // Sorted by minimum width, no duplicate widths.
    entries: Vec<(f64, f64)>,
}

impl Breakpoints {
    /// Creates a table that always answers `base`.
    #[must_use]
    pub fn new(base: f64) -> Self {
        Self {
            base,
            entries: Vec::new(),
        }
    }

    /// The desktop table: `1.5` below 640, then `2`, `2.5` from 768 and `3` from 1024.
    #[must_use]
    pub fn desktop() -> Self {
        Self::new(1.5)
            .with(640.0, 2.0)
            .with(768.0, 2.5)
            .with(1024.0, 3.0)
    }

    /// The mobile table: two cards at every width.
    #[must_use]
    pub fn mobile() -> Self {
        Self::new(2.0)
    }

    /// Adds or replaces the entry starting at `min_width`.
    #[must_use]
    pub fn with(mut self, min_width: f64, slides_per_view: f64) -> Self {
        self.insert(min_width, slides_per_view);
        self
    }

    /// Adds or replaces the entry starting at `min_width`.
    pub fn insert(&mut self, min_width: f64, slides_per_view: f64) {
        match self
            .entries
            .binary_search_by(|(width, _)| width.total_cmp(&min_width))
        {
            Ok(idx) => self.entries[idx].1 = slides_per_view,
            Err(idx) => self.entries.insert(idx, (min_width, slides_per_view)),
        }
    }

    /// Returns the value used below the first entry.
    #[must_use]
    pub fn base(&self) -> f64 {
        self.base
    }

    /// Returns the entries as `(min_width, slides_per_view)`, sorted by width.
    #[must_use]
    pub fn entries(&self) -> &[(f64, f64)] {
        &self.entries
    }

    /// Returns the slides per view for a viewport `width` wide.
    #[must_use]
    pub fn slides_per_view_for(&self, width: f64) -> f64 {
        self.entries
            .iter()
            .rev()
            .find(|(min_width, _)| width >= *min_width)
            .map_or(self.base, |&(_, spv)| spv)
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self::desktop()
    }
}

#[cfg(test)]
mod tests {
    use super::Breakpoints;

    #[test]
    fn desktop_table_steps_up_with_width() {
        let table = Breakpoints::desktop();
        assert_eq!(table.slides_per_view_for(320.0), 1.5);
        assert_eq!(table.slides_per_view_for(640.0), 2.0);
        assert_eq!(table.slides_per_view_for(767.9), 2.0);
        assert_eq!(table.slides_per_view_for(768.0), 2.5);
        assert_eq!(table.slides_per_view_for(1440.0), 3.0);
    }

    #[test]
    fn mobile_table_is_flat() {
        let table = Breakpoints::mobile();
        assert_eq!(table.slides_per_view_for(0.0), 2.0);
        assert_eq!(table.slides_per_view_for(2000.0), 2.0);
    }

    #[test]
    fn insert_keeps_entries_sorted_and_replaces_duplicates() {
        let table = Breakpoints::new(1.0)
            .with(900.0, 3.0)
            .with(300.0, 2.0)
            .with(900.0, 4.0);
        assert_eq!(table.entries(), &[(300.0, 2.0), (900.0, 4.0)]);
    }
}
