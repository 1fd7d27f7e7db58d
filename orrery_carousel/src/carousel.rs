// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::ops::Range;

// Tolerance for comparing slide-unit positions.
const EPSILON: f64 = 1e-9;

/// How many cards a carousel shows and how far apart they are.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarouselConfig {
    /// Cards visible at once. Fractional values let the next card peek in.
    ///
    /// Non-finite or non-positive values are treated as `1`.
    pub slides_per_view: f64,
    /// Gap between neighbouring cards, in the viewport's units.
    pub space_between: f64,
}

impl CarouselConfig {
    /// Creates a configuration.
    #[must_use]
    pub fn new(slides_per_view: f64, space_between: f64) -> Self {
        Self {
            slides_per_view,
            space_between,
        }
    }
}

impl Default for CarouselConfig {
    /// One and a half cards with a 30 unit gap.
    fn default() -> Self {
        Self::new(1.5, 30.0)
    }
}

/// Snap position of a strip of `len` cards.
///
/// Snap `i` rests with card `i` at the start of the viewport, except the last
/// snap, which rests with the final card flush against the end. Stepping is
/// clamped at both ends.
#[derive(Clone, Debug, PartialEq)]
pub struct Carousel {
    len: usize,
    active: usize,
    config: CarouselConfig,
}

impl Carousel {
    /// Creates a carousel over `len` cards resting at the first snap.
    #[must_use]
    pub fn new(len: usize, config: CarouselConfig) -> Self {
        Self {
            len,
            active: 0,
            config,
        }
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if there are no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> CarouselConfig {
        self.config
    }

    /// Replaces the configuration, keeping the active snap in range.
    pub fn set_config(&mut self, config: CarouselConfig) {
        self.config = config;
        self.clamp_active();
    }

    /// Changes how many cards are visible, keeping the active snap in range.
    pub fn set_slides_per_view(&mut self, slides_per_view: f64) {
        self.config.slides_per_view = slides_per_view;
        self.clamp_active();
    }

    /// Starts over with `len` cards at the first snap.
    pub fn reset(&mut self, len: usize) {
        self.len = len;
        self.active = 0;
    }

    /// Changes the card count, keeping the active snap where possible.
    pub fn set_len(&mut self, len: usize) {
        self.len = len;
        self.clamp_active();
    }

    /// Returns the index of the active snap.
    #[must_use]
    pub fn active(&self) -> usize {
        self.active
    }

    /// Returns the number of snaps. Always at least `1`.
    #[must_use]
    pub fn snap_count(&self) -> usize {
        let max = self.max_position();
        if max <= EPSILON {
            return 1;
        }
        // Whole-card snaps strictly before the end, then the end itself.
        let mut whole = 1;
        while (whole as f64) < max - EPSILON {
            whole += 1;
        }
        whole + 1
    }

    /// Returns `true` at the first snap.
    #[must_use]
    pub fn is_beginning(&self) -> bool {
        self.active == 0
    }

    /// Returns `true` at the last snap.
    #[must_use]
    pub fn is_end(&self) -> bool {
        self.active + 1 >= self.snap_count()
    }

    /// Moves to snap `index`, clamped to the last snap.
    ///
    /// Returns `true` if the active snap changed.
    pub fn slide_to(&mut self, index: usize) -> bool {
        let target = index.min(self.snap_count() - 1);
        if target == self.active {
            return false;
        }
        self.active = target;
        true
    }

    /// Moves to the following snap; a no-op at the end.
    pub fn slide_next(&mut self) -> bool {
        if self.is_end() {
            return false;
        }
        self.slide_to(self.active + 1)
    }

    /// Moves to the preceding snap; a no-op at the beginning.
    pub fn slide_prev(&mut self) -> bool {
        match self.active.checked_sub(1) {
            Some(index) => self.slide_to(index),
            None => false,
        }
    }

    /// Returns the strip position of the active snap, in slide units.
    #[must_use]
    pub fn position(&self) -> f64 {
        (self.active as f64).min(self.max_position())
    }

    /// Returns the furthest the strip can scroll, in slide units.
    #[must_use]
    pub fn max_position(&self) -> f64 {
        (self.len as f64 - self.slides_per_view()).max(0.0)
    }

    /// Returns the indices of cards at least partly visible at the active snap.
    #[must_use]
    pub fn visible_range(&self) -> Range<usize> {
        let start = self.position();
        let end = start + self.slides_per_view();
        let first = floor_index(start).min(self.len);
        let last = ceil_index(end).min(self.len);
        first..last
    }

    /// Returns the width of one card in a viewport `viewport` wide.
    #[must_use]
    pub fn slide_extent(&self, viewport: f64) -> f64 {
        let spv = self.slides_per_view();
        ((viewport - (spv - 1.0) * self.config.space_between) / spv).max(0.0)
    }

    /// Returns the width of all cards and the gaps between them.
    #[must_use]
    pub fn content_extent(&self, viewport: f64) -> f64 {
        if self.len == 0 {
            return 0.0;
        }
        let len = self.len as f64;
        len * self.slide_extent(viewport) + (len - 1.0) * self.config.space_between
    }

    /// Returns how far the strip is translated at snap `index`.
    ///
    /// Indices past the last snap resolve to the last snap.
    #[must_use]
    pub fn offset_for(&self, index: usize, viewport: f64) -> f64 {
        let position = (index as f64).min(self.max_position());
        position * self.stride(viewport)
    }

    /// Returns how far the strip is translated at the active snap.
    #[must_use]
    pub fn offset(&self, viewport: f64) -> f64 {
        self.position() * self.stride(viewport)
    }

    fn stride(&self, viewport: f64) -> f64 {
        self.slide_extent(viewport) + self.config.space_between
    }

    fn slides_per_view(&self) -> f64 {
        let spv = self.config.slides_per_view;
        if spv.is_finite() && spv > 0.0 {
            spv
        } else {
            1.0
        }
    }

    fn clamp_active(&mut self) {
        self.active = self.active.min(self.snap_count() - 1);
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "Positions are finite, non-negative, and bounded by the card count; truncation is a floor"
)]
fn floor_index(position: f64) -> usize {
    position as usize
}

fn ceil_index(position: f64) -> usize {
    let floor = floor_index(position);
    if (floor as f64) < position - EPSILON {
        floor + 1
    } else {
        floor
    }
}
