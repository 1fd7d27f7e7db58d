// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use orrery_carousel::Breakpoints;
use orrery_navigation::WrapMode;
use orrery_ring::RingLayout;

/// Construction-time settings for a [`Timeline`](crate::Timeline).
#[derive(Clone, Debug, PartialEq)]
pub struct TimelineConfig {
    /// Circle the period points are laid out on, and the anchor angle.
    pub ring: RingLayout,
    /// Stepping policy at the ends of the period sequence.
    pub wrap_mode: WrapMode,
    /// Width to slides-per-view table for the event carousel.
    pub breakpoints: Breakpoints,
    /// Gap between event cards.
    pub space_between: f64,
    /// Initial width of the event carousel viewport.
    pub viewport_width: f64,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            ring: RingLayout::default(),
            wrap_mode: WrapMode::Clamp,
            breakpoints: Breakpoints::desktop(),
            space_between: 30.0,
            viewport_width: 1024.0,
        }
    }
}

impl TimelineConfig {
    /// The compact layout: two cards at every width.
    #[must_use]
    pub fn mobile() -> Self {
        Self {
            breakpoints: Breakpoints::mobile(),
            viewport_width: 320.0,
            ..Self::default()
        }
    }

    /// Sets the ring layout.
    #[must_use]
    pub fn with_ring(mut self, ring: RingLayout) -> Self {
        self.ring = ring;
        self
    }

    /// Sets the stepping policy.
    #[must_use]
    pub fn with_wrap_mode(mut self, wrap_mode: WrapMode) -> Self {
        self.wrap_mode = wrap_mode;
        self
    }

    /// Sets the carousel breakpoint table.
    #[must_use]
    pub fn with_breakpoints(mut self, breakpoints: Breakpoints) -> Self {
        self.breakpoints = breakpoints;
        self
    }

    /// Sets the initial carousel viewport width.
    #[must_use]
    pub fn with_viewport_width(mut self, viewport_width: f64) -> Self {
        self.viewport_width = viewport_width;
        self
    }
}
