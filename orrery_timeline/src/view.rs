// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::ops::Range;

use orrery_period::{TimelineEvent, TimelinePeriod};
use orrery_ring::RingPoint;

/// Everything an adapter needs to draw a timeline in its current state.
///
/// Built fresh by [`Timeline::view`](crate::Timeline::view); it borrows the
/// period records and never feeds anything back into the timeline.
#[derive(Clone, Debug, PartialEq)]
pub struct TimelineView<'a> {
    /// Index of the active period.
    pub active: usize,
    /// Number of periods.
    pub total: usize,
    /// Position along a linear progress indicator, in `[0, 100]`.
    pub progress: f64,
    /// Whether the first period is active.
    pub is_first: bool,
    /// Whether the last period is active.
    pub is_last: bool,
    /// The period counter and its prev/next buttons.
    pub pagination: Pagination,
    /// The active period.
    pub period: &'a TimelinePeriod,
    /// The ring of period points.
    pub ring: RingView<'a>,
    /// The active period's event cards.
    pub carousel: CarouselView<'a>,
    /// Change counter of the timeline when this view was taken.
    pub revision: u64,
}

impl TimelineView<'_> {
    /// Returns `(start_year, end_year)` of the active period.
    #[must_use]
    pub fn years(&self) -> (i32, i32) {
        self.period.year_span()
    }
}

/// The "current / total" counter with its step buttons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based number of the active period.
    pub current: usize,
    /// Number of periods.
    pub total: usize,
    /// Whether the previous button is disabled.
    pub prev_disabled: bool,
    /// Whether the next button is disabled.
    pub next_disabled: bool,
}

impl fmt::Display for Pagination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.current, self.total)
    }
}

/// The rotating ring of period points.
#[derive(Clone, Debug, PartialEq)]
pub struct RingView<'a> {
    /// Rotation of the whole ring, in degrees clockwise.
    pub container_rotation: f64,
    /// Rotation applied to each point's label so it reads upright.
    pub counter_rotation: f64,
    /// One entry per period, in sequence order.
    pub points: Vec<PointView<'a>>,
}

/// A single period point on the ring.
#[derive(Clone, Debug, PartialEq)]
pub struct PointView<'a> {
    /// Placement before ring rotation.
    pub point: RingPoint,
    /// 1-based number shown inside the point.
    pub number: usize,
    /// Name of the period the point selects.
    pub name: &'a str,
}

impl PointView<'_> {
    /// Returns the accessible label, e.g. `"Period 2: Cinema"`.
    #[must_use]
    pub fn accessible_label(&self) -> String {
        format!("Period {}: {}", self.number, self.name)
    }
}

/// The event card strip for the active period.
#[derive(Clone, Debug, PartialEq)]
pub struct CarouselView<'a> {
    /// Cards in display order.
    pub events: &'a [TimelineEvent],
    /// Cards visible at once.
    pub slides_per_view: f64,
    /// Index of the active snap.
    pub active_snap: usize,
    /// Number of snaps.
    pub snap_count: usize,
    /// Whether the strip is at its first snap; the previous button is disabled.
    pub is_beginning: bool,
    /// Whether the strip is at its last snap; the next button is disabled.
    pub is_end: bool,
    /// Indices into `events` of cards at least partly visible.
    pub visible: Range<usize>,
    /// Width of one card.
    pub slide_extent: f64,
    /// How far the strip is translated toward the start.
    pub offset: f64,
}

impl<'a> CarouselView<'a> {
    /// Returns the cards at least partly visible.
    #[must_use]
    pub fn visible_events(&self) -> &'a [TimelineEvent] {
        self.events.get(self.visible.clone()).unwrap_or_default()
    }
}
