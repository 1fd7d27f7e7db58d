// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Orrery demos.
//!
//! - [`sample_periods`] loads the bundled period content.
//! - [`TextAdapter`] presents a timeline as plain text, one frame per change.

use std::fmt::Write as _;

use orrery_period::TimelinePeriod;
use orrery_timeline::{PresentationAdapter, TimelineError, TimelineView};

const SAMPLE_PERIODS: &str = include_str!("../data/periods.json");

/// Parses the bundled sample periods.
pub fn sample_periods() -> Result<Vec<TimelinePeriod>, serde_json::Error> {
    serde_json::from_str(SAMPLE_PERIODS)
}

/// Renders each presented view as a block of text.
#[derive(Debug, Default)]
pub struct TextAdapter {
    /// One rendered frame per call to [`PresentationAdapter::present`].
    pub frames: Vec<String>,
    /// Diagnostics for timelines that declined to render.
    pub diagnostics: Vec<String>,
}

impl PresentationAdapter for TextAdapter {
    fn present(&mut self, view: &TimelineView<'_>) {
        let mut out = String::new();
        let (start, end) = view.years();
        let _ = writeln!(out, "{}  {}  {start} - {end}", view.pagination, view.period.name);
        let _ = writeln!(
            out,
            "progress {:5.1}%  ring {:+.0}deg  [{}] [{}]",
            view.progress,
            view.ring.container_rotation,
            if view.pagination.prev_disabled { " " } else { "<" },
            if view.pagination.next_disabled { " " } else { ">" },
        );
        for point in &view.ring.points {
            let marker = if point.point.is_active { '*' } else { ' ' };
            let _ = writeln!(
                out,
                "  {marker} {} at ({:5.1}, {:5.1})",
                point.accessible_label(),
                point.point.position.x,
                point.point.position.y,
            );
        }
        let carousel = &view.carousel;
        let _ = writeln!(
            out,
            "events {}/{} offset {:.0}",
            carousel.active_snap + 1,
            carousel.snap_count,
            carousel.offset,
        );
        for event in carousel.visible_events() {
            let _ = writeln!(out, "  {}  {}", event.year, event.description);
        }
        self.frames.push(out);
    }

    fn declined(&mut self, error: &TimelineError) {
        self.diagnostics.push(error.to_string());
    }
}
