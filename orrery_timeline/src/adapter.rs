// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The boundary between timeline state and whatever draws it.

use orrery_period::TimelinePeriod;

use crate::{Timeline, TimelineConfig, TimelineError, TimelineView};

/// Draws a timeline.
///
/// Implementations read the view on every state change and may animate
/// toward it however they like; nothing flows back into the timeline.
pub trait PresentationAdapter {
    /// Draws `view`.
    fn present(&mut self, view: &TimelineView<'_>);

    /// Called once when a timeline declines to render.
    ///
    /// This is the diagnostic sink for configuration errors. The default
    /// ignores it.
    fn declined(&mut self, error: &TimelineError) {
        let _ = error;
    }
}

/// Creates a timeline and presents its initial view.
///
/// On a configuration error, reports it through
/// [`PresentationAdapter::declined`] and returns `None` so the caller renders
/// nothing.
pub fn mount<'a, A>(
    periods: &'a [TimelinePeriod],
    config: TimelineConfig,
    adapter: &mut A,
) -> Option<Timeline<'a>>
where
    A: PresentationAdapter + ?Sized,
{
    match Timeline::new(periods, config) {
        Ok(timeline) => {
            timeline.present(adapter);
            Some(timeline)
        }
        Err(err) => {
            adapter.declined(&err);
            None
        }
    }
}
