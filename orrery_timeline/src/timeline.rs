// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use orrery_carousel::{Breakpoints, Carousel, CarouselConfig};
use orrery_navigation::{PeriodNavigator, WrapMode};
use orrery_period::{TimelinePeriod, validate_period_count};
use orrery_ring::RingLayout;

use crate::adapter::PresentationAdapter;
use crate::view::{CarouselView, Pagination, PointView, RingView, TimelineView};
use crate::{TimelineConfig, TimelineError};

/// A discrete user gesture a timeline responds to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TimelineInput {
    /// A ring point was clicked.
    Select(usize),
    /// The pagination "next" button was pressed.
    Next,
    /// The pagination "previous" button was pressed.
    Prev,
    /// The carousel "next" button was pressed.
    SlideNext,
    /// The carousel "previous" button was pressed.
    SlidePrev,
    /// The carousel was swiped to a snap.
    SlideTo(usize),
    /// The carousel viewport changed width.
    Resize(f64),
}

/// A headless timeline widget over a borrowed period sequence.
///
/// Owns the active period (through a [`PeriodNavigator`]) and the event
/// carousel for that period. Changing period resets the carousel to the new
/// period's first card. All view values are derived on demand by
/// [`Timeline::view`].
#[derive(Clone, Debug)]
pub struct Timeline<'a> {
    navigator: PeriodNavigator<'a, TimelinePeriod>,
    ring: RingLayout,
    breakpoints: Breakpoints,
    viewport_width: f64,
    carousel: Carousel,
    revision: u64,
}

impl<'a> Timeline<'a> {
    /// Creates a timeline with the first period active.
    ///
    /// Fails if `periods` is empty or outside
    /// [`PERIOD_COUNT_RANGE`](orrery_period::PERIOD_COUNT_RANGE).
    pub fn new(periods: &'a [TimelinePeriod], config: TimelineConfig) -> Result<Self, TimelineError> {
        validate_period_count(periods.len())?;
        let TimelineConfig {
            ring,
            wrap_mode,
            breakpoints,
            space_between,
            viewport_width,
        } = config;
        let navigator = PeriodNavigator::new(periods).with_wrap_mode(wrap_mode);
        let carousel = Carousel::new(
            periods[0].events.len(),
            CarouselConfig::new(breakpoints.slides_per_view_for(viewport_width), space_between),
        );
        Ok(Self {
            navigator,
            ring,
            breakpoints,
            viewport_width,
            carousel,
            revision: 0,
        })
    }

    /// Replaces the period sequence.
    ///
    /// The active index is re-clamped into the new sequence and the carousel
    /// starts over with the active period's events. On error nothing changes.
    pub fn set_periods(&mut self, periods: &'a [TimelinePeriod]) -> Result<(), TimelineError> {
        validate_period_count(periods.len())?;
        self.navigator.set_items(periods);
        self.carousel.reset(self.active_period().events.len());
        self.bump_revision();
        Ok(())
    }

    /// Returns the period sequence.
    #[must_use]
    pub fn periods(&self) -> &'a [TimelinePeriod] {
        self.navigator.items()
    }

    /// Returns the period navigator.
    #[must_use]
    pub fn navigator(&self) -> &PeriodNavigator<'a, TimelinePeriod> {
        &self.navigator
    }

    /// Returns the event carousel.
    #[must_use]
    pub fn carousel(&self) -> &Carousel {
        &self.carousel
    }

    /// Returns the ring layout.
    #[must_use]
    pub fn ring(&self) -> &RingLayout {
        &self.ring
    }

    /// Returns the index of the active period.
    #[must_use]
    pub fn active(&self) -> usize {
        self.navigator.active()
    }

    /// Returns the active period.
    #[must_use]
    pub fn active_period(&self) -> &'a TimelinePeriod {
        // Construction guarantees a non-empty sequence with `active < len`.
        &self.navigator.items()[self.navigator.active()]
    }

    /// Returns the change counter; bumped by every call that changed state.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Makes period `index` active; out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        let changed = self.navigator.select(index);
        self.after_period_change(changed)
    }

    /// Steps to the following period.
    pub fn next(&mut self) -> bool {
        let changed = self.navigator.next();
        self.after_period_change(changed)
    }

    /// Steps to the preceding period.
    pub fn prev(&mut self) -> bool {
        let changed = self.navigator.prev();
        self.after_period_change(changed)
    }

    /// Moves the event carousel to the following snap.
    pub fn slide_next(&mut self) -> bool {
        let changed = self.carousel.slide_next();
        self.after_change(changed)
    }

    /// Moves the event carousel to the preceding snap.
    pub fn slide_prev(&mut self) -> bool {
        let changed = self.carousel.slide_prev();
        self.after_change(changed)
    }

    /// Moves the event carousel to snap `index`, clamped to the last snap.
    pub fn slide_to(&mut self, index: usize) -> bool {
        let changed = self.carousel.slide_to(index);
        self.after_change(changed)
    }

    /// Sets the carousel viewport width and re-resolves slides per view.
    ///
    /// The strip offset depends on the width, so any actual change counts.
    pub fn set_viewport_width(&mut self, width: f64) -> bool {
        if (self.viewport_width - width).abs() < f64::EPSILON {
            return false;
        }
        self.viewport_width = width;
        self.carousel
            .set_slides_per_view(self.breakpoints.slides_per_view_for(width));
        self.after_change(true)
    }

    /// Returns the carousel viewport width.
    #[must_use]
    pub fn viewport_width(&self) -> f64 {
        self.viewport_width
    }

    /// Applies one user gesture. Returns `true` if anything changed.
    pub fn apply(&mut self, input: TimelineInput) -> bool {
        match input {
            TimelineInput::Select(index) => self.select(index),
            TimelineInput::Next => self.next(),
            TimelineInput::Prev => self.prev(),
            TimelineInput::SlideNext => self.slide_next(),
            TimelineInput::SlidePrev => self.slide_prev(),
            TimelineInput::SlideTo(index) => self.slide_to(index),
            TimelineInput::Resize(width) => self.set_viewport_width(width),
        }
    }

    /// Applies one user gesture and, if anything changed, presents the new view.
    pub fn handle<A>(&mut self, input: TimelineInput, adapter: &mut A) -> bool
    where
        A: PresentationAdapter + ?Sized,
    {
        let changed = self.apply(input);
        if changed {
            self.present(adapter);
        }
        changed
    }

    /// Hands the current view to `adapter`.
    pub fn present<A>(&self, adapter: &mut A)
    where
        A: PresentationAdapter + ?Sized,
    {
        adapter.present(&self.view());
    }

    /// Builds the current view.
    #[must_use]
    pub fn view(&self) -> TimelineView<'a> {
        let periods = self.navigator.items();
        let state = self.navigator.state();
        let period = self.active_period();
        let cycling = self.navigator.wrap_mode() == WrapMode::Cycle;

        let pagination = Pagination {
            current: state.active + 1,
            total: state.total,
            prev_disabled: self.navigator.is_first() && !cycling,
            next_disabled: self.navigator.is_last() && !cycling,
        };

        let ring = RingView {
            container_rotation: self.ring.container_rotation(state.active, state.total),
            counter_rotation: self.ring.counter_rotation(state.active, state.total),
            points: self
                .ring
                .points(state.total, state.active)
                .zip(periods)
                .map(|(point, period)| PointView {
                    point,
                    number: point.index + 1,
                    name: period.name.as_str(),
                })
                .collect(),
        };

        let carousel = CarouselView {
            events: &period.events,
            slides_per_view: self.carousel.config().slides_per_view,
            active_snap: self.carousel.active(),
            snap_count: self.carousel.snap_count(),
            is_beginning: self.carousel.is_beginning(),
            is_end: self.carousel.is_end(),
            visible: self.carousel.visible_range(),
            slide_extent: self.carousel.slide_extent(self.viewport_width),
            offset: self.carousel.offset(self.viewport_width),
        };

        TimelineView {
            active: state.active,
            total: state.total,
            progress: self.navigator.progress(),
            is_first: self.navigator.is_first(),
            is_last: self.navigator.is_last(),
            pagination,
            period,
            ring,
            carousel,
            revision: self.revision,
        }
    }

    fn after_period_change(&mut self, changed: bool) -> bool {
        if changed {
            self.carousel.reset(self.active_period().events.len());
        }
        self.after_change(changed)
    }

    fn after_change(&mut self, changed: bool) -> bool {
        if changed {
            self.bump_revision();
        }
        changed
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
