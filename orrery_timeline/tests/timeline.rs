// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `orrery_timeline` crate.
//!
//! These drive a `Timeline` through user gestures and check the views a
//! presentation adapter receives.

use kurbo::Point;
use orrery_carousel::Breakpoints;
use orrery_navigation::WrapMode;
use orrery_period::{PeriodCountError, TimelineEvent, TimelinePeriod};
use orrery_ring::RingLayout;
use orrery_timeline::{
    PresentationAdapter, Timeline, TimelineConfig, TimelineError, TimelineInput, TimelineView,
    mount,
};

#[derive(Default)]
struct Recorder {
    counters: Vec<String>,
    names: Vec<String>,
    declined: Vec<TimelineError>,
}

impl PresentationAdapter for Recorder {
    fn present(&mut self, view: &TimelineView<'_>) {
        self.counters.push(view.pagination.to_string());
        self.names.push(view.period.name.clone());
    }

    fn declined(&mut self, error: &TimelineError) {
        self.declined.push(*error);
    }
}

fn events(first_id: u32, years: &[i32]) -> Vec<TimelineEvent> {
    years
        .iter()
        .zip(first_id..)
        .map(|(&year, id)| TimelineEvent::new(id, year, format!("Event {id}"), "Something happened."))
        .collect()
}

fn periods(count: usize) -> Vec<TimelinePeriod> {
    (0..count)
        .map(|i| {
            let id = u32::try_from(i).unwrap() + 1;
            let start = 1980 + 5 * i32::try_from(i).unwrap();
            TimelinePeriod::new(id, format!("Period {id}"), start, start + 4)
                .with_events(events(id * 100, &[start, start + 1, start + 2, start + 3]))
        })
        .collect()
}

#[test]
fn rejects_unpresentable_period_counts() {
    assert_eq!(
        Timeline::new(&[], TimelineConfig::default()).unwrap_err(),
        TimelineError::PeriodCount(PeriodCountError::Empty)
    );
    let one = periods(1);
    assert_eq!(
        Timeline::new(&one, TimelineConfig::default()).unwrap_err(),
        TimelineError::PeriodCount(PeriodCountError::TooFew(1))
    );
    let seven = periods(7);
    assert!(Timeline::new(&seven, TimelineConfig::default()).is_err());
}

#[test]
fn mount_declines_once_and_renders_nothing() {
    let seven = periods(7);
    let mut recorder = Recorder::default();
    let timeline = mount(&seven, TimelineConfig::default(), &mut recorder);

    assert!(timeline.is_none());
    assert!(recorder.counters.is_empty(), "nothing may be presented");
    assert_eq!(
        recorder.declined,
        [TimelineError::PeriodCount(PeriodCountError::TooMany(7))]
    );
    assert_eq!(
        recorder.declined[0].to_string(),
        "cannot present timeline: timeline has 7 periods; expected between 2 and 6"
    );
}

#[test]
fn mount_presents_initial_view() {
    let data = periods(3);
    let mut recorder = Recorder::default();
    let timeline = mount(&data, TimelineConfig::default(), &mut recorder).unwrap();

    assert_eq!(recorder.counters, ["1 / 3"]);
    assert_eq!(recorder.names, ["Period 1"]);
    assert!(recorder.declined.is_empty());
    assert_eq!(timeline.active(), 0);
}

#[test]
fn gestures_present_only_on_change() {
    let data = periods(3);
    let mut recorder = Recorder::default();
    let mut timeline = mount(&data, TimelineConfig::default(), &mut recorder).unwrap();

    assert!(!timeline.handle(TimelineInput::Prev, &mut recorder));
    assert!(timeline.handle(TimelineInput::Next, &mut recorder));
    assert!(timeline.handle(TimelineInput::Next, &mut recorder));
    assert!(!timeline.handle(TimelineInput::Next, &mut recorder));
    assert!(!timeline.handle(TimelineInput::Select(3), &mut recorder));
    assert!(timeline.handle(TimelineInput::Select(0), &mut recorder));

    assert_eq!(recorder.counters, ["1 / 3", "2 / 3", "3 / 3", "1 / 3"]);
}

#[test]
fn view_tracks_navigation() {
    let data = periods(3);
    let mut timeline = Timeline::new(&data, TimelineConfig::default()).unwrap();

    let view = timeline.view();
    assert_eq!(view.progress, 0.0);
    assert!(view.is_first);
    assert!(view.pagination.prev_disabled);
    assert!(!view.pagination.next_disabled);
    assert_eq!(view.years(), (1980, 1984));

    timeline.next();
    timeline.next();
    let view = timeline.view();
    assert_eq!(view.active, 2);
    assert_eq!(view.progress, 100.0);
    assert!(view.is_last);
    assert!(view.pagination.next_disabled);
    assert_eq!(view.period.name, "Period 3");
    assert_eq!(view.years(), (1990, 1994));
    assert_eq!(view.revision, 2);
}

#[test]
fn ring_view_holds_active_point_at_anchor() {
    let data = periods(6);
    let mut timeline = Timeline::new(&data, TimelineConfig::default()).unwrap();
    timeline.select(2);

    let view = timeline.view();
    assert_eq!(view.ring.container_rotation, 30.0 - 2.0 * 60.0);
    assert_eq!(view.ring.counter_rotation, -view.ring.container_rotation);
    assert_eq!(view.ring.points.len(), 6);

    let active: Vec<_> = view.ring.points.iter().filter(|p| p.point.is_active).collect();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].number, 3);
    assert_eq!(active[0].accessible_label(), "Period 3: Period 3");

    let top = &view.ring.points[0];
    assert!((top.point.position - Point::new(50.0, 0.0)).hypot() < 1e-9);
}

#[test]
fn custom_anchor_is_used() {
    let data = periods(4);
    let config = TimelineConfig::default().with_ring(RingLayout::default().with_anchor(0.0));
    let mut timeline = Timeline::new(&data, config).unwrap();
    timeline.select(1);
    assert_eq!(timeline.view().ring.container_rotation, -90.0);
}

#[test]
fn period_change_resets_carousel() {
    let data = periods(3);
    // Two cards per view over four events: three snaps.
    let config = TimelineConfig::default()
        .with_breakpoints(Breakpoints::new(2.0))
        .with_viewport_width(800.0);
    let mut timeline = Timeline::new(&data, config).unwrap();

    assert!(timeline.view().carousel.is_beginning);
    assert!(timeline.apply(TimelineInput::SlideNext));
    assert!(timeline.apply(TimelineInput::SlideNext));
    let carousel = timeline.view().carousel;
    assert!(carousel.is_end);
    assert_eq!(carousel.snap_count, 3);
    assert_eq!(carousel.visible_events().len(), 2);
    assert_eq!(carousel.visible_events()[0].year, 1982);

    assert!(!timeline.slide_next());
    assert!(timeline.next());
    let carousel = timeline.view().carousel;
    assert_eq!(carousel.active_snap, 0);
    assert_eq!(carousel.offset, 0.0);
    assert_eq!(carousel.events[0].year, 1985);
}

#[test]
fn resize_re_resolves_slides_per_view() {
    let data = periods(2);
    let config = TimelineConfig::default().with_viewport_width(500.0);
    let mut timeline = Timeline::new(&data, config).unwrap();
    assert_eq!(timeline.view().carousel.slides_per_view, 1.5);

    assert!(timeline.apply(TimelineInput::Resize(1280.0)));
    assert_eq!(timeline.view().carousel.slides_per_view, 3.0);
    assert!(!timeline.apply(TimelineInput::Resize(1280.0)));

    let mobile = Timeline::new(&data, TimelineConfig::mobile()).unwrap();
    assert_eq!(mobile.view().carousel.slides_per_view, 2.0);
}

#[test]
fn cycle_mode_keeps_pager_enabled() {
    let data = periods(3);
    let config = TimelineConfig::default().with_wrap_mode(WrapMode::Cycle);
    let mut timeline = Timeline::new(&data, config).unwrap();

    let view = timeline.view();
    assert!(view.is_first);
    assert!(!view.pagination.prev_disabled);

    assert!(timeline.prev());
    assert_eq!(timeline.active(), 2);
}

#[test]
fn set_periods_reclamps_active_period() {
    let long = periods(5);
    let short = periods(2);
    let none: Vec<TimelinePeriod> = Vec::new();
    let mut timeline = Timeline::new(&long, TimelineConfig::default()).unwrap();
    timeline.select(4);

    timeline.set_periods(&short).unwrap();
    assert_eq!(timeline.active(), 1);
    assert!(timeline.view().is_last);

    assert!(timeline.set_periods(&none).is_err());
    assert_eq!(timeline.periods().len(), 2, "a rejected sequence changes nothing");
}
