// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=orrery_timeline --heading-base-level=0

//! Orrery Timeline: a headless historical-timeline widget.
//!
//! A [`Timeline`] lets a viewer step through two to six ordered periods. The
//! periods sit as numbered points on a ring that rotates to hold the active
//! one at a fixed anchor, a pager shows "current / total" with prev/next
//! buttons, and the active period's events scroll by in a card carousel.
//!
//! This crate composes the smaller Orrery crates:
//!
//! - `orrery_navigation` for the active period and its bounds,
//! - `orrery_ring` for point positions and ring rotation,
//! - `orrery_carousel` for the event strip,
//!
//! and exposes the result as a [`TimelineView`] snapshot. Drawing, tweening,
//! and measuring the viewport belong to a [`PresentationAdapter`] supplied by
//! the host.
//!
//! ## Minimal example
//!
//! ```rust
//! use orrery_period::TimelinePeriod;
//! use orrery_timeline::{PresentationAdapter, TimelineConfig, TimelineInput, TimelineView, mount};
//!
//! struct Counter(String);
//!
//! impl PresentationAdapter for Counter {
//!     fn present(&mut self, view: &TimelineView<'_>) {
//!         self.0 = view.pagination.to_string();
//!     }
//! }
//!
//! let periods = [
//!     TimelinePeriod::new(1, "Cinema", 1987, 1991),
//!     TimelinePeriod::new(2, "Literature", 1992, 1997),
//!     TimelinePeriod::new(3, "Theatre", 1999, 2004),
//! ];
//!
//! let mut counter = Counter(String::new());
//! let mut timeline = mount(&periods, TimelineConfig::default(), &mut counter).unwrap();
//! assert_eq!(counter.0, "1 / 3");
//!
//! timeline.handle(TimelineInput::Next, &mut counter);
//! assert_eq!(counter.0, "2 / 3");
//! assert_eq!(timeline.view().progress, 50.0);
//! ```
//!
//! ## Configuration errors
//!
//! A timeline with fewer than two or more than six periods is a
//! configuration error. [`Timeline::new`] returns it; [`mount`] reports it
//! once through [`PresentationAdapter::declined`] and renders nothing.
//!
//! Invalid navigation requests, such as selecting an index past the end, are
//! not errors: they are ignored and report `false`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod adapter;
mod config;
mod error;
mod timeline;
mod view;

pub use adapter::{PresentationAdapter, mount};
pub use config::TimelineConfig;
pub use error::TimelineError;
pub use timeline::{Timeline, TimelineInput};
pub use view::{CarouselView, Pagination, PointView, RingView, TimelineView};
