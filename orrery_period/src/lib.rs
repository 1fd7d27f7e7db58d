// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=orrery_period --heading-base-level=0

//! Orrery Period: the records a timeline navigator steps through.
//!
//! A timeline is an ordered sequence of [`TimelinePeriod`]s, each a named
//! span of years holding its own ordered list of [`TimelineEvent`]s. The
//! order of periods is meaningful (chronological) and is the order the
//! navigator walks.
//!
//! These types carry no behavior beyond a few read-only helpers. They are
//! supplied once by the embedder and never mutated by the navigation or
//! layout crates, which only borrow them.
//!
//! A widget is only meaningful for [`PERIOD_COUNT_RANGE`] periods. Checking
//! that is the job of the presentation layer, and
//! [`validate_period_count`] is the shared check it uses.
//!
//! ## Minimal example
//!
//! ```rust
//! use orrery_period::{TimelineEvent, TimelinePeriod, validate_period_count};
//!
//! let periods = [
//!     TimelinePeriod::new(1, "Early", 1980, 1986).with_events([
//!         TimelineEvent::new(1, 1980, "Launch", "First flight."),
//!     ]),
//!     TimelinePeriod::new(2, "Late", 1987, 1991),
//! ];
//!
//! assert!(validate_period_count(periods.len()).is_ok());
//! assert_eq!(periods[0].year_span(), (1980, 1986));
//! assert_eq!(periods[0].events.len(), 1);
//! ```
//!
//! ## Features
//!
//! - `serde`: derive `Serialize`/`Deserialize`. Field names follow the
//!   camelCase convention of existing content files (`startYear`, `endYear`).
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod count;
mod record;

pub use count::{PERIOD_COUNT_RANGE, PeriodCountError, validate_period_count};
pub use record::{TimelineEvent, TimelinePeriod};
