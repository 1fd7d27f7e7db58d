// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=orrery_navigation --heading-base-level=0

//! Orrery Navigation: the state machine behind a period navigator.
//!
//! [`PeriodNavigator`] tracks which item of a short, ordered, read-only
//! sequence is active and exposes the gestures a pager offers: jump to an
//! index, step forward, step back. Everything else it reports (boundary
//! flags, the linear progress fraction, the active item) is derived on
//! demand from the active index and the borrowed sequence; nothing is cached.
//!
//! The navigator does **not** validate how many items it is given, render
//! anything, or animate. Out-of-range requests are dropped silently, since
//! they usually come from stale or disabled affordances.
//!
//! ## Minimal example
//!
//! ```rust
//! use orrery_navigation::PeriodNavigator;
//!
//! let periods = ["A", "B", "C"];
//! let mut nav = PeriodNavigator::new(&periods);
//! assert_eq!(nav.progress(), 0.0);
//!
//! nav.next();
//! assert_eq!(nav.active(), 1);
//! assert_eq!(nav.progress(), 50.0);
//!
//! nav.next();
//! assert!(nav.is_last());
//! assert_eq!(nav.progress(), 100.0);
//!
//! // Clamped: stepping past the end does nothing.
//! assert!(!nav.next());
//! assert_eq!(nav.active(), 2);
//!
//! nav.select(0);
//! assert_eq!(nav.active_item(), Some(&"A"));
//! ```
//!
//! ## Wrap policy
//!
//! Stepping is clamped at both ends by default, matching pagers whose
//! prev/next buttons are disabled at the boundaries. The cyclic policy,
//! where stepping past either end wraps around, is available only by
//! opting in with [`WrapMode::Cycle`]:
//!
//! ```rust
//! use orrery_navigation::{PeriodNavigator, WrapMode};
//!
//! let periods = [1, 2, 3];
//! let mut nav = PeriodNavigator::new(&periods).with_wrap_mode(WrapMode::Cycle);
//! nav.prev();
//! assert_eq!(nav.active(), 2);
//! nav.next();
//! assert_eq!(nav.active(), 0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod navigator;

pub use navigator::{NavigationState, PeriodNavigator, WrapMode};
