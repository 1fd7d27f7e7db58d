// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=orrery_carousel --heading-base-level=0

//! Orrery Carousel: headless state for a horizontally snapping card strip.
//!
//! A carousel shows `slides_per_view` cards at a time (possibly fractional,
//! so the next card peeks in) separated by `space_between`, and steps through
//! **snaps**: resting positions of the strip. The last snap is the one where
//! the final card is flush with the end of the viewport, so the strip never
//! scrolls past its content.
//!
//! The core types are:
//!
//! - [`CarouselConfig`]: slides per view and gap.
//! - [`Breakpoints`]: a width → slides-per-view table. Hosts measure the
//!   viewport; this crate only looks the width up.
//! - [`Carousel`]: the active snap, boundary flags, stepping, and the strip
//!   offset for a given viewport extent.
//!
//! Positions are expressed in **slide units** (one unit is one card plus one
//! gap), which keeps the state independent of the viewport. Pixel offsets are
//! derived on demand from a viewport extent.
//!
//! ## Minimal example
//!
//! ```rust
//! use orrery_carousel::{Carousel, CarouselConfig};
//!
//! // Three cards, one and a half visible at a time.
//! let mut carousel = Carousel::new(3, CarouselConfig::new(1.5, 30.0));
//! assert!(carousel.is_beginning());
//! assert_eq!(carousel.snap_count(), 3);
//!
//! carousel.slide_next();
//! carousel.slide_next();
//! assert!(carousel.is_end());
//! assert!(!carousel.slide_next());
//!
//! // The last snap shows the third card flush with the right edge.
//! assert_eq!(carousel.position(), 1.5);
//!
//! // A new list of cards starts over at the beginning.
//! carousel.reset(5);
//! assert!(carousel.is_beginning());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod breakpoints;
mod carousel;

pub use breakpoints::Breakpoints;
pub use carousel::{Carousel, CarouselConfig};
