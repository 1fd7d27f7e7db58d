// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=orrery_ring --heading-base-level=0

//! Orrery Ring: geometry for items spaced evenly around a circle.
//!
//! A ring navigator draws one point per item on a circle and rotates the
//! whole ring so the active point always sits at the same spot, the
//! **anchor**. Point labels are counter-rotated so they stay upright. This
//! crate computes those numbers and nothing else:
//!
//! - [`angle_of`]: even angular spacing, index 0 at angle 0.
//! - [`point_position`]: angle to a [`kurbo::Point`] with index 0 at 12 o'clock,
//!   proceeding clockwise (y grows downward, as on screen).
//! - [`container_rotation`] / [`counter_rotation`]: the ring rotation that
//!   holds the active point at the anchor, and its inverse for labels.
//! - [`RingLayout`]: the same, bundled with a center, radius, and anchor.
//!
//! All angles are in degrees, all functions are pure, and identical input
//! produces identical output.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use orrery_ring::{RingLayout, angle_of, container_rotation};
//!
//! assert_eq!(angle_of(1, 4), 90.0);
//! assert_eq!(container_rotation(1, 4, 30.0), -60.0);
//!
//! // The default layout works in a 100x100 box: center (50, 50), radius 50.
//! let ring = RingLayout::default();
//! let top = ring.point_position(0, 4);
//! assert!((top - Point::new(50.0, 0.0)).hypot() < 1e-9);
//!
//! for point in ring.points(4, 1) {
//!     // Hosts place a button at `point.position` and mark `point.is_active`.
//!     let _ = (point.index, point.position, point.is_active);
//! }
//! ```
//!
//! ## Anchor
//!
//! The anchor is a design parameter, not a fact about the data. The default,
//! [`DEFAULT_ANCHOR_DEGREES`], holds the active point 30° clockwise from the
//! top regardless of how many items the ring has. Use
//! [`RingLayout::with_anchor`] to pick another spot.
//!
//! ## Features
//!
//! - `std` (default): use the standard library's float functions.
//! - `libm`: use `libm` through Kurbo for `no_std` builds.
//!
//! This crate is `no_std`.

#![no_std]

mod angle;
mod layout;

pub use angle::{
    DEFAULT_ANCHOR_DEGREES, angle_of, angular_step, container_rotation, counter_rotation,
    point_position,
};
pub use layout::{RingLayout, RingPoint};
