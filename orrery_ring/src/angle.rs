// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::Point;

/// Where the active point is held, in degrees clockwise from the top.
pub const DEFAULT_ANCHOR_DEGREES: f64 = 30.0;

/// Returns the angle between neighbouring items: `360 / total`.
///
/// An empty ring has no spacing and reports `0`.
#[must_use]
pub fn angular_step(total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    360.0 / total as f64
}

/// Returns the angle of item `index` out of `total`: `index * 360 / total`.
#[must_use]
pub fn angle_of(index: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    index as f64 * 360.0 / total as f64
}

/// Returns the position of item `index` on a circle.
///
/// Index 0 lands directly above `center` and later indices proceed
/// clockwise, in a coordinate space whose y axis points down.
#[must_use]
pub fn point_position(index: usize, total: usize, radius: f64, center: Point) -> Point {
    let radians = angle_of(index, total) * core::f64::consts::PI / 180.0;
    let (sin, cos) = radians.sin_cos();
    Point::new(center.x + radius * sin, center.y - radius * cos)
}

/// Returns the ring rotation that holds item `active` at `anchor_degrees`.
///
/// This is `anchor_degrees - active * 360 / total`, with positive values
/// rotating clockwise.
#[must_use]
pub fn container_rotation(active: usize, total: usize, anchor_degrees: f64) -> f64 {
    anchor_degrees - active as f64 * angular_step(total)
}

/// Returns the label rotation that cancels [`container_rotation`].
#[must_use]
pub fn counter_rotation(active: usize, total: usize, anchor_degrees: f64) -> f64 {
    -container_rotation(active, total, anchor_degrees)
}
