// Copyright 2025 the Orrery Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point};

use crate::angle::{
    DEFAULT_ANCHOR_DEGREES, angle_of, container_rotation, counter_rotation, point_position,
};

/// One item placed on the ring.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingPoint {
    /// Index of the item in its sequence.
    pub index: usize,
    /// Angle of the item before ring rotation, in degrees clockwise from the top.
    pub angle_degrees: f64,
    /// Position of the item before ring rotation.
    pub position: Point,
    /// Whether this is the active item.
    pub is_active: bool,
}

/// A circle to lay items out on, plus the anchor the active item is held at.
///
/// The default is a circle of radius `50` centered at `(50, 50)`, i.e. one
/// that exactly fills a `100 x 100` box, so positions can be read directly as
/// percentages of a square container. The anchor defaults to
/// [`DEFAULT_ANCHOR_DEGREES`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingLayout {
    /// Center of the circle.
    pub center: Point,
    /// Radius of the circle.
    pub radius: f64,
    /// Angle, in degrees clockwise from the top, at which the active item is held.
    pub anchor_degrees: f64,
}

impl Default for RingLayout {
    fn default() -> Self {
        Self::new(Point::new(50.0, 50.0), 50.0)
    }
}

impl RingLayout {
    /// Creates a layout with the default anchor.
    #[must_use]
    pub fn new(center: Point, radius: f64) -> Self {
        Self {
            center,
            radius,
            anchor_degrees: DEFAULT_ANCHOR_DEGREES,
        }
    }

    /// Sets the anchor angle, in degrees clockwise from the top.
    #[must_use]
    pub fn with_anchor(mut self, anchor_degrees: f64) -> Self {
        self.anchor_degrees = anchor_degrees;
        self
    }

    /// Returns the position of item `index` before ring rotation.
    #[must_use]
    pub fn point_position(&self, index: usize, total: usize) -> Point {
        point_position(index, total, self.radius, self.center)
    }

    /// Returns the ring rotation, in degrees, that holds `active` at the anchor.
    #[must_use]
    pub fn container_rotation(&self, active: usize, total: usize) -> f64 {
        container_rotation(active, total, self.anchor_degrees)
    }

    /// Returns the label rotation, in degrees, that keeps labels upright.
    #[must_use]
    pub fn counter_rotation(&self, active: usize, total: usize) -> f64 {
        counter_rotation(active, total, self.anchor_degrees)
    }

    /// Returns the ring rotation as a transform about the center.
    ///
    /// Applying it to [`RingPoint::position`] gives where a point is drawn
    /// once the ring has settled.
    #[must_use]
    pub fn container_transform(&self, active: usize, total: usize) -> Affine {
        Affine::rotate_about(
            self.container_rotation(active, total).to_radians(),
            self.center,
        )
    }

    /// Returns where item `index` is drawn once the ring is rotated for `active`.
    #[must_use]
    pub fn rotated_position(&self, index: usize, total: usize, active: usize) -> Point {
        self.container_transform(active, total) * self.point_position(index, total)
    }

    /// Lays out `total` items with `active` marked.
    pub fn points(&self, total: usize, active: usize) -> impl Iterator<Item = RingPoint> + '_ {
        (0..total).map(move |index| RingPoint {
            index,
            angle_degrees: angle_of(index, total),
            position: self.point_position(index, total),
            is_active: index == active,
        })
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::RingLayout;

    #[test]
    fn default_fills_a_hundred_unit_box() {
        let ring = RingLayout::default();
        assert_eq!(ring.center, Point::new(50.0, 50.0));
        assert_eq!(ring.radius, 50.0);
        assert_eq!(ring.anchor_degrees, 30.0);
    }

    #[test]
    fn points_mark_only_the_active_item() {
        let ring = RingLayout::default();
        let active: usize = ring.points(5, 3).filter(|p| p.is_active).map(|p| p.index).sum();
        assert_eq!(active, 3);
        assert_eq!(ring.points(5, 3).count(), 5);
    }
}
