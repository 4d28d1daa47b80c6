//! Velocity-dependent collision distance model.
//!
//! The model answers "how far does the robot travel before this point is
//! struck by its footprint?" for the velocity command of the current control
//! cycle.
//!
//! ## Motion Classes
//!
//! | Class | Condition | Path of the origin |
//! |-------|-----------|--------------------|
//! | Stopped | `linear == 0` | none (points outside are never reached) |
//! | Straight | `angular.abs() <= 0.001` | line along ±X |
//! | Turning | otherwise | circle of radius `(linear / angular).abs()` |
//!
//! ## Turning Radii
//!
//! ```text
//!            turn centre (0, ±center_radius)
//!                 ●
//!                 │  inner = center − half_width
//!            ┌────┼─────────┐
//!            │    o─────────┼─→ X   center = |v / ω|
//!            └──────────────┘
//!                 outer = hypot(max_offset, center + half_width)
//! ```
//!
//! Distances are returned in meters of travel of the robot origin:
//! `0` when already colliding, `f32::INFINITY` when never reached.

mod turning;

use crate::core::{Coordinate, RangeScan};
use crate::error::Result;
use crate::geometry::Footprint;

/// Angular velocity at or below which motion is treated as straight (rad/s).
pub const STRAIGHT_THRESHOLD: f32 = 0.001;

/// Collision distance model for one robot footprint.
///
/// # Example
///
/// ```
/// use raksha::{Footprint, Model};
///
/// let footprint = Footprint::new(1.3, 0.4, 0.6)?;
/// let mut model = Model::new(footprint);
///
/// model.set_velocities(1.0, 0.0);
/// assert!((model.distance(2.6, 0.0)? - 1.3).abs() < 1e-6);
/// assert_eq!(model.distance(-0.8, 0.0)?, f32::INFINITY);
/// # Ok::<(), raksha::RestraintError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Model {
    footprint: Footprint,

    velocity_linear: f32,
    velocity_angular: f32,

    straight: bool,
    left_turn: bool,

    inner_radius: f32,
    center_radius: f32,
    outer_radius: f32,
}

impl Model {
    /// Create a model for a stationary robot.
    pub fn new(footprint: Footprint) -> Self {
        Self {
            footprint,
            velocity_linear: 0.0,
            velocity_angular: 0.0,
            straight: true,
            left_turn: true,
            inner_radius: f32::INFINITY,
            center_radius: f32::INFINITY,
            outer_radius: f32::INFINITY,
        }
    }

    /// Set the velocity command and re-derive the turn geometry.
    ///
    /// # Arguments
    /// * `linear` - Forward velocity (m/s), negative when reversing
    /// * `angular` - Yaw rate (rad/s), counter-clockwise positive
    pub fn set_velocities(&mut self, linear: f32, angular: f32) {
        self.velocity_linear = linear;
        self.velocity_angular = angular;

        self.straight = angular.abs() <= STRAIGHT_THRESHOLD;
        self.left_turn = angular >= 0.0;

        if self.straight {
            self.inner_radius = f32::INFINITY;
            self.center_radius = f32::INFINITY;
            self.outer_radius = f32::INFINITY;
            return;
        }

        let half_width = self.footprint.half_width();
        self.center_radius = (linear / angular).abs();
        self.inner_radius = self.center_radius - half_width;

        let radius_perpendicular = self.center_radius + half_width;
        self.outer_radius = self.footprint.max_offset().hypot(radius_perpendicular);

        log::debug!(
            "Turn {}: center {:.3}m, inner {:.3}m, outer {:.3}m",
            if self.left_turn { "left" } else { "right" },
            self.center_radius,
            self.inner_radius,
            self.outer_radius
        );
    }

    /// Footprint the model was built with.
    pub fn footprint(&self) -> &Footprint {
        &self.footprint
    }

    /// Commanded linear velocity (m/s).
    pub fn linear_velocity(&self) -> f32 {
        self.velocity_linear
    }

    /// Commanded angular velocity (rad/s).
    pub fn angular_velocity(&self) -> f32 {
        self.velocity_angular
    }

    /// Whether the angular rate is small enough to treat the path as a line.
    pub fn is_straight(&self) -> bool {
        self.straight
    }

    /// Whether the robot turns counter-clockwise (includes zero rate).
    pub fn is_left_turn(&self) -> bool {
        self.left_turn
    }

    /// Radius of the footprint point closest to the turn centre.
    pub fn inner_radius(&self) -> f32 {
        self.inner_radius
    }

    /// Radius of the path of the robot origin.
    pub fn center_radius(&self) -> f32 {
        self.center_radius
    }

    /// Radius of the footprint corner farthest from the turn centre.
    pub fn outer_radius(&self) -> f32 {
        self.outer_radius
    }

    /// Travel distance before the robot-frame point `(x, y)` is struck.
    ///
    /// Fails only when `x` or `y` is not finite.
    pub fn distance(&self, x: f32, y: f32) -> Result<f32> {
        let point = Coordinate::new(x, y)?;
        Ok(self.distance_to(&point))
    }

    /// Travel distance before `point` is struck.
    pub fn distance_to(&self, point: &Coordinate) -> f32 {
        if self.footprint.contains(point) {
            return 0.0;
        }

        if self.velocity_linear == 0.0 {
            return f32::INFINITY;
        }

        // A turn radius beyond f32 range is a straight line at this scale
        if self.straight || !self.center_radius.is_finite() {
            return self.straight_distance(point);
        }

        turning::arc_distance(self, point)
    }

    /// Smallest travel distance over a set of points.
    ///
    /// Returns `f32::INFINITY` for an empty set.
    pub fn min_distance<I>(&self, points: I) -> f32
    where
        I: IntoIterator<Item = Coordinate>,
    {
        let mut nearest = f32::INFINITY;
        for point in points {
            nearest = nearest.min(self.distance_to(&point));
            if nearest == 0.0 {
                break;
            }
        }
        nearest
    }

    /// Smallest travel distance over the valid points of a scan.
    pub fn scan_distance(&self, scan: &RangeScan) -> f32 {
        self.min_distance(scan.to_coordinates())
    }

    fn straight_distance(&self, point: &Coordinate) -> f32 {
        if point.y().abs() > self.footprint.half_width() {
            return f32::INFINITY;
        }

        let x = point.x();

        if self.velocity_linear < 0.0 {
            let back = self.footprint.offset_back();
            if x < back {
                return (x - back).abs();
            }
            // Ahead of the rear edge; the footprint itself was handled above
            return f32::INFINITY;
        }

        let front = self.footprint.offset_front();
        if x > front {
            return (x - front).abs();
        }
        f32::INFINITY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn test_footprint() -> Footprint {
        Footprint::new(1.3, 0.4, 2.0 * 0.3).unwrap()
    }

    #[test]
    fn test_constructor() {
        let model = Model::new(Footprint::new(0.0, 0.0, 0.0).unwrap());
        assert!(model.is_straight());
        assert!(model.is_left_turn());
        assert_eq!(model.linear_velocity(), 0.0);
        assert_eq!(model.center_radius(), f32::INFINITY);
    }

    #[test]
    fn test_straight_classification() {
        let mut model = Model::new(test_footprint());

        for angular in [0.0, 0.001, -0.001, 0.0005] {
            model.set_velocities(0.5, angular);
            assert!(model.is_straight());
            assert_eq!(model.inner_radius(), f32::INFINITY);
            assert_eq!(model.center_radius(), f32::INFINITY);
            assert_eq!(model.outer_radius(), f32::INFINITY);
        }

        model.set_velocities(0.5, -0.0011);
        assert!(!model.is_straight());
        assert!(!model.is_left_turn());
    }

    #[test]
    fn test_turning_radii() {
        let mut model = Model::new(test_footprint());
        model.set_velocities(1.0, 1.0);

        assert!(!model.is_straight());
        assert!(model.is_left_turn());
        assert_relative_eq!(model.center_radius(), 1.0);
        assert_relative_eq!(model.inner_radius(), 0.7, max_relative = 1e-6);
        assert_relative_eq!(
            model.outer_radius(),
            2.0f32.sqrt() * 1.3,
            max_relative = 1e-5
        );
    }

    #[test]
    fn test_set_velocities_overwrites() {
        let mut model = Model::new(test_footprint());
        model.set_velocities(2.0, -0.5);
        assert_relative_eq!(model.center_radius(), 4.0);

        model.set_velocities(1.0, 0.0);
        assert!(model.is_straight());
        assert!(model.is_left_turn());
        assert_eq!(model.center_radius(), f32::INFINITY);
    }

    #[test]
    fn test_inside_footprint_is_zero() {
        let mut model = Model::new(test_footprint());

        for (v, w) in [(0.0, 0.0), (1.0, 0.0), (-1.0, 0.0), (1.0, 1.0), (-0.5, -2.0)] {
            model.set_velocities(v, w);
            assert_eq!(model.distance(0.0, 0.0).unwrap(), 0.0);
            assert_eq!(model.distance(1.2, 0.29).unwrap(), 0.0);
            assert_eq!(model.distance(-0.39, -0.29).unwrap(), 0.0);
        }
    }

    #[test]
    fn test_stationary_or_rotating_in_place() {
        let mut model = Model::new(test_footprint());

        model.set_velocities(0.0, 0.0);
        assert_eq!(model.distance(2.0, 0.0).unwrap(), f32::INFINITY);

        model.set_velocities(0.0, 1.0);
        assert_eq!(model.distance(1.35, 0.0).unwrap(), f32::INFINITY);
    }

    #[test]
    fn test_straight_forward() {
        let mut model = Model::new(test_footprint());
        model.set_velocities(1.0, 0.0);

        assert_relative_eq!(model.distance(2.6, 0.0).unwrap(), 1.3);
        assert_relative_eq!(model.distance(2.0, 0.3).unwrap(), 0.7, max_relative = 1e-5);
        assert_eq!(model.distance(-0.8, 0.0).unwrap(), f32::INFINITY);
        assert_eq!(model.distance(2.6, 0.31).unwrap(), f32::INFINITY);
    }

    #[test]
    fn test_straight_backward() {
        let mut model = Model::new(test_footprint());
        model.set_velocities(-1.0, 0.0);

        assert_relative_eq!(model.distance(-0.8, 0.0).unwrap(), 0.4, max_relative = 1e-5);
        assert_eq!(model.distance(2.6, 0.0).unwrap(), f32::INFINITY);
        assert_eq!(model.distance(-0.8, -0.5).unwrap(), f32::INFINITY);
    }

    #[test]
    fn test_overflowing_radius_uses_straight_rule() {
        let mut model = Model::new(test_footprint());
        model.set_velocities(f32::MAX, 0.5);

        assert!(!model.is_straight());
        assert_eq!(model.center_radius(), f32::INFINITY);
        assert_relative_eq!(model.distance(2.6, 0.0).unwrap(), 1.3);
        assert_eq!(model.distance(2.6, 0.5).unwrap(), f32::INFINITY);
    }

    #[test]
    fn test_non_finite_query() {
        let model = Model::new(test_footprint());
        assert!(model.distance(f32::NAN, 0.0).is_err());
        assert!(model.distance(0.0, f32::INFINITY).is_err());
    }

    #[test]
    fn test_min_distance() {
        let mut model = Model::new(test_footprint());
        model.set_velocities(1.0, 0.0);

        let points = [
            Coordinate::new(5.0, 0.0).unwrap(),
            Coordinate::new(2.0, 0.1).unwrap(),
            Coordinate::new(-3.0, 0.0).unwrap(),
        ];
        assert_relative_eq!(model.min_distance(points), 0.7, max_relative = 1e-5);
        assert_eq!(model.min_distance(Vec::new()), f32::INFINITY);
    }

    #[test]
    fn test_scan_distance() {
        let mut model = Model::new(test_footprint());
        model.set_velocities(1.0, 0.0);

        let scan = RangeScan::new(
            vec![3.3, 0.05, f32::INFINITY, 1.0],
            vec![0.0, 0.0, 0.0, std::f32::consts::FRAC_PI_2],
            0.1,
            8.0,
        )
        .unwrap();
        assert_relative_eq!(model.scan_distance(&scan), 2.0, max_relative = 1e-5);
    }
}
