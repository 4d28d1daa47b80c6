//! Robot-frame coordinate with Cartesian and polar views.

use std::f32::consts::PI;

use crate::error::{RestraintError, Result};

/// A finite point in the robot's local frame (meters).
///
/// Stored in Cartesian form; the polar view (`r`, `theta`) is derived on
/// demand. Construction rejects NaN and infinite components, so every
/// `Coordinate` in the crate is known to be finite.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinate {
    x: f32,
    y: f32,
}

impl Coordinate {
    /// Origin of the robot frame.
    pub const ORIGIN: Coordinate = Coordinate { x: 0.0, y: 0.0 };

    /// Create a coordinate from Cartesian components.
    pub fn new(x: f32, y: f32) -> Result<Self> {
        if x.is_finite() && y.is_finite() {
            return Ok(Self { x, y });
        }

        Err(RestraintError::NonFinitePoint { x, y })
    }

    /// Create a coordinate from a range and bearing.
    ///
    /// Fails when the resulting Cartesian components are not finite.
    pub fn from_polar(r: f32, theta: f32) -> Result<Self> {
        Self::new(r * theta.cos(), r * theta.sin())
    }

    /// X coordinate (forward)
    #[inline]
    pub fn x(&self) -> f32 {
        self.x
    }

    /// Y coordinate (left)
    #[inline]
    pub fn y(&self) -> f32 {
        self.y
    }

    /// Distance from the origin.
    #[inline]
    pub fn r(&self) -> f32 {
        self.x.hypot(self.y)
    }

    /// Bearing from the +X axis, counter-clockwise positive, in (-π, π].
    #[inline]
    pub fn theta(&self) -> f32 {
        let theta = self.y.atan2(self.x);
        // atan2 gives -π for y == -0.0 behind the origin
        if theta == -PI { PI } else { theta }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

    #[test]
    fn test_rejects_non_finite() {
        assert!(Coordinate::new(f32::NAN, 0.0).is_err());
        assert!(Coordinate::new(0.0, f32::INFINITY).is_err());
        assert!(Coordinate::new(f32::NEG_INFINITY, 1.0).is_err());
        assert!(Coordinate::new(-3.0, 4.0).is_ok());
    }

    #[test]
    fn test_polar_view() {
        let p = Coordinate::new(3.0, 4.0).unwrap();
        assert_relative_eq!(p.r(), 5.0);

        let north = Coordinate::new(0.0, 2.0).unwrap();
        assert_relative_eq!(north.theta(), FRAC_PI_2);

        let diag = Coordinate::new(1.0, -1.0).unwrap();
        assert_relative_eq!(diag.theta(), -FRAC_PI_4);
    }

    #[test]
    fn test_theta_branch_behind() {
        // Directly behind lands on +π whatever the sign of zero
        let back = Coordinate::new(-1.0, 0.0).unwrap();
        assert_eq!(back.theta(), PI);
        let back = Coordinate::new(-1.0, -0.0).unwrap();
        assert_eq!(back.theta(), PI);
        let below = Coordinate::new(-1.0, -1e-6).unwrap();
        assert!(below.theta() < 0.0);
        assert_eq!(Coordinate::ORIGIN.theta(), 0.0);
    }

    #[test]
    fn test_from_polar() {
        let p = Coordinate::from_polar(2.0, FRAC_PI_2).unwrap();
        assert!(p.x().abs() < 1e-6);
        assert_relative_eq!(p.y(), 2.0);

        assert!(Coordinate::from_polar(f32::INFINITY, 0.0).is_err());
    }
}
