//! Angle and root-finding helpers.
//!
//! All angles are in radians. Coordinate frame follows ROS REP-103:
//! - X-forward, Y-left
//! - Counter-clockwise positive rotation

use std::f32::consts::PI;

/// Real roots of `c2·u² + c1·u + c0 = 0`.
///
/// Uses the cancellation-free form `q = -(c1 + sign(c1)·√disc) / 2`,
/// roots `q / c2` and `c0 / q`, so a small root stays accurate next to a
/// large one. A vanishing `c2` leaves the single linear root. Roots are
/// unordered.
///
/// # Example
/// ```
/// use raksha::core::math::quadratic_roots;
///
/// // (u - 1e-6)(u - 1e6) = u² - (1e6 + 1e-6)·u + 1
/// let roots = quadratic_roots(1.0, -(1e6 + 1e-6), 1.0);
/// let small = roots.iter().flatten().fold(f64::INFINITY, |a, &b| a.min(b));
/// assert!((small - 1e-6).abs() < 1e-18);
/// ```
pub fn quadratic_roots(c2: f64, c1: f64, c0: f64) -> [Option<f64>; 2] {
    if c2 == 0.0 {
        if c1 == 0.0 {
            return [None, None];
        }
        return [Some(-c0 / c1), None];
    }

    let disc = c1 * c1 - 4.0 * c2 * c0;
    if disc.is_nan() || disc < 0.0 {
        return [None, None];
    }

    let q = -0.5 * (c1 + disc.sqrt().copysign(c1));
    if q == 0.0 {
        // c1 == 0 and c0 == 0: double root at zero
        return [Some(0.0), None];
    }
    [Some(q / c2), Some(c0 / q)]
}

/// Check whether two angles describe the same undirected line.
///
/// Compares modulo π, so opposite headings are considered parallel.
///
/// # Example
/// ```
/// use raksha::core::math::parallel_within;
/// use std::f32::consts::PI;
///
/// assert!(parallel_within(PI / 2.0, -PI / 2.0, 1e-4));
/// assert!(!parallel_within(0.0, PI / 2.0, 1e-4));
/// ```
#[inline]
pub fn parallel_within(a: f32, b: f32, tolerance: f32) -> bool {
    let diff = (a - b).abs() % PI;
    diff <= tolerance || PI - diff <= tolerance
}
