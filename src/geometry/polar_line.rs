//! Straight line in polar form about the frame origin.
//!
//! A line `a·x + b·y = m` with `x = r·cos θ`, `y = r·sin θ` becomes
//!
//! ```text
//! r(θ) = m / (a·cos θ + b·sin θ)
//! ```
//!
//! and, writing `a·cos θ + b·sin θ = k·cos(θ − α)` with `k = √(a² + b²)`
//! and `tan α = b / a`,
//!
//! ```text
//! θ(r) = α ∓ acos(m / (k·r))
//! ```
//!
//! which lets ray and circle intersections be answered without clipping
//! segments in Cartesian form.
//!
//! For turns, `sweep_crossings` answers the related question of
//! how far a point must be rotated about a turn centre to reach the line.

use crate::core::math::{parallel_within, quadratic_roots};
use crate::error::{RestraintError, Result};

/// Angular tolerance for rays running along a line through the origin.
pub const ANGLE_EPSILON: f32 = 1e-4;

/// Line `a·x + b·y = m` in the robot frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PolarLine {
    m: f32,
    a: f32,
    b: f32,
}

impl PolarLine {
    /// Create a line; fails on non-finite terms or `a == b == 0`.
    pub fn new(m: f32, a: f32, b: f32) -> Result<Self> {
        if m.is_finite() && a.is_finite() && b.is_finite() && (a != 0.0 || b != 0.0) {
            return Ok(Self { m, a, b });
        }

        Err(RestraintError::IllFormedLine { m, a, b })
    }

    /// Line `x = offset`. `offset` must be finite.
    pub(crate) fn vertical(offset: f32) -> Self {
        Self {
            m: offset,
            a: 1.0,
            b: 0.0,
        }
    }

    /// Line `y = offset`. `offset` must be finite.
    pub(crate) fn horizontal(offset: f32) -> Self {
        Self {
            m: offset,
            a: 0.0,
            b: 1.0,
        }
    }

    /// Distance term
    #[inline]
    pub fn m(&self) -> f32 {
        self.m
    }

    /// X coefficient
    #[inline]
    pub fn a(&self) -> f32 {
        self.a
    }

    /// Y coefficient
    #[inline]
    pub fn b(&self) -> f32 {
        self.b
    }

    /// Reference angle used for lines through the origin.
    #[inline]
    fn line_angle(&self) -> f32 {
        self.a.atan2(self.b)
    }

    /// Radius at which a ray at `theta` meets the line.
    ///
    /// Returns `f32::INFINITY` when there is no forward crossing (parallel
    /// ray or crossing behind the origin). For a line through the origin the
    /// crossing is at `0`, except along the reference angle (modulo π, within
    /// [`ANGLE_EPSILON`]) where it is reported as infinite.
    pub fn r(&self, theta: f32) -> f32 {
        if self.m == 0.0 {
            if parallel_within(self.line_angle(), theta, ANGLE_EPSILON) {
                return f32::INFINITY;
            }
            return 0.0;
        }

        let r = self.m / (self.a * theta.cos() + self.b * theta.sin());
        if r > 0.0 { r } else { f32::INFINITY }
    }

    /// Angle at which the line is crossed at radius `r`.
    ///
    /// Picks the `α − acos(…)` branch. `m / (k·r)` must lie in [-1, 1];
    /// outside that range the circle misses the line and the result is NaN.
    pub fn theta(&self, r: f32) -> f32 {
        if r == 0.0 || self.m == 0.0 {
            return self.line_angle();
        }

        let (alpha, spread) = self.branches(r);
        alpha - spread
    }

    /// Both angles at which the circle of radius `r` meets the line.
    ///
    /// Returns `(α − δ, α + δ)`, or `None` if the circle misses the line.
    /// Unlike [`theta`](Self::theta) this uses the general formula for
    /// lines through the origin as well, giving the two true directions.
    pub fn crossings(&self, r: f32) -> Option<(f32, f32)> {
        if !(r.is_finite() && r > 0.0) {
            return None;
        }

        let k = self.a.hypot(self.b);
        let ratio = self.m / (k * r);
        if !(-1.0..=1.0).contains(&ratio) {
            return None;
        }

        let (alpha, spread) = self.branches(r);
        Some((alpha - spread, alpha + spread))
    }

    /// Clockwise rotations about `(0, radius)` that carry `(x, y)` onto the line.
    ///
    /// Only rotations in `[0, π]` are returned. Rotating by `θ` moves the
    /// point to
    ///
    /// ```text
    /// x(θ) = x·cos θ + (y − R)·sin θ
    /// y(θ) = y·cos θ − x·sin θ + R·(1 − cos θ)
    /// ```
    ///
    /// With `u = tan(θ/2)` the condition `a·x(θ) + b·y(θ) = m` becomes
    ///
    /// ```text
    /// (2bR − a·x − b·y − m)·u² + 2(a·(y − R) − b·x)·u + (a·x + b·y − m) = 0
    /// ```
    ///
    /// whose non-negative roots are exactly the rotations in `[0, π)`. `R`
    /// only enters as a coefficient, never as `y − R` under an arccosine, so
    /// a small rotation about a distant centre keeps its precision. Solved
    /// in f64.
    pub(crate) fn sweep_crossings(
        &self,
        x: f64,
        y: f64,
        radius: f64,
    ) -> impl Iterator<Item = f64> {
        let (m, a, b) = (f64::from(self.m), f64::from(self.a), f64::from(self.b));

        let c2 = 2.0 * b * radius - a * x - b * y - m;
        let c1 = 2.0 * (a * (y - radius) - b * x);
        let c0 = a * x + b * y - m;

        // A vanishing u² term puts the second root at u = ∞, half a turn
        let half_turn = (c2 == 0.0 && c1 != 0.0).then_some(std::f64::consts::PI);

        quadratic_roots(c2, c1, c0)
            .into_iter()
            .flatten()
            .filter(|u| *u >= 0.0)
            .map(|u| 2.0 * u.atan())
            .chain(half_turn)
    }

    /// Normal angle α and half-spread δ of the two crossings at radius `r`.
    fn branches(&self, r: f32) -> (f32, f32) {
        let k = self.a.hypot(self.b);
        let alpha = self.b.atan2(self.a);
        (alpha, (self.m / (k * r)).acos())
    }
}
