//! Collision distance along a circular arc.
//!
//! The problem is first mirrored into a canonical turn: the robot drives
//! forward around a centre on its left. Reversing mirrors X (swapping the
//! front and back offsets and the sense of rotation); a clockwise turn then
//! mirrors Y. The footprint is symmetric in Y, so both mirrors preserve
//! distances.
//!
//! In the canonical turn, with the centre at `(0, R)`, a static obstacle
//! moves clockwise around it in the robot frame. Each footprint edge, as a
//! [`PolarLine`] in the robot frame, tells after which rotation the obstacle
//! lands on that edge's line:
//!
//! ```text
//!                  ● centre (0, R)
//!                 ╱│
//!              d ╱ │ R
//!               ╱  │
//!   obstacle ● ╱   │          swept clockwise by Δθ
//!          ┌──────┼────────┐  ← y = +half_width
//!          │      o        │
//!          └───────────────┘  ← y = -half_width
//!          ↑               ↑
//!        x = back       x = front
//! ```
//!
//! A crossing counts when the rotated obstacle also lies within the edge
//! segment. The travel distance is `R · Δθ` for the smallest such sweep;
//! sweeps past half a turn are behind the direction of travel.

use std::f64::consts::PI;

use super::Model;
use crate::core::Coordinate;
use crate::geometry::PolarLine;

/// Sweeps beyond half a turn put the point behind the direction of travel.
const MAX_SWEEP: f64 = PI;

/// Rounding slack on footprint bounds, per meter of turn radius.
const BOUND_SLACK: f64 = 1e-9;

/// Footprint and obstacle of a canonical forward, left turn.
struct CanonicalTurn {
    front: f32,
    back: f32,
    half_width: f32,
    radius: f64,
    /// Obstacle in the mirrored robot frame
    x: f64,
    y: f64,
}

impl CanonicalTurn {
    /// Mirror the model and point into the canonical turn.
    fn new(model: &Model, point: &Coordinate) -> Self {
        let footprint = model.footprint();
        let mut x = point.x();
        let mut y = point.y();
        let mut front = footprint.offset_front();
        let mut back = footprint.offset_back();
        let mut counter_clockwise = model.is_left_turn();

        if model.linear_velocity() < 0.0 {
            x = -x;
            (front, back) = (-back, -front);
            counter_clockwise = !counter_clockwise;
        }

        if !counter_clockwise {
            y = -y;
        }

        Self {
            front,
            back,
            half_width: footprint.half_width(),
            radius: f64::from(model.center_radius()),
            x: f64::from(x),
            y: f64::from(y),
        }
    }

    fn slack(&self) -> f64 {
        BOUND_SLACK * (1.0 + self.radius)
    }

    /// Whether the obstacle's circle about the centre overlaps the swept annulus.
    fn in_annulus(&self) -> bool {
        let half_width = f64::from(self.half_width);
        let max_offset = f64::from(self.front.abs().max(self.back.abs()));

        let d = self.x.hypot(self.y - self.radius);
        let inner = (self.radius - half_width).max(0.0);
        let outer = max_offset.hypot(self.radius + half_width);

        d >= inner - self.slack() && d <= outer + self.slack()
    }

    /// Obstacle position after the robot has turned by `sweep`.
    fn rotated(&self, sweep: f64) -> (f64, f64) {
        let (sin, cos) = sweep.sin_cos();
        let half = (0.5 * sweep).sin();

        // R·(1 − cos θ) written as 2R·sin²(θ/2)
        (
            self.x * cos + self.y * sin - self.radius * sin,
            self.y * cos - self.x * sin + 2.0 * self.radius * half * half,
        )
    }

    /// Whether the obstacle touches the closed footprint after `sweep`.
    fn touches(&self, sweep: f64) -> bool {
        let (x, y) = self.rotated(sweep);
        let slack = self.slack();
        let half_width = f64::from(self.half_width);

        x >= f64::from(self.back) - slack
            && x <= f64::from(self.front) + slack
            && y.abs() <= half_width + slack
    }

    /// Smallest sweep bringing the obstacle onto the footprint.
    fn first_contact(&self) -> Option<f64> {
        if !self.in_annulus() {
            return None;
        }

        let edges = [
            PolarLine::vertical(self.front),
            PolarLine::vertical(self.back),
            PolarLine::horizontal(self.half_width),
            PolarLine::horizontal(-self.half_width),
        ];

        edges
            .iter()
            .flat_map(|edge| edge.sweep_crossings(self.x, self.y, self.radius))
            .filter(|sweep| *sweep <= MAX_SWEEP && self.touches(*sweep))
            .min_by(f64::total_cmp)
    }
}

/// Distance travelled by the robot origin before `point` meets the footprint.
///
/// Expects a turning model with non-zero linear velocity, a finite centre
/// radius and `point` outside the footprint.
pub(super) fn arc_distance(model: &Model, point: &Coordinate) -> f32 {
    let turn = CanonicalTurn::new(model, point);
    match turn.first_contact() {
        Some(sweep) => (turn.radius * sweep) as f32,
        None => f32::INFINITY,
    }
}
