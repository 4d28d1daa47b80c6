//! Test utilities for Raksha integration tests.

#![allow(dead_code)]

use raksha::{Footprint, Model};

/// Front length of the reference footprint (meters).
pub const FRONT: f32 = 1.3;
/// Back length of the reference footprint (meters).
pub const BACK: f32 = 0.4;
/// Half width of the reference footprint (meters).
pub const HALF_WIDTH: f32 = 0.3;

/// Reference footprint used across the integration tests.
pub fn reference_footprint() -> Footprint {
    Footprint::new(FRONT, BACK, 2.0 * HALF_WIDTH).unwrap()
}

/// Model for the reference footprint with the given velocities.
pub fn model_with(linear: f32, angular: f32) -> Model {
    let mut model = Model::new(reference_footprint());
    model.set_velocities(linear, angular);
    model
}

/// Grid of robot-frame points covering a 6m x 6m area around the robot.
pub fn point_grid(step: f32) -> Vec<(f32, f32)> {
    let n = (6.0 / step) as i32;
    let mut points = Vec::new();
    for i in 0..=n {
        for j in 0..=n {
            points.push((-3.0 + i as f32 * step, -3.0 + j as f32 * step));
        }
    }
    points
}

/// Velocity commands exercising every motion class.
pub fn velocity_commands() -> Vec<(f32, f32)> {
    vec![
        (0.0, 0.0),
        (0.0, 1.0),
        (1.0, 0.0),
        (-1.0, 0.0),
        (1.0, 0.0005),
        (1.0, 1.0),
        (1.0, -1.0),
        (-1.0, 1.0),
        (-1.0, -1.0),
        (0.2, 2.0),
        (0.5, -0.05),
    ]
}

/// Robot-frame position of a static point after the robot has turned by `sweep`.
///
/// Integrates the unicycle model exactly, independent of the crate's
/// turning geometry.
pub fn simulate(linear: f32, angular: f32, x: f32, y: f32, sweep: f64) -> (f64, f64) {
    let (linear, angular) = (f64::from(linear), f64::from(angular));
    let yaw = sweep.copysign(angular);
    let rho = linear / angular;

    let dx = f64::from(x) - rho * yaw.sin();
    let dy = f64::from(y) - rho * (1.0 - yaw.cos());
    let (sin, cos) = yaw.sin_cos();
    (cos * dx + sin * dy, -sin * dx + cos * dy)
}

/// Distance from a robot-frame point to the reference footprint, `0` inside.
pub fn footprint_gap((x, y): (f64, f64)) -> f64 {
    let out_x = (-f64::from(BACK) - x).max(x - f64::from(FRONT)).max(0.0);
    let out_y = (y.abs() - f64::from(HALF_WIDTH)).max(0.0);
    out_x.hypot(out_y)
}
