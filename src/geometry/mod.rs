//! Robot footprint and line primitives.
//!
//! Provides the shapes the distance model reasons about:
//! - [`Footprint`]: axis-aligned robot rectangle with safety buffer
//! - [`PolarLine`]: straight line queried by angle or radius

mod footprint;
mod polar_line;

pub use footprint::Footprint;
pub use polar_line::{ANGLE_EPSILON, PolarLine};
