//! Core value types for the restraint kernel.
//!
//! - [`Coordinate`]: finite robot-frame point with Cartesian and polar views
//! - [`RangeScan`]: robot-frame range scan feeding batch queries
//! - [`math`]: angle helpers shared by the line and turning geometry

mod coordinate;
pub mod math;
mod scan;

pub use coordinate::Coordinate;
pub use scan::RangeScan;
