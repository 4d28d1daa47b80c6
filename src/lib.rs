//! # Raksha
//!
//! Footprint collision-distance kernel for velocity-based safety restraint.
//!
//! ## Overview
//!
//! Given a rectangular robot footprint and the commanded velocity, Raksha
//! answers how far the robot travels before a point in its local frame is
//! struck by the footprint. A safety layer queries it once per obstacle
//! point and throttles or stops motion accordingly.
//!
//! - **Footprint** - Axis-aligned rectangle with a safety buffer
//! - **Coordinate** - Finite point with Cartesian and polar views
//! - **PolarLine** - Line queried by angle or radius
//! - **Model** - Straight and turning collision distance
//!
//! ## Quick Start
//!
//! ```rust
//! use raksha::{Footprint, Model};
//!
//! let footprint = Footprint::with_buffer(0.17, 0.17, 0.34, 0.05)?;
//! let mut model = Model::new(footprint);
//!
//! // Once per control cycle
//! model.set_velocities(0.3, 0.5);
//!
//! // Once per obstacle point (robot frame)
//! let distance = model.distance(0.4, 0.1)?;
//! assert!(distance > 0.0 && distance.is_finite());
//! # Ok::<(), raksha::RestraintError>(())
//! ```
//!
//! ## Coordinate System
//!
//! Uses ROS REP-103 convention:
//! - X: Forward (positive ahead of robot)
//! - Y: Left (positive to robot's left)
//! - Theta: Rotation in radians, CCW positive from +X axis
//!
//! Distances are meters of travel of the robot origin. `0` means the point
//! is already inside the footprint, `f32::INFINITY` that it is never reached.

#![warn(missing_docs)]

// Core types
pub mod core;

// Footprint and line primitives
pub mod geometry;

// Collision distance model
pub mod model;

// YAML configuration
pub mod config;

mod error;

// Re-export commonly used types
pub use core::{Coordinate, RangeScan};

pub use geometry::{Footprint, PolarLine};

pub use model::{Model, STRAIGHT_THRESHOLD};

pub use config::{ConfigLoadError, RestraintConfig};

pub use error::{RestraintError, Result};
