//! Configuration loading for Raksha.
//!
//! Robot dimensions and the safety buffer are loaded from a YAML file. Missing
//! fields default to a 0.34 m square footprint centred on the origin with a
//! 0.05 m buffer front and back.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use raksha::config::RestraintConfig;
//!
//! // Load from default path (configs/config.yaml)
//! let config = RestraintConfig::load_default()?;
//!
//! // Build the kernel
//! let mut model = config.to_model()?;
//! model.set_velocities(0.2, 0.1);
//! ```
//!
//! ## Example YAML
//!
//! ```yaml
//! robot:
//!   length_front: 0.17   # origin to front edge
//!   length_back: 0.17    # origin to rear edge
//!   width: 0.34
//!
//! safety:
//!   buffer: 0.05         # added to front and back
//! ```

mod defaults;
mod error;
mod restraint;

pub use error::ConfigLoadError;
pub use restraint::{RestraintConfig, RobotSettings, SafetySettings};
