//! Main RestraintConfig and conversion methods.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::geometry::Footprint;
use crate::model::Model;

use super::defaults;
use super::error::ConfigLoadError;

/// Full Raksha configuration loaded from YAML
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct RestraintConfig {
    /// Robot geometry
    #[serde(default)]
    pub robot: RobotSettings,

    /// Safety margins
    #[serde(default)]
    pub safety: SafetySettings,
}

/// Robot geometry settings (meters)
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RobotSettings {
    /// Distance from the robot origin to the front edge
    #[serde(default = "defaults::length_front")]
    pub length_front: f32,

    /// Distance from the robot origin to the rear edge
    #[serde(default = "defaults::length_back")]
    pub length_back: f32,

    /// Full robot width
    #[serde(default = "defaults::width")]
    pub width: f32,
}

impl Default for RobotSettings {
    fn default() -> Self {
        Self {
            length_front: defaults::length_front(),
            length_back: defaults::length_back(),
            width: defaults::width(),
        }
    }
}

/// Safety margin settings
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SafetySettings {
    /// Extra length added to the front and back of the footprint (meters)
    #[serde(default = "defaults::buffer")]
    pub buffer: f32,
}

impl Default for SafetySettings {
    fn default() -> Self {
        Self {
            buffer: defaults::buffer(),
        }
    }
}

impl RestraintConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> std::result::Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        let config = Self::from_yaml(&contents)?;
        log::info!("Loaded restraint config from {}", path.display());
        Ok(config)
    }

    /// Load from default config path (configs/config.yaml)
    pub fn load_default() -> std::result::Result<Self, ConfigLoadError> {
        let path = Path::new("configs/config.yaml");
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("{} not found, using default footprint", path.display());
            Ok(Self::default())
        }
    }

    /// Parse from YAML string
    pub fn from_yaml(yaml: &str) -> std::result::Result<Self, ConfigLoadError> {
        serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))
    }

    /// Build the footprint including the safety buffer
    pub fn to_footprint(&self) -> Result<Footprint> {
        Footprint::with_buffer(
            self.robot.length_front,
            self.robot.length_back,
            self.robot.width,
            self.safety.buffer,
        )
    }

    /// Build a stationary model for the configured footprint
    pub fn to_model(&self) -> Result<Model> {
        Ok(Model::new(self.to_footprint()?))
    }
}
