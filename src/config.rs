//! Registry configuration
//!
//! Every field has a default, so an empty document (or no file at all) is a
//! valid configuration.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::ConfigError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Number of entities to reserve room for up front
    #[serde(default)]
    pub initial_capacity: usize,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter used when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Emit a debug event for every successful assignment
    #[serde(default)]
    pub trace_assignments: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            trace_assignments: false,
        }
    }
}

impl RegistryConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(text)?)
    }

    /// Save configuration to a YAML file
    pub fn to_yaml<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let yaml = serde_yaml::to_string(self)?;
        fs::write(path, yaml)?;
        Ok(())
    }
}
