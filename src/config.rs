//! Config fields definitions for the framework's own resource consumption

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("could not parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Resources the framework declares for itself when registering with the master.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FrameworkConfig {
    #[serde(default = "default_cpus")]
    pub cpus: f64,
    #[serde(default = "default_mem")]
    pub mem: f64, // in megabytes
    #[serde(default = "default_disk")]
    pub disk: f64, // in megabytes
}

fn default_cpus() -> f64 {
    0.2
}

fn default_mem() -> f64 {
    256.0
}

fn default_disk() -> f64 {
    250.0
}

impl Default for FrameworkConfig {
    fn default() -> Self {
        Self {
            cpus: default_cpus(),
            mem: default_mem(),
            disk: default_disk(),
        }
    }
}

impl FrameworkConfig {
    pub fn new(cpus: f64, mem: f64, disk: f64) -> Self {
        Self { cpus, mem, disk }
    }

    pub fn from_yaml_str(config: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str::<FrameworkConfig>(config)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let config_yaml = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&config_yaml)
    }
}
