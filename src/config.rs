//! # Configuration Management
//!
//! This module handles loading and parsing configuration from the
//! sketch-clock.toml file: the jitter seed, where each field sits on the
//! screen, and where the battery level comes from.

use crate::face::FaceLayout;
use crate::prng::{XorShift16, DEFAULT_SEED};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::num::NonZeroU16;
use std::path::Path;
use thiserror::Error;

/// Default configuration file name, looked up in the working directory.
pub const CONFIG_FILE: &str = "sketch-clock.toml";

/// Errors loading or saving the configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config IO: {0}")]
    Io(#[from] io::Error),

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("config serialization: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Zero is a dead state for the jitter generator
    #[error("jitter seed must be non-zero")]
    ZeroSeed,
}

/// Application configuration loaded from sketch-clock.toml
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Jitter settings
    pub face: FaceConfig,
    /// Field placement on the screen
    pub layout: FaceLayout,
    /// Battery level source
    pub battery: BatteryConfig,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FaceConfig {
    /// Starting state of the jitter generator, never 0
    pub seed: u16,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct BatteryConfig {
    /// File holding the battery percentage, e.g. /sys/class/power_supply/BAT0/capacity
    pub capacity_path: Option<String>,
    /// Shown when there is no capacity file or it can't be read
    pub fallback_percent: i16,
}

impl Default for FaceConfig {
    fn default() -> Self {
        Self { seed: DEFAULT_SEED }
    }
}

impl Default for BatteryConfig {
    fn default() -> Self {
        Self {
            capacity_path: None,
            fallback_percent: 100,
        }
    }
}

impl Config {
    /// Load configuration from sketch-clock.toml
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load() -> Self {
        Self::load_from_path(CONFIG_FILE)
    }

    /// Load configuration from specified path
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match Self::try_load_from_path(path) {
            Ok(config) => {
                info!("Loaded configuration from {}", path.display());
                config
            }
            Err(ConfigError::Io(e)) if e.kind() == io::ErrorKind::NotFound => {
                info!("No config file at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                warn!("Ignoring {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load and validate, reporting every failure.
    pub fn try_load_from_path<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse and validate TOML text.
    ///
    /// # Example
    /// ```
    /// use sketch_clock_lib::config::Config;
    ///
    /// let config = Config::parse("[face]\nseed = 42\n").unwrap();
    /// assert_eq!(config.face.seed, 42);
    /// assert!(Config::parse("[face]\nseed = 0\n").is_err());
    /// ```
    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(contents)?;
        config.seed()?;
        Ok(config)
    }

    pub fn seed(&self) -> Result<NonZeroU16, ConfigError> {
        NonZeroU16::new(self.face.seed).ok_or(ConfigError::ZeroSeed)
    }

    /// A fresh generator for this configuration.
    pub fn prng(&self) -> Result<XorShift16, ConfigError> {
        Ok(XorShift16::new(self.seed()?))
    }

    /// Save current configuration to the given path
    pub fn save_to_path<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path.as_ref(), contents)?;
        info!("Configuration saved to {}", path.as_ref().display());
        Ok(())
    }
}
