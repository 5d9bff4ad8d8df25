//! Configuration management for the gesture remote

use crate::{constants, Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Swipe detection thresholds
    pub swipe: SwipeConfig,

    /// Confirm (thumbs-up) detection thresholds
    pub confirm: ConfirmConfig,

    /// Index finger extension gate
    pub extension: ExtensionConfig,

    /// Remote dispatch settings
    pub dispatch: DispatchConfig,
}

/// Swipe detection thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwipeConfig {
    /// Seconds of fingertip history to analyse
    pub history_window_s: f64,

    /// Normalized displacement needed
    pub min_distance: f64,

    /// Normalized units per second needed
    pub min_velocity: f64,

    /// Share of the displacement the primary axis must carry (0-1)
    pub directionality_ratio: f64,

    /// Seconds before another swipe can fire
    pub cooldown_s: f64,

    /// Minimum samples in the history
    pub min_samples: usize,

    /// Minimum seconds between oldest and newest sample
    pub min_elapsed_s: f64,
}

/// Confirm detection thresholds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfirmConfig {
    /// Normalized height of the thumb tip above its MCP knuckle
    pub thumb_rise_min: f64,

    /// Seconds before the confirm gesture can fire again
    pub cooldown_s: f64,
}

/// Extension gate configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtensionConfig {
    /// Normalized tip-to-MCP distance above which the index is extended
    pub index_extend_threshold: f64,
}

/// Remote dispatch configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    /// Sink type: "log" or "adb"
    pub sink: String,

    /// ADB device serial or host:port, if any
    pub adb_host: Option<String>,

    /// Path or name of the adb executable
    pub adb_program: String,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            history_window_s: constants::HISTORY_WINDOW_S,
            min_distance: constants::MIN_SWIPE_DISTANCE,
            min_velocity: constants::MIN_SWIPE_VELOCITY,
            directionality_ratio: constants::DIRECTIONALITY_RATIO,
            cooldown_s: constants::GESTURE_COOLDOWN_S,
            min_samples: constants::MIN_SWIPE_SAMPLES,
            min_elapsed_s: constants::MIN_SWIPE_ELAPSED_S,
        }
    }
}

impl Default for ConfirmConfig {
    fn default() -> Self {
        Self {
            thumb_rise_min: constants::THUMB_RISE_MIN,
            cooldown_s: constants::THUMBS_UP_COOLDOWN_S,
        }
    }
}

impl Default for ExtensionConfig {
    fn default() -> Self {
        Self {
            index_extend_threshold: constants::INDEX_EXTEND_THRESHOLD,
        }
    }
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            sink: "log".to_string(),
            adb_host: None,
            adb_program: "adb".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::IoError(e.to_string()))?;

        Self::from_yaml(&content)
    }

    /// Load a configuration file and check its thresholds
    ///
    /// The dispatch sink is checked later, once command-line overrides apply.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config = Self::from_file(path)?;
        config.validate_engine()?;
        Ok(config)
    }

    /// Parse configuration from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))
    }

    /// Save configuration to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, content).map_err(|e| Error::IoError(e.to_string()))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        self.validate_engine()?;

        match self.dispatch.sink.to_lowercase().as_str() {
            "log" | "adb" => Ok(()),
            other => Err(Error::ConfigError(format!("Unknown dispatch sink: {other}"))),
        }
    }

    /// Validate the classifier thresholds only, ignoring the dispatch section
    pub fn validate_engine(&self) -> Result<()> {
        let swipe = &self.swipe;
        if swipe.history_window_s.is_nan() || swipe.history_window_s <= 0.0 {
            return Err(Error::ConfigError("History window must be greater than 0".to_string()));
        }
        if !is_non_negative(swipe.min_distance) || !is_non_negative(swipe.min_velocity) {
            return Err(Error::ConfigError(
                "Swipe distance and velocity thresholds must not be negative".to_string(),
            ));
        }
        if !(swipe.directionality_ratio > 0.0 && swipe.directionality_ratio <= 1.0) {
            return Err(Error::ConfigError(
                "Directionality ratio must be in (0, 1]".to_string(),
            ));
        }
        if swipe.min_samples < 2 {
            return Err(Error::ConfigError(
                "Swipe needs at least 2 history samples".to_string(),
            ));
        }
        if !is_non_negative(swipe.min_elapsed_s) {
            return Err(Error::ConfigError("Minimum elapsed time must not be negative".to_string()));
        }

        if !is_non_negative(swipe.cooldown_s) || !is_non_negative(self.confirm.cooldown_s) {
            return Err(Error::ConfigError("Cooldowns must not be negative".to_string()));
        }
        if !is_non_negative(self.confirm.thumb_rise_min) {
            return Err(Error::ConfigError("Thumb rise must not be negative".to_string()));
        }
        if !is_non_negative(self.extension.index_extend_threshold) {
            return Err(Error::ConfigError(
                "Index extension threshold must not be negative".to_string(),
            ));
        }

        Ok(())
    }
}

/// False for negative values and NaN
fn is_non_negative(value: f64) -> bool {
    value >= 0.0
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Hand Gesture Remote Configuration

# Swipe detection
swipe:
  history_window_s: 0.35
  min_distance: 0.12
  min_velocity: 0.35
  directionality_ratio: 0.7
  cooldown_s: 1.0
  min_samples: 5
  min_elapsed_s: 0.04

# Thumbs-up confirm
confirm:
  thumb_rise_min: 0.08
  cooldown_s: 1.0

# Index finger pointing check
extension:
  index_extend_threshold: 0.14

# Where recognized gestures go ("log" or "adb")
dispatch:
  sink: "log"
  adb_host: null
  adb_program: "adb"
"#;
