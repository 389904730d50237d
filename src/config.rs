//! Tunable simulation constants and the ~/.lane_runner/ data directory.
//!
//! Every field has a default, so a config file only needs the keys it wants
//! to override:
//!
//! ```json
//! { "initial_speed": 0.3, "coin_chance": 0.5 }
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name of the config inside the data directory.
pub const CONFIG_FILE: &str = "config.json";

/// File name of the log inside the data directory.
pub const LOG_FILE: &str = "lane_runner.log";

/// Errors raised while loading a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config JSON in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid config value: {0}")]
    Invalid(String),
}

/// Simulation parameters. Speeds are in track rows per tick, jump physics in
/// track units per second.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunnerConfig {
    /// Scroll speed at the start of a run (rows/tick).
    pub initial_speed: f64,
    /// Added to the scroll speed every `speed_ramp_interval` ticks.
    pub speed_increment: f64,
    /// Ticks between speed increases.
    pub speed_ramp_interval: u64,
    /// Ticks between spawner firings.
    pub spawn_interval_ticks: u64,
    /// Chance that a spawner firing produces anything at all.
    pub spawn_chance: f64,
    /// Chance that a spawned entity is a coin (coin variant only).
    pub coin_chance: f64,
    /// Upward velocity applied by a jump (units/s).
    pub jump_velocity: f64,
    /// Downward acceleration while airborne (units/s²).
    pub gravity: f64,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            initial_speed: 0.25,
            speed_increment: 0.02,
            speed_ramp_interval: 600,
            spawn_interval_ticks: 45,
            spawn_chance: 0.9,
            coin_chance: 0.35,
            jump_velocity: 12.0,
            gravity: 40.0,
        }
    }
}

impl RunnerConfig {
    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.initial_speed > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "initial_speed must be positive, got {}",
                self.initial_speed
            )));
        }
        if !(self.speed_increment >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "speed_increment must not be negative, got {}",
                self.speed_increment
            )));
        }
        if self.speed_ramp_interval == 0 {
            return Err(ConfigError::Invalid(
                "speed_ramp_interval must be at least 1 tick".to_string(),
            ));
        }
        if self.spawn_interval_ticks == 0 {
            return Err(ConfigError::Invalid(
                "spawn_interval_ticks must be at least 1 tick".to_string(),
            ));
        }
        for (name, value) in [
            ("spawn_chance", self.spawn_chance),
            ("coin_chance", self.coin_chance),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::Invalid(format!(
                    "{} must be within 0..=1, got {}",
                    name, value
                )));
            }
        }
        if !(self.jump_velocity > 0.0) || !(self.gravity > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "jump_velocity and gravity must be positive, got {} and {}",
                self.jump_velocity, self.gravity
            )));
        }
        Ok(())
    }

    /// Parse and validate a config from a JSON string.
    pub fn from_json(json: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: RunnerConfig =
            serde_json::from_str(json).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Load a config from an explicit path. A missing file is an error.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json(&json, path)?;
        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load `~/.lane_runner/config.json`, falling back to defaults when the
    /// file does not exist.
    pub fn load_default() -> Result<Self, ConfigError> {
        let path = data_path(CONFIG_FILE).map_err(|source| ConfigError::Io {
            path: PathBuf::from(CONFIG_FILE),
            source,
        })?;
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(&path)
    }
}

/// Get the ~/.lane_runner/ directory path, creating it if needed.
pub fn data_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(".lane_runner");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the full path for a file in ~/.lane_runner/.
pub fn data_path(filename: &str) -> io::Result<PathBuf> {
    Ok(data_dir()?.join(filename))
}
