//! Difficulty tuning loaded once per session.
//!
//! Every field falls back to its default, so a config file only needs the
//! values it overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::ConfigError;

/// Spawn-rate scaling parameters. Static for the lifetime of a session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DifficultyConfig {
    /// Kills per spawn-rate increase. Zero or negative disables scaling.
    pub kills_for_spawn_rate_increase: i32,
    /// Added to the spawn rate on each threshold crossing.
    pub spawn_rate_increase_amount: f64,
    /// Spawn rate ceiling. Zero or negative means unlimited.
    pub max_spawn_rate: f64,
}

impl Default for DifficultyConfig {
    fn default() -> Self {
        Self {
            kills_for_spawn_rate_increase: DEFAULT_KILLS_FOR_SPAWN_RATE_INCREASE,
            spawn_rate_increase_amount: DEFAULT_SPAWN_RATE_INCREASE_AMOUNT,
            max_spawn_rate: DEFAULT_MAX_SPAWN_RATE,
        }
    }
}

impl DifficultyConfig {
    /// Parse and validate a JSON document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Reject values that would let the supervisor lower or corrupt the rate.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let increase = self.spawn_rate_increase_amount;
        if !increase.is_finite() || increase < 0.0 {
            return Err(ConfigError::InvalidIncrease(increase));
        }
        if !self.max_spawn_rate.is_finite() {
            return Err(ConfigError::InvalidMaxSpawnRate(self.max_spawn_rate));
        }
        Ok(())
    }

    /// Whether kill thresholds can ever be crossed.
    pub fn scaling_enabled(&self) -> bool {
        self.kills_for_spawn_rate_increase > 0
    }

    /// The active cap, if any.
    pub fn spawn_rate_cap(&self) -> Option<f64> {
        (self.max_spawn_rate > 0.0).then_some(self.max_spawn_rate)
    }
}

/// Settings for bootstrapping a new session.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Starting rate of the session's spawn controller.
    /// `None` bootstraps a session without one.
    pub initial_spawn_rate: Option<f64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            initial_spawn_rate: Some(DEFAULT_INITIAL_SPAWN_RATE),
        }
    }
}
