//! Error types for loading session configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to load or validate a [`DifficultyConfig`](crate::config::DifficultyConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed difficulty config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("spawn_rate_increase_amount must be a finite non-negative number, got {0}")]
    InvalidIncrease(f64),
    #[error("max_spawn_rate must be finite, got {0}")]
    InvalidMaxSpawnRate(f64),
}
