//! Events emitted by the session for UI and audio feedback.

use serde::{Deserialize, Serialize};

/// Difficulty changes observed during a tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DifficultyEvent {
    /// The spawn controller's rate was raised.
    SpawnRateIncreased {
        /// Kill count at the threshold crossing that caused the increase.
        kill_count: u64,
        previous: f64,
        spawn_rate: f64,
    },
}
