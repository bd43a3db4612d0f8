//! Session snapshot: the visible state handed to the frontend each tick.

use serde::{Deserialize, Serialize};

use crate::events::DifficultyEvent;
use crate::types::SimTime;

/// Complete session state produced after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub time: SimTime,
    /// Kills counted by the difficulty supervisor.
    pub kill_count: u64,
    /// Current spawn rate, or `None` when the session has no spawn controller.
    pub spawn_rate: Option<f64>,
    /// Whether difficulty scaling is wired to a spawn controller.
    pub difficulty_active: bool,
    pub enemies_alive: u32,
    pub events: Vec<DifficultyEvent>,
}
