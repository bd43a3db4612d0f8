//! Difficulty supervisor: raises the spawn rate as enemies die.
//!
//! The supervisor holds a non-owning handle to the session's
//! [`SpawnController`] entity, wired in once at construction. Without one it
//! stays degraded for the whole session and every notification is a no-op.

use hecs::{Entity, World};
use tracing::{error, info, warn};

use escalation_core::components::SpawnController;
use escalation_core::config::DifficultyConfig;
use escalation_core::events::DifficultyEvent;

/// Counts kills and bumps the spawn controller's rate on each threshold crossing.
#[derive(Debug)]
pub struct DifficultySupervisor {
    config: DifficultyConfig,
    spawn_controller: Option<Entity>,
    kill_count: u64,
}

impl DifficultySupervisor {
    /// Wire a supervisor to `spawn_controller`.
    ///
    /// A missing handle, or one that does not name a live `SpawnController`
    /// in `world`, leaves the supervisor degraded.
    pub fn new(config: DifficultyConfig, world: &World, spawn_controller: Option<Entity>) -> Self {
        let spawn_controller =
            spawn_controller.filter(|&entity| world.get::<&SpawnController>(entity).is_ok());
        if spawn_controller.is_none() {
            error!("difficulty supervisor could not find a spawn controller; scaling disabled");
        }

        Self {
            config,
            spawn_controller,
            kill_count: 0,
        }
    }

    /// Notification from the enemy lifecycle that one enemy was destroyed.
    ///
    /// Writes the spawn rate at most once, never lowers it, and never pushes
    /// it past an active cap.
    pub fn on_enemy_destroyed(&mut self, world: &mut World, events: &mut Vec<DifficultyEvent>) {
        let Some(entity) = self.spawn_controller else {
            return;
        };

        self.kill_count += 1;

        let threshold = self.config.kills_for_spawn_rate_increase;
        if threshold <= 0 || self.kill_count % threshold as u64 != 0 {
            return;
        }

        let controller = match world.query_one_mut::<&mut SpawnController>(entity) {
            Ok(controller) => controller,
            Err(_) => {
                warn!(?entity, "spawn controller vanished; skipping rate increase");
                return;
            }
        };

        let current = controller.enemy_spawn_per_second;
        let mut candidate = current + self.config.spawn_rate_increase_amount;
        if let Some(cap) = self.config.spawn_rate_cap() {
            if candidate > cap {
                candidate = cap;
            }
        }

        if candidate > current {
            controller.enemy_spawn_per_second = candidate;
            info!(
                kill_count = self.kill_count,
                spawn_rate = candidate,
                "spawn rate increased to {candidate}"
            );
            events.push(DifficultyEvent::SpawnRateIncreased {
                kill_count: self.kill_count,
                previous: current,
                spawn_rate: candidate,
            });
        }
    }

    /// Kills counted since the session started.
    pub fn kill_count(&self) -> u64 {
        self.kill_count
    }

    pub fn config(&self) -> &DifficultyConfig {
        &self.config
    }

    /// Whether a spawn controller is wired in.
    pub fn is_active(&self) -> bool {
        self.spawn_controller.is_some()
    }

    pub fn spawn_controller(&self) -> Option<Entity> {
        self.spawn_controller
    }
}
