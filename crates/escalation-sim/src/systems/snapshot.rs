//! Snapshot system: queries the ECS world and builds a SessionSnapshot.
//!
//! This system is read-only and never modifies the world.

use hecs::World;

use escalation_core::components::Enemy;
use escalation_core::events::DifficultyEvent;
use escalation_core::state::SessionSnapshot;
use escalation_core::types::SimTime;

use crate::supervisor::DifficultySupervisor;

/// Build a SessionSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    spawn_rate: Option<f64>,
    supervisor: Option<&DifficultySupervisor>,
    events: Vec<DifficultyEvent>,
) -> SessionSnapshot {
    SessionSnapshot {
        time: *time,
        kill_count: supervisor.map_or(0, DifficultySupervisor::kill_count),
        spawn_rate,
        difficulty_active: supervisor.is_some_and(DifficultySupervisor::is_active),
        enemies_alive: count_enemies(world),
        events,
    }
}

fn count_enemies(world: &World) -> u32 {
    world.query::<&Enemy>().iter().count() as u32
}
