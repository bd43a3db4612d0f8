//! Session: the host side of the game.
//!
//! `Session` owns the hecs world, the optional spawn controller handle and
//! the difficulty supervisor. Each tick it removes dead enemies, reports
//! every kill to the supervisor, and produces a `SessionSnapshot`. It is
//! headless and single-threaded.

use hecs::{Entity, World};
use tracing::{debug, error};

use escalation_core::components::SpawnController;
use escalation_core::config::{DifficultyConfig, SessionConfig};
use escalation_core::events::DifficultyEvent;
use escalation_core::state::SessionSnapshot;
use escalation_core::types::SimTime;

use crate::supervisor::DifficultySupervisor;
use crate::systems;
use crate::world_setup;

/// A single game session. Owns the ECS world and everything wired into it.
pub struct Session {
    world: World,
    time: SimTime,
    spawn_controller: Option<Entity>,
    supervisor: Option<DifficultySupervisor>,
    despawn_buffer: Vec<Entity>,
    events: Vec<DifficultyEvent>,
}

impl Session {
    /// Bootstrap a session. The spawn controller is created here, if the
    /// config asks for one; the supervisor is installed separately.
    pub fn new(config: SessionConfig) -> Self {
        let mut world = World::new();
        let spawn_controller = config
            .initial_spawn_rate
            .map(|rate| world_setup::spawn_spawn_controller(&mut world, rate));

        Self {
            world,
            time: SimTime::default(),
            spawn_controller,
            supervisor: None,
            despawn_buffer: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Bootstrap a session and install a supervisor in one step.
    pub fn with_difficulty(config: SessionConfig, difficulty: DifficultyConfig) -> Self {
        let mut session = Self::new(config);
        session.install_supervisor(difficulty);
        session
    }

    /// Construct the session's difficulty supervisor, wired to its spawn
    /// controller.
    ///
    /// Only one supervisor may exist per session. A second attempt is logged
    /// and discarded, the original stays in charge, and `false` is returned.
    pub fn install_supervisor(&mut self, difficulty: DifficultyConfig) -> bool {
        if self.supervisor.is_some() {
            error!("attempted to create a second difficulty supervisor; discarding it");
            return false;
        }

        self.supervisor = Some(DifficultySupervisor::new(
            difficulty,
            &self.world,
            self.spawn_controller,
        ));
        true
    }

    /// Report one destroyed enemy to the supervisor, for enemies removed
    /// outside the lifecycle system.
    pub fn notify_enemy_destroyed(&mut self) {
        if let Some(supervisor) = self.supervisor.as_mut() {
            supervisor.on_enemy_destroyed(&mut self.world, &mut self.events);
        }
    }

    /// Advance the session by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> SessionSnapshot {
        let kills = systems::enemy_lifecycle::run(&mut self.world, &mut self.despawn_buffer);
        if kills > 0 {
            debug!(tick = self.time.tick, kills, "enemies destroyed");
        }
        for _ in 0..kills {
            self.notify_enemy_destroyed();
        }

        self.time.advance();

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.spawn_rate(),
            self.supervisor.as_ref(),
            events,
        )
    }

    /// Get the current session time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Get a mutable reference to the ECS world, for the host to place and
    /// damage enemies.
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn supervisor(&self) -> Option<&DifficultySupervisor> {
        self.supervisor.as_ref()
    }

    pub fn spawn_controller(&self) -> Option<Entity> {
        self.spawn_controller
    }

    /// Current spawn rate, if the session has a spawn controller.
    pub fn spawn_rate(&self) -> Option<f64> {
        let entity = self.spawn_controller?;
        self.world
            .get::<&SpawnController>(entity)
            .ok()
            .map(|controller| controller.enemy_spawn_per_second)
    }
}
