//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

/// The host's enemy spawner. Exactly one per session, if any.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnController {
    /// Current spawn rate in enemies per second.
    pub enemy_spawn_per_second: f64,
}

/// Marker component for hostile entities.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Enemy;

/// Hit points. An enemy at or below zero is dead.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Health {
    pub current: f64,
    pub max: f64,
}

/// Marker attached by the host to enemies removed without a health check
/// (scripted kills, collisions handled elsewhere).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Destroyed;
