//! Session host for ESCALATION.
//!
//! Owns the hecs ECS world, runs the enemy lifecycle each tick,
//! and feeds kills to the difficulty supervisor.

pub mod session;
pub mod supervisor;
pub mod systems;
pub mod world_setup;

pub use escalation_core as core;
pub use session::Session;
pub use supervisor::DifficultySupervisor;
