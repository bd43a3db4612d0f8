//! ECS systems that operate on the session world each tick.
//!
//! Systems are pure functions that take `&mut World` (or `&World` for read-only).
//! They do not own state; all state lives in components.

pub mod enemy_lifecycle;
pub mod snapshot;
