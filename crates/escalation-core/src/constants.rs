//! Session constants and difficulty tuning defaults.

/// Session tick rate (Hz).
pub const TICK_RATE: u32 = 30;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Difficulty scaling ---

/// Kills required per spawn-rate increase.
pub const DEFAULT_KILLS_FOR_SPAWN_RATE_INCREASE: i32 = 10;

/// Spawn rate added on each threshold crossing (enemies per second).
pub const DEFAULT_SPAWN_RATE_INCREASE_AMOUNT: f64 = 0.1;

/// Spawn rate ceiling (enemies per second). Zero or below disables the cap.
pub const DEFAULT_MAX_SPAWN_RATE: f64 = 5.0;

// --- Enemies ---

/// Starting spawn rate of a freshly bootstrapped spawn controller.
pub const DEFAULT_INITIAL_SPAWN_RATE: f64 = 1.0;

/// Hit points of an enemy placed with default settings.
pub const ENEMY_DEFAULT_HEALTH: f64 = 10.0;
