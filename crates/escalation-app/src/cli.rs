//! Command-line arguments for the headless runner.

use std::path::PathBuf;

use clap::Parser;

use escalation_core::config::SessionConfig;
use escalation_core::constants::DEFAULT_INITIAL_SPAWN_RATE;

use crate::runner::RunOptions;

/// Run a scripted session and print the final snapshot as JSON.
#[derive(Debug, Parser)]
#[command(name = "escalation", version)]
pub struct Args {
    /// Difficulty config (JSON). Defaults are used when omitted.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// RNG seed for the scripted kills.
    #[arg(long, default_value_t = 42)]
    pub seed: u64,

    /// Number of ticks to run.
    #[arg(long, default_value_t = 300)]
    pub ticks: u64,

    /// Enemies placed at the start of every tick.
    #[arg(long, default_value_t = 2)]
    pub enemies_per_tick: u32,

    /// Chance that a live enemy is killed on a given tick.
    #[arg(long, default_value_t = 0.25)]
    pub kill_chance: f64,

    /// Starting rate of the spawn controller.
    #[arg(long, default_value_t = DEFAULT_INITIAL_SPAWN_RATE)]
    pub initial_spawn_rate: f64,

    /// Bootstrap the session without a spawn controller.
    #[arg(long)]
    pub no_spawn_controller: bool,

    /// Pace ticks at the session tick rate instead of running flat out.
    #[arg(long)]
    pub realtime: bool,
}

impl Args {
    pub fn session_config(&self) -> SessionConfig {
        SessionConfig {
            initial_spawn_rate: (!self.no_spawn_controller).then_some(self.initial_spawn_rate),
        }
    }

    pub fn run_options(&self) -> RunOptions {
        RunOptions {
            seed: self.seed,
            ticks: self.ticks,
            enemies_per_tick: self.enemies_per_tick,
            kill_chance: if self.kill_chance.is_nan() {
                0.0
            } else {
                self.kill_chance.clamp(0.0, 1.0)
            },
            realtime: self.realtime,
        }
    }
}
