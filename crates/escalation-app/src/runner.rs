//! Scripted session driver.
//!
//! Stands in for a real game: every tick it places a few enemies and kills
//! live ones at random, letting the session report those kills to the
//! difficulty supervisor. The RNG is seeded, so runs are reproducible.

use std::thread;
use std::time::{Duration, Instant};

use hecs::Entity;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use escalation_core::constants::{ENEMY_DEFAULT_HEALTH, TICK_RATE};
use escalation_core::events::DifficultyEvent;
use escalation_core::state::SessionSnapshot;
use escalation_sim::{world_setup, Session};

/// Nominal duration of one tick.
const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// How the scripted session is driven.
#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    pub seed: u64,
    pub ticks: u64,
    pub enemies_per_tick: u32,
    /// Per-tick kill probability for each live enemy, in `[0, 1]`.
    pub kill_chance: f64,
    /// Sleep between ticks to hold the session tick rate.
    pub realtime: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            seed: 42,
            ticks: 300,
            enemies_per_tick: 2,
            kill_chance: 0.25,
            realtime: false,
        }
    }
}

/// Drive `session` for `options.ticks` ticks and return the last snapshot.
pub fn run(session: &mut Session, options: &RunOptions) -> SessionSnapshot {
    let mut rng = ChaCha8Rng::seed_from_u64(options.seed);
    let mut live: Vec<Entity> = Vec::new();
    let mut snapshot = SessionSnapshot::default();
    let mut next_tick_time = Instant::now();

    for _ in 0..options.ticks {
        for _ in 0..options.enemies_per_tick {
            live.push(world_setup::spawn_enemy(
                session.world_mut(),
                ENEMY_DEFAULT_HEALTH,
            ));
        }

        for &enemy in &live {
            if rng.gen_bool(options.kill_chance) {
                world_setup::damage_enemy(session.world_mut(), enemy, ENEMY_DEFAULT_HEALTH);
            }
        }

        snapshot = session.tick();
        live.retain(|&enemy| session.world().contains(enemy));

        for event in &snapshot.events {
            let DifficultyEvent::SpawnRateIncreased {
                kill_count,
                previous,
                spawn_rate,
            } = event;
            info!(
                tick = snapshot.time.tick,
                kill_count, previous, spawn_rate, "difficulty raised"
            );
        }
        debug!(
            tick = snapshot.time.tick,
            alive = snapshot.enemies_alive,
            kills = snapshot.kill_count,
            "tick complete"
        );

        if options.realtime {
            next_tick_time += TICK_DURATION;
            let now = Instant::now();
            if next_tick_time > now {
                thread::sleep(next_tick_time - now);
            } else if now - next_tick_time > TICK_DURATION * 2 {
                // Too far behind, resync
                next_tick_time = now;
            }
        }
    }

    snapshot
}
