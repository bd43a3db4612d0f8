//! Entity factories for setting up the session world.

use hecs::{Entity, World};

use escalation_core::components::*;

/// Spawn the session's spawn controller at the given rate.
pub fn spawn_spawn_controller(world: &mut World, enemy_spawn_per_second: f64) -> Entity {
    world.spawn((SpawnController {
        enemy_spawn_per_second,
    },))
}

/// Place a single enemy with full health.
pub fn spawn_enemy(world: &mut World, health: f64) -> Entity {
    world.spawn((
        Enemy,
        Health {
            current: health,
            max: health,
        },
    ))
}

/// Apply damage to an enemy. Returns `true` if the hit was lethal.
pub fn damage_enemy(world: &mut World, entity: Entity, amount: f64) -> bool {
    match world.query_one_mut::<(&mut Health, &Enemy)>(entity) {
        Ok((health, _enemy)) => {
            health.current -= amount;
            health.current <= 0.0
        }
        Err(_) => false,
    }
}

/// Flag an enemy for removal regardless of its health.
pub fn mark_destroyed(world: &mut World, entity: Entity) -> bool {
    if world.get::<&Enemy>(entity).is_err() {
        return false;
    }
    world.insert_one(entity, Destroyed).is_ok()
}
