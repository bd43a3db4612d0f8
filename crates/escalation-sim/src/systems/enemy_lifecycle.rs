//! Enemy lifecycle system: removes dead enemies and reports how many died.

use hecs::{Entity, World};

use escalation_core::components::{Destroyed, Enemy, Health};

/// Despawn every enemy at zero health or flagged `Destroyed`.
/// Uses a pre-allocated buffer to avoid per-tick allocation.
///
/// Returns the number of enemies destroyed this tick.
pub fn run(world: &mut World, despawn_buffer: &mut Vec<Entity>) -> u32 {
    despawn_buffer.clear();

    for (entity, (health, _enemy)) in world.query_mut::<(&Health, &Enemy)>() {
        if health.current <= 0.0 {
            despawn_buffer.push(entity);
        }
    }

    for (entity, (_destroyed, _enemy)) in world.query_mut::<(&Destroyed, &Enemy)>() {
        if !despawn_buffer.contains(&entity) {
            despawn_buffer.push(entity);
        }
    }

    let mut destroyed = 0;
    for entity in despawn_buffer.drain(..) {
        if world.despawn(entity).is_ok() {
            destroyed += 1;
        }
    }
    destroyed
}
