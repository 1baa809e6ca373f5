//! Waves domain: spawner ticking and enemy creation.

use bevy::prelude::*;

use crate::combat::{Enemy, EnemyAttack, Health, MoveSpeed};
use crate::modifiers::FloorDifficulty;
use crate::waves::spawner::WaveSpawner;

pub(crate) fn tick_wave_spawners(
    mut commands: Commands,
    time: Res<Time>,
    difficulty: Res<FloorDifficulty>,
    mut spawners: Query<(Entity, &mut WaveSpawner)>,
) {
    let dt = time.delta_secs();

    for (entity, mut spawner) in &mut spawners {
        let due = spawner.advance(dt);

        for _ in 0..due {
            let mut health = Health::new(spawner.template.health);
            difficulty.modify_enemy_health(&mut health);

            commands.spawn((
                Enemy,
                health,
                EnemyAttack {
                    damage: spawner.template.damage,
                },
                MoveSpeed::new(spawner.enemy_speed()),
            ));
        }

        if spawner.is_finished() {
            info!(
                "[WAVES] Spawner {:?} finished after {} enemies",
                entity,
                spawner.spawned()
            );
            commands.entity(entity).despawn();
        }
    }
}
