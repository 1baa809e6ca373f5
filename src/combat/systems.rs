//! Combat domain: damage application, enemy deaths, and player vital-sign checks.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::combat::components::{Enemy, Health, Player};
use crate::combat::events::{DamageEvent, DamageSource, DeathEvent, PlayerDeathEvent};
use crate::core::RunProgress;
use crate::modifiers::FloorDifficulty;

/// Tracks the floor on which a missing player was last reported.
#[derive(Resource, Debug, Default)]
pub struct PlayerWatch {
    pub missing_warned_floor: Option<u32>,
}

pub(crate) fn apply_damage(
    mut damage_events: MessageReader<DamageEvent>,
    mut death_events: MessageWriter<DeathEvent>,
    difficulty: Res<FloorDifficulty>,
    mut query: Query<(&mut Health, Has<Enemy>)>,
) {
    for event in damage_events.read() {
        let Ok((mut health, is_enemy)) = query.get_mut(event.target) else {
            continue;
        };

        // Already-dead targets don't die twice
        if health.is_dead() {
            continue;
        }

        let mut amount = event.amount;
        match event.source {
            DamageSource::Player => difficulty.modify_player_damage(&mut amount),
            DamageSource::Enemy => difficulty.modify_enemy_damage(&mut amount),
        }

        health.take_damage(amount);

        if is_enemy && health.is_dead() {
            death_events.write(DeathEvent {
                entity: event.target,
            });
        }
    }
}

/// Despawn dead enemies and award score. Despawning unregisters them.
pub(crate) fn process_deaths(
    mut commands: Commands,
    mut death_events: MessageReader<DeathEvent>,
    mut progress: ResMut<RunProgress>,
    enemy_query: Query<Entity, With<Enemy>>,
) {
    for event in death_events.read() {
        if let Ok(entity) = enemy_query.get(event.entity) {
            progress.award_kill();
            commands.entity(entity).despawn();
        }
    }
}

pub(crate) fn detect_player_death(
    player_query: Query<(Entity, &Health), With<Player>>,
    progress: Res<RunProgress>,
    mut watch: ResMut<PlayerWatch>,
    mut player_deaths: MessageWriter<PlayerDeathEvent>,
) {
    let Ok((entity, health)) = player_query.single() else {
        let floor = progress.current_floor();
        if watch.missing_warned_floor != Some(floor) {
            warn!(
                "[ENCOUNTER] No player health found on floor {}, loss detection disabled",
                floor
            );
            watch.missing_warned_floor = Some(floor);
        }
        return;
    };

    if health.is_dead() {
        player_deaths.write(PlayerDeathEvent { entity });
    }
}
