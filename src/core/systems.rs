//! Core domain: floor start, endless toggles, and verdict handling.

use std::time::Duration;

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::combat::{Enemy, Health, MoveSpeed, Player, PlayerAttack};
use crate::content::{EncounterDefaults, FloorDefaults};
use crate::core::events::{
    EndlessModeRequest, FloorStartedEvent, FloorTransitionContext, RunVerdictEvent,
};
use crate::core::resources::{FloorPhase, RunProgress, RunVerdict};
use crate::economy::PlayerLoadout;
use crate::encounter::{ActiveEncounter, EncounterResolvedEvent};
use crate::modifiers::{FloorDifficulty, FloorModifiersAppliedEvent};
use crate::population::{EnemyRegistry, SpawnerRegistry};
use crate::waves::WaveSpawner;

pub(crate) fn handle_endless_requests(
    mut requests: MessageReader<EndlessModeRequest>,
    mut progress: ResMut<RunProgress>,
) {
    for request in requests.read() {
        if !progress.set_endless_mode(request.enabled) {
            info!(
                "[RUN] Endless mode request refused on floor {}",
                progress.current_floor()
            );
        }
    }
}

/// Settle delay for the monitor. Values `Duration` cannot hold fall back to
/// the built-in delay.
pub(crate) fn settle_delay_from_secs(secs: f32) -> Duration {
    Duration::try_from_secs_f32(secs.max(0.0)).unwrap_or_else(|e| {
        let fallback = EncounterDefaults::default().settle_delay_secs;
        warn!(
            "[FLOOR] Settle delay {} s unusable ({}), using {} s",
            secs, e, fallback
        );
        Duration::from_secs_f32(fallback)
    })
}

/// Roll modifiers for the upcoming floor if needed and hand off its context.
pub(crate) fn prepare_floor(
    progress: Res<RunProgress>,
    mut difficulty: ResMut<FloorDifficulty>,
    mut started: MessageWriter<FloorStartedEvent>,
) {
    let floor = progress.current_floor();
    if !difficulty.are_modifiers_generated() {
        difficulty.generate_floor_modifiers(floor, Some(progress.floor_seed()));
    }

    let context = FloorTransitionContext {
        floor,
        boss_pending: progress.is_boss_floor(),
        enemy_speed_adjustment: difficulty.enemy_speed_adjustment(),
    };
    let forecast = difficulty.modifier_set().forecast();
    info!("[FLOOR] Floor {} ready: {}", floor, forecast);

    started.write(FloorStartedEvent { context, forecast });
}

/// Bring up the floor described by a `FloorStartedEvent`: replay modifiers,
/// arm the monitor, then spawn the upgraded player and the floor's spawners.
pub(crate) fn start_floor(
    mut commands: Commands,
    mut started: MessageReader<FloorStartedEvent>,
    defaults: Res<FloorDefaults>,
    loadout: Res<PlayerLoadout>,
    progress: Res<RunProgress>,
    mut difficulty: ResMut<FloorDifficulty>,
    mut encounter: ResMut<ActiveEncounter>,
    mut enemies: ResMut<EnemyRegistry>,
    mut spawners: ResMut<SpawnerRegistry>,
    mut phase: ResMut<FloorPhase>,
    mut applied: MessageWriter<FloorModifiersAppliedEvent>,
    players: Query<Entity, With<Player>>,
) {
    for event in started.read() {
        let context = event.context;

        difficulty.apply_existing_modifiers(context.floor, Some(progress.floor_seed()));
        applied.write(FloorModifiersAppliedEvent {
            floor: context.floor,
            multipliers: difficulty.multipliers(),
            enemy_speed_adjustment: difficulty.enemy_speed_adjustment(),
            modifiers: difficulty.active_modifiers(),
        });

        // Previous floor's members were torn down already
        enemies.clear();
        spawners.clear();

        let settle_delay = settle_delay_from_secs(defaults.encounter.settle_delay_secs);
        encounter.start(context.floor, settle_delay, context.boss_pending);

        for player in &players {
            commands.entity(player).despawn();
        }
        let mut health = Health::new(loadout.max_health());
        difficulty.modify_player_health(&mut health);
        let mut speed = MoveSpeed::new(loadout.move_speed());
        difficulty.modify_player_speed(&mut speed);
        let attack = PlayerAttack {
            damage: loadout.attack_damage(),
            attacks_per_sec: loadout.attacks_per_sec(),
        };
        commands.spawn((Player, health, speed, attack));

        for plan in &defaults.waves {
            commands.spawn(WaveSpawner::from_plan(
                plan,
                &difficulty,
                context.enemy_speed_adjustment,
            ));
        }

        info!(
            "[FLOOR] Floor {} started with {} spawner(s){}",
            context.floor,
            defaults.waves.len(),
            if context.boss_pending { ", boss floor" } else { "" }
        );
        *phase = FloorPhase::InProgress;
    }
}

/// Turn a resolved encounter into a run verdict and tear the floor down.
pub(crate) fn handle_encounter_resolved(
    mut commands: Commands,
    mut resolved: MessageReader<EncounterResolvedEvent>,
    mut progress: ResMut<RunProgress>,
    mut difficulty: ResMut<FloorDifficulty>,
    mut phase: ResMut<FloorPhase>,
    mut verdicts: MessageWriter<RunVerdictEvent>,
    leftovers: Query<Entity, Or<(With<Enemy>, With<WaveSpawner>)>>,
) {
    for event in resolved.read() {
        let verdict = progress.complete_floor(event.outcome, event.boss_encounter);

        if let RunVerdict::Advanced { .. } = verdict {
            difficulty.mark_for_modifier_generation();
        }

        for entity in &leftovers {
            commands.entity(entity).despawn();
        }

        *phase = match verdict {
            RunVerdict::Advanced { .. } => FloorPhase::Preparing,
            terminal => FloorPhase::Finished(terminal),
        };

        verdicts.write(RunVerdictEvent {
            floor: event.floor,
            verdict,
            score: progress.score(),
        });
    }
}
