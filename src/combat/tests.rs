//! Combat domain: tests for health, damage scaling, and death detection.

use bevy::ecs::message::{MessageReader, Messages};
use bevy::prelude::*;

use super::systems::{apply_damage, detect_player_death, process_deaths};
use super::{
    DamageEvent, DamageSource, DeathEvent, Enemy, Health, Player, PlayerDeathEvent, PlayerWatch,
};
use crate::core::RunProgress;
use crate::modifiers::{FloorDifficulty, MultiplierState, ModifierSet};

#[derive(Resource, Default)]
struct SeenPlayerDeaths(usize);

fn count_player_deaths(
    mut reader: MessageReader<PlayerDeathEvent>,
    mut seen: ResMut<SeenPlayerDeaths>,
) {
    seen.0 += reader.read().count();
}

fn difficulty_with(state: MultiplierState) -> FloorDifficulty {
    let mut difficulty = FloorDifficulty::default();
    difficulty.install(1, state, ModifierSet::new());
    difficulty
}

fn combat_app(difficulty: FloorDifficulty) -> App {
    let mut app = App::new();
    app.add_message::<DamageEvent>()
        .add_message::<DeathEvent>()
        .add_message::<PlayerDeathEvent>()
        .insert_resource(difficulty)
        .init_resource::<RunProgress>()
        .init_resource::<PlayerWatch>()
        .init_resource::<SeenPlayerDeaths>()
        .add_systems(
            Update,
            (
                apply_damage,
                process_deaths,
                detect_player_death,
                count_player_deaths,
            )
                .chain(),
        );
    app
}

fn send_damage(app: &mut App, target: Entity, amount: f32, source: DamageSource) {
    app.world_mut()
        .resource_mut::<Messages<DamageEvent>>()
        .write(DamageEvent {
            target,
            amount,
            source,
        });
}

// -----------------------------------------------------------------------------
// Health tests
// -----------------------------------------------------------------------------

#[test]
fn test_health_damage_and_heal_are_clamped() {
    let mut health = Health::new(50.0);

    assert_eq!(health.take_damage(80.0), 50.0);
    assert!(health.is_dead());
    assert_eq!(health.current, 0.0);

    assert_eq!(health.heal(100.0), 50.0);
    assert_eq!(health.current, 50.0);
    assert_eq!(health.percent(), 1.0);
}

#[test]
fn test_health_ignores_negative_amounts() {
    let mut health = Health::new(10.0);
    assert_eq!(health.take_damage(-5.0), 0.0);
    assert_eq!(health.heal(-5.0), 0.0);
    assert_eq!(health.current, 10.0);
}

// -----------------------------------------------------------------------------
// Damage and death flow
// -----------------------------------------------------------------------------

#[test]
fn test_enemy_damage_uses_enemy_multiplier() {
    let mut app = combat_app(difficulty_with(MultiplierState {
        enemy_damage_mult: 2.0,
        ..MultiplierState::default()
    }));
    let player = app.world_mut().spawn((Player, Health::new(100.0))).id();

    send_damage(&mut app, player, 10.0, DamageSource::Enemy);
    app.update();

    let health = app.world().get::<Health>(player).unwrap();
    assert_eq!(health.current, 80.0);
}

#[test]
fn test_lethal_player_hit_despawns_enemy_and_scores() {
    let mut app = combat_app(difficulty_with(MultiplierState {
        player_damage_mult: 0.5,
        ..MultiplierState::default()
    }));
    app.world_mut().spawn((Player, Health::new(100.0)));
    let enemy = app.world_mut().spawn((Enemy, Health::new(10.0))).id();

    // Halved to 9, enemy survives
    send_damage(&mut app, enemy, 18.0, DamageSource::Player);
    app.update();
    assert_eq!(app.world().get::<Health>(enemy).unwrap().current, 1.0);

    send_damage(&mut app, enemy, 18.0, DamageSource::Player);
    send_damage(&mut app, enemy, 18.0, DamageSource::Player);
    app.update();

    let mut enemies = app.world_mut().query_filtered::<Entity, With<Enemy>>();
    assert_eq!(enemies.iter(app.world()).count(), 0);

    // Second hit on a corpse must not score again
    let progress = app.world().resource::<RunProgress>();
    assert_eq!(progress.score(), progress.score_per_enemy());
}

#[test]
fn test_player_death_fires_every_tick_while_dead() {
    let mut app = combat_app(FloorDifficulty::default());
    let player = app.world_mut().spawn((Player, Health::new(5.0))).id();

    app.update();
    assert_eq!(app.world().resource::<SeenPlayerDeaths>().0, 0);

    send_damage(&mut app, player, 50.0, DamageSource::Enemy);
    app.update();
    app.update();

    assert_eq!(app.world().resource::<SeenPlayerDeaths>().0, 2);
}

#[test]
fn test_missing_player_is_reported_once_per_floor() {
    let mut app = combat_app(FloorDifficulty::default());

    app.update();
    app.update();

    let watch = app.world().resource::<PlayerWatch>();
    assert_eq!(watch.missing_warned_floor, Some(1));
    assert_eq!(app.world().resource::<SeenPlayerDeaths>().0, 0);
}
