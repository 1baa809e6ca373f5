//! Encounter domain: tests for the completion monitor and its system.

use std::time::Duration;

use bevy::ecs::message::{MessageReader, Messages};
use bevy::prelude::*;

use super::systems::evaluate_encounter;
use super::{
    ActiveEncounter, Census, EncounterMonitor, EncounterOutcome, EncounterResolvedEvent,
    EncounterState,
};
use crate::combat::PlayerDeathEvent;
use crate::population::{
    EnemyRegistry, PopulationChange, PopulationChangedEvent, PopulationKind, SpawnerRegistry,
};

const SETTLE: Duration = Duration::from_secs(1);

fn census(enemies: usize, spawners: usize) -> Census {
    Census {
        enemies: Some(enemies),
        spawners: Some(spawners),
    }
}

/// Monitor that has seen one spawner and one enemy come and go.
fn emptied_monitor(boss: bool) -> EncounterMonitor {
    let mut monitor = EncounterMonitor::new(SETTLE, boss);
    assert_eq!(
        monitor.on_population_changed(PopulationKind::Spawners, census(0, 1)),
        None
    );
    assert_eq!(
        monitor.on_population_changed(PopulationKind::Enemies, census(1, 1)),
        None
    );
    monitor
}

// -----------------------------------------------------------------------------
// Monitor state machine
// -----------------------------------------------------------------------------

#[test]
fn test_monitor_starts_active() {
    let monitor = EncounterMonitor::new(SETTLE, false);
    assert_eq!(monitor.state(), EncounterState::Active);
    assert_eq!(monitor.outcome(), None);
}

#[test]
fn test_win_waits_for_settle_delay() {
    let mut monitor = emptied_monitor(false);
    monitor.on_population_changed(PopulationKind::Spawners, census(1, 0));
    assert_eq!(
        monitor.on_population_changed(PopulationKind::Enemies, census(0, 0)),
        None
    );
    assert_eq!(
        monitor.state(),
        EncounterState::Completing { remaining: SETTLE }
    );

    assert_eq!(monitor.tick(Duration::from_millis(600)), None);
    assert_eq!(monitor.tick(Duration::from_millis(399)), None);
    assert_eq!(monitor.tick(Duration::from_millis(1)), Some(EncounterOutcome::Won));
    assert_eq!(monitor.outcome(), Some(EncounterOutcome::Won));
}

#[test]
fn test_repeated_empty_notifications_resolve_once() {
    let mut monitor = emptied_monitor(false);
    monitor.on_population_changed(PopulationKind::Spawners, census(1, 0));
    monitor.on_population_changed(PopulationKind::Enemies, census(0, 0));
    monitor.on_population_changed(PopulationKind::Enemies, census(0, 0));

    let mut wins = 0;
    for _ in 0..10 {
        if monitor.tick(Duration::from_millis(250)).is_some() {
            wins += 1;
        }
        monitor.on_population_changed(PopulationKind::Enemies, census(0, 0));
    }

    assert_eq!(wins, 1);
}

#[test]
fn test_completing_is_not_restarted() {
    let mut monitor = emptied_monitor(false);
    monitor.on_population_changed(PopulationKind::Spawners, census(1, 0));
    monitor.on_population_changed(PopulationKind::Enemies, census(0, 0));
    monitor.tick(Duration::from_millis(700));

    monitor.on_population_changed(PopulationKind::Enemies, census(0, 0));

    assert_eq!(
        monitor.state(),
        EncounterState::Completing {
            remaining: Duration::from_millis(300)
        }
    );
}

#[test]
fn test_player_death_loses_immediately_once() {
    let mut monitor = emptied_monitor(false);
    assert_eq!(monitor.on_player_death(), Some(EncounterOutcome::Lost));
    assert_eq!(monitor.on_player_death(), None);
    assert_eq!(monitor.outcome(), Some(EncounterOutcome::Lost));
}

#[test]
fn test_death_before_clear_on_same_tick_is_lost() {
    let mut monitor = emptied_monitor(false);
    monitor.on_population_changed(PopulationKind::Spawners, census(1, 0));

    assert_eq!(monitor.on_player_death(), Some(EncounterOutcome::Lost));
    assert_eq!(
        monitor.on_population_changed(PopulationKind::Enemies, census(0, 0)),
        None
    );
    assert_eq!(monitor.tick(SETTLE), None);
    assert_eq!(monitor.outcome(), Some(EncounterOutcome::Lost));
}

#[test]
fn test_death_during_settle_still_wins() {
    let mut monitor = emptied_monitor(false);
    monitor.on_population_changed(PopulationKind::Spawners, census(1, 0));
    monitor.on_population_changed(PopulationKind::Enemies, census(0, 0));

    assert_eq!(monitor.on_player_death(), None);
    assert_eq!(monitor.tick(SETTLE), Some(EncounterOutcome::Won));
}

#[test]
fn test_unobserved_registry_blocks_win() {
    let mut monitor = EncounterMonitor::new(SETTLE, false);

    // Spawners came and went but no enemy has ever registered
    monitor.on_population_changed(PopulationKind::Spawners, census(0, 1));
    monitor.on_population_changed(PopulationKind::Spawners, census(0, 0));

    assert_eq!(monitor.state(), EncounterState::Active);
}

#[test]
fn test_absent_registry_is_vacuously_clear() {
    let mut monitor = EncounterMonitor::new(SETTLE, false);
    let enemies_only = Census {
        enemies: Some(0),
        spawners: None,
    };

    monitor.on_population_changed(PopulationKind::Enemies, enemies_only);

    assert_eq!(
        monitor.state(),
        EncounterState::Completing { remaining: SETTLE }
    );
}

#[test]
fn test_nothing_observed_never_completes() {
    let mut monitor = EncounterMonitor::new(SETTLE, false);
    assert_eq!(monitor.tick(Duration::from_secs(60)), None);
    assert_eq!(monitor.state(), EncounterState::Active);
}

#[test]
fn test_zero_settle_delay_resolves_on_clear() {
    let mut monitor = EncounterMonitor::new(Duration::ZERO, false);
    monitor.on_population_changed(PopulationKind::Enemies, census(1, 0));
    assert_eq!(
        monitor.on_population_changed(PopulationKind::Enemies, census(0, 0)),
        None
    );

    let mut monitor = EncounterMonitor::new(Duration::ZERO, false);
    monitor.on_population_changed(PopulationKind::Spawners, census(0, 0));
    assert_eq!(
        monitor.on_population_changed(PopulationKind::Enemies, census(0, 0)),
        Some(EncounterOutcome::Won)
    );
}

#[test]
fn test_boss_flag_is_reported_not_acted_on() {
    let mut monitor = emptied_monitor(true);
    monitor.on_population_changed(PopulationKind::Spawners, census(1, 0));
    monitor.on_population_changed(PopulationKind::Enemies, census(0, 0));

    assert!(monitor.is_boss_encounter());
    assert_eq!(monitor.tick(SETTLE), Some(EncounterOutcome::Won));
}

// -----------------------------------------------------------------------------
// ActiveEncounter and the evaluate system
// -----------------------------------------------------------------------------

#[test]
fn test_active_encounter_lifecycle() {
    let mut encounter = ActiveEncounter::default();
    assert!(!encounter.is_active());

    encounter.start(4, SETTLE, false);
    assert!(encounter.is_active());
    assert_eq!(encounter.floor, 4);

    encounter.monitor_mut().unwrap().on_player_death();
    assert!(!encounter.is_active());
    assert_eq!(encounter.outcome(), Some(EncounterOutcome::Lost));

    encounter.reset();
    assert!(encounter.monitor().is_none());
}

#[derive(Resource, Default)]
struct Resolved(Vec<EncounterResolvedEvent>);

fn collect_resolved(mut reader: MessageReader<EncounterResolvedEvent>, mut seen: ResMut<Resolved>) {
    seen.0.extend(reader.read().copied());
}

fn encounter_app() -> App {
    let mut app = App::new();
    app.add_message::<PlayerDeathEvent>()
        .add_message::<PopulationChangedEvent>()
        .add_message::<EncounterResolvedEvent>()
        .init_resource::<Time>()
        .init_resource::<ActiveEncounter>()
        .init_resource::<EnemyRegistry>()
        .init_resource::<SpawnerRegistry>()
        .init_resource::<Resolved>()
        .add_systems(Update, (evaluate_encounter, collect_resolved).chain());
    app
}

fn write_change(app: &mut App, kind: PopulationKind, change: PopulationChange) {
    app.world_mut()
        .resource_mut::<Messages<PopulationChangedEvent>>()
        .write(PopulationChangedEvent { kind, change });
}

/// Registers and immediately unregisters one member of each kind.
fn empty_floor(app: &mut App) {
    let spawner = app.world_mut().spawn_empty().id();
    let enemy = app.world_mut().spawn_empty().id();
    for (kind, member) in [
        (PopulationKind::Spawners, spawner),
        (PopulationKind::Enemies, enemy),
    ] {
        let change = match kind {
            PopulationKind::Spawners => app.world_mut().resource_mut::<SpawnerRegistry>().add(member),
            PopulationKind::Enemies => app.world_mut().resource_mut::<EnemyRegistry>().add(member),
        };
        write_change(app, kind, change.unwrap());
    }
    app.world_mut().resource_mut::<SpawnerRegistry>().clear();
    app.world_mut().resource_mut::<EnemyRegistry>().clear();
    write_change(
        app,
        PopulationKind::Enemies,
        PopulationChange::Removed { count: 0 },
    );
}

#[test]
fn test_system_waits_for_delay_and_reports_boss_flag() {
    let mut app = encounter_app();
    app.world_mut()
        .resource_mut::<ActiveEncounter>()
        .start(10, SETTLE, true);

    empty_floor(&mut app);
    app.update();
    assert!(app.world().resource::<Resolved>().0.is_empty());

    app.world_mut()
        .resource_mut::<Time>()
        .advance_by(Duration::from_millis(500));
    app.update();
    assert!(app.world().resource::<Resolved>().0.is_empty());

    app.update();
    app.update();

    let resolved = &app.world().resource::<Resolved>().0;
    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].outcome, EncounterOutcome::Won);
    assert_eq!(resolved[0].floor, 10);
    assert!(resolved[0].boss_encounter);
}

#[test]
fn test_system_lost_wins_the_race() {
    let mut app = encounter_app();
    app.world_mut()
        .resource_mut::<ActiveEncounter>()
        .start(2, Duration::ZERO, false);
    let player = app.world_mut().spawn_empty().id();

    empty_floor(&mut app);
    app.world_mut()
        .resource_mut::<Messages<PlayerDeathEvent>>()
        .write(PlayerDeathEvent { entity: player });
    app.update();
    app.update();

    let resolved = &app.world().resource::<Resolved>().0;
    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].outcome, EncounterOutcome::Lost);
}

#[test]
fn test_system_without_monitor_drops_messages() {
    let mut app = encounter_app();
    empty_floor(&mut app);
    app.update();

    app.world_mut()
        .resource_mut::<ActiveEncounter>()
        .start(1, Duration::ZERO, false);
    app.update();

    assert!(app.world().resource::<Resolved>().0.is_empty());
    assert!(app.world().resource::<ActiveEncounter>().is_active());
}

#[test]
fn test_system_drains_remaining_messages_after_resolving() {
    let mut app = encounter_app();
    app.world_mut()
        .resource_mut::<ActiveEncounter>()
        .start(4, Duration::ZERO, false);
    let player = app.world_mut().spawn_empty().id();

    for _ in 0..2 {
        app.world_mut()
            .resource_mut::<Messages<PlayerDeathEvent>>()
            .write(PlayerDeathEvent { entity: player });
    }
    empty_floor(&mut app);
    app.update();

    assert_eq!(
        app.world().resource::<ActiveEncounter>().outcome(),
        Some(EncounterOutcome::Lost)
    );

    // A fresh monitor must not see the previous tick's changes
    app.world_mut()
        .resource_mut::<ActiveEncounter>()
        .start(5, Duration::ZERO, false);
    app.update();

    let resolved = &app.world().resource::<Resolved>().0;
    assert_eq!(resolved.len(), 1);
    assert_eq!(resolved[0].outcome, EncounterOutcome::Lost);
    assert!(app.world().resource::<ActiveEncounter>().is_active());
}
