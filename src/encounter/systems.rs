//! Encounter domain: feeds the monitor and publishes its outcome.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::combat::PlayerDeathEvent;
use crate::encounter::events::EncounterResolvedEvent;
use crate::encounter::monitor::{Census, EncounterOutcome};
use crate::encounter::resources::ActiveEncounter;
use crate::population::{EnemyRegistry, PopulationChangedEvent, SpawnerRegistry};

/// Settle countdown first, then deaths, then population changes, so a death
/// on the same tick as the last kill resolves as `Lost`.
pub(crate) fn evaluate_encounter(
    time: Res<Time>,
    mut encounter: ResMut<ActiveEncounter>,
    mut player_deaths: MessageReader<PlayerDeathEvent>,
    mut population_changes: MessageReader<PopulationChangedEvent>,
    enemies: Option<Res<EnemyRegistry>>,
    spawners: Option<Res<SpawnerRegistry>>,
    mut resolved: MessageWriter<EncounterResolvedEvent>,
) {
    let floor = encounter.floor;
    let Some(monitor) = encounter.monitor_mut() else {
        player_deaths.clear();
        population_changes.clear();
        return;
    };

    let census = Census {
        enemies: enemies.as_ref().map(|registry| registry.count()),
        spawners: spawners.as_ref().map(|registry| registry.count()),
    };

    let mut outcome: Option<EncounterOutcome> = monitor.tick(time.delta());

    for _ in player_deaths.read() {
        if outcome.is_none() {
            outcome = monitor.on_player_death();
        }
    }

    for change in population_changes.read() {
        if outcome.is_none() {
            outcome = monitor.on_population_changed(change.kind, census);
        }
    }

    if let Some(outcome) = outcome {
        info!("[ENCOUNTER] Floor {} resolved: {:?}", floor, outcome);
        resolved.write(EncounterResolvedEvent {
            floor,
            outcome,
            boss_encounter: monitor.is_boss_encounter(),
        });
    }
}
