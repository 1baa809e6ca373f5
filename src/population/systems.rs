//! Population domain: keeps registries in step with entity lifecycles.
//!
//! Registration runs right after spawners produce enemies and removal runs
//! right after combat despawns them, so an enemy that is born and killed on
//! the same tick is still counted once in each direction.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::population::events::PopulationChangedEvent;
use crate::population::registry::Population;

/// Register entities that gained `C` this tick.
pub(crate) fn track_additions<C: Component, R: Population>(
    added: Query<Entity, Added<C>>,
    mut registry: ResMut<R>,
    mut changes: MessageWriter<PopulationChangedEvent>,
) {
    for entity in &added {
        if let Some(change) = registry.add(entity) {
            changes.write(PopulationChangedEvent {
                kind: R::KIND,
                change,
            });
        }
    }
}

/// Unregister entities that lost `C` or were despawned.
pub(crate) fn track_removals<C: Component, R: Population>(
    mut removed: RemovedComponents<C>,
    mut registry: ResMut<R>,
    mut changes: MessageWriter<PopulationChangedEvent>,
) {
    for entity in removed.read() {
        if let Some(change) = registry.remove(entity) {
            changes.write(PopulationChangedEvent {
                kind: R::KIND,
                change,
            });
        }
    }
}
