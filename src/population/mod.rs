//! Population domain: enemy and spawner registries with change notification.

mod events;
mod registry;
mod systems;


pub use events::PopulationChangedEvent;
pub use registry::{
    EnemyRegistry, Population, PopulationChange, PopulationKind, PopulationRegistry,
    SpawnerRegistry,
};

use bevy::prelude::*;

use crate::combat::Enemy;
use crate::core::FloorSet;
use crate::population::systems::{track_additions, track_removals};
use crate::waves::WaveSpawner;

pub struct PopulationPlugin;

impl Plugin for PopulationPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EnemyRegistry>()
            .init_resource::<SpawnerRegistry>()
            .add_message::<PopulationChangedEvent>()
            .add_systems(
                Update,
                (
                    track_additions::<Enemy, EnemyRegistry>,
                    track_additions::<WaveSpawner, SpawnerRegistry>,
                )
                    .in_set(FloorSet::Registration),
            )
            .add_systems(
                Update,
                (
                    track_removals::<Enemy, EnemyRegistry>,
                    track_removals::<WaveSpawner, SpawnerRegistry>,
                )
                    .in_set(FloorSet::Population),
            );
    }
}
