//! Waves domain: spawner plugin wiring and public exports.

mod spawner;
mod systems;


pub use spawner::{EnemyTemplate, MIN_SPAWN_INTERVAL_SECS, WaveSpawner};

use bevy::prelude::*;

use crate::core::{FloorSet, floor_in_progress};
use crate::waves::systems::tick_wave_spawners;

pub struct WavesPlugin;

impl Plugin for WavesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            tick_wave_spawners
                .in_set(FloorSet::Waves)
                .run_if(floor_in_progress),
        );
    }
}
