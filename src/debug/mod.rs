//! Debug domain: dev-tools diagnostics for registries and floor results.

mod state;
mod systems;

#[cfg(test)]
mod tests;

pub use state::FloorDiagnostics;

use bevy::prelude::*;

use crate::core::FloorSet;
use crate::debug::systems::{begin_floor_diagnostics, log_floor_summary, log_population_changes};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FloorDiagnostics>().add_systems(
            Update,
            (
                begin_floor_diagnostics,
                log_population_changes,
                log_floor_summary,
            )
                .chain()
                .after(FloorSet::Progression),
        );
    }
}
