//! Core domain: run progression, floor lifecycle, and system ordering.

mod events;
mod resources;
mod state;
mod systems;


pub use events::{EndlessModeRequest, FloorStartedEvent, FloorTransitionContext, RunVerdictEvent};
pub use resources::{FloorPhase, RunProgress, RunVerdict, floor_in_progress, floor_preparing};
pub use state::FloorSet;

use bevy::prelude::*;

use crate::content::FloorDefaults;
use crate::core::systems::{
    handle_encounter_resolved, handle_endless_requests, prepare_floor, start_floor,
};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        let progress = RunProgress::from_defaults(app.world().get_resource::<FloorDefaults>());

        app.insert_resource(progress)
            .init_resource::<FloorPhase>()
            .add_message::<FloorStartedEvent>()
            .add_message::<RunVerdictEvent>()
            .add_message::<EndlessModeRequest>()
            .configure_sets(
                Update,
                (
                    FloorSet::Outfitting,
                    FloorSet::Lifecycle,
                    FloorSet::Waves,
                    FloorSet::Registration,
                    FloorSet::Vitals,
                    FloorSet::Combat,
                    FloorSet::Population,
                    FloorSet::Encounter,
                    FloorSet::Progression,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (
                    handle_endless_requests,
                    prepare_floor.run_if(floor_preparing),
                    start_floor,
                )
                    .chain()
                    .in_set(FloorSet::Lifecycle),
            )
            .add_systems(
                Update,
                handle_encounter_resolved.in_set(FloorSet::Progression),
            );
    }
}
