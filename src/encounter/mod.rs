//! Encounter domain: floor completion monitor plugin wiring and public exports.

mod events;
mod monitor;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use events::EncounterResolvedEvent;
pub use monitor::{Census, EncounterMonitor, EncounterOutcome, EncounterState};
pub use resources::ActiveEncounter;

use bevy::prelude::*;

use crate::core::FloorSet;
use crate::encounter::systems::evaluate_encounter;

pub struct EncounterPlugin;

impl Plugin for EncounterPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ActiveEncounter>()
            .add_message::<EncounterResolvedEvent>()
            .add_systems(Update, evaluate_encounter.in_set(FloorSet::Encounter));
    }
}
