//! Modifiers domain: modifier catalog, difficulty generator, and multiplier store.

mod catalog;
mod events;
mod generator;
mod store;
mod systems;


pub use catalog::{FloorModifier, IntensityLevel, ModifierAttribute, ModifierSet};
pub use events::FloorModifiersAppliedEvent;
pub use generator::{DifficultyGenerator, ModifierRng, floor_seed, modifier_count_for_roll};
pub use store::{
    AppliedModifiers, ENEMY_MULTIPLIER_FLOOR, FloorDifficulty, MultiplierState,
    PLAYER_MULTIPLIER_FLOOR, apply_modifiers,
};

use bevy::prelude::*;

use crate::content::FloorDefaults;
use crate::core::{FloorSet, floor_in_progress};
use crate::modifiers::systems::apply_player_health_regen;

pub struct ModifiersPlugin;

impl Plugin for ModifiersPlugin {
    fn build(&self, app: &mut App) {
        let difficulty = FloorDifficulty::from_defaults(app.world().get_resource::<FloorDefaults>());

        app.insert_resource(difficulty)
            .add_message::<FloorModifiersAppliedEvent>()
            .add_systems(
                Update,
                apply_player_health_regen
                    .in_set(FloorSet::Vitals)
                    .run_if(floor_in_progress),
            );
    }
}
