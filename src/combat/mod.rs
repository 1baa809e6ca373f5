//! Combat domain: health, damage, and death plugin wiring and public exports.

mod components;
mod events;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{Enemy, EnemyAttack, Health, MoveSpeed, Player, PlayerAttack};
pub use events::{DamageEvent, DamageSource, DeathEvent, PlayerDeathEvent};
pub use systems::PlayerWatch;

use bevy::prelude::*;

use crate::combat::systems::{apply_damage, detect_player_death, process_deaths};
use crate::core::{FloorSet, floor_in_progress};

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlayerWatch>()
            .add_message::<DamageEvent>()
            .add_message::<DeathEvent>()
            .add_message::<PlayerDeathEvent>()
            .add_systems(
                Update,
                (apply_damage, process_deaths, detect_player_death)
                    .chain()
                    .in_set(FloorSet::Combat)
                    .run_if(floor_in_progress),
            );
    }
}
