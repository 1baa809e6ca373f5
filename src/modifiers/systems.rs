//! Modifiers domain: systems applying the store to live entities.

use bevy::prelude::*;

use crate::combat::{Health, Player};
use crate::modifiers::store::FloorDifficulty;

/// Regenerate (or drain) the player's health at the floor's regen rate.
pub(crate) fn apply_player_health_regen(
    time: Res<Time>,
    difficulty: Res<FloorDifficulty>,
    mut player_query: Query<&mut Health, With<Player>>,
) {
    if difficulty.player_health_regen_rate() == 0.0 {
        return;
    }

    let delta_secs = time.delta_secs();
    for mut health in &mut player_query {
        if health.is_dead() {
            continue;
        }
        difficulty.apply_health_regen_tick(&mut health, delta_secs);
    }
}
