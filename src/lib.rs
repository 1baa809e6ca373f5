//! Per-floor encounter engine for a tower-climbing roguelike.
//!
//! Each floor rolls a handful of random modifiers on top of deterministic
//! difficulty scaling, tracks its live enemies and spawners, and resolves as
//! won or lost. Enemy drops fund permanent player upgrades between floors.
//! The domains are Bevy plugins; `FloorEnginePlugin` adds them
//! all in dependency order.

pub mod combat;
pub mod content;
pub mod core;
#[cfg(feature = "dev-tools")]
pub mod debug;
pub mod economy;
pub mod encounter;
pub mod modifiers;
pub mod population;
pub mod waves;

use std::path::PathBuf;

use bevy::prelude::*;

/// Every domain plugin. `ContentPlugin` goes first because the others read
/// `FloorDefaults` while they are built.
pub struct FloorEnginePlugin {
    pub content_path: PathBuf,
}

impl Default for FloorEnginePlugin {
    fn default() -> Self {
        Self {
            content_path: content::ContentPlugin::default().base_path,
        }
    }
}

impl Plugin for FloorEnginePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(content::ContentPlugin {
            base_path: self.content_path.clone(),
        })
        .add_plugins((
            core::CorePlugin,
            economy::EconomyPlugin,
            modifiers::ModifiersPlugin,
            combat::CombatPlugin,
            waves::WavesPlugin,
            population::PopulationPlugin,
            encounter::EncounterPlugin,
        ));

        #[cfg(feature = "dev-tools")]
        app.add_plugins(debug::DebugPlugin);
    }
}
