//! Content domain: floor configuration loading and validation.

mod data;
mod loader;
mod validation;

pub use data::{
    CampaignDefaults, DifficultyDefaults, DropChanceDef, EconomyDefaults, EncounterDefaults,
    FloorDefaults, PlayerDefaults, ResourceKind, WavePlanDef,
};
pub use loader::{ContentLoadError, FLOOR_DEFAULTS_FILE, load_floor_defaults, parse_floor_defaults};
pub use validation::{MAX_SETTLE_DELAY_SECS, ValidationError, validate_floor_defaults};

use bevy::prelude::*;
use std::path::{Path, PathBuf};

/// Loads floor_defaults.ron into a `FloorDefaults` resource when the plugin is built.
/// A host that already inserted `FloorDefaults` keeps its own values.
pub struct ContentPlugin {
    pub base_path: PathBuf,
}

impl Default for ContentPlugin {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from("assets/data"),
        }
    }
}

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        if app.world().contains_resource::<FloorDefaults>() {
            info!("[CONTENT] FloorDefaults provided by host, skipping file load");
            return;
        }

        app.insert_resource(load_or_default(&self.base_path));
    }
}

/// Load and validate the configuration, falling back to built-in defaults on any error.
pub fn load_or_default(base_path: &Path) -> FloorDefaults {
    let defaults = match load_floor_defaults(base_path) {
        Ok(defaults) => defaults,
        Err(e) => {
            warn!("[CONTENT] {}. Using built-in floor defaults.", e);
            return FloorDefaults::default();
        }
    };

    let errors = validate_floor_defaults(&defaults);
    if !errors.is_empty() {
        for error in &errors {
            error!("[CONTENT] Invalid floor configuration: {}", error);
        }
        warn!(
            "[CONTENT] {} validation error(s). Using built-in floor defaults.",
            errors.len()
        );
        return FloorDefaults::default();
    }

    info!(
        "[CONTENT] Loaded floor defaults (schema v{}, {} wave plan(s))",
        defaults.schema_version,
        defaults.waves.len()
    );
    defaults
}
