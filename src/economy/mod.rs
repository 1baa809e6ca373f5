//! Economy domain: enemy drops, the resource inventory, and player upgrades.
//!
//! The inventory and upgrades persist across runs; starting a new run only
//! re-seeds the drop stream.

mod drops;
mod events;
mod inventory;
mod systems;
mod upgrades;


pub use drops::{DropRng, DropTable};
pub use events::{ResourceGainedEvent, UpgradeRequest, UpgradeResetRequest, UpgradeResultEvent};
pub use inventory::Inventory;
pub use upgrades::{PlayerLoadout, StatProgress, UPGRADE_CURRENCY, UpgradeStat, upgrade_cost};

use bevy::prelude::*;

use crate::content::FloorDefaults;
use crate::core::FloorSet;
use crate::economy::systems::{
    drop_loot, handle_upgrade_requests, handle_upgrade_resets, process_resource_gains,
};

pub struct EconomyPlugin;

impl Plugin for EconomyPlugin {
    fn build(&self, app: &mut App) {
        let defaults = app.world().get_resource::<FloorDefaults>();
        let loadout = PlayerLoadout::from_defaults(defaults);
        let table = DropTable::new(
            defaults
                .map(|defaults| defaults.economy.drops.clone())
                .unwrap_or_default(),
        );

        app.insert_resource(loadout)
            .insert_resource(table)
            .init_resource::<Inventory>()
            .init_resource::<DropRng>()
            .add_message::<ResourceGainedEvent>()
            .add_message::<UpgradeRequest>()
            .add_message::<UpgradeResetRequest>()
            .add_message::<UpgradeResultEvent>()
            .add_systems(
                Update,
                (handle_upgrade_resets, handle_upgrade_requests)
                    .chain()
                    .in_set(FloorSet::Outfitting),
            )
            .add_systems(
                Update,
                (drop_loot, process_resource_gains)
                    .chain()
                    .in_set(FloorSet::Population),
            );
    }
}
