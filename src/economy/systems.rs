//! Economy domain: drop rolling, wallet updates, and upgrade purchases.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::combat::DeathEvent;
use crate::core::RunProgress;
use crate::economy::drops::{DropRng, DropTable};
use crate::economy::events::{
    ResourceGainedEvent, UpgradeRequest, UpgradeResetRequest, UpgradeResultEvent,
};
use crate::economy::inventory::Inventory;
use crate::economy::upgrades::PlayerLoadout;

/// Roll the drop table once per enemy death.
pub(crate) fn drop_loot(
    mut deaths: MessageReader<DeathEvent>,
    table: Res<DropTable>,
    progress: Res<RunProgress>,
    mut drop_rng: ResMut<DropRng>,
    mut gains: MessageWriter<ResourceGainedEvent>,
) {
    for _ in deaths.read() {
        let rng = drop_rng.for_run(progress.run_seed());
        for (resource, amount) in table.roll(rng) {
            gains.write(ResourceGainedEvent { resource, amount });
        }
    }
}

pub(crate) fn process_resource_gains(
    mut gains: MessageReader<ResourceGainedEvent>,
    mut inventory: ResMut<Inventory>,
) {
    for event in gains.read() {
        inventory.add(event.resource, event.amount);
        info!(
            "[ECONOMY] Gained {} {:?}. Total: {}",
            event.amount,
            event.resource,
            inventory.amount(event.resource)
        );
    }
}

pub(crate) fn handle_upgrade_requests(
    mut requests: MessageReader<UpgradeRequest>,
    mut loadout: ResMut<PlayerLoadout>,
    mut inventory: ResMut<Inventory>,
    mut results: MessageWriter<UpgradeResultEvent>,
) {
    for request in requests.read() {
        let cost = loadout.cost_of(request.stat);
        let purchased = loadout.upgrade(request.stat, &mut inventory);
        results.write(UpgradeResultEvent {
            stat: request.stat,
            cost,
            purchased,
        });
    }
}

pub(crate) fn handle_upgrade_resets(
    mut requests: MessageReader<UpgradeResetRequest>,
    mut loadout: ResMut<PlayerLoadout>,
    mut inventory: ResMut<Inventory>,
) {
    for _ in requests.read() {
        loadout.reset(&mut inventory);
    }
}
