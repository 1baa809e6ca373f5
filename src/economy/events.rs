//! Economy domain: drop and upgrade messages.

use bevy::ecs::message::Message;

use crate::content::ResourceKind;
use crate::economy::upgrades::UpgradeStat;

/// Fired when an enemy death drops resources
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResourceGainedEvent {
    pub resource: ResourceKind,
    pub amount: u32,
}

impl Message for ResourceGainedEvent {}

/// Request to buy one upgrade. Handled before the next floor starts.
#[derive(Debug, Clone, Copy)]
pub struct UpgradeRequest {
    pub stat: UpgradeStat,
}

impl Message for UpgradeRequest {}

/// Request to drop all upgrades for a partial refund
#[derive(Debug, Clone, Copy, Default)]
pub struct UpgradeResetRequest;

impl Message for UpgradeResetRequest {}

/// Result of an `UpgradeRequest`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UpgradeResultEvent {
    pub stat: UpgradeStat,
    pub cost: u32,
    pub purchased: bool,
}

impl Message for UpgradeResultEvent {}
