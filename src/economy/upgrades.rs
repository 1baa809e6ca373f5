//! Economy domain: permanent player upgrades bought with gem dust.
//!
//! Each stat has its own upgrade count; the price of the next upgrade grows
//! geometrically with that count. Upgraded values seed the player spawned at
//! every floor start, before floor modifiers are applied.

use bevy::prelude::*;
use serde::Serialize;

use crate::content::{EconomyDefaults, FloorDefaults, PlayerDefaults, ResourceKind};
use crate::economy::inventory::Inventory;

/// Resource spent on upgrades.
pub const UPGRADE_CURRENCY: ResourceKind = ResourceKind::GemDust;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum UpgradeStat {
    Damage,
    AttackSpeed,
    MaxHealth,
    MoveSpeed,
}

impl UpgradeStat {
    pub const ALL: [UpgradeStat; 4] = [
        UpgradeStat::Damage,
        UpgradeStat::AttackSpeed,
        UpgradeStat::MaxHealth,
        UpgradeStat::MoveSpeed,
    ];

    fn index(&self) -> usize {
        *self as usize
    }

    pub fn label(&self) -> &'static str {
        match self {
            UpgradeStat::Damage => "Damage",
            UpgradeStat::AttackSpeed => "Attack Speed",
            UpgradeStat::MaxHealth => "Max Health",
            UpgradeStat::MoveSpeed => "Move Speed",
        }
    }
}

/// Gem dust for the upgrade after `upgrades_bought` earlier ones.
pub fn upgrade_cost(base_cost: u32, growth: f32, upgrades_bought: u32) -> u32 {
    if upgrades_bought == 0 {
        return base_cost;
    }
    let exponent = i32::try_from(upgrades_bought).unwrap_or(i32::MAX);
    (base_cost as f32 * growth.powi(exponent)).round() as u32
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatProgress {
    pub upgrades: u32,
    pub dust_spent: u32,
}

/// Player base stats plus purchased upgrades.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct PlayerLoadout {
    base: PlayerDefaults,
    base_cost: u32,
    cost_growth: f32,
    upgrade_factor: f32,
    refund_fraction: f32,
    progress: [StatProgress; 4],
}

impl Default for PlayerLoadout {
    fn default() -> Self {
        Self::new(PlayerDefaults::default(), &EconomyDefaults::default())
    }
}

impl PlayerLoadout {
    pub fn from_defaults(defaults: Option<&FloorDefaults>) -> Self {
        match defaults {
            Some(defaults) => Self::new(defaults.player.clone(), &defaults.economy),
            None => {
                warn!("[ECONOMY] FloorDefaults missing, using built-in player stats");
                Self::default()
            }
        }
    }

    pub fn new(base: PlayerDefaults, economy: &EconomyDefaults) -> Self {
        Self {
            base,
            base_cost: economy.upgrade_base_cost,
            cost_growth: economy.upgrade_cost_growth,
            upgrade_factor: economy.upgrade_factor,
            refund_fraction: economy.reset_refund_fraction,
            progress: [StatProgress::default(); 4],
        }
    }

    pub fn progress(&self, stat: UpgradeStat) -> StatProgress {
        self.progress[stat.index()]
    }

    pub fn upgrades(&self, stat: UpgradeStat) -> u32 {
        self.progress(stat).upgrades
    }

    /// Price of the next upgrade for `stat`
    pub fn cost_of(&self, stat: UpgradeStat) -> u32 {
        upgrade_cost(self.base_cost, self.cost_growth, self.upgrades(stat))
    }

    pub fn total_dust_spent(&self) -> u32 {
        self.progress.iter().map(|p| p.dust_spent).sum()
    }

    fn scaled(&self, base: f32, stat: UpgradeStat) -> f32 {
        let exponent = i32::try_from(self.upgrades(stat)).unwrap_or(i32::MAX);
        base * self.upgrade_factor.powi(exponent)
    }

    pub fn attack_damage(&self) -> f32 {
        self.scaled(self.base.attack_damage, UpgradeStat::Damage)
    }

    pub fn attacks_per_sec(&self) -> f32 {
        self.scaled(self.base.attacks_per_sec, UpgradeStat::AttackSpeed)
    }

    pub fn max_health(&self) -> f32 {
        self.scaled(self.base.max_health, UpgradeStat::MaxHealth)
    }

    pub fn move_speed(&self) -> f32 {
        self.scaled(self.base.move_speed, UpgradeStat::MoveSpeed)
    }

    /// Buy one upgrade of `stat`. Returns false when the inventory cannot pay.
    pub fn upgrade(&mut self, stat: UpgradeStat, inventory: &mut Inventory) -> bool {
        let cost = self.cost_of(stat);
        if !inventory.use_resource(UPGRADE_CURRENCY, cost) {
            info!(
                "[ECONOMY] Not enough {:?} to upgrade {}: need {}",
                UPGRADE_CURRENCY,
                stat.label(),
                cost
            );
            return false;
        }

        let progress = &mut self.progress[stat.index()];
        progress.upgrades += 1;
        progress.dust_spent = progress.dust_spent.saturating_add(cost);
        info!(
            "[ECONOMY] {} upgraded to level {}. Next cost: {}",
            stat.label(),
            self.upgrades(stat),
            self.cost_of(stat)
        );
        true
    }

    /// Drop every upgrade and refund part of the gem dust spent on them.
    /// Returns the refund.
    pub fn reset(&mut self, inventory: &mut Inventory) -> u32 {
        let refund = (self.total_dust_spent() as f32 * self.refund_fraction).floor() as u32;
        if refund > 0 {
            inventory.add(UPGRADE_CURRENCY, refund);
        }
        self.progress = [StatProgress::default(); 4];
        info!("[ECONOMY] Upgrades reset, refunded {} {:?}", refund, UPGRADE_CURRENCY);
        refund
    }
}
