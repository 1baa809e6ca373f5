//! Data definitions for the floor configuration file.
//!
//! These structs mirror assets/data/floor_defaults.ron and are used for
//! deserialization. `Default` reproduces the shipped file so a missing
//! file behaves exactly like the stock configuration.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

// ============================================================================
// Root (floor_defaults.ron)
// ============================================================================

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FloorDefaults {
    pub schema_version: u32,
    pub difficulty: DifficultyDefaults,
    pub encounter: EncounterDefaults,
    pub campaign: CampaignDefaults,
    pub player: PlayerDefaults,
    pub waves: Vec<WavePlanDef>,
    #[serde(default)]
    pub economy: EconomyDefaults,
}

impl Default for FloorDefaults {
    fn default() -> Self {
        Self {
            schema_version: 1,
            difficulty: DifficultyDefaults::default(),
            encounter: EncounterDefaults::default(),
            campaign: CampaignDefaults::default(),
            player: PlayerDefaults::default(),
            waves: vec![
                WavePlanDef {
                    spawn_interval_secs: 1.5,
                    start_secs: 0.5,
                    end_secs: 6.0,
                    enemy_health: 30.0,
                    enemy_damage: 4.0,
                    enemy_speed: 3.0,
                    scale_duration: false,
                },
                WavePlanDef {
                    spawn_interval_secs: 2.5,
                    start_secs: 2.0,
                    end_secs: 9.0,
                    enemy_health: 60.0,
                    enemy_damage: 8.0,
                    enemy_speed: 2.0,
                    scale_duration: false,
                },
            ],
            economy: EconomyDefaults::default(),
        }
    }
}

// ============================================================================
// Baseline scaling
// ============================================================================

/// Per-floor growth of enemy stats, in percent per completed floor.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DifficultyDefaults {
    pub enemy_health_percent_per_floor: f32,
    pub enemy_damage_percent_per_floor: f32,
    pub enemy_count_percent_per_floor: f32,
}

impl Default for DifficultyDefaults {
    fn default() -> Self {
        Self {
            enemy_health_percent_per_floor: 10.0,
            enemy_damage_percent_per_floor: 10.0,
            enemy_count_percent_per_floor: 30.0,
        }
    }
}

// ============================================================================
// Encounter completion
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EncounterDefaults {
    /// Wait between "floor is empty" and the Won outcome
    pub settle_delay_secs: f32,
}

impl Default for EncounterDefaults {
    fn default() -> Self {
        Self {
            settle_delay_secs: 1.0,
        }
    }
}

// ============================================================================
// Campaign progression
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CampaignDefaults {
    /// Floor on which the boss fight becomes available
    pub boss_floor: u32,
    pub score_per_enemy: u32,
}

impl Default for CampaignDefaults {
    fn default() -> Self {
        Self {
            boss_floor: 10,
            score_per_enemy: 10,
        }
    }
}

// ============================================================================
// Player baseline
// ============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlayerDefaults {
    pub max_health: f32,
    pub move_speed: f32,
    pub attack_damage: f32,
    pub attacks_per_sec: f32,
}

impl Default for PlayerDefaults {
    fn default() -> Self {
        Self {
            max_health: 100.0,
            move_speed: 5.0,
            attack_damage: 12.0,
            attacks_per_sec: 2.5,
        }
    }
}

// ============================================================================
// Waves
// ============================================================================

/// One spawner process for a floor.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct WavePlanDef {
    pub spawn_interval_secs: f32,
    pub start_secs: f32,
    pub end_secs: f32,
    pub enemy_health: f32,
    pub enemy_damage: f32,
    pub enemy_speed: f32,
    /// Stretch the active window by the enemy count multiplier
    #[serde(default)]
    pub scale_duration: bool,
}

// ============================================================================
// Economy
// ============================================================================

/// Materials enemies drop and upgrades consume.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize, Serialize)]
pub enum ResourceKind {
    GemDust,
    Mushroom,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 2] = [ResourceKind::GemDust, ResourceKind::Mushroom];
}

/// One possible drop: rolled independently on every enemy death.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DropChanceDef {
    pub resource: ResourceKind,
    /// Probability in [0, 1]
    pub chance: f32,
    pub min_amount: u32,
    pub max_amount: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EconomyDefaults {
    /// Gem dust for the first upgrade of any stat
    pub upgrade_base_cost: u32,
    /// Cost growth per upgrade already bought for that stat
    pub upgrade_cost_growth: f32,
    /// Multiplier applied to a stat by each upgrade
    pub upgrade_factor: f32,
    /// Share of spent gem dust returned when upgrades are reset
    pub reset_refund_fraction: f32,
    pub drops: Vec<DropChanceDef>,
}

impl Default for EconomyDefaults {
    fn default() -> Self {
        Self {
            upgrade_base_cost: 10,
            upgrade_cost_growth: 1.06,
            upgrade_factor: 1.2,
            reset_refund_fraction: 0.8,
            drops: vec![
                DropChanceDef {
                    resource: ResourceKind::GemDust,
                    chance: 0.5,
                    min_amount: 1,
                    max_amount: 3,
                },
                DropChanceDef {
                    resource: ResourceKind::Mushroom,
                    chance: 0.25,
                    min_amount: 1,
                    max_amount: 2,
                },
            ],
        }
    }
}
