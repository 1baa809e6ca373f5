//! Modifiers domain: the multiplier store and its apply step.

use bevy::prelude::*;
use serde::Serialize;

use crate::combat::{Health, MoveSpeed};
use crate::content::{DifficultyDefaults, FloorDefaults};
use crate::modifiers::catalog::{FloorModifier, ModifierAttribute, ModifierSet};
use crate::modifiers::generator::DifficultyGenerator;

/// Lowest value a player-favoring multiplier may reach.
pub const PLAYER_MULTIPLIER_FLOOR: f32 = 0.5;
/// Lowest value an enemy-scaling multiplier may reach.
pub const ENEMY_MULTIPLIER_FLOOR: f32 = 1.0;

/// Active multipliers derived from baseline scaling and applied modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MultiplierState {
    pub enemy_health_mult: f32,
    pub enemy_damage_mult: f32,
    pub enemy_count_mult: f32,
    pub player_speed_mult: f32,
    pub player_damage_mult: f32,
    pub player_health_mult: f32,
    /// Health per second; negative values drain health
    pub player_health_regen_rate: f32,
}

impl Default for MultiplierState {
    fn default() -> Self {
        Self {
            enemy_health_mult: 1.0,
            enemy_damage_mult: 1.0,
            enemy_count_mult: 1.0,
            player_speed_mult: 1.0,
            player_damage_mult: 1.0,
            player_health_mult: 1.0,
            player_health_regen_rate: 0.0,
        }
    }
}

impl MultiplierState {
    fn clamp_to_floors(&mut self) {
        self.player_speed_mult = self.player_speed_mult.max(PLAYER_MULTIPLIER_FLOOR);
        self.player_damage_mult = self.player_damage_mult.max(PLAYER_MULTIPLIER_FLOOR);
        self.player_health_mult = self.player_health_mult.max(PLAYER_MULTIPLIER_FLOOR);
        self.enemy_health_mult = self.enemy_health_mult.max(ENEMY_MULTIPLIER_FLOOR);
        self.enemy_damage_mult = self.enemy_damage_mult.max(ENEMY_MULTIPLIER_FLOOR);
        self.enemy_count_mult = self.enemy_count_mult.max(ENEMY_MULTIPLIER_FLOOR);
    }
}

/// Result of layering modifiers onto a baseline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AppliedModifiers {
    pub state: MultiplierState,
    /// Signed fraction handed to spawners; not part of `MultiplierState`
    pub enemy_speed_adjustment: f32,
}

/// Combine `modifiers` into a copy of `baseline`, then clamp.
///
/// Takes a slice rather than a `ModifierSet` so callers can replay any
/// sequence, including ones with repeated attributes.
pub fn apply_modifiers(baseline: &MultiplierState, modifiers: &[FloorModifier]) -> AppliedModifiers {
    let mut state = *baseline;
    let mut enemy_speed_adjustment = 0.0;

    for modifier in modifiers {
        let value = modifier.intensity.fraction();
        let toward_player = if modifier.is_good { value } else { -value };

        match modifier.attribute {
            ModifierAttribute::PlayerSpeed => state.player_speed_mult += toward_player,
            ModifierAttribute::PlayerDamage => state.player_damage_mult += toward_player,
            ModifierAttribute::PlayerHealth => state.player_health_mult += toward_player,
            ModifierAttribute::PlayerHealthRegen => {
                // Replaces rather than accumulates
                let rate = modifier.intensity.regen_rate();
                state.player_health_regen_rate = if modifier.is_good { rate } else { -rate };
            }
            ModifierAttribute::EnemyDamage => state.enemy_damage_mult -= toward_player,
            ModifierAttribute::EnemySpeed => enemy_speed_adjustment -= toward_player,
        }
    }

    state.clamp_to_floors();

    AppliedModifiers {
        state,
        enemy_speed_adjustment,
    }
}

/// Shared multiplier store for the current floor.
///
/// Only the generate/apply lifecycle writes to it; gameplay code reads the
/// accessors or calls the `modify_*` helpers.
#[derive(Resource, Debug, Clone)]
pub struct FloorDifficulty {
    generator: DifficultyGenerator,
    floor: u32,
    baseline: MultiplierState,
    modifiers: ModifierSet,
    current: MultiplierState,
    enemy_speed_adjustment: f32,
    modifiers_generated: bool,
}

impl Default for FloorDifficulty {
    fn default() -> Self {
        Self::new(DifficultyDefaults::default())
    }
}

impl FloorDifficulty {
    /// Store using the configured scaling, or the built-in scaling when no
    /// configuration is loaded.
    pub fn from_defaults(defaults: Option<&FloorDefaults>) -> Self {
        match defaults {
            Some(defaults) => Self::new(defaults.difficulty.clone()),
            None => {
                warn!("[FLOOR] FloorDefaults missing, using built-in difficulty scaling");
                Self::default()
            }
        }
    }

    pub fn new(scaling: DifficultyDefaults) -> Self {
        Self {
            generator: DifficultyGenerator::new(scaling),
            floor: 1,
            baseline: MultiplierState::default(),
            modifiers: ModifierSet::new(),
            current: MultiplierState::default(),
            enemy_speed_adjustment: 0.0,
            modifiers_generated: false,
        }
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Discard the previous set, roll a new one for `floor`, and apply it.
    pub fn generate_floor_modifiers(&mut self, floor: u32, seed: Option<u64>) {
        let (baseline, modifiers) = self.generator.generate(floor, seed);
        self.install(floor, baseline, modifiers);
    }

    /// Install an already-rolled baseline and set, then apply it.
    pub fn install(&mut self, floor: u32, baseline: MultiplierState, modifiers: ModifierSet) {
        self.floor = floor;
        self.baseline = baseline;
        self.modifiers = modifiers;
        self.modifiers_generated = true;
        self.apply();
    }

    /// Re-apply the current set without rolling. Generates first if nothing
    /// has been rolled since the last `mark_for_modifier_generation`.
    pub fn apply_existing_modifiers(&mut self, floor: u32, seed: Option<u64>) {
        if self.modifiers_generated {
            info!("[FLOOR] Applying existing modifiers to floor {}", self.floor);
            self.apply();
        } else {
            info!(
                "[FLOOR] No modifiers exist for floor {}, generating new ones",
                floor
            );
            self.generate_floor_modifiers(floor, seed);
        }
    }

    /// Called when a floor is completed so the next floor rolls fresh modifiers.
    pub fn mark_for_modifier_generation(&mut self) {
        self.modifiers_generated = false;
    }

    fn apply(&mut self) {
        let applied = apply_modifiers(&self.baseline, self.modifiers.as_slice());
        self.current = applied.state;
        self.enemy_speed_adjustment = applied.enemy_speed_adjustment;
        self.log_floor_settings();
    }

    fn log_floor_settings(&self) {
        let state = &self.current;
        info!("[FLOOR] ===== Floor {} Settings =====", self.floor);
        info!("[FLOOR] Enemy Health Multiplier: {:.2}x", state.enemy_health_mult);
        info!("[FLOOR] Enemy Damage Multiplier: {:.2}x", state.enemy_damage_mult);
        info!("[FLOOR] Enemy Count Multiplier: {:.2}x", state.enemy_count_mult);
        info!("[FLOOR] Player Speed Multiplier: {:.2}x", state.player_speed_mult);
        info!("[FLOOR] Player Damage Multiplier: {:.2}x", state.player_damage_mult);
        info!("[FLOOR] Player Health Multiplier: {:.2}x", state.player_health_mult);
        info!(
            "[FLOOR] Player Health Regen Rate: {:.2} HP/sec",
            state.player_health_regen_rate
        );
        info!(
            "[FLOOR] Enemy Speed Adjustment: {:+.2}",
            self.enemy_speed_adjustment
        );
        for modifier in self.modifiers.iter() {
            info!(
                "[FLOOR] - {} {:?} ({})",
                modifier.valence_label(),
                modifier.attribute,
                modifier.intensity.label()
            );
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn enemy_health_multiplier(&self) -> f32 {
        self.current.enemy_health_mult
    }

    pub fn enemy_damage_multiplier(&self) -> f32 {
        self.current.enemy_damage_mult
    }

    pub fn enemy_count_multiplier(&self) -> f32 {
        self.current.enemy_count_mult
    }

    pub fn player_speed_multiplier(&self) -> f32 {
        self.current.player_speed_mult
    }

    pub fn player_damage_multiplier(&self) -> f32 {
        self.current.player_damage_mult
    }

    pub fn player_health_multiplier(&self) -> f32 {
        self.current.player_health_mult
    }

    pub fn player_health_regen_rate(&self) -> f32 {
        self.current.player_health_regen_rate
    }

    pub fn enemy_speed_adjustment(&self) -> f32 {
        self.enemy_speed_adjustment
    }

    pub fn multipliers(&self) -> MultiplierState {
        self.current
    }

    /// Copy of the active modifiers, in roll order.
    pub fn active_modifiers(&self) -> Vec<FloorModifier> {
        self.modifiers.as_slice().to_vec()
    }

    pub fn modifier_set(&self) -> &ModifierSet {
        &self.modifiers
    }

    pub fn are_modifiers_generated(&self) -> bool {
        self.modifiers_generated
    }

    pub fn floor(&self) -> u32 {
        self.floor
    }

    // ------------------------------------------------------------------
    // Mutation helpers for gameplay collaborators
    // ------------------------------------------------------------------

    /// Scale a freshly spawned enemy's health pool and fill it.
    pub fn modify_enemy_health(&self, health: &mut Health) {
        health.max *= self.current.enemy_health_mult;
        health.current = health.max;
    }

    pub fn modify_enemy_damage(&self, damage: &mut f32) {
        *damage *= self.current.enemy_damage_mult;
    }

    /// Shorten a spawn interval; a lower interval means more enemies.
    pub fn modify_enemy_spawn_rate(&self, spawn_interval: &mut f32) {
        *spawn_interval /= self.current.enemy_count_mult;
    }

    /// Scale the player's max health, keeping the current fraction.
    pub fn modify_player_health(&self, health: &mut Health) {
        let old_max = health.max;
        health.max *= self.current.player_health_mult;
        if old_max > 0.0 {
            health.current = health.current / old_max * health.max;
        }
    }

    pub fn modify_player_damage(&self, damage: &mut f32) {
        *damage *= self.current.player_damage_mult;
    }

    pub fn modify_player_speed(&self, speed: &mut MoveSpeed) {
        speed.current = speed.base * self.current.player_speed_mult;
    }

    /// Apply `delta_secs` worth of regeneration (or drain) to the player.
    pub fn apply_health_regen_tick(&self, health: &mut Health, delta_secs: f32) {
        let amount = self.current.player_health_regen_rate * delta_secs;
        if amount > 0.0 {
            health.heal(amount);
        } else if amount < 0.0 {
            health.take_damage(-amount);
        }
    }
}
