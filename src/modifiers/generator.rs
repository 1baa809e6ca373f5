//! Modifiers domain: per-floor baseline scaling and random modifier rolls.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::content::DifficultyDefaults;
use crate::modifiers::catalog::{FloorModifier, IntensityLevel, ModifierAttribute, ModifierSet};
use crate::modifiers::store::MultiplierState;

/// Cumulative thresholds for 0, 1 and 2 modifiers; anything above rolls 3.
/// Gives a fixed 10/20/30/40% distribution.
const MODIFIER_COUNT_THRESHOLDS: [f32; 3] = [0.10, 0.30, 0.60];

/// Source of the random draws the generator needs.
pub trait ModifierRng {
    /// Uniform value in [0, 1).
    fn unit(&mut self) -> f32;
    /// Uniform index in [0, len). `len` is never zero.
    fn index(&mut self, len: usize) -> usize;
    /// Fair coin flip.
    fn coin(&mut self) -> bool {
        self.unit() < 0.5
    }
}

impl ModifierRng for ChaCha8Rng {
    fn unit(&mut self) -> f32 {
        self.random::<f32>()
    }

    fn index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

/// Derive a per-floor seed from the run seed so every floor rolls differently.
pub fn floor_seed(run_seed: u64, floor: u32) -> u64 {
    run_seed.wrapping_add(floor as u64 * 137)
}

/// Map one uniform draw to a modifier count.
pub fn modifier_count_for_roll(roll: f32) -> usize {
    MODIFIER_COUNT_THRESHOLDS
        .iter()
        .position(|threshold| roll < *threshold)
        .unwrap_or(MODIFIER_COUNT_THRESHOLDS.len())
}

/// Produces a floor's baseline multipliers and its random modifier set.
#[derive(Debug, Clone, Default)]
pub struct DifficultyGenerator {
    pub scaling: DifficultyDefaults,
}

impl DifficultyGenerator {
    pub fn new(scaling: DifficultyDefaults) -> Self {
        Self { scaling }
    }

    /// Deterministic growth for `floor` (floor 1 is the unscaled baseline).
    /// Player fields start neutral; modifiers are layered on later.
    pub fn baseline(&self, floor: u32) -> MultiplierState {
        let floors_completed = floor.saturating_sub(1) as f32;

        MultiplierState {
            enemy_health_mult: 1.0
                + floors_completed * self.scaling.enemy_health_percent_per_floor / 100.0,
            enemy_damage_mult: 1.0
                + floors_completed * self.scaling.enemy_damage_percent_per_floor / 100.0,
            enemy_count_mult: 1.0
                + floors_completed * self.scaling.enemy_count_percent_per_floor / 100.0,
            ..MultiplierState::default()
        }
    }

    /// Roll 0-3 modifiers with unique attributes.
    pub fn roll_modifiers<R: ModifierRng>(&self, rng: &mut R) -> ModifierSet {
        let count = modifier_count_for_roll(rng.unit());
        let mut available: Vec<ModifierAttribute> = ModifierAttribute::ALL.to_vec();
        let mut modifiers = ModifierSet::new();

        debug!("[FLOOR] Rolling {} random modifier(s)", count);

        for _ in 0..count.min(available.len()) {
            let attribute = available.remove(rng.index(available.len()));

            let is_increasing = rng.coin();
            let is_good = attribute.is_good_for_player(is_increasing);

            let intensity = IntensityLevel::from_index(rng.index(IntensityLevel::ALL.len()))
                .unwrap_or(IntensityLevel::Medium);

            let modifier = FloorModifier::new(attribute, is_good, intensity);
            info!(
                "[FLOOR] Added {} {:?} modifier ({})",
                modifier.valence_label(),
                attribute,
                intensity.label()
            );
            let inserted = modifiers.push(modifier);
            debug_assert!(inserted, "attribute pool yielded a duplicate");
        }

        modifiers
    }

    /// Baseline plus a modifier roll from the given draw source.
    pub fn generate_with<R: ModifierRng>(
        &self,
        floor: u32,
        rng: &mut R,
    ) -> (MultiplierState, ModifierSet) {
        let baseline = self.baseline(floor);
        let modifiers = self.roll_modifiers(rng);
        info!(
            "[FLOOR] Generated {} modifier(s) for floor {}",
            modifiers.len(),
            floor
        );
        (baseline, modifiers)
    }

    /// Baseline plus a modifier roll. A seed makes the roll reproducible;
    /// without one a fresh seed is drawn.
    pub fn generate(&self, floor: u32, seed: Option<u64>) -> (MultiplierState, ModifierSet) {
        let seed = seed.unwrap_or_else(|| rand::rng().random());
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.generate_with(floor, &mut rng)
    }
}
