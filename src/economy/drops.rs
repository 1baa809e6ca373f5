//! Economy domain: resource drops rolled on enemy deaths.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::content::{DropChanceDef, ResourceKind};

/// Keeps the drop stream apart from the modifier stream for the same run seed.
const DROP_SEED_SALT: u64 = 0x5EED_D809;

/// Possible drops for every enemy.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct DropTable {
    entries: Vec<DropChanceDef>,
}

impl DropTable {
    pub fn new(entries: Vec<DropChanceDef>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[DropChanceDef] {
        &self.entries
    }

    /// Roll each entry independently; entries that hit yield an amount in
    /// `min_amount..=max_amount`.
    pub fn roll<R: Rng>(&self, rng: &mut R) -> Vec<(ResourceKind, u32)> {
        let mut drops = Vec::new();

        for entry in &self.entries {
            if rng.random::<f32>() >= entry.chance {
                continue;
            }
            let low = entry.min_amount.min(entry.max_amount);
            let amount = rng.random_range(low..=entry.max_amount);
            if amount > 0 {
                drops.push((entry.resource, amount));
            }
        }

        drops
    }
}

/// Random source for drops, re-seeded whenever a new run seed appears.
#[derive(Resource, Debug, Clone)]
pub struct DropRng {
    rng: ChaCha8Rng,
    run_seed: Option<u64>,
}

impl Default for DropRng {
    fn default() -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(DROP_SEED_SALT),
            run_seed: None,
        }
    }
}

impl DropRng {
    /// Stream for `run_seed`. Keeps the current stream if it already matches.
    pub fn for_run(&mut self, run_seed: u64) -> &mut ChaCha8Rng {
        if self.run_seed != Some(run_seed) {
            debug!("[ECONOMY] Seeding drops for run seed {}", run_seed);
            self.rng = ChaCha8Rng::seed_from_u64(run_seed ^ DROP_SEED_SALT);
            self.run_seed = Some(run_seed);
        }
        &mut self.rng
    }
}
