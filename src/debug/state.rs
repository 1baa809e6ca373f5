//! Debug domain: per-floor diagnostic counters.

use bevy::prelude::*;

use crate::population::PopulationKind;

/// Counters collected while a floor is played
#[derive(Resource, Debug, Default, Clone, PartialEq)]
pub struct FloorDiagnostics {
    pub floor: u32,
    pub peak_enemies: usize,
    pub enemies_registered: u32,
    pub enemies_removed: u32,
    pub spawners_registered: u32,
    pub badges: Vec<String>,
}

impl FloorDiagnostics {
    pub fn begin(&mut self, floor: u32, badges: Vec<String>) {
        *self = Self {
            floor,
            badges,
            ..Self::default()
        };
    }

    pub fn record(&mut self, kind: PopulationKind, added: bool, count: usize) {
        match (kind, added) {
            (PopulationKind::Enemies, true) => {
                self.enemies_registered += 1;
                self.peak_enemies = self.peak_enemies.max(count);
            }
            (PopulationKind::Enemies, false) => self.enemies_removed += 1,
            (PopulationKind::Spawners, true) => self.spawners_registered += 1,
            (PopulationKind::Spawners, false) => {}
        }
    }

    pub fn summary(&self) -> String {
        let modifiers = if self.badges.is_empty() {
            "none".to_string()
        } else {
            self.badges.join(", ")
        };
        format!(
            "floor {}: {} spawner(s), {} enemies ({} removed, peak {}), modifiers: {}",
            self.floor,
            self.spawners_registered,
            self.enemies_registered,
            self.enemies_removed,
            self.peak_enemies,
            modifiers
        )
    }
}
