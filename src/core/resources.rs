//! Core domain: run progression and floor lifecycle resources.

use bevy::prelude::*;
use rand::Rng;
use serde::Serialize;

use crate::content::{CampaignDefaults, FloorDefaults};
use crate::encounter::EncounterOutcome;
use crate::modifiers::floor_seed;

/// What the progression controller decided after a floor resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RunVerdict {
    Advanced { next_floor: u32 },
    CampaignWon,
    Lost,
}

impl RunVerdict {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, RunVerdict::Advanced { .. })
    }
}

/// Floor lifecycle
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FloorPhase {
    /// Between floors; the next floor has not started yet
    #[default]
    Preparing,
    InProgress,
    Finished(RunVerdict),
}

/// Run condition: returns true only while a floor is being played
pub fn floor_in_progress(phase: Res<FloorPhase>) -> bool {
    *phase == FloorPhase::InProgress
}

/// Run condition: returns true while waiting to start the next floor
pub fn floor_preparing(phase: Res<FloorPhase>) -> bool {
    *phase == FloorPhase::Preparing
}

/// Tracks progress across the entire run: floor, score and the endless/boss flags.
#[derive(Resource, Debug, Clone, Serialize)]
pub struct RunProgress {
    current_floor: u32,
    score: u64,
    endless_mode: bool,
    next_floor_is_boss: bool,
    boss_floor: u32,
    score_per_enemy: u64,
    run_seed: u64,
}

impl Default for RunProgress {
    fn default() -> Self {
        Self::new(&CampaignDefaults::default(), rand::rng().random())
    }
}

impl RunProgress {
    /// Progress using the configured campaign rules and a fresh seed.
    pub fn from_defaults(defaults: Option<&FloorDefaults>) -> Self {
        let campaign = defaults
            .map(|defaults| defaults.campaign.clone())
            .unwrap_or_default();
        Self::new(&campaign, rand::rng().random())
    }

    pub fn new(campaign: &CampaignDefaults, run_seed: u64) -> Self {
        Self {
            current_floor: 1,
            score: 0,
            endless_mode: false,
            next_floor_is_boss: false,
            boss_floor: campaign.boss_floor.max(1),
            score_per_enemy: u64::from(campaign.score_per_enemy),
            run_seed,
        }
    }

    /// Reset for a new run with a fresh seed
    pub fn start_new_run(&mut self) {
        self.start_new_run_with_seed(rand::rng().random());
    }

    pub fn start_new_run_with_seed(&mut self, run_seed: u64) {
        self.current_floor = 1;
        self.score = 0;
        self.endless_mode = false;
        self.next_floor_is_boss = false;
        self.run_seed = run_seed;
        info!("[RUN] New run started (seed {})", run_seed);
    }

    pub fn can_toggle_endless_mode(&self) -> bool {
        self.current_floor >= self.boss_floor
    }

    /// Returns false, and forces endless mode off, before the boss floor is reached.
    pub fn set_endless_mode(&mut self, enabled: bool) -> bool {
        if !self.can_toggle_endless_mode() {
            warn!(
                "[RUN] Cannot toggle endless mode before floor {}",
                self.boss_floor
            );
            self.endless_mode = false;
            self.next_floor_is_boss = false;
            return false;
        }

        // Leaving endless mode sends the player straight to the boss
        self.next_floor_is_boss = self.endless_mode && !enabled;
        if self.next_floor_is_boss {
            info!("[RUN] Endless mode disabled, next floor is the boss floor");
        }

        self.endless_mode = enabled;
        info!("[RUN] Endless mode set to {}", enabled);
        true
    }

    pub fn is_boss_floor(&self) -> bool {
        self.next_floor_is_boss || (self.current_floor == self.boss_floor && !self.endless_mode)
    }

    /// Decide what a resolved floor means for the run. On `Advanced` the
    /// caller must also mark the store for modifier generation.
    pub fn complete_floor(&mut self, outcome: EncounterOutcome, boss_encounter: bool) -> RunVerdict {
        match outcome {
            EncounterOutcome::Lost => {
                info!("[RUN] Lost on floor {}", self.current_floor);
                RunVerdict::Lost
            }
            EncounterOutcome::Won if boss_encounter && !self.endless_mode => {
                info!("[RUN] Boss defeated on floor {}, campaign won", self.current_floor);
                RunVerdict::CampaignWon
            }
            EncounterOutcome::Won => {
                info!("[RUN] Completed floor {}", self.current_floor);
                self.next_floor_is_boss = false;
                self.current_floor += 1;
                RunVerdict::Advanced {
                    next_floor: self.current_floor,
                }
            }
        }
    }

    pub fn award_kill(&mut self) {
        self.score += self.score_per_enemy;
    }

    pub fn current_floor(&self) -> u32 {
        self.current_floor
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn score_per_enemy(&self) -> u64 {
        self.score_per_enemy
    }

    pub fn endless_mode(&self) -> bool {
        self.endless_mode
    }

    pub fn boss_floor(&self) -> u32 {
        self.boss_floor
    }

    pub fn run_seed(&self) -> u64 {
        self.run_seed
    }

    /// Seed for the current floor's modifier roll
    pub fn floor_seed(&self) -> u64 {
        floor_seed(self.run_seed, self.current_floor)
    }
}
