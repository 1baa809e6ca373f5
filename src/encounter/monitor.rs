//! Encounter domain: the completion state machine.
//!
//! Pure logic with no ECS access. Each tick the `evaluate_encounter` system
//! advances the settle countdown first, then feeds it player deaths and
//! population changes.

use std::time::Duration;

use bevy::prelude::*;
use serde::Serialize;

use crate::population::PopulationKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EncounterOutcome {
    Won,
    Lost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncounterState {
    Active,
    /// Win condition met; resolves to `Won` once `remaining` runs out.
    Completing { remaining: Duration },
    Resolved(EncounterOutcome),
}

/// Live counts of each registry. `None` means the registry is not wired.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Census {
    pub enemies: Option<usize>,
    pub spawners: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct EncounterMonitor {
    state: EncounterState,
    settle_delay: Duration,
    boss_encounter: bool,
    enemies_observed: bool,
    spawners_observed: bool,
}

impl EncounterMonitor {
    pub fn new(settle_delay: Duration, boss_encounter: bool) -> Self {
        Self {
            state: EncounterState::Active,
            settle_delay,
            boss_encounter,
            enemies_observed: false,
            spawners_observed: false,
        }
    }

    pub fn state(&self) -> EncounterState {
        self.state
    }

    pub fn outcome(&self) -> Option<EncounterOutcome> {
        match self.state {
            EncounterState::Resolved(outcome) => Some(outcome),
            _ => None,
        }
    }

    pub fn is_boss_encounter(&self) -> bool {
        self.boss_encounter
    }

    pub fn settle_delay(&self) -> Duration {
        self.settle_delay
    }

    /// Player vital sign hit zero. Only an `Active` encounter can be lost.
    pub fn on_player_death(&mut self) -> Option<EncounterOutcome> {
        if self.state != EncounterState::Active {
            debug!(
                "[ENCOUNTER] Ignoring player death in state {:?}",
                self.state
            );
            return None;
        }

        info!("[ENCOUNTER] Active -> Resolved(Lost)");
        self.state = EncounterState::Resolved(EncounterOutcome::Lost);
        Some(EncounterOutcome::Lost)
    }

    /// A registry reported a membership change. Enters `Completing` when the
    /// floor is empty; resolves at once if there is no settle delay.
    pub fn on_population_changed(
        &mut self,
        kind: PopulationKind,
        census: Census,
    ) -> Option<EncounterOutcome> {
        match kind {
            PopulationKind::Enemies => self.enemies_observed = true,
            PopulationKind::Spawners => self.spawners_observed = true,
        }

        if self.state != EncounterState::Active {
            debug!(
                "[ENCOUNTER] Ignoring {} change in state {:?}",
                kind.label(),
                self.state
            );
            return None;
        }

        if !self.is_population_cleared(census) {
            return None;
        }

        info!(
            "[ENCOUNTER] Active -> Completing (settle {:.2}s)",
            self.settle_delay.as_secs_f32()
        );
        self.state = EncounterState::Completing {
            remaining: self.settle_delay,
        };
        self.tick(Duration::ZERO)
    }

    /// Advance the settle countdown. Nothing else can interrupt it.
    pub fn tick(&mut self, delta: Duration) -> Option<EncounterOutcome> {
        let EncounterState::Completing { remaining } = self.state else {
            return None;
        };

        let remaining = remaining.saturating_sub(delta);
        if !remaining.is_zero() {
            self.state = EncounterState::Completing { remaining };
            return None;
        }

        info!("[ENCOUNTER] Completing -> Resolved(Won)");
        self.state = EncounterState::Resolved(EncounterOutcome::Won);
        Some(EncounterOutcome::Won)
    }

    /// An unwired registry counts as empty, but only after some registry has
    /// reported at least once. A wired registry must have reported itself.
    fn is_population_cleared(&self, census: Census) -> bool {
        let enemies_clear = match census.enemies {
            Some(count) => self.enemies_observed && count == 0,
            None => true,
        };
        let spawners_clear = match census.spawners {
            Some(count) => self.spawners_observed && count == 0,
            None => true,
        };

        (self.enemies_observed || self.spawners_observed) && enemies_clear && spawners_clear
    }
}
