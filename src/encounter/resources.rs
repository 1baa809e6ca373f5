//! Encounter domain: the per-floor monitor host.

use std::time::Duration;

use bevy::prelude::*;

use crate::encounter::monitor::{EncounterMonitor, EncounterOutcome};

/// Tracks the encounter for the current floor
#[derive(Resource, Debug, Default)]
pub struct ActiveEncounter {
    pub floor: u32,
    monitor: Option<EncounterMonitor>,
}

impl ActiveEncounter {
    /// Arm a fresh monitor for `floor`
    pub fn start(&mut self, floor: u32, settle_delay: Duration, boss_encounter: bool) {
        info!(
            "[ENCOUNTER] Floor {} encounter started{}",
            floor,
            if boss_encounter { " (boss)" } else { "" }
        );
        self.floor = floor;
        self.monitor = Some(EncounterMonitor::new(settle_delay, boss_encounter));
    }

    pub fn monitor(&self) -> Option<&EncounterMonitor> {
        self.monitor.as_ref()
    }

    pub fn monitor_mut(&mut self) -> Option<&mut EncounterMonitor> {
        self.monitor.as_mut()
    }

    pub fn is_active(&self) -> bool {
        self.monitor.as_ref().is_some_and(|m| m.outcome().is_none())
    }

    pub fn outcome(&self) -> Option<EncounterOutcome> {
        self.monitor.as_ref().and_then(EncounterMonitor::outcome)
    }

    /// Reset for next encounter
    pub fn reset(&mut self) {
        self.monitor = None;
    }
}
