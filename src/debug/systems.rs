//! Debug domain: diagnostic logging systems.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::core::RunVerdictEvent;
use crate::debug::state::FloorDiagnostics;
use crate::modifiers::FloorModifiersAppliedEvent;
use crate::population::{PopulationChange, PopulationChangedEvent};

pub(crate) fn begin_floor_diagnostics(
    mut applied: MessageReader<FloorModifiersAppliedEvent>,
    mut diagnostics: ResMut<FloorDiagnostics>,
) {
    for event in applied.read() {
        let badges = event.modifiers.iter().map(|m| m.badge()).collect();
        diagnostics.begin(event.floor, badges);
    }
}

pub(crate) fn log_population_changes(
    mut changes: MessageReader<PopulationChangedEvent>,
    mut diagnostics: ResMut<FloorDiagnostics>,
) {
    for event in changes.read() {
        let added = matches!(event.change, PopulationChange::Added { .. });
        debug!(
            "[REGISTRY] {} {} -> {} live",
            event.kind.label(),
            if added { "added" } else { "removed" },
            event.count()
        );
        diagnostics.record(event.kind, added, event.count());
    }
}

pub(crate) fn log_floor_summary(
    mut verdicts: MessageReader<RunVerdictEvent>,
    diagnostics: Res<FloorDiagnostics>,
) {
    for event in verdicts.read() {
        info!(
            "[RUN] {:?} | score {} | {}",
            event.verdict,
            event.score,
            diagnostics.summary()
        );
    }
}
