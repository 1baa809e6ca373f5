//! Debug domain: tests for diagnostic counters.

use super::FloorDiagnostics;
use crate::population::PopulationKind;

#[test]
fn test_diagnostics_track_peak_and_totals() {
    let mut diagnostics = FloorDiagnostics::default();
    diagnostics.begin(3, vec!["Speed↑".to_string()]);

    diagnostics.record(PopulationKind::Spawners, true, 1);
    diagnostics.record(PopulationKind::Enemies, true, 1);
    diagnostics.record(PopulationKind::Enemies, true, 2);
    diagnostics.record(PopulationKind::Enemies, false, 1);
    diagnostics.record(PopulationKind::Enemies, true, 2);

    assert_eq!(diagnostics.peak_enemies, 2);
    assert_eq!(diagnostics.enemies_registered, 3);
    assert_eq!(diagnostics.enemies_removed, 1);
    assert_eq!(
        diagnostics.summary(),
        "floor 3: 1 spawner(s), 3 enemies (1 removed, peak 2), modifiers: Speed↑"
    );
}

#[test]
fn test_begin_resets_counters() {
    let mut diagnostics = FloorDiagnostics::default();
    diagnostics.begin(1, Vec::new());
    diagnostics.record(PopulationKind::Enemies, true, 4);

    diagnostics.begin(2, Vec::new());

    assert_eq!(diagnostics.floor, 2);
    assert_eq!(diagnostics.peak_enemies, 0);
    assert!(diagnostics.summary().ends_with("modifiers: none"));
}
