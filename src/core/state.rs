//! Core domain: per-tick system ordering for floor play.

use bevy::prelude::*;

/// Ordered stages of one floor tick. Configured as a chain by `CorePlugin`.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloorSet {
    /// Between-floor purchases, applied before the next player spawns
    Outfitting,
    /// Floor start and teardown
    Lifecycle,
    Waves,
    /// Registers entities spawned earlier in the tick
    Registration,
    /// Regeneration and other passive health changes
    Vitals,
    Combat,
    /// Unregisters entities despawned earlier in the tick
    Population,
    Encounter,
    Progression,
}
