//! Population domain: registry change notifications.

use bevy::ecs::message::Message;

use crate::population::registry::{PopulationChange, PopulationKind};

/// Written once per real membership change, on the same tick as the change.
#[derive(Debug, Clone, Copy)]
pub struct PopulationChangedEvent {
    pub kind: PopulationKind,
    pub change: PopulationChange,
}

impl PopulationChangedEvent {
    pub fn count(&self) -> usize {
        self.change.count()
    }
}

impl Message for PopulationChangedEvent {}
