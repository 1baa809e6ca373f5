//! Encounter domain: the terminal outcome notification.

use bevy::ecs::message::Message;

use crate::encounter::monitor::EncounterOutcome;

/// Written exactly once per floor when the monitor resolves.
///
/// `boss_encounter` is passed through untouched; the progression controller
/// decides whether a boss win ends the campaign.
#[derive(Debug, Clone, Copy)]
pub struct EncounterResolvedEvent {
    pub floor: u32,
    pub outcome: EncounterOutcome,
    pub boss_encounter: bool,
}

impl Message for EncounterResolvedEvent {}
