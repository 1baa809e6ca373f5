//! Core domain: events for floor flow and run verdicts.

use bevy::ecs::message::Message;
use serde::Serialize;

use crate::core::resources::RunVerdict;

/// Values handed from the outgoing floor to the incoming one
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FloorTransitionContext {
    pub floor: u32,
    pub boss_pending: bool,
    pub enemy_speed_adjustment: f32,
}

/// Fired when a floor has been prepared and should start
#[derive(Debug, Clone)]
pub struct FloorStartedEvent {
    pub context: FloorTransitionContext,
    /// Pre-floor teaser built from the rolled modifiers
    pub forecast: String,
}

impl Message for FloorStartedEvent {}

/// Fired once per resolved floor with the controller's decision
#[derive(Debug, Clone, Copy)]
pub struct RunVerdictEvent {
    pub floor: u32,
    pub verdict: RunVerdict,
    pub score: u64,
}

impl Message for RunVerdictEvent {}

/// Request to toggle endless mode. Refused before the boss floor.
#[derive(Debug, Clone, Copy)]
pub struct EndlessModeRequest {
    pub enabled: bool,
}

impl Message for EndlessModeRequest {}
