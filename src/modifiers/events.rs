//! Modifiers domain: events for modifier generation and application.

use bevy::ecs::message::Message;

use crate::modifiers::catalog::FloorModifier;
use crate::modifiers::store::MultiplierState;

/// Fired whenever the store recomputes its multipliers for a floor
#[derive(Debug, Clone)]
pub struct FloorModifiersAppliedEvent {
    pub floor: u32,
    pub multipliers: MultiplierState,
    pub enemy_speed_adjustment: f32,
    pub modifiers: Vec<FloorModifier>,
}

impl Message for FloorModifiersAppliedEvent {}
