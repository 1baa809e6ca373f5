//! Combat domain: damage and death messages.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Who dealt a hit; decides which damage multiplier applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DamageSource {
    Player,
    Enemy,
}

/// Unscaled damage request. `apply_damage` runs it through the floor multipliers.
#[derive(Debug)]
pub struct DamageEvent {
    pub target: Entity,
    pub amount: f32,
    pub source: DamageSource,
}

impl Message for DamageEvent {}

/// An enemy dropped to zero health.
#[derive(Debug)]
pub struct DeathEvent {
    pub entity: Entity,
}

impl Message for DeathEvent {}

/// Written every tick while the player's health is at or below zero.
#[derive(Debug)]
pub struct PlayerDeathEvent {
    pub entity: Entity,
}

impl Message for PlayerDeathEvent {}
