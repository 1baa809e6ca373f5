//! Combat domain: vital-sign and stat components.

use bevy::prelude::*;

/// Health component for damageable entities
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Health {
    pub current: f32,
    pub max: f32,
}

impl Health {
    pub fn new(max: f32) -> Self {
        Self { current: max, max }
    }

    pub fn take_damage(&mut self, amount: f32) -> f32 {
        let actual = amount.min(self.current).max(0.0);
        self.current -= actual;
        actual
    }

    pub fn heal(&mut self, amount: f32) -> f32 {
        let actual = amount.min(self.max - self.current).max(0.0);
        self.current += actual;
        actual
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0.0
    }

    pub fn percent(&self) -> f32 {
        if self.max <= 0.0 {
            return 0.0;
        }
        self.current / self.max
    }
}

#[derive(Component, Debug)]
pub struct Player;

/// Player's swing, before floor scaling.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct PlayerAttack {
    pub damage: f32,
    pub attacks_per_sec: f32,
}

impl PlayerAttack {
    /// Seconds between swings; zero rate never swings.
    pub fn interval_secs(&self) -> f32 {
        if self.attacks_per_sec > 0.0 {
            1.0 / self.attacks_per_sec
        } else {
            f32::INFINITY
        }
    }
}

/// Living enemy. Adding or removing this component updates the enemy registry.
#[derive(Component, Debug)]
pub struct Enemy;

/// Movement speed. `base` is the unmodified value; `current` is what movement reads.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct MoveSpeed {
    pub base: f32,
    pub current: f32,
}

impl MoveSpeed {
    pub fn new(base: f32) -> Self {
        Self {
            base,
            current: base,
        }
    }
}

/// Damage an enemy deals per hit, before floor scaling.
#[derive(Component, Debug, Clone, Copy)]
pub struct EnemyAttack {
    pub damage: f32,
}
