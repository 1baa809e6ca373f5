//! Waves domain: timed enemy spawners.

use bevy::prelude::*;

use crate::content::WavePlanDef;
use crate::modifiers::FloorDifficulty;

/// Spawn intervals never drop below this, however large the count multiplier.
pub const MIN_SPAWN_INTERVAL_SECS: f32 = 0.05;

/// Unscaled stats for the enemies a spawner produces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnemyTemplate {
    pub health: f32,
    pub damage: f32,
    pub speed: f32,
}

impl Default for EnemyTemplate {
    fn default() -> Self {
        Self {
            health: 30.0,
            damage: 4.0,
            speed: 3.0,
        }
    }
}

/// Produces one enemy every `spawn_interval` seconds between `start_secs` and
/// `end_secs`, then despawns itself.
#[derive(Component, Debug, Clone)]
pub struct WaveSpawner {
    pub spawn_interval: f32,
    pub start_secs: f32,
    pub end_secs: f32,
    pub template: EnemyTemplate,
    /// Signed fraction applied to spawned enemies' speed
    pub speed_adjustment: f32,
    elapsed: f32,
    next_spawn: f32,
    spawned: u32,
}

impl WaveSpawner {
    pub fn new(spawn_interval: f32, start_secs: f32, end_secs: f32, template: EnemyTemplate) -> Self {
        Self {
            spawn_interval: spawn_interval.max(MIN_SPAWN_INTERVAL_SECS),
            start_secs,
            end_secs,
            template,
            speed_adjustment: 0.0,
            elapsed: 0.0,
            next_spawn: start_secs,
            spawned: 0,
        }
    }

    /// Build a spawner for the current floor. The interval is shortened by the
    /// count multiplier; plans flagged `scale_duration` also stretch their window.
    pub fn from_plan(plan: &WavePlanDef, difficulty: &FloorDifficulty, speed_adjustment: f32) -> Self {
        let mut interval = plan.spawn_interval_secs;
        difficulty.modify_enemy_spawn_rate(&mut interval);

        let mut end_secs = plan.end_secs;
        if plan.scale_duration {
            end_secs = plan.start_secs
                + (plan.end_secs - plan.start_secs) * difficulty.enemy_count_multiplier();
        }

        let template = EnemyTemplate {
            health: plan.enemy_health,
            damage: plan.enemy_damage,
            speed: plan.enemy_speed,
        };

        Self {
            speed_adjustment,
            ..Self::new(interval, plan.start_secs, end_secs, template)
        }
    }

    /// Advance the spawner clock; returns how many enemies are due.
    pub fn advance(&mut self, delta_secs: f32) -> u32 {
        self.elapsed += delta_secs;

        let mut due = 0;
        while self.next_spawn <= self.elapsed && self.next_spawn < self.end_secs {
            due += 1;
            self.next_spawn += self.spawn_interval;
        }
        self.spawned += due;
        due
    }

    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.end_secs
    }

    pub fn spawned(&self) -> u32 {
        self.spawned
    }

    /// Speed for spawned enemies after the floor's enemy speed adjustment.
    pub fn enemy_speed(&self) -> f32 {
        (self.template.speed * (1.0 + self.speed_adjustment)).max(0.0)
    }
}
