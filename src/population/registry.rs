//! Population domain: membership sets for live enemies and active spawners.

use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use bevy::prelude::*;

/// Which registry a change came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PopulationKind {
    Enemies,
    Spawners,
}

impl PopulationKind {
    pub fn label(&self) -> &'static str {
        match self {
            PopulationKind::Enemies => "enemy",
            PopulationKind::Spawners => "spawner",
        }
    }
}

/// Outcome of a registry mutation that changed membership. Carries the new count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopulationChange {
    Added { count: usize },
    Removed { count: usize },
}

impl PopulationChange {
    pub fn count(&self) -> usize {
        match self {
            PopulationChange::Added { count } | PopulationChange::Removed { count } => *count,
        }
    }
}

/// Set of live members of one category.
///
/// `add` and `remove` return `Some` only when membership actually changed, so
/// callers notify exactly once per real change.
#[derive(Debug, Clone)]
pub struct PopulationRegistry<T> {
    members: HashSet<T>,
}

impl<T> Default for PopulationRegistry<T> {
    fn default() -> Self {
        Self {
            members: HashSet::new(),
        }
    }
}

impl<T: Copy + Eq + Hash + Debug> PopulationRegistry<T> {
    pub fn add(&mut self, member: T) -> Option<PopulationChange> {
        if !self.members.insert(member) {
            debug!("[REGISTRY] {:?} already registered", member);
            return None;
        }
        Some(PopulationChange::Added {
            count: self.members.len(),
        })
    }

    /// Removing an absent member is a no-op (double teardown).
    pub fn remove(&mut self, member: T) -> Option<PopulationChange> {
        if !self.members.remove(&member) {
            debug!("[REGISTRY] Ignoring removal of unregistered {:?}", member);
            return None;
        }
        Some(PopulationChange::Removed {
            count: self.members.len(),
        })
    }

    pub fn count(&self) -> usize {
        self.members.len()
    }

    pub fn contains(&self, member: T) -> bool {
        self.members.contains(&member)
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Forget every member without notifying. Used between floors.
    pub fn clear(&mut self) {
        self.members.clear();
    }
}

/// Registry resource bound to one `PopulationKind`.
pub trait Population: Resource + std::ops::DerefMut<Target = PopulationRegistry<Entity>> {
    const KIND: PopulationKind;
}

/// Living enemy entities on the current floor.
#[derive(Resource, Debug, Default, Deref, DerefMut)]
pub struct EnemyRegistry(pub PopulationRegistry<Entity>);

impl Population for EnemyRegistry {
    const KIND: PopulationKind = PopulationKind::Enemies;
}

/// Spawners still producing enemies on the current floor.
#[derive(Resource, Debug, Default, Deref, DerefMut)]
pub struct SpawnerRegistry(pub PopulationRegistry<Entity>);

impl Population for SpawnerRegistry {
    const KIND: PopulationKind = PopulationKind::Spawners;
}
