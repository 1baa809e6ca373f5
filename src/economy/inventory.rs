//! Economy domain: the resource wallet carried between runs.

use std::collections::BTreeMap;

use bevy::prelude::*;
use serde::Serialize;

use crate::content::ResourceKind;

/// Resource counts. Every kind is present, starting at zero.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Inventory {
    resources: BTreeMap<ResourceKind, u32>,
}

impl Default for Inventory {
    fn default() -> Self {
        Self {
            resources: ResourceKind::ALL.iter().map(|kind| (*kind, 0)).collect(),
        }
    }
}

impl Inventory {
    pub fn add(&mut self, kind: ResourceKind, amount: u32) {
        let total = self.resources.entry(kind).or_insert(0);
        *total = total.saturating_add(amount);
        debug!("[ECONOMY] Added {} {:?}. Total: {}", amount, kind, total);
    }

    /// Spend `amount` of `kind`. Returns false and leaves the wallet
    /// untouched when there is not enough.
    pub fn use_resource(&mut self, kind: ResourceKind, amount: u32) -> bool {
        let available = self.amount(kind);
        if available < amount {
            info!(
                "[ECONOMY] Not enough {:?}. Required: {}, available: {}",
                kind, amount, available
            );
            return false;
        }

        self.resources.insert(kind, available - amount);
        debug!(
            "[ECONOMY] Used {} {:?}. Remaining: {}",
            amount,
            kind,
            available - amount
        );
        true
    }

    pub fn can_afford(&self, kind: ResourceKind, amount: u32) -> bool {
        self.amount(kind) >= amount
    }

    pub fn amount(&self, kind: ResourceKind) -> u32 {
        self.resources.get(&kind).copied().unwrap_or(0)
    }

    /// Zero every resource
    pub fn reset(&mut self) {
        *self = Self::default();
        info!("[ECONOMY] Inventory reset");
    }
}
