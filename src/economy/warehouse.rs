use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::goods::Good;

/// National store of commodities delivered by the logistics network.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Warehouse {
    pub goods: BTreeMap<Good, u32>,
}

impl Warehouse {
    pub fn get(&self, good: Good) -> u32 {
        self.goods.get(&good).copied().unwrap_or(0)
    }

    pub fn add(&mut self, good: Good, qty: u32) {
        if qty == 0 {
            return;
        }
        let entry = self.goods.entry(good).or_default();
        *entry = entry.saturating_add(qty);
    }

    /// Attempts to remove `qty` units; returns how many were actually removed
    pub fn take_up_to(&mut self, good: Good, qty: u32) -> u32 {
        let available = self.get(good);
        let take = available.min(qty);
        if take > 0 {
            self.goods.insert(good, available - take);
        }
        take
    }
}

impl FromIterator<(Good, u32)> for Warehouse {
    fn from_iter<I: IntoIterator<Item = (Good, u32)>>(iter: I) -> Self {
        let mut warehouse = Warehouse::default();
        for (good, qty) in iter {
            warehouse.add(good, qty);
        }
        warehouse
    }
}
