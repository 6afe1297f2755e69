use serde::{Deserialize, Serialize};

use super::warehouse::Warehouse;

/// Stable identifier for a nation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NationId(pub u32);

impl core::fmt::Display for NationId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "nation-{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Nation {
    pub id: NationId,
    pub name: String,
    pub treasury: i64,
    pub warehouse: Warehouse,
    pub transport_capacity: u32,
    /// Capacity bought this turn, added at the start of the next one
    pub transport_capacity_pending_increase: u32,
}

impl Nation {
    pub fn new(id: NationId, name: impl Into<String>, treasury: i64, transport_capacity: u32) -> Self {
        Self {
            id,
            name: name.into(),
            treasury,
            warehouse: Warehouse::default(),
            transport_capacity,
            transport_capacity_pending_increase: 0,
        }
    }

    pub fn can_afford(&self, cost: i64) -> bool {
        self.treasury >= cost
    }
}
