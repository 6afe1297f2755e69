use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::economy::goods::Good;
use crate::economy::nation::NationId;

/// A nation's requested shipments, in the order the player set them.
///
/// Order matters: earlier entries are served first and later ones are
/// trimmed first when capacity runs short. Setting an existing good updates
/// it in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AllocationPlan {
    entries: Vec<(Good, u32)>,
}

impl AllocationPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, good: Good, requested: u32) {
        match self.entries.iter_mut().find(|(g, _)| *g == good) {
            Some(entry) => entry.1 = requested,
            None => self.entries.push((good, requested)),
        }
    }

    pub fn with(mut self, good: Good, requested: u32) -> Self {
        self.set(good, requested);
        self
    }

    pub fn get(&self, good: Good) -> Option<u32> {
        self.entries
            .iter()
            .find(|(g, _)| *g == good)
            .map(|(_, requested)| *requested)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = (Good, u32)> + '_ {
        self.entries.iter().copied()
    }

    pub(crate) fn entries_mut(&mut self) -> &mut [(Good, u32)] {
        &mut self.entries
    }

    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, q)| u64::from(*q)).sum()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(Good, u32)> for AllocationPlan {
    fn from_iter<I: IntoIterator<Item = (Good, u32)>>(iter: I) -> Self {
        let mut plan = AllocationPlan::new();
        for (good, requested) in iter {
            plan.set(good, requested);
        }
        plan
    }
}

/// Stored plans per nation; persist across turns until replaced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TransportAllocations {
    pub plans: BTreeMap<NationId, AllocationPlan>,
}

impl TransportAllocations {
    pub fn get(&self, nation: NationId) -> Option<&AllocationPlan> {
        self.plans.get(&nation)
    }

    pub fn set(&mut self, nation: NationId, plan: AllocationPlan) {
        self.plans.insert(nation, plan);
    }
}
