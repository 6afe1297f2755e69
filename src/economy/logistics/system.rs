use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::allocation::{choose_allocation, clamp_plan};
use super::collection::compute_logistics_transport;
use super::plan::AllocationPlan;
use crate::economy::goods::Good;
use crate::economy::nation::NationId;
use crate::messages::transport::TransportCommandError;
use crate::state::GameState;

/// What one logistics pass did for a nation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogisticsReport {
    /// Goods available at hubs before capacity limits
    pub collected: BTreeMap<Good, u32>,
    /// Goods actually shipped
    pub chosen: BTreeMap<Good, u32>,
    pub capacity: u32,
    /// Treasury income from precious goods
    pub revenue: i64,
}

impl LogisticsReport {
    pub fn shipped(&self) -> u32 {
        self.chosen.values().sum()
    }
}

/// Store a new plan for `nation`, clamped against what its hubs collect now.
pub fn try_set_transport_allocations(
    state: &GameState,
    nation: NationId,
    plan: AllocationPlan,
) -> Result<GameState, TransportCommandError> {
    let capacity = state
        .nation(nation)
        .map(|n| n.transport_capacity)
        .ok_or(TransportCommandError::MissingNation(nation))?;
    let collected = compute_logistics_transport(&state.map, nation);

    let mut next = state.clone();
    next.allocations
        .set(nation, clamp_plan(&plan, &collected, capacity));
    Ok(next)
}

pub fn set_transport_allocations(
    state: &GameState,
    nation: NationId,
    plan: AllocationPlan,
) -> GameState {
    try_set_transport_allocations(state, nation, plan).unwrap_or_else(|err| {
        debug!("Allocation plan for {} rejected: {}", nation, err);
        state.clone()
    })
}

/// Ship goods for every nation.
///
/// Precious goods are sold into the treasury at the rules' unit price;
/// everything else lands in the warehouse.
pub fn logistics_system(state: &GameState) -> GameState {
    let mut next = state.clone();
    let nation_ids: Vec<NationId> = next.nations.keys().copied().collect();

    for id in nation_ids {
        let collected = compute_logistics_transport(&next.map, id);
        let Some(nation) = next.nations.get_mut(&id) else {
            continue;
        };
        let capacity = nation.transport_capacity;

        let plan = next
            .allocations
            .get(id)
            .map(|plan| clamp_plan(plan, &collected, capacity));
        let chosen = choose_allocation(&collected, capacity, plan.as_ref());
        if let Some(plan) = plan {
            next.allocations.set(id, plan);
        }

        let mut revenue = 0i64;
        for (good, qty) in &chosen {
            match next.rules.unit_price(*good) {
                Some(price) => revenue += price * i64::from(*qty),
                None => nation.warehouse.add(*good, *qty),
            }
        }
        nation.treasury += revenue;

        let report = LogisticsReport {
            collected,
            chosen,
            capacity,
            revenue,
        };
        if report.shipped() > 0 {
            info!(
                "{} shipped {} of {} capacity, earning {}",
                nation.name,
                report.shipped(),
                capacity,
                revenue
            );
        }
        next.logistics.insert(id, report);
    }

    next
}
