use bevy::prelude::*;

use crate::economy::goods::Good;
use crate::economy::nation::NationId;
use crate::messages::transport::TransportCommandError;
use crate::state::GameState;

/// Buy (`delta > 0`) or refund (`delta < 0`) future transport capacity.
///
/// Each unit costs one coal and one iron ore. Purchases are limited by the
/// scarcer of the two; refunds are limited by what is still pending.
pub fn try_purchase_transport_capacity(
    state: &GameState,
    nation: NationId,
    delta: i64,
) -> Result<GameState, TransportCommandError> {
    let current = state
        .nations
        .get(&nation)
        .ok_or(TransportCommandError::MissingNation(nation))?;

    let mut next = state.clone();
    let Some(target) = next.nations.get_mut(&nation) else {
        return Err(TransportCommandError::MissingNation(nation));
    };

    if delta > 0 {
        let requested = u32::try_from(delta).unwrap_or(u32::MAX);
        let achievable = requested
            .min(current.warehouse.get(Good::Coal))
            .min(current.warehouse.get(Good::IronOre));
        if achievable == 0 {
            return Err(TransportCommandError::InsufficientMaterials);
        }
        target.warehouse.take_up_to(Good::Coal, achievable);
        target.warehouse.take_up_to(Good::IronOre, achievable);
        target.transport_capacity_pending_increase += achievable;
        info!(
            "{} ordered {} transport capacity ({} pending)",
            nation, achievable, target.transport_capacity_pending_increase
        );
    } else if delta < 0 {
        let requested = u32::try_from(delta.unsigned_abs()).unwrap_or(u32::MAX);
        let refund = requested.min(current.transport_capacity_pending_increase);
        if refund == 0 {
            return Err(TransportCommandError::NothingPending);
        }
        target.warehouse.add(Good::Coal, refund);
        target.warehouse.add(Good::IronOre, refund);
        target.transport_capacity_pending_increase -= refund;
        info!(
            "{} refunded {} transport capacity ({} pending)",
            nation, refund, target.transport_capacity_pending_increase
        );
    } else {
        return Err(TransportCommandError::ZeroDelta);
    }

    Ok(next)
}

pub fn purchase_transport_capacity(state: &GameState, nation: NationId, delta: i64) -> GameState {
    try_purchase_transport_capacity(state, nation, delta).unwrap_or_else(|err| {
        debug!("Capacity change of {} for {} rejected: {}", delta, nation, err);
        state.clone()
    })
}

/// Fold every nation's pending capacity into its live capacity.
pub fn apply_pending_capacity(state: &GameState) -> GameState {
    let mut next = state.clone();
    for nation in next.nations.values_mut() {
        let pending = std::mem::take(&mut nation.transport_capacity_pending_increase);
        if pending > 0 {
            nation.transport_capacity = nation.transport_capacity.saturating_add(pending);
            info!(
                "{} transport capacity raised by {} to {}",
                nation.id, pending, nation.transport_capacity
            );
        }
    }
    next
}
