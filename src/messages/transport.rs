use bevy::prelude::*;
use thiserror::Error;

use crate::economy::goods::Good;
use crate::economy::nation::NationId;

/// Player-issued transport screen actions.
#[derive(Message, Debug, Clone)]
pub enum TransportCommand {
    /// Replace the nation's allocation plan; order is the priority order
    SetAllocations {
        nation: NationId,
        plan: Vec<(Good, u32)>,
    },
    /// Buy (positive) or refund (negative) future capacity
    PurchaseCapacity { nation: NationId, delta: i64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransportCommandError {
    #[error("{0} does not exist")]
    MissingNation(NationId),
    #[error("not enough coal and iron ore to buy capacity")]
    InsufficientMaterials,
    #[error("no pending capacity to refund")]
    NothingPending,
    #[error("capacity change of zero")]
    ZeroDelta,
}

#[derive(Message, Debug, Clone)]
pub struct TransportCommandRejected {
    pub command: TransportCommand,
    pub reason: TransportCommandError,
}
