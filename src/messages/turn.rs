use bevy::prelude::*;

/// Request to resolve the current turn.
#[derive(Message, Debug, Clone, Copy, Default)]
pub struct EndTurn;

/// Emitted after a turn has been resolved.
#[derive(Message, Debug, Clone, Copy)]
pub struct TurnResolved {
    /// Turn number that is now current
    pub turn: u32,
}
