use super::kinds::WorkerRole;
use super::types::{ConstructionKind, WorkerId};
use super::validation::{
    locate, validate_construction, validate_development, validate_prospecting,
};
use crate::map::tile_pos::TilePos;
use crate::state::GameState;

/// The one-click action the UI offers for a worker on a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PossibleAction {
    Prospect,
    Develop { target_level: u8 },
    Construct(ConstructionKind),
    /// Several buildings are possible; the player has to pick one
    OpenConstructModal,
}

/// What `worker` could start on `tile` right now, if anything.
pub fn get_possible_action(
    state: &GameState,
    tile: TilePos,
    worker: WorkerId,
) -> Option<PossibleAction> {
    let (_, current) = locate(state, tile, worker).ok()?;

    match current.kind.behavior().role {
        WorkerRole::Prospect => validate_prospecting(state, tile, worker)
            .ok()
            .map(|_| PossibleAction::Prospect),
        WorkerRole::Develop => validate_development(state, tile, worker, None)
            .ok()
            .map(|order| PossibleAction::Develop {
                target_level: order.target_level,
            }),
        WorkerRole::Construct => {
            let buildable: Vec<ConstructionKind> = ConstructionKind::ALL
                .into_iter()
                .filter(|kind| validate_construction(state, tile, worker, *kind).is_ok())
                .collect();
            match buildable.as_slice() {
                [] => None,
                [kind] => Some(PossibleAction::Construct(*kind)),
                _ => Some(PossibleAction::OpenConstructModal),
            }
        }
        WorkerRole::Idle => None,
    }
}
