//! Worker orders as state transitions.
//!
//! The `try_*` functions report why an order was refused. The plain
//! functions are what callers normally use: a refused order is logged and
//! the input state comes back unchanged.

use bevy::prelude::*;

use super::types::{
    ConstructionJob, ConstructionKind, DevelopmentJob, ProspectingJob, WorkerId, WorkerStatus,
};
use super::validation::{
    locate, validate_construction, validate_development, validate_move, validate_prospecting,
};
use crate::economy::nation::NationId;
use crate::map::tile_pos::TilePos;
use crate::messages::workers::{WorkerActionError, WorkerCommand, WorkerOrder};
use crate::state::GameState;

fn rejected(state: &GameState, action: &str, worker: WorkerId, err: WorkerActionError) -> GameState {
    debug!("{} for {} rejected: {}", action, worker, err);
    state.clone()
}

fn charge(state: &mut GameState, nation: NationId, cost: i64) {
    if let Some(nation) = state.nations.get_mut(&nation) {
        nation.treasury -= cost;
    }
}

/// Put `worker` on `tile` to work and describe the job.
fn set_working(state: &mut GameState, tile: TilePos, worker: WorkerId, description: String) {
    if let Some(worker) = state
        .map
        .tile_mut(tile)
        .and_then(|tile| tile.worker_mut(worker))
    {
        worker.status = WorkerStatus::Working;
        worker.job_description = Some(description);
    }
}

pub fn try_move_worker(
    state: &GameState,
    worker: WorkerId,
    from: TilePos,
    to: TilePos,
) -> Result<GameState, WorkerActionError> {
    validate_move(state, worker, from, to)?;

    let mut next = state.clone();
    let source = next
        .map
        .tile_mut(from)
        .ok_or(WorkerActionError::MissingTile(from))?;
    let index = source
        .workers
        .iter()
        .position(|w| w.id == worker)
        .ok_or(WorkerActionError::MissingWorker(worker))?;
    let mut moving = source.workers.remove(index);
    moving.status = WorkerStatus::Moved;
    moving.just_moved = true;
    moving.previous_tile = Some(from);

    next.map
        .tile_mut(to)
        .ok_or(WorkerActionError::MissingTile(to))?
        .workers
        .push(moving);
    Ok(next)
}

pub fn move_worker(state: &GameState, worker: WorkerId, from: TilePos, to: TilePos) -> GameState {
    try_move_worker(state, worker, from, to)
        .unwrap_or_else(|err| rejected(state, "Move", worker, err))
}

pub fn try_start_prospecting(
    state: &GameState,
    tile: TilePos,
    worker: WorkerId,
) -> Result<GameState, WorkerActionError> {
    let cost = validate_prospecting(state, tile, worker)?;
    let (_, w) = locate(state, tile, worker)?;
    let nation = w.nation;

    let mut next = state.clone();
    charge(&mut next, nation, cost);
    if let Some(target) = next.map.tile_mut(tile) {
        target.prospecting = Some(ProspectingJob {
            worker_id: worker,
            started_on_turn: state.turn,
        });
    }
    set_working(&mut next, tile, worker, format!("Prospecting at {}", tile));
    Ok(next)
}

pub fn start_prospecting(state: &GameState, tile: TilePos, worker: WorkerId) -> GameState {
    try_start_prospecting(state, tile, worker)
        .unwrap_or_else(|err| rejected(state, "Prospecting", worker, err))
}

pub fn try_start_development(
    state: &GameState,
    tile: TilePos,
    worker: WorkerId,
    explicit_target: Option<u8>,
) -> Result<GameState, WorkerActionError> {
    let order = validate_development(state, tile, worker, explicit_target)?;
    let (current, w) = locate(state, tile, worker)?;
    let (nation, kind) = (w.nation, w.kind);
    let resource = current
        .resource
        .map(|r| format!("{:?}", r.resource_type))
        .unwrap_or_default();

    let mut next = state.clone();
    charge(&mut next, nation, order.cost);
    if let Some(target) = next.map.tile_mut(tile) {
        target.development_job = Some(DevelopmentJob {
            worker_id: worker,
            worker_kind: kind,
            target_level: order.target_level,
            started_on_turn: state.turn,
            duration_turns: order.duration_turns,
            completed: false,
            completed_on_turn: None,
        });
    }
    set_working(
        &mut next,
        tile,
        worker,
        format!("Developing {} to level {}", resource, order.target_level),
    );
    Ok(next)
}

pub fn start_development(
    state: &GameState,
    tile: TilePos,
    worker: WorkerId,
    explicit_target: Option<u8>,
) -> GameState {
    try_start_development(state, tile, worker, explicit_target)
        .unwrap_or_else(|err| rejected(state, "Development", worker, err))
}

pub fn try_start_construction(
    state: &GameState,
    tile: TilePos,
    worker: WorkerId,
    kind: ConstructionKind,
) -> Result<GameState, WorkerActionError> {
    let job = validate_construction(state, tile, worker, kind)?;
    let (_, w) = locate(state, tile, worker)?;
    let nation = w.nation;

    let mut next = state.clone();
    charge(&mut next, nation, job.cost);
    if let Some(target) = next.map.tile_mut(tile) {
        target.construction_job = Some(ConstructionJob {
            worker_id: worker,
            kind,
            started_on_turn: state.turn,
            duration_turns: job.duration_turns,
            completed: false,
            completed_on_turn: None,
        });
    }
    set_working(&mut next, tile, worker, format!("Building {} at {}", kind, tile));
    Ok(next)
}

pub fn start_construction(
    state: &GameState,
    tile: TilePos,
    worker: WorkerId,
    kind: ConstructionKind,
) -> GameState {
    try_start_construction(state, tile, worker, kind)
        .unwrap_or_else(|err| rejected(state, "Construction", worker, err))
}

/// Move, then start a survey at the destination. A refused move returns the
/// input; a refused survey still keeps the move.
pub fn move_and_start_prospecting(
    state: &GameState,
    worker: WorkerId,
    from: TilePos,
    to: TilePos,
) -> GameState {
    match try_move_worker(state, worker, from, to) {
        Ok(moved) => start_prospecting(&moved, to, worker),
        Err(err) => rejected(state, "Move", worker, err),
    }
}

pub fn move_and_start_development(
    state: &GameState,
    worker: WorkerId,
    from: TilePos,
    to: TilePos,
    explicit_target: Option<u8>,
) -> GameState {
    match try_move_worker(state, worker, from, to) {
        Ok(moved) => start_development(&moved, to, worker, explicit_target),
        Err(err) => rejected(state, "Move", worker, err),
    }
}

pub fn move_and_start_construction(
    state: &GameState,
    worker: WorkerId,
    from: TilePos,
    to: TilePos,
    kind: ConstructionKind,
) -> GameState {
    match try_move_worker(state, worker, from, to) {
        Ok(moved) => start_construction(&moved, to, worker, kind),
        Err(err) => rejected(state, "Move", worker, err),
    }
}

/// Undo this turn's move, or abandon the current job. Money already spent
/// on a job is not refunded.
pub fn try_cancel_action(
    state: &GameState,
    tile: TilePos,
    worker: WorkerId,
) -> Result<GameState, WorkerActionError> {
    let (_, current) = locate(state, tile, worker)?;
    let mut next = state.clone();

    match (current.status, current.previous_tile) {
        (WorkerStatus::Working, _) => {
            let Some(target) = next.map.tile_mut(tile) else {
                return Err(WorkerActionError::MissingTile(tile));
            };
            if target.prospecting.is_some_and(|job| job.worker_id == worker) {
                target.prospecting = None;
            }
            if target
                .development_job
                .is_some_and(|job| !job.completed && job.worker_id == worker)
            {
                target.development_job = None;
            }
            if target
                .construction_job
                .is_some_and(|job| !job.completed && job.worker_id == worker)
            {
                target.construction_job = None;
            }
            if let Some(w) = target.worker_mut(worker) {
                w.status = WorkerStatus::Available;
                w.job_description = None;
            }
        }
        (WorkerStatus::Moved, Some(previous)) => {
            if next.tile(previous).is_none() {
                return Err(WorkerActionError::MissingTile(previous));
            }
            let Some(source) = next.map.tile_mut(tile) else {
                return Err(WorkerActionError::MissingTile(tile));
            };
            let Some(index) = source.workers.iter().position(|w| w.id == worker) else {
                return Err(WorkerActionError::MissingWorker(worker));
            };
            let mut returning = source.workers.remove(index);
            returning.status = WorkerStatus::Available;
            returning.just_moved = false;
            returning.previous_tile = None;
            returning.job_description = None;
            if let Some(origin) = next.map.tile_mut(previous) {
                origin.workers.push(returning);
            }
        }
        _ => return Err(WorkerActionError::NothingToCancel),
    }

    Ok(next)
}

pub fn cancel_action(state: &GameState, tile: TilePos, worker: WorkerId) -> GameState {
    try_cancel_action(state, tile, worker)
        .unwrap_or_else(|err| rejected(state, "Cancel", worker, err))
}

/// Apply a player command. Returns the new state together with the reason
/// the order (or, for combined orders, its job half) was refused.
pub fn apply_order(
    state: &GameState,
    command: &WorkerCommand,
) -> (GameState, Option<WorkerActionError>) {
    let WorkerCommand {
        tile,
        worker,
        order,
    } = *command;

    let single = |result: Result<GameState, WorkerActionError>| match result {
        Ok(next) => (next, None),
        Err(err) => (state.clone(), Some(err)),
    };
    let combined = |to: TilePos,
                    start: &dyn Fn(&GameState) -> Result<GameState, WorkerActionError>| {
        match try_move_worker(state, worker, tile, to) {
            Ok(moved) => match start(&moved) {
                Ok(next) => (next, None),
                Err(err) => (moved, Some(err)),
            },
            Err(err) => (state.clone(), Some(err)),
        }
    };

    match order {
        WorkerOrder::Move { to } => single(try_move_worker(state, worker, tile, to)),
        WorkerOrder::Prospect => single(try_start_prospecting(state, tile, worker)),
        WorkerOrder::Develop { target_level } => {
            single(try_start_development(state, tile, worker, target_level))
        }
        WorkerOrder::Construct(kind) => {
            single(try_start_construction(state, tile, worker, kind))
        }
        WorkerOrder::MoveAndProspect { to } => {
            combined(to, &|moved: &GameState| try_start_prospecting(moved, to, worker))
        }
        WorkerOrder::MoveAndDevelop { to, target_level } => combined(to, &|moved: &GameState| {
            try_start_development(moved, to, worker, target_level)
        }),
        WorkerOrder::MoveAndConstruct { to, kind } => {
            combined(to, &|moved: &GameState| try_start_construction(moved, to, worker, kind))
        }
        WorkerOrder::Cancel => single(try_cancel_action(state, tile, worker)),
    }
}
