//! Precondition checks shared by the start operations and by
//! `get_possible_action`. Every check reads the live map; nothing is cached.

use crate::config::JobCost;
use crate::map::tile_pos::TilePos;
use crate::map::tiles::Tile;
use crate::messages::workers::WorkerActionError;
use crate::resources::MAX_RESOURCE_LEVEL;
use crate::state::GameState;
use crate::workers::kinds::WorkerRole;
use crate::workers::types::{ConstructionKind, Worker, WorkerId, WorkerKind, WorkerStatus};

/// Resolved development order: what to build, for how much, for how long.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DevelopmentOrder {
    pub target_level: u8,
    pub cost: i64,
    pub duration_turns: u32,
}

/// The tile at `pos` and the worker standing on it.
pub fn locate(
    state: &GameState,
    pos: TilePos,
    worker: WorkerId,
) -> Result<(&Tile, &Worker), WorkerActionError> {
    let tile = state
        .tile(pos)
        .ok_or(WorkerActionError::MissingTile(pos))?;
    let worker = tile
        .worker(worker)
        .ok_or(WorkerActionError::MissingWorker(worker))?;
    Ok((tile, worker))
}

pub fn validate_move(
    state: &GameState,
    worker: WorkerId,
    from: TilePos,
    to: TilePos,
) -> Result<(), WorkerActionError> {
    let (_, worker) = locate(state, from, worker)?;

    if worker.status == WorkerStatus::Moved || worker.just_moved {
        return Err(WorkerActionError::AlreadyMoved);
    }
    if worker.status == WorkerStatus::Working {
        return Err(WorkerActionError::AlreadyWorking);
    }
    if to == from {
        return Err(WorkerActionError::SameTile);
    }
    let target = state.tile(to).ok_or(WorkerActionError::MissingTile(to))?;
    if target.owner != Some(worker.nation) {
        return Err(WorkerActionError::TargetTileUnowned);
    }
    if !target.terrain.is_walkable() {
        return Err(WorkerActionError::TargetUnwalkable);
    }
    Ok(())
}

/// Checks every job start shares: the worker is free, no other job runs
/// here, the tile is the worker's own and the treasury covers `cost`.
fn ensure_can_start(
    state: &GameState,
    tile: &Tile,
    worker: &Worker,
    cost: i64,
) -> Result<(), WorkerActionError> {
    if worker.status == WorkerStatus::Working || tile.is_working(worker.id) {
        return Err(WorkerActionError::AlreadyWorking);
    }
    if tile.has_active_job() {
        return Err(WorkerActionError::TileBusy);
    }
    if tile.owner != Some(worker.nation) {
        return Err(WorkerActionError::CurrentTileUnowned);
    }
    let nation = state
        .nation(worker.nation)
        .ok_or(WorkerActionError::MissingNation(worker.nation))?;
    if !nation.can_afford(cost) {
        return Err(WorkerActionError::InsufficientFunds {
            required: cost,
            available: nation.treasury,
        });
    }
    Ok(())
}

/// Returns the prospecting cost when the survey may start.
pub fn validate_prospecting(
    state: &GameState,
    pos: TilePos,
    worker: WorkerId,
) -> Result<i64, WorkerActionError> {
    let (tile, worker) = locate(state, pos, worker)?;

    if worker.kind != WorkerKind::Prospector {
        return Err(WorkerActionError::RequiresProspector);
    }
    let resource = tile.resource.ok_or(WorkerActionError::NoResource)?;
    if resource.discovered {
        return Err(WorkerActionError::AlreadyDiscovered);
    }
    if tile.prospecting.is_some() {
        return Err(WorkerActionError::ProspectingInProgress);
    }

    let cost = state.rules.prospecting_cost();
    ensure_can_start(state, tile, worker, cost)?;
    Ok(cost)
}

pub fn validate_development(
    state: &GameState,
    pos: TilePos,
    worker: WorkerId,
    explicit_target: Option<u8>,
) -> Result<DevelopmentOrder, WorkerActionError> {
    let (tile, worker) = locate(state, pos, worker)?;

    let behavior = worker.kind.behavior();
    if behavior.role != WorkerRole::Develop || !worker.kind.can_develop(tile.terrain) {
        return Err(WorkerActionError::TerrainNotAllowed);
    }
    let resource = tile.resource.ok_or(WorkerActionError::NoResource)?;
    if tile.development_job.is_some() {
        return Err(WorkerActionError::DevelopmentInProgress);
    }
    if resource.level >= MAX_RESOURCE_LEVEL {
        return Err(WorkerActionError::LevelCapReached);
    }
    let target_level = resource.level + 1;
    if let Some(requested) = explicit_target
        && requested != target_level
    {
        return Err(WorkerActionError::TargetLevelMismatch {
            requested,
            expected: target_level,
        });
    }
    if resource.resource_type.requires_prospecting() && !resource.discovered {
        return Err(WorkerActionError::ResourceUndiscovered);
    }

    let rules = &state.rules;
    let (Some(cost), Some(duration_turns)) = (
        rules.development_cost(target_level),
        rules.development_duration(worker.kind, target_level),
    ) else {
        return Err(WorkerActionError::LevelCapReached);
    };
    ensure_can_start(state, tile, worker, cost)?;

    Ok(DevelopmentOrder {
        target_level,
        cost,
        duration_turns,
    })
}

pub fn validate_construction(
    state: &GameState,
    pos: TilePos,
    worker: WorkerId,
    kind: ConstructionKind,
) -> Result<JobCost, WorkerActionError> {
    let (tile, worker) = locate(state, pos, worker)?;

    if worker.kind != WorkerKind::Engineer {
        return Err(WorkerActionError::RequiresEngineer);
    }
    if tile.construction_job.is_some() {
        return Err(WorkerActionError::ConstructionInProgress);
    }
    let built = match kind {
        ConstructionKind::Depot => tile.depot,
        ConstructionKind::Port => tile.port,
        ConstructionKind::Fort => tile.fort_level >= 1,
        ConstructionKind::Rail => tile.connected,
    };
    if built {
        return Err(WorkerActionError::AlreadyBuilt(kind));
    }
    if kind == ConstructionKind::Rail {
        if !tile.terrain.can_carry_rail() {
            return Err(WorkerActionError::RailOnWater);
        }
        let nation = worker.nation;
        let extends_network = state.map.neighbors(pos).any(|n| {
            state.tile(n).is_some_and(|neighbor| {
                neighbor.owner == Some(nation) && neighbor.is_rail_starting_point()
            })
        });
        if !extends_network {
            return Err(WorkerActionError::RailDisconnected);
        }
    }

    let job = state.rules.construction(kind);
    ensure_can_start(state, tile, worker, job.cost)?;
    Ok(job)
}
