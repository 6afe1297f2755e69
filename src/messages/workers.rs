use bevy::prelude::*;
use thiserror::Error;

use crate::economy::nation::NationId;
use crate::map::tile_pos::TilePos;
use crate::workers::types::{ConstructionKind, WorkerId};

/// What a worker is told to do from the tile it currently stands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerOrder {
    Move { to: TilePos },
    Prospect,
    /// `None` develops to the next level
    Develop { target_level: Option<u8> },
    Construct(ConstructionKind),
    MoveAndProspect { to: TilePos },
    MoveAndDevelop { to: TilePos, target_level: Option<u8> },
    MoveAndConstruct { to: TilePos, kind: ConstructionKind },
    Cancel,
}

#[derive(Message, Debug, Clone, Copy)]
pub struct WorkerCommand {
    pub tile: TilePos,
    pub worker: WorkerId,
    pub order: WorkerOrder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WorkerActionError {
    #[error("tile {0} does not exist")]
    MissingTile(TilePos),
    #[error("{0} is not on the given tile")]
    MissingWorker(WorkerId),
    #[error("{0} does not exist")]
    MissingNation(NationId),
    #[error("worker already moved this turn")]
    AlreadyMoved,
    #[error("worker is busy with a job")]
    AlreadyWorking,
    #[error("worker is already on that tile")]
    SameTile,
    #[error("workers cannot stand on that terrain")]
    TargetUnwalkable,
    #[error("target tile is not owned by the worker's nation")]
    TargetTileUnowned,
    #[error("current tile is not owned by the worker's nation")]
    CurrentTileUnowned,
    #[error("order requires a prospector")]
    RequiresProspector,
    #[error("order requires an engineer")]
    RequiresEngineer,
    #[error("this worker cannot develop that terrain")]
    TerrainNotAllowed,
    #[error("tile has no resource")]
    NoResource,
    #[error("resource is already discovered")]
    AlreadyDiscovered,
    #[error("resource must be discovered first")]
    ResourceUndiscovered,
    #[error("tile is already being prospected")]
    ProspectingInProgress,
    #[error("tile already has a development job")]
    DevelopmentInProgress,
    #[error("tile already has a construction job")]
    ConstructionInProgress,
    #[error("another job is active on this tile")]
    TileBusy,
    #[error("resource is already fully developed")]
    LevelCapReached,
    #[error("requested level {requested} but next level is {expected}")]
    TargetLevelMismatch { requested: u8, expected: u8 },
    #[error("costs {required} but treasury holds {available}")]
    InsufficientFunds { required: i64, available: i64 },
    #[error("{0} already built here")]
    AlreadyBuilt(ConstructionKind),
    #[error("track cannot be laid on this terrain")]
    RailOnWater,
    #[error("track must extend from an adjacent rail, depot, port or capital")]
    RailDisconnected,
    #[error("worker has nothing to cancel")]
    NothingToCancel,
}

impl WorkerActionError {
    /// Short static label for UI badges and log filtering.
    pub fn describe(self) -> &'static str {
        use WorkerActionError::*;
        match self {
            MissingTile(_) => "tile not found",
            MissingWorker(_) => "worker not found",
            MissingNation(_) => "nation not found",
            AlreadyMoved => "already moved",
            AlreadyWorking => "already working",
            SameTile => "same tile",
            TargetUnwalkable => "impassable terrain",
            TargetTileUnowned => "target tile not owned",
            CurrentTileUnowned => "current tile not owned",
            RequiresProspector => "requires prospector",
            RequiresEngineer => "requires engineer",
            TerrainNotAllowed => "wrong terrain",
            NoResource => "no resource",
            AlreadyDiscovered => "already discovered",
            ResourceUndiscovered => "undiscovered resource",
            ProspectingInProgress => "prospecting in progress",
            DevelopmentInProgress => "development in progress",
            ConstructionInProgress => "construction in progress",
            TileBusy => "tile busy",
            LevelCapReached => "fully developed",
            TargetLevelMismatch { .. } => "wrong target level",
            InsufficientFunds { .. } => "insufficient funds",
            AlreadyBuilt(_) => "already built",
            RailOnWater => "no rail on this terrain",
            RailDisconnected => "rail not connected",
            NothingToCancel => "nothing to cancel",
        }
    }
}

#[derive(Message, Debug, Clone, Copy)]
pub struct WorkerCommandRejected {
    pub command: WorkerCommand,
    pub reason: WorkerActionError,
}
