use bevy::prelude::*;
use rand::rngs::StdRng;

use super::types::{ConstructionKind, WorkerId, WorkerStatus};
use crate::economy::nation::NationId;
use crate::economy::transport::network::{register_depot, register_port, register_railroad};
use crate::map::prospecting::discover_resource;
use crate::map::tile_pos::TilePos;
use crate::map::tiles::Tile;
use crate::resources::{MAX_RESOURCE_LEVEL, ResourceType, TileResource};
use crate::state::GameState;

/// Something a job did during resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobEvent {
    Discovered {
        tile: TilePos,
        resource: ResourceType,
    },
    NothingFound {
        tile: TilePos,
    },
    Developed {
        tile: TilePos,
        resource: Option<ResourceType>,
        level: u8,
    },
    Built {
        tile: TilePos,
        kind: ConstructionKind,
    },
}

impl core::fmt::Display for JobEvent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            JobEvent::Discovered { tile, resource } => {
                write!(f, "Prospectors found {:?} at {}", resource, tile)
            }
            JobEvent::NothingFound { tile } => write!(f, "Prospectors found nothing at {}", tile),
            JobEvent::Developed {
                tile,
                resource: Some(resource),
                level,
            } => write!(f, "{:?} at {} developed to level {}", resource, tile, level),
            JobEvent::Developed {
                tile,
                resource: None,
                level,
            } => write!(f, "Tile {} developed to level {}", tile, level),
            JobEvent::Built { tile, kind } => write!(f, "Finished {} at {}", kind, tile),
        }
    }
}

fn elapsed(next_turn: u32, started: u32) -> u32 {
    next_turn.saturating_sub(started)
}

/// Nation a completed building belongs to: the tile owner, or failing
/// that the nation of the engineer who built it.
fn builder_nation(tile: &Tile, worker: WorkerId) -> Option<NationId> {
    tile.owner.or_else(|| tile.worker(worker).map(|w| w.nation))
}

/// Advance every job on the map by one turn.
///
/// Tiles are visited in row-major order, so prospecting draws from `rng`
/// happen in a fixed order for a given state. Completed rail, depots and
/// ports are registered with their nation's network before returning.
pub fn resolve_jobs(state: &GameState, rng: &mut StdRng) -> (GameState, Vec<JobEvent>) {
    let next_turn = state.next_turn();
    let prospecting_turns = state.rules.prospecting_duration();
    let mut next = state.clone();
    let mut events = Vec::new();
    let mut completed_builds: Vec<(NationId, TilePos, ConstructionKind)> = Vec::new();

    for tile in next.map.tiles.iter_mut() {
        let pos = tile.position;

        if let Some(job) = tile.prospecting
            && elapsed(next_turn, job.started_on_turn) >= prospecting_turns
        {
            let hidden = tile.resource.map(|r| r.resource_type);
            match discover_resource(tile.terrain, hidden, rng) {
                Some(resource) => {
                    tile.resource = Some(TileResource {
                        resource_type: resource,
                        level: 0,
                        discovered: true,
                    });
                    info!("Prospecting at {} revealed {:?}", pos, resource);
                    events.push(JobEvent::Discovered {
                        tile: pos,
                        resource,
                    });
                }
                None => {
                    info!("Prospecting at {} found nothing", pos);
                    events.push(JobEvent::NothingFound { tile: pos });
                }
            }
            tile.prospecting = None;
        }

        if let Some(job) = tile.development_job.as_mut()
            && !job.completed
            && elapsed(next_turn, job.started_on_turn) >= job.duration_turns
        {
            job.completed = true;
            job.completed_on_turn = Some(next_turn);
            let target = job.target_level.min(MAX_RESOURCE_LEVEL);
            if let Some(resource) = tile.resource.as_mut() {
                resource.level = resource.level.max(target);
            }
            let level = tile.resource.map_or(target, |r| r.level);
            info!("Development at {} reached level {}", pos, level);
            events.push(JobEvent::Developed {
                tile: pos,
                resource: tile.resource.map(|r| r.resource_type),
                level,
            });
        }

        if let Some(job) = tile.construction_job.as_mut()
            && !job.completed
            && elapsed(next_turn, job.started_on_turn) >= job.duration_turns
        {
            job.completed = true;
            job.completed_on_turn = Some(next_turn);
            let (kind, worker) = (job.kind, job.worker_id);
            match kind {
                ConstructionKind::Depot => tile.depot = true,
                ConstructionKind::Port => tile.port = true,
                ConstructionKind::Fort => tile.fort_level = tile.fort_level.max(1),
                ConstructionKind::Rail => tile.connected = true,
            }
            info!("Construction of {} at {} finished", kind, pos);
            events.push(JobEvent::Built { tile: pos, kind });
            match builder_nation(tile, worker) {
                Some(nation) => completed_builds.push((nation, pos, kind)),
                None => warn!("Finished {} at {} has no owning nation", kind, pos),
            }
        }

        // Completion indicators stay visible for one turn
        if tile
            .development_job
            .and_then(|job| job.completed_on_turn)
            .is_some_and(|done| elapsed(next_turn, done) >= 1)
        {
            tile.development_job = None;
        }
        if tile
            .construction_job
            .and_then(|job| job.completed_on_turn)
            .is_some_and(|done| elapsed(next_turn, done) >= 1)
        {
            tile.construction_job = None;
        }
    }

    for (nation, pos, kind) in completed_builds {
        match kind {
            ConstructionKind::Rail => register_railroad(&mut next, nation, pos),
            ConstructionKind::Depot => register_depot(&mut next, nation, pos),
            ConstructionKind::Port => register_port(&mut next, nation, pos),
            ConstructionKind::Fort => {}
        }
    }

    (next, events)
}

/// End-of-turn worker bookkeeping.
///
/// Moves are no longer undoable. A worker stays Working only while it is
/// the worker of an unfinished job on its own tile.
pub fn reconcile_workers(state: &GameState) -> GameState {
    let mut next = state.clone();
    for tile in next.map.tiles.iter_mut() {
        let working: Vec<bool> = tile.workers.iter().map(|w| tile.is_working(w.id)).collect();
        for (worker, working) in tile.workers.iter_mut().zip(working) {
            worker.just_moved = false;
            worker.previous_tile = None;
            if working {
                worker.status = WorkerStatus::Working;
            } else {
                worker.status = WorkerStatus::Available;
                worker.job_description = None;
            }
        }
    }
    next
}
