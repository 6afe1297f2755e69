use serde::{Deserialize, Serialize};

use crate::economy::nation::NationId;
use crate::map::tile_pos::TilePos;

/// Stable identifier for a worker unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkerId(pub u32);

impl core::fmt::Display for WorkerId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "worker-{}", self.0)
    }
}

/// Type of worker unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WorkerKind {
    Prospector, // Reveals minerals (coal/iron/gold/gems/oil)
    Engineer,   // Builds rails, depots, ports, fortifications
    Farmer,     // Improves grain/fruit/cotton
    Rancher,    // Improves wool/livestock/horses
    Forester,   // Improves timber
    Miner,      // Opens & upgrades mines
    Driller,    // Improves oil
    Developer,  // Works in Minor Nations
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WorkerStatus {
    #[default]
    Available,
    Moved,
    Working,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Worker {
    pub id: WorkerId,
    pub kind: WorkerKind,
    pub nation: NationId,
    pub status: WorkerStatus,
    pub just_moved: bool,
    /// Tile the worker came from this turn; lets a move be undone
    pub previous_tile: Option<TilePos>,
    pub job_description: Option<String>,
}

impl Worker {
    pub fn new(id: WorkerId, kind: WorkerKind, nation: NationId) -> Self {
        Self {
            id,
            kind,
            nation,
            status: WorkerStatus::Available,
            just_moved: false,
            previous_tile: None,
            job_description: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProspectingJob {
    pub worker_id: WorkerId,
    pub started_on_turn: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevelopmentJob {
    pub worker_id: WorkerId,
    pub worker_kind: WorkerKind,
    pub target_level: u8,
    pub started_on_turn: u32,
    pub duration_turns: u32,
    pub completed: bool,
    pub completed_on_turn: Option<u32>,
}

/// Infrastructure an Engineer can build
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ConstructionKind {
    Depot, // Gathers resources from tile + neighbours
    Port,  // Coastal gathering point
    Fort,
    Rail,
}

impl ConstructionKind {
    pub const ALL: [ConstructionKind; 4] = [
        ConstructionKind::Depot,
        ConstructionKind::Port,
        ConstructionKind::Fort,
        ConstructionKind::Rail,
    ];
}

impl core::fmt::Display for ConstructionKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConstructionKind::Depot => write!(f, "depot"),
            ConstructionKind::Port => write!(f, "port"),
            ConstructionKind::Fort => write!(f, "fort"),
            ConstructionKind::Rail => write!(f, "rail"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstructionJob {
    pub worker_id: WorkerId,
    pub kind: ConstructionKind,
    pub started_on_turn: u32,
    pub duration_turns: u32,
    pub completed: bool,
    pub completed_on_turn: Option<u32>,
}
