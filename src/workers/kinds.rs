use crate::map::tiles::TerrainType;

use super::types::WorkerKind;

/// What a worker type does when put to work on a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerRole {
    Prospect,
    Develop,
    Construct,
    /// No engine-level action
    Idle,
}

/// Per-kind behaviour table entry.
#[derive(Debug, Clone, Copy)]
pub struct WorkerBehavior {
    pub role: WorkerRole,
    /// Terrain this kind may develop; empty for non-developers
    pub terrain: &'static [TerrainType],
}

const NO_TERRAIN: &[TerrainType] = &[];
const FARMER_TERRAIN: &[TerrainType] = &[
    TerrainType::Farm,
    TerrainType::Orchard,
    TerrainType::CottonField,
    TerrainType::Grassland,
];
const RANCHER_TERRAIN: &[TerrainType] = &[TerrainType::OpenRange, TerrainType::HorseRanch];
const FORESTER_TERRAIN: &[TerrainType] = &[TerrainType::Forest, TerrainType::HardwoodForest];
const MINER_TERRAIN: &[TerrainType] = &[
    TerrainType::Hills,
    TerrainType::BarrenHills,
    TerrainType::Mountains,
];
const DRILLER_TERRAIN: &[TerrainType] =
    &[TerrainType::Swamp, TerrainType::Desert, TerrainType::Tundra];

impl WorkerKind {
    pub fn behavior(self) -> WorkerBehavior {
        let (role, terrain) = match self {
            WorkerKind::Prospector => (WorkerRole::Prospect, NO_TERRAIN),
            WorkerKind::Engineer => (WorkerRole::Construct, NO_TERRAIN),
            WorkerKind::Farmer => (WorkerRole::Develop, FARMER_TERRAIN),
            WorkerKind::Rancher => (WorkerRole::Develop, RANCHER_TERRAIN),
            WorkerKind::Forester => (WorkerRole::Develop, FORESTER_TERRAIN),
            WorkerKind::Miner => (WorkerRole::Develop, MINER_TERRAIN),
            WorkerKind::Driller => (WorkerRole::Develop, DRILLER_TERRAIN),
            WorkerKind::Developer => (WorkerRole::Idle, NO_TERRAIN),
        };
        WorkerBehavior { role, terrain }
    }

    pub fn can_develop(self, terrain: TerrainType) -> bool {
        self.behavior().terrain.contains(&terrain)
    }
}
