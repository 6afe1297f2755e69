use serde::{Deserialize, Serialize};

use crate::economy::nation::NationId;
use crate::map::tile_pos::TilePos;
use crate::resources::TileResource;
use crate::workers::types::{ConstructionJob, DevelopmentJob, ProspectingJob, Worker, WorkerId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerrainType {
    Water,
    Coast,
    River,
    Capital,
    Town,
    Grassland,
    Farm,
    Orchard,
    CottonField,
    OpenRange,
    HorseRanch,
    Forest,
    HardwoodForest,
    Hills,
    BarrenHills,
    Mountains,
    Swamp,
    Desert,
    Tundra,
}

impl TerrainType {
    /// Open water that ports ship through.
    pub fn is_ocean(self) -> bool {
        matches!(self, TerrainType::Water | TerrainType::Coast)
    }

    /// Terrain a worker may stand on.
    pub fn is_walkable(self) -> bool {
        !matches!(self, TerrainType::Water | TerrainType::River)
    }

    /// Terrain that can carry track.
    pub fn can_carry_rail(self) -> bool {
        !matches!(
            self,
            TerrainType::Water | TerrainType::Coast | TerrainType::River
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tile {
    pub position: TilePos,
    pub terrain: TerrainType,
    pub resource: Option<TileResource>,
    pub prospecting: Option<ProspectingJob>,
    pub development_job: Option<DevelopmentJob>,
    pub construction_job: Option<ConstructionJob>,
    pub owner: Option<NationId>,
    pub workers: Vec<Worker>,
    pub depot: bool,
    pub port: bool,
    pub fort_level: u8,
    /// Tile carries track
    pub connected: bool,
    /// Derived by the connectivity pass
    pub active_depot: bool,
    /// Derived by the connectivity pass
    pub active_port: bool,
}

impl Tile {
    pub fn new(position: TilePos, terrain: TerrainType) -> Self {
        Self {
            position,
            terrain,
            resource: None,
            prospecting: None,
            development_job: None,
            construction_job: None,
            owner: None,
            workers: Vec::new(),
            depot: false,
            port: false,
            fort_level: 0,
            connected: false,
            active_depot: false,
            active_port: false,
        }
    }

    pub fn worker(&self, id: WorkerId) -> Option<&Worker> {
        self.workers.iter().find(|w| w.id == id)
    }

    pub fn worker_mut(&mut self, id: WorkerId) -> Option<&mut Worker> {
        self.workers.iter_mut().find(|w| w.id == id)
    }

    /// Rail may be extended from this tile.
    pub fn is_rail_starting_point(&self) -> bool {
        self.connected || self.terrain == TerrainType::Capital || self.depot || self.port
    }

    /// True while any job on this tile is still in progress.
    pub fn has_active_job(&self) -> bool {
        self.prospecting.is_some()
            || self.development_job.as_ref().is_some_and(|job| !job.completed)
            || self.construction_job.as_ref().is_some_and(|job| !job.completed)
    }

    /// True when `worker` is the worker of an in-progress job here.
    pub fn is_working(&self, worker: WorkerId) -> bool {
        self.prospecting.as_ref().is_some_and(|job| job.worker_id == worker)
            || self
                .development_job
                .as_ref()
                .is_some_and(|job| !job.completed && job.worker_id == worker)
            || self
                .construction_job
                .as_ref()
                .is_some_and(|job| !job.completed && job.worker_id == worker)
    }
}

/// Row-major grid of tiles.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GameMap {
    pub width: u32,
    pub height: u32,
    pub tiles: Vec<Tile>,
}

impl GameMap {
    /// Map filled with a single terrain type.
    pub fn filled(width: u32, height: u32, terrain: TerrainType) -> Self {
        let tiles = (0..height)
            .flat_map(|y| (0..width).map(move |x| Tile::new(TilePos::new(x, y), terrain)))
            .collect();
        Self {
            width,
            height,
            tiles,
        }
    }

    pub fn contains(&self, pos: TilePos) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    fn index(&self, pos: TilePos) -> Option<usize> {
        self.contains(pos)
            .then(|| (pos.y as usize) * (self.width as usize) + pos.x as usize)
    }

    pub fn tile(&self, pos: TilePos) -> Option<&Tile> {
        self.index(pos).and_then(|i| self.tiles.get(i))
    }

    pub fn tile_mut(&mut self, pos: TilePos) -> Option<&mut Tile> {
        let index = self.index(pos)?;
        self.tiles.get_mut(index)
    }

    /// In-bounds neighbours of `pos`; out-of-range candidates are dropped.
    pub fn neighbors(&self, pos: TilePos) -> impl Iterator<Item = TilePos> + '_ {
        pos.neighbor_candidates()
            .into_iter()
            .filter_map(move |(x, y)| {
                let x = u32::try_from(x).ok()?;
                let y = u32::try_from(y).ok()?;
                let candidate = TilePos::new(x, y);
                self.contains(candidate).then_some(candidate)
            })
    }

    /// Locate a worker anywhere on the map.
    pub fn find_worker(&self, id: WorkerId) -> Option<(TilePos, &Worker)> {
        self.tiles
            .iter()
            .find_map(|tile| tile.worker(id).map(|worker| (tile.position, worker)))
    }

    pub fn workers(&self) -> impl Iterator<Item = (TilePos, &Worker)> {
        self.tiles
            .iter()
            .flat_map(|tile| tile.workers.iter().map(move |w| (tile.position, w)))
    }
}

pub fn is_adjacent_to_ocean(map: &GameMap, pos: TilePos) -> bool {
    map.neighbors(pos)
        .filter_map(|n| map.tile(n))
        .any(|tile| tile.terrain.is_ocean())
}

pub fn are_tiles_adjacent(map: &GameMap, a: TilePos, b: TilePos) -> bool {
    map.neighbors(a).any(|n| n == b)
}
