//! World construction: a fluent builder for hand-made maps and a seeded
//! generator for demo worlds.

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::GameRules;
use crate::constants::RNG_BASE_SEED;
use crate::economy::nation::{Nation, NationId};
use crate::map::terrain_gen::TerrainGenerator;
use crate::map::tile_pos::TilePos;
use crate::map::tiles::{GameMap, TerrainType};
use crate::resources::{ResourceType, TileResource};
use crate::state::GameState;
use crate::workers::types::{Worker, WorkerId, WorkerKind};

const NATION_NAMES: [&str; 7] = [
    "Britain",
    "France",
    "Prussia",
    "Austria",
    "Russia",
    "Spain",
    "Ottoman Empire",
];

/// Builds a [`GameState`] tile by tile.
///
/// Calls referring to positions outside the map are ignored.
#[derive(Debug, Clone)]
pub struct WorldBuilder {
    map: GameMap,
    nations: Vec<Nation>,
    rules: GameRules,
    seed: u64,
}

impl WorldBuilder {
    /// Grassland map of the given size with no owners.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            map: GameMap::filled(width, height, TerrainType::Grassland),
            nations: Vec::new(),
            rules: GameRules::default(),
            seed: RNG_BASE_SEED,
        }
    }

    pub fn rules(mut self, rules: GameRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Register a nation with the rules' starting treasury and capacity.
    pub fn nation(self, id: NationId, name: &str) -> Self {
        let nation = Nation::new(
            id,
            name,
            self.rules.starting_treasury,
            self.rules.starting_transport_capacity,
        );
        self.with_nation(nation)
    }

    pub fn with_nation(mut self, nation: Nation) -> Self {
        self.nations.retain(|n| n.id != nation.id);
        self.nations.push(nation);
        self
    }

    pub fn terrain(mut self, pos: TilePos, terrain: TerrainType) -> Self {
        if let Some(tile) = self.map.tile_mut(pos) {
            tile.terrain = terrain;
        }
        self
    }

    pub fn owner(mut self, pos: TilePos, nation: NationId) -> Self {
        if let Some(tile) = self.map.tile_mut(pos) {
            tile.owner = Some(nation);
        }
        self
    }

    /// Give every tile on the map to `nation`.
    pub fn owner_everywhere(mut self, nation: NationId) -> Self {
        for tile in self.map.tiles.iter_mut() {
            tile.owner = Some(nation);
        }
        self
    }

    pub fn capital(self, pos: TilePos, nation: NationId) -> Self {
        self.terrain(pos, TerrainType::Capital).owner(pos, nation)
    }

    pub fn resource(mut self, pos: TilePos, resource: TileResource) -> Self {
        if let Some(tile) = self.map.tile_mut(pos) {
            tile.resource = Some(resource);
        }
        self
    }

    pub fn rail(mut self, pos: TilePos) -> Self {
        if let Some(tile) = self.map.tile_mut(pos) {
            tile.connected = true;
        }
        self
    }

    pub fn depot(mut self, pos: TilePos) -> Self {
        if let Some(tile) = self.map.tile_mut(pos) {
            tile.depot = true;
        }
        self
    }

    pub fn port(mut self, pos: TilePos) -> Self {
        if let Some(tile) = self.map.tile_mut(pos) {
            tile.port = true;
        }
        self
    }

    pub fn worker(mut self, pos: TilePos, id: u32, kind: WorkerKind, nation: NationId) -> Self {
        if let Some(tile) = self.map.tile_mut(pos) {
            tile.workers.push(Worker::new(WorkerId(id), kind, nation));
        }
        self
    }

    pub fn build(self) -> GameState {
        GameState::new(self.map, self.nations, self.rules, self.seed)
    }
}

/// Resource a freshly generated tile carries, if any.
///
/// Farmland and pasture start with visible deposits; hills, mountains and
/// oil country hide theirs until surveyed.
fn starting_resource(terrain: TerrainType, rng: &mut StdRng) -> Option<TileResource> {
    let visible = |resource| Some(TileResource::visible(resource));
    match terrain {
        TerrainType::Farm | TerrainType::Grassland => visible(ResourceType::Grain),
        TerrainType::Orchard => visible(ResourceType::Fruit),
        TerrainType::CottonField => visible(ResourceType::Cotton),
        TerrainType::OpenRange => visible(ResourceType::Wool),
        TerrainType::HorseRanch => visible(ResourceType::Horses),
        TerrainType::Forest => visible(ResourceType::Timber),
        TerrainType::HardwoodForest => visible(ResourceType::Hardwood),
        TerrainType::Hills => {
            let deposit = if rng.random_bool(0.5) {
                ResourceType::Coal
            } else {
                ResourceType::IronOre
            };
            Some(TileResource::hidden_mineral(deposit))
        }
        TerrainType::BarrenHills | TerrainType::Mountains => {
            Some(TileResource::hidden_mineral(ResourceType::Coal))
        }
        TerrainType::Swamp | TerrainType::Desert | TerrainType::Tundra => rng
            .random_bool(0.6)
            .then(|| TileResource::hidden_mineral(ResourceType::Oil)),
        _ => None,
    }
}

/// Seeded demo world.
///
/// The two westmost columns are open sea and coast. The remaining land is
/// cut into one vertical band per nation. Each nation gets a capital in the
/// middle of its band, a rail line running west from it to a depot (a port
/// for the coastal nation) and one of each land worker at the capital.
pub fn generate_world(seed: u64, width: u32, height: u32, nations: u32) -> GameState {
    generate_world_with_rules(seed, width, height, nations, GameRules::default())
}

pub fn generate_world_with_rules(
    seed: u64,
    width: u32,
    height: u32,
    nations: u32,
    rules: GameRules,
) -> GameState {
    let mut rng = StdRng::seed_from_u64(seed);
    // Perlin seeds are 32-bit
    let terrain_gen = TerrainGenerator::new((seed ^ (seed >> 32)) as u32);

    let land_start = 2.min(width);
    let land_width = width - land_start;
    let nation_count = nations.min(land_width);
    let band = if nation_count == 0 {
        0
    } else {
        land_width / nation_count
    };

    let mut builder = WorldBuilder::new(width, height).rules(rules).seed(seed);
    for tile in builder.map.tiles.iter_mut() {
        let TilePos { x, y } = tile.position;
        tile.terrain = match x {
            0 => TerrainType::Water,
            1 => TerrainType::Coast,
            _ => terrain_gen.generate_terrain(x, y, width, height),
        };
        tile.resource = starting_resource(tile.terrain, &mut rng);
    }

    let row = height / 2;
    let mut next_worker = 1;
    for index in 0..nation_count {
        let id = NationId(index + 1);
        let name = NATION_NAMES
            .get(index as usize)
            .map(|name| (*name).to_string())
            .unwrap_or_else(|| format!("Nation {}", index + 1));
        builder = builder.nation(id, &name);

        let band_start = land_start + index * band;
        let band_end = if index + 1 == nation_count {
            width
        } else {
            band_start + band
        };
        for tile in builder.map.tiles.iter_mut() {
            if (band_start..band_end).contains(&tile.position.x) {
                tile.owner = Some(id);
            }
        }

        if height == 0 {
            continue;
        }

        let capital = TilePos::new(band_start + (band_end - band_start) / 2, row);
        builder = builder.capital(capital, id);
        if let Some(tile) = builder.map.tile_mut(capital) {
            tile.resource = None;
        }

        for x in band_start..capital.x {
            builder = builder.rail(TilePos::new(x, row));
        }
        let terminus = TilePos::new(band_start, row);
        if terminus != capital {
            builder = if index == 0 {
                builder.port(terminus)
            } else {
                builder.depot(terminus)
            };
        }

        for kind in [
            WorkerKind::Engineer,
            WorkerKind::Prospector,
            WorkerKind::Farmer,
            WorkerKind::Rancher,
            WorkerKind::Forester,
            WorkerKind::Miner,
            WorkerKind::Driller,
        ] {
            builder = builder.worker(capital, next_worker, kind, id);
            next_worker += 1;
        }
    }

    info!(
        "Generated {}x{} world with {} nations (seed {:#x})",
        width, height, nation_count, seed
    );
    builder.build()
}
