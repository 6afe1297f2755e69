//! The game state value every engine operation reads and returns.

use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config::GameRules;
use crate::constants::RNG_BASE_SEED;
use crate::economy::calendar::Calendar;
use crate::economy::logistics::{LogisticsReport, TransportAllocations};
use crate::economy::nation::{Nation, NationId};
use crate::economy::transport::{RailroadNetwork, initialize_railroad_networks};
use crate::map::tile_pos::TilePos;
use crate::map::tiles::{GameMap, Tile};
use crate::workers::types::{Worker, WorkerId};

/// Complete simulation state.
///
/// Operations borrow a state and hand back a new one, so a snapshot held by
/// an observer is never changed underneath it.
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub turn: u32,
    pub calendar: Calendar,
    /// Base seed for the per-turn RNG
    pub seed: u64,
    pub rules: GameRules,
    pub map: GameMap,
    pub nations: BTreeMap<NationId, Nation>,
    pub networks: BTreeMap<NationId, RailroadNetwork>,
    pub allocations: TransportAllocations,
    /// Outcome of the most recent logistics pass
    pub logistics: BTreeMap<NationId, LogisticsReport>,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            turn: 1,
            calendar: Calendar::default(),
            seed: RNG_BASE_SEED,
            rules: GameRules::default(),
            map: GameMap::default(),
            nations: BTreeMap::new(),
            networks: BTreeMap::new(),
            allocations: TransportAllocations::default(),
            logistics: BTreeMap::new(),
        }
    }
}

impl GameState {
    /// Wire a freshly initialised map and nation list into a playable state.
    pub fn new(
        map: GameMap,
        nations: impl IntoIterator<Item = Nation>,
        rules: GameRules,
        seed: u64,
    ) -> Self {
        let nations: BTreeMap<NationId, Nation> =
            nations.into_iter().map(|n| (n.id, n)).collect();
        let mut networks = initialize_railroad_networks(&map);
        for id in nations.keys() {
            networks.entry(*id).or_default();
        }
        Self {
            seed,
            rules,
            map,
            nations,
            networks,
            ..Self::default()
        }
    }

    pub fn tile(&self, pos: TilePos) -> Option<&Tile> {
        self.map.tile(pos)
    }

    pub fn nation(&self, id: NationId) -> Option<&Nation> {
        self.nations.get(&id)
    }

    pub fn find_worker(&self, id: WorkerId) -> Option<(TilePos, &Worker)> {
        self.map.find_worker(id)
    }

    /// Turn number that job resolution is advancing towards.
    pub fn next_turn(&self) -> u32 {
        self.turn + 1
    }
}
