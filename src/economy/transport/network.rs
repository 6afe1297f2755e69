use bevy::prelude::*;
use std::collections::BTreeMap;

use super::types::{HubNode, RailroadNetwork};
use crate::economy::nation::NationId;
use crate::map::tile_pos::TilePos;
use crate::map::tiles::{GameMap, TerrainType, Tile};
use crate::state::GameState;

/// Tile belongs in `nation`'s rail graph: owned land that carries track, or
/// the capital, which anchors the graph even without track of its own.
fn is_graph_node(tile: &Tile, nation: NationId, capital: Option<TilePos>) -> bool {
    tile.owner == Some(nation)
        && ((tile.connected && tile.terrain.can_carry_rail()) || capital == Some(tile.position))
}

/// Build every nation's network from scratch.
///
/// The first pass records capitals, registers depots and ports (inactive)
/// and creates graph entries; the second links each entry to its
/// same-nation graph neighbours.
pub fn initialize_railroad_networks(map: &GameMap) -> BTreeMap<NationId, RailroadNetwork> {
    let mut networks: BTreeMap<NationId, RailroadNetwork> = BTreeMap::new();

    for tile in &map.tiles {
        let Some(nation) = tile.owner else {
            continue;
        };
        let network = networks.entry(nation).or_default();
        if tile.terrain == TerrainType::Capital && network.capital.is_none() {
            network.capital = Some(tile.position);
        }
        if tile.depot {
            network.depots.push(HubNode::inactive(tile.position));
        }
        if tile.port {
            network.ports.push(HubNode::inactive(tile.position));
        }
    }

    for tile in &map.tiles {
        let Some(nation) = tile.owner else {
            continue;
        };
        let Some(network) = networks.get_mut(&nation) else {
            continue;
        };
        if is_graph_node(tile, nation, network.capital) {
            network.graph.entry(tile.position).or_default();
        }
    }

    for network in networks.values_mut() {
        let nodes: Vec<TilePos> = network.graph.keys().copied().collect();
        for node in nodes {
            for neighbor in map.neighbors(node) {
                if network.contains(neighbor) {
                    network.link(node, neighbor);
                }
            }
        }
    }

    debug!("Initialized {} railroad networks", networks.len());
    networks
}

impl RailroadNetwork {
    /// Copy of this network with `node` joined to every neighbour already
    /// in the graph. Adding a node twice changes nothing.
    pub fn with_railroad(&self, map: &GameMap, node: TilePos) -> Self {
        let mut next = self.clone();
        next.graph.entry(node).or_default();
        for neighbor in map.neighbors(node) {
            if next.contains(neighbor) {
                next.link(node, neighbor);
            }
        }
        next
    }

    /// Copy of this network with an inactive depot registered at `pos`.
    pub fn with_depot(&self, pos: TilePos) -> Self {
        let mut next = self.clone();
        if next.depot(pos).is_none() {
            next.depots.push(HubNode::inactive(pos));
        }
        next
    }

    /// Copy of this network with an inactive port registered at `pos`.
    pub fn with_port(&self, pos: TilePos) -> Self {
        let mut next = self.clone();
        if next.port(pos).is_none() {
            next.ports.push(HubNode::inactive(pos));
        }
        next
    }
}

/// Lay track on `node` and join it to `nation`'s graph.
pub fn add_railroad(state: &GameState, nation: NationId, node: TilePos) -> GameState {
    let mut next = state.clone();
    register_railroad(&mut next, nation, node);
    next
}

pub fn add_depot(state: &GameState, nation: NationId, pos: TilePos) -> GameState {
    let mut next = state.clone();
    register_depot(&mut next, nation, pos);
    next
}

pub fn add_port(state: &GameState, nation: NationId, pos: TilePos) -> GameState {
    let mut next = state.clone();
    register_port(&mut next, nation, pos);
    next
}

pub(crate) fn register_railroad(state: &mut GameState, nation: NationId, node: TilePos) {
    let Some(tile) = state.map.tile_mut(node) else {
        return;
    };
    if tile.owner != Some(nation) || !tile.terrain.can_carry_rail() {
        debug!("Ignoring rail at {} for {}: not owned land", node, nation);
        return;
    }
    tile.connected = true;
    let network = state.networks.entry(nation).or_default();
    *network = network.with_railroad(&state.map, node);
}

pub(crate) fn register_depot(state: &mut GameState, nation: NationId, pos: TilePos) {
    let network = state.networks.entry(nation).or_default();
    *network = network.with_depot(pos);
}

pub(crate) fn register_port(state: &mut GameState, nation: NationId, pos: TilePos) {
    let network = state.networks.entry(nation).or_default();
    *network = network.with_port(pos);
}
