use bevy::prelude::*;
use std::collections::{HashSet, VecDeque};

use super::types::RailroadNetwork;
use crate::map::tile_pos::TilePos;
use crate::map::tiles::{GameMap, is_adjacent_to_ocean};
use crate::state::GameState;

/// Every node reachable over rail from any of `seeds`, seeds included.
pub fn reachable_from(
    network: &RailroadNetwork,
    seeds: impl IntoIterator<Item = TilePos>,
) -> HashSet<TilePos> {
    let mut reachable: HashSet<TilePos> = HashSet::new();
    let mut queue: VecDeque<TilePos> = VecDeque::new();

    for seed in seeds {
        if reachable.insert(seed) {
            queue.push_back(seed);
        }
    }

    while let Some(current) = queue.pop_front() {
        for neighbor in network.neighbors(current) {
            if reachable.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }

    reachable
}

/// Tiles that count as served by the nation's network this turn: everything
/// reachable from the capital, unioned with everything reachable from a
/// coastal port that sits on the rail graph.
///
/// A port only seeds the search when it is itself a graph node. A coastal
/// port with no track under it has zero rail connectivity and serves
/// nothing, not even itself.
pub fn served_tiles(map: &GameMap, network: &RailroadNetwork) -> HashSet<TilePos> {
    let Some(capital) = network.capital else {
        return HashSet::new();
    };

    let mut served = reachable_from(network, [capital]);

    let coastal_ports = network
        .ports
        .iter()
        .map(|port| port.position)
        .filter(|pos| network.contains(*pos) && is_adjacent_to_ocean(map, *pos));
    served.extend(reachable_from(network, coastal_ports));

    served
}

/// Recompute which depots and ports are active.
///
/// The pass starts from scratch each time: previous activation flags are
/// ignored and overwritten, both on the networks and on the tiles.
pub fn compute_connectivity(state: &GameState) -> GameState {
    let mut next = state.clone();

    for tile in next.map.tiles.iter_mut() {
        tile.active_depot = false;
        tile.active_port = false;
    }

    for (nation, network) in next.networks.iter_mut() {
        let served = served_tiles(&next.map, network);

        for depot in network.depots.iter_mut() {
            depot.is_active = served.contains(&depot.position);
        }
        for port in network.ports.iter_mut() {
            port.is_active =
                served.contains(&port.position) && is_adjacent_to_ocean(&next.map, port.position);
        }

        let active_depots = network.depots.iter().filter(|d| d.is_active).count();
        let active_ports = network.ports.iter().filter(|p| p.is_active).count();
        debug!(
            "{}: {} of {} depots and {} of {} ports active",
            nation,
            active_depots,
            network.depots.len(),
            active_ports,
            network.ports.len()
        );
    }

    for network in next.networks.values() {
        for depot in network.depots.iter().filter(|d| d.is_active) {
            if let Some(tile) = next.map.tile_mut(depot.position) {
                tile.active_depot = true;
            }
        }
        for port in network.ports.iter().filter(|p| p.is_active) {
            if let Some(tile) = next.map.tile_mut(port.position) {
                tile.active_port = true;
            }
        }
    }

    next
}
