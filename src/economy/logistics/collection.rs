use std::collections::{BTreeMap, BTreeSet};

use crate::economy::goods::Good;
use crate::economy::nation::NationId;
use crate::map::tile_pos::TilePos;
use crate::map::tiles::{GameMap, TerrainType, Tile};

/// Owned tiles that gather goods for `nation`: its capital plus every
/// depot and port the connectivity pass marked active.
pub fn logistics_hubs(map: &GameMap, nation: NationId) -> BTreeSet<TilePos> {
    map.tiles
        .iter()
        .filter(|tile| tile.owner == Some(nation) && is_hub(tile))
        .map(|tile| tile.position)
        .collect()
}

fn is_hub(tile: &Tile) -> bool {
    tile.terrain == TerrainType::Capital
        || (tile.depot && tile.active_depot)
        || (tile.port && tile.active_port)
}

/// Goods this nation could ship this turn.
///
/// A tile contributes when it is owned, sits on or next to a hub and holds
/// a discovered deposit with non-zero output.
pub fn compute_logistics_transport(map: &GameMap, nation: NationId) -> BTreeMap<Good, u32> {
    let hubs = logistics_hubs(map, nation);
    let mut collected: BTreeMap<Good, u32> = BTreeMap::new();

    for tile in &map.tiles {
        if tile.owner != Some(nation) {
            continue;
        }
        let Some(resource) = tile.resource else {
            continue;
        };
        let served = hubs.contains(&tile.position)
            || map.neighbors(tile.position).any(|n| hubs.contains(&n));
        if !served {
            continue;
        }
        let output = resource.output();
        if output == 0 {
            continue;
        }
        let entry = collected.entry(resource.resource_type.to_good()).or_default();
        *entry = entry.saturating_add(output);
    }

    collected
}
