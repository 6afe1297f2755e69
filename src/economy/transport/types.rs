use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::map::tile_pos::TilePos;

/// Depot or port registered with a nation's network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HubNode {
    pub position: TilePos,
    /// Derived by the connectivity pass; never authoritative
    pub is_active: bool,
}

impl HubNode {
    pub fn inactive(position: TilePos) -> Self {
        Self {
            position,
            is_active: false,
        }
    }
}

/// Undirected rail graph of one nation plus its registered hubs.
///
/// Every edge is stored in both endpoint sets, so a node's set is exactly
/// its rail neighbours.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RailroadNetwork {
    pub graph: BTreeMap<TilePos, BTreeSet<TilePos>>,
    pub capital: Option<TilePos>,
    pub depots: Vec<HubNode>,
    pub ports: Vec<HubNode>,
}

impl RailroadNetwork {
    pub fn contains(&self, pos: TilePos) -> bool {
        self.graph.contains_key(&pos)
    }

    pub fn neighbors(&self, pos: TilePos) -> impl Iterator<Item = TilePos> + '_ {
        self.graph.get(&pos).into_iter().flatten().copied()
    }

    pub fn has_edge(&self, a: TilePos, b: TilePos) -> bool {
        self.graph.get(&a).is_some_and(|n| n.contains(&b))
    }

    pub fn edge_count(&self) -> usize {
        self.graph.values().map(BTreeSet::len).sum::<usize>() / 2
    }

    pub fn depot(&self, pos: TilePos) -> Option<&HubNode> {
        self.depots.iter().find(|d| d.position == pos)
    }

    pub fn port(&self, pos: TilePos) -> Option<&HubNode> {
        self.ports.iter().find(|p| p.position == pos)
    }

    /// Insert the edge `a <-> b`. Existing edges are left as they are.
    pub(crate) fn link(&mut self, a: TilePos, b: TilePos) {
        if a == b {
            return;
        }
        self.graph.entry(a).or_default().insert(b);
        self.graph.entry(b).or_default().insert(a);
    }

    /// Copy of this network with the edge `a <-> b` removed.
    pub fn without_link(&self, a: TilePos, b: TilePos) -> Self {
        let mut next = self.clone();
        if let Some(neighbors) = next.graph.get_mut(&a) {
            neighbors.remove(&b);
        }
        if let Some(neighbors) = next.graph.get_mut(&b) {
            neighbors.remove(&a);
        }
        next
    }
}
