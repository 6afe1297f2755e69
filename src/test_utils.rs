//! Shared fixtures for unit tests.

use bevy::prelude::*;

use crate::LogicPlugins;
use crate::economy::nation::NationId;
use crate::map::tile_pos::TilePos;
use crate::state::GameState;
use crate::workers::types::{Worker, WorkerId};
use crate::world::WorldBuilder;

pub const PLAYER: NationId = NationId(1);
pub const RIVAL: NationId = NationId(2);

pub fn pos(x: u32, y: u32) -> TilePos {
    TilePos::new(x, y)
}

/// `width` x `height` grassland owned by [`PLAYER`], capital at (0,0), with
/// [`RIVAL`] registered but owning nothing.
pub fn player_world(width: u32, height: u32) -> WorldBuilder {
    WorldBuilder::new(width, height)
        .nation(PLAYER, "Player")
        .nation(RIVAL, "Rival")
        .owner_everywhere(PLAYER)
        .capital(pos(0, 0), PLAYER)
}

/// Where a worker is and what it looks like, panicking if it is gone.
pub fn worker(state: &GameState, id: u32) -> (TilePos, Worker) {
    let (tile, worker) = state
        .find_worker(WorkerId(id))
        .unwrap_or_else(|| panic!("worker {id} missing"));
    (tile, worker.clone())
}

pub fn treasury(state: &GameState, nation: NationId) -> i64 {
    state.nations[&nation].treasury
}

/// Headless app running the engine plugins on `state`.
pub fn create_test_app(state: GameState) -> App {
    let mut app = App::new();
    app.add_plugins(LogicPlugins);
    app.insert_resource(state);
    app
}
