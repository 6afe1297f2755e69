#![allow(dead_code)]

use bevy::prelude::*;
use imperialism_engine::LogicPlugins;
use imperialism_engine::economy::nation::NationId;
use imperialism_engine::map::tile_pos::TilePos;
use imperialism_engine::state::GameState;
use imperialism_engine::world::WorldBuilder;

pub const NATION: NationId = NationId(1);
pub const OTHER: NationId = NationId(2);

pub fn pos(x: u32, y: u32) -> TilePos {
    TilePos::new(x, y)
}

/// Grassland owned by [`NATION`] with its capital at `capital`.
pub fn nation_world(width: u32, height: u32, capital: TilePos) -> WorldBuilder {
    WorldBuilder::new(width, height)
        .nation(NATION, "First")
        .nation(OTHER, "Second")
        .owner_everywhere(NATION)
        .capital(capital, NATION)
}

/// Headless app with the engine plugins and `state` installed.
pub fn headless_app(state: GameState) -> App {
    let mut app = App::new();
    app.add_plugins(LogicPlugins);
    app.insert_resource(state);
    app
}

/// Run `turns` turns through the pure pipeline.
pub fn run_turns(state: &GameState, turns: u32) -> GameState {
    (0..turns).fold(state.clone(), |s, _| {
        imperialism_engine::turn_system::advance_turn(&s)
    })
}
