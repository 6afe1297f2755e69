//! Imperialism Engine - turn resolution for a hex-map economic strategy game
//!
//! The engine is a set of pure functions over [`state::GameState`]: worker
//! jobs, the railroad network, logistics and the turn pipeline. The plugins
//! below drive the same functions from Bevy messages for headless runs.

use bevy::app::PluginGroup;

use crate::economy::EconomyPlugin;
use crate::logging::TurnLogPlugin;
use crate::turn_system::TurnSystemPlugin;
use crate::workers::WorkerPlugin;

pub mod config;
pub mod constants;
pub mod economy;
pub mod logging;
pub mod map;
pub mod messages;
pub mod resources;
pub mod state;
pub mod turn_system;
pub mod workers;
pub mod world;

#[cfg(test)]
pub mod test_utils;

/// Plugin group for the engine (headless)
pub struct LogicPlugins;

impl PluginGroup for LogicPlugins {
    fn build(self) -> bevy::app::PluginGroupBuilder {
        bevy::app::PluginGroupBuilder::start::<Self>()
            .add(TurnLogPlugin)
            .add(WorkerPlugin)
            .add(EconomyPlugin)
            .add(TurnSystemPlugin)
    }
}
