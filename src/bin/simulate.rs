//! Headless turn simulation.
//! Run with: cargo run --bin simulate -- --turns 12 --seed 42

use std::path::PathBuf;

use anyhow::{Context, Result};
use bevy::log::LogPlugin;
use bevy::prelude::*;
use clap::Parser;

use imperialism_engine::LogicPlugins;
use imperialism_engine::config::GameRules;
use imperialism_engine::constants::RNG_BASE_SEED;
use imperialism_engine::logging::TurnLog;
use imperialism_engine::messages::EndTurn;
use imperialism_engine::state::GameState;
use imperialism_engine::world::generate_world_with_rules;

#[derive(Debug, Parser)]
#[command(author, version, about = "Run the turn engine on a generated world")]
struct Cli {
    /// Number of turns to resolve
    #[arg(long, default_value_t = 8)]
    turns: u32,

    /// World and turn RNG seed
    #[arg(long, default_value_t = RNG_BASE_SEED)]
    seed: u64,

    #[arg(long, default_value_t = 24)]
    width: u32,

    #[arg(long, default_value_t = 16)]
    height: u32,

    #[arg(long, default_value_t = 3)]
    nations: u32,

    /// JSON rules file overriding the default costs and durations
    #[arg(long)]
    rules: Option<PathBuf>,

    /// Write the final state as JSON to this path
    #[arg(long)]
    dump_state: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let rules = match &cli.rules {
        Some(path) => GameRules::from_path(path)
            .with_context(|| format!("loading rules from {}", path.display()))?,
        None => GameRules::default(),
    };
    let state = generate_world_with_rules(cli.seed, cli.width, cli.height, cli.nations, rules);

    let mut app = App::new();
    app.add_plugins((LogPlugin::default(), LogicPlugins));
    app.insert_resource(state);

    for _ in 0..cli.turns {
        app.world_mut().write_message(EndTurn);
        app.update();
    }

    let state = app.world().resource::<GameState>();
    println!(
        "After {} turns: turn {}, {}",
        cli.turns,
        state.turn,
        state.calendar.display()
    );
    for nation in state.nations.values() {
        let network = state.networks.get(&nation.id);
        let active_depots = network
            .map(|n| n.depots.iter().filter(|d| d.is_active).count())
            .unwrap_or(0);
        let stored: u32 = nation.warehouse.goods.values().sum();
        println!(
            "  {:<16} treasury {:>6}  capacity {:>3}  stored {:>4}  rail {:>3}  active depots {}",
            nation.name,
            nation.treasury,
            nation.transport_capacity,
            stored,
            network.map_or(0, |n| n.graph.len()),
            active_depots
        );
    }

    let log = app.world().resource::<TurnLog>();
    for line in log.messages.iter().rev().take(10).rev() {
        println!("  > {}", line);
    }

    if let Some(path) = &cli.dump_state {
        let json = serde_json::to_string_pretty(state).context("serializing state")?;
        std::fs::write(path, json)
            .with_context(|| format!("writing state to {}", path.display()))?;
        println!("State written to {}", path.display());
    }

    Ok(())
}
