use bevy::prelude::*;

use crate::logging::TurnLogEvent;
use crate::messages::turn::{EndTurn, TurnResolved};
use crate::state::GameState;

pub mod pipeline;
pub mod report;


pub use pipeline::{PhaseFn, WORLD_PHASES, advance_turn, advance_turn_with_report, turn_rng};
pub use report::TurnReport;

/// Order of the systems that write [`GameState`] within a frame: worker
/// orders, then transport orders, then turn resolution.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum TurnSet {
    WorkerCommands,
    TransportCommands,
    Resolve,
}

pub struct TurnSystemPlugin;

impl Plugin for TurnSystemPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TurnReport>()
            .add_message::<EndTurn>()
            .add_message::<TurnResolved>()
            .configure_sets(
                Update,
                (
                    TurnSet::WorkerCommands,
                    TurnSet::TransportCommands,
                    TurnSet::Resolve,
                )
                    .chain(),
            )
            .add_systems(Update, handle_end_turn.in_set(TurnSet::Resolve));
    }
}

/// Resolve one turn per `EndTurn` message.
pub fn handle_end_turn(
    mut end_turn: MessageReader<EndTurn>,
    state: Option<ResMut<GameState>>,
    mut last_report: ResMut<TurnReport>,
    mut log: MessageWriter<TurnLogEvent>,
    mut resolved: MessageWriter<TurnResolved>,
) {
    let Some(mut state) = state else {
        if !end_turn.is_empty() {
            warn!("EndTurn received before a game state exists");
            end_turn.clear();
        }
        return;
    };

    for _ in end_turn.read() {
        let (next, report) = advance_turn_with_report(&state);
        *state = next;
        for line in report.lines() {
            log.write(TurnLogEvent::new(line));
        }
        resolved.write(TurnResolved { turn: state.turn });
        *last_report = report;
    }
}
