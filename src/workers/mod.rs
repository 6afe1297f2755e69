use bevy::prelude::*;

use crate::logging::TurnLogEvent;
use crate::messages::workers::{WorkerCommand, WorkerCommandRejected};
use crate::state::GameState;
use crate::turn_system::TurnSet;

pub mod actions;
pub mod commands;
pub mod jobs;
pub mod kinds;
pub mod types;
pub mod validation;


pub use actions::{PossibleAction, get_possible_action};
pub use commands::*;
pub use jobs::{JobEvent, reconcile_workers, resolve_jobs};
pub use kinds::{WorkerBehavior, WorkerRole};
pub use types::*;

pub struct WorkerPlugin;

impl Plugin for WorkerPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<WorkerCommand>()
            .add_message::<WorkerCommandRejected>()
            .add_systems(
                Update,
                handle_worker_commands.in_set(TurnSet::WorkerCommands),
            );
    }
}

/// Apply queued worker commands to the game state in arrival order.
pub fn handle_worker_commands(
    mut commands: MessageReader<WorkerCommand>,
    state: Option<ResMut<GameState>>,
    mut rejections: MessageWriter<WorkerCommandRejected>,
    mut log: MessageWriter<TurnLogEvent>,
) {
    let Some(mut state) = state else {
        return;
    };

    for command in commands.read() {
        let (next, rejection) = apply_order(&state, command);
        if next != *state {
            *state = next;
        }
        if let Some(reason) = rejection {
            info!(
                "{} order {:?} at {} rejected: {}",
                command.worker, command.order, command.tile, reason
            );
            log.write(TurnLogEvent::new(format!(
                "{}: {}",
                command.worker,
                reason.describe()
            )));
            rejections.write(WorkerCommandRejected {
                command: *command,
                reason,
            });
        }
    }
}
