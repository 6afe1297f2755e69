use bevy::prelude::*;

use crate::logging::TurnLogEvent;
use crate::messages::transport::{TransportCommand, TransportCommandRejected};
use crate::state::GameState;
use crate::turn_system::TurnSet;

pub mod calendar;
pub mod goods;
pub mod logistics;
pub mod nation;
pub mod transport;
pub mod warehouse;

pub use calendar::{Calendar, Season};
pub use goods::Good;
pub use logistics::{AllocationPlan, LogisticsReport, TransportAllocations};
pub use nation::{Nation, NationId};
pub use transport::{HubNode, RailroadNetwork};
pub use warehouse::Warehouse;

/// Plugin that applies transport screen commands to the game state
pub struct EconomyPlugin;

impl Plugin for EconomyPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<TransportCommand>()
            .add_message::<TransportCommandRejected>()
            .add_systems(
                Update,
                handle_transport_commands.in_set(TurnSet::TransportCommands),
            );
    }
}

pub fn handle_transport_commands(
    mut commands: MessageReader<TransportCommand>,
    state: Option<ResMut<GameState>>,
    mut rejections: MessageWriter<TransportCommandRejected>,
    mut log: MessageWriter<TurnLogEvent>,
) {
    let Some(mut state) = state else {
        return;
    };

    for command in commands.read() {
        let result = match command {
            TransportCommand::SetAllocations { nation, plan } => {
                logistics::try_set_transport_allocations(
                    &state,
                    *nation,
                    plan.iter().copied().collect(),
                )
            }
            TransportCommand::PurchaseCapacity { nation, delta } => {
                transport::try_purchase_transport_capacity(&state, *nation, *delta)
            }
        };
        match result {
            Ok(next) => *state = next,
            Err(reason) => {
                info!("Transport command {:?} rejected: {}", command, reason);
                log.write(TurnLogEvent::new(format!("Transport: {}", reason)));
                rejections.write(TransportCommandRejected {
                    command: command.clone(),
                    reason,
                });
            }
        }
    }
}
