mod common;

use bevy::ecs::message::Messages;
use bevy::ecs::schedule::{LogLevel, ScheduleBuildSettings};
use bevy::prelude::*;
use common::*;
use imperialism_engine::economy::goods::Good;
use imperialism_engine::logging::TurnLog;
use imperialism_engine::messages::{
    EndTurn, TransportCommand, TransportCommandError, TransportCommandRejected, TurnResolved,
    WorkerActionError, WorkerCommand, WorkerCommandRejected, WorkerOrder,
};
use imperialism_engine::resources::{ResourceType, TileResource};
use imperialism_engine::state::GameState;
use imperialism_engine::workers::{WorkerId, WorkerKind, WorkerStatus};

fn drain<M: Message + Clone>(app: &App) -> Vec<M> {
    let messages = app.world().resource::<Messages<M>>();
    let mut cursor = messages.get_cursor();
    cursor.read(messages).cloned().collect()
}

fn survey_app() -> App {
    let state = nation_world(4, 4, pos(0, 0))
        .resource(pos(1, 0), TileResource::visible(ResourceType::Grain))
        .resource(pos(2, 2), TileResource::hidden_mineral(ResourceType::Coal))
        .worker(pos(2, 2), 1, WorkerKind::Prospector, NATION)
        .worker(pos(2, 2), 2, WorkerKind::Farmer, NATION)
        .build();
    headless_app(state)
}

#[test]
fn worker_command_starts_a_job() {
    let mut app = survey_app();
    app.world_mut().write_message(WorkerCommand {
        tile: pos(2, 2),
        worker: WorkerId(1),
        order: WorkerOrder::Prospect,
    });
    app.update();

    let state = app.world().resource::<GameState>();
    let tile = state.tile(pos(2, 2)).unwrap();
    assert!(tile.prospecting.is_some());
    assert_eq!(tile.worker(WorkerId(1)).unwrap().status, WorkerStatus::Working);
    assert!(drain::<WorkerCommandRejected>(&app).is_empty());
}

#[test]
fn rejected_worker_command_is_reported_and_logged() {
    let mut app = survey_app();
    let before = app.world().resource::<GameState>().clone();
    app.world_mut().write_message(WorkerCommand {
        tile: pos(2, 2),
        worker: WorkerId(2),
        order: WorkerOrder::Prospect,
    });
    app.update();

    assert_eq!(*app.world().resource::<GameState>(), before);
    let rejected = drain::<WorkerCommandRejected>(&app);
    assert_eq!(rejected.len(), 1);
    assert_eq!(rejected[0].reason, WorkerActionError::RequiresProspector);

    let log = app.world().resource::<TurnLog>();
    assert_eq!(log.last(), Some("worker-2: requires prospector"));
}

#[test]
fn transport_commands_update_plan_and_reject_bad_purchases() {
    let mut app = survey_app();
    app.world_mut().write_message(TransportCommand::SetAllocations {
        nation: NATION,
        plan: vec![(Good::Grain, 3)],
    });
    app.world_mut()
        .write_message(TransportCommand::PurchaseCapacity {
            nation: NATION,
            delta: 4,
        });
    app.update();

    let state = app.world().resource::<GameState>();
    let plan = state.allocations.get(NATION).expect("plan stored");
    assert_eq!(plan.get(Good::Grain), Some(1));

    let rejected = drain::<TransportCommandRejected>(&app);
    assert_eq!(rejected.len(), 1);
    assert_eq!(rejected[0].reason, TransportCommandError::InsufficientMaterials);
}

#[test]
fn end_turn_resolves_and_announces() {
    let mut app = survey_app();
    app.world_mut().write_message(WorkerCommand {
        tile: pos(2, 2),
        worker: WorkerId(1),
        order: WorkerOrder::Prospect,
    });
    app.update();

    for _ in 0..2 {
        app.world_mut().write_message(EndTurn);
        app.update();
    }

    let state = app.world().resource::<GameState>();
    assert_eq!(state.turn, 3);
    let resource = state.tile(pos(2, 2)).unwrap().resource.unwrap();
    assert!(resource.discovered);
    assert_eq!(resource.resource_type, ResourceType::Coal);

    let resolved = drain::<TurnResolved>(&app);
    assert_eq!(resolved.last().map(|r| r.turn), Some(3));

    let log = app.world().resource::<TurnLog>();
    assert!(
        log.messages
            .iter()
            .any(|line| line == "Prospectors found Coal at 2-2")
    );
}

#[test]
fn orders_in_the_same_frame_apply_before_the_turn_resolves() {
    let mut app = survey_app();
    app.edit_schedule(Update, |schedule| {
        schedule.set_build_settings(ScheduleBuildSettings {
            ambiguity_detection: LogLevel::Error,
            ..default()
        });
    });
    let base_capacity = {
        let mut state = app.world_mut().resource_mut::<GameState>();
        let nation = state.nations.get_mut(&NATION).unwrap();
        nation.warehouse.add(Good::Coal, 1);
        nation.warehouse.add(Good::IronOre, 1);
        nation.transport_capacity
    };

    app.world_mut().write_message(EndTurn);
    app.world_mut().write_message(WorkerCommand {
        tile: pos(2, 2),
        worker: WorkerId(1),
        order: WorkerOrder::Prospect,
    });
    app.world_mut()
        .write_message(TransportCommand::PurchaseCapacity {
            nation: NATION,
            delta: 1,
        });
    app.update();

    let state = app.world().resource::<GameState>();
    assert_eq!(state.turn, 2);
    let job = state.tile(pos(2, 2)).unwrap().prospecting.expect("survey started");
    assert_eq!(job.started_on_turn, 1);
    assert_eq!(state.nations[&NATION].transport_capacity, base_capacity + 1);
    assert_eq!(state.nations[&NATION].transport_capacity_pending_increase, 0);
}
