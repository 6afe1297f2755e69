mod common;

use common::*;
use imperialism_engine::economy::transport::{
    add_depot, add_port, add_railroad, compute_connectivity, initialize_railroad_networks,
};
use imperialism_engine::map::tiles::TerrainType;

#[test]
fn branches_built_in_any_order_give_the_same_graph() {
    let state = nation_world(6, 6, pos(2, 2)).build();
    let branches = [pos(3, 2), pos(4, 2), pos(2, 3), pos(2, 4), pos(1, 2)];

    let forward = branches
        .iter()
        .fold(state.clone(), |s, node| add_railroad(&s, NATION, *node));
    let backward = branches
        .iter()
        .rev()
        .fold(state.clone(), |s, node| add_railroad(&s, NATION, *node));

    assert_eq!(forward.networks[&NATION].graph, backward.networks[&NATION].graph);
    assert_eq!(
        forward.networks[&NATION],
        initialize_railroad_networks(&forward.map)[&NATION]
    );
}

#[test]
fn depot_activates_only_when_track_reaches_the_capital() {
    let state = nation_world(6, 2, pos(0, 0)).build();
    let state = add_railroad(&state, NATION, pos(3, 0));
    let state = add_depot(&state, NATION, pos(3, 0));

    let cut = compute_connectivity(&state);
    assert!(!cut.tile(pos(3, 0)).unwrap().active_depot);
    assert!(!cut.networks[&NATION].depot(pos(3, 0)).unwrap().is_active);

    let joined = [pos(1, 0), pos(2, 0)]
        .iter()
        .fold(state, |s, node| add_railroad(&s, NATION, *node));
    let joined = compute_connectivity(&joined);
    assert!(joined.tile(pos(3, 0)).unwrap().active_depot);
}

#[test]
fn inland_port_stays_idle() {
    let state = nation_world(4, 2, pos(0, 0))
        .rail(pos(1, 0))
        .build();
    let state = add_port(&state, NATION, pos(1, 0));
    let state = compute_connectivity(&state);

    assert!(!state.tile(pos(1, 0)).unwrap().active_port);
}

#[test]
fn coastal_port_serves_its_own_component() {
    // Capital far to the east; the port's track is not joined to it
    let state = nation_world(8, 2, pos(7, 0))
        .terrain(pos(0, 0), TerrainType::Water)
        .owner(pos(0, 0), OTHER)
        .rail(pos(1, 0))
        .rail(pos(2, 0))
        .depot(pos(2, 0))
        .port(pos(1, 0))
        .build();
    let state = compute_connectivity(&state);

    assert!(state.tile(pos(1, 0)).unwrap().active_port);
    assert!(state.tile(pos(2, 0)).unwrap().active_depot);
}

#[test]
fn foreign_track_does_not_join_networks() {
    let state = nation_world(5, 1, pos(0, 0))
        .owner(pos(2, 0), OTHER)
        .rail(pos(1, 0))
        .rail(pos(2, 0))
        .rail(pos(3, 0))
        .depot(pos(3, 0))
        .build();
    let state = compute_connectivity(&state);

    assert!(!state.networks[&NATION].contains(pos(2, 0)));
    assert!(!state.networks[&NATION].has_edge(pos(1, 0), pos(3, 0)));
    assert!(!state.tile(pos(3, 0)).unwrap().active_depot);
}
