use crate::economy::goods::Good;
use crate::economy::nation::NationId;
use crate::economy::warehouse::Warehouse;
use crate::map::tile_pos::TilePos;
use crate::map::tiles::TerrainType;
use crate::messages::transport::TransportCommandError;
use crate::state::GameState;
use crate::world::WorldBuilder;

use super::*;

const NATION: NationId = NationId(1);

fn pos(x: u32, y: u32) -> TilePos {
    TilePos::new(x, y)
}

/// Capital at (1,2), track east along row 2 to a depot at (4,2).
fn rail_line() -> GameState {
    WorldBuilder::new(6, 5)
        .nation(NATION, "Testland")
        .owner_everywhere(NATION)
        .capital(pos(1, 2), NATION)
        .rail(pos(2, 2))
        .rail(pos(3, 2))
        .rail(pos(4, 2))
        .depot(pos(4, 2))
        .build()
}

#[test]
fn initialization_links_adjacent_track() {
    let state = rail_line();
    let network = &state.networks[&NATION];

    assert_eq!(network.capital, Some(pos(1, 2)));
    assert!(network.has_edge(pos(1, 2), pos(2, 2)));
    assert!(network.has_edge(pos(2, 2), pos(1, 2)));
    assert!(network.has_edge(pos(3, 2), pos(4, 2)));
    assert!(!network.has_edge(pos(1, 2), pos(4, 2)));
    assert_eq!(network.edge_count(), 3);
    assert_eq!(network.depots, vec![HubNode::inactive(pos(4, 2))]);
}

#[test]
fn track_on_foreign_or_water_tiles_stays_out_of_graph() {
    let state = WorldBuilder::new(4, 3)
        .nation(NATION, "Testland")
        .nation(NationId(2), "Rival")
        .owner(pos(0, 1), NATION)
        .capital(pos(0, 1), NATION)
        .rail(pos(1, 1))
        .owner(pos(1, 1), NationId(2))
        .terrain(pos(2, 1), TerrainType::Water)
        .owner(pos(2, 1), NATION)
        .rail(pos(2, 1))
        .build();

    let network = &state.networks[&NATION];
    assert!(!network.contains(pos(1, 1)));
    assert!(!network.contains(pos(2, 1)));
    assert!(state.networks[&NationId(2)].contains(pos(1, 1)));
}

#[test]
fn incremental_rail_matches_full_initialization() {
    let bare = WorldBuilder::new(6, 5)
        .nation(NATION, "Testland")
        .owner_everywhere(NATION)
        .capital(pos(1, 2), NATION)
        .build();

    let order_a = [pos(2, 2), pos(3, 2), pos(3, 1), pos(4, 2)];
    let order_b = [pos(4, 2), pos(3, 1), pos(2, 2), pos(3, 2)];

    let incremental = |order: &[TilePos]| {
        order
            .iter()
            .fold(bare.clone(), |state, node| add_railroad(&state, NATION, *node))
    };
    let a = incremental(&order_a);
    let b = incremental(&order_b);

    let full = initialize_railroad_networks(&a.map);
    assert_eq!(a.networks[&NATION].graph, full[&NATION].graph);
    assert_eq!(b.networks[&NATION].graph, full[&NATION].graph);
    assert!(a.tile(pos(3, 1)).unwrap().connected);
}

#[test]
fn registration_is_idempotent() {
    let state = rail_line();
    let once = add_railroad(&state, NATION, pos(5, 2));
    let twice = add_railroad(&once, NATION, pos(5, 2));
    assert_eq!(once, twice);

    let with_port = add_port(&state, NATION, pos(3, 2));
    assert_eq!(add_port(&with_port, NATION, pos(3, 2)), with_port);
    assert_eq!(with_port.networks[&NATION].ports.len(), 1);
    assert_eq!(
        with_port.networks[&NATION].graph,
        state.networks[&NATION].graph
    );

    let with_depot = add_depot(&state, NATION, pos(4, 2));
    assert_eq!(with_depot, state);
}

#[test]
fn add_railroad_leaves_input_untouched() {
    let state = rail_line();
    let before = state.clone();
    let _ = add_railroad(&state, NATION, pos(5, 2));
    assert_eq!(state, before);
}

#[test]
fn depot_reachable_from_capital_is_active() {
    let state = compute_connectivity(&rail_line());
    assert!(state.networks[&NATION].depot(pos(4, 2)).unwrap().is_active);
    assert!(state.tile(pos(4, 2)).unwrap().active_depot);
}

#[test]
fn removing_a_link_deactivates_the_depot() {
    let active = compute_connectivity(&rail_line());

    let mut cut = active.clone();
    let network = cut.networks[&NATION].without_link(pos(2, 2), pos(3, 2));
    cut.networks.insert(NATION, network);
    let cut = compute_connectivity(&cut);

    assert!(!cut.networks[&NATION].depot(pos(4, 2)).unwrap().is_active);
    assert!(!cut.tile(pos(4, 2)).unwrap().active_depot);
}

#[test]
fn connectivity_ignores_stale_flags() {
    let mut state = rail_line();
    state.networks.get_mut(&NATION).unwrap().depots[0].is_active = true;
    state.map.tile_mut(pos(0, 0)).unwrap().active_port = true;

    let network = state.networks[&NATION].without_link(pos(3, 2), pos(4, 2));
    state.networks.insert(NATION, network);
    let state = compute_connectivity(&state);

    assert!(!state.networks[&NATION].depots[0].is_active);
    assert!(!state.tile(pos(0, 0)).unwrap().active_port);
}

#[test]
fn port_needs_rail_and_ocean() {
    // Coast column on the west edge; capital far to the east
    let base = WorldBuilder::new(7, 5)
        .nation(NATION, "Testland")
        .owner_everywhere(NATION)
        .terrain(pos(0, 2), TerrainType::Coast)
        .terrain(pos(0, 1), TerrainType::Coast)
        .terrain(pos(0, 3), TerrainType::Coast)
        .capital(pos(5, 2), NATION)
        .port(pos(1, 2))
        .port(pos(3, 0))
        .build();

    // Coastal but off the rail graph: inactive
    let state = compute_connectivity(&base);
    assert!(!state.networks[&NATION].port(pos(1, 2)).unwrap().is_active);

    // Inland port on a line reaching the capital: still inactive
    let inland = [pos(3, 0), pos(4, 1), pos(5, 1)]
        .into_iter()
        .fold(base.clone(), |s, node| add_railroad(&s, NATION, node));
    let inland = compute_connectivity(&inland);
    assert!(inland.networks[&NATION].graph.contains_key(&pos(3, 0)));
    assert!(!inland.networks[&NATION].port(pos(3, 0)).unwrap().is_active);

    // Coastal port on the rail graph, even one not linked to the capital
    let railed = add_railroad(&base, NATION, pos(1, 2));
    let railed = compute_connectivity(&railed);
    assert!(railed.networks[&NATION].port(pos(1, 2)).unwrap().is_active);
    assert!(railed.tile(pos(1, 2)).unwrap().active_port);
}

#[test]
fn coastal_port_serves_its_own_rail_component() {
    let state = WorldBuilder::new(7, 5)
        .nation(NATION, "Testland")
        .owner_everywhere(NATION)
        .terrain(pos(0, 2), TerrainType::Coast)
        .capital(pos(6, 4), NATION)
        .rail(pos(1, 2))
        .rail(pos(2, 2))
        .port(pos(1, 2))
        .depot(pos(2, 2))
        .build();

    let state = compute_connectivity(&state);
    assert!(state.networks[&NATION].depot(pos(2, 2)).unwrap().is_active);
}

#[test]
fn nation_without_capital_serves_nothing() {
    let state = WorldBuilder::new(4, 4)
        .nation(NATION, "Testland")
        .owner_everywhere(NATION)
        .terrain(pos(0, 1), TerrainType::Water)
        .rail(pos(1, 1))
        .depot(pos(1, 1))
        .port(pos(1, 1))
        .build();
    let state = compute_connectivity(&state);
    assert!(!state.tile(pos(1, 1)).unwrap().active_depot);
    assert!(!state.tile(pos(1, 1)).unwrap().active_port);
}

fn stocked(coal: u32, iron: u32) -> GameState {
    let mut state = rail_line();
    let nation = state.nations.get_mut(&NATION).unwrap();
    nation.warehouse = [(Good::Coal, coal), (Good::IronOre, iron)]
        .into_iter()
        .collect::<Warehouse>();
    state
}

#[test]
fn purchase_is_limited_by_scarcer_material() {
    let state = stocked(5, 3);
    let state = purchase_transport_capacity(&state, NATION, 10);
    let nation = &state.nations[&NATION];
    assert_eq!(nation.transport_capacity_pending_increase, 3);
    assert_eq!(nation.warehouse.get(Good::Coal), 2);
    assert_eq!(nation.warehouse.get(Good::IronOre), 0);
}

#[test]
fn refund_is_limited_by_pending() {
    let state = purchase_transport_capacity(&stocked(4, 4), NATION, 2);
    let state = purchase_transport_capacity(&state, NATION, -5);
    let nation = &state.nations[&NATION];
    assert_eq!(nation.transport_capacity_pending_increase, 0);
    assert_eq!(nation.warehouse.get(Good::Coal), 4);
    assert_eq!(nation.warehouse.get(Good::IronOre), 4);
}

#[test]
fn purchase_rejections_leave_state_unchanged() {
    let state = stocked(0, 4);
    assert_eq!(purchase_transport_capacity(&state, NATION, 3), state);
    assert_eq!(purchase_transport_capacity(&state, NATION, -3), state);
    assert_eq!(purchase_transport_capacity(&state, NATION, 0), state);
    assert_eq!(purchase_transport_capacity(&state, NationId(9), 3), state);
    assert_eq!(
        try_purchase_transport_capacity(&state, NATION, 3),
        Err(TransportCommandError::InsufficientMaterials)
    );
    assert_eq!(
        try_purchase_transport_capacity(&state, NationId(9), 1),
        Err(TransportCommandError::MissingNation(NationId(9)))
    );
}

#[test]
fn pending_capacity_is_applied_once() {
    let state = purchase_transport_capacity(&stocked(3, 3), NATION, 3);
    let base = state.nations[&NATION].transport_capacity;

    let applied = apply_pending_capacity(&state);
    assert_eq!(applied.nations[&NATION].transport_capacity, base + 3);
    assert_eq!(applied.nations[&NATION].transport_capacity_pending_increase, 0);

    let again = apply_pending_capacity(&applied);
    assert_eq!(again, applied);
}
