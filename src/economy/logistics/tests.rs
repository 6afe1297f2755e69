use std::collections::BTreeMap;

use crate::constants::{GEM_UNIT_PRICE, GOLD_UNIT_PRICE};
use crate::economy::goods::Good;
use crate::economy::nation::NationId;
use crate::economy::transport::compute_connectivity;
use crate::map::tile_pos::TilePos;
use crate::resources::{ResourceType, TileResource};
use crate::state::GameState;
use crate::world::WorldBuilder;

use super::*;

const NATION: NationId = NationId(1);

fn pos(x: u32, y: u32) -> TilePos {
    TilePos::new(x, y)
}

fn goods(pairs: &[(Good, u32)]) -> BTreeMap<Good, u32> {
    pairs.iter().copied().collect()
}

/// Capital at (1,1) with a rail spur east to a depot at (4,1).
fn hub_world() -> GameState {
    let state = WorldBuilder::new(7, 4)
        .nation(NATION, "Testland")
        .owner_everywhere(NATION)
        .capital(pos(1, 1), NATION)
        .rail(pos(2, 1))
        .rail(pos(3, 1))
        .rail(pos(4, 1))
        .depot(pos(4, 1))
        .build();
    compute_connectivity(&state)
}

#[test]
fn capital_and_neighbours_are_collected() {
    let state = hub_world();
    let mut map = state.map.clone();
    map.tile_mut(pos(0, 1)).unwrap().resource = Some(TileResource::visible(ResourceType::Grain));
    map.tile_mut(pos(1, 1)).unwrap().resource =
        Some(TileResource::visible(ResourceType::Wool).with_level(2));
    // Two steps away from every hub
    map.tile_mut(pos(6, 3)).unwrap().resource = Some(TileResource::visible(ResourceType::Fruit));

    let collected = compute_logistics_transport(&map, NATION);
    assert_eq!(collected, goods(&[(Good::Grain, 1), (Good::Wool, 3)]));
}

#[test]
fn inactive_depot_collects_nothing() {
    let mut state = hub_world();
    state
        .map
        .tile_mut(pos(5, 1))
        .unwrap()
        .resource = Some(TileResource::visible(ResourceType::Timber));
    assert_eq!(
        compute_logistics_transport(&state.map, NATION),
        goods(&[(Good::Timber, 1)])
    );

    state.map.tile_mut(pos(4, 1)).unwrap().active_depot = false;
    assert!(compute_logistics_transport(&state.map, NATION).is_empty());
}

#[test]
fn hidden_foreign_and_idle_deposits_are_skipped() {
    let mut state = hub_world();
    state.map.tile_mut(pos(0, 1)).unwrap().resource =
        Some(TileResource::hidden_mineral(ResourceType::Coal).with_level(2));
    state.map.tile_mut(pos(2, 1)).unwrap().resource = Some(TileResource {
        discovered: true,
        ..TileResource::hidden_mineral(ResourceType::IronOre)
    });
    let foreign = state.map.tile_mut(pos(1, 0)).unwrap();
    foreign.owner = Some(NationId(2));
    foreign.resource = Some(TileResource::visible(ResourceType::Grain));

    assert!(compute_logistics_transport(&state.map, NATION).is_empty());
}

#[test]
fn greedy_fill_follows_good_order() {
    let collected = goods(&[(Good::Coal, 5), (Good::Grain, 5)]);
    let chosen = choose_allocation(&collected, 7, None);
    assert_eq!(chosen, goods(&[(Good::Grain, 5), (Good::Coal, 2)]));
}

#[test]
fn plan_entries_take_priority_then_top_up() {
    let collected = goods(&[(Good::Grain, 5), (Good::Coal, 5), (Good::Oil, 2)]);
    let plan = AllocationPlan::new().with(Good::Oil, 2).with(Good::Coal, 3);

    let chosen = choose_allocation(&collected, 7, Some(&plan));
    assert_eq!(
        chosen,
        goods(&[(Good::Oil, 2), (Good::Coal, 3), (Good::Grain, 2)])
    );
}

#[test]
fn plan_requests_beyond_supply_are_bounded() {
    let collected = goods(&[(Good::Timber, 1)]);
    let plan = AllocationPlan::new().with(Good::Timber, 9).with(Good::Gold, 4);
    let chosen = choose_allocation(&collected, 10, Some(&plan));
    assert_eq!(chosen, goods(&[(Good::Timber, 1)]));
}

#[test]
fn zero_capacity_ships_nothing() {
    let collected = goods(&[(Good::Grain, 5)]);
    assert!(choose_allocation(&collected, 0, None).is_empty());
}

#[test]
fn clamp_trims_latest_entries_first() {
    let plan = AllocationPlan::new()
        .with(Good::Coal, 5)
        .with(Good::Grain, 4)
        .with(Good::Oil, 1);
    let collected = goods(&[(Good::Coal, 3), (Good::Grain, 10), (Good::Oil, 1)]);

    let clamped = clamp_plan(&plan, &collected, 5);
    let entries: Vec<_> = clamped.iter().collect();
    assert_eq!(
        entries,
        vec![(Good::Coal, 3), (Good::Grain, 2), (Good::Oil, 0)]
    );
    assert_eq!(clamp_plan(&clamped, &collected, 5), clamped);
}

#[test]
fn set_allocations_stores_clamped_plan() {
    let mut state = hub_world();
    state.map.tile_mut(pos(0, 1)).unwrap().resource = Some(TileResource::visible(ResourceType::Grain));

    let plan = AllocationPlan::new().with(Good::Grain, 4).with(Good::Coal, 2);
    let state = set_transport_allocations(&state, NATION, plan);

    let stored: Vec<_> = state.allocations.get(NATION).unwrap().iter().collect();
    assert_eq!(stored, vec![(Good::Grain, 1), (Good::Coal, 0)]);

    let unknown = set_transport_allocations(&state, NationId(7), AllocationPlan::new());
    assert_eq!(unknown, state);
}

#[test]
fn precious_goods_are_sold_to_treasury() {
    let mut state = hub_world();
    state.map.tile_mut(pos(0, 1)).unwrap().resource = Some(TileResource {
        discovered: true,
        ..TileResource::hidden_mineral(ResourceType::Gold).with_level(2)
    });
    state.map.tile_mut(pos(2, 1)).unwrap().resource = Some(TileResource {
        discovered: true,
        ..TileResource::hidden_mineral(ResourceType::Gems).with_level(1)
    });
    state.map.tile_mut(pos(1, 2)).unwrap().resource =
        Some(TileResource::visible(ResourceType::Cotton));
    let treasury = state.nations[&NATION].treasury;

    let next = logistics_system(&state);
    let nation = &next.nations[&NATION];
    let revenue = 2 * GOLD_UNIT_PRICE + GEM_UNIT_PRICE;

    assert_eq!(nation.treasury, treasury + revenue);
    assert_eq!(nation.warehouse.get(Good::Gold), 0);
    assert_eq!(nation.warehouse.get(Good::Gems), 0);
    assert_eq!(nation.warehouse.get(Good::Cotton), 1);

    let report = &next.logistics[&NATION];
    assert_eq!(report.revenue, revenue);
    assert_eq!(report.shipped(), 4);
}

#[test]
fn logistics_respects_capacity_and_reclamps_stored_plan() {
    let mut state = hub_world();
    for x in [0, 2] {
        state.map.tile_mut(pos(x, 1)).unwrap().resource =
            Some(TileResource::visible(ResourceType::Grain).with_level(3));
    }
    state.nations.get_mut(&NATION).unwrap().transport_capacity = 3;
    state
        .allocations
        .set(NATION, AllocationPlan::new().with(Good::Grain, 6));

    let next = logistics_system(&state);
    assert_eq!(next.nations[&NATION].warehouse.get(Good::Grain), 3);
    assert_eq!(next.allocations.get(NATION).unwrap().get(Good::Grain), Some(3));
    assert_eq!(next.logistics[&NATION].collected, goods(&[(Good::Grain, 8)]));
}
