use bevy::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::report::TurnReport;
use crate::constants::TURN_SEED_MULTIPLIER;
use crate::economy::logistics::logistics_system;
use crate::economy::transport::{apply_pending_capacity, compute_connectivity};
use crate::state::GameState;
use crate::workers::jobs::{reconcile_workers, resolve_jobs};

/// Signature shared by every turn stage.
pub type PhaseFn = fn(&GameState, &mut StdRng) -> GameState;

/// RNG for resolving `turn`. The same seed and turn always give the same
/// stream.
pub fn turn_rng(seed: u64, turn: u32) -> StdRng {
    StdRng::seed_from_u64(seed ^ u64::from(turn).wrapping_mul(TURN_SEED_MULTIPLIER))
}

pub fn diplomacy_phase(state: &GameState, _rng: &mut StdRng) -> GameState {
    state.clone()
}

pub fn trade_phase(state: &GameState, _rng: &mut StdRng) -> GameState {
    state.clone()
}

pub fn production_phase(state: &GameState, _rng: &mut StdRng) -> GameState {
    state.clone()
}

pub fn combat_phase(state: &GameState, _rng: &mut StdRng) -> GameState {
    state.clone()
}

pub fn interception_phase(state: &GameState, _rng: &mut StdRng) -> GameState {
    state.clone()
}

/// Stages between job resolution and connectivity, in run order. They do
/// not change the state yet.
pub const WORLD_PHASES: [(&str, PhaseFn); 5] = [
    ("diplomacy", diplomacy_phase),
    ("trade", trade_phase),
    ("production", production_phase),
    ("combat", combat_phase),
    ("interception", interception_phase),
];

/// Resolve one turn and describe what happened.
///
/// Order: pending capacity, jobs (with network registration), world
/// phases, connectivity, logistics, worker reconciliation, then the turn
/// counter and calendar advance.
pub fn advance_turn_with_report(state: &GameState) -> (GameState, TurnReport) {
    let resolving = state.turn;
    info!("Resolving turn {} ({})", resolving, state.calendar.display());
    let mut rng = turn_rng(state.seed, resolving);

    let next = apply_pending_capacity(state);
    let (mut next, events) = resolve_jobs(&next, &mut rng);
    for (name, phase) in WORLD_PHASES {
        debug!("Running {} phase", name);
        next = phase(&next, &mut rng);
    }
    let next = compute_connectivity(&next);
    let next = logistics_system(&next);
    let mut next = reconcile_workers(&next);

    next.turn = state.next_turn();
    next.calendar = state.calendar.advanced();

    let report = TurnReport {
        turn: resolving,
        calendar: next.calendar,
        events,
        logistics: next.logistics.clone(),
    };
    (next, report)
}

pub fn advance_turn(state: &GameState) -> GameState {
    advance_turn_with_report(state).0
}
