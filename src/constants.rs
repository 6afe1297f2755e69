//! Game constants and configuration values
//!
//! Default values for the rule tables. `GameRules::default()` is built from
//! these; a rules file may override any of them.

// ============================================================================
// PROSPECTING
// ============================================================================

/// Treasury cost to send a Prospector out
pub const PROSPECTING_COST: i64 = 150;

/// Turns before a prospecting expedition reports back
pub const PROSPECTOR_DISCOVERY_DURATION_TURNS: u32 = 2;

// ============================================================================
// DEVELOPMENT
// ============================================================================

/// Development cost indexed by target level (1, 2, 3)
pub const DEVELOPMENT_COSTS: [i64; 3] = [100, 250, 500];

/// Base development duration per worker type; each level above 1 adds a turn
pub const FARMER_DEVELOPMENT_TURNS: u32 = 2;
pub const RANCHER_DEVELOPMENT_TURNS: u32 = 2;
pub const FORESTER_DEVELOPMENT_TURNS: u32 = 1;
pub const MINER_DEVELOPMENT_TURNS: u32 = 3;
pub const DRILLER_DEVELOPMENT_TURNS: u32 = 3;

// ============================================================================
// CONSTRUCTION
// ============================================================================

pub const DEPOT_COST: i64 = 300;
pub const DEPOT_BUILD_TURNS: u32 = 2;

pub const PORT_COST: i64 = 400;
pub const PORT_BUILD_TURNS: u32 = 3;

pub const FORT_COST: i64 = 500;
pub const FORT_BUILD_TURNS: u32 = 3;

pub const RAIL_COST: i64 = 200;
pub const RAIL_BUILD_TURNS: u32 = 2;

// ============================================================================
// LOGISTICS
// ============================================================================

/// Treasury value of one unit of gold delivered to a hub
pub const GOLD_UNIT_PRICE: i64 = 100;

/// Treasury value of one unit of gems delivered to a hub
pub const GEM_UNIT_PRICE: i64 = 150;

/// Transport capacity every nation starts with
pub const BASE_TRANSPORT_CAPACITY: u32 = 5;

/// Treasury every generated nation starts with
pub const STARTING_TREASURY: i64 = 5_000;

// ============================================================================
// TURN RNG
// ============================================================================

/// Base seed used when none is supplied
pub const RNG_BASE_SEED: u64 = 0x1815_0001_D15C_0BE5;

/// Mixed into the base seed per turn so each turn draws a fresh stream
pub const TURN_SEED_MULTIPLIER: u64 = 0x9E37_79B9_7F4A_7C15;
