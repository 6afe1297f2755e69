//! Rule tables consumed by the engine.
//!
//! Costs and durations are plain data looked up by job kind, level and
//! worker type. They can be swapped by loading a JSON rules file without
//! touching the engine.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::*;
use crate::workers::types::{ConstructionKind, WorkerKind};

#[derive(Debug, Error)]
pub enum RulesError {
    #[error("failed to read rules file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse rules: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Treasury cost and turn count of a job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobCost {
    pub cost: i64,
    pub duration_turns: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DevelopmentTurns {
    pub farmer: u32,
    pub rancher: u32,
    pub forester: u32,
    pub miner: u32,
    pub driller: u32,
}

impl Default for DevelopmentTurns {
    fn default() -> Self {
        Self {
            farmer: FARMER_DEVELOPMENT_TURNS,
            rancher: RANCHER_DEVELOPMENT_TURNS,
            forester: FORESTER_DEVELOPMENT_TURNS,
            miner: MINER_DEVELOPMENT_TURNS,
            driller: DRILLER_DEVELOPMENT_TURNS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstructionCosts {
    pub depot: JobCost,
    pub port: JobCost,
    pub fort: JobCost,
    pub rail: JobCost,
}

impl Default for ConstructionCosts {
    fn default() -> Self {
        Self {
            depot: JobCost {
                cost: DEPOT_COST,
                duration_turns: DEPOT_BUILD_TURNS,
            },
            port: JobCost {
                cost: PORT_COST,
                duration_turns: PORT_BUILD_TURNS,
            },
            fort: JobCost {
                cost: FORT_COST,
                duration_turns: FORT_BUILD_TURNS,
            },
            rail: JobCost {
                cost: RAIL_COST,
                duration_turns: RAIL_BUILD_TURNS,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameRules {
    pub prospecting: JobCost,
    /// Cost of reaching level 1, 2 and 3
    pub development_costs: [i64; 3],
    pub development_turns: DevelopmentTurns,
    pub construction: ConstructionCosts,
    pub gold_unit_price: i64,
    pub gem_unit_price: i64,
    pub starting_transport_capacity: u32,
    pub starting_treasury: i64,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            prospecting: JobCost {
                cost: PROSPECTING_COST,
                duration_turns: PROSPECTOR_DISCOVERY_DURATION_TURNS,
            },
            development_costs: DEVELOPMENT_COSTS,
            development_turns: DevelopmentTurns::default(),
            construction: ConstructionCosts::default(),
            gold_unit_price: GOLD_UNIT_PRICE,
            gem_unit_price: GEM_UNIT_PRICE,
            starting_transport_capacity: BASE_TRANSPORT_CAPACITY,
            starting_treasury: STARTING_TREASURY,
        }
    }
}

impl GameRules {
    pub fn from_json_str(json: &str) -> Result<Self, RulesError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &std::path::Path) -> Result<Self, RulesError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn prospecting_cost(&self) -> i64 {
        self.prospecting.cost
    }

    pub fn prospecting_duration(&self) -> u32 {
        self.prospecting.duration_turns
    }

    /// Cost of raising a resource to `target_level`; `None` outside 1..=3.
    pub fn development_cost(&self, target_level: u8) -> Option<i64> {
        let index = usize::from(target_level).checked_sub(1)?;
        self.development_costs.get(index).copied()
    }

    /// Turns for `kind` to raise a resource to `target_level`.
    /// `None` for worker types that do not develop land.
    pub fn development_duration(&self, kind: WorkerKind, target_level: u8) -> Option<u32> {
        let turns = &self.development_turns;
        let base = match kind {
            WorkerKind::Farmer => turns.farmer,
            WorkerKind::Rancher => turns.rancher,
            WorkerKind::Forester => turns.forester,
            WorkerKind::Miner => turns.miner,
            WorkerKind::Driller => turns.driller,
            WorkerKind::Prospector | WorkerKind::Engineer | WorkerKind::Developer => return None,
        };
        Some(base + u32::from(target_level.saturating_sub(1)))
    }

    pub fn construction(&self, kind: ConstructionKind) -> JobCost {
        match kind {
            ConstructionKind::Depot => self.construction.depot,
            ConstructionKind::Port => self.construction.port,
            ConstructionKind::Fort => self.construction.fort,
            ConstructionKind::Rail => self.construction.rail,
        }
    }

    pub fn construction_cost(&self, kind: ConstructionKind) -> i64 {
        self.construction(kind).cost
    }

    pub fn construction_duration(&self, kind: ConstructionKind) -> u32 {
        self.construction(kind).duration_turns
    }

    /// Treasury value of one unit of a precious good, `None` for stored goods.
    pub fn unit_price(&self, good: crate::economy::goods::Good) -> Option<i64> {
        use crate::economy::goods::Good;
        match good {
            Good::Gold => Some(self.gold_unit_price),
            Good::Gems => Some(self.gem_unit_price),
            _ => None,
        }
    }
}
