use serde::{Deserialize, Serialize};

use crate::economy::goods::Good;

/// Highest development level a tile resource can reach.
pub const MAX_RESOURCE_LEVEL: u8 = 3;

/// Types of resources that can be found/developed on tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ResourceType {
    // Agriculture
    Grain,
    Fruit,
    Cotton,
    // Livestock
    Wool,
    Livestock,
    Horses,
    Fish,
    // Forestry
    Timber,
    Hardwood,
    // Minerals (must be discovered by Prospector)
    Coal,
    IronOre,
    Gold,
    Gems,
    Oil,
}

impl ResourceType {
    /// Convert a ResourceType to its corresponding Good for warehouse storage
    pub fn to_good(self) -> Good {
        match self {
            ResourceType::Grain => Good::Grain,
            ResourceType::Fruit => Good::Fruit,
            ResourceType::Cotton => Good::Cotton,
            ResourceType::Wool => Good::Wool,
            ResourceType::Livestock => Good::Livestock,
            ResourceType::Horses => Good::Horses,
            ResourceType::Fish => Good::Fish,
            ResourceType::Timber => Good::Timber,
            ResourceType::Hardwood => Good::Hardwood,
            ResourceType::Coal => Good::Coal,
            ResourceType::IronOre => Good::IronOre,
            ResourceType::Gold => Good::Gold,
            ResourceType::Gems => Good::Gems,
            ResourceType::Oil => Good::Oil,
        }
    }

    /// Minerals and oil stay hidden until a Prospector finds them.
    pub fn requires_prospecting(self) -> bool {
        matches!(
            self,
            ResourceType::Coal
                | ResourceType::IronOre
                | ResourceType::Gold
                | ResourceType::Gems
                | ResourceType::Oil
        )
    }

    /// Returns true when the resource provides a baseline yield without improvements.
    pub fn is_baseline_yield_eligible(self) -> bool {
        !self.requires_prospecting()
    }
}

/// Resource deposit on a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileResource {
    pub resource_type: ResourceType,
    /// Development level, 0 (undeveloped) to 3
    pub level: u8,
    /// Minerals start hidden and must be discovered by a Prospector
    pub discovered: bool,
}

impl TileResource {
    /// Create a new agricultural/natural resource (visible by default)
    pub fn visible(resource_type: ResourceType) -> Self {
        Self {
            resource_type,
            level: 0,
            discovered: true,
        }
    }

    /// Create a new mineral resource (hidden until discovered)
    pub fn hidden_mineral(resource_type: ResourceType) -> Self {
        Self {
            resource_type,
            level: 0,
            discovered: false,
        }
    }

    pub fn with_level(mut self, level: u8) -> Self {
        self.level = level.min(MAX_RESOURCE_LEVEL);
        self
    }

    /// Per-turn output of this deposit; undiscovered deposits yield nothing.
    pub fn output(&self) -> u32 {
        if !self.discovered {
            return 0;
        }
        production_output(self.resource_type, self.level)
    }
}

/// Units produced per turn by a resource at the given development level.
pub fn production_output(resource: ResourceType, level: u8) -> u32 {
    let level = u32::from(level.min(MAX_RESOURCE_LEVEL));
    match resource {
        // Food/fiber/timber: 1/2/3/4
        r if r.is_baseline_yield_eligible() => level + 1,
        // Coal/iron/oil: 0/2/4/6
        ResourceType::Coal | ResourceType::IronOre | ResourceType::Oil => level * 2,
        // Gold/gems: 0/1/2/3
        ResourceType::Gold | ResourceType::Gems => level,
        _ => 0,
    }
}
