use serde::{Deserialize, Serialize};

/// Commodities a nation can hold in its warehouse or ship over the network.
///
/// Declaration order is the stable iteration order used by the logistics
/// allocator when it fills spare capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Good {
    Grain,
    Fruit,
    Cotton,
    Wool,
    Livestock,
    Horses,
    Fish,
    Timber,
    Hardwood,
    Coal,
    IronOre,
    Gold,
    Gems,
    Oil,
}

impl Good {
    /// Precious goods are sold to the treasury on arrival instead of stored.
    pub fn is_precious(self) -> bool {
        matches!(self, Good::Gold | Good::Gems)
    }
}

impl core::fmt::Display for Good {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            Good::Grain => "Grain",
            Good::Fruit => "Fruit",
            Good::Cotton => "Cotton",
            Good::Wool => "Wool",
            Good::Livestock => "Livestock",
            Good::Horses => "Horses",
            Good::Fish => "Fish",
            Good::Timber => "Timber",
            Good::Hardwood => "Hardwood",
            Good::Coal => "Coal",
            Good::IronOre => "Iron Ore",
            Good::Gold => "Gold",
            Good::Gems => "Gems",
            Good::Oil => "Oil",
        };
        f.write_str(name)
    }
}
