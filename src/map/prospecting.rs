use rand::Rng;
use rand::rngs::StdRng;

use crate::map::tiles::TerrainType;
use crate::resources::ResourceType;

/// Deposits a survey of barren hills or mountains can turn up.
pub const MOUNTAIN_DEPOSITS: [ResourceType; 4] = [
    ResourceType::Coal,
    ResourceType::IronOre,
    ResourceType::Gold,
    ResourceType::Gems,
];

/// Resource a finished survey reveals on `terrain`.
///
/// Barren hills and mountains draw one deposit uniformly from the turn RNG;
/// swamp, desert and tundra always yield oil. Anywhere else the survey
/// confirms whatever deposit the tile already hides. Only the mountain
/// branch consumes randomness.
pub fn discover_resource(
    terrain: TerrainType,
    hidden: Option<ResourceType>,
    rng: &mut StdRng,
) -> Option<ResourceType> {
    match terrain {
        TerrainType::BarrenHills | TerrainType::Mountains => {
            Some(MOUNTAIN_DEPOSITS[rng.random_range(0..MOUNTAIN_DEPOSITS.len())])
        }
        TerrainType::Swamp | TerrainType::Desert | TerrainType::Tundra => Some(ResourceType::Oil),
        _ => hidden,
    }
}
