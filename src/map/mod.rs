pub mod prospecting;
pub mod terrain_gen;
pub mod tile_pos;
pub mod tiles;

pub use tile_pos::{TileIdError, TilePos};
pub use tiles::{GameMap, TerrainType, Tile, are_tiles_adjacent, is_adjacent_to_ocean};
