use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Column/row position of a tile on the brick-offset map.
///
/// The textual form `"x-y"` is the tile id used by commands and by the
/// serialized state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TilePos {
    pub x: u32,
    pub y: u32,
}

impl TilePos {
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Candidate neighbour coordinates before clipping to map bounds.
    ///
    /// Odd rows are shifted half a tile to the right, so their diagonal
    /// neighbours sit at `x` and `x + 1`; even rows use `x - 1` and `x`.
    pub fn neighbor_candidates(self) -> [(i64, i64); 6] {
        let x = i64::from(self.x);
        let y = i64::from(self.y);
        let (left, right) = if self.y % 2 == 1 { (x, x + 1) } else { (x - 1, x) };
        [
            (x - 1, y),
            (x + 1, y),
            (left, y - 1),
            (right, y - 1),
            (left, y + 1),
            (right, y + 1),
        ]
    }
}

impl fmt::Display for TilePos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.x, self.y)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TileIdError {
    #[error("tile id `{0}` is not of the form x-y")]
    Malformed(String),
    #[error("tile id `{0}` has a non-numeric coordinate")]
    NotANumber(String),
}

impl FromStr for TilePos {
    type Err = TileIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (x, y) = s
            .split_once('-')
            .ok_or_else(|| TileIdError::Malformed(s.to_string()))?;
        let x = x
            .trim()
            .parse()
            .map_err(|_| TileIdError::NotANumber(s.to_string()))?;
        let y = y
            .trim()
            .parse()
            .map_err(|_| TileIdError::NotANumber(s.to_string()))?;
        Ok(TilePos { x, y })
    }
}

impl Serialize for TilePos {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TilePos {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
