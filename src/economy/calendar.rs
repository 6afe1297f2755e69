use serde::{Deserialize, Serialize};

/// Turns per in-game year; one turn per season.
pub const TURNS_PER_YEAR: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    pub fn next(self) -> Season {
        match self {
            Season::Spring => Season::Summer,
            Season::Summer => Season::Autumn,
            Season::Autumn => Season::Winter,
            Season::Winter => Season::Spring,
        }
    }
}

impl core::fmt::Display for Season {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Season::Spring => write!(f, "Spring"),
            Season::Summer => write!(f, "Summer"),
            Season::Autumn => write!(f, "Autumn"),
            Season::Winter => write!(f, "Winter"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calendar {
    pub season: Season,
    pub year: u16,
}

impl Default for Calendar {
    fn default() -> Self {
        Calendar {
            season: Season::Spring,
            year: 1815,
        }
    }
}

impl Calendar {
    /// Calendar after one more turn; the year rolls over after Winter.
    pub fn advanced(self) -> Calendar {
        let season = self.season.next();
        let year = if season == Season::Spring {
            self.year.saturating_add(1)
        } else {
            self.year
        };
        Calendar { season, year }
    }

    pub fn display(&self) -> String {
        format!("{}, {}", self.season, self.year)
    }
}
