use std::fmt;

use crate::errors::ChessError;

/// Named strength levels. Each level searches as many plies as its number.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Difficulty {
    Beginner = 1,
    Novice = 2,
    #[default]
    Intermediate = 3,
    Advanced = 4,
    Expert = 5,
}

impl Difficulty {
    pub const ALL: [Difficulty; 5] = [
        Difficulty::Beginner,
        Difficulty::Novice,
        Difficulty::Intermediate,
        Difficulty::Advanced,
        Difficulty::Expert,
    ];

    #[inline]
    pub const fn search_depth(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Difficulty {
    type Error = ChessError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        Difficulty::ALL
            .into_iter()
            .find(|difficulty| difficulty.search_depth() == level)
            .ok_or(ChessError::InvalidDifficulty(level))
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Novice => "novice",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
            Difficulty::Expert => "expert",
        };
        f.write_str(name)
    }
}
