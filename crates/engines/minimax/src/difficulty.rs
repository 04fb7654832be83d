//! Difficulty levels: how deep the engine looks and how many of the best
//! root moves it is willing to pick from.

use crate::error::{EngineError, EngineResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Difficulty(u8);

impl Difficulty {
    pub const EASIEST: Difficulty = Difficulty(1);
    pub const HARDEST: Difficulty = Difficulty(4);

    pub fn new(level: u8) -> EngineResult<Self> {
        if (Self::EASIEST.0..=Self::HARDEST.0).contains(&level) {
            Ok(Difficulty(level))
        } else {
            Err(EngineError::InvalidDifficulty(level))
        }
    }

    pub fn level(self) -> u8 {
        self.0
    }

    /// Search depth in plies.
    pub fn depth(self) -> u8 {
        self.0
    }

    /// Number of top-scored root moves the engine picks from at random.
    /// The hardest level always plays its first best move.
    pub fn pool_size(self) -> usize {
        (Self::HARDEST.0 - self.0 + 1) as usize
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty(2)
    }
}
