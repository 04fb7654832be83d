pub mod board;
pub mod coord;
pub mod error;
pub mod fen;
pub mod layout;
pub mod movegen;
pub mod moves;
pub mod perft;
pub mod rules;
pub mod snapshot;
pub mod special;
pub mod types;

// Re-export core game logic
pub use board::*;
pub use coord::*;
pub use error::*;
pub use fen::STARTING_FEN;
pub use layout::{Grid, STANDARD_LAYOUT, StartingLayout};
pub use movegen::{attacks, candidate_directions, is_square_attacked, pseudo_legal_destinations};
pub use moves::*;
pub use perft::perft;
pub use rules::*;
pub use snapshot::BoardSnapshot;
pub use special::CastleSide;
pub use types::*;

// =============================================================================
// Engine trait: implemented by computer opponents
// =============================================================================

/// Result of a search operation
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The best move found (None if no legal moves)
    pub best_move: Option<Move>,
    /// Evaluation score in centipawns from the mover's perspective
    pub score: i32,
    /// Search depth in plies
    pub depth: u8,
    /// Number of nodes searched (optional, for stats)
    pub nodes: u64,
}

/// Trait that all computer opponents implement.
///
/// The board passed in is never mutated; engines search on their own copy.
pub trait Engine {
    /// Search `board` for `color`'s best move, `depth` plies deep.
    ///
    /// # Returns
    /// SearchResult containing best move, score, and statistics, or an error
    /// when `color` is not on move or the board is corrupt.
    fn best_move(&mut self, board: &Board, color: Color, depth: u8) -> ChessResult<SearchResult>;

    /// Returns the engine's name
    fn name(&self) -> &str;

    /// Reset internal state for a new game
    fn new_game(&mut self) {}
}
