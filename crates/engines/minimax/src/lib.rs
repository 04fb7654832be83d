//! Minimax Chess Engine
//!
//! Depth-limited negamax with alpha-beta pruning over a material and
//! piece-placement evaluation. The difficulty level sets the search depth
//! and how many of the best root moves the engine is willing to pick from,
//! so the easier levels play plausible but imperfect chess.

mod difficulty;
mod error;
mod eval;
mod search;

use chess_core::{Board, ChessResult, Color, Engine, Move, SearchResult};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

pub use difficulty::Difficulty;
pub use error::{EngineError, EngineResult};
pub use eval::{evaluate, MATE_SCORE};
pub use search::{pick_best_move, SearchOutcome};

/// Computer opponent searching a fixed depth per difficulty level.
#[derive(Debug, Clone)]
pub struct MinimaxEngine {
    difficulty: Difficulty,
    rng: StdRng,
    /// Node counter for statistics
    nodes: u64,
}

impl MinimaxEngine {
    /// Engine at `level` (1-4) with an entropy-seeded tie-breaker.
    pub fn new(level: u8) -> EngineResult<Self> {
        Ok(Self {
            difficulty: Difficulty::new(level)?,
            rng: StdRng::from_entropy(),
            nodes: 0,
        })
    }

    /// Engine at `level` whose random choices repeat for the same `seed`.
    pub fn with_seed(level: u8, seed: u64) -> EngineResult<Self> {
        Ok(Self {
            difficulty: Difficulty::new(level)?,
            rng: StdRng::seed_from_u64(seed),
            nodes: 0,
        })
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Nodes visited by the last search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Picks a move for the side to move at the difficulty's own depth.
    /// Returns `None` when that side has no legal move.
    pub fn choose_move(&mut self, board: &Board) -> EngineResult<Option<Move>> {
        let depth = self.difficulty.depth();
        let result = self.best_move(board, board.side_to_move(), depth)?;
        Ok(result.best_move)
    }
}

impl Engine for MinimaxEngine {
    fn best_move(&mut self, board: &Board, color: Color, depth: u8) -> ChessResult<SearchResult> {
        self.nodes = 0;
        let outcome = pick_best_move(
            board,
            color,
            depth,
            self.difficulty.pool_size(),
            &mut self.rng,
            &mut self.nodes,
        )?;

        if let Some((mv, score)) = outcome.best_move {
            debug!(
                from = %mv.from,
                to = %mv.to,
                score,
                depth,
                nodes = self.nodes,
                pool = outcome.pool,
                "engine move chosen"
            );
        }

        Ok(SearchResult {
            best_move: outcome.best_move.map(|(mv, _)| mv),
            score: outcome.best_move.map(|(_, s)| s).unwrap_or(0),
            depth,
            nodes: self.nodes,
        })
    }

    fn name(&self) -> &str {
        "Minimax v1.0"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}
