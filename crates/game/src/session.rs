//! A game between a human and the minimax engine.

use std::collections::BTreeSet;

use chess_core::{
    game_status, legal_destinations, Board, ChessError, Color, Coordinate, GameStatus, Move,
    MoveOutcome, PieceKind,
};
use minimax_engine::MinimaxEngine;
use tracing::info;

use crate::config::GameConfig;
use crate::error::{GameError, GameResult};

/// Owns the authoritative board, the move history and the CPU opponent.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    history: Vec<Move>,
    /// Human pawn move waiting for its promotion choice
    pending: Option<Move>,
    human: Color,
    engine: MinimaxEngine,
}

impl Game {
    pub fn new(board: Board, human: Color, engine: MinimaxEngine) -> GameResult<Self> {
        if human.is_empty() {
            return Err(GameError::Parse("the human must play White or Black".into()));
        }
        info!(?human, difficulty = engine.difficulty().level(), "game started");
        Ok(Self {
            board,
            history: Vec::new(),
            pending: None,
            human,
            engine,
        })
    }

    /// Builds the session described by `config` around `board`.
    pub fn from_config(config: &GameConfig, board: Board) -> GameResult<Self> {
        let engine = match config.seed {
            Some(seed) => MinimaxEngine::with_seed(config.difficulty, seed)?,
            None => MinimaxEngine::new(config.difficulty)?,
        };
        Self::new(board, config.human_color, engine)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Moves applied in this session, oldest first. A pawn move waiting for
    /// its promotion choice is recorded once the choice is made.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn human_color(&self) -> Color {
        self.human
    }

    pub fn cpu_color(&self) -> Color {
        self.human.other()
    }

    pub fn is_human_turn(&self) -> bool {
        self.board.side_to_move() == self.human
    }

    pub fn status(&self) -> GameResult<GameStatus> {
        Ok(game_status(&self.board)?)
    }

    /// Squares the piece on `at` may move to.
    pub fn destinations(&self, at: Coordinate) -> GameResult<BTreeSet<Coordinate>> {
        Ok(legal_destinations(&self.board, at)?)
    }

    /// Plays the human's move. Without a promotion choice a promoting pawn
    /// stays pending until [`Game::promote`].
    pub fn play_human(
        &mut self,
        from: Coordinate,
        to: Coordinate,
        promotion: Option<PieceKind>,
    ) -> GameResult<MoveOutcome> {
        self.expect_turn(self.human)?;
        let mv = self.board.propose_move(from, to, promotion)?;
        self.apply(&mv)
    }

    /// Completes the pending promotion on `at` and returns the resulting status.
    pub fn promote(&mut self, at: Coordinate, kind: PieceKind) -> GameResult<GameStatus> {
        self.board.promote(at, kind)?;
        let status = self.status()?;
        if let Some(mut mv) = self.pending.take() {
            mv.promotion_choice = Some(kind);
            self.record(mv, status);
        }
        Ok(status)
    }

    /// Lets the engine move. Returns `None` when it has no legal move.
    pub fn play_cpu(&mut self) -> GameResult<Option<MoveOutcome>> {
        self.expect_turn(self.cpu_color())?;
        let Some(mv) = self.engine.choose_move(&self.board)? else {
            return Ok(None);
        };
        self.apply(&mv).map(Some)
    }

    fn apply(&mut self, mv: &Move) -> GameResult<MoveOutcome> {
        let outcome = self.board.apply_move(mv)?;
        if outcome.promotion_pending {
            self.pending = Some(outcome.mv);
        } else {
            self.record(outcome.mv, outcome.status);
        }
        Ok(outcome)
    }

    fn record(&mut self, mv: Move, status: GameStatus) {
        self.history.push(mv);
        if let Some(winner) = status.winner() {
            info!(?winner, moves = self.history.len(), "checkmate");
        } else if status == GameStatus::Stalemate {
            info!(moves = self.history.len(), "stalemate");
        }
    }

    fn expect_turn(&self, color: Color) -> GameResult<()> {
        let expected = self.board.side_to_move();
        if expected != color {
            return Err(ChessError::WrongTurn {
                expected,
                got: color,
            }
            .into());
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
