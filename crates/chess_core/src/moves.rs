//! Value records describing moves and their results.

use serde::{Deserialize, Serialize};

use crate::board::CastlingRights;
use crate::coord::Coordinate;
use crate::types::{Color, Piece, PieceKind};

/// A fully described move. Built by the legality filter, never edited after.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub from: Coordinate,
    pub to: Coordinate,
    /// The mover as it stood before the move
    pub moving_piece: Piece,
    /// The piece removed by this move (the passed pawn for en passant)
    pub captured_piece: Option<Piece>,
    pub is_castle: bool,
    pub is_en_passant: bool,
    pub promotion_choice: Option<PieceKind>,
}

impl Move {
    pub(crate) fn quiet(piece: Piece, to: Coordinate) -> Self {
        Self {
            from: piece.position,
            to,
            moving_piece: piece,
            captured_piece: None,
            is_castle: false,
            is_en_passant: false,
            promotion_choice: None,
        }
    }

    pub fn is_capture(&self) -> bool {
        self.captured_piece.is_some()
    }

    /// True if a pawn lands on its far rank with this move.
    pub fn is_promotion(&self) -> bool {
        self.moving_piece.kind == PieceKind::Pawn
            && self.to.rank() == self.moving_piece.color.promotion_rank()
    }

    pub fn with_promotion(mut self, kind: PieceKind) -> Self {
        self.promotion_choice = Some(kind);
        self
    }
}

/// Everything `unmake_move` needs to restore the board exactly.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Undo {
    pub moved: Piece,
    pub captured: Option<Piece>,
    /// Rook as it stood before castling
    pub rook: Option<(Piece, Coordinate)>,
    pub castling: CastlingRights,
    pub en_passant: Option<Coordinate>,
    pub pending_promotion: Option<Coordinate>,
    pub side_to_move: Color,
}

/// State of the game for the side to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Checkmate { winner: Color },
    Stalemate,
}

impl GameStatus {
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }

    /// Winning side, `None` while in progress or after stalemate.
    pub fn winner(self) -> Option<Color> {
        match self {
            GameStatus::Checkmate { winner } => Some(winner),
            _ => None,
        }
    }
}

/// Result of applying a move to the authoritative board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub mv: Move,
    /// The side now to move is in check
    pub gives_check: bool,
    /// The moved pawn waits for `Board::promote`
    pub promotion_pending: bool,
    pub status: GameStatus,
}
