//! Error types surfaced by the chess core.

use thiserror::Error;

use crate::coord::Coordinate;
use crate::types::{Color, PieceKind};

/// Why a proposed move was refused.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMoveReason {
    #[error("there is no piece on the starting square")]
    EmptySquare,
    #[error("the piece does not belong to the side to move")]
    NotYourPiece,
    #[error("the piece cannot reach that square")]
    Unreachable,
    #[error("the move would leave the king in check")]
    LeavesKingInCheck,
}

/// Errors that can occur while building or playing on a board.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// Coordinate or offset outside the 8x8 board
    #[error("coordinate (file {file}, rank {rank}) is outside the board")]
    OutOfBounds { file: i8, rank: i8 },

    /// Rule violation; the board is left untouched
    #[error("illegal move {from}-{to}: {reason}")]
    IllegalMove {
        from: Coordinate,
        to: Coordinate,
        reason: IllegalMoveReason,
    },

    /// Promotion target outside {Queen, Rook, Bishop, Knight}
    #[error("a pawn cannot be promoted to {kind:?}")]
    Promotion { kind: PieceKind },

    /// A pawn on `at` is waiting for its promotion piece
    #[error("the pawn on {at} must be promoted before the next move")]
    PromotionPending { at: Coordinate },

    /// `promote` called when no pawn is waiting on `at`
    #[error("no promotion is pending on {at}")]
    NoPromotionPending { at: Coordinate },

    /// Internal invariant violation: every board holds one king per color
    #[error("no {color:?} king on the board")]
    NoKing { color: Color },

    /// Search or move requested for the side that is not on move
    #[error("{got:?} asked to move but it is {expected:?} to move")]
    WrongTurn { expected: Color, got: Color },

    /// Malformed layout, snapshot or FEN
    #[error("invalid board layout: {0}")]
    InvalidLayout(String),
}

/// Result type alias for chess core operations
pub type ChessResult<T> = Result<T, ChessError>;
