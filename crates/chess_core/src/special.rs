//! Castling, en passant and promotion.

use tracing::debug;

use crate::board::Board;
use crate::coord::Coordinate;
use crate::error::{ChessError, ChessResult};
use crate::movegen::is_square_attacked;
use crate::moves::Move;
use crate::rules::is_in_check;
use crate::types::{Color, Piece, PieceKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CastleSide {
    King,
    Queen,
}

impl CastleSide {
    pub fn king_home(self, color: Color) -> Coordinate {
        Coordinate::at(4, color.home_rank())
    }

    pub fn king_target(self, color: Color) -> Coordinate {
        match self {
            CastleSide::King => Coordinate::at(6, color.home_rank()),
            CastleSide::Queen => Coordinate::at(2, color.home_rank()),
        }
    }

    pub fn rook_home(self, color: Color) -> Coordinate {
        match self {
            CastleSide::King => Coordinate::at(7, color.home_rank()),
            CastleSide::Queen => Coordinate::at(0, color.home_rank()),
        }
    }

    pub fn rook_target(self, color: Color) -> Coordinate {
        match self {
            CastleSide::King => Coordinate::at(5, color.home_rank()),
            CastleSide::Queen => Coordinate::at(3, color.home_rank()),
        }
    }

    /// Side of a castle given where the king lands.
    pub fn from_king_target(to: Coordinate) -> Self {
        if to.file() > 4 {
            CastleSide::King
        } else {
            CastleSide::Queen
        }
    }

    /// Files strictly between king and rook; all must be empty.
    fn between_files(self) -> &'static [u8] {
        match self {
            CastleSide::King => &[5, 6],
            CastleSide::Queen => &[1, 2, 3],
        }
    }

    /// Files the king crosses or lands on; none may be attacked.
    fn king_path_files(self) -> &'static [u8] {
        match self {
            CastleSide::King => &[5, 6],
            CastleSide::Queen => &[3, 2],
        }
    }
}

/// Castling moves available to `king`.
///
/// Requires the castling right, an unmoved king and rook on their home
/// squares, empty squares between them, no check on the king, and no
/// attacked square on the king's path.
pub fn castling_moves(board: &Board, king: &Piece) -> ChessResult<Vec<Move>> {
    let mut out = Vec::new();
    let color = king.color;
    if king.kind != PieceKind::King
        || king.has_moved
        || king.position != CastleSide::King.king_home(color)
    {
        return Ok(out);
    }

    let sides = [CastleSide::King, CastleSide::Queen];
    if !sides.iter().any(|&s| board.castling().has(color, s)) || is_in_check(board, color)? {
        return Ok(out);
    }

    let enemy = color.other();
    let rank = color.home_rank();
    for side in sides {
        if !board.castling().has(color, side) {
            continue;
        }
        let rook = board.piece_at(side.rook_home(color));
        if rook.kind != PieceKind::Rook || rook.color != color || rook.has_moved {
            continue;
        }
        let clear = side
            .between_files()
            .iter()
            .all(|&f| board.piece_at(Coordinate::at(f, rank)).is_empty());
        if !clear {
            continue;
        }
        let safe = side
            .king_path_files()
            .iter()
            .all(|&f| !is_square_attacked(board, Coordinate::at(f, rank), enemy));
        if safe {
            let mut mv = Move::quiet(*king, side.king_target(color));
            mv.is_castle = true;
            out.push(mv);
        }
    }
    Ok(out)
}

impl Board {
    /// Replaces the pawn waiting on `at` with a `kind` piece of its color.
    ///
    /// Fails without touching the board when nothing is pending on `at` or
    /// `kind` is not one of Queen, Rook, Bishop or Knight.
    pub fn promote(&mut self, at: Coordinate, kind: PieceKind) -> ChessResult<Piece> {
        if self.pending_promotion() != Some(at) {
            return Err(ChessError::NoPromotionPending { at });
        }
        if !kind.is_promotion_target() {
            return Err(ChessError::Promotion { kind });
        }
        let pawn = self.piece_at(at);
        let promoted = Piece { kind, ..pawn };
        self.replace(at, promoted);
        self.clear_pending_promotion();
        debug!(square = %at, ?kind, color = ?promoted.color, "pawn promoted");
        Ok(promoted)
    }
}

#[cfg(test)]
#[path = "special_tests.rs"]
mod special_tests;
