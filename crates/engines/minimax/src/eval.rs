//! Static evaluation: material plus a few positional terms.

use chess_core::{Board, Color, Piece, PieceKind};

/// Score of a side that is checkmated at the root. Mates further away
/// score closer to zero so the engine prefers the quickest one.
pub const MATE_SCORE: i32 = 1_000_000;

/// Scores above this (in absolute value) are forced mates.
pub const MATE_THRESHOLD: i32 = MATE_SCORE - 1_000;

const CENTER_BONUS: i32 = 10;
const PAWN_ADVANCE_BONUS: i32 = 5;

/// Evaluates `board` from `color`'s point of view, in centipawns.
pub fn evaluate(board: &Board, color: Color) -> i32 {
    let own: i32 = board.pieces(color).map(piece_score).sum();
    let theirs: i32 = board.pieces(color.other()).map(piece_score).sum();
    own - theirs
}

fn piece_score(piece: &Piece) -> i32 {
    piece.point_value() + positional_bonus(piece)
}

/// Minor pieces like the middle of the board; pawns gain a little for every
/// rank they have advanced.
fn positional_bonus(piece: &Piece) -> i32 {
    let file = piece.position.file() as i32;
    let rank = piece.position.rank() as i32;
    match piece.kind {
        PieceKind::Knight | PieceKind::Bishop => {
            // 0 on the four centre squares, 3 on the rim
            let dist = ((2 * file - 7).abs().max((2 * rank - 7).abs())) / 2;
            (3 - dist) * CENTER_BONUS
        }
        PieceKind::Pawn => {
            let advanced = match piece.color {
                Color::White => rank - 1,
                Color::Black => 6 - rank,
                Color::Empty => 0,
            };
            advanced * PAWN_ADVANCE_BONUS
        }
        _ => 0,
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
