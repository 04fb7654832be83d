//! Move legality filter and end-of-game detection.

use std::collections::BTreeSet;

use crate::board::Board;
use crate::coord::Coordinate;
use crate::error::ChessResult;
use crate::movegen::{en_passant_victim, is_square_attacked, pseudo_legal_destinations};
use crate::moves::{GameStatus, Move};
use crate::special::castling_moves;
use crate::types::{Color, Piece, PieceKind};

/// True if any piece of the other color attacks `color`'s king.
pub fn is_in_check(board: &Board, color: Color) -> ChessResult<bool> {
    let king = board.king_coord(color)?;
    Ok(is_square_attacked(board, king, color.other()))
}

/// Pseudo-legal moves of `piece`, promotions expanded once per choice.
fn pseudo_moves(board: &Board, piece: &Piece, out: &mut Vec<Move>) -> ChessResult<()> {
    for to in pseudo_legal_destinations(board, piece) {
        let mut mv = Move::quiet(*piece, to);
        let target = board.piece_at(to);
        if !target.is_empty() {
            mv.captured_piece = Some(target);
        } else if let Some(victim) = en_passant_victim(board, piece, to) {
            mv.is_en_passant = true;
            mv.captured_piece = Some(board.piece_at(victim));
        }

        if mv.is_promotion() {
            out.extend(PieceKind::PROMOTION_TARGETS.map(|k| mv.with_promotion(k)));
        } else {
            out.push(mv);
        }
    }
    if piece.kind == PieceKind::King {
        out.extend(castling_moves(board, piece)?);
    }
    Ok(())
}

/// Drops every move that leaves the mover's king attacked, replaying each
/// candidate on `scratch`.
fn retain_check_safe(scratch: &mut Board, moves: &mut Vec<Move>) -> ChessResult<()> {
    let mut result = Ok(());
    moves.retain(|mv| {
        if result.is_err() {
            return false;
        }
        let undo = scratch.make_move(mv);
        let unsafe_for_mover = is_in_check(scratch, mv.moving_piece.color);
        scratch.unmake_move(mv, undo);
        match unsafe_for_mover {
            Ok(in_check) => !in_check,
            Err(e) => {
                result = Err(e);
                false
            }
        }
    });
    result
}

/// Legal moves of the piece standing on `at` (empty if the square is empty).
pub fn legal_moves_for(board: &Board, at: Coordinate) -> ChessResult<Vec<Move>> {
    let piece = board.piece_at(at);
    let mut moves = Vec::with_capacity(32);
    if piece.is_empty() {
        return Ok(moves);
    }
    pseudo_moves(board, &piece, &mut moves)?;
    let mut scratch = board.clone();
    retain_check_safe(&mut scratch, &mut moves)?;
    Ok(moves)
}

/// Destination squares of [`legal_moves_for`], without promotion duplicates.
pub fn legal_destinations(board: &Board, at: Coordinate) -> ChessResult<BTreeSet<Coordinate>> {
    Ok(legal_moves_for(board, at)?.into_iter().map(|m| m.to).collect())
}

/// Legal moves of every `color` piece.
pub fn legal_moves(board: &Board, color: Color) -> ChessResult<Vec<Move>> {
    let mut moves = Vec::with_capacity(64);
    for piece in board.pieces(color) {
        pseudo_moves(board, piece, &mut moves)?;
    }
    let mut scratch = board.clone();
    retain_check_safe(&mut scratch, &mut moves)?;
    Ok(moves)
}

fn has_legal_move(board: &Board, color: Color) -> ChessResult<bool> {
    let mut scratch = board.clone();
    for piece in board.pieces(color) {
        let mut moves = Vec::new();
        pseudo_moves(board, piece, &mut moves)?;
        retain_check_safe(&mut scratch, &mut moves)?;
        if !moves.is_empty() {
            return Ok(true);
        }
    }
    Ok(false)
}

pub fn is_checkmate(board: &Board, color: Color) -> ChessResult<bool> {
    Ok(is_in_check(board, color)? && !has_legal_move(board, color)?)
}

pub fn is_stalemate(board: &Board, color: Color) -> ChessResult<bool> {
    Ok(!is_in_check(board, color)? && !has_legal_move(board, color)?)
}

/// Status for the side to move.
pub fn game_status(board: &Board) -> ChessResult<GameStatus> {
    let color = board.side_to_move();
    if has_legal_move(board, color)? {
        return Ok(GameStatus::InProgress);
    }
    if is_in_check(board, color)? {
        Ok(GameStatus::Checkmate {
            winner: color.other(),
        })
    } else {
        Ok(GameStatus::Stalemate)
    }
}

pub fn is_end_game(board: &Board) -> ChessResult<bool> {
    Ok(game_status(board)?.is_over())
}

#[cfg(test)]
#[path = "rules_tests.rs"]
mod rules_tests;
