//! Negamax search with alpha-beta pruning

use std::cmp::Reverse;

use chess_core::{is_in_check, legal_moves, Board, ChessError, ChessResult, Color, Move};
use rand::seq::SliceRandom;
use rand::Rng;

use crate::eval::{evaluate, MATE_SCORE, MATE_THRESHOLD};

const INFINITY: i32 = MATE_SCORE + 1;

/// Result of a root search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Chosen move and its score for the mover (None if no legal moves)
    pub best_move: Option<(Move, i32)>,
    /// Number of moves the choice was drawn from
    pub pool: usize,
}

/// Searches `board` for `color`, `depth` plies deep, and picks a move.
///
/// With `pool_size == 1` the first best move in generation order wins.
/// Otherwise every root move is scored exactly and the choice is drawn
/// uniformly from the `pool_size` best, skipping moves that walk into a
/// forced mate unless nothing else is left. A forced mate for the mover is
/// always played.
pub fn pick_best_move<R: Rng + ?Sized>(
    board: &Board,
    color: Color,
    depth: u8,
    pool_size: usize,
    rng: &mut R,
    nodes: &mut u64,
) -> ChessResult<SearchOutcome> {
    if color != board.side_to_move() {
        return Err(ChessError::WrongTurn {
            expected: board.side_to_move(),
            got: color,
        });
    }

    let mut scratch = board.clone();
    let mut moves = legal_moves(&scratch, color)?;
    if moves.is_empty() {
        return Ok(SearchOutcome {
            best_move: None,
            pool: 0,
        });
    }
    order_moves(&mut moves);
    let depth = depth.max(1);

    if pool_size <= 1 {
        let mut best: Option<(Move, i32)> = None;
        let mut alpha = -INFINITY;
        for mv in moves {
            let undo = scratch.make_move(&mv);
            let score = negamax(&mut scratch, depth - 1, -INFINITY, -alpha, 1, nodes);
            scratch.unmake_move(&mv, undo);
            let score = -score?;

            if best.map_or(true, |(_, s)| score > s) {
                best = Some((mv, score));
            }
            alpha = alpha.max(score);
        }
        return Ok(SearchOutcome {
            best_move: best,
            pool: 1,
        });
    }

    // Full window so every root score is exact
    let mut scored = Vec::with_capacity(moves.len());
    for mv in moves {
        let undo = scratch.make_move(&mv);
        let score = negamax(&mut scratch, depth - 1, -INFINITY, INFINITY, 1, nodes);
        scratch.unmake_move(&mv, undo);
        scored.push((mv, -score?));
    }
    scored.sort_by_key(|&(_, score)| Reverse(score));

    let candidates = root_pool(&scored, pool_size);
    let pool = candidates.len();
    Ok(SearchOutcome {
        best_move: candidates.choose(rng).copied(),
        pool,
    })
}

/// Top-N slice of `scored` (sorted best first) the engine may pick from.
fn root_pool(scored: &[(Move, i32)], pool_size: usize) -> &[(Move, i32)] {
    let best = scored[0].1;
    if best >= MATE_THRESHOLD {
        return &scored[..1];
    }
    let not_lost = scored
        .iter()
        .take_while(|&&(_, s)| s > -MATE_THRESHOLD)
        .count();
    let keep = if not_lost == 0 { scored.len() } else { not_lost };
    &scored[..keep.min(pool_size)]
}

/// Captures first, most valuable victim then least valuable attacker.
/// The sort is stable, so quiet moves keep generation order.
fn order_moves(moves: &mut [Move]) {
    moves.sort_by_key(|mv| {
        Reverse(
            mv.captured_piece
                .map_or(0, |victim| 1 + 10 * victim.point_value() - mv.moving_piece.point_value()),
        )
    });
}

/// Recursive negamax search with alpha-beta pruning, scored for the side
/// to move on `board`.
fn negamax(
    board: &mut Board,
    depth: u8,
    mut alpha: i32,
    beta: i32,
    ply: i32,
    nodes: &mut u64,
) -> ChessResult<i32> {
    *nodes += 1;
    let color = board.side_to_move();

    let mut moves = legal_moves(board, color)?;
    if moves.is_empty() {
        if is_in_check(board, color)? {
            return Ok(-(MATE_SCORE - ply)); // Checkmate
        }
        return Ok(0); // Stalemate
    }

    if depth == 0 {
        return Ok(evaluate(board, color));
    }

    order_moves(&mut moves);
    let mut best = -INFINITY;
    for mv in moves {
        let undo = board.make_move(&mv);
        let score = negamax(board, depth - 1, -beta, -alpha, ply + 1, nodes);
        board.unmake_move(&mv, undo);
        let score = -score?;

        best = best.max(score);
        alpha = alpha.max(best);
        if alpha >= beta {
            break; // Beta cutoff
        }
    }

    Ok(best)
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
