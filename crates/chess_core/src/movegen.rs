//! Piece movement generators.
//!
//! Generators work in two layers. [`candidate_directions`] lists, per piece,
//! the geometric rays it can travel, stopping only at the board edge. The
//! shared [`truncate_ray`] policy then cuts every ray at the first occupied
//! square, which gives [`pseudo_legal_destinations`]. Check safety is not
//! considered here; see [`crate::rules`].

use crate::board::Board;
use crate::coord::Coordinate;
use crate::types::{Color, Piece, PieceKind};

pub const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub const ORTHOGONAL: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub const ROYAL: [(i8, i8); 8] = [
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
];
pub const KNIGHT_JUMPS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

/// Direction table and ray length for every non-pawn kind.
fn step_pattern(kind: PieceKind) -> (&'static [(i8, i8)], u8) {
    match kind {
        PieceKind::Knight => (&KNIGHT_JUMPS, 1),
        PieceKind::Bishop => (&DIAGONAL, 7),
        PieceKind::Rook => (&ORTHOGONAL, 7),
        PieceKind::Queen => (&ROYAL, 7),
        PieceKind::King => (&ROYAL, 1),
        PieceKind::Pawn | PieceKind::Empty => (&[], 0),
    }
}

/// Squares visited by stepping `(df, dr)` from `from`, at most `len` times.
fn ray(from: Coordinate, (df, dr): (i8, i8), len: u8) -> impl Iterator<Item = Coordinate> {
    let mut cur = from;
    (0..len).map_while(move |_| {
        cur = cur.step(df, dr)?;
        Some(cur)
    })
}

/// Geometric rays of `piece`, nearest square first, cut only at the edge.
///
/// Pawns get their forward ray (two squares until they have moved) followed
/// by the two single-square diagonals. Empty and captured pieces get nothing.
pub fn candidate_directions(piece: &Piece) -> Vec<Vec<Coordinate>> {
    if piece.is_empty() || piece.captured {
        return Vec::new();
    }
    let from = piece.position;

    if piece.kind == PieceKind::Pawn {
        let dir = piece.color.pawn_direction();
        let reach = if piece.has_moved { 1 } else { 2 };
        let mut rays = vec![ray(from, (0, dir), reach).collect::<Vec<_>>()];
        for df in [-1, 1] {
            rays.push(ray(from, (df, dir), 1).collect());
        }
        rays.retain(|r| !r.is_empty());
        return rays;
    }

    let (dirs, len) = step_pattern(piece.kind);
    dirs.iter()
        .map(|&d| ray(from, d, len).collect::<Vec<_>>())
        .filter(|r| !r.is_empty())
        .collect()
}

/// Shared truncation policy: walk `squares` until the first occupied one,
/// keeping it only when it holds an opponent of `piece`.
pub fn truncate_ray(
    board: &Board,
    piece: &Piece,
    squares: impl IntoIterator<Item = Coordinate>,
    out: &mut Vec<Coordinate>,
) {
    for to in squares {
        let target = board.piece_at(to);
        if target.is_empty() {
            out.push(to);
            continue;
        }
        if target.is_opponent(piece) {
            out.push(to);
        }
        break;
    }
}

/// Destinations `piece` can reach on `board` ignoring check safety and
/// castling.
pub fn pseudo_legal_destinations(board: &Board, piece: &Piece) -> Vec<Coordinate> {
    let mut out = Vec::with_capacity(28);
    if piece.is_empty() || piece.captured {
        return out;
    }
    if piece.kind == PieceKind::Pawn {
        pawn_destinations(board, piece, &mut out);
        return out;
    }
    let (dirs, len) = step_pattern(piece.kind);
    for &d in dirs {
        truncate_ray(board, piece, ray(piece.position, d, len), &mut out);
    }
    out
}

fn pawn_destinations(board: &Board, pawn: &Piece, out: &mut Vec<Coordinate>) {
    let dir = pawn.color.pawn_direction();
    let reach = if pawn.has_moved { 1 } else { 2 };

    // forward: never captures, so any occupant ends the advance
    for to in ray(pawn.position, (0, dir), reach) {
        if !board.piece_at(to).is_empty() {
            break;
        }
        out.push(to);
    }

    for df in [-1, 1] {
        let Some(to) = pawn.position.step(df, dir) else {
            continue;
        };
        if board.piece_at(to).is_opponent(pawn) || en_passant_victim(board, pawn, to).is_some() {
            out.push(to);
        }
    }
}

/// Square of the pawn an en-passant capture by `pawn` onto `to` would remove.
pub fn en_passant_victim(board: &Board, pawn: &Piece, to: Coordinate) -> Option<Coordinate> {
    if pawn.kind != PieceKind::Pawn
        || pawn.color != board.side_to_move()
        || board.en_passant() != Some(to)
    {
        return None;
    }
    let victim_sq = Coordinate::new(to.file() as i8, pawn.position.rank() as i8).ok()?;
    let victim = board.piece_at(victim_sq);
    (victim.kind == PieceKind::Pawn && victim.is_opponent(pawn)).then_some(victim_sq)
}

/// True if `piece` attacks `target`. Equal to the pseudo-legal relation
/// except that pawns attack both diagonals whatever stands there.
pub fn attacks(board: &Board, piece: &Piece, target: Coordinate) -> bool {
    if piece.is_empty() || piece.captured || piece.position == target {
        return false;
    }
    let from = piece.position;
    let df = target.file() as i8 - from.file() as i8;
    let dr = target.rank() as i8 - from.rank() as i8;

    match piece.kind {
        PieceKind::Pawn => dr == piece.color.pawn_direction() && df.abs() == 1,
        PieceKind::Knight => KNIGHT_JUMPS.contains(&(df, dr)),
        PieceKind::King => df.abs() <= 1 && dr.abs() <= 1,
        PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
            let diagonal = df.abs() == dr.abs();
            let straight = df == 0 || dr == 0;
            let aligned = match piece.kind {
                PieceKind::Bishop => diagonal,
                PieceKind::Rook => straight,
                _ => diagonal || straight,
            };
            if !aligned {
                return false;
            }
            let step = (df.signum(), dr.signum());
            let between = df.abs().max(dr.abs()) as u8 - 1;
            ray(from, step, between).all(|sq| board.piece_at(sq).is_empty())
        }
        PieceKind::Empty => false,
    }
}

/// True if any piece of color `by` attacks `target`.
pub fn is_square_attacked(board: &Board, target: Coordinate, by: Color) -> bool {
    board.pieces(by).any(|pc| attacks(board, pc, target))
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
