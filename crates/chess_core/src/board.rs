use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::coord::Coordinate;
use crate::error::{ChessError, ChessResult, IllegalMoveReason};
use crate::moves::{GameStatus, Move, MoveOutcome, Undo};
use crate::rules::{game_status, is_in_check, legal_moves_for};
use crate::special::CastleSide;
use crate::types::{Color, Piece, PieceKind};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastlingRights {
    pub white_king_side: bool,
    pub white_queen_side: bool,
    pub black_king_side: bool,
    pub black_queen_side: bool,
}

impl CastlingRights {
    pub fn all() -> Self {
        Self {
            white_king_side: true,
            white_queen_side: true,
            black_king_side: true,
            black_queen_side: true,
        }
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub fn has(&self, color: Color, side: CastleSide) -> bool {
        match (color, side) {
            (Color::White, CastleSide::King) => self.white_king_side,
            (Color::White, CastleSide::Queen) => self.white_queen_side,
            (Color::Black, CastleSide::King) => self.black_king_side,
            (Color::Black, CastleSide::Queen) => self.black_queen_side,
            (Color::Empty, _) => false,
        }
    }

    pub fn revoke(&mut self, color: Color, side: CastleSide) {
        match (color, side) {
            (Color::White, CastleSide::King) => self.white_king_side = false,
            (Color::White, CastleSide::Queen) => self.white_queen_side = false,
            (Color::Black, CastleSide::King) => self.black_king_side = false,
            (Color::Black, CastleSide::Queen) => self.black_queen_side = false,
            (Color::Empty, _) => {}
        }
    }

    /// Drops the rights touched by `moved` leaving its square or `captured`
    /// disappearing from its square.
    fn update(&mut self, moved: &Piece, captured: Option<&Piece>) {
        if moved.kind == PieceKind::King {
            self.revoke(moved.color, CastleSide::King);
            self.revoke(moved.color, CastleSide::Queen);
        }
        for pc in std::iter::once(moved).chain(captured) {
            if pc.kind != PieceKind::Rook {
                continue;
            }
            for side in [CastleSide::King, CastleSide::Queen] {
                if pc.position == side.rook_home(pc.color) {
                    self.revoke(pc.color, side);
                }
            }
        }
    }
}

/// Read-only picture of the board for renderers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardView {
    /// `squares[0]` is rank 8, `squares[7]` is rank 1; files run a..h.
    pub squares: [[(PieceKind, Color); 8]; 8],
    pub side_to_move: Color,
}

/// Authoritative game state: pieces, turn, castling rights, en-passant
/// window and pending promotion.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [Piece; 64],
    side_to_move: Color,
    castling: CastlingRights,
    en_passant: Option<Coordinate>, // square behind a pawn that just advanced 2
    pending_promotion: Option<Coordinate>,
    captured: Vec<Piece>,
}

impl Board {
    /// Validates a raw placement and derives per-piece `has_moved` flags.
    ///
    /// Castling rights that the placement cannot support are dropped. An
    /// en-passant target that does not sit behind an enemy pawn is rejected.
    pub(crate) fn from_parts(
        mut squares: [Piece; 64],
        side_to_move: Color,
        castling: CastlingRights,
        en_passant: Option<Coordinate>,
    ) -> ChessResult<Self> {
        if side_to_move.is_empty() {
            return Err(ChessError::InvalidLayout("side to move must be a color".into()));
        }

        for color in [Color::White, Color::Black] {
            let kings = squares
                .iter()
                .filter(|p| p.kind == PieceKind::King && p.color == color)
                .count();
            match kings {
                0 => return Err(ChessError::NoKing { color }),
                1 => {}
                n => {
                    return Err(ChessError::InvalidLayout(format!(
                        "{n} {color:?} kings on the board"
                    )));
                }
            }
        }

        let mut rights = castling;
        for color in [Color::White, Color::Black] {
            for side in [CastleSide::King, CastleSide::Queen] {
                let king = squares[side.king_home(color).index()];
                let rook = squares[side.rook_home(color).index()];
                let intact = king.kind == PieceKind::King
                    && king.color == color
                    && rook.kind == PieceKind::Rook
                    && rook.color == color;
                if !intact {
                    rights.revoke(color, side);
                }
            }
        }

        for (idx, pc) in squares.iter_mut().enumerate() {
            let at = Coordinate::from_index(idx);
            pc.position = at;
            pc.captured = false;
            pc.has_moved = match pc.kind {
                PieceKind::Pawn => {
                    if at.rank() == 0 || at.rank() == 7 {
                        return Err(ChessError::InvalidLayout(format!("pawn on back rank at {at}")));
                    }
                    at.rank() != pc.color.pawn_rank()
                }
                PieceKind::King => {
                    !(rights.has(pc.color, CastleSide::King)
                        || rights.has(pc.color, CastleSide::Queen))
                }
                PieceKind::Rook => ![CastleSide::King, CastleSide::Queen]
                    .into_iter()
                    .any(|side| side.rook_home(pc.color) == at && rights.has(pc.color, side)),
                _ => false,
            };
        }

        if let Some(ep) = en_passant {
            let pusher = side_to_move.other();
            let expected_rank = pusher.pawn_rank() as i8 + pusher.pawn_direction();
            let pushed = ep.from_offset(0, pusher.pawn_direction()).ok();
            let valid = ep.rank() as i8 == expected_rank
                && squares[ep.index()].is_empty()
                && pushed.is_some_and(|sq| {
                    let pc = squares[sq.index()];
                    pc.kind == PieceKind::Pawn && pc.color == pusher
                });
            if !valid {
                return Err(ChessError::InvalidLayout(format!("bad en-passant square {ep}")));
            }
        }

        Ok(Self {
            squares,
            side_to_move,
            castling: rights,
            en_passant,
            pending_promotion: None,
            captured: Vec::new(),
        })
    }

    #[inline]
    pub fn piece_at(&self, at: Coordinate) -> Piece {
        self.squares[at.index()]
    }

    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    pub fn castling(&self) -> CastlingRights {
        self.castling
    }

    /// Target square of a possible en-passant capture on the next move.
    pub fn en_passant(&self) -> Option<Coordinate> {
        self.en_passant
    }

    pub fn pending_promotion(&self) -> Option<Coordinate> {
        self.pending_promotion
    }

    /// Pieces removed from play, in capture order.
    pub fn captured_pieces(&self) -> &[Piece] {
        &self.captured
    }

    /// Pieces of `color` still on the board, a1 first.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = &Piece> {
        self.squares.iter().filter(move |p| p.color.is_same_as(color))
    }

    pub fn king_coord(&self, color: Color) -> ChessResult<Coordinate> {
        self.pieces(color)
            .find(|p| p.kind == PieceKind::King)
            .map(|p| p.position)
            .ok_or(ChessError::NoKing { color })
    }

    pub fn view(&self) -> BoardView {
        let mut squares = [[(PieceKind::Empty, Color::Empty); 8]; 8];
        for pc in &self.squares {
            let row = 7 - pc.position.rank() as usize;
            squares[row][pc.position.file() as usize] = (pc.kind, pc.color);
        }
        BoardView {
            squares,
            side_to_move: self.side_to_move,
        }
    }

    pub(crate) fn replace(&mut self, at: Coordinate, piece: Piece) {
        self.squares[at.index()] = piece;
    }

    pub(crate) fn clear_pending_promotion(&mut self) {
        self.pending_promotion = None;
    }

    fn take(&mut self, at: Coordinate) -> Piece {
        std::mem::replace(&mut self.squares[at.index()], Piece::empty(at))
    }

    /// Matches a (from, to) proposal against the legal moves of the piece on
    /// `from` and returns the complete move record.
    ///
    /// When the move promotes and `promotion` is `None`, the returned move
    /// carries no choice and applying it leaves the promotion pending.
    pub fn propose_move(
        &self,
        from: Coordinate,
        to: Coordinate,
        promotion: Option<PieceKind>,
    ) -> ChessResult<Move> {
        let illegal = |reason| ChessError::IllegalMove { from, to, reason };

        if let Some(at) = self.pending_promotion {
            return Err(ChessError::PromotionPending { at });
        }
        let piece = self.piece_at(from);
        if piece.is_empty() {
            return Err(illegal(IllegalMoveReason::EmptySquare));
        }
        if piece.color != self.side_to_move {
            return Err(illegal(IllegalMoveReason::NotYourPiece));
        }
        if let Some(kind) = promotion
            && !kind.is_promotion_target()
        {
            return Err(ChessError::Promotion { kind });
        }

        let legal = legal_moves_for(self, from)?;
        // Promotions are listed once per choice; a missing choice takes the
        // first entry and clears it again below.
        let found = legal.iter().find(|m| {
            m.to == to
                && (promotion.is_none()
                    || m.promotion_choice.is_none()
                    || m.promotion_choice == promotion)
        });
        match found {
            Some(m) => Ok(Move {
                promotion_choice: if m.is_promotion() { promotion } else { None },
                ..*m
            }),
            None => {
                let reachable = crate::movegen::pseudo_legal_destinations(self, &piece)
                    .contains(&to)
                    || crate::special::castling_moves(self, &piece)?
                        .iter()
                        .any(|m| m.to == to);
                let reason = if reachable {
                    IllegalMoveReason::LeavesKingInCheck
                } else {
                    IllegalMoveReason::Unreachable
                };
                trace!(%from, %to, ?reason, "move rejected");
                Err(illegal(reason))
            }
        }
    }

    /// Validates and applies a move to this board.
    ///
    /// The move's flags are recomputed from the board, so only `from`, `to`
    /// and `promotion_choice` of `mv` are trusted. On error nothing changes.
    pub fn apply_move(&mut self, mv: &Move) -> ChessResult<MoveOutcome> {
        let chosen = self.propose_move(mv.from, mv.to, mv.promotion_choice)?;
        let undo = self.make_move(&chosen);

        let (gives_check, status) = match self.summarize() {
            Ok(s) => s,
            Err(e) => {
                self.unmake_move(&chosen, undo);
                return Err(e);
            }
        };

        debug!(
            from = %chosen.from,
            to = %chosen.to,
            piece = ?chosen.moving_piece.kind,
            capture = chosen.is_capture(),
            check = gives_check,
            ?status,
            "move applied"
        );

        Ok(MoveOutcome {
            mv: chosen,
            gives_check,
            promotion_pending: self.pending_promotion.is_some(),
            status,
        })
    }

    fn summarize(&self) -> ChessResult<(bool, GameStatus)> {
        Ok((is_in_check(self, self.side_to_move)?, game_status(self)?))
    }

    /// Plays a move produced by the legality filter on this board, without
    /// re-validating it. Search uses this together with [`Board::unmake_move`].
    pub fn make_move(&mut self, mv: &Move) -> Undo {
        let from = mv.from;
        let to = mv.to;
        let moved = self.piece_at(from);
        let prev_castling = self.castling;
        let prev_ep = self.en_passant;
        let prev_pending = self.pending_promotion;
        let prev_side = self.side_to_move;

        // En passant removes the pawn beside the mover, not the one on `to`.
        let captured_at = if mv.is_en_passant {
            Some(Coordinate::at(to.file(), from.rank()))
        } else if !self.piece_at(to).is_empty() {
            Some(to)
        } else {
            None
        };
        let captured = captured_at.map(|at| self.take(at));
        if let Some(mut gone) = captured {
            gone.captured = true;
            self.captured.push(gone);
        }

        self.take(from);
        let mut piece = moved;
        piece.position = to;
        piece.has_moved = true;

        self.pending_promotion = None;
        if piece.kind == PieceKind::Pawn && to.rank() == piece.color.promotion_rank() {
            match mv.promotion_choice {
                Some(kind) => piece.kind = kind,
                None => self.pending_promotion = Some(to),
            }
        }
        self.replace(to, piece);

        let mut rook = None;
        if mv.is_castle {
            let side = CastleSide::from_king_target(to);
            let (rook_from, rook_to) = (side.rook_home(moved.color), side.rook_target(moved.color));
            let original = self.take(rook_from);
            let mut relocated = original;
            relocated.position = rook_to;
            relocated.has_moved = true;
            self.replace(rook_to, relocated);
            rook = Some((original, rook_to));
        }

        self.castling.update(&moved, captured.as_ref());

        self.en_passant = None;
        if moved.kind == PieceKind::Pawn && from.rank().abs_diff(to.rank()) == 2 {
            // ep square is the square passed over
            self.en_passant = Some(Coordinate::at(from.file(), (from.rank() + to.rank()) / 2));
        }

        self.side_to_move = self.side_to_move.other();

        Undo {
            moved,
            captured,
            rook,
            castling: prev_castling,
            en_passant: prev_ep,
            pending_promotion: prev_pending,
            side_to_move: prev_side,
        }
    }

    /// Reverts a move made by [`Board::make_move`]. Moves must be undone in
    /// reverse order.
    pub fn unmake_move(&mut self, mv: &Move, undo: Undo) {
        self.side_to_move = undo.side_to_move;
        self.castling = undo.castling;
        self.en_passant = undo.en_passant;
        self.pending_promotion = undo.pending_promotion;

        if let Some((rook, rook_to)) = undo.rook {
            self.take(rook_to);
            self.replace(rook.position, rook);
        }

        self.take(mv.to);
        self.replace(mv.from, undo.moved);

        if let Some(captured) = undo.captured {
            self.captured.pop();
            self.replace(captured.position, captured);
        }
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
