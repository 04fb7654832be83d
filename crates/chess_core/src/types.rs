use serde::{Deserialize, Serialize};

use crate::coord::Coordinate;

/// Side of a piece. `Empty` marks the absence of a piece and is never the
/// friend or the opponent of anything.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
    Empty,
}

impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
            Color::Empty => Color::Empty,
        }
    }

    pub fn is_empty(self) -> bool {
        self == Color::Empty
    }

    pub fn is_same_as(self, other: Color) -> bool {
        !self.is_empty() && self == other
    }

    pub fn is_opponent_of(self, other: Color) -> bool {
        !self.is_empty() && !other.is_empty() && self != other
    }

    /// Rank step of a pawn of this color.
    pub(crate) fn pawn_direction(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
            Color::Empty => 0,
        }
    }

    pub(crate) fn home_rank(self) -> u8 {
        match self {
            Color::Black => 7,
            _ => 0,
        }
    }

    pub(crate) fn pawn_rank(self) -> u8 {
        match self {
            Color::Black => 6,
            _ => 1,
        }
    }

    pub(crate) fn promotion_rank(self) -> u8 {
        match self {
            Color::Black => 0,
            _ => 7,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
    Empty,
}

impl PieceKind {
    /// Kinds a pawn may turn into, strongest first.
    pub const PROMOTION_TARGETS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    /// Material value in centipawns. Kings are never traded, so they count 0.
    pub fn point_value(self) -> i32 {
        match self {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 320,
            PieceKind::Bishop => 330,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King | PieceKind::Empty => 0,
        }
    }

    pub fn is_promotion_target(self) -> bool {
        Self::PROMOTION_TARGETS.contains(&self)
    }

    /// Lowercase letter used in layouts and FEN.
    pub fn letter(self) -> Option<char> {
        match self {
            PieceKind::Pawn => Some('p'),
            PieceKind::Knight => Some('n'),
            PieceKind::Bishop => Some('b'),
            PieceKind::Rook => Some('r'),
            PieceKind::Queen => Some('q'),
            PieceKind::King => Some('k'),
            PieceKind::Empty => None,
        }
    }

    /// Case-insensitive inverse of [`PieceKind::letter`].
    pub fn from_letter(c: char) -> Option<PieceKind> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// A piece together with the per-piece state the rules need.
///
/// Empty squares hold a piece of kind [`PieceKind::Empty`], so a square is
/// never "missing" a value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub position: Coordinate,
    pub has_moved: bool,
    pub captured: bool,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color, position: Coordinate) -> Self {
        Self {
            kind,
            color,
            position,
            has_moved: false,
            captured: false,
        }
    }

    pub fn empty(position: Coordinate) -> Self {
        Self::new(PieceKind::Empty, Color::Empty, position)
    }

    pub fn is_empty(&self) -> bool {
        self.kind == PieceKind::Empty
    }

    pub fn is_friendly(&self, other: &Piece) -> bool {
        self.color.is_same_as(other.color)
    }

    pub fn is_opponent(&self, other: &Piece) -> bool {
        self.color.is_opponent_of(other.color)
    }

    pub fn point_value(&self) -> i32 {
        self.kind.point_value()
    }

    /// Single-character code: uppercase for White, lowercase for Black.
    pub fn code(&self) -> Option<char> {
        let letter = self.kind.letter()?;
        match self.color {
            Color::White => Some(letter.to_ascii_uppercase()),
            Color::Black => Some(letter),
            Color::Empty => None,
        }
    }

    /// Parses a code produced by [`Piece::code`].
    pub fn from_code(code: char, position: Coordinate) -> Option<Piece> {
        let kind = PieceKind::from_letter(code)?;
        let color = if code.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Piece::new(kind, color, position))
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
