//! Serializable board snapshots for save files.

use serde::{Deserialize, Serialize};

use crate::board::{Board, CastlingRights};
use crate::coord::Coordinate;
use crate::error::ChessResult;
use crate::layout::{decode_rows, encode_rows};
use crate::types::Color;

/// Board placement in the starting-layout encoding plus the side to move.
///
/// `castling` and `en_passant` are optional: a snapshot without them loads
/// with no castling rights and no en-passant window.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    pub rows: Vec<Vec<String>>,
    pub side_to_move: Color,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub castling: Option<CastlingRights>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub en_passant: Option<Coordinate>,
}

impl Board {
    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            rows: encode_rows(self),
            side_to_move: self.side_to_move(),
            castling: Some(self.castling()),
            en_passant: self.en_passant(),
        }
    }

    /// Rebuilds a board from a snapshot. Captured pieces and any pending
    /// promotion are not part of the snapshot.
    pub fn from_snapshot(snapshot: &BoardSnapshot) -> ChessResult<Self> {
        let squares = decode_rows(&snapshot.rows)?;
        Board::from_parts(
            squares,
            snapshot.side_to_move,
            snapshot.castling.unwrap_or_else(CastlingRights::none),
            snapshot.en_passant,
        )
    }
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod snapshot_tests;
