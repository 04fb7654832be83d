//! Forsyth-Edwards Notation, used by tests and for debugging positions.
//!
//! Move counters are accepted but not tracked.

use crate::board::{Board, CastlingRights};
use crate::coord::Coordinate;
use crate::error::{ChessError, ChessResult};
use crate::layout::decode_rows;
use crate::types::Color;

pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

fn invalid(msg: impl Into<String>) -> ChessError {
    ChessError::InvalidLayout(msg.into())
}

fn parse_square(s: &str) -> ChessResult<Coordinate> {
    match *s.as_bytes() {
        [file @ b'a'..=b'h', rank @ b'1'..=b'8'] => {
            Coordinate::new((file - b'a') as i8, (rank - b'1') as i8)
        }
        _ => Err(invalid(format!("bad square '{s}'"))),
    }
}

impl Board {
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(invalid("expected at least 4 FEN fields"));
        }

        let mut rows: Vec<Vec<String>> = Vec::with_capacity(8);
        for rank_str in parts[0].split('/') {
            let mut row = Vec::with_capacity(8);
            for ch in rank_str.chars() {
                match ch.to_digit(10) {
                    Some(d @ 1..=8) => row.extend(std::iter::repeat_n(String::new(), d as usize)),
                    Some(_) => return Err(invalid(format!("bad empty-run '{ch}'"))),
                    None => row.push(ch.to_string()),
                }
            }
            rows.push(row);
        }
        let squares = decode_rows(&rows)?;

        let side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => return Err(invalid(format!("bad side to move '{other}'"))),
        };

        let mut castling = CastlingRights::none();
        if parts[2] != "-" {
            for c in parts[2].chars() {
                match c {
                    'K' => castling.white_king_side = true,
                    'Q' => castling.white_queen_side = true,
                    'k' => castling.black_king_side = true,
                    'q' => castling.black_queen_side = true,
                    _ => return Err(invalid(format!("bad castling char '{c}'"))),
                }
            }
        }

        let en_passant = match parts[3] {
            "-" => None,
            sq => Some(parse_square(sq)?),
        };

        Board::from_parts(squares, side_to_move, castling, en_passant)
    }

    /// FEN of the position with zeroed move counters.
    pub fn to_fen(&self) -> String {
        let mut placement = String::new();
        for (i, row) in crate::layout::encode_rows(self).iter().enumerate() {
            if i > 0 {
                placement.push('/');
            }
            let mut empties = 0;
            for cell in row {
                if cell.is_empty() {
                    empties += 1;
                    continue;
                }
                if empties > 0 {
                    placement.push_str(&empties.to_string());
                    empties = 0;
                }
                placement.push_str(cell);
            }
            if empties > 0 {
                placement.push_str(&empties.to_string());
            }
        }

        let side = if self.side_to_move() == Color::Black { "b" } else { "w" };

        let rights = self.castling();
        let mut castling = String::new();
        for (flag, c) in [
            (rights.white_king_side, 'K'),
            (rights.white_queen_side, 'Q'),
            (rights.black_king_side, 'k'),
            (rights.black_queen_side, 'q'),
        ] {
            if flag {
                castling.push(c);
            }
        }
        if castling.is_empty() {
            castling.push('-');
        }

        let ep = self
            .en_passant()
            .map(|sq| sq.to_string())
            .unwrap_or_else(|| "-".to_string());

        format!("{placement} {side} {castling} {ep} 0 1")
    }
}

#[cfg(test)]
#[path = "fen_tests.rs"]
mod fen_tests;
