//! Starting layouts and the single-character grid encoding shared with
//! snapshots.

use crate::board::{Board, CastlingRights};
use crate::coord::Coordinate;
use crate::error::{ChessError, ChessResult};
use crate::types::{Color, Piece};

/// Rows run from rank 8 down to rank 1. Uppercase is White, lowercase is
/// Black and `""` is an empty square.
pub type Grid = [[&'static str; 8]; 8];

/// Fixed position a new game starts from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StartingLayout {
    pub grid: Grid,
    pub side_to_move: Color,
}

pub const STANDARD_LAYOUT: StartingLayout = StartingLayout {
    grid: [
        ["r", "n", "b", "q", "k", "b", "n", "r"],
        ["p", "p", "p", "p", "p", "p", "p", "p"],
        ["", "", "", "", "", "", "", ""],
        ["", "", "", "", "", "", "", ""],
        ["", "", "", "", "", "", "", ""],
        ["", "", "", "", "", "", "", ""],
        ["P", "P", "P", "P", "P", "P", "P", "P"],
        ["R", "N", "B", "Q", "K", "B", "N", "R"],
    ],
    side_to_move: Color::White,
};

/// Decodes one grid cell.
pub(crate) fn decode_cell(cell: &str, at: Coordinate) -> ChessResult<Piece> {
    let mut chars = cell.trim().chars();
    match (chars.next(), chars.next()) {
        (None, _) => Ok(Piece::empty(at)),
        (Some(c), None) => Piece::from_code(c, at).ok_or_else(|| {
            ChessError::InvalidLayout(format!("unknown piece code '{c}' at {at}"))
        }),
        _ => Err(ChessError::InvalidLayout(format!(
            "cell '{cell}' at {at} is not a single piece code"
        ))),
    }
}

/// Decodes eight rows of eight cells, rank 8 first.
pub(crate) fn decode_rows<R, C>(rows: R) -> ChessResult<[Piece; 64]>
where
    R: IntoIterator,
    R::Item: IntoIterator<Item = C>,
    C: AsRef<str>,
{
    let mut squares = [Piece::empty(Coordinate::at(0, 0)); 64];
    let mut row_count = 0;
    for (row_idx, row) in rows.into_iter().enumerate() {
        if row_idx >= 8 {
            return Err(ChessError::InvalidLayout("more than 8 rows".into()));
        }
        let rank = 7 - row_idx as u8;
        let mut file_count = 0;
        for (file, cell) in row.into_iter().enumerate() {
            if file >= 8 {
                return Err(ChessError::InvalidLayout(format!(
                    "row {} has more than 8 cells",
                    row_idx + 1
                )));
            }
            let at = Coordinate::at(file as u8, rank);
            squares[at.index()] = decode_cell(cell.as_ref(), at)?;
            file_count += 1;
        }
        if file_count != 8 {
            return Err(ChessError::InvalidLayout(format!(
                "row {} has {file_count} cells",
                row_idx + 1
            )));
        }
        row_count += 1;
    }
    if row_count != 8 {
        return Err(ChessError::InvalidLayout(format!("{row_count} rows instead of 8")));
    }
    for (idx, sq) in squares.iter_mut().enumerate() {
        sq.position = Coordinate::from_index(idx);
    }
    Ok(squares)
}

/// Encodes the board as rows of single-character strings, rank 8 first.
pub(crate) fn encode_rows(board: &Board) -> Vec<Vec<String>> {
    (0..8u8)
        .rev()
        .map(|rank| {
            (0..8u8)
                .map(|file| {
                    board
                        .piece_at(Coordinate::at(file, rank))
                        .code()
                        .map(String::from)
                        .unwrap_or_default()
                })
                .collect()
        })
        .collect()
}

impl Board {
    /// Sets up a new game from `layout`. Kings and rooks on their home
    /// squares start with castling rights; pawns on their start rank may
    /// advance two squares.
    pub fn new(layout: &StartingLayout) -> ChessResult<Self> {
        let squares = decode_rows(layout.grid)?;
        Board::from_parts(squares, layout.side_to_move, CastlingRights::all(), None)
    }

    /// The standard chess starting position.
    pub fn startpos() -> Self {
        Board::new(&STANDARD_LAYOUT).expect("standard layout holds one king per side")
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::startpos()
    }
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod layout_tests;
