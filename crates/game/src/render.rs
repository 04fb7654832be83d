//! Plain-text board rendering.

use std::fmt::Write;

use chess_core::{BoardView, Color, PieceKind};

const FILES: &str = "    a b c d e f g h";
const BORDER: &str = "  +-----------------+";

/// Letter shown for a square: uppercase White, lowercase Black, `.` empty.
pub fn square_char(kind: PieceKind, color: Color) -> char {
    match (kind.letter(), color) {
        (Some(c), Color::White) => c.to_ascii_uppercase(),
        (Some(c), Color::Black) => c,
        _ => '.',
    }
}

/// Renders the board with rank 8 on top and file/rank labels on every side.
pub fn render_board(view: &BoardView) -> String {
    let mut out = String::with_capacity(256);
    out.push_str(FILES);
    out.push('\n');
    out.push_str(BORDER);
    out.push('\n');
    for (row_idx, row) in view.squares.iter().enumerate() {
        let rank = 8 - row_idx;
        let _ = write!(out, "{rank} |");
        for &(kind, color) in row {
            out.push(' ');
            out.push(square_char(kind, color));
        }
        let _ = writeln!(out, " | {rank}");
    }
    out.push_str(BORDER);
    out.push('\n');
    out.push_str(FILES);
    out.push('\n');
    let _ = writeln!(out, "{:?} to move", view.side_to_move);
    out
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
