//! Parsing of typed commands, squares and promotion letters.

use std::str::FromStr;

use chess_core::{Coordinate, Move, PieceKind};

use crate::error::{GameError, GameResult};

/// One line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `e2 e4`, or `e7 e8 q` to promote in the same line
    Move {
        from: Coordinate,
        to: Coordinate,
        promotion: Option<PieceKind>,
    },
    /// `moves e2`: list where the piece on a square can go
    Moves(Coordinate),
    Show,
    Help,
    Rules,
    Abort,
}

impl FromStr for Command {
    type Err = GameError;

    fn from_str(input: &str) -> GameResult<Self> {
        let words: Vec<&str> = input.split_whitespace().collect();
        let Some(first) = words.first() else {
            return Err(GameError::Parse("empty command, type 'help' for a list".into()));
        };

        let keyword = first.to_ascii_lowercase();
        let command = match (keyword.as_str(), words.len()) {
            ("show", 1) => Command::Show,
            ("help", 1) => Command::Help,
            ("rules", 1) => Command::Rules,
            ("abort", 1) => Command::Abort,
            ("moves", 2) => Command::Moves(parse_coordinate(words[1])?),
            ("moves", _) => {
                return Err(GameError::Parse("usage: moves [column][row], e.g. moves a2".into()))
            }
            (_, 2) => Command::Move {
                from: parse_coordinate(words[0])?,
                to: parse_coordinate(words[1])?,
                promotion: None,
            },
            (_, 3) => Command::Move {
                from: parse_coordinate(words[0])?,
                to: parse_coordinate(words[1])?,
                promotion: Some(parse_promotion(words[2])?),
            },
            _ => return Err(GameError::Parse(format!("unknown command '{}'", input.trim()))),
        };
        Ok(command)
    }
}

pub fn parse_command(input: &str) -> GameResult<Command> {
    input.parse()
}

/// Parses algebraic squares such as `e4` (case-insensitive).
pub fn parse_coordinate(text: &str) -> GameResult<Coordinate> {
    let bad = || GameError::Parse(format!("'{text}' is not a square like e4"));
    let lower = text.trim().to_ascii_lowercase();
    let &[file @ b'a'..=b'h', rank @ b'1'..=b'8'] = lower.as_bytes() else {
        return Err(bad());
    };
    Coordinate::new((file - b'a') as i8, (rank - b'1') as i8).map_err(|_| bad())
}

/// Parses a promotion letter: `q`, `r`, `b` or `n`.
pub fn parse_promotion(text: &str) -> GameResult<PieceKind> {
    let mut chars = text.trim().chars();
    let kind = match (chars.next(), chars.next()) {
        (Some(c), None) => PieceKind::from_letter(c),
        _ => None,
    };
    kind.filter(|k| k.is_promotion_target()).ok_or_else(|| {
        GameError::Parse(format!("'{}' is not a promotion piece (q, r, b, n)", text.trim()))
    })
}

/// Formats a move the way it is typed: `e2 e4` or `e7 e8 q`.
pub fn format_move(mv: &Move) -> String {
    match mv.promotion_choice.and_then(PieceKind::letter) {
        Some(letter) => format!("{} {} {letter}", mv.from, mv.to),
        None => format!("{} {}", mv.from, mv.to),
    }
}

#[cfg(test)]
#[path = "notation_tests.rs"]
mod notation_tests;
