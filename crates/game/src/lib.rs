//! Chess against the computer from the terminal.
//!
//! The session owns the board and the move history; everything else here is
//! a thin I/O layer: command parsing, text rendering, the TOML config and
//! the JSON save file.

pub mod config;
pub mod error;
pub mod notation;
pub mod render;
pub mod session;
pub mod storage;

pub use config::GameConfig;
pub use error::{GameError, GameResult};
pub use notation::{format_move, parse_command, parse_coordinate, parse_promotion, Command};
pub use render::render_board;
pub use session::Game;
pub use storage::Storage;
