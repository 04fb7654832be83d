use chess_core::ChessError;
use minimax_engine::EngineError;
use thiserror::Error;

/// Errors surfaced by the game session and its I/O layers.
#[derive(Error, Debug)]
pub enum GameError {
    #[error(transparent)]
    Chess(#[from] ChessError),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("invalid save file: {0}")]
    Save(#[from] serde_json::Error),

    /// User input that is not a command, square or promotion letter
    #[error("{0}")]
    Parse(String),
}

impl GameError {
    /// Errors that mean the board itself is broken; the game cannot go on.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            GameError::Chess(ChessError::NoKing { .. })
                | GameError::Engine(EngineError::Chess(ChessError::NoKing { .. }))
        )
    }
}

pub type GameResult<T> = Result<T, GameError>;
