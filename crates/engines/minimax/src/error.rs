use chess_core::ChessError;
use thiserror::Error;

/// Errors returned by the minimax engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error(transparent)]
    Chess(#[from] ChessError),

    #[error("difficulty must be between 1 and 4, got {0}")]
    InvalidDifficulty(u8),
}

pub type EngineResult<T> = Result<T, EngineError>;
