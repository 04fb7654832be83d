//! JSON save file holding the board between sessions.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chess_core::{Board, BoardSnapshot};
use tracing::{debug, info};

use crate::error::GameResult;

#[derive(Debug, Clone)]
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes `board` as pretty JSON, replacing any earlier save.
    pub fn save(&self, board: &Board) -> GameResult<()> {
        let json = serde_json::to_string_pretty(&board.snapshot())?;
        fs::write(&self.path, json)?;
        debug!(path = %self.path.display(), "board saved");
        Ok(())
    }

    /// Loads the saved board. A missing or blank file means there is no
    /// game to resume.
    pub fn load(&self) -> GameResult<Option<Board>> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        if text.trim().is_empty() {
            return Ok(None);
        }
        let snapshot: BoardSnapshot = serde_json::from_str(&text)?;
        let board = Board::from_snapshot(&snapshot)?;
        info!(path = %self.path.display(), "resuming saved game");
        Ok(Some(board))
    }

    /// Forgets the saved game so the next start begins afresh.
    pub fn reset(&self) -> GameResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                info!(path = %self.path.display(), "save file reset");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
#[path = "storage_tests.rs"]
mod storage_tests;
