//! Error types for the game core.

use crate::{GameStatus, Position};
use derive_more::{Display, Error};
use tracing::instrument;

/// What went wrong.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum GameErrorKind {
    /// Malformed board passed in from outside (wrong length or unknown value).
    #[display("Invalid input: {}", _0)]
    InvalidInput(String),

    /// Move index outside 0-8.
    #[display("Index {} is out of bounds (must be 0-8)", _0)]
    IndexOutOfBounds(usize),

    /// Move targets a cell that already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Position),

    /// Move attempted after the game reached a terminal status.
    #[display("Game is not playing (status: {:?})", _0)]
    GameNotPlaying(GameStatus),
}

/// Game error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("{} at {}:{}", kind, file, line)]
pub struct GameError {
    /// Error kind.
    pub kind: GameErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl GameError {
    /// Creates a new game error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: GameErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the error kind.
    pub fn kind(&self) -> &GameErrorKind {
        &self.kind
    }

    /// Shorthand for an [`GameErrorKind::InvalidInput`] error.
    #[track_caller]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(GameErrorKind::InvalidInput(message.into()))
    }
}

impl From<GameErrorKind> for GameError {
    #[track_caller]
    fn from(kind: GameErrorKind) -> Self {
        Self::new(kind)
    }
}
