//! Application state and logic.

use crate::input::{Command, command_for, move_cursor};
use crossterm::event::KeyCode;
use tictactoe::{GameErrorKind, Position, Session, View};
use tracing::{debug, info, instrument};

/// Whether the event loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep running.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// Main application state.
///
/// Owns exactly one game session and drives it one key press at a time.
#[derive(Debug)]
pub struct App {
    session: Session,
    cursor: Position,
    message: Option<String>,
}

impl App {
    /// Creates a new application with a fresh game.
    pub fn new() -> Self {
        Self {
            session: Session::new(),
            cursor: Position::Center,
            message: None,
        }
    }

    /// Gets the current session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// View model for rendering.
    pub fn view(&self) -> View {
        View::of(&self.session)
    }

    /// Gets the status line: a pending message, or the game status.
    pub fn status_message(&self) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| self.view().status_text())
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) -> Flow {
        let Some(command) = command_for(key) else {
            return Flow::Continue;
        };
        debug!(?command, "Handling command");

        match command {
            Command::Quit => return Flow::Quit,
            Command::Replay => self.replay(),
            Command::MoveCursor(key) => self.cursor = move_cursor(self.cursor, key),
            Command::PlayCursor => self.play(self.cursor),
            Command::Play(position) => {
                self.cursor = position;
                self.play(position);
            }
        }
        Flow::Continue
    }

    /// Plays a cell for the current player.
    ///
    /// Rejected moves are reported on the status line and otherwise ignored.
    fn play(&mut self, position: Position) {
        self.message = match self.session.apply_move(position.to_index()) {
            Ok(outcome) => {
                if outcome.evaluation.status.is_terminal() {
                    info!(status = %outcome.evaluation.status, "Game over");
                }
                None
            }
            Err(e) => Some(match e.kind() {
                GameErrorKind::CellOccupied(pos) => format!("{} is taken. Pick another cell.", pos),
                GameErrorKind::GameNotPlaying(_) => {
                    format!("{} Press 'r' to play again.", self.view().status_text())
                }
                other => format!("Invalid move: {}", other),
            }),
        };
    }

    /// Starts a new game.
    fn replay(&mut self) {
        debug!("Restarting game");
        self.session.reset();
        self.cursor = Position::Center;
        self.message = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
