//! View model for presentation layers.
//!
//! Front ends never read session internals or run game logic; they render
//! a [`View`] and translate user input into [`Session::apply_move`] and
//! [`Session::reset`] calls.

use crate::{GameStatus, Mark, Player, Position, Session, evaluate};
use serde::Serialize;
use tracing::instrument;

/// Rendering data for one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CellView {
    /// Which cell this is.
    pub position: Position,
    /// Mark shown in the cell.
    pub mark: Mark,
    /// Part of the winning line.
    pub highlighted: bool,
}

impl CellView {
    /// Marker classes for this cell: `"cross"`/`"circle"` for the mark,
    /// plus `"win"` when highlighted.
    pub fn classes(&self) -> Vec<&'static str> {
        let mut classes = Vec::with_capacity(2);
        match self.mark {
            Mark::Cross => classes.push("cross"),
            Mark::Circle => classes.push("circle"),
            Mark::Empty => {}
        }
        if self.highlighted {
            classes.push("win");
        }
        classes
    }
}

/// Everything a front end needs to draw the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct View {
    /// The 9 cells in index order.
    pub cells: [CellView; 9],
    /// Player to move.
    pub turn: Player,
    /// Game status.
    pub status: GameStatus,
    /// Whether the replay control should be shown.
    pub replay_visible: bool,
}

impl View {
    /// Builds the view for a session.
    #[instrument(skip(session))]
    pub fn of(session: &Session) -> Self {
        let win_positions = evaluate(session.board()).win_positions;
        let cells = Position::ALL.map(|position| CellView {
            position,
            mark: session.board().get(position),
            highlighted: win_positions.contains(position),
        });

        Self {
            cells,
            turn: session.turn(),
            status: session.status(),
            replay_visible: session.status().is_terminal(),
        }
    }

    /// One-line status text.
    pub fn status_text(&self) -> String {
        if let Some(winner) = self.status.winner() {
            return format!("Player {} wins!", winner);
        }
        match self.status {
            GameStatus::Ended => "Draw! The board is full.".to_string(),
            _ => format!("Player {}'s turn", self.turn),
        }
    }
}
