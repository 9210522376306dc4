//! Core domain types for tic-tac-toe.

use crate::{GameError, Position};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Value held by a single cell.
///
/// The primitive forms are `""`, `"X"` and `"O"`, the same strings the
/// presentation layer hands over.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum Mark {
    /// Nobody has played here.
    #[default]
    #[serde(rename = "")]
    #[strum(serialize = "")]
    Empty,
    /// X.
    #[serde(rename = "X")]
    #[strum(serialize = "X")]
    Cross,
    /// O.
    #[serde(rename = "O")]
    #[strum(serialize = "O")]
    Circle,
}

impl Mark {
    /// Returns the player owning this mark, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Mark::Empty => None,
            Mark::Cross => Some(Player::Cross),
            Mark::Circle => Some(Player::Circle),
        }
    }
}

/// Player in the game. Also used as the turn indicator.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display, strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    #[serde(rename = "X")]
    #[strum(serialize = "X")]
    Cross,
    /// Player O (goes second).
    #[serde(rename = "O")]
    #[strum(serialize = "O")]
    Circle,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Cross => Player::Circle,
            Player::Circle => Player::Cross,
        }
    }

    /// Returns the mark this player writes on the board.
    pub fn mark(self) -> Mark {
        match self {
            Player::Cross => Mark::Cross,
            Player::Circle => Mark::Circle,
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Always exactly 9 cells. Boards built from untrusted input go through
/// [`Board::from_cells`] or `TryFrom<Vec<Mark>>`, which reject any other
/// shape; serde deserialization uses the same path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Mark>", into = "Vec<Mark>")]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Mark; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Mark::Empty; CELL_COUNT],
        }
    }

    /// Builds a board from primitive cell values (`""`, `"X"`, `"O"`).
    ///
    /// # Errors
    ///
    /// Returns an `InvalidInput` error if there are not exactly 9 values or
    /// any value is not one of the three recognised strings.
    #[instrument(skip(values), fields(len = values.len()))]
    pub fn from_cells<S: AsRef<str>>(values: &[S]) -> Result<Self, GameError> {
        let marks = values
            .iter()
            .enumerate()
            .map(|(idx, value)| {
                Mark::from_str(value.as_ref()).map_err(|_| {
                    GameError::invalid_input(format!(
                        "Unknown cell value {:?} at index {}",
                        value.as_ref(),
                        idx
                    ))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::try_from(marks)
    }

    /// Gets the mark at the given position.
    pub fn get(&self, pos: Position) -> Mark {
        self.cells[pos.to_index()]
    }

    /// Sets the mark at the given position.
    pub fn set(&mut self, pos: Position, mark: Mark) {
        self.cells[pos.to_index()] = mark;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Mark::Empty
    }

    /// Checks if every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|m| *m != Mark::Empty)
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Mark; CELL_COUNT] {
        &self.cells
    }
}

impl From<[Mark; CELL_COUNT]> for Board {
    fn from(cells: [Mark; CELL_COUNT]) -> Self {
        Self { cells }
    }
}

impl TryFrom<Vec<Mark>> for Board {
    type Error = GameError;

    #[track_caller]
    fn try_from(marks: Vec<Mark>) -> Result<Self, Self::Error> {
        let len = marks.len();
        let cells: [Mark; CELL_COUNT] = marks.try_into().map_err(|_| {
            GameError::invalid_input(format!("Board must have {} cells, got {}", CELL_COUNT, len))
        })?;
        Ok(Self { cells })
    }
}

impl From<Board> for Vec<Mark> {
    fn from(board: Board) -> Self {
        board.cells.to_vec()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, chunk) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
                writeln!(f, "-+-+-")?;
            }
            for (col, mark) in chunk.iter().enumerate() {
                if col > 0 {
                    write!(f, "|")?;
                }
                match mark {
                    Mark::Empty => write!(f, "{}", row * 3 + col + 1)?,
                    other => write!(f, "{}", other)?,
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameErrorKind;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        assert!(Position::ALL.iter().all(|p| board.is_empty(*p)));
        assert!(!board.is_full());
    }

    #[test]
    fn test_from_cells_parses_primitive_values() {
        let board = Board::from_cells(&["X", "O", "", "", "X", "", "", "", "O"]).unwrap();
        assert_eq!(board.get(Position::TopLeft), Mark::Cross);
        assert_eq!(board.get(Position::TopCenter), Mark::Circle);
        assert_eq!(board.get(Position::TopRight), Mark::Empty);
        assert_eq!(board.get(Position::BottomRight), Mark::Circle);
    }

    #[test]
    fn test_from_cells_rejects_wrong_length() {
        let err = Board::from_cells(&["X", "O"]).unwrap_err();
        assert!(matches!(err.kind(), GameErrorKind::InvalidInput(_)));
    }

    #[test]
    fn test_from_cells_rejects_unknown_value() {
        let err = Board::from_cells(&["X", "O", "", "", "Z", "", "", "", ""]).unwrap_err();
        assert!(matches!(err.kind(), GameErrorKind::InvalidInput(msg) if msg.contains("index 4")));
    }

    #[test]
    fn test_full_board() {
        let board = Board::from([Mark::Cross; CELL_COUNT]);
        assert!(board.is_full());
    }

    #[test]
    fn test_display_grid() {
        let mut board = Board::new();
        board.set(Position::Center, Mark::Cross);
        assert_eq!(board.to_string(), "1|2|3\n-+-+-\n4|X|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_player_opponent_and_mark() {
        assert_eq!(Player::Cross.opponent(), Player::Circle);
        assert_eq!(Player::Circle.opponent(), Player::Cross);
        assert_eq!(Player::Circle.mark(), Mark::Circle);
        assert_eq!(Mark::Cross.player(), Some(Player::Cross));
        assert_eq!(Mark::Empty.player(), None);
    }
}
