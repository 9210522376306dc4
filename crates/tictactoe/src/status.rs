//! Game status and evaluation results.

use crate::{GameError, Player, Position, rules::win::LINES};
use serde::{Deserialize, Serialize};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum GameStatus {
    /// Game is ongoing.
    #[serde(rename = "PLAYING")]
    #[strum(serialize = "PLAYING")]
    Playing,
    /// X completed a line.
    #[serde(rename = "X")]
    #[strum(serialize = "X")]
    CrossWin,
    /// O completed a line.
    #[serde(rename = "O")]
    #[strum(serialize = "O")]
    CircleWin,
    /// Board is full with no winner.
    #[serde(rename = "END")]
    #[strum(serialize = "END")]
    Ended,
}

impl GameStatus {
    /// Status for a win by the given player.
    pub fn won_by(player: Player) -> Self {
        match player {
            Player::Cross => GameStatus::CrossWin,
            Player::Circle => GameStatus::CircleWin,
        }
    }

    /// Returns true once no further moves are accepted.
    pub fn is_terminal(self) -> bool {
        self != GameStatus::Playing
    }

    /// Returns the winner if there is one.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::CrossWin => Some(Player::Cross),
            GameStatus::CircleWin => Some(Player::Circle),
            GameStatus::Playing | GameStatus::Ended => None,
        }
    }
}

/// The winning line, or nothing.
///
/// Either empty or exactly one of the 8 lines, in ascending index order.
/// Serialized as an array of board indices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "Vec<usize>", try_from = "Vec<usize>")]
pub struct WinPositions(Option<[Position; 3]>);

impl WinPositions {
    /// No winning line.
    pub fn none() -> Self {
        Self(None)
    }

    pub(crate) fn line(line: [Position; 3]) -> Self {
        Self(Some(line))
    }

    /// Returns the positions as a slice (empty when there is no win).
    pub fn as_slice(&self) -> &[Position] {
        match &self.0 {
            Some(line) => line,
            None => &[],
        }
    }

    /// Returns the board indices of the winning line.
    pub fn indices(&self) -> Vec<usize> {
        self.as_slice().iter().map(|p| p.to_index()).collect()
    }

    /// Returns true if there is no winning line.
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Checks whether the given position is part of the winning line.
    pub fn contains(&self, pos: Position) -> bool {
        self.as_slice().contains(&pos)
    }
}

impl From<WinPositions> for Vec<usize> {
    fn from(win: WinPositions) -> Self {
        win.indices()
    }
}

impl TryFrom<Vec<usize>> for WinPositions {
    type Error = GameError;

    fn try_from(indices: Vec<usize>) -> Result<Self, Self::Error> {
        if indices.is_empty() {
            return Ok(Self::none());
        }
        LINES
            .iter()
            .find(|line| line.iter().map(|p| p.to_index()).eq(indices.iter().copied()))
            .map(|line| Self::line(*line))
            .ok_or_else(|| {
                GameError::invalid_input(format!("{:?} is not a winning line", indices))
            })
    }
}

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    /// Overall status.
    pub status: GameStatus,
    /// Winning line; empty unless `status` is a win.
    pub win_positions: WinPositions,
}

impl Evaluation {
    /// Evaluation of a board where play continues.
    pub fn playing() -> Self {
        Self {
            status: GameStatus::Playing,
            win_positions: WinPositions::none(),
        }
    }
}
