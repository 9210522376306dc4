//! Game session: the move/turn state machine.

use crate::{
    Board, Evaluation, GameError, GameErrorKind, GameStatus, Move, Player, Position, evaluate,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// One game in progress: board, turn and status.
///
/// Owned by the caller. `Playing` is the only state that accepts moves;
/// the three terminal states are left only through [`Session::reset`].
/// Deserialization replays the recorded history, so only sessions the
/// state machine can reach are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "SessionRecord")]
pub struct Session {
    pub(crate) board: Board,
    pub(crate) turn: Player,
    pub(crate) status: GameStatus,
    pub(crate) history: Vec<Move>,
}

/// Unvalidated wire form of a [`Session`].
#[derive(Debug, Deserialize)]
struct SessionRecord {
    board: Board,
    turn: Player,
    status: GameStatus,
    history: Vec<Move>,
}

impl TryFrom<SessionRecord> for Session {
    type Error = GameError;

    fn try_from(record: SessionRecord) -> Result<Self, Self::Error> {
        use crate::invariants::{InvariantSet, SessionInvariants};

        let claimed = Session {
            board: record.board,
            turn: record.turn,
            status: record.status,
            history: record.history,
        };
        SessionInvariants::check_all(&claimed).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            GameError::invalid_input(format!("Inconsistent session: {}", descriptions))
        })?;

        let mut replayed = Session::new();
        for mov in &claimed.history {
            replayed.apply_move(mov.position.to_index()).map_err(|e| {
                GameError::invalid_input(format!("Unreachable session history at {}: {}", mov, e.kind))
            })?;
        }
        if replayed != claimed {
            return Err(GameError::invalid_input("Session does not match its history"));
        }
        Ok(claimed)
    }
}

/// What an accepted move produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// The move that was applied.
    pub mov: Move,
    /// Evaluation of the board after the move.
    pub evaluation: Evaluation,
}

impl Session {
    /// Creates a fresh session: empty board, Cross to move, playing.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            turn: Player::Cross,
            status: GameStatus::Playing,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player to move.
    pub fn turn(&self) -> Player {
        self.turn
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the accepted moves in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Places the current player's mark at `index` (0-8).
    ///
    /// On success the turn flips and the status is re-evaluated; the
    /// returned outcome carries the winning positions when the move ended
    /// the game. A rejected move leaves the session untouched.
    ///
    /// # Errors
    ///
    /// - `IndexOutOfBounds` if `index` is not in 0-8
    /// - `CellOccupied` if the cell already holds a mark
    /// - `GameNotPlaying` if the game has already been won (a drawn board
    ///   has no empty cell, so it always reports `CellOccupied`)
    #[instrument(skip(self), fields(turn = %self.turn, status = %self.status))]
    pub fn apply_move(&mut self, index: usize) -> Result<MoveOutcome, GameError> {
        let position = Position::try_from(index).inspect_err(|_| {
            warn!(index, "Move index out of bounds");
        })?;

        if !self.board.is_empty(position) {
            warn!(%position, "Cell already occupied");
            return Err(GameError::new(GameErrorKind::CellOccupied(position)));
        }

        if self.status.is_terminal() {
            warn!("Move rejected, game is over");
            return Err(GameError::new(GameErrorKind::GameNotPlaying(self.status)));
        }

        let mov = Move::new(self.turn, position);
        self.board.set(position, self.turn.mark());
        self.history.push(mov);
        self.turn = self.turn.opponent();

        let evaluation = evaluate(&self.board);
        self.status = evaluation.status;
        debug!(%mov, status = %self.status, "Move applied");

        if self.status.is_terminal() {
            info!(
                status = %self.status,
                win_positions = ?evaluation.win_positions.indices(),
                moves = self.history.len(),
                "Game finished"
            );
        }

        #[cfg(debug_assertions)]
        self.debug_check_invariants();

        Ok(MoveOutcome { mov, evaluation })
    }

    /// Resets this session to a fresh game (the replay control).
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!(previous_status = %self.status, "Resetting session");
        *self = Self::new();
    }

    #[cfg(debug_assertions)]
    fn debug_check_invariants(&self) {
        use crate::invariants::{InvariantSet, SessionInvariants};

        if let Err(violations) = SessionInvariants::check_all(self) {
            panic!("Session invariants violated: {:?}", violations);
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns a fresh session.
pub fn reset_session() -> Session {
    Session::new()
}

/// Applies a move to a caller-owned session. See [`Session::apply_move`].
pub fn apply_move(session: &mut Session, index: usize) -> Result<MoveOutcome, GameError> {
    session.apply_move(index)
}
