//! Monotonic board invariant: cells never change once set.

use super::Invariant;
use crate::{Board, Session};

/// Invariant: board cells are never overwritten.
///
/// Replaying the move history onto an empty board must hit only empty
/// cells and reproduce the current board exactly.
pub struct MonotonicBoardInvariant;

impl Invariant<Session> for MonotonicBoardInvariant {
    fn holds(session: &Session) -> bool {
        let mut reconstructed = Board::new();

        for mov in session.history() {
            if !reconstructed.is_empty(mov.position) {
                return false;
            }
            reconstructed.set(mov.position, mov.player.mark());
        }

        reconstructed == *session.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Mark, Move, Player, Position};

    #[test]
    fn test_fresh_session_holds() {
        assert!(MonotonicBoardInvariant::holds(&Session::new()));
    }

    #[test]
    fn test_moves_hold() {
        let mut session = Session::new();
        for idx in [0, 4, 2, 6] {
            session.apply_move(idx).unwrap();
        }
        assert!(MonotonicBoardInvariant::holds(&session));
    }

    #[test]
    fn test_overwritten_cell_violates() {
        let mut session = Session::new();
        session.apply_move(4).unwrap();
        session.board.set(Position::Center, Mark::Circle);
        assert!(!MonotonicBoardInvariant::holds(&session));
    }

    #[test]
    fn test_duplicate_history_entry_violates() {
        let mut session = Session::new();
        session.apply_move(4).unwrap();
        session.history.push(Move::new(Player::Circle, Position::Center));
        assert!(!MonotonicBoardInvariant::holds(&session));
    }
}
