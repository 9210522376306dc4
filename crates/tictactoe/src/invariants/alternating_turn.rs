//! Alternating turn invariant: X, O, X, O, ...

use super::Invariant;
use crate::{Player, Session};

/// Invariant: players alternate turns, Cross first.
///
/// The player to move must match the parity of the history length.
pub struct AlternatingTurnInvariant;

impl Invariant<Session> for AlternatingTurnInvariant {
    fn holds(session: &Session) -> bool {
        let history = session.history();

        if history.first().is_some_and(|m| m.player != Player::Cross) {
            return false;
        }

        if history.windows(2).any(|w| w[0].player == w[1].player) {
            return false;
        }

        let expected_next = if history.len() % 2 == 0 {
            Player::Cross
        } else {
            Player::Circle
        };

        session.turn() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, Position};

    #[test]
    fn test_fresh_session_holds() {
        assert!(AlternatingTurnInvariant::holds(&Session::new()));
    }

    #[test]
    fn test_alternating_sequence_holds() {
        let mut session = Session::new();
        for idx in [0, 4, 2, 6, 8] {
            session.apply_move(idx).unwrap();
            assert!(AlternatingTurnInvariant::holds(&session));
        }
        assert_eq!(session.turn(), Player::Circle);
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut session = Session::new();
        session.history = vec![
            Move::new(Player::Cross, Position::TopLeft),
            Move::new(Player::Cross, Position::Center),
        ];
        assert!(!AlternatingTurnInvariant::holds(&session));
    }
}
