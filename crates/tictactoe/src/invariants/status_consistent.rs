//! Status consistency invariant: stored status matches the board.

use super::Invariant;
use crate::{Session, evaluate};

/// Invariant: the session status equals the evaluation of its board.
pub struct StatusConsistentInvariant;

impl Invariant<Session> for StatusConsistentInvariant {
    fn holds(session: &Session) -> bool {
        evaluate(session.board()).status == session.status()
    }

    fn description() -> &'static str {
        "Session status matches the evaluated board"
    }
}
