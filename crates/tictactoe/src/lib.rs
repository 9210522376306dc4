//! Tic-tac-toe game core.
//!
//! A pure status evaluator and a caller-owned move/turn state machine.
//!
//! # Architecture
//!
//! - **Evaluator**: [`evaluate`] maps a [`Board`] to an [`Evaluation`]
//!   (status plus winning positions). No side effects.
//! - **Session**: [`Session`] holds board, turn and status. Moves go
//!   through [`Session::apply_move`]; [`Session::reset`] is the replay control.
//! - **Presentation**: [`View`] is the data a front end renders.
//!
//! # Example
//!
//! ```
//! use tictactoe::{GameStatus, Session};
//!
//! let mut session = Session::new();
//! for idx in [0, 3, 1, 4, 2] {
//!     session.apply_move(idx)?;
//! }
//! assert_eq!(session.status(), GameStatus::CrossWin);
//! # Ok::<(), tictactoe::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod error;
mod evaluator;
pub mod invariants;
mod position;
mod presentation;
pub mod rules;
mod session;
mod status;
mod types;

pub use action::Move;
pub use error::{GameError, GameErrorKind};
pub use evaluator::{evaluate, evaluate_cells};
pub use position::Position;
pub use presentation::{CellView, View};
pub use session::{MoveOutcome, Session, apply_move, reset_session};
pub use status::{Evaluation, GameStatus, WinPositions};
pub use types::{Board, CELL_COUNT, Mark, Player};
