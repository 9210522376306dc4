//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are separated from
//! session storage so the evaluator can be called on any board.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, winning_line};
