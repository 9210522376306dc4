//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position, WinPositions};
use tracing::instrument;

/// The 8 winning lines, scanned in this order.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Finds the first complete line on the board.
///
/// Returns the owning player and the line's positions, or `None` if no
/// line holds three identical marks.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Player, WinPositions)> {
    LINES.iter().find_map(|&[a, b, c]| {
        let mark = board.get(a);
        let player = mark.player()?;
        (mark == board.get(b) && mark == board.get(c)).then(|| (player, WinPositions::line([a, b, c])))
    })
}
