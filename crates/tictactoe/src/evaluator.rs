//! Status evaluator: board in, status and winning line out.

use crate::{
    Board, Evaluation, GameError, GameStatus,
    rules::{is_full, winning_line},
};
use tracing::{debug, instrument};

/// Evaluates a board.
///
/// The first complete line in scan order decides a win. Without a win the
/// game has `Ended` if the board is full and is still `Playing` otherwise.
/// Pure and deterministic.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Evaluation {
    if let Some((player, win_positions)) = winning_line(board) {
        debug!(%player, positions = ?win_positions.indices(), "Winning line found");
        return Evaluation {
            status: GameStatus::won_by(player),
            win_positions,
        };
    }

    if is_full(board) {
        debug!("Board full without a winner");
        Evaluation {
            status: GameStatus::Ended,
            ..Evaluation::playing()
        }
    } else {
        Evaluation::playing()
    }
}

/// Evaluates a board given as primitive cell values (`""`, `"X"`, `"O"`).
///
/// # Errors
///
/// Returns an `InvalidInput` error if the values do not describe a board.
#[instrument(skip(cells), fields(len = cells.len()))]
pub fn evaluate_cells<S: AsRef<str>>(cells: &[S]) -> Result<Evaluation, GameError> {
    let board = Board::from_cells(cells)?;
    Ok(evaluate(&board))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_idempotent() {
        let board = Board::from_cells(&["X", "O", "", "", "X", "", "", "O", ""]).unwrap();
        assert_eq!(evaluate(&board), evaluate(&board));
        assert_eq!(evaluate(&board).status, GameStatus::Playing);
    }

    #[test]
    fn test_circle_column_win() {
        let eval = evaluate_cells(&["X", "O", "X", "", "O", "X", "", "O", ""]).unwrap();
        assert_eq!(eval.status, GameStatus::CircleWin);
        assert_eq!(eval.win_positions.indices(), vec![1, 4, 7]);
    }

    #[test]
    fn test_win_on_full_board_beats_draw() {
        let eval = evaluate_cells(&["X", "O", "X", "O", "X", "O", "O", "X", "X"]).unwrap();
        assert_eq!(eval.status, GameStatus::CrossWin);
        assert_eq!(eval.win_positions.indices(), vec![0, 4, 8]);
    }
}
