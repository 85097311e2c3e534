//! Outcome evaluation: win, draw or still in progress.

use super::{check_winner, is_full};
use crate::{Board, GameStatus};
use tracing::instrument;

/// Evaluates the board.
///
/// A completed line wins (first line in rows, columns, diagonals order),
/// otherwise a full board is a draw, otherwise the game goes on.
#[instrument(level = "trace")]
pub fn evaluate(board: &Board) -> GameStatus {
    if let Some(winner) = check_winner(board) {
        return GameStatus::Won(winner);
    }
    if is_full(board) {
        return GameStatus::Draw;
    }
    GameStatus::InProgress
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::board_from_rows;
    use crate::Player;

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::new()), GameStatus::InProgress);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = board_from_rows("XOX XOO OXX");
        assert_eq!(evaluate(&board), GameStatus::Draw);
    }

    #[test]
    fn test_win_on_last_square_is_not_draw() {
        let board = board_from_rows("XOX OXO OXX");
        assert_eq!(evaluate(&board), GameStatus::Won(Player::X));
    }

    #[test]
    fn test_column_win() {
        let board = board_from_rows("XO_ XO_ _O_");
        assert_eq!(evaluate(&board), GameStatus::Won(Player::O));
        assert!(evaluate(&board).is_terminal());
    }
}
