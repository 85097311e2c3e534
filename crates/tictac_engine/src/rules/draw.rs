//! Draw detection logic for tic-tac-toe.

use super::win::check_winner;
use crate::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a draw.
#[instrument(level = "trace")]
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Checks if the board is a finished game with no winner.
#[instrument(level = "trace")]
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    #[test]
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.place(Position::Center, Player::X).unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        let mut board = Board::new();
        // X O X / O X X / O X O
        let marks = [
            Player::X, Player::O, Player::X,
            Player::O, Player::X, Player::X,
            Player::O, Player::X, Player::O,
        ];
        for (pos, player) in Position::ALL.into_iter().zip(marks) {
            board.place(pos, player).unwrap();
        }

        assert!(is_full(&board));
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        let mut board = Board::new();
        // X X X / O O X / X O O
        let marks = [
            Player::X, Player::X, Player::X,
            Player::O, Player::O, Player::X,
            Player::X, Player::O, Player::O,
        ];
        for (pos, player) in Position::ALL.into_iter().zip(marks) {
            board.place(pos, player).unwrap();
        }

        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
