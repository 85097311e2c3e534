//! Board fixtures shared by the unit tests.

use crate::{Board, Player, Position};

/// Builds a board from a picture like `"XX_ OO_ ___"`, read in index order.
///
/// Whitespace is skipped; anything other than `X` or `O` is an empty cell.
pub(crate) fn board_from_rows(rows: &str) -> Board {
    let mut board = Board::new();
    let cells = rows.chars().filter(|c| !c.is_whitespace());
    for (pos, c) in Position::ALL.into_iter().zip(cells) {
        match c {
            'X' => board.place(pos, Player::X).unwrap(),
            'O' => board.place(pos, Player::O).unwrap(),
            _ => {}
        }
    }
    board
}
