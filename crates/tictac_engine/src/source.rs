//! Move sources: where a human seat's moves come from.

use super::{Board, EngineError, Player};
use std::collections::VecDeque;
use tracing::{debug, instrument};

/// Supplies raw moves for a human player.
///
/// The returned index is not trusted: the engine validates it and asks
/// again after `InvalidCell` or `CellOccupied`. Prompting and input
/// parsing are the source's own business.
pub trait MoveSource {
    /// Returns the cell index (0-8) the player wants to mark.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InputClosed` when no more input will arrive.
    fn request_move(&mut self, board: &Board, player: Player) -> Result<usize, EngineError>;
}

/// A source that plays back a fixed list of indices.
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    moves: VecDeque<usize>,
}

impl ScriptedSource {
    /// Creates a source that will return `moves` in order.
    pub fn new(moves: impl IntoIterator<Item = usize>) -> Self {
        Self {
            moves: moves.into_iter().collect(),
        }
    }

    /// Number of moves not yet played.
    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl MoveSource for ScriptedSource {
    #[instrument(skip(self, _board))]
    fn request_move(&mut self, _board: &Board, player: Player) -> Result<usize, EngineError> {
        let index = self.moves.pop_front().ok_or(EngineError::InputClosed)?;
        debug!(index, "Scripted move");
        Ok(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_source_plays_in_order_then_closes() {
        let board = Board::new();
        let mut source = ScriptedSource::new([4, 0]);
        assert_eq!(source.request_move(&board, Player::X), Ok(4));
        assert_eq!(source.remaining(), 1);
        assert_eq!(source.request_move(&board, Player::X), Ok(0));
        assert_eq!(source.request_move(&board, Player::X), Err(EngineError::InputClosed));
    }
}
