//! Medium opponent: one-ply lookahead.

use super::{Difficulty, RandomStrategy, Strategy};
use crate::rules::check_winner;
use crate::{Board, EngineError, Player, Position};
use rand::Rng;
use rand::rngs::StdRng;
use tracing::{debug, instrument};

/// Returns the first empty cell (ascending index) that completes a line
/// for `player`, if any.
///
/// # Errors
///
/// Only fails if simulation hits an occupied square, which `empty_cells`
/// rules out.
#[instrument(level = "trace", skip(board))]
pub fn find_winning_cell(board: &mut Board, player: Player) -> Result<Option<Position>, EngineError> {
    for pos in board.empty_cells() {
        let sim = board.simulate(pos, player)?;
        if check_winner(&sim) == Some(player) {
            return Ok(Some(pos));
        }
    }
    Ok(None)
}

/// Takes an immediate win, else blocks the opponent's immediate win,
/// else falls back to a random move.
///
/// Both passes scan cells in ascending index order, which decides the
/// pick when several cells win or block.
#[derive(Debug, Clone)]
pub struct HeuristicStrategy<R = StdRng> {
    mark: Player,
    fallback: RandomStrategy<R>,
}

impl<R: Rng> HeuristicStrategy<R> {
    /// Creates a heuristic strategy with the given random fallback.
    pub fn new(mark: Player, fallback: RandomStrategy<R>) -> Self {
        Self { mark, fallback }
    }
}

impl<R: Rng> Strategy for HeuristicStrategy<R> {
    #[instrument(skip(self, board), fields(mark = %self.mark))]
    fn choose_move(&mut self, board: &mut Board) -> Result<Position, EngineError> {
        if board.is_full() {
            return Err(EngineError::NoEmptyCells);
        }

        if let Some(pos) = find_winning_cell(board, self.mark)? {
            debug!(position = ?pos, "Taking the win");
            return Ok(pos);
        }

        if let Some(pos) = find_winning_cell(board, self.mark.opponent())? {
            debug!(position = ?pos, "Blocking the opponent");
            return Ok(pos);
        }

        self.fallback.pick(board)
    }

    fn mark(&self) -> Player {
        self.mark
    }

    fn difficulty(&self) -> Difficulty {
        Difficulty::Medium
    }
}
