//! Easy opponent: uniform random choice.

use super::{Difficulty, Strategy};
use crate::{Board, EngineError, Player, Position};
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Picks uniformly among the empty cells, with an injected random source.
#[derive(Debug, Clone)]
pub struct RandomStrategy<R = StdRng> {
    mark: Player,
    rng: R,
}

impl RandomStrategy<StdRng> {
    /// Creates a reproducible strategy from a seed.
    pub fn seeded(mark: Player, seed: u64) -> Self {
        Self::with_rng(mark, StdRng::seed_from_u64(seed))
    }

    /// Creates a strategy seeded from the thread-local generator.
    pub fn from_entropy(mark: Player) -> Self {
        Self::seeded(mark, rand::random::<u64>())
    }
}

impl<R: Rng> RandomStrategy<R> {
    /// Creates a strategy drawing from `rng`.
    pub fn with_rng(mark: Player, rng: R) -> Self {
        Self { mark, rng }
    }

    /// Picks a random empty cell without touching the board.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::NoEmptyCells` on a full board.
    #[instrument(skip(self), fields(mark = %self.mark))]
    pub fn pick(&mut self, board: &Board) -> Result<Position, EngineError> {
        let cells = board.empty_cells();
        let choice = cells
            .choose(&mut self.rng)
            .copied()
            .ok_or(EngineError::NoEmptyCells)?;
        debug!(position = ?choice, options = cells.len(), "Random choice");
        Ok(choice)
    }
}

impl<R: Rng> Strategy for RandomStrategy<R> {
    fn choose_move(&mut self, board: &mut Board) -> Result<Position, EngineError> {
        self.pick(board)
    }

    fn mark(&self) -> Player {
        self.mark
    }

    fn difficulty(&self) -> Difficulty {
        Difficulty::Easy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_same_seed_same_choices() {
        let board = Board::new();
        let mut a = RandomStrategy::seeded(Player::O, 99);
        let mut b = RandomStrategy::seeded(Player::O, 99);
        for _ in 0..20 {
            assert_eq!(a.pick(&board), b.pick(&board));
        }
    }

    #[test]
    fn test_only_picks_empty_cells() {
        let mut board = Board::new();
        for pos in [Position::TopLeft, Position::Center, Position::BottomRight, Position::TopRight] {
            board.place(pos, Player::X).unwrap();
        }
        let mut strategy = RandomStrategy::seeded(Player::O, 3);
        for _ in 0..50 {
            let pos = strategy.choose_move(&mut board).unwrap();
            assert!(board.is_empty(pos));
        }
    }

    #[test]
    fn test_reaches_every_empty_cell() {
        let board = Board::new();
        let mut strategy = RandomStrategy::seeded(Player::X, 2024);
        let seen: HashSet<Position> = (0..500).map(|_| strategy.pick(&board).unwrap()).collect();
        assert_eq!(seen.len(), 9);
    }

    #[test]
    fn test_single_empty_cell_is_forced() {
        let mut board = Board::new();
        for pos in Position::ALL.into_iter().take(8) {
            board.place(pos, Player::X).unwrap();
        }
        let mut strategy = RandomStrategy::seeded(Player::O, 0);
        assert_eq!(strategy.pick(&board), Ok(Position::BottomRight));
    }
}
