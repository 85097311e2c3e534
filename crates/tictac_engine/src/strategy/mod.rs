//! Computer opponents.
//!
//! Every strategy borrows the board mutably while it thinks and must hand
//! it back exactly as it found it. Simulated moves go through
//! [`Board::simulate`], whose guard clears the square on drop.

mod heuristic;
mod minimax;
mod random;

pub use heuristic::{HeuristicStrategy, find_winning_cell};
pub use minimax::MinimaxStrategy;
pub use random::RandomStrategy;

use crate::{Board, EngineError, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A computer player.
pub trait Strategy {
    /// Chooses an empty cell for this strategy's mark.
    ///
    /// The board is only borrowed for simulation; it is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::NoEmptyCells` on a full board.
    fn choose_move(&mut self, board: &mut Board) -> Result<Position, EngineError>;

    /// The mark this strategy plays.
    fn mark(&self) -> Player;

    /// The difficulty tier this strategy implements.
    fn difficulty(&self) -> Difficulty;
}

/// Computer opponent difficulty, fixed for the lifetime of a session.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Uniformly random moves.
    Easy,
    /// Takes immediate wins, blocks immediate threats, otherwise random.
    #[default]
    Medium,
    /// Exhaustive minimax search; never loses.
    Hard,
}

impl Difficulty {
    /// Short description of how this tier plays.
    pub fn describe(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Random moves",
            Difficulty::Medium => "Blocks and wins",
            Difficulty::Hard => "Strategic search",
        }
    }

    /// Builds the strategy for this tier playing `mark`.
    ///
    /// `seed` fixes the random source of the easy and medium tiers; without
    /// one they draw a fresh seed.
    #[instrument]
    pub fn strategy(self, mark: Player, seed: Option<u64>) -> Box<dyn Strategy> {
        let random = match seed {
            Some(seed) => RandomStrategy::seeded(mark, seed),
            None => RandomStrategy::from_entropy(mark),
        };
        match self {
            Difficulty::Easy => Box::new(random),
            Difficulty::Medium => Box::new(HeuristicStrategy::new(mark, random)),
            Difficulty::Hard => Box::new(MinimaxStrategy::new(mark)),
        }
    }
}
