//! Hard opponent: exhaustive minimax.

use super::{Difficulty, Strategy};
use crate::rules::evaluate;
use crate::{Board, EngineError, GameStatus, Player, Position};
use tracing::{debug, instrument, trace};

/// Score of a win reached in zero plies; each ply costs one point.
const WIN_SCORE: i32 = 10;

/// Searches the whole game tree below the current board.
///
/// Wins score `10 - depth`, losses `depth - 10`, draws `0`, where depth
/// counts plies from the board handed to [`Strategy::choose_move`]. Faster
/// wins and slower losses are therefore preferred. Ties between cells go
/// to the lowest index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_new::new)]
pub struct MinimaxStrategy {
    mark: Player,
}

impl MinimaxStrategy {
    /// Scores every empty cell, in ascending index order.
    ///
    /// # Errors
    ///
    /// Propagates simulation failures, which cannot occur on empty cells.
    #[instrument(skip(self, board), fields(mark = %self.mark))]
    pub fn score_moves(&self, board: &mut Board) -> Result<Vec<(Position, i32)>, EngineError> {
        let mut scores = Vec::new();
        for pos in board.empty_cells() {
            let mut sim = board.simulate(pos, self.mark)?;
            let score = self.minimax(&mut sim, 1, false)?;
            trace!(position = ?pos, score, "Scored candidate");
            scores.push((pos, score));
        }
        Ok(scores)
    }

    fn minimax(&self, board: &mut Board, depth: i32, maximizing: bool) -> Result<i32, EngineError> {
        match evaluate(board) {
            GameStatus::Won(player) if player == self.mark => return Ok(WIN_SCORE - depth),
            GameStatus::Won(_) => return Ok(depth - WIN_SCORE),
            GameStatus::Draw => return Ok(0),
            GameStatus::InProgress => {}
        }

        let player = if maximizing {
            self.mark
        } else {
            self.mark.opponent()
        };
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for pos in board.empty_cells() {
            let mut sim = board.simulate(pos, player)?;
            let score = self.minimax(&mut sim, depth + 1, !maximizing)?;
            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }

        Ok(best)
    }
}

impl Strategy for MinimaxStrategy {
    #[instrument(skip(self, board), fields(mark = %self.mark))]
    fn choose_move(&mut self, board: &mut Board) -> Result<Position, EngineError> {
        let mut best: Option<(Position, i32)> = None;
        for (pos, score) in self.score_moves(board)? {
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((pos, score)),
            }
        }

        let (pos, score) = best.ok_or(EngineError::NoEmptyCells)?;
        debug!(position = ?pos, score, "Minimax choice");
        Ok(pos)
    }

    fn mark(&self) -> Player {
        self.mark
    }

    fn difficulty(&self) -> Difficulty {
        Difficulty::Hard
    }
}
