//! Game session state machine.
//!
//! A session owns its board for one match. It starts in
//! `AwaitingMove(first player)` and ends in `Finished(outcome)`; a finished
//! session rejects every further move. A new match means a new session.

use super::contracts::{Contract, MoveContract};
use super::rules::evaluate;
use super::strategy::Strategy;
use super::{Board, EngineError, Move, Outcome, Player, Position, SessionState};
use tracing::{debug, info, instrument, warn};

/// One match of tic-tac-toe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    pub(crate) board: Board,
    state: SessionState,
    history: Vec<Move>,
}

impl GameSession {
    /// Creates a new session with X to move.
    pub fn new() -> Self {
        Self::starting_with(Player::X)
    }

    /// Creates a new session with `first` to move.
    #[instrument]
    pub fn starting_with(first: Player) -> Self {
        Self {
            board: Board::new(),
            state: SessionState::AwaitingMove(first),
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the player to move, or `None` once finished.
    pub fn to_move(&self) -> Option<Player> {
        match self.state {
            SessionState::AwaitingMove(player) => Some(player),
            SessionState::Finished(_) => None,
        }
    }

    /// Returns the outcome once finished.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.state {
            SessionState::AwaitingMove(_) => None,
            SessionState::Finished(outcome) => Some(outcome),
        }
    }

    /// Applies a raw move index for the player on turn.
    ///
    /// A rejected move leaves the session untouched, so the caller can
    /// simply ask again.
    ///
    /// # Errors
    ///
    /// - `GameOver` if the session has finished
    /// - `InvalidCell` if `index` is outside 0-8
    /// - `CellOccupied` if the square is taken
    #[instrument(skip(self), fields(state = ?self.state))]
    pub fn try_apply_move(&mut self, index: usize) -> Result<SessionState, EngineError> {
        let player = self.to_move().ok_or(EngineError::GameOver)?;
        let position = Position::from_index(index)?;
        self.apply_move(Move::new(player, position))
    }

    /// Applies a move, checking the move contract.
    ///
    /// # Errors
    ///
    /// Fails with the first violated precondition; in debug builds also
    /// with `InvariantViolation` if a postcondition does not hold.
    #[instrument(skip(self))]
    pub fn apply_move(&mut self, action: Move) -> Result<SessionState, EngineError> {
        #[cfg(debug_assertions)]
        let before = self.clone();

        MoveContract::pre(self, &action)?;

        self.board.place(action.position, action.player)?;
        self.history.push(action);

        self.state = match evaluate(&self.board).outcome() {
            Some(outcome) => {
                info!(%outcome, moves = self.history.len(), "Match finished");
                SessionState::Finished(outcome)
            }
            None => SessionState::AwaitingMove(action.player.opponent()),
        };

        #[cfg(debug_assertions)]
        MoveContract::post(&before, self)?;

        debug!(%action, state = ?self.state, "Move applied");
        Ok(self.state)
    }

    /// Lets a computer strategy pick and play the next move.
    ///
    /// The strategy gets the board for simulation only; the session checks
    /// it comes back unchanged before applying the chosen cell.
    ///
    /// # Errors
    ///
    /// - `GameOver` if the session has finished
    /// - `WrongPlayer` if the strategy plays the other mark
    /// - `BoardTampered` if the strategy did not restore the board; the
    ///   session is put back as it was before the call
    /// - any error from the strategy itself, such as `NoEmptyCells`
    #[instrument(skip(self, strategy), fields(difficulty = %strategy.difficulty()))]
    pub fn apply_strategy(&mut self, strategy: &mut dyn Strategy) -> Result<Position, EngineError> {
        let player = self.to_move().ok_or(EngineError::GameOver)?;
        if strategy.mark() != player {
            return Err(EngineError::WrongPlayer(strategy.mark()));
        }

        let snapshot = self.board.clone();
        let chosen = strategy.choose_move(&mut self.board);
        if self.board != snapshot {
            warn!(difficulty = %strategy.difficulty(), "Strategy left marks behind, restoring board");
            self.board = snapshot;
            return Err(EngineError::BoardTampered);
        }
        let position = chosen?;

        self.apply_move(Move::new(player, position))?;
        Ok(position)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
