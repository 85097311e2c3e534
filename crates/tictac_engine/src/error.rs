//! Engine error taxonomy.

use super::position::Position;
use super::types::Player;

/// Error that can occur when addressing the board or applying a move.
///
/// `InvalidCell` and `CellOccupied` are shaped by user input and are
/// recoverable: the caller re-requests a move. Everything else signals a
/// broken precondition inside the engine or its collaborators.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum EngineError {
    /// Move index outside 0-8.
    #[display("Cell {} is outside the board (expected 0-8)", _0)]
    InvalidCell(usize),

    /// The target square already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(Position),

    /// A move was submitted for the player who is not on turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(Player),

    /// A strategy was asked to move on a full board.
    #[display("No empty cells left to choose from")]
    NoEmptyCells,

    /// The session already reached a terminal outcome.
    #[display("Game is already over")]
    GameOver,

    /// A strategy returned the board in a different state than it received it.
    #[display("Strategy left the board modified after simulation")]
    BoardTampered,

    /// A postcondition failed after applying a move.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),

    /// A move source has no more input to offer.
    #[display("Move source closed before supplying a move")]
    InputClosed,
}

impl EngineError {
    /// Returns true when the caller should simply ask for another move.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, EngineError::InvalidCell(_) | EngineError::CellOccupied(_))
    }
}

impl std::error::Error for EngineError {}
