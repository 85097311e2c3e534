//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! `{P} action {Q}`. Preconditions are always checked; postconditions are
//! checked in debug builds.

use super::{Board, EngineError, GameSession, Move, Player, SessionState, Square};
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), EngineError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), EngineError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The session must still accept moves.
pub struct SessionOpen;

impl SessionOpen {
    /// Fails with `GameOver` once the session has finished.
    pub fn check(session: &GameSession) -> Result<(), EngineError> {
        if session.state().is_finished() {
            Err(EngineError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: It must be the player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Fails with `WrongPlayer` when the move's player is not on turn.
    pub fn check(mov: &Move, session: &GameSession) -> Result<(), EngineError> {
        match session.state() {
            SessionState::AwaitingMove(player) if player == mov.player => Ok(()),
            _ => Err(EngineError::WrongPlayer(mov.player)),
        }
    }
}

/// Precondition: The square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails with `CellOccupied` when the target square holds a mark.
    pub fn check(mov: &Move, session: &GameSession) -> Result<(), EngineError> {
        if session.board().is_empty(mov.position) {
            Ok(())
        } else {
            Err(EngineError::CellOccupied(mov.position))
        }
    }
}

/// Composite precondition: open session, player's turn, empty square.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(session))]
    pub fn check(mov: &Move, session: &GameSession) -> Result<(), EngineError> {
        SessionOpen::check(session)?;
        PlayersTurn::check(mov, session)?;
        SquareIsEmpty::check(mov, session)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Invariants
// ─────────────────────────────────────────────────────────────

/// Invariant: X and O counts differ by at most one.
pub struct BoardConsistent;

impl BoardConsistent {
    /// Checks the invariant.
    pub fn holds(board: &Board) -> bool {
        let x_count = board.count(Player::X);
        let o_count = board.count(Player::O);
        let valid = x_count.abs_diff(o_count) <= 1;
        if !valid {
            warn!(x_count, o_count, "Board consistency violated");
        }
        valid
    }
}

/// Invariant: History replays onto exactly the filled squares.
pub struct HistoryComplete;

impl HistoryComplete {
    /// Checks the invariant.
    pub fn holds(session: &GameSession) -> bool {
        let filled = session.board().occupied_count();
        let history_len = session.history().len();
        let matches_board = session
            .history()
            .iter()
            .all(|mov| session.board().get(mov.position) == Square::Occupied(mov.player));

        let valid = filled == history_len && matches_board;
        if !valid {
            warn!(filled, history_len, "History completeness violated");
        }
        valid
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions: session open, player's turn, square empty.
///
/// Postconditions: exactly one more square filled, counts consistent,
/// history consistent with the board.
pub struct MoveContract;

impl Contract<GameSession, Move> for MoveContract {
    fn pre(session: &GameSession, action: &Move) -> Result<(), EngineError> {
        LegalMove::check(action, session)
    }

    fn post(before: &GameSession, after: &GameSession) -> Result<(), EngineError> {
        let mut violations = Vec::new();
        if after.board().occupied_count() != before.board().occupied_count() + 1 {
            violations.push("exactly one square is filled per move");
        }
        if !BoardConsistent::holds(after.board()) {
            violations.push("mark counts differ by at most one");
        }
        if !HistoryComplete::holds(after) {
            violations.push("history matches the board");
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(EngineError::InvariantViolation(format!(
                "Postcondition failed: {}",
                violations.join("; ")
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_precondition_empty_square() {
        let session = GameSession::new();
        let action = Move::new(Player::X, Position::Center);
        assert!(MoveContract::pre(&session, &action).is_ok());
    }

    #[test]
    fn test_precondition_occupied_square() {
        let mut session = GameSession::new();
        session.try_apply_move(4).unwrap();

        let action = Move::new(Player::O, Position::Center);
        assert_eq!(
            MoveContract::pre(&session, &action),
            Err(EngineError::CellOccupied(Position::Center))
        );
    }

    #[test]
    fn test_precondition_wrong_turn() {
        let session = GameSession::new();
        let action = Move::new(Player::O, Position::Center);
        assert_eq!(
            MoveContract::pre(&session, &action),
            Err(EngineError::WrongPlayer(Player::O))
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = GameSession::new();
        let mut after = before.clone();
        after.try_apply_move(0).unwrap();
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = GameSession::new();
        let mut after = before.clone();
        after.try_apply_move(0).unwrap();
        after.board.place(Position::BottomRight, Player::O).unwrap();

        assert!(matches!(
            MoveContract::post(&before, &after),
            Err(EngineError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_board_consistency() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Player::X).unwrap();
        assert!(BoardConsistent::holds(&board));
        board.place(Position::TopCenter, Player::X).unwrap();
        assert!(!BoardConsistent::holds(&board));
    }
}
