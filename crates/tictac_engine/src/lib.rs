//! Tic-tac-toe game engine.
//!
//! Board state, outcome evaluation, three computer opponents and the
//! session state machine that ties them together. The engine does no I/O:
//! human moves arrive through a [`MoveSource`] and results leave through
//! [`GameEvent`]s.
//!
//! # Architecture
//!
//! - **Board**: 3x3 grid of [`Square`]s addressed by [`Position`]
//! - **Rules**: [`rules::evaluate`] derives the [`GameStatus`]
//! - **Strategies**: [`RandomStrategy`], [`HeuristicStrategy`] and
//!   [`MinimaxStrategy`], selected through [`Difficulty`]
//! - **Session**: [`GameSession`] applies validated moves
//! - **Match**: [`Match`] alternates two [`Seat`]s until the game ends
//!
//! # Example
//!
//! ```
//! use tictac_engine::{Difficulty, Match, Outcome, ScriptedSource};
//!
//! # fn main() -> Result<(), tictac_engine::EngineError> {
//! let human = ScriptedSource::new([0, 2, 6, 8, 1, 3, 5, 7]);
//! let mut game = Match::human_vs_computer("Ada", human, Difficulty::Hard, None);
//! let outcome = game.run(|event| println!("{event:?}"))?;
//! assert_ne!(outcome.winner(), Some(tictac_engine::Player::X));
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod error;
mod orchestrator;
mod phases;
mod position;
pub mod rules;
mod session;
mod source;
mod strategy;
#[cfg(test)]
mod test_support;
mod types;

pub use action::Move;
pub use contracts::{
    BoardConsistent, Contract, HistoryComplete, LegalMove, MoveContract, PlayersTurn, SessionOpen,
    SquareIsEmpty,
};
pub use error::EngineError;
pub use orchestrator::{GameEvent, Match, Seat};
pub use phases::{Outcome, SessionState};
pub use position::Position;
pub use session::GameSession;
pub use source::{MoveSource, ScriptedSource};
pub use strategy::{
    Difficulty, HeuristicStrategy, MinimaxStrategy, RandomStrategy, Strategy, find_winning_cell,
};
pub use types::{Board, GameStatus, Player, SimulatedMove, Square};
