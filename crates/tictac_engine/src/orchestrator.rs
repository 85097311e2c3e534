//! Match orchestration between two seats.

use super::source::MoveSource;
use super::strategy::{Difficulty, Strategy};
use super::{Board, EngineError, GameSession, Outcome, Player, Position, SessionState};
use tracing::{debug, info, instrument, warn};

/// Events reported to the frontend while a match runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A fresh board is ready; `first` moves first.
    MatchStarted {
        /// Empty board.
        board: Board,
        /// Player to move first.
        first: Player,
    },
    /// A move was applied.
    MoveMade {
        /// Mark that was placed.
        player: Player,
        /// Name of the seat that moved.
        name: String,
        /// Cell that was marked.
        position: Position,
        /// Difficulty of the computer seat, `None` for humans.
        difficulty: Option<Difficulty>,
        /// Board after the move.
        board: Board,
    },
    /// A human move was rejected and will be requested again.
    MoveRejected {
        /// Player whose move was rejected.
        player: Player,
        /// Why it was rejected.
        error: EngineError,
    },
    /// The match ended.
    GameOver {
        /// Final outcome.
        outcome: Outcome,
        /// Name of the winning seat, if any.
        winner: Option<String>,
        /// Final board.
        board: Board,
    },
}

/// One side of a match.
pub enum Seat {
    /// A human whose moves come from a move source.
    Human {
        /// Display name.
        name: String,
        /// Where moves come from.
        source: Box<dyn MoveSource>,
    },
    /// A computer opponent.
    Computer {
        /// Display name.
        name: String,
        /// How it picks moves.
        strategy: Box<dyn Strategy>,
    },
}

impl Seat {
    /// Creates a human seat.
    pub fn human(name: impl Into<String>, source: impl MoveSource + 'static) -> Self {
        Seat::Human {
            name: name.into(),
            source: Box::new(source),
        }
    }

    /// Creates a computer seat.
    pub fn computer(name: impl Into<String>, strategy: Box<dyn Strategy>) -> Self {
        Seat::Computer {
            name: name.into(),
            strategy,
        }
    }

    /// Returns the seat's display name.
    pub fn name(&self) -> &str {
        match self {
            Seat::Human { name, .. } | Seat::Computer { name, .. } => name,
        }
    }
}

impl std::fmt::Debug for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Seat::Human { name, .. } => f.debug_struct("Human").field("name", name).finish(),
            Seat::Computer { name, strategy } => f
                .debug_struct("Computer")
                .field("name", name)
                .field("difficulty", &strategy.difficulty())
                .finish(),
        }
    }
}

/// Orchestrates one match between two seats.
#[derive(Debug)]
pub struct Match {
    session: GameSession,
    seat_x: Seat,
    seat_o: Seat,
}

impl Match {
    /// Creates a match on a fresh session; X moves first.
    pub fn new(seat_x: Seat, seat_o: Seat) -> Self {
        Self {
            session: GameSession::new(),
            seat_x,
            seat_o,
        }
    }

    /// Human X against human O.
    pub fn human_vs_human(
        name_x: impl Into<String>,
        source_x: impl MoveSource + 'static,
        name_o: impl Into<String>,
        source_o: impl MoveSource + 'static,
    ) -> Self {
        Self::new(Seat::human(name_x, source_x), Seat::human(name_o, source_o))
    }

    /// Human X against a computer O of the given difficulty.
    pub fn human_vs_computer(
        name: impl Into<String>,
        source: impl MoveSource + 'static,
        difficulty: Difficulty,
        seed: Option<u64>,
    ) -> Self {
        Self::new(
            Seat::human(name, source),
            Seat::computer("Computer", difficulty.strategy(Player::O, seed)),
        )
    }

    /// Returns the session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Returns the seat playing `player`.
    pub fn seat(&self, player: Player) -> &Seat {
        match player {
            Player::X => &self.seat_x,
            Player::O => &self.seat_o,
        }
    }

    /// Runs the match to completion.
    ///
    /// Human moves rejected with `InvalidCell` or `CellOccupied` are
    /// reported and requested again; any other error ends the match.
    ///
    /// # Errors
    ///
    /// Returns the first unrecoverable error, e.g. `InputClosed` from a
    /// move source.
    #[instrument(skip_all, fields(x = %self.seat_x.name(), o = %self.seat_o.name()))]
    pub fn run(&mut self, mut observer: impl FnMut(&GameEvent)) -> Result<Outcome, EngineError> {
        info!("Starting match");
        if let SessionState::AwaitingMove(first) = self.session.state() {
            observer(&GameEvent::MatchStarted {
                board: self.session.board().clone(),
                first,
            });
        }

        loop {
            let player = match self.session.state() {
                SessionState::AwaitingMove(player) => player,
                SessionState::Finished(outcome) => {
                    let winner = outcome.winner().map(|p| self.seat(p).name().to_string());
                    info!(%outcome, ?winner, "Match over");
                    observer(&GameEvent::GameOver {
                        outcome,
                        winner,
                        board: self.session.board().clone(),
                    });
                    return Ok(outcome);
                }
            };

            self.play_turn(player, &mut observer)?;
        }
    }

    fn play_turn(
        &mut self,
        player: Player,
        observer: &mut impl FnMut(&GameEvent),
    ) -> Result<(), EngineError> {
        let Self {
            session,
            seat_x,
            seat_o,
        } = self;
        let seat = match player {
            Player::X => seat_x,
            Player::O => seat_o,
        };

        let (position, difficulty) = match &mut *seat {
            Seat::Human { name, source } => loop {
                debug!(player = %name, "Waiting for move");
                let index = source.request_move(session.board(), player)?;
                match session.try_apply_move(index) {
                    Ok(_) => break (Position::from_index(index)?, None),
                    Err(error) if error.is_recoverable() => {
                        warn!(player = %name, index, %error, "Move rejected");
                        observer(&GameEvent::MoveRejected { player, error });
                    }
                    Err(error) => return Err(error),
                }
            },
            Seat::Computer { name, strategy } => {
                debug!(player = %name, difficulty = %strategy.difficulty(), "Computer thinking");
                let position = session.apply_strategy(strategy.as_mut())?;
                (position, Some(strategy.difficulty()))
            }
        };

        observer(&GameEvent::MoveMade {
            player,
            name: seat.name().to_string(),
            position,
            difficulty,
            board: session.board().clone(),
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScriptedSource;

    #[test]
    fn test_rejected_moves_are_requested_again() {
        // X tries 4, O tries 4 (occupied) and 12 (invalid) before settling on 0.
        let mut game = Match::human_vs_human(
            "Ada",
            ScriptedSource::new([4, 1, 7]),
            "Bob",
            ScriptedSource::new([4, 12, 0, 2]),
        );
        let mut rejected = Vec::new();
        let outcome = game
            .run(|event| {
                if let GameEvent::MoveRejected { error, .. } = event {
                    rejected.push(error.clone());
                }
            })
            .unwrap();

        assert_eq!(outcome, Outcome::Winner(Player::X));
        assert_eq!(
            rejected,
            vec![
                EngineError::CellOccupied(Position::Center),
                EngineError::InvalidCell(12),
            ]
        );
    }

    #[test]
    fn test_closed_source_aborts_match() {
        let mut game = Match::human_vs_human(
            "Ada",
            ScriptedSource::new([4]),
            "Bob",
            ScriptedSource::new([]),
        );
        assert_eq!(game.run(|_| {}), Err(EngineError::InputClosed));
    }

    #[test]
    fn test_game_over_names_winner() {
        let mut game = Match::human_vs_human(
            "Ada",
            ScriptedSource::new([0, 1, 2]),
            "Bob",
            ScriptedSource::new([3, 4]),
        );
        let mut last = None;
        game.run(|event| last = Some(event.clone())).unwrap();

        match last {
            Some(GameEvent::GameOver { outcome, winner, .. }) => {
                assert_eq!(outcome, Outcome::Winner(Player::X));
                assert_eq!(winner.as_deref(), Some("Ada"));
            }
            other => panic!("expected GameOver, got {other:?}"),
        }
    }

    #[test]
    fn test_seat_debug_hides_boxes() {
        let seat = Seat::computer("Computer", Difficulty::Hard.strategy(Player::O, None));
        assert_eq!(format!("{seat:?}"), "Computer { name: \"Computer\", difficulty: Hard }");
    }
}
