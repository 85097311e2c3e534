//! Match loop with replay prompt.

use super::console::{ConsoleSource, SharedConsole};
use anyhow::{Context, Result};
use derive_getters::Getters;
use std::io::{BufRead, Write};
use tictac_engine::{Difficulty, Match, Outcome, Player};
use tracing::{info, instrument};

/// Who sits at the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Two humans sharing the console.
    HumanVsHuman {
        /// Name of the X player.
        x_name: String,
        /// Name of the O player.
        o_name: String,
    },
    /// A human X against a computer O.
    HumanVsComputer {
        /// Name of the human.
        name: String,
        /// Computer strength.
        difficulty: Difficulty,
        /// Base seed; each match adds its number so replays differ.
        seed: Option<u64>,
    },
}

impl Mode {
    /// Builds a fresh match; `round` numbers the matches of a sitting from 0.
    pub fn build<R, W>(&self, console: &SharedConsole<R, W>, round: u64) -> Match
    where
        R: BufRead + 'static,
        W: Write + 'static,
    {
        match self {
            Mode::HumanVsHuman { x_name, o_name } => Match::human_vs_human(
                x_name.clone(),
                ConsoleSource::new(x_name.clone(), console.clone()),
                o_name.clone(),
                ConsoleSource::new(o_name.clone(), console.clone()),
            ),
            Mode::HumanVsComputer {
                name,
                difficulty,
                seed,
            } => Match::human_vs_computer(
                name.clone(),
                ConsoleSource::new(name.clone(), console.clone()),
                *difficulty,
                seed.map(|s| s.wrapping_add(round)),
            ),
        }
    }
}

/// Running totals over the matches of one sitting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters)]
pub struct Scoreboard {
    x_wins: u32,
    o_wins: u32,
    draws: u32,
}

impl Scoreboard {
    /// Records one finished match.
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Winner(Player::X) => self.x_wins += 1,
            Outcome::Winner(Player::O) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    /// Number of matches recorded.
    pub fn played(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "X wins: {}, O wins: {}, ties: {}",
            self.x_wins, self.o_wins, self.draws
        )
    }
}

/// Plays matches until the user declines a replay.
///
/// # Errors
///
/// Fails if the console breaks or input ends in the middle of a match.
#[instrument(skip(console))]
pub fn play<R, W>(console: SharedConsole<R, W>, mode: &Mode) -> Result<Scoreboard>
where
    R: BufRead + 'static,
    W: Write + 'static,
{
    let mut scoreboard = Scoreboard::default();

    for round in 0.. {
        let mut game = mode.build(&console, round);
        let mut render_error = None;
        let outcome = game
            .run(|event| {
                if let Err(e) = console.borrow_mut().render(event) {
                    render_error.get_or_insert(e);
                }
            })
            .context("Match aborted")?;
        if let Some(e) = render_error {
            return Err(e).context("Failed to write to the console");
        }

        scoreboard.record(outcome);
        info!(round, %outcome, %scoreboard, "Match recorded");

        let again = console
            .borrow_mut()
            .ask_yes_no("Play again? (y/n): ")
            .context("Failed to read replay answer")?;
        if !again {
            break;
        }
    }

    let mut console = console.borrow_mut();
    console.say(&scoreboard)?;
    console.say("Thanks for playing!")?;
    Ok(scoreboard)
}
