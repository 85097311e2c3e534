//! Tictac - console tic-tac-toe.
//!
//! Wires the [`tictac_engine`] match loop to a line-based console.

#![warn(missing_docs)]

pub mod cli;
pub mod config;
pub mod console;
pub mod play;

pub use cli::{Cli, Command};
pub use config::{ConfigError, TictacConfig};
pub use console::{Console, ConsoleSource, SharedConsole};
pub use play::{Mode, Scoreboard, play};

use anyhow::{Result, bail};
use std::io::{BufRead, Write};
use tracing::{info, instrument};

/// Resolves the chosen command against the config and plays until the user quits.
///
/// Names and difficulty missing from both flags and config are asked for
/// once, before the first match, in the order name(s) then difficulty.
#[instrument(skip(config, console))]
pub fn run<R, W>(command: Command, config: TictacConfig, console: SharedConsole<R, W>) -> Result<Scoreboard>
where
    R: BufRead + 'static,
    W: Write + 'static,
{
    let mode = match command {
        Command::Pvp { x_name, o_name } => {
            let config = config.with_overrides(x_name, o_name, None, None);
            let mut console = console.borrow_mut();
            Mode::HumanVsHuman {
                x_name: match config.x_name() {
                    Some(name) => name.clone(),
                    None => console.ask_name("Enter name for Player 1 (X): ", "Player 1")?,
                },
                o_name: match config.o_name() {
                    Some(name) => name.clone(),
                    None => console.ask_name("Enter name for Player 2 (O): ", "Player 2")?,
                },
            }
        }
        Command::Computer {
            difficulty,
            name,
            seed,
        } => {
            let config = config.with_overrides(name, None, difficulty, seed);
            let mut console = console.borrow_mut();
            let name = match config.x_name() {
                Some(name) => name.clone(),
                None => console.ask_name("Enter your name: ", "Player")?,
            };
            let difficulty = match config.difficulty() {
                Some(difficulty) => *difficulty,
                None => match console.choose_difficulty()? {
                    Some(difficulty) => difficulty,
                    None => bail!("Input closed before a difficulty was chosen"),
                },
            };
            Mode::HumanVsComputer {
                name,
                difficulty,
                seed: *config.seed(),
            }
        }
    };

    info!(?mode, "Mode selected");
    play(console, &mode)
}
