//! Command-line interface for tictac.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictac_engine::Difficulty;

/// Tictac - tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Play tic-tac-toe against a friend or the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to an optional TOML config file
    #[arg(long, global = true, default_value = "tictac.toml")]
    pub config: PathBuf,

    /// Game mode to play
    #[command(subcommand)]
    pub command: Command,
}

/// Available game modes
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Two humans take turns at the same keyboard
    Pvp {
        /// Name of the player using X
        #[arg(long)]
        x_name: Option<String>,

        /// Name of the player using O
        #[arg(long)]
        o_name: Option<String>,
    },

    /// Play X against the computer
    Computer {
        /// Opponent strength (easy, medium, hard). Asked interactively if unset.
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Your name
        #[arg(long)]
        name: Option<String>,

        /// Seed for the computer's random choices
        #[arg(long)]
        seed: Option<u64>,
    },
}
