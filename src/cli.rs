//! Command-line interface for unbeaten.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use unbeaten_core::Player;

use crate::config::DEFAULT_CONFIG_FILE;

/// Unbeaten - tic-tac-toe against an opponent that never loses
#[derive(Parser, Debug)]
#[command(name = "unbeaten")]
#[command(about = "Tic-tac-toe against a perfect opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Play in the full-screen terminal UI
    Tui,

    /// Play line by line on stdin/stdout
    Play,

    /// Print the engine's move for a board
    Suggest {
        /// Nine cells in row-major order, e.g. "O../.X./..O" (`.` for empty)
        #[arg(short, long)]
        board: String,

        /// Mark to find a move for
        #[arg(short, long, value_enum, default_value_t = MarkArg::Cross)]
        mark: MarkArg,
    },

    /// Play every human line against the engine and report the results
    Audit,
}

/// Mark selection on the command line.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkArg {
    /// Circle (O), the human's mark
    Circle,
    /// Cross (X), the opponent's mark
    Cross,
}

impl From<MarkArg> for Player {
    fn from(mark: MarkArg) -> Self {
        match mark {
            MarkArg::Circle => Player::Circle,
            MarkArg::Cross => Player::Cross,
        }
    }
}
