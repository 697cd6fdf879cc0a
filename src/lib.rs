//! Unbeaten - terminal tic-tac-toe against an opponent that never loses.
//!
//! The game rules, the minimax search and the turn controller live in
//! [`unbeaten_core`]. This crate adds the front-ends around them.
//!
//! # Architecture
//!
//! - **Config**: TOML file with mark glyphs, hints and logging settings
//! - **Console**: line-based play over any reader/writer pair
//! - **TUI**: full-screen ratatui front-end
//! - **Logging**: tracing subscribers for stderr or a log file
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use unbeaten::{AppConfig, run_console};
//! use unbeaten_core::GameController;
//!
//! let mut game = GameController::new();
//! let mut output = Vec::new();
//! run_console(&mut game, &AppConfig::default(), Cursor::new("5\nq\n"), &mut output)?;
//! assert_eq!(game.history().len(), 2);
//! # Ok::<(), std::io::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod console;
mod logging;
mod tui;

pub use cli::{Cli, Command, MarkArg};
pub use config::{AppConfig, ConfigError, DEFAULT_CONFIG_FILE};
pub use console::{ConsoleCommand, run_console, status_line};
pub use logging::{init_file, init_stderr};
pub use tui::{App, AppAction, digit_to_index, draw, move_cursor, run_tui};
