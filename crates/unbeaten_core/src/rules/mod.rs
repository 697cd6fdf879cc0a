//! Game rules for tic-tac-toe.
//!
//! Pure functions evaluating a board. Rules are kept apart from board storage
//! so the search and the controller share a single definition of a win.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{WinLine, check_winner, winning_line};

use crate::types::{Board, Player};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a position, derived from the board on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// No line is complete and empty cells remain.
    InProgress,
    /// `player` completed `line`.
    Won {
        /// The completed line.
        line: WinLine,
        /// The player owning the line.
        player: Player,
    },
    /// Full board with no completed line.
    Drawn,
}

impl GameOutcome {
    /// True unless the game is still in progress.
    pub fn is_finished(&self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameOutcome::Won { player, .. } => Some(*player),
            _ => None,
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::InProgress => write!(f, "In progress"),
            GameOutcome::Won { line, player } => write!(f, "{player} wins on {line}"),
            GameOutcome::Drawn => write!(f, "Draw"),
        }
    }
}

/// Derives the outcome of `board`.
pub fn outcome(board: &Board) -> GameOutcome {
    if let Some(line) = winning_line(board) {
        if let Some(player) = board.get(line.start()).and_then(|cell| cell.player()) {
            return GameOutcome::Won { line, player };
        }
    }
    if is_draw(board) {
        GameOutcome::Drawn
    } else {
        GameOutcome::InProgress
    }
}
