//! Moves as first-class values.
//!
//! The controller records every accepted placement as a [`Move`], which makes
//! the history replayable and checkable against the board.

use crate::types::Player;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A player placing their mark at a cell index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The cell index (0-8).
    pub index: usize,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.index)
    }
}
