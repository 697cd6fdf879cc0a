//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Cell, Player};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the eight index triples that win the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinLine([usize; 3]);

impl WinLine {
    /// All winning lines in scan order.
    pub const ALL: [WinLine; 8] = [
        // Rows
        WinLine([0, 1, 2]),
        WinLine([3, 4, 5]),
        WinLine([6, 7, 8]),
        // Columns
        WinLine([0, 3, 6]),
        WinLine([1, 4, 7]),
        WinLine([2, 5, 8]),
        // Diagonals
        WinLine([0, 4, 8]),
        WinLine([2, 4, 6]),
    ];

    /// The three cell indices of the line.
    pub fn cells(&self) -> [usize; 3] {
        self.0
    }

    /// First cell of the line.
    pub fn start(&self) -> usize {
        self.0[0]
    }

    /// Last cell of the line.
    pub fn end(&self) -> usize {
        self.0[2]
    }

    /// Whether `index` lies on this line.
    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }

    /// The player owning all three cells, if any.
    pub fn owner(&self, board: &Board) -> Option<Player> {
        let [a, b, c] = self.0;
        let first = board.get(a)?;
        if first != Cell::Empty && Some(first) == board.get(b) && Some(first) == board.get(c) {
            first.player()
        } else {
            None
        }
    }
}

impl fmt::Display for WinLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// Returns the first complete line in [`WinLine::ALL`] order.
pub fn winning_line(board: &Board) -> Option<WinLine> {
    WinLine::ALL
        .into_iter()
        .find(|line| line.owner(board).is_some())
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    WinLine::ALL.iter().find_map(|line| line.owner(board))
}
