//! Core domain types for tic-tac-toe.

use crate::error::{BoardParseError, InvalidMove};
use crate::rules::{self, GameOutcome, WinLine};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, instrument};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Player {
    /// Circle, the human's mark. Moves first.
    Circle,
    /// Cross, the computer opponent's mark.
    Cross,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Circle => Player::Cross,
            Player::Cross => Player::Circle,
        }
    }

    /// The character used for this mark in the board's text form.
    pub fn symbol(self) -> char {
        match self {
            Player::Circle => 'O',
            Player::Cross => 'X',
        }
    }

    fn from_symbol(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'O' => Some(Player::Circle),
            'X' => Some(Player::Cross),
            _ => None,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell occupied by a player.
    Occupied(Player),
}

impl Cell {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    fn symbol(self) -> char {
        self.player().map_or('.', Player::symbol)
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Builds a board from cells in row-major order.
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Gets the cell at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Checks if a cell is empty. Out-of-range indices are never empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Number of cells occupied by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Cell::Occupied(player))
            .count()
    }

    /// Places `player`'s mark at `index` and returns the outcome afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove`] if the index is out of range, the cell is
    /// occupied, or the game is already finished. The board is left untouched.
    #[instrument(skip(self), fields(board = %self))]
    pub fn place(&mut self, index: usize, player: Player) -> Result<GameOutcome, InvalidMove> {
        if index >= CELL_COUNT {
            return Err(InvalidMove::OutOfRange { index });
        }
        if self.is_finished() {
            return Err(InvalidMove::GameFinished);
        }
        if !self.is_empty(index) {
            return Err(InvalidMove::Occupied { index });
        }

        self.cells[index] = Cell::Occupied(player);
        let outcome = self.outcome();
        debug!(%outcome, "Mark placed");
        Ok(outcome)
    }

    /// True iff every cell is occupied or some line is complete.
    pub fn is_finished(&self) -> bool {
        self.is_full() || self.winning_line().is_some()
    }

    /// Checks if the board is full.
    pub fn is_full(&self) -> bool {
        rules::is_full(self)
    }

    /// First completed line in the fixed enumeration order.
    pub fn winning_line(&self) -> Option<WinLine> {
        rules::winning_line(self)
    }

    /// The player owning the first completed line, if any.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(self)
    }

    /// Derived outcome of the position.
    pub fn outcome(&self) -> GameOutcome {
        rules::outcome(self)
    }

    /// All empty indices in ascending order.
    pub fn empty_indices(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(index, _)| index)
            .collect()
    }

    /// Clears every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; CELL_COUNT];
    }

    /// Writes a cell with no validation. Used by the search's scoped undo and
    /// by history replay.
    pub(crate) fn set_unchecked(&mut self, index: usize, cell: Cell) {
        self.cells[index] = cell;
    }

    /// Formats the board as a human-readable grid, numbering empty cells 1-9.
    ///
    /// `symbol` picks the glyph drawn for each mark.
    pub fn render_grid(&self, symbol: impl Fn(Player) -> char) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                let glyph = match self.cells[index] {
                    Cell::Empty => char::from_digit(index as u32 + 1, 10).unwrap_or('?'),
                    Cell::Occupied(player) => symbol(player),
                };
                result.push(glyph);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, cell) in self.cells.iter().enumerate() {
            if index > 0 && index % 3 == 0 {
                write!(f, "/")?;
            }
            write!(f, "{}", cell.symbol())?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cell characters in row-major order.
    ///
    /// `O`/`X` (any case) are marks, `.`, `-` and `_` are empty cells.
    /// Whitespace, `|` and `/` are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Cell::Empty; CELL_COUNT];
        let mut count = 0;

        for c in s.chars() {
            if c.is_whitespace() || c == '|' || c == '/' {
                continue;
            }
            let cell = match c {
                '.' | '-' | '_' => Cell::Empty,
                other => Player::from_symbol(other)
                    .map(Cell::Occupied)
                    .ok_or(BoardParseError::UnknownSymbol { symbol: other })?,
            };
            if count >= CELL_COUNT {
                return Err(BoardParseError::WrongLength { found: count + 1 });
            }
            cells[count] = cell;
            count += 1;
        }

        if count != CELL_COUNT {
            return Err(BoardParseError::WrongLength { found: count });
        }
        Ok(Self { cells })
    }
}
