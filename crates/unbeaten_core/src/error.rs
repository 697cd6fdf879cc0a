//! Error types for board placement, search and parsing.

use serde::{Deserialize, Serialize};

/// A rejected placement. Callers treat it as a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum InvalidMove {
    /// The index is not in 0-8.
    #[display("Index {index} is out of range (must be 0-8)")]
    OutOfRange {
        /// The rejected index.
        index: usize,
    },

    /// The cell already holds a mark.
    #[display("Cell {index} is already occupied")]
    Occupied {
        /// The rejected index.
        index: usize,
    },

    /// The game is already won or drawn.
    #[display("Game is already over")]
    GameFinished,

    /// The move was submitted outside the mover's turn.
    #[display("It is not {_0}'s turn")]
    NotYourTurn(crate::Player),

    /// The opponent strategy produced no legal reply. The human's move was
    /// taken back.
    #[display("Opponent has no legal reply")]
    NoReply,
}

impl std::error::Error for InvalidMove {}

/// The search was asked for a move on a board that has none.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SearchError {
    /// The board is won or full.
    #[display("Board is already finished")]
    BoardFinished,
}

impl std::error::Error for SearchError {}

/// Failure to read a board from its text form.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardParseError {
    /// Not exactly nine cell characters.
    #[display("Expected 9 cells, found {found}")]
    WrongLength {
        /// Number of cell characters seen.
        found: usize,
    },

    /// A character that is neither a mark nor an empty marker.
    #[display("Unknown cell symbol {symbol:?}")]
    UnknownSymbol {
        /// The offending character.
        symbol: char,
    },
}

impl std::error::Error for BoardParseError {}
