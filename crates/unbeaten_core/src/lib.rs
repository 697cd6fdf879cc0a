//! Pure tic-tac-toe game logic with a perfect-play opponent.
//!
//! # Architecture
//!
//! - **Board state** ([`Board`], [`WinLine`], [`GameOutcome`]): nine cells,
//!   eight fixed winning lines, outcome derived on demand.
//! - **Search** ([`choose_move`]): exhaustive minimax; the side it plays for
//!   never loses.
//! - **Controller** ([`GameController`]): the turn state machine a front-end
//!   drives with clicks and restarts.
//! - **Audit** ([`audit`]): every human line of play against a strategy.
//!
//! # Example
//!
//! ```
//! use unbeaten_core::{GameController, Phase};
//!
//! let mut game = GameController::new();
//! let played = game.handle_click(4)?;
//! assert_eq!(played.len(), 2);
//! assert_eq!(game.phase(), Phase::AwaitingHumanMove);
//! # Ok::<(), unbeaten_core::InvalidMove>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod audit;
mod controller;
mod error;
mod invariants;
mod rules;
mod search;
mod strategy;
mod types;

pub use action::Move;
pub use audit::{AuditReport, audit};
pub use controller::{GameController, HUMAN, OPPONENT, Phase};
pub use error::{BoardParseError, InvalidMove, SearchError};
pub use invariants::{
    AlternatingTurns, ControllerInvariants, Invariant, InvariantSet, InvariantViolation,
    MonotonicBoard,
};
pub use rules::{GameOutcome, WinLine, check_winner, is_draw, is_full, winning_line};
pub use search::{BestMove, Evaluation, choose_move};
pub use strategy::{PerfectPlayer, Strategy};
pub use types::{Board, CELL_COUNT, Cell, Player};
