//! Strategy trait and the perfect-play implementation.

use crate::search::choose_move;
use crate::types::{Board, Player};
use tracing::{debug, warn};

/// Something that can pick a move for a mark.
pub trait Strategy {
    /// Returns the strategy's display name.
    fn name(&self) -> &str;

    /// Picks a cell for `mark` on `board`.
    ///
    /// Returns `None` if the board has no legal move.
    fn select(&mut self, board: &Board, mark: Player) -> Option<usize>;
}

/// Opponent backed by the exhaustive minimax search. Never loses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerfectPlayer;

impl PerfectPlayer {
    /// Creates the perfect player.
    pub fn new() -> Self {
        Self
    }
}

impl Strategy for PerfectPlayer {
    fn name(&self) -> &str {
        "Perfect"
    }

    fn select(&mut self, board: &Board, mark: Player) -> Option<usize> {
        match choose_move(board, mark) {
            Ok(best) => {
                debug!(
                    index = best.index,
                    evaluation = %best.evaluation,
                    nodes = best.nodes,
                    "Perfect player chose move"
                );
                Some(best.index)
            }
            Err(e) => {
                warn!(error = %e, "No move available");
                None
            }
        }
    }
}
