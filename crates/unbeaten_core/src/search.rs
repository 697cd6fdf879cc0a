//! Exhaustive minimax search for the perfect-play opponent.
//!
//! The board is small enough that the full game tree is enumerated on every
//! call: no pruning, no depth limit, no transposition table. Scores do not
//! depend on depth, and ties go to the lowest index, so the chosen move is a
//! pure function of the position.

use crate::error::SearchError;
use crate::types::{Board, Cell, Player};
use derive_new::new;
use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};
use strum::Display;
use tracing::{debug, instrument};

/// Value of a position for the maximizing player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display)]
pub enum Evaluation {
    /// The minimizing player can force a win.
    Loss,
    /// Best play from both sides draws.
    Draw,
    /// The maximizing player can force a win.
    Win,
}

impl Evaluation {
    /// Numeric score: -1, 0 or +1.
    pub fn value(self) -> i8 {
        match self {
            Evaluation::Loss => -1,
            Evaluation::Draw => 0,
            Evaluation::Win => 1,
        }
    }
}

/// The move picked by [`choose_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, new)]
pub struct BestMove {
    /// Cell index to play.
    pub index: usize,
    /// Value of the position after playing `index`.
    pub evaluation: Evaluation,
    /// Number of positions visited below the root.
    pub nodes: u64,
}

/// Returns the optimal move for `ai_player` on `board`.
///
/// `ai_player` is the side to move and the maximizer. Among equally scored
/// moves the lowest index wins. The caller's board is not modified.
///
/// # Errors
///
/// Returns [`SearchError::BoardFinished`] if the board is already won or full.
#[instrument(skip(board), fields(board = %board))]
pub fn choose_move(board: &Board, ai_player: Player) -> Result<BestMove, SearchError> {
    if board.is_finished() {
        return Err(SearchError::BoardFinished);
    }

    let mut scratch = board.clone();
    let mut search = Minimax::new(ai_player);
    let mut best: Option<(usize, Evaluation)> = None;

    for index in scratch.empty_indices() {
        let evaluation = {
            let mut trial = Trial::place(&mut scratch, index, ai_player);
            search.evaluate(&mut trial, ai_player.opponent())
        };
        debug!(index, %evaluation, "Root move scored");
        if best.is_none_or(|(_, current)| evaluation > current) {
            best = Some((index, evaluation));
        }
    }

    let (index, evaluation) = best.ok_or(SearchError::BoardFinished)?;
    debug!(index, %evaluation, nodes = search.nodes, "Search complete");
    Ok(BestMove::new(index, evaluation, search.nodes))
}

/// Recursive evaluator. Tracks the maximizing mark and a node counter.
struct Minimax {
    maximizer: Player,
    nodes: u64,
}

impl Minimax {
    fn new(maximizer: Player) -> Self {
        Self {
            maximizer,
            nodes: 0,
        }
    }

    fn terminal(&self, board: &Board) -> Option<Evaluation> {
        match board.winner() {
            Some(winner) if winner == self.maximizer => Some(Evaluation::Win),
            Some(_) => Some(Evaluation::Loss),
            None if board.is_full() => Some(Evaluation::Draw),
            None => None,
        }
    }

    fn evaluate(&mut self, board: &mut Board, to_move: Player) -> Evaluation {
        self.nodes += 1;
        if let Some(evaluation) = self.terminal(board) {
            return evaluation;
        }

        let maximizing = to_move == self.maximizer;
        let mut best: Option<Evaluation> = None;

        for index in board.empty_indices() {
            let evaluation = {
                let mut trial = Trial::place(board, index, to_move);
                self.evaluate(&mut trial, to_move.opponent())
            };
            let better = match best {
                None => true,
                Some(current) if maximizing => evaluation > current,
                Some(current) => evaluation < current,
            };
            if better {
                best = Some(evaluation);
            }
        }

        // A non-terminal board always has an empty cell.
        best.unwrap_or(Evaluation::Draw)
    }
}

/// A hypothetical placement that is undone when dropped.
///
/// Holding the board through the guard means every exit path of the
/// recursive step restores the cell.
struct Trial<'a> {
    board: &'a mut Board,
    index: usize,
}

impl<'a> Trial<'a> {
    fn place(board: &'a mut Board, index: usize, player: Player) -> Self {
        board.set_unchecked(index, Cell::Occupied(player));
        Self { board, index }
    }
}

impl Deref for Trial<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Trial<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Trial<'_> {
    fn drop(&mut self) {
        self.board.set_unchecked(self.index, Cell::Empty);
    }
}
