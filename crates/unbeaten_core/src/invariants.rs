//! First-class invariants for the game controller.
//!
//! Invariants are logical properties that must hold after every transition.
//! The controller checks them in debug builds; tests check them directly.

use crate::controller::{GameController, HUMAN, Phase};
use crate::strategy::Strategy;
use crate::types::{Board, Cell};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: cells are never overwritten.
///
/// Replaying the history onto an empty board must land every move on an
/// empty cell and reproduce the current board exactly.
pub struct MonotonicBoard;

impl<S: Strategy> Invariant<GameController<S>> for MonotonicBoard {
    fn holds(game: &GameController<S>) -> bool {
        let mut reconstructed = Board::new();

        for mv in game.history() {
            if reconstructed.get(mv.index) != Some(Cell::Empty) {
                return false;
            }
            reconstructed.set_unchecked(mv.index, Cell::Occupied(mv.player));
        }

        reconstructed == *game.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}

/// Invariant: turns alternate starting with the human, the board holds as
/// many human marks as opponent marks or one more, and the phase names the
/// mark that is actually to move.
pub struct AlternatingTurns;

impl<S: Strategy> Invariant<GameController<S>> for AlternatingTurns {
    fn holds(game: &GameController<S>) -> bool {
        let mut expected = HUMAN;
        for mv in game.history() {
            if mv.player != expected {
                return false;
            }
            expected = expected.opponent();
        }

        let board = game.board();
        let (circles, crosses) = (board.count(HUMAN), board.count(HUMAN.opponent()));
        if circles != crosses && circles != crosses + 1 {
            return false;
        }

        match game.phase() {
            Phase::GameOver => board.is_finished(),
            Phase::AwaitingHumanMove | Phase::AwaitingOpponentMove => {
                !board.is_finished() && game.to_move() == Some(expected)
            }
        }
    }

    fn description() -> &'static str {
        "Players alternate, human first, and the phase matches the board"
    }
}

/// All controller invariants as a composable set.
pub type ControllerInvariants = (MonotonicBoard, AlternatingTurns);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Player;

    #[test]
    fn test_invariants_hold_for_new_game() {
        let game = GameController::new();
        assert!(ControllerInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_invariants_hold_after_moves() {
        let mut game = GameController::new();
        game.handle_click(4).unwrap();
        let next = game.board().empty_indices()[0];
        game.handle_click(next).unwrap();
        assert!(ControllerInvariants::check_all(&game).is_ok());
    }

    #[test]
    fn test_overwritten_cell_violates_monotonic() {
        let mut game = GameController::new();
        game.handle_click(4).unwrap();
        game.board.set_unchecked(4, Cell::Occupied(Player::Cross));

        assert!(!MonotonicBoard::holds(&game));
        let violations = ControllerInvariants::check_all(&game).unwrap_err();
        assert_eq!(
            violations[0].description,
            "Board cells are monotonic (never overwritten)"
        );
    }

    #[test]
    fn test_wrong_phase_violates_alternation() {
        let mut game = GameController::new();
        game.handle_click(4).unwrap();
        game.phase = Phase::AwaitingOpponentMove;
        assert!(!AlternatingTurns::holds(&game));
        assert!(MonotonicBoard::holds(&game));
    }

    #[test]
    fn test_out_of_order_history_violates_alternation() {
        let mut game = GameController::new();
        game.handle_click(4).unwrap();
        game.history.swap(0, 1);
        assert!(!AlternatingTurns::holds(&game));
    }

    #[test]
    fn test_extra_mark_violates_alternation() {
        let mut game = GameController::new();
        game.handle_click(4).unwrap();
        let free = game.board().empty_indices()[0];
        game.board.set_unchecked(free, Cell::Occupied(Player::Cross));
        assert!(!AlternatingTurns::holds(&game));
    }
}
