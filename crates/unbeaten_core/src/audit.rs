//! Exhaustive audit of a strategy against every human line of play.
//!
//! The human moves first and may pick any empty cell at every turn; the
//! strategy answers deterministically through the controller. Every finished
//! game is tallied once.

use crate::controller::GameController;
use crate::rules::GameOutcome;
use crate::strategy::Strategy;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Tally of finished games from an audit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditReport {
    /// Distinct finished games.
    pub games: u64,
    /// Games the strategy won.
    pub opponent_wins: u64,
    /// Drawn games.
    pub draws: u64,
    /// Games the human won.
    pub human_wins: u64,
}

impl AuditReport {
    /// True if no human line of play beats the strategy.
    pub fn never_loses(&self) -> bool {
        self.human_wins == 0
    }
}

/// Plays out every human line of play against `strategy`.
#[instrument(skip(strategy), fields(strategy = strategy.name()))]
pub fn audit<S: Strategy + Clone>(strategy: S) -> AuditReport {
    let mut report = AuditReport::default();
    explore(&GameController::with_strategy(strategy), &mut report);
    info!(
        games = report.games,
        opponent_wins = report.opponent_wins,
        draws = report.draws,
        human_wins = report.human_wins,
        "Audit complete"
    );
    report
}

fn explore<S: Strategy + Clone>(game: &GameController<S>, report: &mut AuditReport) {
    for index in game.board().empty_indices() {
        let mut next = game.clone();
        if next.handle_click(index).is_err() {
            continue;
        }

        match next.outcome() {
            GameOutcome::InProgress => {
                explore(&next, report);
                continue;
            }
            GameOutcome::Won { player, .. } if player == next.human() => report.human_wins += 1,
            GameOutcome::Won { .. } => report.opponent_wins += 1,
            GameOutcome::Drawn => report.draws += 1,
        }
        report.games += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Board, Player};

    /// Plays the lowest empty cell; easy to beat.
    #[derive(Debug, Clone)]
    struct FirstEmpty;

    impl Strategy for FirstEmpty {
        fn name(&self) -> &str {
            "FirstEmpty"
        }

        fn select(&mut self, board: &Board, _mark: Player) -> Option<usize> {
            board.empty_indices().first().copied()
        }
    }

    #[test]
    fn test_naive_strategy_loses_somewhere() {
        let report = audit(FirstEmpty);
        assert!(report.games > 0);
        assert!(!report.never_loses());
        assert_eq!(
            report.games,
            report.opponent_wins + report.draws + report.human_wins
        );
    }
}
