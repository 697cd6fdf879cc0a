//! Turn controller: the state machine a front-end drives.
//!
//! The controller owns the only mutable board. The human always plays
//! [`Player::Circle`] and moves first; the strategy plays [`Player::Cross`]
//! and answers inline, with no suspension point between the two moves.

use crate::action::Move;
use crate::error::InvalidMove;
use crate::invariants::{ControllerInvariants, InvariantSet};
use crate::rules::GameOutcome;
use crate::strategy::{PerfectPlayer, Strategy};
use crate::types::{Board, Cell, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Mark played by the human.
pub const HUMAN: Player = Player::Circle;

/// Mark played by the computer.
pub const OPPONENT: Player = Player::Cross;

/// Controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Phase {
    /// Waiting for the human to place a mark.
    AwaitingHumanMove,
    /// The opponent is to move.
    AwaitingOpponentMove,
    /// Won or drawn; only a restart leaves this state.
    GameOver,
}

/// Owns the board, the move history and the opponent strategy.
#[derive(Debug, Clone)]
pub struct GameController<S = PerfectPlayer> {
    pub(crate) board: Board,
    pub(crate) phase: Phase,
    pub(crate) history: Vec<Move>,
    strategy: S,
}

impl GameController<PerfectPlayer> {
    /// Creates a controller playing against the perfect opponent.
    pub fn new() -> Self {
        Self::with_strategy(PerfectPlayer)
    }
}

impl Default for GameController<PerfectPlayer> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Strategy> GameController<S> {
    /// Creates a controller with a custom opponent strategy.
    pub fn with_strategy(strategy: S) -> Self {
        Self {
            board: Board::new(),
            phase: Phase::AwaitingHumanMove,
            history: Vec::new(),
            strategy,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns the accepted moves, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the opponent strategy.
    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Derived outcome of the current board.
    pub fn outcome(&self) -> GameOutcome {
        self.board.outcome()
    }

    /// The human's mark.
    pub fn human(&self) -> Player {
        HUMAN
    }

    /// The opponent's mark.
    pub fn opponent(&self) -> Player {
        OPPONENT
    }

    /// The mark to move, or `None` once the game is over.
    pub fn to_move(&self) -> Option<Player> {
        match self.phase {
            Phase::AwaitingHumanMove => Some(HUMAN),
            Phase::AwaitingOpponentMove => Some(OPPONENT),
            Phase::GameOver => None,
        }
    }

    /// Places the human's mark at `index`.
    ///
    /// # Errors
    ///
    /// Rejects the move with [`InvalidMove`] outside the human's turn or when
    /// the board refuses it. Nothing changes on rejection.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn submit_human_move(&mut self, index: usize) -> Result<Move, InvalidMove> {
        match self.phase {
            Phase::AwaitingHumanMove => self.apply(Move::new(HUMAN, index)),
            Phase::AwaitingOpponentMove => Err(InvalidMove::NotYourTurn(HUMAN)),
            Phase::GameOver => Err(InvalidMove::GameFinished),
        }
    }

    /// Asks the strategy for a move and plays it.
    ///
    /// # Errors
    ///
    /// Rejects with [`InvalidMove`] outside the opponent's turn, or if the
    /// strategy has no move or proposes an illegal one.
    #[instrument(skip(self), fields(phase = %self.phase, strategy = self.strategy.name()))]
    pub fn play_opponent_move(&mut self) -> Result<Move, InvalidMove> {
        match self.phase {
            Phase::AwaitingOpponentMove => {}
            Phase::AwaitingHumanMove => return Err(InvalidMove::NotYourTurn(OPPONENT)),
            Phase::GameOver => return Err(InvalidMove::GameFinished),
        }

        let index = self
            .strategy
            .select(&self.board, OPPONENT)
            .ok_or(InvalidMove::GameFinished)?;
        self.apply(Move::new(OPPONENT, index))
    }

    /// A human click: the human's move followed by the opponent's reply.
    ///
    /// Returns the moves played, one or two. The click is all or nothing: if
    /// the opponent cannot reply, the human's move is taken back.
    ///
    /// # Errors
    ///
    /// Returns the rejection of the human's move, or [`InvalidMove::NoReply`]
    /// if the strategy fails. The controller is unchanged in both cases.
    #[instrument(skip(self))]
    pub fn handle_click(&mut self, index: usize) -> Result<Vec<Move>, InvalidMove> {
        let human = self.submit_human_move(index)?;
        if self.phase != Phase::AwaitingOpponentMove {
            return Ok(vec![human]);
        }

        match self.play_opponent_move() {
            Ok(reply) => Ok(vec![human, reply]),
            Err(e) => {
                warn!(error = %e, %human, "Opponent failed to reply, taking back move");
                self.take_back(human);
                Err(InvalidMove::NoReply)
            }
        }
    }

    /// Clears the board and history and hands the first move to the human.
    #[instrument(skip(self), fields(phase = %self.phase))]
    pub fn restart(&mut self) {
        info!("Restarting game");
        self.board.reset();
        self.history.clear();
        self.phase = Phase::AwaitingHumanMove;
    }

    fn apply(&mut self, mv: Move) -> Result<Move, InvalidMove> {
        let outcome = self.board.place(mv.index, mv.player).map_err(|e| {
            debug!(error = %e, "Move rejected");
            e
        })?;
        self.history.push(mv);

        self.phase = if outcome.is_finished() {
            info!(%outcome, "Game over");
            Phase::GameOver
        } else if mv.player == HUMAN {
            Phase::AwaitingOpponentMove
        } else {
            Phase::AwaitingHumanMove
        };
        debug!(%mv, phase = %self.phase, "Move applied");

        self.check_invariants();
        Ok(mv)
    }

    fn take_back(&mut self, mv: Move) {
        self.history.pop();
        self.board.set_unchecked(mv.index, Cell::Empty);
        self.phase = Phase::AwaitingHumanMove;
        self.check_invariants();
    }

    fn check_invariants(&self) {
        if cfg!(debug_assertions) {
            if let Err(violations) = ControllerInvariants::check_all(self) {
                warn!(?violations, "Controller invariant violated");
                debug_assert!(violations.is_empty(), "controller invariants violated");
            }
        }
    }
}
