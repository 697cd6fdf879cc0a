//! Application state and logic.

use crossterm::event::KeyCode;
use tracing::{debug, instrument};
use unbeaten_core::{GameController, GameOutcome, InvalidMove, Phase, Strategy, choose_move};

use super::input::{digit_to_index, move_cursor};
use crate::config::AppConfig;

/// What the event loop should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep running.
    Continue,
    /// Leave the TUI.
    Quit,
}

/// Main application state.
#[derive(Debug)]
pub struct App<S = unbeaten_core::PerfectPlayer> {
    game: GameController<S>,
    config: AppConfig,
    cursor: usize,
    status_message: String,
    hint: Option<usize>,
}

impl App {
    /// Creates a new application against the perfect opponent.
    pub fn new(config: AppConfig) -> Self {
        Self::with_controller(GameController::new(), config)
    }
}

impl<S: Strategy> App<S> {
    /// Creates an application around an existing controller.
    pub fn with_controller(game: GameController<S>, config: AppConfig) -> Self {
        let mut app = Self {
            game,
            config,
            cursor: 4,
            status_message: String::new(),
            hint: None,
        };
        app.refresh();
        app
    }

    /// Gets the game controller.
    pub fn game(&self) -> &GameController<S> {
        &self.game
    }

    /// Gets the configuration.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Gets the cursor cell index.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// The engine's suggestion for the human, when hints are enabled.
    pub fn hint(&self) -> Option<usize> {
        self.hint
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn handle_key(&mut self, key: KeyCode) -> AppAction {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return AppAction::Quit,
            KeyCode::Char('r') => self.restart(),
            KeyCode::Enter | KeyCode::Char(' ') => self.place(self.cursor),
            KeyCode::Char(c) => {
                if let Some(index) = digit_to_index(c) {
                    self.cursor = index;
                    self.place(index);
                }
            }
            other => self.cursor = move_cursor(self.cursor, other),
        }
        AppAction::Continue
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.game.restart();
        self.cursor = 4;
        self.refresh();
    }

    fn place(&mut self, index: usize) {
        match self.game.handle_click(index) {
            Ok(played) => {
                debug!(moves = played.len(), "Click accepted");
                self.refresh();
            }
            Err(InvalidMove::NoReply) => {
                self.refresh();
                self.status_message =
                    "Opponent has no reply; your move was taken back.".to_string();
            }
            Err(e) => debug!(error = %e, index, "Ignoring click"),
        }
    }

    fn refresh(&mut self) {
        let human_to_move = self.game.phase() == Phase::AwaitingHumanMove;
        self.hint = if *self.config.show_hints() && human_to_move {
            choose_move(self.game.board(), self.game.human())
                .ok()
                .map(|best| best.index)
        } else {
            None
        };

        self.status_message = match self.game.outcome() {
            GameOutcome::Won { line, player } if player == self.game.human() => format!(
                "{} wins from {} to {}! Press 'r' to restart or 'q' to quit.",
                self.config.symbol_for(player),
                line.start() + 1,
                line.end() + 1
            ),
            GameOutcome::Won { line, player } => format!(
                "{} wins from {} to {}. Press 'r' to restart or 'q' to quit.",
                self.config.symbol_for(player),
                line.start() + 1,
                line.end() + 1
            ),
            GameOutcome::Drawn => "Draw! Press 'r' to restart or 'q' to quit.".to_string(),
            GameOutcome::InProgress => match self.hint {
                Some(index) => format!(
                    "Your move ({}). Hint: {}",
                    self.config.symbol_for(self.game.human()),
                    index + 1
                ),
                None => format!(
                    "Your move ({}). Arrows + Enter or 1-9 to place.",
                    self.config.symbol_for(self.game.human())
                ),
            },
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unbeaten_core::{Board, Player};

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(AppConfig::default());
        assert_eq!(app.handle_key(KeyCode::Char('q')), AppAction::Quit);
        assert_eq!(app.handle_key(KeyCode::Esc), AppAction::Quit);
    }

    #[test]
    fn test_enter_places_at_cursor_and_opponent_replies() {
        let mut app = App::new(AppConfig::default());
        app.handle_key(KeyCode::Up);
        app.handle_key(KeyCode::Left);
        assert_eq!(app.cursor(), 0);

        assert_eq!(app.handle_key(KeyCode::Enter), AppAction::Continue);
        assert_eq!(app.game().history().len(), 2);
        assert_eq!(app.game().phase(), Phase::AwaitingHumanMove);
    }

    #[test]
    fn test_click_on_occupied_cell_is_ignored() {
        let mut app = App::new(AppConfig::default());
        app.handle_key(KeyCode::Char('5'));
        let before = app.game().board().clone();

        app.handle_key(KeyCode::Char('5'));
        assert_eq!(app.game().board(), &before);
    }

    #[test]
    fn test_restart_clears_board() {
        let mut app = App::new(AppConfig::default());
        app.handle_key(KeyCode::Char('1'));
        app.handle_key(KeyCode::Char('r'));
        assert!(app.game().history().is_empty());
        assert_eq!(app.cursor(), 4);
    }

    #[test]
    fn test_hint_shown_when_enabled() {
        let config = AppConfig::from_toml("show_hints = true").unwrap();
        let app = App::new(config);
        assert_eq!(app.hint(), Some(0));
        assert!(app.status_message().contains("Hint: 1"));

        assert_eq!(App::new(AppConfig::default()).hint(), None);
    }

    /// Plays the lowest empty cell.
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

    /// Never has a move.
    #[derive(Debug, Clone)]
    struct Resigns;

    impl Strategy for Resigns {
        fn name(&self) -> &str {
            "Resigns"
        }

        fn select(&mut self, _board: &Board, _mark: Player) -> Option<usize> {
            None
        }
    }

    #[test]
    fn test_win_status_names_line_ends() {
        let mut app =
            App::with_controller(GameController::with_strategy(FirstEmpty), AppConfig::default());
        for key in ['7', '8', '9'] {
            app.handle_key(KeyCode::Char(key));
        }
        assert_eq!(app.game().phase(), Phase::GameOver);
        assert!(app.status_message().starts_with("O wins from 7 to 9!"));
    }

    #[test]
    fn test_missing_reply_keeps_human_turn() {
        let mut app =
            App::with_controller(GameController::with_strategy(Resigns), AppConfig::default());
        app.handle_key(KeyCode::Char('5'));

        assert!(app.game().history().is_empty());
        assert_eq!(app.game().phase(), Phase::AwaitingHumanMove);
        assert!(app.status_message().contains("taken back"));
    }
}
