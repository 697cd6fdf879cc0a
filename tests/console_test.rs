//! Line-based play driven through in-memory input.

use std::io::Cursor;
use unbeaten::{AppConfig, run_console};
use unbeaten_core::{Board, GameController, Phase, Player, Strategy};

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

fn play<S: Strategy>(game: &mut GameController<S>, config: &AppConfig, input: &str) -> String {
    let mut output = Vec::new();
    run_console(game, config, Cursor::new(input), &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_opponent_reply_is_announced() {
    let mut game = GameController::new();
    let output = play(&mut game, &AppConfig::default(), "5\nq\n");

    assert_eq!(game.history().len(), 2);
    assert!(output.contains("Opponent plays 1"));
    assert!(output.contains("X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9"));
}

#[test]
fn test_invalid_input_is_ignored() {
    let mut game = GameController::new();
    let output = play(&mut game, &AppConfig::default(), "hello\n0\n10\n5\n5\n");

    assert_eq!(game.history().len(), 2);
    assert_eq!(game.phase(), Phase::AwaitingHumanMove);
    assert!(!output.contains("error"));
}

#[test]
fn test_human_win_message() {
    let mut game = GameController::with_strategy(FirstEmpty);
    let output = play(&mut game, &AppConfig::default(), "7\n8\n9\n");

    assert_eq!(game.phase(), Phase::GameOver);
    assert!(output.contains("O wins! You beat the opponent."));
}

#[test]
fn test_opponent_win_message_then_restart() {
    let mut game = GameController::with_strategy(FirstEmpty);
    let output = play(&mut game, &AppConfig::default(), "5\n4\n9\nr\n");

    assert!(output.contains("X wins. Enter r to restart or q to quit."));
    assert!(game.history().is_empty());
    assert_eq!(game.phase(), Phase::AwaitingHumanMove);
}

#[test]
fn test_configured_glyphs_are_rendered() {
    let config = AppConfig::from_toml("human_symbol = '@'\nopponent_symbol = '#'").unwrap();
    let mut game = GameController::new();
    let output = play(&mut game, &config, "5\nq\n");

    assert!(output.contains("#|2|3\n-+-+-\n4|@|6"));
    assert!(output.contains("Your move as @"));
}

#[test]
fn test_end_of_input_stops_quietly() {
    let mut game = GameController::new();
    let output = play(&mut game, &AppConfig::default(), "");

    assert!(game.history().is_empty());
    assert!(output.contains("1|2|3"));
}

#[test]
fn test_missing_reply_takes_back_move() {
    let mut game = GameController::with_strategy(Resigns);
    let output = play(&mut game, &AppConfig::default(), "5\n1\n");

    assert!(game.history().is_empty());
    assert_eq!(game.phase(), Phase::AwaitingHumanMove);
    assert_eq!(output.matches("your move was taken back").count(), 2);
    assert!(!output.contains("Opponent plays"));
}
