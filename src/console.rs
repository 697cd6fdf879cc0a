//! Line-based play over any reader/writer pair.
//!
//! Digits 1-9 place the human's mark, `r` restarts, `q` quits. Invalid input
//! is ignored and the prompt is shown again.

use std::io::{self, BufRead, Write};
use tracing::{debug, info, instrument};
use unbeaten_core::{GameController, GameOutcome, InvalidMove, Phase, Strategy};

use crate::config::AppConfig;

/// A parsed line of console input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Place at a cell index (0-8).
    Place(usize),
    /// Start a new game.
    Restart,
    /// Leave the game.
    Quit,
}

impl ConsoleCommand {
    /// Parses a line; `None` for anything unrecognized.
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "q" | "quit" => Some(ConsoleCommand::Quit),
            "r" | "restart" => Some(ConsoleCommand::Restart),
            other => match other.parse::<usize>() {
                Ok(n @ 1..=9) => Some(ConsoleCommand::Place(n - 1)),
                _ => None,
            },
        }
    }
}

/// Runs a console game until `q` or end of input.
#[instrument(skip_all)]
pub fn run_console<S, R, W>(
    game: &mut GameController<S>,
    config: &AppConfig,
    input: R,
    output: &mut W,
) -> io::Result<()>
where
    S: Strategy,
    R: BufRead,
    W: Write,
{
    info!("Starting console game");
    let mut lines = input.lines();

    loop {
        writeln!(output, "{}", game.board().render_grid(|p| config.symbol_for(p)))?;
        writeln!(output, "{}", status_line(game, config))?;
        output.flush()?;

        let Some(line) = lines.next() else {
            debug!("Input closed");
            return Ok(());
        };

        let line = line?;
        match ConsoleCommand::parse(&line) {
            Some(ConsoleCommand::Quit) => {
                info!("User quit");
                return Ok(());
            }
            Some(ConsoleCommand::Restart) => game.restart(),
            Some(ConsoleCommand::Place(index)) => match game.handle_click(index) {
                Ok(played) => {
                    for mv in played.iter().filter(|mv| mv.player == game.opponent()) {
                        writeln!(output, "Opponent plays {}", mv.index + 1)?;
                    }
                }
                Err(InvalidMove::NoReply) => {
                    writeln!(output, "Opponent has no reply; your move was taken back.")?;
                }
                Err(e) => debug!(error = %e, "Ignoring invalid move"),
            },
            None => debug!(line = %line.trim(), "Ignoring unrecognized input"),
        }
    }
}

/// The prompt or result shown under the board.
pub fn status_line<S: Strategy>(game: &GameController<S>, config: &AppConfig) -> String {
    match (game.phase(), game.outcome()) {
        (Phase::GameOver, GameOutcome::Won { player, .. }) if player == game.human() => format!(
            "{} wins! You beat the opponent. Enter r to restart or q to quit.",
            config.symbol_for(player)
        ),
        (Phase::GameOver, GameOutcome::Won { player, .. }) => format!(
            "{} wins. Enter r to restart or q to quit.",
            config.symbol_for(player)
        ),
        (Phase::GameOver, _) => "Draw. Enter r to restart or q to quit.".to_string(),
        _ => format!(
            "Your move as {} (1-9, r to restart, q to quit):",
            config.symbol_for(game.human())
        ),
    }
}
