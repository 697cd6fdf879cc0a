//! Unbeaten - command-line entry point.

use anyhow::{Context, Result, bail};
use clap::Parser;
use std::io;
use tracing::{info, instrument};
use unbeaten::{AppConfig, Cli, Command, init_file, init_stderr, run_console, run_tui};
use unbeaten_core::{Board, GameController, PerfectPlayer, Player, audit, choose_move};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;

    if cli.command == Command::Tui {
        init_file(config.log_file(), config.log_filter())?;
    } else {
        init_stderr(config.log_filter());
    }

    match cli.command {
        Command::Tui => run_tui(config),
        Command::Play => run_play(&config),
        Command::Suggest { board, mark } => run_suggest(&board, mark.into()),
        Command::Audit => run_audit(),
    }
}

/// Line-based game on stdin/stdout.
fn run_play(config: &AppConfig) -> Result<()> {
    let mut game = GameController::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_console(&mut game, config, stdin.lock(), &mut stdout).context("Console game failed")
}

/// Prints the engine's move for a board given on the command line.
#[instrument]
fn run_suggest(board: &str, mark: Player) -> Result<()> {
    let board: Board = board
        .parse()
        .with_context(|| format!("Invalid board {:?}", board))?;
    let best = choose_move(&board, mark).context("No move to suggest")?;

    info!(index = best.index, evaluation = %best.evaluation, nodes = best.nodes, "Move chosen");
    println!("{}", board.render_grid(Player::symbol));
    println!();
    println!(
        "{} plays {} (cell index {}), evaluation: {} ({:+}), positions searched: {}",
        mark,
        best.index + 1,
        best.index,
        best.evaluation,
        best.evaluation.value(),
        best.nodes
    );
    Ok(())
}

/// Plays every human line against the perfect opponent.
#[instrument]
fn run_audit() -> Result<()> {
    let report = audit(PerfectPlayer::new());
    println!(
        "games: {}, opponent wins: {}, draws: {}, human wins: {}",
        report.games, report.opponent_wins, report.draws, report.human_wins
    );

    if !report.never_loses() {
        bail!("Opponent lost {} game(s)", report.human_wins);
    }
    info!("Opponent never loses");
    Ok(())
}
