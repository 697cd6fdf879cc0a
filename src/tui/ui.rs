//! Stateless UI rendering for the game.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unbeaten_core::{Cell, GameOutcome, Player, Strategy};

use super::app::App;

/// Renders the whole screen: title, board, players and status.
pub fn draw<S: Strategy>(frame: &mut Frame, app: &App<S>) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Players
            Constraint::Length(3), // Status
        ])
        .split(area);

    let title = Paragraph::new("Unbeaten - Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], app);
    draw_players(frame, chunks[2], app);

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[3]);
}

fn draw_board<S: Strategy>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for row in 0..3 {
        draw_row(frame, rows[row * 2], app, row);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row<S: Strategy>(frame: &mut Frame, area: Rect, app: &App<S>, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for col in 0..3 {
        draw_cell(frame, cols[col * 2], app, row * 3 + col);
        if col < 2 {
            draw_separator_vertical(frame, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell<S: Strategy>(frame: &mut Frame, area: Rect, app: &App<S>, index: usize) {
    let game = app.game();
    let winning = match game.outcome() {
        GameOutcome::Won { line, .. } => line.contains(index),
        _ => false,
    };

    let (symbol, base_style) = match game.board().get(index) {
        Some(Cell::Occupied(player)) => (
            app.config().symbol_for(player).to_string(),
            Style::default()
                .fg(mark_color(player))
                .add_modifier(Modifier::BOLD),
        ),
        _ if app.hint() == Some(index) => ("?".to_string(), Style::default().fg(Color::Green)),
        _ => ((index + 1).to_string(), Style::default().fg(Color::DarkGray)),
    };

    let style = if winning {
        base_style.bg(Color::Green).fg(Color::Black)
    } else if index == app.cursor() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(format!(" {symbol} "), style)))
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

fn draw_players<S: Strategy>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let game = app.game();
    let active = game.to_move();

    let label = |player: Player, name: &str| {
        let text = format!(" {} {} ", app.config().symbol_for(player), name);
        let style = if active == Some(player) {
            Style::default()
                .fg(Color::Black)
                .bg(mark_color(player))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(mark_color(player))
        };
        Span::styled(text, style)
    };

    let line = Line::from(vec![
        label(game.human(), "You"),
        Span::raw("   "),
        label(game.opponent(), game.strategy().name()),
    ]);

    let players = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Players"));
    frame.render_widget(players, area);
}

fn mark_color(player: Player) -> Color {
    match player {
        Player::Circle => Color::Red,
        Player::Cross => Color::Blue,
    }
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─────────────────────────────────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(vert[1])[1]
}
