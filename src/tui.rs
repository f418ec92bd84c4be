//! Terminal UI for solo_tictactoe.
//!
//! Thin collaborator over the turn controller: forwards key presses as
//! commands and renders the latest snapshot. Owns no game state beyond the
//! last notification received.

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use solo_tictactoe::{Cell, Command, Mark, Outcome, Phase, Snapshot};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// Runs the terminal frontend until the user quits.
///
/// Dropping the command sender on exit closes the controller's command
/// channel and ends its run loop.
pub async fn run_tui(
    command_tx: mpsc::UnboundedSender<Command>,
    mut snapshot_rx: mpsc::UnboundedReceiver<Snapshot>,
) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_loop(&mut terminal, command_tx, &mut snapshot_rx).await;

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

/// Draw/poll loop: drain notifications, redraw, forward key presses.
async fn run_loop<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    command_tx: mpsc::UnboundedSender<Command>,
    snapshot_rx: &mut mpsc::UnboundedReceiver<Snapshot>,
) -> Result<()> {
    let mut latest: Option<Snapshot> = None;

    loop {
        // Drain pending notifications; the most recent one wins.
        while let Ok(snapshot) = snapshot_rx.try_recv() {
            latest = Some(snapshot);
        }

        terminal.draw(|f| draw(f, latest.as_ref()))?;

        // Non-blocking input keeps the snapshot drain responsive.
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Char('q') => {
                        info!("user quit");
                        return Ok(());
                    }
                    KeyCode::Char('r') => {
                        command_tx.send(Command::Restart)?;
                    }
                    KeyCode::Char(c) if c.is_ascii_digit() => {
                        if let Some(digit) = c.to_digit(10) {
                            let pos = digit as usize;
                            if (1..=9).contains(&pos) {
                                debug!(position = pos - 1, "cell chosen");
                                command_tx.send(Command::CellChosen(pos - 1))?;
                            }
                        }
                    }
                    _ => {}
                }
            }
        }
    }
}

fn draw(f: &mut Frame, snapshot: Option<&Snapshot>) {
    let outer = Block::default().title("Tic-Tac-Toe").borders(Borders::ALL);
    let inner = outer.inner(f.area());
    f.render_widget(outer, f.area());

    let Some(snapshot) = snapshot else {
        let waiting = Paragraph::new("Waiting for game to start...").alignment(Alignment::Center);
        f.render_widget(waiting, inner);
        return;
    };

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(11),
            Constraint::Length(3),
        ])
        .split(inner);

    let status = Paragraph::new(status_text(snapshot)).alignment(Alignment::Center);
    f.render_widget(status, rows[0]);

    render_board(f, rows[1], snapshot);

    let labels = format!(
        "Player: {}    Computer: {}\nPress 1-9 to move, 'r' to restart, 'q' to quit",
        snapshot.human_mark, snapshot.computer_mark
    );
    let footer = Paragraph::new(labels)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(footer, rows[2]);
}

fn status_text(snapshot: &Snapshot) -> &'static str {
    match snapshot.phase {
        Phase::AwaitingHuman => "Your turn",
        Phase::ComputerThinking => "The computer is thinking...",
        Phase::GameOver(Outcome::HumanWin) => "You won",
        Phase::GameOver(Outcome::ComputerWin) => "Computer won",
        Phase::GameOver(Outcome::Draw) => "It's a draw!",
    }
}

/// Renders the 3x3 grid.
fn render_board(f: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let board_area = center_rect(area, 23, 11);
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

    render_row(f, rows[0], snapshot, 0);
    render_separator(f, rows[1]);
    render_row(f, rows[2], snapshot, 3);
    render_separator(f, rows[3]);
    render_row(f, rows[4], snapshot, 6);
}

fn render_row(f: &mut Frame, area: Rect, snapshot: &Snapshot, start: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(34),
        ])
        .split(area);

    render_cell(f, cols[0], snapshot, start);
    render_vertical_sep(f, cols[1]);
    render_cell(f, cols[2], snapshot, start + 1);
    render_vertical_sep(f, cols[3]);
    render_cell(f, cols[4], snapshot, start + 2);
}

fn render_cell(f: &mut Frame, area: Rect, snapshot: &Snapshot, index: usize) {
    let cell = snapshot.board.get(index).unwrap_or(Cell::Empty);
    let on_winning_line = snapshot
        .winning_line
        .is_some_and(|line| line.contains(&index));
    let (text, style) = match cell {
        Cell::Empty => (
            format!("{}", index + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Cell::Occupied(mark) => {
            let color = if on_winning_line {
                Color::Green
            } else if mark == Mark::X {
                Color::Blue
            } else {
                Color::Red
            };
            (
                mark.to_string(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        }
    };
    let paragraph = Paragraph::new(text).style(style).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(horizontal[1])[1]
}
