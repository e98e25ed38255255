//! Stateless UI rendering for tic-tac-toe.

use super::app::App;
use noughts_core::{GameSnapshot, GameStatus, Player, Position};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const HELP: &str = "1-9 or arrows+Enter: move   m: mode   r: new game   q: quit";

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let snapshot = app.snapshot();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(1), // Scores
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Status
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    let title = Paragraph::new(format!("Tic Tac Toe - {}", snapshot.mode().name()))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    frame.render_widget(
        Paragraph::new(score_line(snapshot)).alignment(Alignment::Center),
        chunks[1],
    );

    draw_board(frame, chunks[2], snapshot, app.cursor());

    let (text, color) = match app.notice() {
        Some(notice) => (notice.to_string(), Color::Red),
        None => (snapshot.message().clone(), status_color(*snapshot.status())),
    };
    let status = Paragraph::new(text)
        .style(Style::default().fg(color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[3]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);
}

fn score_line(snapshot: &GameSnapshot) -> Line<'static> {
    let mode = *snapshot.mode();
    let scores = snapshot.scores();
    Line::from(vec![
        Span::styled(
            format!("{}: {}", mode.player_label(Player::X), scores.wins(Player::X)),
            mark_style(Player::X),
        ),
        Span::raw("   "),
        Span::styled(
            format!("{}: {}", mode.player_label(Player::O), scores.wins(Player::O)),
            mark_style(Player::O),
        ),
        Span::raw(format!("   Draws: {}", scores.draws())),
    ])
}

fn status_color(status: GameStatus) -> Color {
    match status {
        GameStatus::Active => Color::Yellow,
        GameStatus::Won(_) => Color::Green,
        GameStatus::Drawn => Color::Magenta,
    }
}

fn mark_style(player: Player) -> Style {
    let color = match player {
        Player::X => Color::Blue,
        Player::O => Color::Red,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn draw_board(frame: &mut Frame, area: Rect, snapshot: &GameSnapshot, cursor: Position) {
    let board_area = center_rect(area, 29, 11);

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

    for (row, area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        draw_row(frame, area, snapshot, cursor, row);
    }
    for area in [rows[1], rows[3]] {
        let sep = Paragraph::new("─".repeat(area.width as usize))
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(sep, area);
    }
}

fn draw_row(frame: &mut Frame, area: Rect, snapshot: &GameSnapshot, cursor: Position, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(9),
            Constraint::Length(1),
            Constraint::Length(9),
            Constraint::Length(1),
            Constraint::Length(9),
        ])
        .split(area);

    for col in 0..3 {
        draw_cell(frame, cols[col * 2], snapshot, cursor, row * 3 + col);
    }
    for area in [cols[1], cols[3]] {
        let sep = Paragraph::new("│\n│\n│").style(Style::default().fg(Color::DarkGray));
        frame.render_widget(sep, area);
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, snapshot: &GameSnapshot, cursor: Position, index: usize) {
    let (symbol, base_style) = match snapshot.board()[index] {
        None => (
            (index + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Some(player) => (player.to_string(), mark_style(player)),
    };

    let style = if snapshot.is_highlighted(index) {
        base_style.bg(Color::Green).fg(Color::Black)
    } else if index == cursor.to_index() && !snapshot.status().is_terminal() {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    let paragraph = Paragraph::new(vec![
        Line::default(),
        Line::from(Span::styled(format!("   {symbol}   "), style)),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::GameController;
    use crossterm::event::KeyCode;
    use noughts_core::{FirstChooser, HeuristicStrategy, Mode};
    use ratatui::{Terminal, backend::TestBackend};
    use std::time::Duration;

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(70, 20)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[tokio::test]
    async fn test_renders_win_message_and_scores() {
        let (controller, _rx) = GameController::new(
            Mode::PlayerVsPlayer,
            Box::new(HeuristicStrategy::new(FirstChooser)),
            Duration::ZERO,
        );
        let mut app = App::new(controller);
        for key in ['1', '4', '2', '5', '3'] {
            app.handle_key(KeyCode::Char(key));
        }

        let screen = render(&app);
        assert!(screen.contains("Player X wins!"));
        assert!(screen.contains("Player X: 1"));
        assert!(screen.contains("Draws: 0"));
    }

    #[test]
    fn test_renders_turn_prompt_on_fresh_game() {
        let (controller, _rx) = GameController::new(
            Mode::PlayerVsAi,
            Box::new(HeuristicStrategy::new(FirstChooser)),
            Duration::ZERO,
        );
        let screen = render(&App::new(controller));
        assert!(screen.contains("Your turn"));
        assert!(screen.contains("You (X): 0"));
        assert!(screen.contains("AI (O): 0"));
    }
}
