//! Stateless UI rendering for tic-tac-toe.

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};
use tictactoe_core::{Board, Cell, GameMode, Move, Outcome};

/// Renders the whole screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(12),   // Board
            Constraint::Length(5), // Modes
            Constraint::Length(3), // Status
        ])
        .split(area);

    let title = Paragraph::new("Tic Tac Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    draw_board(frame, chunks[1], app.game().board(), app.cursor());
    draw_modes(frame, chunks[2], app.game().mode());

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[3]);

    if let Some(outcome) = app.finished() {
        draw_game_over(frame, area, outcome);
    }
}

fn draw_board(frame: &mut Frame, area: Rect, board: &Board, cursor: Move) {
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

    for (row, chunks) in Move::ALL.chunks(3).enumerate() {
        draw_row(frame, rows[row * 2], board, cursor, chunks);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, board: &Board, cursor: Move, cells: &[Move]) {
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

    for (i, mv) in cells.iter().enumerate() {
        draw_cell(frame, cols[i * 2], board, cursor, *mv);
        if i < 2 {
            draw_separator_vertical(frame, cols[i * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, board: &Board, cursor: Move, mv: Move) {
    let label;
    let (symbol, base_style) = match board.cell(mv) {
        Cell::Empty => {
            label = format!(" {} ", mv.index() + 1);
            (label.as_str(), Style::default().fg(Color::DarkGray))
        }
        Cell::X => (" X ", Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)),
        Cell::O => (" O ", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
    };

    let style = if mv == cursor {
        base_style.bg(Color::White).fg(Color::Black)
    } else {
        base_style
    };

    // Vertically center inside the 3-line row.
    let paragraph = Paragraph::new(vec![
        Line::default(),
        Line::from(Span::styled(symbol, style)),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn draw_modes(frame: &mut Frame, area: Rect, current: GameMode) {
    use tictactoe_core::GameMode::{HumanVsHeuristic, HumanVsHuman, HumanVsMinimax};

    let lines: Vec<Line> = [HumanVsHuman, HumanVsHeuristic, HumanVsMinimax]
        .into_iter()
        .map(|mode| {
            let (marker, style) = if mode == current {
                ("(*) ", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
            } else {
                ("( ) ", Style::default().fg(Color::DarkGray))
            };
            Line::from(Span::styled(format!("{}{}", marker, mode), style))
        })
        .collect();

    let modes = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Mode ('m' to switch, 'r' reset, 'q' quit) "),
    );
    frame.render_widget(modes, area);
}

fn draw_game_over(frame: &mut Frame, area: Rect, outcome: Outcome) {
    let popup = center_rect(area, 36, 5);
    let text = Paragraph::new(vec![
        Line::from(Span::styled(
            outcome.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from("Press any key"),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title(" Game Over "));

    frame.render_widget(Clear, popup);
    frame.render_widget(text, popup);
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"); area.height as usize])
        .style(Style::default().fg(Color::DarkGray));
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

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_draw_renders_marks_and_mode() {
        let mut app = App::new(GameMode::HumanVsHuman);
        app.handle_key(crossterm::event::KeyCode::Char('5'));

        let mut terminal = Terminal::new(TestBackend::new(60, 30)).expect("terminal");
        terminal.draw(|f| draw(f, &app)).expect("draw");

        let rendered: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(rendered.contains('X'));
        assert!(rendered.contains("(*) Two players"));
    }
}
