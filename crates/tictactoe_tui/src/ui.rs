//! Stateless UI rendering for tic-tac-toe.

use crate::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
};
use strum::IntoEnumIterator;
use tictactoe::{EMPTY_CELL_MARKER, Mark, Position, Square};

const CELL_WIDTH: u16 = 12;
const CELL_HEIGHT: u16 = 3;
const BOARD_WIDTH: u16 = CELL_WIDTH * 3 + 2;
const BOARD_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

const HELP: &str = "1-9 or arrows + Enter: place   click: place   r: restart   q: quit";

/// Renders the whole screen and returns the area of each cell, row-major.
///
/// The returned areas are used to hit-test mouse clicks.
pub fn draw(frame: &mut Frame, app: &App) -> [Rect; 9] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Title
            Constraint::Min(BOARD_HEIGHT),    // Board
            Constraint::Length(3),            // Status
            Constraint::Length(1),            // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Tic-Tac-Toe")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let cells = board_cells(chunks[1]);
    draw_board(frame, app, &cells);

    let status_style = if app.game().is_over() {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    let status = Paragraph::new(app.status())
        .style(status_style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[2]);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);

    cells
}

/// Splits `area` into the nine cell areas of a centered board.
pub fn board_cells(area: Rect) -> [Rect; 9] {
    let board_area = center_rect(area, BOARD_WIDTH, BOARD_HEIGHT);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(CELL_HEIGHT),
        ])
        .split(board_area);

    let mut cells = [Rect::default(); 9];
    for (row, row_area) in [rows[0], rows[2], rows[4]].into_iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
                Constraint::Length(1),
                Constraint::Length(CELL_WIDTH),
            ])
            .split(row_area);
        for (col, cell_area) in [cols[0], cols[2], cols[4]].into_iter().enumerate() {
            cells[row * 3 + col] = cell_area;
        }
    }
    cells
}

fn draw_board(frame: &mut Frame, app: &App, cells: &[Rect; 9]) {
    for (pos, area) in Position::iter().zip(cells.iter()) {
        draw_cell(frame, *area, app, pos);
        if pos.col() < 2 {
            let sep = Rect::new(area.right(), area.y, 1, area.height);
            draw_separator_vertical(frame, sep);
        }
        if pos.row() < 2 {
            let width = if pos.col() < 2 { area.width + 1 } else { area.width };
            let sep = Rect::new(area.x, area.bottom(), width, 1);
            draw_separator(frame, sep);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, pos: Position) {
    let game = app.game();
    let enabled = game.can_place(pos);

    let (symbol, base_style) = match game.board().get(pos) {
        Square::Empty if enabled => (pos.number().to_string(), Style::default().fg(Color::DarkGray)),
        Square::Empty => (
            EMPTY_CELL_MARKER.to_string(),
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
        ),
        Square::Occupied(mark) => (
            app.labels().label(mark).to_string(),
            Style::default().fg(mark_color(mark)).add_modifier(Modifier::BOLD),
        ),
    };

    let winning = game.winning_line().is_some_and(|line| line.contains(&pos));
    let style = if winning {
        base_style.bg(Color::Green).fg(Color::Black)
    } else if pos == *app.cursor() && enabled {
        base_style.bg(Color::White).fg(Color::Black)
    } else if pos == *app.cursor() {
        base_style.bg(Color::DarkGray)
    } else {
        base_style
    };

    let lines = vec![Line::from(""), Line::from(symbol), Line::from("")];
    let paragraph = Paragraph::new(lines)
        .style(style)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

fn mark_color(mark: Mark) -> Color {
    match mark {
        Mark::X => Color::Blue,
        Mark::O => Color::Red,
    }
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let lines = vec![Line::from("│"); area.height as usize];
    let sep = Paragraph::new(lines).style(Style::default().fg(Color::DarkGray));
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

    #[test]
    fn test_board_cells_row_major() {
        let cells = board_cells(Rect::new(0, 0, 80, 20));
        for cell in &cells {
            assert_eq!(cell.width, CELL_WIDTH);
            assert_eq!(cell.height, CELL_HEIGHT);
        }
        assert!(cells[1].x > cells[0].x);
        assert!(cells[2].x > cells[1].x);
        assert_eq!(cells[3].x, cells[0].x);
        assert!(cells[3].y > cells[0].y);
        assert!(cells[6].y > cells[3].y);
    }

    #[test]
    fn test_board_cells_do_not_overlap() {
        let cells = board_cells(Rect::new(0, 0, 80, 20));
        for (i, a) in cells.iter().enumerate() {
            for b in &cells[i + 1..] {
                assert!(!a.intersects(*b));
            }
        }
    }
}
