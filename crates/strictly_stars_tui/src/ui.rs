//! Stateless UI rendering for the star puzzle.

use crate::config::Palette;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use strictly_stars::{Number, NumberStatus, SessionStatus, Snapshot};
use strum::IntoEnumIterator;

const HELP: &str = "Pick 1 or more numbers that sum to the number of stars";
const KEYS: &str = "1-9 or arrows + Enter: pick   r: restart   q: quit";
const STAR: &str = "★";

/// Renders the whole screen from a snapshot.
pub fn draw(frame: &mut Frame, snapshot: &Snapshot, cursor: Number, palette: &Palette) {
    let area = frame.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Length(1), // Help
            Constraint::Min(11),   // Stars and numbers
            Constraint::Length(1), // Legend
            Constraint::Length(3), // Timer / outcome
            Constraint::Length(1), // Keys
        ])
        .split(area);

    let title = Paragraph::new("Strictly Stars")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let help = Paragraph::new(HELP).alignment(Alignment::Center);
    frame.render_widget(help, chunks[1]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[2]);
    draw_stars(frame, body[0], snapshot);
    draw_numbers(frame, body[1], snapshot, cursor, palette);

    frame.render_widget(
        Paragraph::new(legend(palette)).alignment(Alignment::Center),
        chunks[3],
    );

    draw_footer(frame, chunks[4], snapshot);

    let keys = Paragraph::new(KEYS)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(keys, chunks[5]);
}

/// One swatch per status, in declaration order.
fn legend(palette: &Palette) -> Line<'static> {
    let spans: Vec<Span> = NumberStatus::iter()
        .flat_map(|status| {
            [
                Span::styled(
                    format!(" {} ", status),
                    Style::default().bg(palette.color(status)).fg(Color::Black),
                ),
                Span::raw(" "),
            ]
        })
        .collect();
    Line::from(spans)
}

fn draw_stars(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let block = Block::default().borders(Borders::ALL).title("Stars");

    let lines: Vec<Line> = if *snapshot.outcome() == SessionStatus::Active {
        star_rows(*snapshot.target())
            .into_iter()
            .map(|row| Line::from(Span::styled(row, Style::default().fg(Color::Yellow))))
            .collect()
    } else {
        Vec::new()
    };

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(paragraph, center_rect(area, 20, 9));
}

/// Lays stars out three to a row.
fn star_rows(count: u32) -> Vec<String> {
    let count = count as usize;
    (0..count)
        .step_by(3)
        .map(|start| vec![STAR; (count - start).min(3)].join("  "))
        .collect()
}

fn draw_numbers(
    frame: &mut Frame,
    area: Rect,
    snapshot: &Snapshot,
    cursor: Number,
    palette: &Palette,
) {
    let grid = center_rect(area, 21, 9);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3); 3])
        .split(grid);

    let numbers: Vec<Number> = Number::all().collect();
    for (row_area, row_numbers) in rows.iter().zip(numbers.chunks(3)) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(7); 3])
            .split(*row_area);
        for (cell, number) in cols.iter().zip(row_numbers) {
            draw_cell(frame, *cell, snapshot, *number, cursor, palette);
        }
    }
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    snapshot: &Snapshot,
    number: Number,
    cursor: Number,
    palette: &Palette,
) {
    let status = snapshot.status(number);
    let style = Style::default()
        .bg(palette.color(status))
        .fg(Color::Black)
        .add_modifier(Modifier::BOLD);

    let border = if number == cursor {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let paragraph = Paragraph::new(Line::from(Span::styled(format!(" {} ", number), style)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(border));
    frame.render_widget(paragraph, area);
}

fn draw_footer(frame: &mut Frame, area: Rect, snapshot: &Snapshot) {
    let (text, color) = match snapshot.outcome() {
        SessionStatus::Active => (
            format!("Time Remaining: {}", snapshot.remaining_time()),
            Color::Yellow,
        ),
        SessionStatus::Won => (
            "All numbers matched! Press 'r' to play again.".to_string(),
            Color::Green,
        ),
        SessionStatus::Lost => (
            "Time's up! Press 'r' to play again.".to_string(),
            Color::Red,
        ),
    };

    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(paragraph, area);
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
