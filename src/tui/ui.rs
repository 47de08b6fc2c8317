//! Stateless UI rendering for the seven-slot board.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
};

use crate::session::{SessionSnapshot, format_elapsed};
use proset_cards::{Card, DotColor, Slot, SlotIndex};

/// Slots per board row.
const ROWS: [&[usize]; 3] = [&[0, 1], &[2, 3, 4], &[5, 6]];

const HELP: &str = "1-7 select | s solve | Enter submit | r restart | q quit";

/// Renders the whole screen from a snapshot.
pub fn draw(frame: &mut Frame, snapshot: &SessionSnapshot) {
    let chunks = Layout::vertical([
        Constraint::Length(4), // Header
        Constraint::Min(18),   // Board
        Constraint::Length(3), // Status
    ])
    .split(frame.area());

    draw_header(frame, chunks[0], snapshot);
    draw_board(frame, chunks[1], snapshot);
    draw_status(frame, chunks[2], snapshot);
}

fn draw_header(frame: &mut Frame, area: Rect, snapshot: &SessionSnapshot) {
    let remaining = snapshot
        .remaining()
        .map_or_else(|| "Loading...".to_string(), |n| n.to_string());
    let elapsed = snapshot
        .elapsed()
        .map_or_else(|| "Loading...".to_string(), format_elapsed);

    let mut lines = vec![
        Line::from(Span::styled(
            "Proset",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(format!("Remaining Cards: {remaining}   Time: {elapsed}")),
    ];
    if snapshot.is_game_over() {
        lines.push(Line::from(Span::styled(
            "Game Over! No more cards remaining.",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
    }

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn draw_board(frame: &mut Frame, area: Rect, snapshot: &SessionSnapshot) {
    let rows = Layout::vertical([Constraint::Length(6); 3])
        .flex(Flex::Center)
        .split(area);

    for (row, slots) in rows.iter().zip(ROWS) {
        let cells = Layout::horizontal(vec![Constraint::Length(12); slots.len()])
            .flex(Flex::Center)
            .spacing(2)
            .split(*row);
        for (cell, &slot) in cells.iter().zip(slots) {
            if let Some(index) = SlotIndex::new(slot) {
                draw_slot(frame, *cell, snapshot, index);
            }
        }
    }
}

fn draw_slot(frame: &mut Frame, area: Rect, snapshot: &SessionSnapshot, index: SlotIndex) {
    let border_style = if snapshot.is_selected(index) {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::bordered()
        .title(format!(" {} ", index.get() + 1))
        .border_style(border_style);

    let lines = match snapshot.board().get(index) {
        Slot::Occupied(card) => card_lines(&card),
        Slot::Empty => Vec::new(),
    };

    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).block(block),
        area,
    );
}

/// Dots in a 3x2 grid, row-major by position.
fn card_lines(card: &Card) -> Vec<Line<'static>> {
    (0..3)
        .map(|row| {
            let spans: Vec<Span<'static>> = (0..2)
                .filter_map(|col| DotColor::at(row * 2 + col))
                .map(|color| {
                    if card.has_dot(color) {
                        Span::styled(" ● ", Style::default().fg(dot_color(color)))
                    } else {
                        Span::raw("   ")
                    }
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

fn dot_color(color: DotColor) -> Color {
    match color {
        DotColor::Red => Color::Red,
        DotColor::Orange => Color::Rgb(255, 165, 0),
        DotColor::Yellow => Color::Yellow,
        DotColor::Green => Color::Green,
        DotColor::Blue => Color::Blue,
        DotColor::Purple => Color::Magenta,
    }
}

fn draw_status(frame: &mut Frame, area: Rect, snapshot: &SessionSnapshot) {
    let (text, style) = match (snapshot.notice(), snapshot.busy()) {
        (Some(notice), _) => (notice.to_string(), Style::default().fg(Color::Red)),
        (None, Some(operation)) => (
            format!("Working: {operation}..."),
            Style::default().fg(Color::Yellow),
        ),
        (None, None) => (HELP.to_string(), Style::default().fg(Color::Gray)),
    };

    let status = Paragraph::new(text)
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::bordered());
    frame.render_widget(status, area);
}
