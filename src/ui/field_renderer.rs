//! Field rendering utilities for forms

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by a field: bordered input plus one message line
pub const FIELD_HEIGHT: u16 = 4;

/// Draw a single-line input with its messages underneath.
///
/// `messages` are rendered in red on the line below the input; `counter` is
/// shown in the top-right corner of the border.
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    is_active: bool,
    counter: Option<String>,
    messages: &[&str],
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);

    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = Paragraph::new(Line::from(vec![
        Span::styled(value, style),
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let mut block = Block::default()
        .title(format!(" {label} "))
        .borders(Borders::ALL)
        .border_style(border_style);
    if let Some(counter) = counter {
        block = block.title_top(Line::from(format!(" {counter} ")).right_aligned());
    }

    frame.render_widget(content.block(block), chunks[0]);
    draw_messages(frame, chunks[1], messages);
}

/// Draw red validation/advisory messages on one line
pub fn draw_messages(frame: &mut Frame, area: Rect, messages: &[&str]) {
    if messages.is_empty() {
        return;
    }
    let text = messages.join(" · ");
    let paragraph = Paragraph::new(Span::styled(
        format!(" {text}"),
        Style::default().fg(Color::Red),
    ));
    frame.render_widget(paragraph, area);
}
