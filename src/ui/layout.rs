//! Layout components (panels, status bar)

use crate::app::App;
use crate::state::{LoadStatus, SaveStatus};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into the form and the items panel, reserving the
/// bottom line for the status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(40),    // Form
            Constraint::Length(32), // Items
        ])
        .split(rows[0]);

    (columns[0], columns[1])
}

/// Draw the status bar at the bottom of the screen
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    }
    .intersection(area);

    let mut spans = vec![];

    let save_indicator = match app.controller.save_status() {
        SaveStatus::Ready => Span::styled(" ○ ", Style::default().fg(Color::Gray)),
        SaveStatus::Saving => Span::styled(" ◐ ", Style::default().fg(Color::Yellow)),
        SaveStatus::Success => Span::styled(" ● ", Style::default().fg(Color::Green)),
        SaveStatus::Error => Span::styled(" ● ", Style::default().fg(Color::Red)),
    };
    spans.push(save_indicator);

    spans.push(Span::styled(
        "Tab/↑↓: field | ←→: urgency | Space: toggle | Enter: submit | Esc: quit",
        Style::default().fg(Color::Black),
    ));

    if app.controller.load_status() == LoadStatus::Failed {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            "F5: retry load",
            Style::default().fg(Color::Red),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);
}
