//! Requested items panel

use crate::app::App;
use crate::state::LoadStatus;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

/// Draw the list of persisted items, or the load state while there is none
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Requested Products ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    match app.controller.load_status() {
        LoadStatus::Loading => {
            let text = Paragraph::new(Span::styled(
                " Loading...",
                Style::default().fg(Color::Yellow),
            ));
            frame.render_widget(text.block(block), area);
        }
        LoadStatus::Failed => {
            let text = Paragraph::new(vec![
                Line::from(Span::styled(
                    " Could not load items",
                    Style::default().fg(Color::Red),
                )),
                Line::from(Span::styled(
                    " F5 to retry",
                    Style::default().fg(Color::DarkGray),
                )),
            ]);
            frame.render_widget(text.block(block), area);
        }
        LoadStatus::Loaded => {
            let items: Vec<ListItem> = app
                .controller
                .store()
                .items()
                .iter()
                .map(|item| ListItem::new(format!(" • {item}")))
                .collect();
            frame.render_widget(List::new(items).block(block), area);
        }
    }
}
