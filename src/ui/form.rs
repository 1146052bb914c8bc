//! Request form rendering

use super::components::{render_button, BUTTON_HEIGHT};
use super::field_renderer::{draw_field, draw_messages, FIELD_HEIGHT};
use crate::app::{App, Focus};
use crate::state::{FieldId, SaveStatus, Urgency, NEW_ITEM_LIMIT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const TOO_LONG_MESSAGE: &str = "Must be fewer than twenty characters";
const TOO_LOW_MESSAGE: &str = "Requests should be Moderada or Urgente";

/// Draw the form fields and submit button
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" New Product Request ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT),  // Product
            Constraint::Length(FIELD_HEIGHT),  // Email
            Constraint::Length(FIELD_HEIGHT),  // Urgency
            Constraint::Length(2),             // Terms
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Min(0),
        ])
        .margin(1)
        .split(area);

    let controller = &app.controller;
    let store = controller.store();
    let errors = controller.field_errors();

    let mut item_messages: Vec<&str> = errors.get(FieldId::NewItem).into_iter().collect();
    if store.is_new_item_too_long() {
        item_messages.push(TOO_LONG_MESSAGE);
    }
    draw_field(
        frame,
        chunks[0],
        "Requested product",
        store.new_item(),
        app.focus == Focus::NewItem,
        Some(format!("{}/{}", store.new_item_length(), NEW_ITEM_LIMIT)),
        &item_messages,
    );

    let email_messages: Vec<&str> = errors.get(FieldId::Email).into_iter().collect();
    draw_field(
        frame,
        chunks[1],
        "Email",
        store.email(),
        app.focus == Focus::Email,
        None,
        &email_messages,
    );

    let mut urgency_messages: Vec<&str> = errors.get(FieldId::Urgency).into_iter().collect();
    if store.is_urgency_too_low() {
        urgency_messages.push(TOO_LOW_MESSAGE);
    }
    let urgency_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(chunks[2]);
    draw_urgency(
        frame,
        urgency_rows[0],
        store.urgency(),
        app.focus == Focus::Urgency,
    );
    draw_messages(frame, urgency_rows[1], &urgency_messages);

    draw_terms(
        frame,
        chunks[3],
        store.terms_and_conditions(),
        app.focus == Focus::Terms,
        errors.get(FieldId::TermsAndConditions),
    );

    let status = controller.save_status();
    let accent = match status {
        SaveStatus::Ready | SaveStatus::Saving => Color::White,
        SaveStatus::Success => Color::Green,
        SaveStatus::Error => Color::Red,
    };
    let button_area = Rect {
        width: chunks[4].width.min(32),
        ..chunks[4]
    };
    render_button(
        frame,
        button_area,
        status.button_label(),
        app.focus == Focus::Submit,
        controller.can_submit(),
        accent,
    );
}

/// Draw the urgency selector as a row of options
fn draw_urgency(frame: &mut Frame, area: Rect, selected: Urgency, is_active: bool) {
    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut spans = Vec::new();
    if selected == Urgency::Unset {
        spans.push(Span::styled(
            "Please select one  ",
            Style::default().fg(Color::DarkGray),
        ));
    }
    for level in Urgency::SELECTABLE {
        let style = if level == selected {
            Style::default().fg(Color::Black).bg(if is_active {
                Color::Cyan
            } else {
                Color::Gray
            })
        } else {
            Style::default()
        };
        spans.push(Span::styled(format!(" {level} "), style));
        spans.push(Span::raw(" "));
    }

    let title = if is_active {
        " Urgency (←/→) "
    } else {
        " Urgency "
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Draw the terms checkbox and its error line
fn draw_terms(frame: &mut Frame, area: Rect, checked: bool, is_active: bool, error: Option<&str>) {
    let mark = if checked { "[x]" } else { "[ ]" };
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let line = Line::from(vec![
        Span::styled(format!(" {mark} "), style),
        Span::styled("I accept the terms and conditions of service", style),
    ]);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);
    frame.render_widget(Paragraph::new(line), rows[0]);

    let messages: Vec<&str> = error.into_iter().collect();
    draw_messages(frame, rows[1], &messages);
}
