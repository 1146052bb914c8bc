//! UI module for rendering the TUI

mod components;
mod field_renderer;
mod form;
mod items;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (form_area, items_area) = layout::create_layout(frame.area());

    form::draw(frame, form_area, app);
    items::draw(frame, items_area, app);

    layout::draw_status_bar(frame, app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::FormController;
    use crate::persistence::{MockPersistenceClient, PersistenceError};
    use crate::state::StateStore;
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    /// App whose form shows every validation error
    fn app_with_errors() -> App {
        let controller =
            FormController::new(StateStore::new(), Arc::new(MockPersistenceClient::new()));
        let mut app = App::new(controller);
        assert!(app.controller.begin_submit().is_none());
        assert_eq!(app.controller.field_errors().len(), 4);
        app
    }

    fn render(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_draw_fits_short_terminals() {
        let app = app_with_errors();
        for (width, height) in [(1, 1), (10, 3), (80, 5), (40, 8), (80, 12), (120, 40)] {
            render(&app, width, height);
        }
    }

    #[test]
    fn test_draw_shows_field_errors() {
        let app = app_with_errors();
        let screen = render(&app, 100, 30);
        assert!(screen.contains("product required"));
        assert!(screen.contains("urgency required"));
        assert!(screen.contains("terms must be accepted"));
    }

    #[test]
    fn test_status_bar_hints() {
        let mut app = app_with_errors();
        let screen = render(&app, 120, 30);
        assert!(screen.contains("←→: urgency"));
        assert!(screen.contains("Space: toggle"));
        assert!(!screen.contains("F5: retry load"));

        app.controller.complete_load(Err(PersistenceError::Poisoned));
        let screen = render(&app, 120, 30);
        assert!(screen.contains("F5: retry load"));
    }
}
