//! Application state and core logic

use crate::form::FormController;
use crate::persistence::{PersistenceError, SaveAck};
use crate::state::{FieldId, FieldValue, LoadStatus};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

/// Focusable rows of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    NewItem,
    Email,
    Urgency,
    Terms,
    Submit,
}

impl Focus {
    pub fn next(&self) -> Self {
        match self {
            Self::NewItem => Self::Email,
            Self::Email => Self::Urgency,
            Self::Urgency => Self::Terms,
            Self::Terms => Self::Submit,
            Self::Submit => Self::NewItem,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::NewItem => Self::Submit,
            Self::Email => Self::NewItem,
            Self::Urgency => Self::Email,
            Self::Terms => Self::Urgency,
            Self::Submit => Self::Terms,
        }
    }

    /// Field edited while this row is focused
    pub fn field(&self) -> Option<FieldId> {
        match self {
            Self::NewItem => Some(FieldId::NewItem),
            Self::Email => Some(FieldId::Email),
            Self::Urgency => Some(FieldId::Urgency),
            Self::Terms => Some(FieldId::TermsAndConditions),
            Self::Submit => None,
        }
    }
}

/// Result of a persistence call run off the UI loop
#[derive(Debug)]
enum PersistenceEvent {
    Loaded(Result<Vec<String>, PersistenceError>),
    Saved {
        candidate: Vec<String>,
        outcome: Result<SaveAck, PersistenceError>,
    },
}

/// Main application struct
pub struct App {
    /// Form state and submit lifecycle
    pub controller: FormController,
    /// Currently focused row
    pub focus: Focus,
    events_tx: mpsc::UnboundedSender<PersistenceEvent>,
    events_rx: mpsc::UnboundedReceiver<PersistenceEvent>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    pub fn new(controller: FormController) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            controller,
            focus: Focus::default(),
            events_tx,
            events_rx,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Start loading the persisted items in the background
    pub fn start_load(&mut self) {
        self.controller.begin_load();
        let client = self.controller.client();
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let outcome = client.load().await;
            if tx.send(PersistenceEvent::Loaded(outcome)).is_err() {
                tracing::debug!("Load finished after shutdown");
            }
        });
    }

    /// Submit the form if the submit control is enabled
    fn submit(&mut self) {
        if !self.controller.can_submit() {
            return;
        }
        let Some(candidate) = self.controller.begin_submit() else {
            return;
        };

        let client = self.controller.client();
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let outcome = client.save(candidate.clone()).await;
            if tx
                .send(PersistenceEvent::Saved { candidate, outcome })
                .is_err()
            {
                tracing::debug!("Save finished after shutdown");
            }
        });
    }

    /// Apply every finished persistence call. Returns true if any was applied.
    pub fn poll_persistence(&mut self) -> bool {
        let mut applied = false;
        while let Ok(event) = self.events_rx.try_recv() {
            self.apply(event);
            applied = true;
        }
        applied
    }

    /// Wait for the next persistence call to finish and apply it
    #[cfg(test)]
    async fn next_persistence_event(&mut self) {
        if let Some(event) = self.events_rx.recv().await {
            self.apply(event);
        }
    }

    fn apply(&mut self, event: PersistenceEvent) {
        match event {
            PersistenceEvent::Loaded(outcome) => self.controller.complete_load(outcome),
            PersistenceEvent::Saved { candidate, outcome } => {
                self.controller.complete_submit(candidate, outcome)
            }
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Down => self.focus = self.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.prev(),
            KeyCode::Enter => self.submit(),
            KeyCode::F(5) => {
                if self.controller.load_status() == LoadStatus::Failed {
                    self.start_load();
                }
            }
            _ => self.handle_focused_key(key),
        }
    }

    fn handle_focused_key(&mut self, key: KeyEvent) {
        let store = self.controller.store();
        let value = match (self.focus, key.code) {
            (Focus::NewItem | Focus::Email, KeyCode::Char(c))
                if !key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                let mut text = self.focused_text().to_string();
                text.push(c);
                FieldValue::Text(text)
            }
            (Focus::NewItem | Focus::Email, KeyCode::Backspace) => {
                let mut text = self.focused_text().to_string();
                text.pop();
                FieldValue::Text(text)
            }
            (Focus::Urgency, KeyCode::Right | KeyCode::Char(' ')) => {
                FieldValue::Text(store.urgency().next().label().to_string())
            }
            (Focus::Urgency, KeyCode::Left) => {
                FieldValue::Text(store.urgency().prev().label().to_string())
            }
            (Focus::Terms, KeyCode::Char(' ')) => {
                FieldValue::Checked(!store.terms_and_conditions())
            }
            (Focus::Submit, KeyCode::Char(' ')) => {
                self.submit();
                return;
            }
            _ => return,
        };

        if let Some(field) = self.focus.field() {
            self.controller.handle_field_change(field, value);
        }
    }

    fn focused_text(&self) -> &str {
        let store = self.controller.store();
        match self.focus {
            Focus::NewItem => store.new_item(),
            Focus::Email => store.email(),
            _ => "",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::{FailurePattern, MemoryStore, MockPersistenceClient, SimulatedClient};
    use crate::state::{FormFields, SaveStatus, StateStore, Urgency};
    use mockall::Sequence;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;
    use std::time::Duration;

    fn test_app(failures: FailurePattern) -> App {
        let client = SimulatedClient::new(MemoryStore::new())
            .with_delays(Duration::ZERO, Duration::ZERO)
            .with_failures(failures);
        App::new(FormController::new(StateStore::new(), Arc::new(client)))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn fill_form(app: &mut App, item: &str) {
        app.focus = Focus::NewItem;
        type_text(app, item);
        press(app, KeyCode::Tab);
        type_text(app, "a@b.com");
        press(app, KeyCode::Tab);
        // Not essential -> Moderate -> Urgent
        for _ in 0..3 {
            press(app, KeyCode::Right);
        }
        press(app, KeyCode::Tab);
        press(app, KeyCode::Char(' '));
    }

    #[test]
    fn test_focus_cycles() {
        let mut focus = Focus::NewItem;
        for _ in 0..5 {
            focus = focus.next();
        }
        assert_eq!(focus, Focus::NewItem);
        assert_eq!(Focus::NewItem.prev(), Focus::Submit);
        assert_eq!(Focus::Submit.field(), None);
    }

    #[tokio::test]
    async fn test_typing_and_toggles() {
        let mut app = test_app(FailurePattern::Never);
        fill_form(&mut app, "Milkk");
        app.focus = Focus::NewItem;
        press(&mut app, KeyCode::Backspace);

        assert_eq!(
            app.controller.store().fields(),
            &FormFields {
                new_item: "Milk".to_string(),
                email: "a@b.com".to_string(),
                urgency: Urgency::Urgent,
                terms_and_conditions: true,
            }
        );
    }

    #[tokio::test]
    async fn test_ctrl_chars_are_not_typed() {
        let mut app = test_app(FailurePattern::Never);
        app.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
        assert_eq!(app.controller.store().new_item(), "");
    }

    #[tokio::test]
    async fn test_load_populates_items() {
        let mut app = test_app(FailurePattern::Never);
        app.start_load();
        assert!(app.controller.is_loading());

        app.next_persistence_event().await;

        assert_eq!(app.controller.load_status(), LoadStatus::Loaded);
        assert!(app.controller.store().items().is_empty());
    }

    async fn loaded_app(failures: FailurePattern) -> App {
        let mut app = test_app(failures);
        app.start_load();
        app.next_persistence_event().await;
        app
    }

    #[tokio::test]
    async fn test_invalid_enter_shows_errors() {
        let mut app = loaded_app(FailurePattern::Never).await;
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.controller.save_status(), SaveStatus::Ready);
        assert_eq!(app.controller.field_errors().len(), 4);
        assert!(!app.poll_persistence());
    }

    #[tokio::test]
    async fn test_submit_disabled_for_not_essential() {
        let mut app = loaded_app(FailurePattern::Never).await;
        fill_form(&mut app, "Milk");
        app.focus = Focus::Urgency;
        press(&mut app, KeyCode::Right);
        assert_eq!(app.controller.store().urgency(), Urgency::NotEssential);

        press(&mut app, KeyCode::Enter);

        assert_eq!(app.controller.save_status(), SaveStatus::Ready);
        assert!(app.controller.field_errors().is_empty());
    }

    #[tokio::test]
    async fn test_failed_save_then_retry() {
        let mut app = loaded_app(FailurePattern::Alternating).await;
        fill_form(&mut app, "Milk");

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.controller.save_status(), SaveStatus::Saving);
        app.next_persistence_event().await;
        assert_eq!(app.controller.save_status(), SaveStatus::Error);
        assert_eq!(app.controller.store().new_item(), "Milk");

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.controller.save_status(), SaveStatus::Saving);
        app.next_persistence_event().await;
        assert_eq!(app.controller.save_status(), SaveStatus::Success);
        assert_eq!(app.controller.store().fields(), &FormFields::default());
        assert_eq!(app.controller.store().items(), ["Milk".to_string()]);
    }

    #[tokio::test]
    async fn test_space_on_submit_row_submits() {
        let mut app = loaded_app(FailurePattern::Never).await;
        fill_form(&mut app, "Milk");
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Submit);

        press(&mut app, KeyCode::Char(' '));
        app.next_persistence_event().await;

        assert_eq!(app.controller.save_status(), SaveStatus::Success);
    }

    #[tokio::test]
    async fn test_enter_ignored_until_items_load() {
        let mut app = test_app(FailurePattern::Never);
        fill_form(&mut app, "Milk");

        press(&mut app, KeyCode::Enter);

        assert_eq!(app.controller.save_status(), SaveStatus::Ready);
        assert!(app.controller.field_errors().is_empty());
        assert!(!app.poll_persistence());
    }

    #[tokio::test]
    async fn test_f5_retries_failed_load() {
        let mut client = MockPersistenceClient::new();
        let mut seq = Sequence::new();
        client
            .expect_load()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Err(PersistenceError::Poisoned));
        client
            .expect_load()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(vec!["Bread".to_string()]));
        let mut app = App::new(FormController::new(StateStore::new(), Arc::new(client)));

        app.start_load();
        app.next_persistence_event().await;
        assert_eq!(app.controller.load_status(), LoadStatus::Failed);

        press(&mut app, KeyCode::F(5));
        assert!(app.controller.is_loading());
        app.next_persistence_event().await;

        assert_eq!(app.controller.load_status(), LoadStatus::Loaded);
        assert_eq!(app.controller.store().items(), ["Bread".to_string()]);
    }

    #[tokio::test]
    async fn test_f5_ignored_unless_load_failed() {
        let mut client = MockPersistenceClient::new();
        client.expect_load().times(1).returning(|| Ok(Vec::new()));
        let mut app = App::new(FormController::new(StateStore::new(), Arc::new(client)));

        app.start_load();
        press(&mut app, KeyCode::F(5));
        app.next_persistence_event().await;
        assert_eq!(app.controller.load_status(), LoadStatus::Loaded);

        press(&mut app, KeyCode::F(5));
        tokio::task::yield_now().await;

        assert_eq!(app.controller.load_status(), LoadStatus::Loaded);
        assert!(!app.poll_persistence());
    }

    #[test]
    fn test_escape_quits() {
        let mut app = test_app(FailurePattern::Never);
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit());
    }
}
