//! Form controller: input handling and the submit/load lifecycle

use super::validation::{validate, FieldErrors};
use crate::persistence::{PersistenceClient, PersistenceError, SaveAck};
use crate::state::{FieldId, FieldValue, LoadStatus, SaveStatus, StateStore, Urgency};
use std::sync::Arc;

/// Store mutation for one field. Returns false when the value has the wrong
/// shape for the field.
type Mutation = fn(&mut StateStore, FieldValue) -> bool;

fn apply_new_item(store: &mut StateStore, value: FieldValue) -> bool {
    match value {
        FieldValue::Text(text) => {
            store.set_new_item(text);
            true
        }
        FieldValue::Checked(_) => false,
    }
}

fn apply_email(store: &mut StateStore, value: FieldValue) -> bool {
    match value {
        FieldValue::Text(text) => {
            store.set_email(text);
            true
        }
        FieldValue::Checked(_) => false,
    }
}

fn apply_urgency(store: &mut StateStore, value: FieldValue) -> bool {
    let FieldValue::Text(text) = value else {
        return false;
    };
    match text.parse::<Urgency>() {
        Ok(urgency) => {
            store.set_urgency(urgency);
            true
        }
        Err(e) => {
            tracing::debug!("Ignoring urgency input: {e}");
            false
        }
    }
}

fn apply_terms_and_conditions(store: &mut StateStore, value: FieldValue) -> bool {
    match value {
        FieldValue::Checked(checked) => {
            store.set_terms_and_conditions(checked);
            true
        }
        FieldValue::Text(_) => false,
    }
}

fn mutation_for(field: FieldId) -> Mutation {
    match field {
        FieldId::NewItem => apply_new_item,
        FieldId::Email => apply_email,
        FieldId::Urgency => apply_urgency,
        FieldId::TermsAndConditions => apply_terms_and_conditions,
    }
}

/// Drives a [`StateStore`] from user input and persists submissions
pub struct FormController {
    store: StateStore,
    client: Arc<dyn PersistenceClient>,
    field_errors: FieldErrors,
    save_status: SaveStatus,
    load_status: LoadStatus,
}

impl FormController {
    pub fn new(store: StateStore, client: Arc<dyn PersistenceClient>) -> Self {
        Self {
            store,
            client,
            field_errors: FieldErrors::default(),
            save_status: SaveStatus::Ready,
            load_status: LoadStatus::Loading,
        }
    }

    pub fn store(&self) -> &StateStore {
        &self.store
    }

    /// Shared handle to the persistence client, for running calls off the UI loop
    pub fn client(&self) -> Arc<dyn PersistenceClient> {
        Arc::clone(&self.client)
    }

    pub fn field_errors(&self) -> &FieldErrors {
        &self.field_errors
    }

    pub fn save_status(&self) -> SaveStatus {
        self.save_status
    }

    pub fn load_status(&self) -> LoadStatus {
        self.load_status
    }

    pub fn is_loading(&self) -> bool {
        self.load_status == LoadStatus::Loading
    }

    /// Whether the submit control should be enabled. Stays off until the
    /// persisted items are loaded, since a save replaces the whole list.
    pub fn can_submit(&self) -> bool {
        self.load_status == LoadStatus::Loaded
            && self.save_status != SaveStatus::Saving
            && !self.store.is_new_item_too_long()
            && !self.store.is_urgency_too_low()
    }

    /// Apply raw input addressed by its field token. Unknown tokens are ignored.
    #[allow(dead_code)]
    pub fn handle_input(&mut self, token: &str, value: FieldValue) {
        match FieldId::from_token(token) {
            Some(field) => self.handle_field_change(field, value),
            None => tracing::debug!("Ignoring input for unknown field {token:?}"),
        }
    }

    pub fn handle_field_change(&mut self, field: FieldId, value: FieldValue) {
        let mutate = mutation_for(field);
        if !mutate(&mut self.store, value) {
            tracing::debug!("Rejected value for {}", field.token());
        }
    }

    pub fn validate(&self) -> FieldErrors {
        validate(self.store.fields())
    }

    /// Validate and, if the form is clean, enter `Saving`.
    ///
    /// Returns the item list to persist, or `None` when validation failed or
    /// a save is already in flight. The save itself is left to the caller,
    /// whose outcome must be handed to [`complete_submit`](Self::complete_submit).
    pub fn begin_submit(&mut self) -> Option<Vec<String>> {
        if self.save_status == SaveStatus::Saving {
            tracing::debug!("Submit ignored while a save is in flight");
            return None;
        }

        self.field_errors = self.validate();
        if !self.field_errors.is_empty() {
            return None;
        }

        let mut candidate = self.store.items().to_vec();
        candidate.push(self.store.new_item().to_string());
        self.save_status = SaveStatus::Saving;
        Some(candidate)
    }

    pub fn complete_submit(
        &mut self,
        candidate: Vec<String>,
        outcome: Result<SaveAck, PersistenceError>,
    ) {
        match outcome {
            Ok(SaveAck) => {
                tracing::info!(count = candidate.len(), "Request saved");
                self.store.replace_items(candidate);
                self.store.clear_fields();
                self.save_status = SaveStatus::Success;
            }
            Err(e) => {
                tracing::error!("Failed to save items: {e}");
                self.save_status = SaveStatus::Error;
            }
        }
    }

    /// Validate, save and apply the outcome in one call
    #[allow(dead_code)]
    pub async fn submit(&mut self) -> SaveStatus {
        if let Some(candidate) = self.begin_submit() {
            let outcome = self.client.save(candidate.clone()).await;
            self.complete_submit(candidate, outcome);
        }
        self.save_status
    }

    pub fn begin_load(&mut self) {
        self.load_status = LoadStatus::Loading;
    }

    pub fn complete_load(&mut self, outcome: Result<Vec<String>, PersistenceError>) {
        match outcome {
            Ok(items) => {
                tracing::info!(count = items.len(), "Items loaded");
                self.store.replace_items(items);
                self.load_status = LoadStatus::Loaded;
            }
            Err(e) => {
                tracing::error!("Failed to load items: {e}");
                self.load_status = LoadStatus::Failed;
            }
        }
    }

    /// Load the persisted items into the store
    #[allow(dead_code)]
    pub async fn initialize(&mut self) {
        self.begin_load();
        let outcome = self.client.load().await;
        self.complete_load(outcome);
    }
}
