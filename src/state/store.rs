//! The form document: field values plus the persisted item list

use super::fields::{FormFields, Urgency};

/// Maximum item name length, exclusive
pub const NEW_ITEM_LIMIT: usize = 20;

/// Single-writer document holding the form fields and the requested items.
///
/// All writes go through the named mutations below; projections are
/// recomputed from the current values on every read.
#[derive(Debug, Clone, Default)]
pub struct StateStore {
    fields: FormFields,
    items: Vec<String>,
}

impl StateStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn new_item(&self) -> &str {
        &self.fields.new_item
    }

    pub fn email(&self) -> &str {
        &self.fields.email
    }

    pub fn urgency(&self) -> Urgency {
        self.fields.urgency
    }

    pub fn terms_and_conditions(&self) -> bool {
        self.fields.terms_and_conditions
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn set_new_item(&mut self, value: String) {
        self.fields.new_item = value;
    }

    pub fn set_email(&mut self, value: String) {
        self.fields.email = value;
    }

    pub fn set_urgency(&mut self, value: Urgency) {
        self.fields.urgency = value;
    }

    pub fn set_terms_and_conditions(&mut self, value: bool) {
        self.fields.terms_and_conditions = value;
    }

    /// Replace the whole item list
    pub fn replace_items(&mut self, items: Vec<String>) {
        self.items = items;
    }

    /// Reset every field to its default, leaving items alone
    pub fn clear_fields(&mut self) {
        self.fields = FormFields::default();
    }

    /// Length of the item name in characters
    pub fn new_item_length(&self) -> usize {
        self.fields.new_item.chars().count()
    }

    pub fn is_new_item_too_long(&self) -> bool {
        self.new_item_length() >= NEW_ITEM_LIMIT
    }

    pub fn is_urgency_too_low(&self) -> bool {
        self.fields.urgency == Urgency::NotEssential
    }
}
