//! Submit-time validation of the form fields

use crate::state::{FieldId, FormFields, Urgency};
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;

pub const PRODUCT_REQUIRED: &str = "product required";
pub const EMAIL_REQUIRED: &str = "email required";
pub const EMAIL_INVALID: &str = "invalid email";
pub const URGENCY_REQUIRED: &str = "urgency required";
pub const TERMS_REQUIRED: &str = "terms must be accepted";

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid"));

/// Error messages keyed by the failing field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<FieldId, &'static str>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: FieldId) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    #[allow(dead_code)]
    pub fn contains(&self, field: FieldId) -> bool {
        self.0.contains_key(&field)
    }

    #[allow(dead_code)]
    pub fn fields(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.0.keys().copied()
    }

    fn insert(&mut self, field: FieldId, message: &'static str) {
        self.0.insert(field, message);
    }
}

pub fn is_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

/// Check every field and collect the failures. An empty result is the only
/// signal that the form may be submitted.
pub fn validate(fields: &FormFields) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if fields.new_item.is_empty() {
        errors.insert(FieldId::NewItem, PRODUCT_REQUIRED);
    }
    if fields.email.is_empty() {
        errors.insert(FieldId::Email, EMAIL_REQUIRED);
    } else if !is_email(&fields.email) {
        errors.insert(FieldId::Email, EMAIL_INVALID);
    }
    if fields.urgency == Urgency::Unset {
        errors.insert(FieldId::Urgency, URGENCY_REQUIRED);
    }
    if !fields.terms_and_conditions {
        errors.insert(FieldId::TermsAndConditions, TERMS_REQUIRED);
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn valid_fields() -> FormFields {
        FormFields {
            new_item: "Milk".to_string(),
            email: "a@b.com".to_string(),
            urgency: Urgency::Urgent,
            terms_and_conditions: true,
        }
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        assert!(validate(&valid_fields()).is_empty());
    }

    #[test]
    fn test_all_fields_invalid() {
        let fields = FormFields {
            new_item: String::new(),
            email: "bad".to_string(),
            urgency: Urgency::Unset,
            terms_and_conditions: false,
        };
        let errors = validate(&fields);

        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get(FieldId::NewItem), Some(PRODUCT_REQUIRED));
        assert_eq!(errors.get(FieldId::Email), Some(EMAIL_INVALID));
        assert_eq!(errors.get(FieldId::Urgency), Some(URGENCY_REQUIRED));
        assert_eq!(errors.get(FieldId::TermsAndConditions), Some(TERMS_REQUIRED));
    }

    #[test]
    fn test_each_field_fails_alone() {
        let cases: Vec<(FormFields, FieldId, &str)> = vec![
            (
                FormFields {
                    new_item: String::new(),
                    ..valid_fields()
                },
                FieldId::NewItem,
                PRODUCT_REQUIRED,
            ),
            (
                FormFields {
                    email: String::new(),
                    ..valid_fields()
                },
                FieldId::Email,
                EMAIL_REQUIRED,
            ),
            (
                FormFields {
                    email: "a@b".to_string(),
                    ..valid_fields()
                },
                FieldId::Email,
                EMAIL_INVALID,
            ),
            (
                FormFields {
                    urgency: Urgency::Unset,
                    ..valid_fields()
                },
                FieldId::Urgency,
                URGENCY_REQUIRED,
            ),
            (
                FormFields {
                    terms_and_conditions: false,
                    ..valid_fields()
                },
                FieldId::TermsAndConditions,
                TERMS_REQUIRED,
            ),
        ];

        for (fields, field, message) in cases {
            let errors = validate(&fields);
            assert_eq!(errors.fields().collect::<Vec<_>>(), vec![field]);
            assert_eq!(errors.get(field), Some(message));
        }
    }

    #[test]
    fn test_not_essential_urgency_is_not_an_error() {
        let fields = FormFields {
            urgency: Urgency::NotEssential,
            ..valid_fields()
        };
        let errors = validate(&fields);
        assert!(!errors.contains(FieldId::Urgency));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_email_format() {
        assert!(is_email("a@b.com"));
        assert!(is_email("first.last@example.co.uk"));
        assert!(is_email("prefix a@b.c suffix"));
        assert!(!is_email("bad"));
        assert!(!is_email("a@b"));
        assert!(!is_email("@b.com"));
        assert!(!is_email("a@.com"));
        assert!(!is_email("a@b."));
        assert!(!is_email("a @b.com"));
    }

    #[test]
    fn test_whitespace_email_is_invalid_not_missing() {
        let fields = FormFields {
            email: "   ".to_string(),
            ..valid_fields()
        };
        assert_eq!(validate(&fields).get(FieldId::Email), Some(EMAIL_INVALID));
    }
}
