//! Form field value objects

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Identifier of a form input, matching the tokens the input surface emits
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldId {
    NewItem,
    Email,
    Urgency,
    TermsAndConditions,
}

impl FieldId {
    /// All fields in display order
    #[allow(dead_code)]
    pub const ALL: [FieldId; 4] = [
        FieldId::NewItem,
        FieldId::Email,
        FieldId::Urgency,
        FieldId::TermsAndConditions,
    ];

    /// Parse an input token such as `NEW_ITEM`
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "NEW_ITEM" => Some(Self::NewItem),
            "EMAIL" => Some(Self::Email),
            "URGENCY" => Some(Self::Urgency),
            "TERMS_AND_CONDITIONS" => Some(Self::TermsAndConditions),
            _ => None,
        }
    }

    pub fn token(&self) -> &'static str {
        match self {
            Self::NewItem => "NEW_ITEM",
            Self::Email => "EMAIL",
            Self::Urgency => "URGENCY",
            Self::TermsAndConditions => "TERMS_AND_CONDITIONS",
        }
    }
}

/// Raw value coming from an input control
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Text inputs and the urgency selector
    Text(String),
    /// Checkbox state
    Checked(bool),
}

/// Urgency level of a request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Urgency {
    /// Nothing selected yet
    #[default]
    Unset,
    NotEssential,
    Moderate,
    Urgent,
}

impl Urgency {
    /// Levels a user can pick, in selector order
    pub const SELECTABLE: [Urgency; 3] = [Urgency::NotEssential, Urgency::Moderate, Urgency::Urgent];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Unset => "",
            Self::NotEssential => "No Esencial",
            Self::Moderate => "Moderada",
            Self::Urgent => "Urgente",
        }
    }

    /// Next selectable level, wrapping around
    pub fn next(&self) -> Self {
        match self {
            Self::Unset | Self::Urgent => Self::NotEssential,
            Self::NotEssential => Self::Moderate,
            Self::Moderate => Self::Urgent,
        }
    }

    /// Previous selectable level, wrapping around
    pub fn prev(&self) -> Self {
        match self {
            Self::Unset | Self::NotEssential => Self::Urgent,
            Self::Moderate => Self::NotEssential,
            Self::Urgent => Self::Moderate,
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown urgency level: {0:?}")]
pub struct ParseUrgencyError(pub String);

impl FromStr for Urgency {
    type Err = ParseUrgencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "" => Ok(Self::Unset),
            "No Esencial" => Ok(Self::NotEssential),
            "Moderada" => Ok(Self::Moderate),
            "Urgente" => Ok(Self::Urgent),
            other => Err(ParseUrgencyError(other.to_string())),
        }
    }
}

/// Values currently entered in the form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub new_item: String,
    pub email: String,
    pub urgency: Urgency,
    pub terms_and_conditions: bool,
}
