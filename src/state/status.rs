//! Save and load lifecycle states

/// Outcome of the most recent submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaveStatus {
    #[default]
    Ready,
    Saving,
    Success,
    Error,
}

impl SaveStatus {
    /// Label for the submit button
    pub fn button_label(&self) -> &'static str {
        match self {
            Self::Ready => "Submit",
            Self::Saving => "Saving changes...",
            Self::Success => "Saved! Submit another",
            Self::Error => "Save failed, retry?",
        }
    }
}

/// State of the item list load
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadStatus {
    #[default]
    Loading,
    Loaded,
    Failed,
}
