//! Trait abstraction for the persistence client to enable mocking in tests

use super::error::PersistenceError;
use async_trait::async_trait;

/// Acknowledgement of a successful save
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveAck;

/// Asynchronous load/save of the whole item list
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PersistenceClient: Send + Sync {
    /// Load the persisted items, empty when nothing was saved yet
    async fn load(&self) -> Result<Vec<String>, PersistenceError>;

    /// Replace the persisted items with `items`
    async fn save(&self, items: Vec<String>) -> Result<SaveAck, PersistenceError>;
}
