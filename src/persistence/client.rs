//! Simulated persistence client over a key-value store
//!
//! Adds artificial latency to both operations and rejects saves according
//! to a [`FailurePattern`], so the saving and retry paths of the form can be
//! exercised against a local store.

use super::error::PersistenceError;
use super::store::KeyValueStore;
use super::traits::{PersistenceClient, SaveAck};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Key the item list is stored under
pub const ITEMS_KEY: &str = "items";

/// Default latency of a load
const DEFAULT_LOAD_DELAY: Duration = Duration::from_millis(2000);

/// Default latency of a save
const DEFAULT_SAVE_DELAY: Duration = Duration::from_millis(1000);

/// Which save attempts are rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePattern {
    /// Odd attempts fail, even attempts succeed (the first save fails)
    #[default]
    Alternating,
    Never,
    Always,
}

impl FailurePattern {
    /// Whether the 1-based `attempt` is rejected
    pub fn fails(&self, attempt: u64) -> bool {
        match self {
            Self::Alternating => attempt % 2 == 1,
            Self::Never => false,
            Self::Always => true,
        }
    }
}

/// Persistence client with latency and injected save failures
pub struct SimulatedClient<S> {
    store: S,
    load_delay: Duration,
    save_delay: Duration,
    failures: FailurePattern,
    save_attempts: AtomicU64,
}

impl<S: KeyValueStore> SimulatedClient<S> {
    /// Create a client with the default latencies and alternating failures
    pub fn new(store: S) -> Self {
        Self {
            store,
            load_delay: DEFAULT_LOAD_DELAY,
            save_delay: DEFAULT_SAVE_DELAY,
            failures: FailurePattern::default(),
            save_attempts: AtomicU64::new(0),
        }
    }

    pub fn with_delays(mut self, load_delay: Duration, save_delay: Duration) -> Self {
        self.load_delay = load_delay;
        self.save_delay = save_delay;
        self
    }

    pub fn with_failures(mut self, failures: FailurePattern) -> Self {
        self.failures = failures;
        self
    }

    /// Number of save calls received so far
    #[allow(dead_code)]
    pub fn save_attempts(&self) -> u64 {
        self.save_attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl<S: KeyValueStore> PersistenceClient for SimulatedClient<S> {
    async fn load(&self) -> Result<Vec<String>, PersistenceError> {
        tokio::time::sleep(self.load_delay).await;

        let items = match self.store.get(ITEMS_KEY)? {
            Some(raw) => serde_json::from_str(&raw)?,
            None => Vec::new(),
        };
        tracing::debug!(count = items.len(), "Loaded items");
        Ok(items)
    }

    async fn save(&self, items: Vec<String>) -> Result<SaveAck, PersistenceError> {
        // Attempt number is fixed when the call is made, not when it resolves
        let attempt = self.save_attempts.fetch_add(1, Ordering::SeqCst) + 1;
        tokio::time::sleep(self.save_delay).await;

        if self.failures.fails(attempt) {
            return Err(PersistenceError::SimulatedFailure { attempt });
        }

        let raw = serde_json::to_string(&items)?;
        self.store.set(ITEMS_KEY, raw)?;
        tracing::debug!(attempt, count = items.len(), "Saved items");
        Ok(SaveAck)
    }
}
