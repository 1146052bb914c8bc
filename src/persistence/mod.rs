//! Persistence of the requested item list

mod client;
mod error;
mod store;
mod traits;

pub use client::{FailurePattern, SimulatedClient};
pub use error::PersistenceError;
pub use store::FileStore;
pub use traits::{PersistenceClient, SaveAck};

#[cfg(test)]
pub use store::MemoryStore;
#[cfg(test)]
pub use traits::MockPersistenceClient;
