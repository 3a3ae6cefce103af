//! Event log held in memory, optionally seeded from a JSON file.
//!
//! The seed file is a JSON array of events in the tagged form accepted by
//! [`DomainEvent`]'s `Deserialize` impl. Commits are not written back.

use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;

use crate::domain::DomainEvent;
use crate::domain::ports::{EventStore, EventStoreError};

/// Why the seed file could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum EventSeedError {
    #[error("failed to read event seed {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid event seed {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Append-only log guarded by an async `RwLock`; writers are serialised.
#[derive(Debug, Default)]
pub struct InMemoryEventStore {
    events: RwLock<Vec<DomainEvent>>,
}

impl InMemoryEventStore {
    pub fn new(events: Vec<DomainEvent>) -> Self {
        Self {
            events: RwLock::new(events),
        }
    }

    /// Load the initial log from `path`.
    ///
    /// # Errors
    /// [`EventSeedError`] when the file is unreadable or not a JSON event array.
    pub fn from_seed_file(path: &Path) -> Result<Self, EventSeedError> {
        let raw = fs::read(path).map_err(|source| EventSeedError::Read {
            path: path.to_owned(),
            source,
        })?;
        let events: Vec<DomainEvent> =
            serde_json::from_slice(&raw).map_err(|source| EventSeedError::Parse {
                path: path.to_owned(),
                source,
            })?;
        info!(path = %path.display(), count = events.len(), "event log seeded");
        Ok(Self::new(events))
    }
}

#[async_trait]
impl EventStore for InMemoryEventStore {
    async fn get_all_events(&self) -> Result<Vec<DomainEvent>, EventStoreError> {
        Ok(self.events.read().await.clone())
    }

    async fn commit_events(&self, events: &[DomainEvent]) -> Result<(), EventStoreError> {
        self.events.write().await.extend_from_slice(events);
        Ok(())
    }
}
