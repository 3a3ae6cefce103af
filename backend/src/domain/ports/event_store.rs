//! Driven port for the append-only event log.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::DomainEvent;

define_port_error! {
    /// Errors raised by event store adapters.
    pub enum EventStoreError {
        /// The backing storage rejected the operation.
        Storage { message: String } => "event store failure: {message}",
    }
}

/// Ordered, append-only log of domain events.
///
/// Reads return a full snapshot in log (insertion) order; callers sort by
/// `occurred_at` before folding. Appends from one call keep their order and
/// concurrent callers are serialised by the adapter.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Snapshot of every event recorded so far.
    async fn get_all_events(&self) -> Result<Vec<DomainEvent>, EventStoreError>;

    /// Append `events` to the log.
    async fn commit_events(&self, events: &[DomainEvent]) -> Result<(), EventStoreError>;
}

/// Fixture store: always empty, discards appends.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureEventStore;

#[async_trait]
impl EventStore for FixtureEventStore {
    async fn get_all_events(&self) -> Result<Vec<DomainEvent>, EventStoreError> {
        Ok(Vec::new())
    }

    async fn commit_events(&self, _events: &[DomainEvent]) -> Result<(), EventStoreError> {
        Ok(())
    }
}
