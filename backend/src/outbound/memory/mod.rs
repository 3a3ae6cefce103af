//! In-process adapters: the event log, the group directory and user profiles.

mod event_store;
mod group_directory;
mod user_directory;

pub use event_store::{EventSeedError, InMemoryEventStore};
pub use group_directory::InMemoryGroupDirectory;
pub use user_directory::InMemoryUserDirectory;
