//! Driven ports: the collaborators the core talks to.
//!
//! Each port is an async trait with a `Fixture*` implementation for wiring
//! without network access, and a mockall mock for unit tests.

mod macros;
pub(crate) use macros::define_port_error;

mod article_metadata_source;
mod article_search_source;
mod article_version_source;
mod data_error;
mod event_store;
mod group_directory;
mod review_content_source;
mod user_directory;

#[cfg(test)]
pub use article_metadata_source::MockArticleMetadataSource;
pub use article_metadata_source::{
    ArticleDetails, ArticleMetadataSource, FixtureArticleMetadataSource,
};
#[cfg(test)]
pub use article_search_source::MockArticleSearchSource;
pub use article_search_source::{
    ArticleSearchSource, FixtureArticleSearchSource, SearchError, SearchResultItem, SearchResults,
};
#[cfg(test)]
pub use article_version_source::MockArticleVersionSource;
pub use article_version_source::{
    ArticleVersion, ArticleVersionSource, FixtureArticleVersionSource,
};
pub use data_error::DataError;
#[cfg(test)]
pub use event_store::MockEventStore;
pub use event_store::{EventStore, EventStoreError, FixtureEventStore};
#[cfg(test)]
pub use group_directory::MockGroupDirectory;
pub use group_directory::{FixtureGroupDirectory, Group, GroupDirectory};
#[cfg(test)]
pub use review_content_source::MockReviewContentSource;
pub use review_content_source::{FixtureReviewContentSource, ReviewContent, ReviewContentSource};
#[cfg(test)]
pub use user_directory::MockUserDirectory;
pub use user_directory::{FixtureUserDirectory, UserDetails, UserDirectory};
