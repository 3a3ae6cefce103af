//! Driven port for full-text article search.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::define_port_error;
use crate::domain::Doi;

/// One search hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResultItem {
    /// Article identifier.
    pub doi: Doi,
    /// Title as plain text.
    pub title: String,
    /// Author byline as supplied by the index.
    pub authors: String,
    /// Date the preprint was first posted.
    pub posted_date: NaiveDate,
}

/// A page of search hits plus the index's total hit count.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchResults {
    /// Hits on this page.
    pub items: Vec<SearchResultItem>,
    /// Total number of matching articles.
    pub total: usize,
}

define_port_error! {
    /// Errors raised by search adapters.
    pub enum SearchError {
        /// The index could not be queried.
        Unavailable => "search unavailable",
    }
}

/// Port for searching preprints by free text.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArticleSearchSource: Send + Sync {
    /// Search for `query`.
    async fn search(&self, query: &str) -> Result<SearchResults, SearchError>;
}

/// Fixture index with no documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureArticleSearchSource;

#[async_trait]
impl ArticleSearchSource for FixtureArticleSearchSource {
    async fn search(&self, _query: &str) -> Result<SearchResults, SearchError> {
        Ok(SearchResults::default())
    }
}
