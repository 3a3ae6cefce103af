//! Driven port for the posted versions of a preprint.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use url::Url;

use super::DataError;
use crate::domain::{ArticleServer, Doi};

/// One posted version of a preprint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleVersion {
    /// Landing page of this version.
    pub source: Url,
    /// When the version was posted.
    pub occurred_at: DateTime<Utc>,
    /// Version number, starting at 1.
    pub version: u32,
}

/// Port for listing the versions of an article on its preprint server.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArticleVersionSource: Send + Sync {
    /// Versions of `doi` posted on `server`, in any order.
    async fn find_versions_for_article_doi(
        &self,
        doi: &Doi,
        server: ArticleServer,
    ) -> Result<Vec<ArticleVersion>, DataError>;
}

/// Fixture reporting no versions.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureArticleVersionSource;

#[async_trait]
impl ArticleVersionSource for FixtureArticleVersionSource {
    async fn find_versions_for_article_doi(
        &self,
        _doi: &Doi,
        _server: ArticleServer,
    ) -> Result<Vec<ArticleVersion>, DataError> {
        Ok(Vec::new())
    }
}
