//! Driven port for article metadata (title, abstract, authors).

use async_trait::async_trait;

use super::DataError;
use crate::domain::{ArticleServer, Doi};

/// Metadata describing one preprint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleDetails {
    /// Article identifier.
    pub doi: Doi,
    /// Title as plain text.
    pub title: String,
    /// Abstract as plain text; empty when the publisher supplied none.
    pub abstract_text: String,
    /// Author display names in byline order.
    pub authors: Vec<String>,
    /// Preprint server hosting the article.
    pub server: ArticleServer,
}

/// Port for looking up article metadata by DOI.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ArticleMetadataSource: Send + Sync {
    /// Fetch metadata for `doi`.
    async fn fetch_article(&self, doi: &Doi) -> Result<ArticleDetails, DataError>;
}

/// Fixture returning placeholder metadata for any DOI.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureArticleMetadataSource;

#[async_trait]
impl ArticleMetadataSource for FixtureArticleMetadataSource {
    async fn fetch_article(&self, doi: &Doi) -> Result<ArticleDetails, DataError> {
        Ok(ArticleDetails {
            doi: doi.clone(),
            title: format!("Preprint {doi}"),
            abstract_text: "An abstract.".to_owned(),
            authors: vec!["A. Author".to_owned()],
            server: ArticleServer::Biorxiv,
        })
    }
}
