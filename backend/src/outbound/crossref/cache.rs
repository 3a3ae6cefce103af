//! In-memory success cache for article metadata.
//!
//! Only successful lookups are cached so transient upstream failures are
//! retried on the next request. Entries never expire; metadata of a posted
//! preprint does not change within a process lifetime.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::Doi;
use crate::domain::ports::{ArticleDetails, ArticleMetadataSource, DataError};

/// Decorator caching successful [`ArticleMetadataSource`] lookups.
pub struct CachedArticleMetadataSource {
    inner: Arc<dyn ArticleMetadataSource>,
    entries: RwLock<HashMap<Doi, ArticleDetails>>,
}

impl CachedArticleMetadataSource {
    pub fn new(inner: Arc<dyn ArticleMetadataSource>) -> Self {
        Self {
            inner,
            entries: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl ArticleMetadataSource for CachedArticleMetadataSource {
    async fn fetch_article(&self, doi: &Doi) -> Result<ArticleDetails, DataError> {
        if let Some(hit) = self.entries.read().await.get(doi) {
            debug!(%doi, "article metadata cache hit");
            return Ok(hit.clone());
        }
        let details = self.inner.fetch_article(doi).await?;
        self.entries
            .write()
            .await
            .insert(doi.clone(), details.clone());
        Ok(details)
    }
}
