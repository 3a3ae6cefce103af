//! Reqwest-backed Crossref works adapter.

use async_trait::async_trait;
use reqwest::Url;
use tracing::warn;

use super::dto::WorkEnvelopeDto;
use crate::domain::Doi;
use crate::domain::ports::{ArticleDetails, ArticleMetadataSource, DataError};
use crate::outbound::json_client::JsonClient;

const DEFAULT_ENDPOINT: &str = "https://api.crossref.org/works/";

/// Article metadata from `GET {endpoint}{doi}`.
pub struct CrossrefArticleSource {
    client: JsonClient,
    endpoint: Url,
}

impl CrossrefArticleSource {
    /// Adapter against the public Crossref API.
    ///
    /// # Errors
    /// Only if the built-in endpoint fails to parse.
    pub fn new(client: JsonClient) -> Result<Self, url::ParseError> {
        Ok(Self::with_endpoint(client, Url::parse(DEFAULT_ENDPOINT)?))
    }

    /// Adapter against a custom endpoint; it must end with `/`.
    pub fn with_endpoint(client: JsonClient, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    fn work_url(&self, doi: &Doi) -> Result<Url, DataError> {
        self.endpoint.join(doi.as_ref()).map_err(|error| {
            warn!(%doi, %error, "cannot build Crossref URL");
            DataError::unavailable()
        })
    }
}

#[async_trait]
impl ArticleMetadataSource for CrossrefArticleSource {
    async fn fetch_article(&self, doi: &Doi) -> Result<ArticleDetails, DataError> {
        let envelope: WorkEnvelopeDto = self.client.get_json(self.work_url(doi)?).await?;
        envelope.message.into_details(doi).ok_or_else(|| {
            warn!(%doi, "Crossref work has no title");
            DataError::unavailable()
        })
    }
}
