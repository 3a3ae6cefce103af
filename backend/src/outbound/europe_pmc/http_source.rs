//! Reqwest-backed Europe PMC search adapter.

use async_trait::async_trait;
use reqwest::Url;
use tracing::warn;

use super::dto::SearchResponseDto;
use crate::domain::ports::{ArticleSearchSource, SearchError, SearchResults};
use crate::outbound::json_client::JsonClient;

const DEFAULT_ENDPOINT: &str = "https://www.ebi.ac.uk/europepmc/webservices/rest/search";
const PAGE_SIZE: &str = "10";

/// Preprint search restricted to the bioRxiv publisher.
pub struct EuropePmcSearch {
    client: JsonClient,
    endpoint: Url,
}

impl EuropePmcSearch {
    /// Adapter against the public Europe PMC API.
    ///
    /// # Errors
    /// Only if the built-in endpoint fails to parse.
    pub fn new(client: JsonClient) -> Result<Self, url::ParseError> {
        Ok(Self::with_endpoint(client, Url::parse(DEFAULT_ENDPOINT)?))
    }

    pub fn with_endpoint(client: JsonClient, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    fn search_url(&self, query: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut()
            .append_pair("query", &format!("{query} PUBLISHER:\"bioRxiv\""))
            .append_pair("format", "json")
            .append_pair("pageSize", PAGE_SIZE);
        url
    }
}

#[async_trait]
impl ArticleSearchSource for EuropePmcSearch {
    async fn search(&self, query: &str) -> Result<SearchResults, SearchError> {
        let response: SearchResponseDto = self
            .client
            .get_json(self.search_url(query))
            .await
            .map_err(|error| {
                warn!(%query, %error, "Europe PMC search failed");
                SearchError::unavailable()
            })?;
        Ok(response.into_results())
    }
}
