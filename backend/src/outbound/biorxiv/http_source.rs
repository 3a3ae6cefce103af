//! Reqwest-backed bioRxiv details adapter.

use async_trait::async_trait;
use reqwest::Url;
use tracing::warn;

use super::dto::DetailsDto;
use crate::domain::ports::{ArticleVersion, ArticleVersionSource, DataError};
use crate::domain::{ArticleServer, Doi};
use crate::outbound::json_client::JsonClient;

const DEFAULT_ENDPOINT: &str = "https://api.biorxiv.org/details/";

/// Versions from `GET {endpoint}{server}/{doi}`.
pub struct BiorxivVersionSource {
    client: JsonClient,
    endpoint: Url,
}

impl BiorxivVersionSource {
    /// Adapter against the public bioRxiv API.
    ///
    /// # Errors
    /// Only if the built-in endpoint fails to parse.
    pub fn new(client: JsonClient) -> Result<Self, url::ParseError> {
        Ok(Self::with_endpoint(client, Url::parse(DEFAULT_ENDPOINT)?))
    }

    pub fn with_endpoint(client: JsonClient, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    fn details_url(&self, doi: &Doi, server: ArticleServer) -> Result<Url, DataError> {
        self.endpoint
            .join(&format!("{}/{doi}", server.slug()))
            .map_err(|error| {
                warn!(%doi, %error, "cannot build bioRxiv URL");
                DataError::unavailable()
            })
    }
}

#[async_trait]
impl ArticleVersionSource for BiorxivVersionSource {
    async fn find_versions_for_article_doi(
        &self,
        doi: &Doi,
        server: ArticleServer,
    ) -> Result<Vec<ArticleVersion>, DataError> {
        let details: DetailsDto = self.client.get_json(self.details_url(doi, server)?).await?;
        Ok(details.into_versions(doi, server))
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for URL construction.
    use std::time::Duration;

    use super::*;
    use crate::outbound::json_client::HttpIdentity;
    use rstest::rstest;

    #[rstest]
    #[case(ArticleServer::Biorxiv, "https://api.biorxiv.org/details/biorxiv/10.1101/2020.07.04.187583")]
    #[case(ArticleServer::Medrxiv, "https://api.biorxiv.org/details/medrxiv/10.1101/2020.07.04.187583")]
    fn details_url_names_the_server(#[case] server: ArticleServer, #[case] expected: &str) {
        let client =
            JsonClient::new(Duration::from_secs(1), HttpIdentity::default()).expect("client");
        let source = BiorxivVersionSource::new(client).expect("endpoint parses");
        let doi = Doi::new("10.1101/2020.07.04.187583").expect("valid doi");

        let url = source.details_url(&doi, server).expect("url builds");

        assert_eq!(url.as_str(), expected);
    }
}
