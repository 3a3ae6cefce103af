//! Reqwest-backed DataCite adapter.

use async_trait::async_trait;
use reqwest::Url;
use tracing::warn;

use super::dto::DoiRecordDto;
use crate::domain::ReviewId;
use crate::domain::ports::{DataError, ReviewContent, ReviewContentSource};
use crate::outbound::json_client::JsonClient;

const DEFAULT_ENDPOINT: &str = "https://api.datacite.org/dois/";

/// Review content from `GET {endpoint}{doi}`.
///
/// Only answers for [`ReviewId::Doi`]; other ids are not found.
pub struct DataciteReviewSource {
    client: JsonClient,
    endpoint: Url,
}

impl DataciteReviewSource {
    /// Adapter against the public DataCite API.
    ///
    /// # Errors
    /// Only if the built-in endpoint fails to parse.
    pub fn new(client: JsonClient) -> Result<Self, url::ParseError> {
        Ok(Self::with_endpoint(client, Url::parse(DEFAULT_ENDPOINT)?))
    }

    pub fn with_endpoint(client: JsonClient, endpoint: Url) -> Self {
        Self { client, endpoint }
    }
}

#[async_trait]
impl ReviewContentSource for DataciteReviewSource {
    async fn fetch_review(&self, review_id: &ReviewId) -> Result<ReviewContent, DataError> {
        let ReviewId::Doi(doi) = review_id else {
            return Err(DataError::not_found());
        };
        let url = self.endpoint.join(doi.as_ref()).map_err(|error| {
            warn!(%doi, %error, "cannot build DataCite URL");
            DataError::unavailable()
        })?;
        let record: DoiRecordDto = self.client.get_json(url).await?;
        record.data.attributes.into_review(doi).ok_or_else(|| {
            warn!(%doi, "DataCite record has no description");
            DataError::unavailable()
        })
    }
}
