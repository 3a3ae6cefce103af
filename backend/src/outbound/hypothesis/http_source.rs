//! Reqwest-backed Hypothesis annotation adapter.

use async_trait::async_trait;
use reqwest::Url;
use tracing::warn;

use super::dto::AnnotationDto;
use crate::domain::ReviewId;
use crate::domain::ports::{DataError, ReviewContent, ReviewContentSource};
use crate::outbound::json_client::JsonClient;

const DEFAULT_ENDPOINT: &str = "https://api.hypothes.is/api/annotations/";

/// Review content from `GET {endpoint}{annotation id}`.
///
/// Only answers for [`ReviewId::Hypothesis`]; other ids are not found.
pub struct HypothesisReviewSource {
    client: JsonClient,
    endpoint: Url,
}

impl HypothesisReviewSource {
    /// Adapter against the public Hypothesis API.
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
impl ReviewContentSource for HypothesisReviewSource {
    async fn fetch_review(&self, review_id: &ReviewId) -> Result<ReviewContent, DataError> {
        let ReviewId::Hypothesis(annotation) = review_id else {
            return Err(DataError::not_found());
        };
        let url = self.endpoint.join(annotation).map_err(|error| {
            warn!(%review_id, %error, "cannot build Hypothesis URL");
            DataError::unavailable()
        })?;
        let annotation: AnnotationDto = self.client.get_json(url).await?;
        annotation.into_review().ok_or_else(|| {
            warn!(%review_id, "annotation has no usable body");
            DataError::unavailable()
        })
    }
}
