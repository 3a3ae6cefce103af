//! Driven port for the full text of reviews.

use async_trait::async_trait;
use url::Url;

use super::DataError;
use crate::domain::{HtmlFragment, ReviewId};

/// Displayable review content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewContent {
    /// Sanitised review body.
    pub full_text: HtmlFragment,
    /// Canonical location of the review.
    pub url: Url,
}

/// Port for fetching review content wherever it is hosted.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReviewContentSource: Send + Sync {
    /// Fetch the content of `review_id`.
    async fn fetch_review(&self, review_id: &ReviewId) -> Result<ReviewContent, DataError>;
}

/// Fixture producing a short placeholder review for any id.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureReviewContentSource;

#[async_trait]
impl ReviewContentSource for FixtureReviewContentSource {
    async fn fetch_review(&self, review_id: &ReviewId) -> Result<ReviewContent, DataError> {
        let url = match review_id {
            ReviewId::Doi(doi) => format!("https://doi.org/{doi}"),
            ReviewId::Hypothesis(id) => format!("https://hyp.is/{id}"),
        };
        Ok(ReviewContent {
            full_text: HtmlFragment::trusted("<p>Fixture review.</p>"),
            url: Url::parse(&url).map_err(|_| DataError::unavailable())?,
        })
    }
}
