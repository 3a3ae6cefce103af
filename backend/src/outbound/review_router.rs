//! Routes review lookups to the service hosting each kind of review id.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ReviewId;
use crate::domain::ports::{DataError, ReviewContent, ReviewContentSource};

/// [`ReviewContentSource`] dispatching on the [`ReviewId`] variant.
pub struct ReviewSourceRouter {
    datacite: Arc<dyn ReviewContentSource>,
    hypothesis: Arc<dyn ReviewContentSource>,
}

impl ReviewSourceRouter {
    pub fn new(
        datacite: Arc<dyn ReviewContentSource>,
        hypothesis: Arc<dyn ReviewContentSource>,
    ) -> Self {
        Self {
            datacite,
            hypothesis,
        }
    }
}

#[async_trait]
impl ReviewContentSource for ReviewSourceRouter {
    async fn fetch_review(&self, review_id: &ReviewId) -> Result<ReviewContent, DataError> {
        match review_id {
            ReviewId::Doi(_) => self.datacite.fetch_review(review_id).await,
            ReviewId::Hypothesis(_) => self.hypothesis.fetch_review(review_id).await,
        }
    }
}
