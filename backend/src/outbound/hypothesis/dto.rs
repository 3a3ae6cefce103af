//! DTOs for decoding Hypothesis annotation responses.

use serde::Deserialize;
use url::Url;

use super::markdown::render;
use crate::domain::ports::ReviewContent;

#[derive(Debug, Deserialize)]
pub(super) struct AnnotationDto {
    pub(super) text: Option<String>,
    pub(super) links: AnnotationLinksDto,
}

#[derive(Debug, Deserialize)]
pub(super) struct AnnotationLinksDto {
    pub(super) incontext: String,
}

impl AnnotationDto {
    /// Map into review content; `None` when the body is empty or the
    /// in-context link is not a URL.
    pub(super) fn into_review(self) -> Option<ReviewContent> {
        let text = self.text.filter(|text| !text.trim().is_empty())?;
        let url = Url::parse(&self.links.incontext).ok()?;
        Some(ReviewContent {
            full_text: render(&text),
            url,
        })
    }
}
