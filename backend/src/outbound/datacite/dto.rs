//! DTOs for decoding DataCite DOI records.

use serde::Deserialize;
use url::Url;

use crate::domain::html::escape_html;
use crate::domain::ports::ReviewContent;
use crate::domain::{Doi, HtmlFragment};

#[derive(Debug, Deserialize)]
pub(super) struct DoiRecordDto {
    pub(super) data: DoiDataDto,
}

#[derive(Debug, Deserialize)]
pub(super) struct DoiDataDto {
    pub(super) attributes: DoiAttributesDto,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct DoiAttributesDto {
    #[serde(default)]
    pub(super) descriptions: Vec<DescriptionDto>,
    pub(super) url: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct DescriptionDto {
    pub(super) description: Option<String>,
    pub(super) description_type: Option<String>,
}

/// Plain-text paragraphs, separated by blank lines, as escaped HTML.
fn paragraphs(text: &str) -> HtmlFragment {
    let markup = text
        .split("\n\n")
        .map(str::trim)
        .filter(|paragraph| !paragraph.is_empty())
        .map(|paragraph| format!("<p>{}</p>", escape_html(paragraph)))
        .collect::<Vec<_>>()
        .join("\n");
    HtmlFragment::trusted(markup)
}

impl DoiAttributesDto {
    fn body(&self) -> Option<&str> {
        let usable = |d: &&DescriptionDto| {
            d.description
                .as_deref()
                .is_some_and(|text| !text.trim().is_empty())
        };
        self.descriptions
            .iter()
            .filter(usable)
            .find(|d| d.description_type.as_deref() == Some("Abstract"))
            .or_else(|| self.descriptions.iter().find(usable))
            .and_then(|d| d.description.as_deref())
    }

    /// Map into review content; `None` when the record has no description.
    ///
    /// The landing page falls back to the DOI resolver.
    pub(super) fn into_review(self, doi: &Doi) -> Option<ReviewContent> {
        let full_text = paragraphs(self.body()?);
        let url = self
            .url
            .as_deref()
            .and_then(|raw| Url::parse(raw).ok())
            .or_else(|| Url::parse(&format!("https://doi.org/{doi}")).ok())?;
        Some(ReviewContent { full_text, url })
    }
}
