//! DTOs for decoding Europe PMC search responses.

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::warn;

use crate::domain::Doi;
use crate::domain::html::strip_tags;
use crate::domain::ports::{SearchResultItem, SearchResults};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct SearchResponseDto {
    pub(super) hit_count: usize,
    pub(super) result_list: ResultListDto,
}

#[derive(Debug, Deserialize)]
pub(super) struct ResultListDto {
    #[serde(default)]
    pub(super) result: Vec<ResultDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ResultDto {
    pub(super) doi: Option<String>,
    pub(super) title: String,
    #[serde(default)]
    pub(super) author_string: String,
    pub(super) first_publication_date: String,
}

impl ResultDto {
    fn into_item(self) -> Option<SearchResultItem> {
        let doi = Doi::new(self.doi?).ok()?;
        let posted_date = NaiveDate::parse_from_str(&self.first_publication_date, "%Y-%m-%d").ok()?;
        Some(SearchResultItem {
            doi,
            title: strip_tags(&self.title),
            authors: self.author_string,
            posted_date,
        })
    }
}

impl SearchResponseDto {
    /// Hits that carry a DOI and a date; others are logged and dropped.
    /// The total stays the index's own count.
    pub(super) fn into_results(self) -> SearchResults {
        let items = self
            .result_list
            .result
            .into_iter()
            .filter_map(|hit| {
                let title = hit.title.clone();
                let item = hit.into_item();
                if item.is_none() {
                    warn!(%title, "skipping search hit without DOI or date");
                }
                item
            })
            .collect();
        SearchResults {
            items,
            total: self.hit_count,
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for search decoding.
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn decodes_hits_and_total() {
        let response: SearchResponseDto = serde_json::from_str(
            r#"{
                "version": "6.5",
                "hitCount": 1289,
                "resultList": {"result": [
                    {
                        "doi": "10.1101/2020.05.01.072975",
                        "title": "Spike <i>mutations</i>",
                        "authorString": "Korber B, Fischer WM.",
                        "firstPublicationDate": "2020-05-05"
                    },
                    {
                        "title": "No DOI here",
                        "firstPublicationDate": "2020-05-06"
                    }
                ]}
            }"#,
        )
        .expect("decodes");

        let results = response.into_results();

        assert_eq!(results.total, 1289);
        assert_eq!(results.items.len(), 1);
        let hit = &results.items[0];
        assert_eq!(hit.title, "Spike mutations");
        assert_eq!(hit.authors, "Korber B, Fischer WM.");
        assert_eq!(
            hit.posted_date,
            NaiveDate::from_ymd_opt(2020, 5, 5).expect("valid date")
        );
    }
}
