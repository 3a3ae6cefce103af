//! Concurrent merge of feed sources.

use std::future::Future;

use futures_util::future::{BoxFuture, join_all};
use tracing::warn;

use super::FeedItem;
use crate::domain::ports::DataError;

/// A lazily evaluated producer of feed items.
///
/// Nothing runs until the source is handed to [`merge_feeds`].
pub struct FeedSource<'a> {
    label: &'static str,
    fetch: BoxFuture<'a, Result<Vec<FeedItem>, DataError>>,
}

impl<'a> FeedSource<'a> {
    /// Wrap `fetch` under a label used in logs and failure reports.
    pub fn new<F>(label: &'static str, fetch: F) -> Self
    where
        F: Future<Output = Result<Vec<FeedItem>, DataError>> + Send + 'a,
    {
        Self {
            label,
            fetch: Box::pin(fetch),
        }
    }
}

/// Result of merging feed sources.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MergedFeed {
    /// Items from every successful source, newest first.
    pub items: Vec<FeedItem>,
    /// Labels of sources that failed and contributed nothing.
    pub failed_sources: Vec<&'static str>,
}

impl MergedFeed {
    /// Whether the source labelled `label` failed.
    #[must_use]
    pub fn source_failed(&self, label: &str) -> bool {
        self.failed_sources.iter().any(|failed| *failed == label)
    }
}

/// Run every source concurrently and merge their items newest first.
///
/// A failing source contributes no items and never aborts the merge; it is
/// logged and listed in [`MergedFeed::failed_sources`]. Items with equal
/// timestamps keep source order, then arrival order within a source.
pub async fn merge_feeds(sources: Vec<FeedSource<'_>>) -> MergedFeed {
    let (labels, fetches): (Vec<&'static str>, Vec<_>) = sources
        .into_iter()
        .map(|source| (source.label, source.fetch))
        .unzip();
    let outcomes = join_all(fetches).await;

    let mut merged = MergedFeed::default();
    for (label, outcome) in labels.into_iter().zip(outcomes) {
        match outcome {
            Ok(mut items) => merged.items.append(&mut items),
            Err(error) => {
                warn!(source = label, %error, "feed source failed; contributing no items");
                merged.failed_sources.push(label);
            }
        }
    }
    merged
        .items
        .sort_by(|left, right| right.occurred_at().cmp(&left.occurred_at()));
    merged
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::test_support::{at, group, hypothesis};
    use chrono::{DateTime, Utc};
    use rstest::rstest;

    fn review(id: &str, when: DateTime<Utc>) -> FeedItem {
        FeedItem::Review {
            review_id: hypothesis(id),
            group_id: group("g1"),
            occurred_at: when,
        }
    }

    fn ok_source(label: &'static str, items: Vec<FeedItem>) -> FeedSource<'static> {
        FeedSource::new(label, async move { Ok(items) })
    }

    fn failing_source(label: &'static str, error: DataError) -> FeedSource<'static> {
        FeedSource::new(label, async move { Err(error) })
    }

    #[rstest]
    #[tokio::test]
    async fn merges_sources_newest_first() {
        let merged = merge_feeds(vec![
            ok_source("a", vec![review("a1", at(1)), review("a2", at(5))]),
            ok_source("b", vec![review("b1", at(3))]),
        ])
        .await;

        assert_eq!(
            merged.items,
            vec![review("a2", at(5)), review("b1", at(3)), review("a1", at(1))]
        );
        assert!(merged.failed_sources.is_empty());
    }

    #[rstest]
    #[case::not_found(DataError::not_found())]
    #[case::unavailable(DataError::unavailable())]
    #[tokio::test]
    async fn failed_source_contributes_nothing(#[case] error: DataError) {
        let merged = merge_feeds(vec![
            ok_source("a", vec![review("a1", at(1))]),
            failing_source("b", error),
            ok_source("c", vec![review("c1", at(2))]),
        ])
        .await;

        assert_eq!(merged.items, vec![review("c1", at(2)), review("a1", at(1))]);
        assert_eq!(merged.failed_sources, vec!["b"]);
        assert!(merged.source_failed("b"));
        assert!(!merged.source_failed("a"));
    }

    #[rstest]
    #[tokio::test]
    async fn equal_timestamps_keep_source_order() {
        let merged = merge_feeds(vec![
            ok_source("a", vec![review("a1", at(1)), review("a2", at(1))]),
            ok_source("b", vec![review("b1", at(1))]),
        ])
        .await;

        assert_eq!(
            merged.items,
            vec![review("a1", at(1)), review("a2", at(1)), review("b1", at(1))]
        );
    }

    #[rstest]
    #[tokio::test]
    async fn no_sources_yield_an_empty_feed() {
        assert_eq!(merge_feeds(Vec::new()).await, MergedFeed::default());
    }
}
