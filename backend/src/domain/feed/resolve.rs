//! Resolution of feed items into displayable content.

use chrono::{DateTime, Utc};
use futures_util::future::{join, join_all};
use tracing::warn;
use url::Url;

use super::FeedItem;
use crate::domain::ports::{Group, GroupDirectory, ReviewContentSource};
use crate::domain::projections::{VoteCounts, project_user_vote_state, project_vote_counts};
use crate::domain::{
    ArticleServer, DomainEvent, GroupId, HtmlFragment, ReviewId, UserId, VoteState,
};

/// A review with everything needed to render it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedReview {
    /// Review identity.
    pub review_id: ReviewId,
    /// Publishing group.
    pub group: Group,
    /// Sanitised review body.
    pub full_text: HtmlFragment,
    /// Canonical review location.
    pub url: Url,
    /// Publication time.
    pub occurred_at: DateTime<Utc>,
    /// Helpful / not-helpful tallies.
    pub counts: VoteCounts,
    /// The viewer's own response, `None` when signed out.
    pub viewer_vote: Option<VoteState>,
}

/// A feed item after resolution, or a placeholder for one that failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedFeedItem {
    /// A fully resolved review.
    Review(ResolvedReview),
    /// A posted article version.
    ArticleVersion {
        /// Landing page of the version.
        source: Url,
        /// Version number.
        version: u32,
        /// Hosting server.
        server: ArticleServer,
        /// Posting time.
        occurred_at: DateTime<Utc>,
    },
    /// A review whose content or group could not be resolved.
    ReviewError {
        /// Review identity.
        review_id: ReviewId,
        /// Publishing group.
        group_id: GroupId,
        /// Publication time.
        occurred_at: DateTime<Utc>,
    },
    /// The version history of the article could not be fetched.
    ArticleVersionError {
        /// Server that failed to answer.
        server: ArticleServer,
    },
}

/// Resolves feed items against the review and group ports.
///
/// Vote widgets are projected from the event snapshot the resolver was built
/// with, so resolution involves no further reads of the log.
pub struct FeedItemResolver<'a> {
    reviews: &'a dyn ReviewContentSource,
    groups: &'a dyn GroupDirectory,
    events: &'a [DomainEvent],
    viewer: Option<&'a UserId>,
}

impl<'a> FeedItemResolver<'a> {
    /// Build a resolver for one page render.
    #[must_use]
    pub fn new(
        reviews: &'a dyn ReviewContentSource,
        groups: &'a dyn GroupDirectory,
        events: &'a [DomainEvent],
        viewer: Option<&'a UserId>,
    ) -> Self {
        Self {
            reviews,
            groups,
            events,
            viewer,
        }
    }

    /// Resolve one item.
    ///
    /// A review needs both its text and its group; if either lookup fails the
    /// whole item degrades to [`ResolvedFeedItem::ReviewError`]. Article
    /// versions carry their own content and always resolve.
    pub async fn resolve(&self, item: FeedItem) -> ResolvedFeedItem {
        match item {
            FeedItem::ArticleVersion {
                source,
                version,
                server,
                occurred_at,
            } => ResolvedFeedItem::ArticleVersion {
                source,
                version,
                server,
                occurred_at,
            },
            FeedItem::Review {
                review_id,
                group_id,
                occurred_at,
            } => {
                let (content, group) = join(
                    self.reviews.fetch_review(&review_id),
                    self.groups.get_group(&group_id),
                )
                .await;
                match (content, group) {
                    (Ok(content), Some(group)) => ResolvedFeedItem::Review(ResolvedReview {
                        counts: project_vote_counts(self.events, &review_id),
                        viewer_vote: self
                            .viewer
                            .map(|user| project_user_vote_state(self.events, user, &review_id)),
                        review_id,
                        group,
                        full_text: content.full_text,
                        url: content.url,
                        occurred_at,
                    }),
                    (content, group) => {
                        warn!(
                            review_id = %review_id,
                            group_id = %group_id,
                            content_error = ?content.err(),
                            group_missing = group.is_none(),
                            "review could not be resolved; rendering placeholder"
                        );
                        ResolvedFeedItem::ReviewError {
                            review_id,
                            group_id,
                            occurred_at,
                        }
                    }
                }
            }
        }
    }

    /// Resolve every item concurrently, preserving input order.
    pub async fn resolve_all(&self, items: Vec<FeedItem>) -> Vec<ResolvedFeedItem> {
        join_all(items.into_iter().map(|item| self.resolve(item))).await
    }
}
