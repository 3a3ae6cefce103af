//! Activity feeds: merging item sources and resolving items for display.

mod merge;
mod resolve;

use chrono::{DateTime, Utc};
use url::Url;

use super::{ArticleServer, GroupId, ReviewId};

pub use merge::{FeedSource, MergedFeed, merge_feeds};
pub use resolve::{FeedItemResolver, ResolvedFeedItem, ResolvedReview};

/// One unit of activity eligible for an article's timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedItem {
    /// A group's review of the article.
    Review {
        /// Where the review content lives.
        review_id: ReviewId,
        /// Reviewing group.
        group_id: GroupId,
        /// Publication time.
        occurred_at: DateTime<Utc>,
    },
    /// A posted version of the article.
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
}

impl FeedItem {
    /// Timestamp used to order the feed.
    #[must_use]
    pub const fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            Self::Review { occurred_at, .. } | Self::ArticleVersion { occurred_at, .. } => {
                *occurred_at
            }
        }
    }
}
