//! Domain events recorded in the append-only log.
//!
//! Events are immutable facts. Read models are derived by folding them in
//! chronological order, see [`chronological`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ids::{Doi, EventId, GroupId, ReviewId, UserId};

/// One fact in the event log.
///
/// Serialised with a `type` discriminator so seed files stay readable:
///
/// ```
/// use reviewhub::domain::DomainEvent;
///
/// let event: DomainEvent = serde_json::from_str(r#"{
///     "type": "UserFollowedGroup",
///     "id": "4d5a3a2e-94a1-4ef5-9a54-5f0f5c1a2f0d",
///     "occurred_at": "2020-06-01T10:00:00Z",
///     "user_id": "alice",
///     "group_id": "b560187e-f2fb-4ff9-a861-a204f3fc0fb0"
/// }"#).unwrap();
/// assert_eq!(event.user_id().map(AsRef::as_ref), Some("alice"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum DomainEvent {
    /// A user started following a group.
    UserFollowedGroup {
        /// Event identity.
        id: EventId,
        /// When the event happened.
        occurred_at: DateTime<Utc>,
        /// Acting user.
        user_id: UserId,
        /// Followed group.
        group_id: GroupId,
    },
    /// A user stopped following a group.
    UserUnfollowedGroup {
        /// Event identity.
        id: EventId,
        /// When the event happened.
        occurred_at: DateTime<Utc>,
        /// Acting user.
        user_id: UserId,
        /// Unfollowed group.
        group_id: GroupId,
    },
    /// A group published a review of an article.
    GroupReviewedArticle {
        /// Event identity.
        id: EventId,
        /// When the review was published.
        occurred_at: DateTime<Utc>,
        /// Reviewing group.
        group_id: GroupId,
        /// Reviewed article.
        article_doi: Doi,
        /// Where the review content lives.
        review_id: ReviewId,
    },
    /// A group endorsed an article.
    GroupEndorsedArticle {
        /// Event identity.
        id: EventId,
        /// When the endorsement was made.
        occurred_at: DateTime<Utc>,
        /// Endorsing group.
        group_id: GroupId,
        /// Endorsed article.
        article_doi: Doi,
    },
    /// A user saved an article to their list.
    UserSavedArticle {
        /// Event identity.
        id: EventId,
        /// When the event happened.
        occurred_at: DateTime<Utc>,
        /// Acting user.
        user_id: UserId,
        /// Saved article.
        article_doi: Doi,
    },
    /// A user removed an article from their list.
    UserUnsavedArticle {
        /// Event identity.
        id: EventId,
        /// When the event happened.
        occurred_at: DateTime<Utc>,
        /// Acting user.
        user_id: UserId,
        /// Removed article.
        article_doi: Doi,
    },
    /// A user marked a review as helpful.
    UserFoundReviewHelpful {
        /// Event identity.
        id: EventId,
        /// When the event happened.
        occurred_at: DateTime<Utc>,
        /// Acting user.
        user_id: UserId,
        /// Target review.
        review_id: ReviewId,
    },
    /// A user withdrew a helpful vote.
    UserRevokedFindingReviewHelpful {
        /// Event identity.
        id: EventId,
        /// When the event happened.
        occurred_at: DateTime<Utc>,
        /// Acting user.
        user_id: UserId,
        /// Target review.
        review_id: ReviewId,
    },
    /// A user marked a review as not helpful.
    UserFoundReviewNotHelpful {
        /// Event identity.
        id: EventId,
        /// When the event happened.
        occurred_at: DateTime<Utc>,
        /// Acting user.
        user_id: UserId,
        /// Target review.
        review_id: ReviewId,
    },
    /// A user withdrew a not-helpful vote.
    UserRevokedFindingReviewNotHelpful {
        /// Event identity.
        id: EventId,
        /// When the event happened.
        occurred_at: DateTime<Utc>,
        /// Acting user.
        user_id: UserId,
        /// Target review.
        review_id: ReviewId,
    },
}

impl DomainEvent {
    /// Event identity.
    #[must_use]
    pub const fn id(&self) -> EventId {
        match self {
            Self::UserFollowedGroup { id, .. }
            | Self::UserUnfollowedGroup { id, .. }
            | Self::GroupReviewedArticle { id, .. }
            | Self::GroupEndorsedArticle { id, .. }
            | Self::UserSavedArticle { id, .. }
            | Self::UserUnsavedArticle { id, .. }
            | Self::UserFoundReviewHelpful { id, .. }
            | Self::UserRevokedFindingReviewHelpful { id, .. }
            | Self::UserFoundReviewNotHelpful { id, .. }
            | Self::UserRevokedFindingReviewNotHelpful { id, .. } => *id,
        }
    }

    /// When the event happened.
    #[must_use]
    pub const fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            Self::UserFollowedGroup { occurred_at, .. }
            | Self::UserUnfollowedGroup { occurred_at, .. }
            | Self::GroupReviewedArticle { occurred_at, .. }
            | Self::GroupEndorsedArticle { occurred_at, .. }
            | Self::UserSavedArticle { occurred_at, .. }
            | Self::UserUnsavedArticle { occurred_at, .. }
            | Self::UserFoundReviewHelpful { occurred_at, .. }
            | Self::UserRevokedFindingReviewHelpful { occurred_at, .. }
            | Self::UserFoundReviewNotHelpful { occurred_at, .. }
            | Self::UserRevokedFindingReviewNotHelpful { occurred_at, .. } => *occurred_at,
        }
    }

    /// Acting user, for user-initiated events.
    #[must_use]
    pub const fn user_id(&self) -> Option<&UserId> {
        match self {
            Self::UserFollowedGroup { user_id, .. }
            | Self::UserUnfollowedGroup { user_id, .. }
            | Self::UserSavedArticle { user_id, .. }
            | Self::UserUnsavedArticle { user_id, .. }
            | Self::UserFoundReviewHelpful { user_id, .. }
            | Self::UserRevokedFindingReviewHelpful { user_id, .. }
            | Self::UserFoundReviewNotHelpful { user_id, .. }
            | Self::UserRevokedFindingReviewNotHelpful { user_id, .. } => Some(user_id),
            Self::GroupReviewedArticle { .. } | Self::GroupEndorsedArticle { .. } => None,
        }
    }

    /// Short event name, used in structured logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::UserFollowedGroup { .. } => "UserFollowedGroup",
            Self::UserUnfollowedGroup { .. } => "UserUnfollowedGroup",
            Self::GroupReviewedArticle { .. } => "GroupReviewedArticle",
            Self::GroupEndorsedArticle { .. } => "GroupEndorsedArticle",
            Self::UserSavedArticle { .. } => "UserSavedArticle",
            Self::UserUnsavedArticle { .. } => "UserUnsavedArticle",
            Self::UserFoundReviewHelpful { .. } => "UserFoundReviewHelpful",
            Self::UserRevokedFindingReviewHelpful { .. } => "UserRevokedFindingReviewHelpful",
            Self::UserFoundReviewNotHelpful { .. } => "UserFoundReviewNotHelpful",
            Self::UserRevokedFindingReviewNotHelpful { .. } => {
                "UserRevokedFindingReviewNotHelpful"
            }
        }
    }
}

/// Borrow `events` ordered by `occurred_at`, keeping log order for ties.
///
/// Writers may append out of order, so every fold goes through this first.
#[must_use]
pub fn chronological(events: &[DomainEvent]) -> Vec<&DomainEvent> {
    let mut ordered: Vec<&DomainEvent> = events.iter().collect();
    ordered.sort_by_key(|event| event.occurred_at());
    ordered
}
