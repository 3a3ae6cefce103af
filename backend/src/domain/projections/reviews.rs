//! Group evaluation read models: reviews, endorsements and group activity.

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};

use super::follows::project_followers;
use crate::domain::events::{DomainEvent, chronological};
use crate::domain::ids::{Doi, GroupId, ReviewId};

/// A review of an article, as recorded in the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewReference {
    /// Where the review content lives.
    pub review_id: ReviewId,
    /// Group that published it.
    pub group_id: GroupId,
    /// Publication time.
    pub occurred_at: DateTime<Utc>,
}

/// Kind of group activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    /// The group reviewed the article.
    Reviewed,
    /// The group endorsed the article.
    Endorsed,
}

/// One entry of a group's activity stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupActivity {
    /// Article acted on.
    pub article_doi: Doi,
    /// What the group did.
    pub kind: ActivityKind,
    /// When it happened.
    pub occurred_at: DateTime<Utc>,
}

/// Headline numbers for a group page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GroupMeta {
    /// Users currently following the group.
    pub followers: usize,
    /// Reviews the group has published.
    pub reviews: usize,
}

/// Reviews of `doi`, oldest first.
#[must_use]
pub fn find_reviews_for_article_doi(events: &[DomainEvent], doi: &Doi) -> Vec<ReviewReference> {
    chronological(events)
        .into_iter()
        .filter_map(|event| match event {
            DomainEvent::GroupReviewedArticle {
                occurred_at,
                group_id,
                article_doi,
                review_id,
                ..
            } if article_doi == doi => Some(ReviewReference {
                review_id: review_id.clone(),
                group_id: group_id.clone(),
                occurred_at: *occurred_at,
            }),
            _ => None,
        })
        .collect()
}

/// Number of reviews published for `doi`.
#[must_use]
pub fn project_review_count_for_article(events: &[DomainEvent], doi: &Doi) -> usize {
    events
        .iter()
        .filter(|event| {
            matches!(event, DomainEvent::GroupReviewedArticle { article_doi, .. } if article_doi == doi)
        })
        .count()
}

/// Distinct articles endorsed by `group`.
#[must_use]
pub fn project_endorsed_article_count(events: &[DomainEvent], group: &GroupId) -> usize {
    events
        .iter()
        .filter_map(|event| match event {
            DomainEvent::GroupEndorsedArticle {
                group_id,
                article_doi,
                ..
            } if group_id == group => Some(article_doi),
            _ => None,
        })
        .collect::<BTreeSet<_>>()
        .len()
}

/// Follower and review counts for `group`.
#[must_use]
pub fn project_group_meta(events: &[DomainEvent], group: &GroupId) -> GroupMeta {
    let reviews = events
        .iter()
        .filter(|event| {
            matches!(event, DomainEvent::GroupReviewedArticle { group_id, .. } if group_id == group)
        })
        .count();
    GroupMeta {
        followers: project_followers(events, group).len(),
        reviews,
    }
}

/// Most recent reviews and endorsements by `group`, newest first.
#[must_use]
pub fn project_recent_group_activity(
    events: &[DomainEvent],
    group: &GroupId,
    limit: usize,
) -> Vec<GroupActivity> {
    chronological(events)
        .into_iter()
        .rev()
        .filter_map(|event| match event {
            DomainEvent::GroupReviewedArticle {
                group_id,
                article_doi,
                occurred_at,
                ..
            } if group_id == group => Some(GroupActivity {
                article_doi: article_doi.clone(),
                kind: ActivityKind::Reviewed,
                occurred_at: *occurred_at,
            }),
            DomainEvent::GroupEndorsedArticle {
                group_id,
                article_doi,
                occurred_at,
                ..
            } if group_id == group => Some(GroupActivity {
                article_doi: article_doi.clone(),
                kind: ActivityKind::Endorsed,
                occurred_at: *occurred_at,
            }),
            _ => None,
        })
        .take(limit)
        .collect()
}

/// Distinct articles most recently evaluated by any of `groups`, newest first.
///
/// Each article appears once, positioned by its latest evaluation.
#[must_use]
pub fn project_evaluated_articles_for_groups(
    events: &[DomainEvent],
    groups: &BTreeSet<GroupId>,
    limit: usize,
) -> Vec<Doi> {
    let mut seen: BTreeSet<&Doi> = BTreeSet::new();
    chronological(events)
        .into_iter()
        .rev()
        .filter_map(|event| match event {
            DomainEvent::GroupReviewedArticle {
                group_id,
                article_doi,
                ..
            }
            | DomainEvent::GroupEndorsedArticle {
                group_id,
                article_doi,
                ..
            } if groups.contains(group_id) => Some(article_doi),
            _ => None,
        })
        .filter(|doi| seen.insert(*doi))
        .take(limit)
        .cloned()
        .collect()
}
