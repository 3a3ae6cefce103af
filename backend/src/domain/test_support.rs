//! Event builders shared by domain unit tests.

use chrono::{DateTime, Duration, TimeZone, Utc};

use super::events::DomainEvent;
use super::ids::{Doi, EventId, GroupId, ReviewId, UserId};

/// Fixed instant `minutes` after 2020-01-01T00:00:00Z.
pub(crate) fn at(minutes: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0)
        .single()
        .expect("valid base instant")
        + Duration::minutes(minutes)
}

pub(crate) fn user(raw: &str) -> UserId {
    UserId::new(raw).expect("valid user id")
}

pub(crate) fn group(raw: &str) -> GroupId {
    GroupId::new(raw).expect("valid group id")
}

pub(crate) fn doi(raw: &str) -> Doi {
    Doi::new(raw).expect("valid doi")
}

pub(crate) fn hypothesis(raw: &str) -> ReviewId {
    ReviewId::Hypothesis(raw.to_owned())
}

pub(crate) fn follow(user_id: UserId, group_id: GroupId, occurred_at: DateTime<Utc>) -> DomainEvent {
    DomainEvent::UserFollowedGroup {
        id: EventId::generate(),
        occurred_at,
        user_id,
        group_id,
    }
}

pub(crate) fn unfollow(
    user_id: UserId,
    group_id: GroupId,
    occurred_at: DateTime<Utc>,
) -> DomainEvent {
    DomainEvent::UserUnfollowedGroup {
        id: EventId::generate(),
        occurred_at,
        user_id,
        group_id,
    }
}

pub(crate) fn reviewed(
    group_id: GroupId,
    article_doi: Doi,
    review_id: ReviewId,
    occurred_at: DateTime<Utc>,
) -> DomainEvent {
    DomainEvent::GroupReviewedArticle {
        id: EventId::generate(),
        occurred_at,
        group_id,
        article_doi,
        review_id,
    }
}

pub(crate) fn endorsed(group_id: GroupId, article_doi: Doi, occurred_at: DateTime<Utc>) -> DomainEvent {
    DomainEvent::GroupEndorsedArticle {
        id: EventId::generate(),
        occurred_at,
        group_id,
        article_doi,
    }
}

pub(crate) fn saved(user_id: UserId, article_doi: Doi, occurred_at: DateTime<Utc>) -> DomainEvent {
    DomainEvent::UserSavedArticle {
        id: EventId::generate(),
        occurred_at,
        user_id,
        article_doi,
    }
}

pub(crate) fn unsaved(user_id: UserId, article_doi: Doi, occurred_at: DateTime<Utc>) -> DomainEvent {
    DomainEvent::UserUnsavedArticle {
        id: EventId::generate(),
        occurred_at,
        user_id,
        article_doi,
    }
}

pub(crate) fn found_helpful(
    user_id: UserId,
    review_id: ReviewId,
    occurred_at: DateTime<Utc>,
) -> DomainEvent {
    DomainEvent::UserFoundReviewHelpful {
        id: EventId::generate(),
        occurred_at,
        user_id,
        review_id,
    }
}

pub(crate) fn revoked_helpful(
    user_id: UserId,
    review_id: ReviewId,
    occurred_at: DateTime<Utc>,
) -> DomainEvent {
    DomainEvent::UserRevokedFindingReviewHelpful {
        id: EventId::generate(),
        occurred_at,
        user_id,
        review_id,
    }
}

pub(crate) fn found_not_helpful(
    user_id: UserId,
    review_id: ReviewId,
    occurred_at: DateTime<Utc>,
) -> DomainEvent {
    DomainEvent::UserFoundReviewNotHelpful {
        id: EventId::generate(),
        occurred_at,
        user_id,
        review_id,
    }
}

pub(crate) fn revoked_not_helpful(
    user_id: UserId,
    review_id: ReviewId,
    occurred_at: DateTime<Utc>,
) -> DomainEvent {
    DomainEvent::UserRevokedFindingReviewNotHelpful {
        id: EventId::generate(),
        occurred_at,
        user_id,
        review_id,
    }
}
