//! Helpful / not-helpful tallies per review.

use std::collections::HashMap;

use crate::domain::events::{DomainEvent, chronological};
use crate::domain::ids::{ReviewId, UserId};
use crate::domain::responses::VoteState;

/// Net response counts for one review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VoteCounts {
    /// Users currently finding the review helpful.
    pub helpful_count: usize,
    /// Users currently finding the review not helpful.
    pub not_helpful_count: usize,
}

fn vote_target(event: &DomainEvent) -> Option<(&UserId, &ReviewId)> {
    match event {
        DomainEvent::UserFoundReviewHelpful {
            user_id, review_id, ..
        }
        | DomainEvent::UserRevokedFindingReviewHelpful {
            user_id, review_id, ..
        }
        | DomainEvent::UserFoundReviewNotHelpful {
            user_id, review_id, ..
        }
        | DomainEvent::UserRevokedFindingReviewNotHelpful {
            user_id, review_id, ..
        } => Some((user_id, review_id)),
        _ => None,
    }
}

/// Helpful and not-helpful counts for `review`.
///
/// Counts are derived from each user's folded [`VoteState`], so a revoke
/// without a matching vote changes nothing and neither count can go negative.
#[must_use]
pub fn project_vote_counts(events: &[DomainEvent], review: &ReviewId) -> VoteCounts {
    let mut states: HashMap<&UserId, VoteState> = HashMap::new();
    for event in chronological(events) {
        if let Some((user_id, review_id)) = vote_target(event) {
            if review_id == review {
                let state = states.entry(user_id).or_default();
                *state = state.apply(event);
            }
        }
    }
    states
        .values()
        .fold(VoteCounts::default(), |mut counts, state| {
            match state {
                VoteState::Helpful => counts.helpful_count += 1,
                VoteState::NotHelpful => counts.not_helpful_count += 1,
                VoteState::None => {}
            }
            counts
        })
}

/// `user`'s current response to `review`.
#[must_use]
pub fn project_user_vote_state(
    events: &[DomainEvent],
    user: &UserId,
    review: &ReviewId,
) -> VoteState {
    chronological(events)
        .into_iter()
        .filter(|event| vote_target(event) == Some((user, review)))
        .fold(VoteState::None, VoteState::apply)
}
