//! Helpful / not-helpful responses to reviews.
//!
//! A user holds at most one polarity per review. Switching polarity closes the
//! current one before opening the other, so every vote in the log is
//! explicitly opened and closed.

use std::str::FromStr;

use chrono::{DateTime, Utc};

use super::events::DomainEvent;
use super::ids::{EventId, ReviewId, UserId};

/// A user's current response to one review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VoteState {
    /// No response recorded.
    #[default]
    None,
    /// Marked helpful.
    Helpful,
    /// Marked not helpful.
    NotHelpful,
}

impl VoteState {
    /// State after observing `event`, assuming it concerns this user/review.
    ///
    /// Revoking a polarity the user does not hold leaves the state untouched.
    #[must_use]
    pub const fn apply(self, event: &DomainEvent) -> Self {
        match (self, event) {
            (_, DomainEvent::UserFoundReviewHelpful { .. }) => Self::Helpful,
            (_, DomainEvent::UserFoundReviewNotHelpful { .. }) => Self::NotHelpful,
            (Self::Helpful, DomainEvent::UserRevokedFindingReviewHelpful { .. })
            | (Self::NotHelpful, DomainEvent::UserRevokedFindingReviewNotHelpful { .. }) => {
                Self::None
            }
            (state, _) => state,
        }
    }
}

/// Command submitted from the review response form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseCommand {
    /// `respond-helpful`
    RespondHelpful,
    /// `respond-not-helpful`
    RespondNotHelpful,
    /// `revoke-response`
    RevokeResponse,
}

impl ResponseCommand {
    /// Form value for this command.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RespondHelpful => "respond-helpful",
            Self::RespondNotHelpful => "respond-not-helpful",
            Self::RevokeResponse => "revoke-response",
        }
    }
}

/// Raised when a form carries an unknown command value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown response command '{0}'")]
pub struct UnknownResponseCommand(pub String);

impl FromStr for ResponseCommand {
    type Err = UnknownResponseCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "respond-helpful" => Ok(Self::RespondHelpful),
            "respond-not-helpful" => Ok(Self::RespondNotHelpful),
            "revoke-response" => Ok(Self::RevokeResponse),
            other => Err(UnknownResponseCommand(other.to_owned())),
        }
    }
}

/// Vote fact to be recorded, before it is stamped with id and time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoteAction {
    /// Record `UserFoundReviewHelpful`.
    FoundHelpful,
    /// Record `UserRevokedFindingReviewHelpful`.
    RevokedHelpful,
    /// Record `UserFoundReviewNotHelpful`.
    FoundNotHelpful,
    /// Record `UserRevokedFindingReviewNotHelpful`.
    RevokedNotHelpful,
}

impl VoteAction {
    /// Materialise the action as a domain event.
    #[must_use]
    pub fn into_event(
        self,
        occurred_at: DateTime<Utc>,
        user_id: UserId,
        review_id: ReviewId,
    ) -> DomainEvent {
        let id = EventId::generate();
        match self {
            Self::FoundHelpful => DomainEvent::UserFoundReviewHelpful {
                id,
                occurred_at,
                user_id,
                review_id,
            },
            Self::RevokedHelpful => DomainEvent::UserRevokedFindingReviewHelpful {
                id,
                occurred_at,
                user_id,
                review_id,
            },
            Self::FoundNotHelpful => DomainEvent::UserFoundReviewNotHelpful {
                id,
                occurred_at,
                user_id,
                review_id,
            },
            Self::RevokedNotHelpful => DomainEvent::UserRevokedFindingReviewNotHelpful {
                id,
                occurred_at,
                user_id,
                review_id,
            },
        }
    }
}

/// Actions to record when `command` is applied in `current`, in order.
///
/// | current    | respond-helpful                | respond-not-helpful            | revoke-response   |
/// |------------|--------------------------------|--------------------------------|-------------------|
/// | None       | FoundHelpful                   | FoundNotHelpful                | -                 |
/// | Helpful    | -                              | RevokedHelpful, FoundNotHelpful| RevokedHelpful    |
/// | NotHelpful | RevokedNotHelpful, FoundHelpful| -                              | RevokedNotHelpful |
#[must_use]
pub fn transition(current: VoteState, command: ResponseCommand) -> Vec<VoteAction> {
    use ResponseCommand::{RespondHelpful, RespondNotHelpful, RevokeResponse};
    match (current, command) {
        (VoteState::None, RespondHelpful) => vec![VoteAction::FoundHelpful],
        (VoteState::None, RespondNotHelpful) => vec![VoteAction::FoundNotHelpful],
        (VoteState::Helpful, RespondNotHelpful) => {
            vec![VoteAction::RevokedHelpful, VoteAction::FoundNotHelpful]
        }
        (VoteState::Helpful, RevokeResponse) => vec![VoteAction::RevokedHelpful],
        (VoteState::NotHelpful, RespondHelpful) => {
            vec![VoteAction::RevokedNotHelpful, VoteAction::FoundHelpful]
        }
        (VoteState::NotHelpful, RevokeResponse) => vec![VoteAction::RevokedNotHelpful],
        (VoteState::None, RevokeResponse)
        | (VoteState::Helpful, RespondHelpful)
        | (VoteState::NotHelpful, RespondNotHelpful) => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    use ResponseCommand::{RespondHelpful, RespondNotHelpful, RevokeResponse};
    use VoteAction::{FoundHelpful, FoundNotHelpful, RevokedHelpful, RevokedNotHelpful};

    #[rstest]
    #[case(VoteState::None, RespondHelpful, vec![FoundHelpful])]
    #[case(VoteState::None, RespondNotHelpful, vec![FoundNotHelpful])]
    #[case(VoteState::None, RevokeResponse, vec![])]
    #[case(VoteState::Helpful, RespondHelpful, vec![])]
    #[case(VoteState::Helpful, RespondNotHelpful, vec![RevokedHelpful, FoundNotHelpful])]
    #[case(VoteState::Helpful, RevokeResponse, vec![RevokedHelpful])]
    #[case(VoteState::NotHelpful, RespondHelpful, vec![RevokedNotHelpful, FoundHelpful])]
    #[case(VoteState::NotHelpful, RespondNotHelpful, vec![])]
    #[case(VoteState::NotHelpful, RevokeResponse, vec![RevokedNotHelpful])]
    fn transition_table(
        #[case] current: VoteState,
        #[case] command: ResponseCommand,
        #[case] expected: Vec<VoteAction>,
    ) {
        assert_eq!(transition(current, command), expected);
    }

    #[rstest]
    #[case(VoteState::None, RespondHelpful, VoteState::Helpful)]
    #[case(VoteState::Helpful, RespondNotHelpful, VoteState::NotHelpful)]
    #[case(VoteState::NotHelpful, RespondHelpful, VoteState::Helpful)]
    #[case(VoteState::Helpful, RevokeResponse, VoteState::None)]
    #[case(VoteState::NotHelpful, RevokeResponse, VoteState::None)]
    #[case(VoteState::None, RevokeResponse, VoteState::None)]
    fn applying_emitted_events_reaches_target_state(
        #[case] current: VoteState,
        #[case] command: ResponseCommand,
        #[case] expected: VoteState,
    ) {
        let user = UserId::new("u1").expect("user id");
        let review: ReviewId = "hypothesis:r1".parse().expect("review id");
        let reached = transition(current, command)
            .into_iter()
            .map(|action| action.into_event(Utc::now(), user.clone(), review.clone()))
            .fold(current, |state, event| state.apply(&event));
        assert_eq!(reached, expected);
    }

    #[rstest]
    #[case("respond-helpful", Ok(RespondHelpful))]
    #[case("respond-not-helpful", Ok(RespondNotHelpful))]
    #[case("revoke-response", Ok(RevokeResponse))]
    #[case("upvote", Err(UnknownResponseCommand("upvote".to_owned())))]
    fn parses_form_values(
        #[case] raw: &str,
        #[case] expected: Result<ResponseCommand, UnknownResponseCommand>,
    ) {
        assert_eq!(raw.parse::<ResponseCommand>(), expected);
    }
}
