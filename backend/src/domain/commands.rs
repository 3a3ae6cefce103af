//! User commands: follow, save and respond.
//!
//! A command reads the current log snapshot, decides which events (if any)
//! express the change, and hands them back to the caller to commit. Commands
//! that would not change state produce no events.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use mockable::Clock;
use tracing::info;

use super::ports::{EventStore, EventStoreError, GroupDirectory};
use super::projections::{project_follows, project_has_user_saved_article, project_user_vote_state};
use super::responses::{ResponseCommand, transition};
use super::{Doi, DomainEvent, Error, EventId, GroupId, ReviewId, UserId};

/// Events needed for `user` to follow `group`.
#[must_use]
pub fn follow_events(
    events: &[DomainEvent],
    user: &UserId,
    group: &GroupId,
    now: DateTime<Utc>,
) -> Vec<DomainEvent> {
    if project_follows(events, user, group) {
        return Vec::new();
    }
    vec![DomainEvent::UserFollowedGroup {
        id: EventId::generate(),
        occurred_at: now,
        user_id: user.clone(),
        group_id: group.clone(),
    }]
}

/// Events needed for `user` to stop following `group`.
#[must_use]
pub fn unfollow_events(
    events: &[DomainEvent],
    user: &UserId,
    group: &GroupId,
    now: DateTime<Utc>,
) -> Vec<DomainEvent> {
    if !project_follows(events, user, group) {
        return Vec::new();
    }
    vec![DomainEvent::UserUnfollowedGroup {
        id: EventId::generate(),
        occurred_at: now,
        user_id: user.clone(),
        group_id: group.clone(),
    }]
}

/// Events needed for `user` to save `doi`.
#[must_use]
pub fn save_article_events(
    events: &[DomainEvent],
    user: &UserId,
    doi: &Doi,
    now: DateTime<Utc>,
) -> Vec<DomainEvent> {
    if project_has_user_saved_article(events, user, doi) {
        return Vec::new();
    }
    vec![DomainEvent::UserSavedArticle {
        id: EventId::generate(),
        occurred_at: now,
        user_id: user.clone(),
        article_doi: doi.clone(),
    }]
}

/// Events needed for `user` to remove `doi` from their list.
#[must_use]
pub fn unsave_article_events(
    events: &[DomainEvent],
    user: &UserId,
    doi: &Doi,
    now: DateTime<Utc>,
) -> Vec<DomainEvent> {
    if !project_has_user_saved_article(events, user, doi) {
        return Vec::new();
    }
    vec![DomainEvent::UserUnsavedArticle {
        id: EventId::generate(),
        occurred_at: now,
        user_id: user.clone(),
        article_doi: doi.clone(),
    }]
}

/// Events expressing `command` from `user`'s current response to `review`.
#[must_use]
pub fn respond_events(
    events: &[DomainEvent],
    user: &UserId,
    review: &ReviewId,
    command: ResponseCommand,
    now: DateTime<Utc>,
) -> Vec<DomainEvent> {
    let current = project_user_vote_state(events, user, review);
    transition(current, command)
        .into_iter()
        .map(|action| action.into_event(now, user.clone(), review.clone()))
        .collect()
}

/// Command use-cases over the event store.
#[derive(Clone)]
pub struct CommandService {
    events: Arc<dyn EventStore>,
    groups: Arc<dyn GroupDirectory>,
    clock: Arc<dyn Clock>,
}

impl CommandService {
    /// Create a service over the given ports.
    pub fn new(
        events: Arc<dyn EventStore>,
        groups: Arc<dyn GroupDirectory>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            events,
            groups,
            clock,
        }
    }

    fn map_store_error(error: EventStoreError) -> Error {
        match error {
            EventStoreError::Storage { message } => {
                Error::service_unavailable(format!("event store unavailable: {message}"))
            }
        }
    }

    async fn snapshot(&self) -> Result<Vec<DomainEvent>, Error> {
        self.events
            .get_all_events()
            .await
            .map_err(Self::map_store_error)
    }

    /// Follow a group known to the directory.
    ///
    /// # Errors
    /// [`ErrorCode::NotFound`](super::ErrorCode::NotFound) for unknown groups;
    /// service-unavailable when the log cannot be read.
    pub async fn follow(&self, user: &UserId, group: &GroupId) -> Result<Vec<DomainEvent>, Error> {
        if self.groups.get_group(group).await.is_none() {
            return Err(Error::not_found(format!("group '{group}' not found")));
        }
        let events = self.snapshot().await?;
        Ok(follow_events(&events, user, group, self.clock.utc()))
    }

    /// Stop following a group.
    ///
    /// # Errors
    /// Service-unavailable when the log cannot be read.
    pub async fn unfollow(
        &self,
        user: &UserId,
        group: &GroupId,
    ) -> Result<Vec<DomainEvent>, Error> {
        let events = self.snapshot().await?;
        Ok(unfollow_events(&events, user, group, self.clock.utc()))
    }

    /// Save an article to the user's list.
    ///
    /// # Errors
    /// Service-unavailable when the log cannot be read.
    pub async fn save_article(&self, user: &UserId, doi: &Doi) -> Result<Vec<DomainEvent>, Error> {
        let events = self.snapshot().await?;
        Ok(save_article_events(&events, user, doi, self.clock.utc()))
    }

    /// Remove an article from the user's list.
    ///
    /// # Errors
    /// Service-unavailable when the log cannot be read.
    pub async fn unsave_article(
        &self,
        user: &UserId,
        doi: &Doi,
    ) -> Result<Vec<DomainEvent>, Error> {
        let events = self.snapshot().await?;
        Ok(unsave_article_events(&events, user, doi, self.clock.utc()))
    }

    /// Apply a helpful / not-helpful / revoke command to a review.
    ///
    /// # Errors
    /// Service-unavailable when the log cannot be read.
    pub async fn respond(
        &self,
        user: &UserId,
        review: &ReviewId,
        command: ResponseCommand,
    ) -> Result<Vec<DomainEvent>, Error> {
        let events = self.snapshot().await?;
        Ok(respond_events(
            &events,
            user,
            review,
            command,
            self.clock.utc(),
        ))
    }

    /// Append the events produced by a command.
    ///
    /// # Errors
    /// Service-unavailable when the store rejects the append.
    pub async fn commit(&self, events: &[DomainEvent]) -> Result<(), Error> {
        if events.is_empty() {
            return Ok(());
        }
        self.events
            .commit_events(events)
            .await
            .map_err(Self::map_store_error)?;
        for event in events {
            info!(event_id = %event.id(), kind = event.kind(), "event committed");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::{Group, MockEventStore, MockGroupDirectory};
    use crate::domain::test_support::{
        at, doi, follow, found_helpful, group, hypothesis, saved, user,
    };
    use chrono::Local;
    use rstest::rstest;

    struct FixtureClock;

    impl Clock for FixtureClock {
        fn local(&self) -> DateTime<Local> {
            at(100).with_timezone(&Local)
        }

        fn utc(&self) -> DateTime<Utc> {
            at(100)
        }
    }

    fn known_group() -> Group {
        Group {
            id: group("g1"),
            name: "Review Club".to_owned(),
            avatar_path: String::new(),
            description: String::new(),
            highlights: false,
        }
    }

    fn service(store: MockEventStore, groups: MockGroupDirectory) -> CommandService {
        CommandService::new(Arc::new(store), Arc::new(groups), Arc::new(FixtureClock))
    }

    fn store_with(events: Vec<DomainEvent>) -> MockEventStore {
        let mut store = MockEventStore::new();
        store
            .expect_get_all_events()
            .return_once(move || Ok(events));
        store
    }

    #[rstest]
    fn follow_is_skipped_when_already_following() {
        let log = vec![follow(user("u1"), group("g1"), at(0))];
        assert!(follow_events(&log, &user("u1"), &group("g1"), at(1)).is_empty());
        assert_eq!(
            unfollow_events(&log, &user("u1"), &group("g1"), at(1)).len(),
            1
        );
    }

    #[rstest]
    fn unfollow_without_follow_emits_nothing() {
        assert!(unfollow_events(&[], &user("u1"), &group("g1"), at(1)).is_empty());
    }

    #[rstest]
    fn save_and_unsave_only_emit_on_change() {
        let log = vec![saved(user("u1"), doi("10.1101/1"), at(0))];
        assert!(save_article_events(&log, &user("u1"), &doi("10.1101/1"), at(1)).is_empty());
        assert!(unsave_article_events(&[], &user("u1"), &doi("10.1101/1"), at(1)).is_empty());
        assert!(matches!(
            unsave_article_events(&log, &user("u1"), &doi("10.1101/1"), at(1)).as_slice(),
            [DomainEvent::UserUnsavedArticle { .. }]
        ));
    }

    #[rstest]
    fn respond_helpful_when_helpful_is_a_no_op() {
        let log = vec![found_helpful(user("u1"), hypothesis("r1"), at(0))];
        let emitted = respond_events(
            &log,
            &user("u1"),
            &hypothesis("r1"),
            ResponseCommand::RespondHelpful,
            at(1),
        );
        assert!(emitted.is_empty());
    }

    #[rstest]
    fn switching_to_not_helpful_revokes_first() {
        let log = vec![found_helpful(user("u1"), hypothesis("r1"), at(0))];
        let emitted = respond_events(
            &log,
            &user("u1"),
            &hypothesis("r1"),
            ResponseCommand::RespondNotHelpful,
            at(1),
        );
        assert!(matches!(
            emitted.as_slice(),
            [
                DomainEvent::UserRevokedFindingReviewHelpful { .. },
                DomainEvent::UserFoundReviewNotHelpful { .. }
            ]
        ));
        assert!(emitted.iter().all(|event| event.occurred_at() == at(1)));
    }

    #[rstest]
    #[tokio::test]
    async fn follow_rejects_unknown_groups() {
        let mut groups = MockGroupDirectory::new();
        groups.expect_get_group().return_once(|_| None);
        let service = service(MockEventStore::new(), groups);

        let error = service
            .follow(&user("u1"), &group("nope"))
            .await
            .expect_err("unknown group");

        assert_eq!(error.code(), ErrorCode::NotFound);
    }

    #[rstest]
    #[tokio::test]
    async fn follow_stamps_events_with_clock_time() {
        let mut groups = MockGroupDirectory::new();
        groups
            .expect_get_group()
            .return_once(|_| Some(known_group()));
        let service = service(store_with(Vec::new()), groups);

        let events = service
            .follow(&user("u1"), &group("g1"))
            .await
            .expect("follow succeeds");

        assert_eq!(events.len(), 1);
        assert_eq!(events.first().map(DomainEvent::occurred_at), Some(at(100)));
    }

    #[rstest]
    #[tokio::test]
    async fn unreadable_log_is_service_unavailable() {
        let mut store = MockEventStore::new();
        store
            .expect_get_all_events()
            .return_once(|| Err(EventStoreError::storage("disk on fire")));
        let service = service(store, MockGroupDirectory::new());

        let error = service
            .save_article(&user("u1"), &doi("10.1101/1"))
            .await
            .expect_err("store failure");

        assert_eq!(error.code(), ErrorCode::ServiceUnavailable);
    }

    #[rstest]
    #[tokio::test]
    async fn commit_skips_empty_batches() {
        let mut store = MockEventStore::new();
        store.expect_commit_events().never();
        let service = service(store, MockGroupDirectory::new());

        service.commit(&[]).await.expect("nothing to commit");
    }

    #[rstest]
    #[tokio::test]
    async fn commit_appends_events() {
        let mut store = MockEventStore::new();
        store
            .expect_commit_events()
            .withf(|events| events.len() == 1)
            .times(1)
            .return_once(|_| Ok(()));
        let service = service(store, MockGroupDirectory::new());

        service
            .commit(&[follow(user("u1"), group("g1"), at(0))])
            .await
            .expect("commit succeeds");
    }
}
