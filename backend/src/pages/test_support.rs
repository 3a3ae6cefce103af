//! Builders for composer tests.

use std::sync::Arc;

use url::Url;

use super::PagePorts;
use crate::domain::DomainEvent;
use crate::domain::ports::{
    FixtureArticleMetadataSource, FixtureArticleSearchSource, FixtureArticleVersionSource,
    FixtureEventStore, FixtureReviewContentSource, FixtureUserDirectory, Group,
    MockEventStore, MockGroupDirectory,
};
use crate::domain::test_support::group;

/// Ports backed entirely by fixtures; override fields per test.
pub(crate) fn fixture_ports() -> PagePorts {
    PagePorts {
        events: Arc::new(FixtureEventStore),
        articles: Arc::new(FixtureArticleMetadataSource),
        reviews: Arc::new(FixtureReviewContentSource),
        groups: Arc::new(directory(Vec::new())),
        versions: Arc::new(FixtureArticleVersionSource),
        search: Arc::new(FixtureArticleSearchSource),
        users: Arc::new(FixtureUserDirectory),
        public_origin: Url::parse("https://reviews.example/").expect("valid origin"),
    }
}

/// An event store that always returns `events`.
pub(crate) fn store_with(events: Vec<DomainEvent>) -> MockEventStore {
    let mut store = MockEventStore::new();
    store
        .expect_get_all_events()
        .returning(move || Ok(events.clone()));
    store
}

/// A group directory that knows exactly `groups`.
pub(crate) fn directory(groups: Vec<Group>) -> MockGroupDirectory {
    let mut directory = MockGroupDirectory::new();
    let lookup = groups.clone();
    directory
        .expect_get_group()
        .returning(move |id| lookup.iter().find(|candidate| candidate.id == *id).cloned());
    directory
        .expect_all_groups()
        .returning(move || groups.clone());
    directory
}

/// A plain reviewing group.
pub(crate) fn sample_group(id: &str, name: &str) -> Group {
    Group {
        id: group(id),
        name: name.to_owned(),
        avatar_path: format!("/static/groups/{id}.png"),
        description: format!("{name} evaluates preprints."),
        highlights: false,
    }
}
