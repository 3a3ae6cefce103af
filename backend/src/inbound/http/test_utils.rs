//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;

use super::state::{HttpState, HttpStatePorts};
use crate::domain::ports::{
    FixtureArticleMetadataSource, FixtureArticleSearchSource, FixtureArticleVersionSource,
    FixtureEventStore, FixtureGroupDirectory, FixtureReviewContentSource, FixtureUserDirectory,
};

/// Session middleware with a fresh key, cookie name `session`, and the
/// `Secure` flag off so plain-HTTP test requests keep the cookie.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name("session".to_owned())
        .cookie_secure(false)
        .build()
}

/// Ports backed entirely by fixtures.
pub fn fixture_state_ports() -> HttpStatePorts {
    HttpStatePorts {
        events: Arc::new(FixtureEventStore),
        articles: Arc::new(FixtureArticleMetadataSource),
        reviews: Arc::new(FixtureReviewContentSource),
        groups: Arc::new(FixtureGroupDirectory),
        versions: Arc::new(FixtureArticleVersionSource),
        search: Arc::new(FixtureArticleSearchSource),
        users: Arc::new(FixtureUserDirectory),
        clock: Arc::new(mockable::DefaultClock),
        public_origin: url::Url::parse("https://reviews.example/").expect("static origin"),
    }
}

/// State built from [`fixture_state_ports`].
pub fn fixture_state() -> HttpState {
    HttpState::new(fixture_state_ports())
}
