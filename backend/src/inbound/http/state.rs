//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they depend only
//! on ports and use-cases and stay testable without I/O.

use std::sync::Arc;

use mockable::Clock;
use url::Url;

use crate::domain::CommandService;
use crate::domain::ports::{
    ArticleMetadataSource, ArticleSearchSource, ArticleVersionSource, EventStore, GroupDirectory,
    ReviewContentSource, UserDirectory,
};
use crate::pages::PagePorts;

/// Parameter object bundling every port implementation the handlers need.
#[derive(Clone)]
pub struct HttpStatePorts {
    pub events: Arc<dyn EventStore>,
    pub articles: Arc<dyn ArticleMetadataSource>,
    pub reviews: Arc<dyn ReviewContentSource>,
    pub groups: Arc<dyn GroupDirectory>,
    pub versions: Arc<dyn ArticleVersionSource>,
    pub search: Arc<dyn ArticleSearchSource>,
    pub users: Arc<dyn UserDirectory>,
    pub clock: Arc<dyn Clock>,
    pub public_origin: Url,
}

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Read side: page composers.
    pub pages: PagePorts,
    /// Write side: user commands.
    pub commands: CommandService,
    /// Used to check log-in requests against known profiles.
    pub users: Arc<dyn UserDirectory>,
}

impl HttpState {
    /// Wire composers and commands over one set of ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use reviewhub::domain::ports::{
    ///     FixtureArticleMetadataSource, FixtureArticleSearchSource, FixtureArticleVersionSource,
    ///     FixtureEventStore, FixtureGroupDirectory, FixtureReviewContentSource,
    ///     FixtureUserDirectory,
    /// };
    /// use reviewhub::inbound::http::state::{HttpState, HttpStatePorts};
    ///
    /// let state = HttpState::new(HttpStatePorts {
    ///     events: Arc::new(FixtureEventStore),
    ///     articles: Arc::new(FixtureArticleMetadataSource),
    ///     reviews: Arc::new(FixtureReviewContentSource),
    ///     groups: Arc::new(FixtureGroupDirectory),
    ///     versions: Arc::new(FixtureArticleVersionSource),
    ///     search: Arc::new(FixtureArticleSearchSource),
    ///     users: Arc::new(FixtureUserDirectory),
    ///     clock: Arc::new(mockable::DefaultClock),
    ///     public_origin: url::Url::parse("https://reviews.example/").unwrap(),
    /// });
    /// let _pages = state.pages.clone();
    /// ```
    pub fn new(ports: HttpStatePorts) -> Self {
        let HttpStatePorts {
            events,
            articles,
            reviews,
            groups,
            versions,
            search,
            users,
            clock,
            public_origin,
        } = ports;
        let commands = CommandService::new(events.clone(), groups.clone(), clock);
        Self {
            pages: PagePorts {
                events,
                articles,
                reviews,
                groups,
                versions,
                search,
                users: users.clone(),
                public_origin,
            },
            commands,
            users,
        }
    }
}
