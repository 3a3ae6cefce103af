//! Page composers.
//!
//! Each composer gathers a primary subject (article, group, user, search
//! results) and any number of secondary components concurrently. A failed
//! primary lookup short-circuits to a [`RenderPageError`]; a failed secondary
//! component renders as empty content so the page still serves its purpose.

mod article_activity;
mod article_meta;
mod components;
mod dates;
mod group;
mod home;
mod search;
mod user;

use std::sync::Arc;

use askama::Template;
use futures_util::future::join_all;
use tracing::{error, warn};
use url::Url;

use crate::domain::ports::{
    ArticleMetadataSource, ArticleSearchSource, ArticleVersionSource, DataError, EventStore,
    GroupDirectory, ReviewContentSource, UserDirectory,
};
use crate::domain::projections::project_review_count_for_article;
use crate::domain::{Doi, DomainEvent, HtmlFragment};
use components::ArticleCardView;

pub use article_activity::article_activity_page;
pub use article_meta::article_meta_page;
pub use group::group_page;
pub use home::home_page;
pub use search::{SEARCH_UNAVAILABLE_MESSAGE, SearchCategory, SearchParams, search_page};
pub use user::{UserTab, user_page};

/// Message shown when the subject of a page is confirmed absent.
pub const NOT_FOUND_MESSAGE: &str =
    "We couldn’t find this information. Ensure you have the correct URL and try again.";
/// Message shown when the subject of a page cannot be fetched right now.
pub const UNAVAILABLE_MESSAGE: &str = "We’re having trouble finding this information. Ensure you have the correct URL, or try refreshing the page. You may need to come back later.";

/// Open Graph metadata for link previews.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenGraph {
    /// Preview title.
    pub title: String,
    /// Preview description, plain text.
    pub description: String,
}

/// A composed page, ready to be wrapped in the site layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Document title.
    pub title: String,
    /// Main content.
    pub content: HtmlFragment,
    /// Link preview metadata.
    pub open_graph: OpenGraph,
}

/// Page-level failure kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderPageErrorKind {
    /// The page subject does not exist.
    NotFound,
    /// The page subject could not be fetched.
    Unavailable,
}

/// Why a page could not be composed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct RenderPageError {
    /// Failure kind, mapped to an HTTP status by the inbound adapter.
    pub kind: RenderPageErrorKind,
    /// User-facing message.
    pub message: String,
}

impl RenderPageError {
    /// A not-found error with a specific message.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            kind: RenderPageErrorKind::NotFound,
            message: message.into(),
        }
    }

    /// An unavailable error with a specific message.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self {
            kind: RenderPageErrorKind::Unavailable,
            message: message.into(),
        }
    }
}

impl From<DataError> for RenderPageError {
    fn from(error: DataError) -> Self {
        match error {
            DataError::NotFound => Self::not_found(NOT_FOUND_MESSAGE),
            DataError::Unavailable => Self::unavailable(UNAVAILABLE_MESSAGE),
        }
    }
}

/// Ports the composers read from.
#[derive(Clone)]
pub struct PagePorts {
    /// Event log.
    pub events: Arc<dyn EventStore>,
    /// Article metadata.
    pub articles: Arc<dyn ArticleMetadataSource>,
    /// Review content.
    pub reviews: Arc<dyn ReviewContentSource>,
    /// Editorial communities.
    pub groups: Arc<dyn GroupDirectory>,
    /// Preprint version history.
    pub versions: Arc<dyn ArticleVersionSource>,
    /// Article search.
    pub search: Arc<dyn ArticleSearchSource>,
    /// User profiles.
    pub users: Arc<dyn UserDirectory>,
    /// Public base URL of the site, used for share links.
    pub public_origin: Url,
}

impl PagePorts {
    /// Snapshot of the event log; failures are logged and reported as unavailable.
    async fn events(&self) -> Result<Vec<DomainEvent>, DataError> {
        self.events.get_all_events().await.map_err(|error| {
            warn!(%error, "event log unavailable while composing page");
            DataError::unavailable()
        })
    }

    /// Event snapshot for secondary components: an unreadable log reads as empty.
    async fn events_or_empty(&self) -> Vec<DomainEvent> {
        self.events().await.unwrap_or_default()
    }

    /// Cards for `dois`, fetched concurrently; articles whose metadata fails are skipped.
    async fn article_cards(&self, events: &[DomainEvent], dois: &[Doi]) -> Vec<ArticleCardView> {
        let fetched = join_all(dois.iter().map(|doi| self.articles.fetch_article(doi))).await;
        dois.iter()
            .zip(fetched)
            .filter_map(|(doi, outcome)| match outcome {
                Ok(article) => Some(ArticleCardView {
                    doi: doi.clone(),
                    title: article.title,
                    authors: article.authors.join(", "),
                    date: None,
                    date_label: "",
                    review_count: project_review_count_for_article(events, doi),
                }),
                Err(error) => {
                    warn!(%doi, %error, "article metadata unavailable; skipping card");
                    None
                }
            })
            .collect()
    }

    /// Canonical public URL of an article's activity page.
    fn article_url(&self, doi: &Doi) -> Option<Url> {
        self.public_origin
            .join(&format!("articles/activity/{doi}"))
            .ok()
    }
}

/// Render the main template of a page.
fn render_page<T: Template>(template: &T) -> Result<HtmlFragment, RenderPageError> {
    template.render().map(HtmlFragment::trusted).map_err(|error| {
        error!(%error, "page template failed to render");
        RenderPageError::unavailable(UNAVAILABLE_MESSAGE)
    })
}

/// Render a secondary component, degrading to an empty fragment on failure.
fn render_component<T: Template>(template: &T) -> HtmlFragment {
    template.render().map_or_else(
        |error| {
            error!(%error, "component template failed to render");
            HtmlFragment::empty()
        },
        HtmlFragment::trusted,
    )
}

#[cfg(test)]
pub(crate) mod test_support;
