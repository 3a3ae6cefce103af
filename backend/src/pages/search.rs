//! Search results page.

use askama::Template;
use futures_util::future::join3;
use serde::Deserialize;
use tracing::warn;
use url::form_urlencoded;

use super::components::{ArticleCardView, GroupCardView, article_card, follow_toggle, group_card};
use super::dates::DisplayDate;
use super::{OpenGraph, Page, PagePorts, RenderPageError, render_page};
use crate::domain::ports::{Group, SearchResults};
use crate::domain::projections::{
    project_follows, project_group_meta, project_review_count_for_article,
};
use crate::domain::{DomainEvent, HtmlFragment, UserId};

/// Shown when the search backend cannot be reached.
pub const SEARCH_UNAVAILABLE_MESSAGE: &str =
    "We're having trouble searching for you, please come back later.";

const MAX_DISPLAYED_ITEMS: usize = 10;

/// Result list to display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchCategory {
    /// Preprints matching the query.
    #[default]
    Articles,
    /// Groups whose name matches the query.
    Groups,
}

impl SearchCategory {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Articles => "articles",
            Self::Groups => "groups",
        }
    }
}

/// Query string of the search page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchParams {
    /// Free-text query.
    pub query: String,
    /// Selected result list.
    #[serde(default)]
    pub category: SearchCategory,
}

#[derive(Template)]
#[template(path = "pages/search.html")]
struct SearchTemplate<'a> {
    query: &'a str,
    articles_active: bool,
    article_total: usize,
    group_total: usize,
    articles_href: String,
    groups_href: String,
    entries: Vec<HtmlFragment>,
}

fn search_href(query: &str, category: SearchCategory) -> String {
    let encoded = form_urlencoded::Serializer::new(String::new())
        .append_pair("query", query)
        .append_pair("category", category.as_str())
        .finish();
    format!("/articles?{encoded}")
}

fn matching_groups(groups: Vec<Group>, query: &str) -> Vec<Group> {
    let needle = query.trim().to_lowercase();
    groups
        .into_iter()
        .filter(|group| group.name.to_lowercase().contains(&needle))
        .collect()
}

fn article_entries(results: &SearchResults, events: &[DomainEvent]) -> Vec<HtmlFragment> {
    results
        .items
        .iter()
        .take(MAX_DISPLAYED_ITEMS)
        .map(|item| {
            article_card(&ArticleCardView {
                doi: item.doi.clone(),
                title: item.title.clone(),
                authors: item.authors.clone(),
                date: Some(DisplayDate::from_naive(item.posted_date)),
                date_label: "Posted",
                review_count: project_review_count_for_article(events, &item.doi),
            })
        })
        .collect()
}

fn group_entries(
    groups: Vec<Group>,
    events: &[DomainEvent],
    viewer: Option<&UserId>,
) -> Vec<HtmlFragment> {
    groups
        .into_iter()
        .take(MAX_DISPLAYED_ITEMS)
        .map(|group| {
            let following = viewer.is_some_and(|user| project_follows(events, user, &group.id));
            group_card(&GroupCardView {
                meta: project_group_meta(events, &group.id),
                toggle: follow_toggle(&group, viewer.is_some(), following),
                id: group.id,
                name: group.name,
                avatar_path: group.avatar_path,
            })
        })
        .collect()
}

/// Compose the results page for `params`.
///
/// # Errors
/// Unavailable when the article search fails.
pub async fn search_page(
    ports: &PagePorts,
    params: &SearchParams,
    viewer: Option<&UserId>,
) -> Result<Page, RenderPageError> {
    let (results, groups, events) = join3(
        ports.search.search(&params.query),
        ports.groups.all_groups(),
        ports.events_or_empty(),
    )
    .await;
    let results = results.map_err(|error| {
        warn!(%error, query = %params.query, "article search failed");
        RenderPageError::unavailable(SEARCH_UNAVAILABLE_MESSAGE)
    })?;
    let groups = matching_groups(groups, &params.query);
    let group_total = groups.len();

    let entries = match params.category {
        SearchCategory::Articles => article_entries(&results, &events),
        SearchCategory::Groups => group_entries(groups, &events, viewer),
    };
    let content = render_page(&SearchTemplate {
        query: &params.query,
        articles_active: params.category == SearchCategory::Articles,
        article_total: results.total,
        group_total,
        articles_href: search_href(&params.query, SearchCategory::Articles),
        groups_href: search_href(&params.query, SearchCategory::Groups),
        entries,
    })?;

    let title = format!("Search results for {}", params.query);
    Ok(Page {
        open_graph: OpenGraph {
            title: title.clone(),
            description: format!("{} articles and {group_total} groups found", results.total),
        },
        title,
        content,
    })
}
