//! Article activity page: the article header followed by its merged timeline.

use askama::Template;
use futures_util::future::join;
use url::Url;

use super::components::{ArticleTab, article_header, feed, save_article_toggle};
use super::{OpenGraph, Page, PagePorts, RenderPageError, render_page};
use crate::domain::feed::{
    FeedItem, FeedItemResolver, FeedSource, ResolvedFeedItem, merge_feeds,
};
use crate::domain::html::strip_tags;
use crate::domain::ports::{ArticleDetails, ArticleVersion, DataError};
use crate::domain::projections::{find_reviews_for_article_doi, project_has_user_saved_article};
use crate::domain::{Doi, DomainEvent, HtmlFragment, UserId};

const REVIEWS_SOURCE: &str = "reviews";
const VERSIONS_SOURCE: &str = "versions";
const TWEET_INTENT: &str = "https://twitter.com/intent/tweet";

#[derive(Template)]
#[template(path = "pages/article_activity.html")]
struct ArticleActivityTemplate {
    header: HtmlFragment,
    feed: HtmlFragment,
}

/// Reject DOIs that do not belong to the supported preprint server.
pub(super) fn ensure_biorxiv(doi: &Doi) -> Result<(), RenderPageError> {
    if doi.is_biorxiv() {
        Ok(())
    } else {
        Err(RenderPageError::not_found(format!("{doi} not found")))
    }
}

pub(super) fn open_graph(article: &ArticleDetails) -> OpenGraph {
    OpenGraph {
        title: strip_tags(&article.title),
        description: strip_tags(&article.abstract_text),
    }
}

fn version_items(article: &ArticleDetails, versions: Vec<ArticleVersion>) -> Vec<FeedItem> {
    versions
        .into_iter()
        .map(|version| FeedItem::ArticleVersion {
            source: version.source,
            version: version.version,
            server: article.server,
            occurred_at: version.occurred_at,
        })
        .collect()
}

fn tweet_url(ports: &PagePorts, article: &ArticleDetails) -> Option<String> {
    let target = ports.article_url(&article.doi)?;
    Url::parse_with_params(
        TWEET_INTENT,
        [
            ("text", format!("{} #reviewhub", strip_tags(&article.title))),
            ("url", target.to_string()),
        ],
    )
    .ok()
    .map(String::from)
}

async fn activity_feed(
    ports: &PagePorts,
    article: &ArticleDetails,
    events: &[DomainEvent],
    viewer: Option<&UserId>,
) -> HtmlFragment {
    let reviews = async {
        let items: Vec<FeedItem> = find_reviews_for_article_doi(events, &article.doi)
            .into_iter()
            .map(|review| FeedItem::Review {
                review_id: review.review_id,
                group_id: review.group_id,
                occurred_at: review.occurred_at,
            })
            .collect();
        Ok::<_, DataError>(items)
    };
    let versions = async {
        ports
            .versions
            .find_versions_for_article_doi(&article.doi, article.server)
            .await
            .map(|versions| version_items(article, versions))
    };
    let merged = merge_feeds(vec![
        FeedSource::new(REVIEWS_SOURCE, reviews),
        FeedSource::new(VERSIONS_SOURCE, versions),
    ])
    .await;

    let resolver = FeedItemResolver::new(
        ports.reviews.as_ref(),
        ports.groups.as_ref(),
        events,
        viewer,
    );
    let versions_failed = merged.source_failed(VERSIONS_SOURCE);
    let mut items = resolver.resolve_all(merged.items).await;
    // Every posted preprint has at least one version, so an empty history
    // means the server did not answer usefully.
    let has_versions = items
        .iter()
        .any(|item| matches!(item, ResolvedFeedItem::ArticleVersion { .. }));
    if versions_failed || !has_versions {
        items.push(ResolvedFeedItem::ArticleVersionError {
            server: article.server,
        });
    }
    feed(&items)
}

/// Compose the activity page for `doi`.
///
/// # Errors
/// Not-found for non-bioRxiv DOIs; otherwise whatever the metadata lookup
/// reports. Feed, save toggle and share link degrade to empty content.
pub async fn article_activity_page(
    ports: &PagePorts,
    doi: &Doi,
    viewer: Option<&UserId>,
) -> Result<Page, RenderPageError> {
    ensure_biorxiv(doi)?;
    let (article, events) = join(ports.articles.fetch_article(doi), ports.events_or_empty()).await;
    let article = article?;

    let saved = viewer.is_some_and(|user| project_has_user_saved_article(&events, user, doi));
    let header = article_header(
        &article,
        ArticleTab::Activity,
        save_article_toggle(doi, viewer.is_some(), saved),
        tweet_url(ports, &article),
    );
    let feed = activity_feed(ports, &article, &events, viewer).await;
    let content = render_page(&ArticleActivityTemplate { header, feed })?;

    Ok(Page {
        title: strip_tags(&article.title),
        content,
        open_graph: open_graph(&article),
    })
}
