//! Article details page: authors and abstract.

use askama::Template;
use futures_util::future::join;

use super::article_activity::{ensure_biorxiv, open_graph};
use super::components::{ArticleTab, article_header, save_article_toggle};
use super::{Page, PagePorts, RenderPageError, render_page};
use crate::domain::html::strip_tags;
use crate::domain::projections::project_has_user_saved_article;
use crate::domain::{Doi, HtmlFragment, UserId};

#[derive(Template)]
#[template(path = "pages/article_meta.html")]
struct ArticleMetaTemplate<'a> {
    header: HtmlFragment,
    authors: &'a [String],
    abstract_text: String,
}

/// Compose the details page for `doi`.
///
/// # Errors
/// Not-found for non-bioRxiv DOIs; otherwise whatever the metadata lookup
/// reports.
pub async fn article_meta_page(
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
        ArticleTab::Meta,
        save_article_toggle(doi, viewer.is_some(), saved),
        None,
    );
    let content = render_page(&ArticleMetaTemplate {
        header,
        authors: &article.authors,
        abstract_text: strip_tags(&article.abstract_text),
    })?;

    Ok(Page {
        title: strip_tags(&article.title),
        content,
        open_graph: open_graph(&article),
    })
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use std::sync::Arc;

    use super::*;
    use crate::domain::ArticleServer;
    use crate::domain::ports::{ArticleDetails, DataError, MockArticleMetadataSource};
    use crate::domain::test_support::doi;
    use crate::pages::RenderPageErrorKind;
    use crate::pages::test_support::fixture_ports;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn lists_authors_and_abstract() {
        let target = doi("10.1101/2");
        let details = ArticleDetails {
            doi: target.clone(),
            title: "On mitochondria".to_owned(),
            abstract_text: "<jats:p>Energy matters.</jats:p>".to_owned(),
            authors: vec!["Ada Lovelace".to_owned(), "Alan Turing".to_owned()],
            server: ArticleServer::Biorxiv,
        };
        let mut articles = MockArticleMetadataSource::new();
        articles
            .expect_fetch_article()
            .return_once(move |_| Ok(details));
        let ports = PagePorts {
            articles: Arc::new(articles),
            ..fixture_ports()
        };

        let page = article_meta_page(&ports, &target, None)
            .await
            .expect("page renders");

        let html = page.content.as_str();
        assert!(html.contains("Ada Lovelace"));
        assert!(html.contains("Alan Turing"));
        assert!(html.contains("Energy matters."));
        assert!(!html.contains("jats:p"));
        assert!(!html.contains("/save-article"));
    }

    #[rstest]
    #[tokio::test]
    async fn missing_article_is_not_found() {
        let mut articles = MockArticleMetadataSource::new();
        articles
            .expect_fetch_article()
            .return_once(|_| Err(DataError::not_found()));
        let ports = PagePorts {
            articles: Arc::new(articles),
            ..fixture_ports()
        };

        let error = article_meta_page(&ports, &doi("10.1101/404"), None)
            .await
            .expect_err("missing article");

        assert_eq!(error.kind, RenderPageErrorKind::NotFound);
    }
}
