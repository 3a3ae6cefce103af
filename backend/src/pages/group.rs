//! Group (editorial community) page.

use askama::Template;
use futures_util::future::join_all;

use super::components::follow_toggle;
use super::dates::DisplayDate;
use super::{OpenGraph, Page, PagePorts, RenderPageError, render_page};
use crate::domain::ports::Group;
use crate::domain::projections::{
    ActivityKind, GroupActivity, project_endorsed_article_count, project_follows,
    project_group_meta, project_recent_group_activity,
};
use crate::domain::{GroupId, HtmlFragment, UserId};

const RECENT_ACTIVITY_LIMIT: usize = 20;
const UNKNOWN_TITLE: &str = "an article";

struct ActivityView {
    doi: String,
    title: String,
    verb: &'static str,
    date: DisplayDate,
}

#[derive(Template)]
#[template(path = "pages/group.html")]
struct GroupTemplate<'a> {
    group: &'a Group,
    followers_text: String,
    review_count: usize,
    endorsed_count: usize,
    toggle: HtmlFragment,
    activity: Vec<ActivityView>,
}

fn followers_text(followers: usize) -> String {
    if followers == 1 {
        "1 user is following this group.".to_owned()
    } else {
        format!("{followers} users are following this group.")
    }
}

async fn activity_views(
    ports: &PagePorts,
    group: &Group,
    activity: Vec<GroupActivity>,
) -> Vec<ActivityView> {
    let titles = join_all(
        activity
            .iter()
            .map(|entry| ports.articles.fetch_article(&entry.article_doi)),
    )
    .await;
    activity
        .into_iter()
        .zip(titles)
        .map(|(entry, title)| ActivityView {
            doi: entry.article_doi.to_string(),
            title: title.map_or_else(|_| UNKNOWN_TITLE.to_owned(), |article| article.title),
            verb: match entry.kind {
                ActivityKind::Reviewed => group.evaluation_verb(),
                ActivityKind::Endorsed => "endorsed",
            },
            date: DisplayDate::from(entry.occurred_at),
        })
        .collect()
}

/// Compose the page for `group_id`.
///
/// # Errors
/// Not-found when the directory does not know the group.
pub async fn group_page(
    ports: &PagePorts,
    group_id: &GroupId,
    viewer: Option<&UserId>,
) -> Result<Page, RenderPageError> {
    let Some(group) = ports.groups.get_group(group_id).await else {
        return Err(RenderPageError::not_found(format!(
            "Editorial community id '{group_id}' not found"
        )));
    };
    let events = ports.events_or_empty().await;

    let meta = project_group_meta(&events, group_id);
    let following = viewer.is_some_and(|user| project_follows(&events, user, group_id));
    let recent = project_recent_group_activity(&events, group_id, RECENT_ACTIVITY_LIMIT);
    let activity = activity_views(ports, &group, recent).await;

    let content = render_page(&GroupTemplate {
        group: &group,
        followers_text: followers_text(meta.followers),
        review_count: meta.reviews,
        endorsed_count: project_endorsed_article_count(&events, group_id),
        toggle: follow_toggle(&group, viewer.is_some(), following),
        activity,
    })?;

    Ok(Page {
        title: group.name.clone(),
        open_graph: OpenGraph {
            title: group.name.clone(),
            description: group.description.clone(),
        },
        content,
    })
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use std::sync::Arc;

    use super::*;
    use crate::domain::ArticleServer;
    use crate::domain::ports::{ArticleDetails, DataError, MockArticleMetadataSource};
    use crate::domain::test_support::{at, doi, endorsed, follow, group, hypothesis, reviewed, user};
    use crate::pages::RenderPageErrorKind;
    use crate::pages::test_support::{directory, fixture_ports, sample_group, store_with};
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn unknown_group_is_not_found() {
        let ports = fixture_ports();

        let error = group_page(&ports, &group("missing"), None)
            .await
            .expect_err("unknown group");

        assert_eq!(error.kind, RenderPageErrorKind::NotFound);
        assert_eq!(error.message, "Editorial community id 'missing' not found");
    }

    #[rstest]
    #[case(0, "0 users are following this group.")]
    #[case(1, "1 user is following this group.")]
    #[case(2, "2 users are following this group.")]
    fn follower_sentence_is_pluralised(#[case] count: usize, #[case] expected: &str) {
        assert_eq!(followers_text(count), expected);
    }

    #[rstest]
    #[tokio::test]
    async fn shows_counts_activity_and_follow_state() {
        let mut articles = MockArticleMetadataSource::new();
        articles.expect_fetch_article().returning(|requested| {
            if *requested == doi("10.1101/a") {
                Err(DataError::unavailable())
            } else {
                Ok(ArticleDetails {
                    doi: requested.clone(),
                    title: "Known title".to_owned(),
                    abstract_text: String::new(),
                    authors: Vec::new(),
                    server: ArticleServer::Biorxiv,
                })
            }
        });
        let ports = PagePorts {
            events: Arc::new(store_with(vec![
                reviewed(group("g1"), doi("10.1101/a"), hypothesis("r1"), at(0)),
                endorsed(group("g1"), doi("10.1101/b"), at(1)),
                follow(user("u1"), group("g1"), at(2)),
            ])),
            groups: Arc::new(directory(vec![sample_group("g1", "Review Club")])),
            articles: Arc::new(articles),
            ..fixture_ports()
        };
        let viewer = user("u1");

        let page = group_page(&ports, &group("g1"), Some(&viewer))
            .await
            .expect("page renders");

        assert_eq!(page.title, "Review Club");
        let html = page.content.as_str();
        assert!(html.contains("1 user is following this group."));
        assert!(html.contains("endorsed"));
        assert!(html.contains("Known title"));
        assert!(html.contains(UNKNOWN_TITLE));
        assert!(html.contains("action=\"/unfollow\""));
    }
}
