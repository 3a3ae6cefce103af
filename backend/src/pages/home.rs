//! Home page: the viewer's feed of recently evaluated articles and the group list.

use std::collections::BTreeSet;

use askama::Template;
use futures_util::future::join;

use super::components::{GroupCardView, article_card, follow_toggle, group_card};
use super::{OpenGraph, Page, PagePorts, RenderPageError, render_page};
use crate::domain::ports::Group;
use crate::domain::projections::{
    project_evaluated_articles_for_groups, project_follow_list, project_group_meta,
};
use crate::domain::{DomainEvent, HtmlFragment, UserId};

const FEED_LIMIT: usize = 20;

/// State of the personal feed section.
#[derive(Debug)]
enum YourFeed {
    SignedOut,
    NotFollowing,
    NoEvaluations,
    Unavailable,
    Articles(Vec<HtmlFragment>),
}

#[derive(Template)]
#[template(path = "pages/home.html")]
struct HomeTemplate {
    feed: YourFeed,
    groups: Vec<HtmlFragment>,
}

async fn your_feed(ports: &PagePorts, events: &[DomainEvent], viewer: Option<&UserId>) -> YourFeed {
    let Some(user) = viewer else {
        return YourFeed::SignedOut;
    };
    let followed = project_follow_list(events, user);
    if followed.is_empty() {
        return YourFeed::NotFollowing;
    }
    let dois = project_evaluated_articles_for_groups(events, &followed, FEED_LIMIT);
    if dois.is_empty() {
        return YourFeed::NoEvaluations;
    }
    let cards = ports.article_cards(events, &dois).await;
    if cards.is_empty() {
        return YourFeed::Unavailable;
    }
    YourFeed::Articles(cards.iter().map(article_card).collect())
}

fn group_cards(groups: Vec<Group>, events: &[DomainEvent], viewer: Option<&UserId>) -> Vec<HtmlFragment> {
    let followed = viewer.map_or_else(BTreeSet::new, |user| project_follow_list(events, user));
    groups
        .into_iter()
        .map(|group| {
            group_card(&GroupCardView {
                meta: project_group_meta(events, &group.id),
                toggle: follow_toggle(&group, viewer.is_some(), followed.contains(&group.id)),
                id: group.id,
                name: group.name,
                avatar_path: group.avatar_path,
            })
        })
        .collect()
}

/// Compose the home page.
///
/// The home page has no primary lookup; every section degrades on its own.
///
/// # Errors
/// Only when the page template itself fails to render.
pub async fn home_page(ports: &PagePorts, viewer: Option<&UserId>) -> Result<Page, RenderPageError> {
    let (events, groups) = join(ports.events_or_empty(), ports.groups.all_groups()).await;
    let feed = your_feed(ports, &events, viewer).await;
    let content = render_page(&HomeTemplate {
        feed,
        groups: group_cards(groups, &events, viewer),
    })?;

    Ok(Page {
        title: "Home".to_owned(),
        content,
        open_graph: OpenGraph {
            title: "Reviewhub".to_owned(),
            description: "Follow editorial communities and see the preprints they evaluate."
                .to_owned(),
        },
    })
}
