//! User pages: saved articles and followed groups.

use askama::Template;
use futures_util::future::join_all;

use super::components::{GroupCardView, article_card, follow_toggle, group_card};
use super::{OpenGraph, Page, PagePorts, RenderPageError, render_page};
use crate::domain::ports::UserDetails;
use crate::domain::projections::{
    project_followed_group_ids, project_follows, project_group_meta, project_saved_article_dois,
};
use crate::domain::{DomainEvent, GroupId, HtmlFragment, UserId};

/// Which list a user page shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UserTab {
    /// Articles the user saved, most recent first.
    #[default]
    SavedArticles,
    /// Groups the user follows.
    FollowedGroups,
}

#[derive(Template)]
#[template(path = "pages/user.html")]
struct UserTemplate<'a> {
    user: &'a UserDetails,
    saved_count: usize,
    following_count: usize,
    saved_active: bool,
    entries: Vec<HtmlFragment>,
    empty_message: &'static str,
}

async fn followed_group_cards(
    ports: &PagePorts,
    events: &[DomainEvent],
    group_ids: &[GroupId],
    viewer: Option<&UserId>,
) -> Vec<HtmlFragment> {
    let groups = join_all(group_ids.iter().map(|id| ports.groups.get_group(id))).await;
    groups
        .into_iter()
        .flatten()
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

/// Compose the `tab` page of `user_id`.
///
/// # Errors
/// Whatever the user directory reports for the profile lookup.
pub async fn user_page(
    ports: &PagePorts,
    user_id: &UserId,
    tab: UserTab,
    viewer: Option<&UserId>,
) -> Result<Page, RenderPageError> {
    let user = ports.users.get_user_details(user_id).await?;
    let events = ports.events_or_empty().await;

    let saved = project_saved_article_dois(&events, user_id);
    let followed = project_followed_group_ids(&events, user_id);
    let (entries, empty_message): (Vec<HtmlFragment>, &str) = match tab {
        UserTab::SavedArticles => (
            ports
                .article_cards(&events, &saved)
                .await
                .iter()
                .map(article_card)
                .collect(),
            "No saved articles yet.",
        ),
        UserTab::FollowedGroups => (
            followed_group_cards(ports, &events, &followed, viewer).await,
            "Not following any groups yet.",
        ),
    };

    let content = render_page(&UserTemplate {
        user: &user,
        saved_count: saved.len(),
        following_count: followed.len(),
        saved_active: tab == UserTab::SavedArticles,
        entries,
        empty_message,
    })?;

    Ok(Page {
        title: user.display_name.clone(),
        open_graph: OpenGraph {
            title: format!("{} (@{})", user.display_name, user.handle),
            description: format!(
                "{} saved articles · following {} groups",
                saved.len(),
                followed.len()
            ),
        },
        content,
    })
}
