//! Fragments shared by several pages: toggles, cards and the activity feed.

use askama::Template;

use super::dates::DisplayDate;
use super::render_component;
use crate::domain::feed::{ResolvedFeedItem, ResolvedReview};
use crate::domain::ports::{ArticleDetails, Group};
use crate::domain::projections::GroupMeta;
use crate::domain::{Doi, GroupId, HtmlFragment, ResponseCommand, VoteState};

#[derive(Template)]
#[template(path = "components/save_article.html")]
struct SaveArticleToggle<'a> {
    doi: &'a str,
    signed_in: bool,
    saved: bool,
}

/// Save / unsave control for an article.
pub(super) fn save_article_toggle(doi: &Doi, signed_in: bool, saved: bool) -> HtmlFragment {
    render_component(&SaveArticleToggle {
        doi: doi.as_ref(),
        signed_in,
        saved,
    })
}

#[derive(Template)]
#[template(path = "components/follow_toggle.html")]
struct FollowToggle<'a> {
    group_id: &'a str,
    group_name: &'a str,
    signed_in: bool,
    following: bool,
}

/// Follow / unfollow control for a group.
pub(super) fn follow_toggle(group: &Group, signed_in: bool, following: bool) -> HtmlFragment {
    render_component(&FollowToggle {
        group_id: group.id.as_ref(),
        group_name: &group.name,
        signed_in,
        following,
    })
}

/// Which tab of an article is being shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ArticleTab {
    Activity,
    Meta,
}

#[derive(Template)]
#[template(path = "components/article_header.html")]
struct ArticleHeader<'a> {
    article: &'a ArticleDetails,
    server_name: &'static str,
    authors: String,
    activity_active: bool,
    save_toggle: HtmlFragment,
    tweet_url: Option<String>,
}

/// Title block and tab navigation shared by both article pages.
pub(super) fn article_header(
    article: &ArticleDetails,
    tab: ArticleTab,
    save_toggle: HtmlFragment,
    tweet_url: Option<String>,
) -> HtmlFragment {
    render_component(&ArticleHeader {
        article,
        server_name: article.server.display_name(),
        authors: article.authors.join(", "),
        activity_active: tab == ArticleTab::Activity,
        save_toggle,
        tweet_url,
    })
}

/// Data needed to render a group card.
pub(super) struct GroupCardView {
    pub(super) id: GroupId,
    pub(super) name: String,
    pub(super) avatar_path: String,
    pub(super) meta: GroupMeta,
    pub(super) toggle: HtmlFragment,
}

#[derive(Template)]
#[template(path = "components/group_card.html")]
struct GroupCard<'a> {
    card: &'a GroupCardView,
    follower_label: &'static str,
    review_label: &'static str,
}

/// Summary card linking to a group page.
pub(super) fn group_card(card: &GroupCardView) -> HtmlFragment {
    render_component(&GroupCard {
        card,
        follower_label: if card.meta.followers == 1 {
            "follower"
        } else {
            "followers"
        },
        review_label: if card.meta.reviews == 1 {
            "evaluation"
        } else {
            "evaluations"
        },
    })
}

/// Data needed to render an article card.
pub(super) struct ArticleCardView {
    pub(super) doi: Doi,
    pub(super) title: String,
    pub(super) authors: String,
    pub(super) date: Option<DisplayDate>,
    pub(super) date_label: &'static str,
    pub(super) review_count: usize,
}

#[derive(Template)]
#[template(path = "components/article_card.html")]
struct ArticleCard<'a> {
    card: &'a ArticleCardView,
    review_label: &'static str,
}

/// Summary card linking to an article page.
pub(super) fn article_card(card: &ArticleCardView) -> HtmlFragment {
    render_component(&ArticleCard {
        card,
        review_label: if card.review_count == 1 {
            "evaluation"
        } else {
            "evaluations"
        },
    })
}

#[derive(Template)]
#[template(path = "components/feed_review.html")]
struct ReviewEntry<'a> {
    review: &'a ResolvedReview,
    review_id: String,
    date: DisplayDate,
    signed_in: bool,
    viewer_helpful: bool,
    viewer_not_helpful: bool,
    helpful_command: &'static str,
    not_helpful_command: &'static str,
}

impl<'a> ReviewEntry<'a> {
    fn new(review: &'a ResolvedReview) -> Self {
        let viewer = review.viewer_vote;
        let (helpful_command, not_helpful_command) = match viewer {
            Some(VoteState::Helpful) => (
                ResponseCommand::RevokeResponse,
                ResponseCommand::RespondNotHelpful,
            ),
            Some(VoteState::NotHelpful) => (
                ResponseCommand::RespondHelpful,
                ResponseCommand::RevokeResponse,
            ),
            Some(VoteState::None) | None => (
                ResponseCommand::RespondHelpful,
                ResponseCommand::RespondNotHelpful,
            ),
        };
        Self {
            review,
            review_id: review.review_id.to_string(),
            date: DisplayDate::from(review.occurred_at),
            signed_in: viewer.is_some(),
            viewer_helpful: viewer == Some(VoteState::Helpful),
            viewer_not_helpful: viewer == Some(VoteState::NotHelpful),
            helpful_command: helpful_command.as_str(),
            not_helpful_command: not_helpful_command.as_str(),
        }
    }
}

#[derive(Template)]
#[template(path = "components/feed_version.html")]
struct VersionEntry<'a> {
    source: &'a str,
    version: u32,
    server_name: &'static str,
    date: DisplayDate,
}

#[derive(Template)]
#[template(path = "components/feed_review_error.html")]
struct ReviewErrorEntry {
    date: DisplayDate,
}

#[derive(Template)]
#[template(path = "components/feed_version_error.html")]
struct VersionErrorEntry {
    server_name: &'static str,
}

#[derive(Template)]
#[template(path = "components/feed.html")]
struct FeedList {
    entries: Vec<HtmlFragment>,
}

fn feed_entry(item: &ResolvedFeedItem) -> HtmlFragment {
    match item {
        ResolvedFeedItem::Review(review) => render_component(&ReviewEntry::new(review)),
        ResolvedFeedItem::ArticleVersion {
            source,
            version,
            server,
            occurred_at,
        } => render_component(&VersionEntry {
            source: source.as_str(),
            version: *version,
            server_name: server.display_name(),
            date: DisplayDate::from(*occurred_at),
        }),
        ResolvedFeedItem::ReviewError { occurred_at, .. } => {
            render_component(&ReviewErrorEntry {
                date: DisplayDate::from(*occurred_at),
            })
        }
        ResolvedFeedItem::ArticleVersionError { server } => {
            render_component(&VersionErrorEntry {
                server_name: server.display_name(),
            })
        }
    }
}

/// The article activity feed; empty when there is nothing to show.
pub(super) fn feed(items: &[ResolvedFeedItem]) -> HtmlFragment {
    if items.is_empty() {
        return HtmlFragment::empty();
    }
    render_component(&FeedList {
        entries: items.iter().map(feed_entry).collect(),
    })
}
