//! Read models derived from the event log.
//!
//! Every projection is a pure fold: it filters the log to its subject, walks
//! the survivors in chronological order and returns a plain value. The same
//! snapshot always yields the same view, and an empty log yields the identity
//! (empty set, zero counts, [`VoteState::None`](super::VoteState::None)).

mod follows;
mod reviews;
mod saved_articles;
mod votes;

pub use follows::{
    project_followed_group_ids, project_followers, project_follow_list, project_follows,
};
pub use reviews::{
    ActivityKind, GroupActivity, GroupMeta, ReviewReference, find_reviews_for_article_doi,
    project_endorsed_article_count, project_evaluated_articles_for_groups, project_group_meta,
    project_recent_group_activity, project_review_count_for_article,
};
pub use saved_articles::{
    project_has_user_saved_article, project_saved_article_dois, project_saved_articles,
};
pub use votes::{VoteCounts, project_user_vote_state, project_vote_counts};
