//! Who follows which group.

use std::collections::BTreeSet;

use crate::domain::events::{DomainEvent, chronological};
use crate::domain::ids::{GroupId, UserId};

/// Groups `user` currently follows.
///
/// The last follow/unfollow per group wins and repeated follows collapse.
///
/// # Examples
/// ```
/// use reviewhub::domain::projections::project_follow_list;
/// use reviewhub::domain::UserId;
///
/// let user = UserId::new("alice").unwrap();
/// assert!(project_follow_list(&[], &user).is_empty());
/// ```
#[must_use]
pub fn project_follow_list(events: &[DomainEvent], user: &UserId) -> BTreeSet<GroupId> {
    project_followed_group_ids(events, user).into_iter().collect()
}

/// Groups `user` currently follows, ordered by when each follow began.
#[must_use]
pub fn project_followed_group_ids(events: &[DomainEvent], user: &UserId) -> Vec<GroupId> {
    let mut followed: Vec<GroupId> = Vec::new();
    for event in chronological(events) {
        match event {
            DomainEvent::UserFollowedGroup {
                user_id, group_id, ..
            } if user_id == user => {
                if !followed.contains(group_id) {
                    followed.push(group_id.clone());
                }
            }
            DomainEvent::UserUnfollowedGroup {
                user_id, group_id, ..
            } if user_id == user => followed.retain(|existing| existing != group_id),
            _ => {}
        }
    }
    followed
}

/// Whether `user` currently follows `group`.
#[must_use]
pub fn project_follows(events: &[DomainEvent], user: &UserId, group: &GroupId) -> bool {
    chronological(events)
        .into_iter()
        .fold(false, |follows, event| match event {
            DomainEvent::UserFollowedGroup {
                user_id, group_id, ..
            } if user_id == user && group_id == group => true,
            DomainEvent::UserUnfollowedGroup {
                user_id, group_id, ..
            } if user_id == user && group_id == group => false,
            _ => follows,
        })
}

/// Users currently following `group`, in the order they started following.
#[must_use]
pub fn project_followers(events: &[DomainEvent], group: &GroupId) -> Vec<UserId> {
    let mut followers: Vec<UserId> = Vec::new();
    for event in chronological(events) {
        match event {
            DomainEvent::UserFollowedGroup {
                user_id, group_id, ..
            } if group_id == group => {
                if !followers.contains(user_id) {
                    followers.push(user_id.clone());
                }
            }
            DomainEvent::UserUnfollowedGroup {
                user_id, group_id, ..
            } if group_id == group => followers.retain(|existing| existing != user_id),
            _ => {}
        }
    }
    followers
}
