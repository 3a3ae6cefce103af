//! User profiles held in memory.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::domain::UserId;
use crate::domain::ports::{DataError, UserDetails, UserDirectory};

const DEFAULT_AVATAR: &str = "/static/images/profile-dark.svg";

/// Profiles keyed by user id; unknown ids are not found.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserDirectory {
    users: HashMap<UserId, UserDetails>,
}

impl InMemoryUserDirectory {
    pub fn new(users: impl IntoIterator<Item = UserDetails>) -> Self {
        Self {
            users: users
                .into_iter()
                .map(|details| (details.user_id.clone(), details))
                .collect(),
        }
    }

    /// Directory with one profile per id, using the id as handle and name.
    pub fn from_ids(ids: impl IntoIterator<Item = UserId>) -> Self {
        Self::new(ids.into_iter().map(|user_id| UserDetails {
            handle: user_id.to_string(),
            display_name: user_id.to_string(),
            avatar_url: DEFAULT_AVATAR.to_owned(),
            user_id,
        }))
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn get_user_details(&self, user_id: &UserId) -> Result<UserDetails, DataError> {
        self.users
            .get(user_id)
            .cloned()
            .ok_or_else(DataError::not_found)
    }
}
