//! Driven port for public user profiles.

use async_trait::async_trait;

use super::DataError;
use crate::domain::UserId;

/// Public profile of a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDetails {
    /// User identifier.
    pub user_id: UserId,
    /// Handle shown with an `@` prefix.
    pub handle: String,
    /// Display name.
    pub display_name: String,
    /// Avatar image URL.
    pub avatar_url: String,
}

/// Port for looking up user profiles.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Profile of `user_id`.
    async fn get_user_details(&self, user_id: &UserId) -> Result<UserDetails, DataError>;
}

/// Fixture deriving a profile from the id itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureUserDirectory;

#[async_trait]
impl UserDirectory for FixtureUserDirectory {
    async fn get_user_details(&self, user_id: &UserId) -> Result<UserDetails, DataError> {
        Ok(UserDetails {
            user_id: user_id.clone(),
            handle: user_id.to_string(),
            display_name: user_id.to_string(),
            avatar_url: "/static/images/profile-dark.svg".to_owned(),
        })
    }
}
