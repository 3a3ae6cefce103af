//! Driven port for editorial community (group) identities.

use async_trait::async_trait;

use crate::domain::GroupId;

/// An editorial community that reviews or endorses articles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// Stable identifier.
    pub id: GroupId,
    /// Display name.
    pub name: String,
    /// Avatar image path or URL.
    pub avatar_path: String,
    /// About text, plain paragraphs separated by blank lines.
    pub description: String,
    /// Whether the group's evaluations are highlights rather than reviews.
    pub highlights: bool,
}

impl Group {
    /// Verb used in activity feeds for this group's evaluations.
    #[must_use]
    pub const fn evaluation_verb(&self) -> &'static str {
        if self.highlights {
            "highlighted"
        } else {
            "reviewed"
        }
    }
}

/// Port for resolving group identities.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GroupDirectory: Send + Sync {
    /// Look up one group; `None` when the id is unknown.
    async fn get_group(&self, group_id: &GroupId) -> Option<Group>;

    /// Every known group, in directory order.
    async fn all_groups(&self) -> Vec<Group>;
}

/// Fixture directory knowing no groups.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureGroupDirectory;

#[async_trait]
impl GroupDirectory for FixtureGroupDirectory {
    async fn get_group(&self, _group_id: &GroupId) -> Option<Group> {
        None
    }

    async fn all_groups(&self) -> Vec<Group> {
        Vec::new()
    }
}
