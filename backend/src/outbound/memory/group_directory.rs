//! Group directory built once at start-up.

use async_trait::async_trait;
use tracing::warn;

use crate::domain::GroupId;
use crate::domain::ports::{Group, GroupDirectory};

struct BootstrapGroup {
    id: &'static str,
    name: &'static str,
    avatar_path: &'static str,
    description: &'static str,
    highlights: bool,
}

const BOOTSTRAP_GROUPS: &[BootstrapGroup] = &[
    BootstrapGroup {
        id: "b560187e-f2fb-4ff9-a861-a204f3fc0fb0",
        name: "eLife",
        avatar_path: "/static/groups/elife.jpg",
        description: "eLife is a non-profit organisation created by funders and led by researchers.\n\nIts editors review preprints in the life and biomedical sciences and publish the reviews openly.",
        highlights: false,
    },
    BootstrapGroup {
        id: "53ed5364-a016-11ea-bb37-0242ac130002",
        name: "PeerJ",
        avatar_path: "/static/groups/peerj.jpg",
        description: "PeerJ is an open access publisher of peer-reviewed articles in the biological and medical sciences.\n\nIts editors endorse preprints they consider ready for the scholarly record.",
        highlights: false,
    },
    BootstrapGroup {
        id: "316db7d9-88cc-4c26-b386-f067e0f56334",
        name: "Review Commons",
        avatar_path: "/static/groups/review-commons.jpg",
        description: "Review Commons is a platform for high-quality journal-independent peer review in the life sciences.\n\nReviews are posted alongside the preprint once the authors have responded.",
        highlights: false,
    },
    BootstrapGroup {
        id: "10360d97-bf52-4aef-b2fa-2f60d319edd8",
        name: "PREreview",
        avatar_path: "/static/groups/prereview.jpg",
        description: "PREreview is a community of researchers writing constructive reviews of preprints.\n\nAnyone can join a live review or write one on their own.",
        highlights: false,
    },
    BootstrapGroup {
        id: "f97bd177-5cb6-4296-8573-078318755bf2",
        name: "preLights",
        avatar_path: "/static/groups/prelights.jpg",
        description: "preLights is a community service run by early-career researchers.\n\nIts authors highlight preprints they find interesting and explain why they matter.",
        highlights: true,
    },
];

/// Directory over a fixed list of groups, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryGroupDirectory {
    groups: Vec<Group>,
}

impl InMemoryGroupDirectory {
    pub fn new(groups: Vec<Group>) -> Self {
        Self { groups }
    }

    /// The editorial communities the site launches with.
    pub fn bootstrap() -> Self {
        let groups = BOOTSTRAP_GROUPS
            .iter()
            .filter_map(|seed| match GroupId::new(seed.id) {
                Ok(id) => Some(Group {
                    id,
                    name: seed.name.to_owned(),
                    avatar_path: seed.avatar_path.to_owned(),
                    description: seed.description.to_owned(),
                    highlights: seed.highlights,
                }),
                Err(error) => {
                    warn!(id = seed.id, %error, "skipping bootstrap group");
                    None
                }
            })
            .collect();
        Self::new(groups)
    }
}

#[async_trait]
impl GroupDirectory for InMemoryGroupDirectory {
    async fn get_group(&self, group_id: &GroupId) -> Option<Group> {
        self.groups.iter().find(|group| &group.id == group_id).cloned()
    }

    async fn all_groups(&self) -> Vec<Group> {
        self.groups.clone()
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for the bootstrap directory.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn bootstrap_lists_every_group_in_order() {
        let directory = InMemoryGroupDirectory::bootstrap();
        let names: Vec<String> = directory
            .all_groups()
            .await
            .into_iter()
            .map(|group| group.name)
            .collect();

        assert_eq!(
            names,
            vec!["eLife", "PeerJ", "Review Commons", "PREreview", "preLights"]
        );
    }

    #[rstest]
    #[case("b560187e-f2fb-4ff9-a861-a204f3fc0fb0", Some("eLife"))]
    #[case("f97bd177-5cb6-4296-8573-078318755bf2", Some("preLights"))]
    #[case("00000000-0000-0000-0000-000000000000", None)]
    #[tokio::test]
    async fn looks_up_groups_by_id(#[case] id: &str, #[case] expected: Option<&str>) {
        let directory = InMemoryGroupDirectory::bootstrap();
        let group_id = GroupId::new(id).expect("valid group id");

        let found = directory.get_group(&group_id).await;

        assert_eq!(found.as_ref().map(|group| group.name.as_str()), expected);
    }

    #[rstest]
    #[tokio::test]
    async fn only_prelights_highlights() {
        let highlighters: Vec<String> = InMemoryGroupDirectory::bootstrap()
            .all_groups()
            .await
            .into_iter()
            .filter(|group| group.highlights)
            .map(|group| group.name)
            .collect();
        assert_eq!(highlighters, vec!["preLights"]);
    }
}
