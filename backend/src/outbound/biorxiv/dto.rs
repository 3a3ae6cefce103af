//! DTOs for decoding the bioRxiv details API.

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::warn;
use url::Url;

use crate::domain::ports::ArticleVersion;
use crate::domain::{ArticleServer, Doi};

#[derive(Debug, Deserialize)]
pub(super) struct DetailsDto {
    #[serde(default)]
    pub(super) collection: Vec<VersionDto>,
}

/// The API reports both fields as strings, e.g. `"2020-07-04"` and `"2"`.
#[derive(Debug, Deserialize)]
pub(super) struct VersionDto {
    pub(super) date: String,
    pub(super) version: String,
}

impl VersionDto {
    fn into_version(self, doi: &Doi, server: ArticleServer) -> Option<ArticleVersion> {
        let version: u32 = self.version.trim().parse().ok()?;
        let posted = NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()?;
        let source = Url::parse(&format!(
            "https://{host}/content/{doi}v{version}",
            host = server.host()
        ))
        .ok()?;
        Some(ArticleVersion {
            source,
            occurred_at: posted.and_hms_opt(0, 0, 0)?.and_utc(),
            version,
        })
    }
}

impl DetailsDto {
    /// Versions in API order; malformed entries are logged and skipped.
    pub(super) fn into_versions(self, doi: &Doi, server: ArticleServer) -> Vec<ArticleVersion> {
        self.collection
            .into_iter()
            .filter_map(|entry| {
                let raw = format!("{} v{}", entry.date, entry.version);
                let version = entry.into_version(doi, server);
                if version.is_none() {
                    warn!(%doi, entry = %raw, "skipping malformed version entry");
                }
                version
            })
            .collect()
    }
}
