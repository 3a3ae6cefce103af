//! Shared reqwest client for the read-only JSON APIs behind the data ports.
//!
//! Owns transport details only: identity headers, the request timeout, and
//! mapping HTTP failures onto [`DataError`]. Each adapter decodes its own DTOs.

use std::time::Duration;

use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::domain::ports::DataError;

const DEFAULT_USER_AGENT: &str = "reviewhub/0.1";
const DEFAULT_CONTACT: &str = "ops@reviewhub.invalid";

/// Outbound identity sent with every request.
///
/// Crossref and Europe PMC route polite traffic by contact address.
#[derive(Debug, Clone)]
pub struct HttpIdentity {
    /// HTTP user-agent.
    pub user_agent: String,
    /// Contact e-mail appended to the user-agent as `mailto:`.
    pub contact: String,
}

impl Default for HttpIdentity {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_owned(),
            contact: DEFAULT_CONTACT.to_owned(),
        }
    }
}

/// GETs JSON documents with a bounded timeout.
#[derive(Debug, Clone)]
pub struct JsonClient {
    client: Client,
    user_agent: String,
}

impl JsonClient {
    /// Build a client with an explicit request timeout.
    ///
    /// # Errors
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(timeout: Duration, identity: HttpIdentity) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            user_agent: format!("{} (mailto:{})", identity.user_agent, identity.contact),
        })
    }

    /// GET `url` and decode the body as `T`.
    ///
    /// # Errors
    /// [`DataError::NotFound`] on `404`/`410`; [`DataError::Unavailable`] for
    /// transport failures, other statuses and undecodable bodies.
    pub async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, DataError> {
        debug!(%url, "fetching");
        let response = self
            .client
            .get(url.clone())
            .header(reqwest::header::USER_AGENT, self.user_agent.as_str())
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|error| {
                warn!(%url, %error, timeout = error.is_timeout(), "request failed");
                DataError::unavailable()
            })?;

        let status = response.status();
        let body = response.bytes().await.map_err(|error| {
            warn!(%url, %error, "failed to read response body");
            DataError::unavailable()
        })?;
        if !status.is_success() {
            warn!(%url, status = status.as_u16(), body = %body_preview(&body), "unexpected status");
            return Err(map_status(status));
        }
        decode(&body).inspect_err(|_| warn!(%url, "undecodable response body"))
    }
}

/// Decode a JSON body into `T`.
pub(crate) fn decode<T: DeserializeOwned>(body: &[u8]) -> Result<T, DataError> {
    serde_json::from_slice(body).map_err(|error| {
        debug!(%error, "JSON decode failed");
        DataError::unavailable()
    })
}

fn map_status(status: StatusCode) -> DataError {
    match status {
        StatusCode::NOT_FOUND | StatusCode::GONE => DataError::not_found(),
        _ => DataError::unavailable(),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for the transport helpers.
    use super::*;
    use rstest::rstest;
    use serde::Deserialize;

    #[rstest]
    #[case(StatusCode::NOT_FOUND, DataError::NotFound)]
    #[case(StatusCode::GONE, DataError::NotFound)]
    #[case(StatusCode::TOO_MANY_REQUESTS, DataError::Unavailable)]
    #[case(StatusCode::BAD_GATEWAY, DataError::Unavailable)]
    fn statuses_map_to_data_errors(#[case] status: StatusCode, #[case] expected: DataError) {
        assert_eq!(map_status(status), expected);
    }

    #[rstest]
    fn previews_are_compacted_and_truncated() {
        assert_eq!(body_preview(b"  a \n b  "), "a b");
        let long = "x".repeat(200);
        let preview = body_preview(long.as_bytes());
        assert!(preview.ends_with("..."));
        assert_eq!(preview.chars().count(), 163);
    }

    #[derive(Debug, Deserialize)]
    struct Probe {
        value: u32,
    }

    #[rstest]
    fn malformed_json_is_unavailable() {
        assert_eq!(decode::<Probe>(br#"{"value": 3}"#).map(|p| p.value), Ok(3));
        assert_eq!(
            decode::<Probe>(b"<html>").map(|p| p.value),
            Err(DataError::Unavailable)
        );
    }

    #[rstest]
    fn identity_is_folded_into_user_agent() {
        let client = JsonClient::new(
            Duration::from_secs(1),
            HttpIdentity {
                user_agent: "reviewhub-test/1".to_owned(),
                contact: "ops@example.org".to_owned(),
            },
        )
        .expect("client builds");
        assert_eq!(client.user_agent, "reviewhub-test/1 (mailto:ops@example.org)");
    }
}
