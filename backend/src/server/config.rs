//! HTTP server configuration object and the settings it is built from.

use std::net::{SocketAddr, ToSocketAddrs};
use std::path::PathBuf;
use std::time::Duration;

use actix_web::cookie::{Key, SameSite};
use ortho_config::OrthoConfig;
use serde::{Deserialize, Deserializer};
use url::Url;

use reviewhub::domain::UserId;
use reviewhub::outbound::HttpIdentity;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PUBLIC_ORIGIN: &str = "http://localhost:8080/";
const DEFAULT_USERS: [&str; 2] = ["demo", "reader"];

/// Server settings loaded via OrthoConfig from CLI flags, `REVIEWHUB_*`
/// environment variables and configuration files.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "REVIEWHUB")]
pub struct AppSettings {
    /// Interface to bind.
    pub host: Option<String>,
    /// Port to bind.
    #[ortho_config(default = 8080)]
    pub port: u16,
    /// JSON file seeding the event log; the log starts empty without one.
    pub events_path: Option<PathBuf>,
    /// Timeout applied to every outbound API request, in seconds.
    #[ortho_config(default = 10)]
    pub http_timeout_secs: u64,
    /// Contact address sent to the article and review APIs.
    pub contact: Option<String>,
    /// Outbound user-agent.
    pub user_agent: Option<String>,
    /// Absolute origin used for share links.
    pub public_origin: Option<String>,
    /// User ids accepted by the log-in form; `REVIEWHUB_USERS=alice,bob`.
    /// Empty means the demo users.
    #[serde(default, deserialize_with = "one_or_many")]
    pub users: Vec<String>,
}

/// Accept a single value as well as the sequence a comma-separated
/// environment variable becomes.
fn one_or_many<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(value) => vec![value],
        OneOrMany::Many(values) => values,
    })
}

/// Why [`AppSettings`] cannot be turned into a running configuration.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("cannot resolve bind address {addr}: {message}")]
    BindAddr { addr: String, message: String },
    #[error("invalid public origin '{value}': {source}")]
    PublicOrigin {
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("invalid user id '{value}' in users list")]
    UserId { value: String },
}

impl AppSettings {
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(DEFAULT_HOST)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }

    /// Outbound identity, falling back to [`HttpIdentity::default`] per field.
    pub fn identity(&self) -> HttpIdentity {
        let defaults = HttpIdentity::default();
        HttpIdentity {
            user_agent: self.user_agent.clone().unwrap_or(defaults.user_agent),
            contact: self.contact.clone().unwrap_or(defaults.contact),
        }
    }

    /// Resolve `host:port` to the first matching socket address.
    ///
    /// # Errors
    /// [`SettingsError::BindAddr`] when the host does not resolve.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let addr = format!("{}:{}", self.host(), self.port);
        let bind_error = |message: String| SettingsError::BindAddr {
            addr: addr.clone(),
            message,
        };
        addr.to_socket_addrs()
            .map_err(|err| bind_error(err.to_string()))?
            .next()
            .ok_or_else(|| bind_error("no addresses".to_owned()))
    }

    /// # Errors
    /// [`SettingsError::PublicOrigin`] when the origin is not an absolute URL.
    pub fn public_origin(&self) -> Result<Url, SettingsError> {
        let value = self.public_origin.as_deref().unwrap_or(DEFAULT_PUBLIC_ORIGIN);
        Url::parse(value).map_err(|source| SettingsError::PublicOrigin {
            value: value.to_owned(),
            source,
        })
    }

    /// # Errors
    /// [`SettingsError::UserId`] for the first entry that is not a valid id.
    pub fn user_ids(&self) -> Result<Vec<UserId>, SettingsError> {
        let configured: Vec<&str> = self
            .users
            .iter()
            .map(|raw| raw.trim())
            .filter(|raw| !raw.is_empty())
            .collect();
        let ids = if configured.is_empty() {
            DEFAULT_USERS.to_vec()
        } else {
            configured
        };
        ids.into_iter()
            .map(|raw| {
                UserId::new(raw).map_err(|_| SettingsError::UserId {
                    value: raw.to_owned(),
                })
            })
            .collect()
    }
}

/// Everything [`super::create_server`] needs, resolved and validated.
pub struct ServerConfig {
    pub(crate) key: Key,
    pub(crate) cookie_secure: bool,
    pub(crate) same_site: SameSite,
    pub(crate) bind_addr: SocketAddr,
    pub(crate) events_path: Option<PathBuf>,
    pub(crate) http_timeout: Duration,
    pub(crate) identity: HttpIdentity,
    pub(crate) public_origin: Url,
    pub(crate) users: Vec<UserId>,
}

impl ServerConfig {
    /// Combine session settings with the loaded [`AppSettings`].
    ///
    /// # Errors
    /// Propagates [`SettingsError`] from the address, origin and user checks.
    pub fn new(
        key: Key,
        cookie_secure: bool,
        same_site: SameSite,
        settings: &AppSettings,
    ) -> Result<Self, SettingsError> {
        Ok(Self {
            key,
            cookie_secure,
            same_site,
            bind_addr: settings.bind_addr()?,
            events_path: settings.events_path.clone(),
            http_timeout: settings.http_timeout(),
            identity: settings.identity(),
            public_origin: settings.public_origin()?,
            users: settings.user_ids()?,
        })
    }

    /// Return the socket address the server will bind to.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
