//! Cookie session settings read from the environment.
//!
//! Debug builds fall back to permissive defaults with a warning so a fresh
//! checkout runs without secrets. Release builds insist on every toggle being
//! present and valid, and refuse short or missing signing keys.

use std::path::PathBuf;

use actix_web::cookie::{Key, SameSite};
use mockable::Env;
use tracing::warn;
use zeroize::Zeroize;

const KEY_FILE_ENV: &str = "SESSION_KEY_FILE";
const COOKIE_SECURE_ENV: &str = "SESSION_COOKIE_SECURE";
const SAMESITE_ENV: &str = "SESSION_SAMESITE";
const ALLOW_EPHEMERAL_ENV: &str = "SESSION_ALLOW_EPHEMERAL";
const DEFAULT_KEY_PATH: &str = "/var/run/secrets/reviewhub_session_key";
const MIN_KEY_LEN: usize = 64;
const BOOL_EXPECTED: &str = "1|0|true|false|yes|no";
const SAMESITE_EXPECTED: &str = "Strict|Lax|None";

/// Whether configuration problems are tolerated.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BuildMode {
    /// Missing or invalid toggles fall back to defaults.
    Debug,
    /// Missing or invalid toggles are errors.
    Release,
}

impl BuildMode {
    /// The mode matching how this binary was compiled.
    #[must_use]
    pub const fn current() -> Self {
        if cfg!(debug_assertions) {
            Self::Debug
        } else {
            Self::Release
        }
    }

    const fn is_debug(self) -> bool {
        matches!(self, Self::Debug)
    }
}

/// Validated cookie session settings.
pub struct SessionSettings {
    /// Signing and encryption key.
    pub key: Key,
    /// Whether cookies carry the `Secure` attribute.
    pub cookie_secure: bool,
    /// `SameSite` policy.
    pub same_site: SameSite,
}

/// Why the session settings are unusable.
#[derive(thiserror::Error, Debug)]
pub enum SessionConfigError {
    /// A release build is missing a toggle.
    #[error("missing required environment variable: {name}")]
    MissingEnv {
        /// Variable name.
        name: &'static str,
    },
    /// A toggle could not be parsed.
    #[error("invalid value for {name}='{value}'; expected {expected}")]
    InvalidEnv {
        /// Variable name.
        name: &'static str,
        /// Rejected value.
        value: String,
        /// Accepted forms.
        expected: &'static str,
    },
    /// The key file could not be read.
    #[error("failed to read session key at {path}: {source}")]
    KeyRead {
        /// Key location.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
    /// The key file is too short for a release build.
    #[error("session key at {path} too short: need >= {min_len} bytes, got {length}")]
    KeyTooShort {
        /// Key location.
        path: PathBuf,
        /// Bytes found.
        length: usize,
        /// Bytes required.
        min_len: usize,
    },
    /// `SameSite=None` without `Secure` would be dropped by browsers.
    #[error("SESSION_SAMESITE=None requires SESSION_COOKIE_SECURE=1")]
    InsecureSameSiteNone,
    /// Ephemeral keys invalidate every session on restart.
    #[error("SESSION_ALLOW_EPHEMERAL must be 0 in release builds")]
    EphemeralNotAllowed,
}

/// Read and validate session settings.
///
/// # Errors
/// Any [`SessionConfigError`] that `mode` does not tolerate.
pub fn session_settings_from_env<E: Env>(
    env: &E,
    mode: BuildMode,
) -> Result<SessionSettings, SessionConfigError> {
    let cookie_secure = read_toggle(env, mode, COOKIE_SECURE_ENV, true)?;
    let same_site = read_same_site(env, mode, cookie_secure)?;
    let allow_ephemeral = read_toggle(env, mode, ALLOW_EPHEMERAL_ENV, false)?;
    if allow_ephemeral && !mode.is_debug() {
        return Err(SessionConfigError::EphemeralNotAllowed);
    }
    let key = read_key(env, mode, allow_ephemeral)?;
    Ok(SessionSettings {
        key,
        cookie_secure,
        same_site,
    })
}

/// Resolve a problem with `name`: debug builds warn and use `fallback`.
fn tolerate<T>(
    mode: BuildMode,
    name: &'static str,
    fallback: T,
    error: SessionConfigError,
) -> Result<T, SessionConfigError> {
    if mode.is_debug() {
        warn!(variable = name, %error, "session setting fallback in debug build");
        Ok(fallback)
    } else {
        Err(error)
    }
}

fn read_toggle<E: Env>(
    env: &E,
    mode: BuildMode,
    name: &'static str,
    fallback: bool,
) -> Result<bool, SessionConfigError> {
    let Some(value) = env.string(name) else {
        return tolerate(mode, name, fallback, SessionConfigError::MissingEnv { name });
    };
    match parse_bool(&value) {
        Some(flag) => Ok(flag),
        None => tolerate(
            mode,
            name,
            fallback,
            SessionConfigError::InvalidEnv {
                name,
                value,
                expected: BOOL_EXPECTED,
            },
        ),
    }
}

fn read_same_site<E: Env>(
    env: &E,
    mode: BuildMode,
    cookie_secure: bool,
) -> Result<SameSite, SessionConfigError> {
    let fallback = if mode.is_debug() {
        SameSite::Lax
    } else {
        SameSite::Strict
    };
    let Some(value) = env.string(SAMESITE_ENV) else {
        return tolerate(
            mode,
            SAMESITE_ENV,
            fallback,
            SessionConfigError::MissingEnv { name: SAMESITE_ENV },
        );
    };
    match value.to_ascii_lowercase().as_str() {
        "lax" => Ok(SameSite::Lax),
        "strict" => Ok(SameSite::Strict),
        "none" if cookie_secure => Ok(SameSite::None),
        "none" => tolerate(
            mode,
            SAMESITE_ENV,
            SameSite::None,
            SessionConfigError::InsecureSameSiteNone,
        ),
        _ => tolerate(
            mode,
            SAMESITE_ENV,
            fallback,
            SessionConfigError::InvalidEnv {
                name: SAMESITE_ENV,
                value,
                expected: SAMESITE_EXPECTED,
            },
        ),
    }
}

fn read_key<E: Env>(
    env: &E,
    mode: BuildMode,
    allow_ephemeral: bool,
) -> Result<Key, SessionConfigError> {
    let path = PathBuf::from(
        env.string(KEY_FILE_ENV)
            .unwrap_or_else(|| DEFAULT_KEY_PATH.to_owned()),
    );
    let mut bytes = match std::fs::read(&path) {
        Ok(bytes) => bytes,
        Err(source) if mode.is_debug() || allow_ephemeral => {
            warn!(path = %path.display(), error = %source, "using ephemeral session key");
            return Ok(Key::generate());
        }
        Err(source) => return Err(SessionConfigError::KeyRead { path, source }),
    };
    let length = bytes.len();
    let outcome = if length < MIN_KEY_LEN {
        tolerate(
            mode,
            KEY_FILE_ENV,
            Key::generate(),
            SessionConfigError::KeyTooShort {
                path,
                length,
                min_len: MIN_KEY_LEN,
            },
        )
    } else {
        Ok(Key::derive_from(&bytes))
    };
    bytes.zeroize();
    outcome
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}
