//! Identifier value types shared across the domain.
//!
//! Every identifier is validated once at the boundary and then passed around
//! as a typed value so projections never deal with raw strings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Registrant prefix shared by bioRxiv and medRxiv DOIs.
pub const BIORXIV_DOI_PREFIX: &str = "10.1101";

/// Validation errors raised while parsing identifiers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdValidationError {
    /// The identifier was empty or whitespace only.
    #[error("{kind} must not be empty")]
    Empty {
        /// Identifier kind, for messages.
        kind: &'static str,
    },
    /// The identifier carried leading or trailing whitespace.
    #[error("{kind} must not contain surrounding whitespace")]
    Whitespace {
        /// Identifier kind, for messages.
        kind: &'static str,
    },
    /// The value is not a `10.<registrant>/<suffix>` DOI.
    #[error("'{value}' is not a DOI")]
    MalformedDoi {
        /// Offending input.
        value: String,
    },
    /// Review identifiers are `doi:<doi>` or `hypothesis:<id>`.
    #[error("'{value}' is not a review id")]
    MalformedReviewId {
        /// Offending input.
        value: String,
    },
}

fn validate_token(kind: &'static str, raw: &str) -> Result<(), IdValidationError> {
    if raw.trim().is_empty() {
        return Err(IdValidationError::Empty { kind });
    }
    if raw.trim() != raw {
        return Err(IdValidationError::Whitespace { kind });
    }
    Ok(())
}

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Validate and construct the identifier.
            pub fn new(raw: impl Into<String>) -> Result<Self, IdValidationError> {
                let raw = raw.into();
                validate_token($kind, &raw)?;
                Ok(Self(raw))
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.0.as_str()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl TryFrom<String> for $name {
            type Error = IdValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl FromStr for $name {
            type Err = IdValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::new(s)
            }
        }
    };
}

string_id!(
    /// Opaque identifier of an editorial community.
    GroupId,
    "group id"
);

string_id!(
    /// Opaque identifier of a signed-in user.
    UserId,
    "user id"
);

/// Digital Object Identifier of an article or a DataCite-hosted review.
///
/// # Examples
/// ```
/// use reviewhub::domain::Doi;
///
/// let doi = Doi::new("10.1101/2020.07.04.187583").unwrap();
/// assert!(doi.is_biorxiv());
/// assert!(Doi::new("not-a-doi").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Doi(String);

impl Doi {
    /// Validate and construct a DOI.
    pub fn new(raw: impl Into<String>) -> Result<Self, IdValidationError> {
        let raw = raw.into();
        validate_token("doi", &raw)?;
        let well_formed = raw
            .split_once('/')
            .is_some_and(|(registrant, suffix)| {
                registrant.starts_with("10.") && registrant.len() > 3 && !suffix.is_empty()
            });
        if well_formed {
            Ok(Self(raw))
        } else {
            Err(IdValidationError::MalformedDoi { value: raw })
        }
    }

    /// Whether the DOI belongs to the given registrant prefix, e.g. `10.1101`.
    #[must_use]
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.0
            .split_once('/')
            .is_some_and(|(registrant, _)| registrant == prefix)
    }

    /// Whether the DOI was minted by bioRxiv or medRxiv.
    #[must_use]
    pub fn is_biorxiv(&self) -> bool {
        self.has_prefix(BIORXIV_DOI_PREFIX)
    }
}

impl AsRef<str> for Doi {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Doi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Doi {
    type Error = IdValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Doi> for String {
    fn from(value: Doi) -> Self {
        value.0
    }
}

impl FromStr for Doi {
    type Err = IdValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Identifier of a review, tagged by the service hosting its content.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ReviewId {
    /// Review deposited with DataCite under its own DOI.
    Doi(Doi),
    /// Hypothesis annotation id.
    Hypothesis(String),
}

impl fmt::Display for ReviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Doi(doi) => write!(f, "doi:{doi}"),
            Self::Hypothesis(id) => write!(f, "hypothesis:{id}"),
        }
    }
}

impl FromStr for ReviewId {
    type Err = IdValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || IdValidationError::MalformedReviewId {
            value: s.to_owned(),
        };
        match s.split_once(':') {
            Some(("doi", doi)) => Doi::new(doi).map(Self::Doi).map_err(|_| malformed()),
            Some(("hypothesis", id)) if validate_token("review id", id).is_ok() => {
                Ok(Self::Hypothesis(id.to_owned()))
            }
            _ => Err(malformed()),
        }
    }
}

impl TryFrom<String> for ReviewId {
    type Error = IdValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ReviewId> for String {
    fn from(value: ReviewId) -> Self {
        value.to_string()
    }
}

/// Identity of one event in the log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(Uuid);

impl EventId {
    /// Generate a new random event id.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Preprint server hosting an article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArticleServer {
    /// bioRxiv, biology preprints.
    Biorxiv,
    /// medRxiv, health sciences preprints.
    Medrxiv,
}

impl ArticleServer {
    /// Human-facing server name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Biorxiv => "bioRxiv",
            Self::Medrxiv => "medRxiv",
        }
    }

    /// Host serving article pages.
    #[must_use]
    pub const fn host(self) -> &'static str {
        match self {
            Self::Biorxiv => "www.biorxiv.org",
            Self::Medrxiv => "www.medrxiv.org",
        }
    }

    /// Path segment used by the details API.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Biorxiv => "biorxiv",
            Self::Medrxiv => "medrxiv",
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("10.1101/2020.07.04.187583", true)]
    #[case("10.7554/eLife.61523", false)]
    fn recognises_biorxiv_dois(#[case] raw: &str, #[case] expected: bool) {
        let doi = Doi::new(raw).expect("valid doi");
        assert_eq!(doi.is_biorxiv(), expected);
    }

    #[rstest]
    #[case("")]
    #[case(" 10.1101/abc")]
    #[case("10.1101")]
    #[case("10.1101/")]
    #[case("11.1101/abc")]
    #[case("10./abc")]
    fn rejects_malformed_dois(#[case] raw: &str) {
        assert!(Doi::new(raw).is_err());
    }

    #[rstest]
    fn prefix_match_is_exact_on_registrant() {
        let doi = Doi::new("10.11011/abc").expect("valid doi");
        assert!(!doi.has_prefix(BIORXIV_DOI_PREFIX));
    }

    #[rstest]
    #[case("doi:10.5281/zenodo.3678326")]
    #[case("hypothesis:GFEW8JXMEeqJQcuc-6NFhQ")]
    fn review_ids_round_trip_through_strings(#[case] raw: &str) {
        let id: ReviewId = raw.parse().expect("valid review id");
        assert_eq!(id.to_string(), raw);
    }

    #[rstest]
    #[case("10.5281/zenodo.3678326")]
    #[case("doi:nope")]
    #[case("hypothesis:")]
    #[case("crossref:abc")]
    fn rejects_malformed_review_ids(#[case] raw: &str) {
        assert!(raw.parse::<ReviewId>().is_err());
    }

    #[rstest]
    fn user_id_rejects_surrounding_whitespace() {
        assert_eq!(
            UserId::new(" alice"),
            Err(IdValidationError::Whitespace { kind: "user id" })
        );
        assert_eq!(
            GroupId::new("  "),
            Err(IdValidationError::Empty { kind: "group id" })
        );
    }

    #[rstest]
    fn ids_deserialize_with_validation() {
        let group: GroupId = serde_json::from_str("\"b560187e\"").expect("valid group");
        assert_eq!(group.as_ref(), "b560187e");
        assert!(serde_json::from_str::<Doi>("\"bogus\"").is_err());
    }
}
