//! DTOs for decoding Crossref works responses.

use serde::Deserialize;

use crate::domain::html::strip_tags;
use crate::domain::ports::ArticleDetails;
use crate::domain::{ArticleServer, Doi};

#[derive(Debug, Deserialize)]
pub(super) struct WorkEnvelopeDto {
    pub(super) message: WorkDto,
}

#[derive(Debug, Deserialize)]
pub(super) struct WorkDto {
    #[serde(default)]
    pub(super) title: Vec<String>,
    #[serde(rename = "abstract")]
    pub(super) abstract_markup: Option<String>,
    #[serde(default)]
    pub(super) author: Vec<AuthorDto>,
    #[serde(default)]
    pub(super) institution: Vec<InstitutionDto>,
}

#[derive(Debug, Deserialize)]
pub(super) struct AuthorDto {
    pub(super) given: Option<String>,
    pub(super) family: Option<String>,
    pub(super) name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct InstitutionDto {
    pub(super) name: String,
}

impl AuthorDto {
    fn display_name(&self) -> Option<String> {
        match (&self.given, &self.family, &self.name) {
            (Some(given), Some(family), _) => Some(format!("{given} {family}")),
            (None, Some(family), _) => Some(family.clone()),
            (_, None, Some(name)) => Some(name.clone()),
            _ => None,
        }
    }
}

/// JATS abstracts usually open with an `Abstract` heading.
fn plain_abstract(markup: &str) -> String {
    let text = strip_tags(markup);
    text.strip_prefix("Abstract ")
        .map_or_else(|| text.clone(), str::to_owned)
}

impl WorkDto {
    fn server(&self) -> ArticleServer {
        let is_medrxiv = self
            .institution
            .iter()
            .any(|institution| institution.name.eq_ignore_ascii_case("medrxiv"));
        if is_medrxiv {
            ArticleServer::Medrxiv
        } else {
            ArticleServer::Biorxiv
        }
    }

    /// Map into domain metadata; `None` when the work has no title.
    pub(super) fn into_details(self, doi: &Doi) -> Option<ArticleDetails> {
        let server = self.server();
        let title = self
            .title
            .first()
            .map(|raw| strip_tags(raw))
            .filter(|title| !title.is_empty())?;
        Some(ArticleDetails {
            doi: doi.clone(),
            title,
            abstract_text: self
                .abstract_markup
                .as_deref()
                .map(plain_abstract)
                .unwrap_or_default(),
            authors: self.author.iter().filter_map(AuthorDto::display_name).collect(),
            server,
        })
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for Crossref decoding.
    use super::*;
    use rstest::rstest;

    const WORK: &str = r#"{
        "status": "ok",
        "message": {
            "DOI": "10.1101/2020.07.04.187583",
            "title": ["Tracking <i>SARS-CoV-2</i> spread"],
            "abstract": "<jats:title>Abstract</jats:title><jats:p>We   tracked things.</jats:p>",
            "author": [
                {"given": "Ada", "family": "Lovelace"},
                {"name": "The Consortium"},
                {"given": "Nobody"}
            ],
            "institution": [{"name": "medRxiv"}]
        }
    }"#;

    fn doi() -> Doi {
        Doi::new("10.1101/2020.07.04.187583").expect("valid doi")
    }

    #[rstest]
    fn decodes_title_abstract_and_authors() {
        let envelope: WorkEnvelopeDto = serde_json::from_str(WORK).expect("decodes");
        let details = envelope.message.into_details(&doi()).expect("has title");

        assert_eq!(details.title, "Tracking SARS-CoV-2 spread");
        assert_eq!(details.abstract_text, "We tracked things.");
        assert_eq!(details.authors, vec!["Ada Lovelace", "The Consortium"]);
        assert_eq!(details.server, ArticleServer::Medrxiv);
    }

    #[rstest]
    fn untitled_works_are_rejected() {
        let envelope: WorkEnvelopeDto =
            serde_json::from_str(r#"{"message": {"title": []}}"#).expect("decodes");
        assert!(envelope.message.into_details(&doi()).is_none());
    }

    #[rstest]
    fn server_defaults_to_biorxiv() {
        let envelope: WorkEnvelopeDto =
            serde_json::from_str(r#"{"message": {"title": ["T"]}}"#).expect("decodes");
        let details = envelope.message.into_details(&doi()).expect("has title");
        assert_eq!(details.server, ArticleServer::Biorxiv);
        assert!(details.abstract_text.is_empty());
    }
}
