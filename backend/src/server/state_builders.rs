//! Builds the outbound adapters and bundles them into [`HttpState`].

use std::io;
use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;
use tracing::info;

use reviewhub::domain::ports::{ArticleMetadataSource, EventStore, ReviewContentSource};
use reviewhub::inbound::http::state::{HttpState, HttpStatePorts};
use reviewhub::outbound::biorxiv::BiorxivVersionSource;
use reviewhub::outbound::crossref::{CachedArticleMetadataSource, CrossrefArticleSource};
use reviewhub::outbound::datacite::DataciteReviewSource;
use reviewhub::outbound::europe_pmc::EuropePmcSearch;
use reviewhub::outbound::hypothesis::HypothesisReviewSource;
use reviewhub::outbound::memory::{
    InMemoryEventStore, InMemoryGroupDirectory, InMemoryUserDirectory,
};
use reviewhub::outbound::{JsonClient, ReviewSourceRouter};

use super::ServerConfig;

fn other_io<E: std::fmt::Display>(context: &'static str) -> impl FnOnce(E) -> io::Error {
    move |err| io::Error::other(format!("{context}: {err}"))
}

fn build_event_store(config: &ServerConfig) -> io::Result<Arc<dyn EventStore>> {
    match &config.events_path {
        Some(path) => Ok(Arc::new(
            InMemoryEventStore::from_seed_file(path).map_err(other_io("event seed"))?,
        )),
        None => {
            info!("no event seed configured; starting with an empty log");
            Ok(Arc::new(InMemoryEventStore::default()))
        }
    }
}

/// Wire every port to its production adapter.
///
/// # Errors
/// Returns [`io::Error`] when the HTTP client cannot be built, an endpoint
/// fails to parse, or the event seed cannot be loaded.
pub(super) fn build_http_state(config: &ServerConfig) -> io::Result<web::Data<HttpState>> {
    let client = JsonClient::new(config.http_timeout, config.identity.clone())
        .map_err(other_io("http client"))?;

    let crossref = CrossrefArticleSource::new(client.clone()).map_err(other_io("crossref"))?;
    let articles: Arc<dyn ArticleMetadataSource> =
        Arc::new(CachedArticleMetadataSource::new(Arc::new(crossref)));

    let datacite = DataciteReviewSource::new(client.clone()).map_err(other_io("datacite"))?;
    let hypothesis =
        HypothesisReviewSource::new(client.clone()).map_err(other_io("hypothesis"))?;
    let reviews: Arc<dyn ReviewContentSource> = Arc::new(ReviewSourceRouter::new(
        Arc::new(datacite),
        Arc::new(hypothesis),
    ));

    let versions = BiorxivVersionSource::new(client.clone()).map_err(other_io("biorxiv"))?;
    let search = EuropePmcSearch::new(client).map_err(other_io("europe pmc"))?;

    let ports = HttpStatePorts {
        events: build_event_store(config)?,
        articles,
        reviews,
        groups: Arc::new(InMemoryGroupDirectory::bootstrap()),
        versions: Arc::new(versions),
        search: Arc::new(search),
        users: Arc::new(InMemoryUserDirectory::from_ids(config.users.iter().cloned())),
        clock: Arc::new(DefaultClock),
        public_origin: config.public_origin.clone(),
    };
    Ok(web::Data::new(HttpState::new(ports)))
}
