//! Crossref outbound adapters: article metadata from the works API, plus a
//! success cache in front of any metadata source.

mod cache;
mod dto;
mod http_source;

pub use cache::CachedArticleMetadataSource;
pub use http_source::CrossrefArticleSource;
