//! Europe PMC outbound adapter: full-text search over bioRxiv preprints.

mod dto;
mod http_source;

pub use http_source::EuropePmcSearch;
