//! bioRxiv / medRxiv details API adapter: posted versions of a preprint.

mod dto;
mod http_source;

pub use http_source::BiorxivVersionSource;
