//! DataCite outbound adapter: reviews deposited under their own DOI.

mod dto;
mod http_source;

pub use http_source::DataciteReviewSource;
