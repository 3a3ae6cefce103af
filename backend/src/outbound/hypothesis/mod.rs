//! Hypothesis outbound adapter: annotations rendered as review content.

mod dto;
mod http_source;
mod markdown;

pub use http_source::HypothesisReviewSource;
