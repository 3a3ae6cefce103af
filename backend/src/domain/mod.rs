//! Domain core: identifiers, events, read models and use-cases.
//!
//! Everything in here is transport agnostic. Outbound adapters implement
//! [`ports`]; inbound adapters call [`commands`] and the page composers.

pub mod commands;
pub mod error;
pub mod events;
pub mod feed;
pub mod html;
pub mod ids;
pub mod ports;
pub mod projections;
pub mod responses;
#[cfg(test)]
pub(crate) mod test_support;
pub mod trace_id;

pub use self::commands::CommandService;
pub use self::error::{Error, ErrorCode};
pub use self::events::{DomainEvent, chronological};
pub use self::html::HtmlFragment;
pub use self::ids::{
    ArticleServer, BIORXIV_DOI_PREFIX, Doi, EventId, GroupId, IdValidationError, ReviewId, UserId,
};
pub use self::responses::{ResponseCommand, VoteState};
pub use self::trace_id::TraceId;

/// HTTP header name used to propagate trace identifiers.
pub const TRACE_ID_HEADER: &str = "trace-id";
