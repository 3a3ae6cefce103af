//! Outbound adapters implementing domain ports for external infrastructure.
//!
//! - **crossref**, **datacite**, **hypothesis**, **biorxiv**, **europe_pmc**:
//!   read-only JSON APIs reached through the shared [`json_client`]
//! - **memory**: the event log and the user and group directories
//!
//! Adapters translate between wire formats and domain types. They contain no
//! business logic.

pub mod biorxiv;
pub mod crossref;
pub mod datacite;
pub mod europe_pmc;
pub mod hypothesis;
pub mod json_client;
pub mod memory;
pub mod review_router;

pub use json_client::{HttpIdentity, JsonClient};
pub use review_router::ReviewSourceRouter;
