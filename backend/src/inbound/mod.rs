//! Inbound adapters translating external requests into page composition and
//! command calls while keeping framework details at the edge.

pub mod http;
