//! Reviewhub: a server-rendered site for following editorial communities
//! and the preprint evaluations they publish.

pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod pages;

pub use middleware::Trace;
