//! Request middleware.
//!
//! Purpose: give every request a trace id and log its lifecycle.

pub mod trace;

pub use trace::Trace;
