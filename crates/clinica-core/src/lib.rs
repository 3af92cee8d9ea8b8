//! Shared service plumbing for Clinica.
//!
//! Health handlers, request-id middleware, timestamp serialization, and
//! tracing setup used by the results service.

pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
