//! Session handling for the Clinica results service.
//!
//! A session is a signed HS256 JWT carried in an HttpOnly cookie. This crate
//! owns the cookie attributes and the token issue/validate pair; the service
//! decides when to set or clear the cookie.

pub mod cookie;
pub mod token;
