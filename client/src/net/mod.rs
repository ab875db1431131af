//! Networking modules for the authentication REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` holds the authenticator seam and its HTTP implementation, and
//! `types` defines the wire schema shared with the server crate.

pub mod api;
pub mod types;
