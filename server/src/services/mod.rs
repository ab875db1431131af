//! Service layer for domain logic.
//!
//! ARCHITECTURE
//! ============
//! Route handlers delegate credential checks to `users` and token lifecycle
//! to `session`, keeping HTTP concerns out of the core logic.

pub mod session;
pub mod users;
