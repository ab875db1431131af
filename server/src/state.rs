//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! user directory is read-only after startup; the session registry is the
//! only mutable piece and carries its own lock.

use std::sync::Arc;

use crate::services::session::SessionRegistry;
use crate::services::users::UserDirectory;

/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<UserDirectory>,
    pub sessions: SessionRegistry,
}

impl AppState {
    #[must_use]
    pub fn new(users: UserDirectory) -> Self {
        Self { users: Arc::new(users), sessions: SessionRegistry::new() }
    }
}
