//! Bearer-token sessions for the development auth API.
//!
//! ARCHITECTURE
//! ============
//! Tokens are opaque random hex strings mapped to a username in memory.
//! Restarting the server signs everyone out; clients then drop their stored
//! token on the next reconciliation.
//!
//! Sessions expire [`SESSION_TTL`] after they were issued. Expired entries
//! are treated as unknown by `resolve` and swept on every `issue`.

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;

use std::collections::HashMap;
use std::fmt::Write;
use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::Rng;
use tokio::sync::RwLock;

pub(crate) fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        let _ = write!(s, "{b:02x}");
    }
    s
}

/// Generate a cryptographically random 32-byte hex token.
#[must_use]
pub fn generate_token() -> String {
    let bytes: [u8; 32] = rand::rng().random();
    bytes_to_hex(&bytes)
}

/// Lifetime of an issued session.
pub const SESSION_TTL: Duration = Duration::from_secs(7 * 24 * 60 * 60);

struct SessionEntry {
    username: String,
    issued_at: Instant,
}

/// Live sessions keyed by token.
#[derive(Clone)]
pub struct SessionRegistry {
    tokens: Arc<RwLock<HashMap<String, SessionEntry>>>,
    ttl: Duration,
}

impl Default for SessionRegistry {
    fn default() -> Self {
        Self::with_ttl(SESSION_TTL)
    }
}

impl SessionRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_ttl(ttl: Duration) -> Self {
        Self { tokens: Arc::new(RwLock::new(HashMap::new())), ttl }
    }

    /// Start a session for `username`, returning its token. Expired sessions
    /// are dropped first.
    pub async fn issue(&self, username: &str) -> String {
        let token = generate_token();
        let mut tokens = self.tokens.write().await;
        let before = tokens.len();
        tokens.retain(|_, entry| entry.issued_at.elapsed() < self.ttl);
        let swept = before - tokens.len();
        if swept > 0 {
            tracing::debug!(swept, "expired sessions removed");
        }
        tokens.insert(token.clone(), SessionEntry { username: username.to_owned(), issued_at: Instant::now() });
        token
    }

    /// Username owning `token`, if the session is live and unexpired.
    pub async fn resolve(&self, token: &str) -> Option<String> {
        self.tokens
            .read()
            .await
            .get(token)
            .filter(|entry| entry.issued_at.elapsed() < self.ttl)
            .map(|entry| entry.username.clone())
    }

    /// End the session for `token`. Returns whether it existed.
    pub async fn revoke(&self, token: &str) -> bool {
        self.tokens.write().await.remove(token).is_some()
    }

    /// Number of unexpired sessions.
    pub async fn active_count(&self) -> usize {
        self.tokens
            .read()
            .await
            .values()
            .filter(|entry| entry.issued_at.elapsed() < self.ttl)
            .count()
    }
}
