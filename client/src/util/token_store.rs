//! Persistence for the bearer token across page loads.
//!
//! The browser implementation keeps the token in `localStorage` under a fixed
//! key. Outside the browser it is a no-op, so SSR always renders signed-out.

#[cfg(test)]
#[path = "token_store_test.rs"]
mod token_store_test;

use std::sync::{Mutex, PoisonError};

/// Fixed `localStorage` key holding the auth token.
pub const TOKEN_STORAGE_KEY: &str = "authToken";

/// Storage for the single session token.
pub trait TokenStore: Send + Sync {
    /// Stored token, if any. Empty strings count as absent.
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// Token store backed by `window.localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageTokens;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl TokenStore for LocalStorageTokens {
    fn load(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .get_item(TOKEN_STORAGE_KEY)
                .ok()
                .flatten()
                .filter(|token| !token.is_empty())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn save(&self, token: &str) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                storage_write_ok(
                    storage.set_item(TOKEN_STORAGE_KEY, token),
                    "could not persist session token; it will not survive a reload",
                );
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                storage_write_ok(
                    storage.remove_item(TOKEN_STORAGE_KEY),
                    "could not remove session token; the next load will try to restore it",
                );
            }
        }
    }
}

/// Log a failed storage write at `warn`. Returns whether it succeeded.
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
fn storage_write_ok<E: std::fmt::Debug>(outcome: Result<(), E>, context: &str) -> bool {
    match outcome {
        Ok(()) => true,
        Err(err) => {
            log::warn!("{context}: {err:?}");
            false
        }
    }
}

/// In-process token store used by tests.
#[derive(Debug, Default)]
pub struct MemoryTokens {
    token: Mutex<Option<String>>,
}

impl MemoryTokens {
    pub fn with_token(token: impl Into<String>) -> Self {
        Self { token: Mutex::new(Some(token.into())) }
    }
}

impl TokenStore for MemoryTokens {
    fn load(&self) -> Option<String> {
        self.token
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .filter(|token| !token.is_empty())
    }

    fn save(&self, token: &str) {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = Some(token.to_owned());
    }

    fn clear(&self) {
        *self.token.lock().unwrap_or_else(PoisonError::into_inner) = None;
    }
}
