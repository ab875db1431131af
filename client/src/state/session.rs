//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionStore` is the only writer of [`Session`]. It is constructed once in
//! the root `App`, handed to components through context, and mirrored into an
//! `RwSignal<Session>` via [`SessionStore::subscribe`] so the access gate and
//! navigation re-render on every transition.
//!
//! DESIGN
//! ======
//! `sign_in` and `reconcile` first claim the `pending` slot; a second one
//! while another is outstanding fails with [`SessionError::Busy`] and never
//! reaches the authenticator. No lock is held across an `.await`.
//!
//! `sign_out` never waits for anything. It clears local state before calling
//! the endpoint and bumps the session epoch, so an action still in flight
//! finds the epoch changed when it settles and drops its result. Auth calls
//! have no timeout; a hung logout request only leaks its own future.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use crate::net::api::{AuthError, Authenticator};
use crate::net::types::{Credential, LoginResponse, Role, UserProfile};
use crate::util::token_store::TokenStore;

/// Action currently awaiting the authenticator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Pending {
    /// Startup check of a previously stored token.
    Reconcile,
    SignIn,
}

/// The client's belief about who is signed in.
///
/// Signed-in status is derived from `user`, so a signed-in session without a
/// profile cannot be represented.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub user: Option<UserProfile>,
    pub pending: Option<Pending>,
    pub last_error: Option<String>,
}

impl Session {
    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// True only while the startup reconciliation is in flight.
    pub fn is_reconciling(&self) -> bool {
        self.pending == Some(Pending::Reconcile)
    }

    /// False while signed out.
    pub fn has_role(&self, role: &Role) -> bool {
        self.user.as_ref().is_some_and(|user| &user.role == role)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("a {0:?} action is already in flight")]
    Busy(Pending),
    /// A sign-out happened while this action was in flight.
    #[error("superseded by a sign-out")]
    Superseded,
    #[error(transparent)]
    Auth(#[from] AuthError),
}

type Listener = Arc<dyn Fn(&Session) + Send + Sync>;

/// Single source of truth for authentication state.
///
/// Cheap to clone; clones share the same session.
#[derive(Clone)]
pub struct SessionStore {
    session: Arc<Mutex<Session>>,
    /// Bumped by every sign-out, under the `session` lock.
    epoch: Arc<AtomicU64>,
    listeners: Arc<Mutex<Vec<Listener>>>,
    authenticator: Arc<dyn Authenticator>,
    tokens: Arc<dyn TokenStore>,
}

impl SessionStore {
    pub fn new(authenticator: Arc<dyn Authenticator>, tokens: Arc<dyn TokenStore>) -> Self {
        Self {
            session: Arc::new(Mutex::new(Session::default())),
            epoch: Arc::new(AtomicU64::new(0)),
            listeners: Arc::new(Mutex::new(Vec::new())),
            authenticator,
            tokens,
        }
    }

    /// Copy of the current session.
    pub fn snapshot(&self) -> Session {
        self.session.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    /// Register a listener invoked with the new state after every mutation.
    pub fn subscribe<F>(&self, listener: F)
    where
        F: Fn(&Session) + Send + Sync + 'static,
    {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Arc::new(listener));
    }

    /// Authenticate with a username/password pair.
    ///
    /// On success the profile is stored, the token persisted and the error
    /// cleared. On failure the user-facing message lands in `last_error` and
    /// any prior session is left untouched.
    ///
    /// # Errors
    ///
    /// [`SessionError::Busy`] if another action is outstanding,
    /// [`SessionError::Superseded`] if the user signed out meanwhile,
    /// otherwise the authenticator's failure.
    pub async fn sign_in(&self, username: &str, password: &str) -> Result<UserProfile, SessionError> {
        let epoch = self.begin(Pending::SignIn)?;

        let outcome = {
            let credential = Credential::new(username, password);
            self.authenticator.login(&credential).await
        };

        match outcome {
            Ok(LoginResponse { user, token }) => {
                let profile = user.clone();
                let settled = self.settle(epoch, move |s| {
                    s.user = Some(user);
                    s.pending = None;
                    s.last_error = None;
                });
                if !settled {
                    log::info!("discarding sign-in for {}: signed out while it was in flight", profile.id);
                    return Err(SessionError::Superseded);
                }
                self.tokens.save(&token);
                log::info!("signed in as {} ({})", profile.id, profile.role);
                Ok(profile)
            }
            Err(err) => {
                match &err {
                    AuthError::Rejected(reason) => log::info!("sign-in rejected for {username}: {reason}"),
                    other => log::warn!("sign-in failed before the server could decide: {other}"),
                }
                let message = err.user_message();
                let settled = self.settle(epoch, move |s| {
                    s.pending = None;
                    s.last_error = Some(message);
                });
                if !settled {
                    return Err(SessionError::Superseded);
                }
                Err(err.into())
            }
        }
    }

    /// End the session.
    ///
    /// The stored token and local state are cleared before the endpoint is
    /// called, so the client is signed out even if the request never
    /// resolves. Any sign-in or reconciliation still in flight is cancelled.
    ///
    /// # Errors
    ///
    /// The endpoint's failure, reported after local state was already
    /// cleared.
    pub async fn sign_out(&self) -> Result<(), SessionError> {
        let token = self.tokens.load();
        self.tokens.clear();
        self.update(|s| {
            self.epoch.fetch_add(1, Ordering::SeqCst);
            s.user = None;
            s.pending = None;
        });

        match self.authenticator.logout(token.as_deref()).await {
            Ok(()) => {
                log::info!("signed out");
                Ok(())
            }
            Err(err) => {
                log::warn!("logout endpoint failed; local session cleared anyway: {err}");
                Err(err.into())
            }
        }
    }

    /// Restore a session from a previously stored token.
    ///
    /// A missing token is the normal anonymous case. Failures never surface
    /// in `last_error`; they are logged separately from credential
    /// rejections. A token the server refuses is dropped from storage.
    pub async fn reconcile(&self) {
        let Some(token) = self.tokens.load() else {
            log::debug!("no stored session token; starting anonymous");
            return;
        };
        let epoch = match self.begin(Pending::Reconcile) {
            Ok(epoch) => epoch,
            Err(err) => {
                log::debug!("skipping reconciliation: {err}");
                return;
            }
        };

        match self.authenticator.current_user(&token).await {
            Ok(user) => {
                let label = format!("{} ({})", user.id, user.role);
                let settled = self.settle(epoch, move |s| {
                    s.user = Some(user);
                    s.pending = None;
                    s.last_error = None;
                });
                if settled {
                    log::info!("restored session for {label}");
                } else {
                    log::info!("discarding restored session for {label}: signed out meanwhile");
                }
            }
            Err(err) => {
                if !self.settle(epoch, |s| s.pending = None) {
                    return;
                }
                if let AuthError::Rejected(reason) = &err {
                    log::warn!("session reconciliation: stored token refused ({reason}); discarding it");
                    self.tokens.clear();
                } else {
                    log::warn!("session reconciliation could not reach the server: {err}");
                }
            }
        }
    }

    /// Reset `last_error`. Local only.
    pub fn clear_error(&self) {
        if self.snapshot().last_error.is_some() {
            self.update(|s| s.last_error = None);
        }
    }

    /// Claim the pending slot for `action`, failing if it is taken. Returns
    /// the epoch the action started in.
    fn begin(&self, action: Pending) -> Result<u64, SessionError> {
        let (epoch, snapshot) = {
            let mut session = self.session.lock().unwrap_or_else(PoisonError::into_inner);
            if let Some(current) = session.pending {
                return Err(SessionError::Busy(current));
            }
            session.pending = Some(action);
            if action == Pending::SignIn {
                session.last_error = None;
            }
            (self.epoch.load(Ordering::SeqCst), session.clone())
        };
        self.notify(&snapshot);
        Ok(epoch)
    }

    /// Apply the result of an action begun in `epoch`. Does nothing and
    /// returns false if a sign-out happened since.
    fn settle(&self, epoch: u64, mutate: impl FnOnce(&mut Session)) -> bool {
        let snapshot = {
            let mut session = self.session.lock().unwrap_or_else(PoisonError::into_inner);
            if self.epoch.load(Ordering::SeqCst) != epoch {
                return false;
            }
            mutate(&mut session);
            session.clone()
        };
        self.notify(&snapshot);
        true
    }

    fn update(&self, mutate: impl FnOnce(&mut Session)) {
        let snapshot = {
            let mut session = self.session.lock().unwrap_or_else(PoisonError::into_inner);
            mutate(&mut session);
            session.clone()
        };
        self.notify(&snapshot);
    }

    fn notify(&self, snapshot: &Session) {
        // Listeners run outside the lock so they may read the store again.
        let listeners = self.listeners.lock().unwrap_or_else(PoisonError::into_inner).clone();
        for listener in &listeners {
            listener(snapshot);
        }
    }
}
