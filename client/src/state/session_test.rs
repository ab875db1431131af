use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use futures::FutureExt;
use futures::channel::oneshot;
use futures::executor::block_on;

use super::*;
use crate::net::api::NETWORK_ERROR_MESSAGE;
use crate::util::token_store::MemoryTokens;

fn profile(id: &str, role: Role) -> UserProfile {
    UserProfile {
        id: id.to_owned(),
        name: "John Ranger".to_owned(),
        role,
        organization: "Nairobi Conservation Team".to_owned(),
        region: "Nairobi".to_owned(),
    }
}

/// Authenticator answering every call with a canned result.
struct StubAuth {
    login: Result<LoginResponse, AuthError>,
    logout: Result<(), AuthError>,
    current_user: Result<UserProfile, AuthError>,
    login_calls: AtomicUsize,
    logout_tokens: Mutex<Vec<Option<String>>>,
    current_user_tokens: Mutex<Vec<String>>,
}

impl StubAuth {
    fn new() -> Self {
        Self {
            login: Err(AuthError::Rejected("Invalid credentials".to_owned())),
            logout: Ok(()),
            current_user: Err(AuthError::Rejected("Missing or invalid authorization token".to_owned())),
            login_calls: AtomicUsize::new(0),
            logout_tokens: Mutex::new(Vec::new()),
            current_user_tokens: Mutex::new(Vec::new()),
        }
    }

    fn accepting(user: UserProfile, token: &str) -> Self {
        Self {
            login: Ok(LoginResponse { user: user.clone(), token: token.to_owned() }),
            current_user: Ok(user),
            ..Self::new()
        }
    }
}

#[async_trait(?Send)]
impl Authenticator for StubAuth {
    async fn login(&self, _credential: &Credential) -> Result<LoginResponse, AuthError> {
        self.login_calls.fetch_add(1, Ordering::SeqCst);
        self.login.clone()
    }

    async fn logout(&self, token: Option<&str>) -> Result<(), AuthError> {
        self.logout_tokens.lock().unwrap().push(token.map(str::to_owned));
        self.logout.clone()
    }

    async fn current_user(&self, token: &str) -> Result<UserProfile, AuthError> {
        self.current_user_tokens.lock().unwrap().push(token.to_owned());
        self.current_user.clone()
    }
}

/// Authenticator whose login stays in flight until released.
struct GatedAuth {
    release: Mutex<Option<oneshot::Receiver<()>>>,
    user: UserProfile,
    login_calls: AtomicUsize,
}

#[async_trait(?Send)]
impl Authenticator for GatedAuth {
    async fn login(&self, _credential: &Credential) -> Result<LoginResponse, AuthError> {
        self.login_calls.fetch_add(1, Ordering::SeqCst);
        let release = self.release.lock().unwrap().take();
        if let Some(release) = release {
            let _ = release.await;
        }
        Ok(LoginResponse { user: self.user.clone(), token: "T".to_owned() })
    }

    async fn logout(&self, _token: Option<&str>) -> Result<(), AuthError> {
        Ok(())
    }

    async fn current_user(&self, _token: &str) -> Result<UserProfile, AuthError> {
        Err(AuthError::Rejected("unused".to_owned()))
    }
}

/// Authenticator whose logout and current-user requests never resolve.
struct HangingAuth {
    user: UserProfile,
    logout_calls: AtomicUsize,
}

#[async_trait(?Send)]
impl Authenticator for HangingAuth {
    async fn login(&self, _credential: &Credential) -> Result<LoginResponse, AuthError> {
        Ok(LoginResponse { user: self.user.clone(), token: "T".to_owned() })
    }

    async fn logout(&self, _token: Option<&str>) -> Result<(), AuthError> {
        self.logout_calls.fetch_add(1, Ordering::SeqCst);
        futures::future::pending::<Result<_, AuthError>>().await
    }

    async fn current_user(&self, _token: &str) -> Result<UserProfile, AuthError> {
        futures::future::pending::<Result<_, AuthError>>().await
    }
}

fn store_with(auth: Arc<StubAuth>, tokens: Arc<MemoryTokens>) -> SessionStore {
    SessionStore::new(auth, tokens)
}

// =============================================================
// Session
// =============================================================

#[test]
fn default_session_is_anonymous_and_idle() {
    let session = Session::default();
    assert!(!session.is_signed_in());
    assert!(!session.is_pending());
    assert!(session.last_error.is_none());
}

#[test]
fn role_checks_are_false_when_signed_out() {
    let session = Session::default();
    assert!(!session.has_role(&Role::SuperUser));
    assert!(!session.has_role(&Role::ForestRanger));
}

#[test]
fn role_checks_match_current_user() {
    let session = Session { user: Some(profile("admin", Role::SuperUser)), ..Session::default() };
    assert!(session.has_role(&Role::SuperUser));
    assert!(!session.has_role(&Role::ForestRanger));
}

// =============================================================
// sign_in
// =============================================================

#[test]
fn sign_in_success_stores_profile_and_token() {
    let user = profile("ranger1", Role::ForestRanger);
    let auth = Arc::new(StubAuth::accepting(user.clone(), "T"));
    let tokens = Arc::new(MemoryTokens::default());
    let store = store_with(auth, tokens.clone());

    let result = block_on(store.sign_in("ranger1", "password"));

    assert_eq!(result, Ok(user.clone()));
    let session = store.snapshot();
    assert!(session.is_signed_in());
    assert_eq!(session.user, Some(user));
    assert_eq!(session.user.as_ref().map(|u| u.role.as_str()), Some("forest_ranger"));
    assert!(session.pending.is_none());
    assert!(session.last_error.is_none());
    assert_eq!(tokens.load().as_deref(), Some("T"));
}

#[test]
fn sign_in_rejection_reports_error_and_stays_signed_out() {
    let auth = Arc::new(StubAuth::new());
    let tokens = Arc::new(MemoryTokens::default());
    let store = store_with(auth, tokens.clone());

    let result = block_on(store.sign_in("ranger1", "wrong"));

    assert!(matches!(result, Err(SessionError::Auth(AuthError::Rejected(_)))));
    let session = store.snapshot();
    assert!(!session.is_signed_in());
    assert!(session.user.is_none());
    assert_eq!(session.last_error.as_deref(), Some("Invalid credentials"));
    assert!(session.pending.is_none());
    assert_eq!(tokens.load(), None);
}

#[test]
fn sign_in_transport_failure_reports_generic_retry_message() {
    let auth = Arc::new(StubAuth {
        login: Err(AuthError::Transport("connection refused".to_owned())),
        ..StubAuth::new()
    });
    let store = store_with(auth, Arc::new(MemoryTokens::default()));

    let _ = block_on(store.sign_in("ranger1", "password"));

    assert_eq!(store.snapshot().last_error.as_deref(), Some(NETWORK_ERROR_MESSAGE));
}

#[test]
fn failed_sign_in_keeps_prior_session() {
    let user = profile("ranger1", Role::ForestRanger);
    let auth = Arc::new(StubAuth::accepting(user.clone(), "T"));
    let tokens = Arc::new(MemoryTokens::with_token("T"));
    let store = store_with(auth, tokens);
    block_on(store.reconcile());
    assert!(store.snapshot().is_signed_in());

    let rejecting = Arc::new(StubAuth::new());
    let store = SessionStore { authenticator: rejecting, ..store };
    let _ = block_on(store.sign_in("manager1", "wrong"));

    assert_eq!(store.snapshot().user, Some(user));
    assert!(store.snapshot().last_error.is_some());
}

#[test]
fn sign_in_clears_previous_error_when_it_starts() {
    let auth = Arc::new(StubAuth::new());
    let store = store_with(auth, Arc::new(MemoryTokens::default()));
    let _ = block_on(store.sign_in("ranger1", "wrong"));
    assert!(store.snapshot().last_error.is_some());

    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    store.subscribe(move |s| sink.lock().unwrap().push(s.last_error.clone()));
    let _ = block_on(store.sign_in("ranger1", "wrong"));

    let seen = seen.lock().unwrap();
    assert_eq!(seen.first(), Some(&None));
    assert_eq!(seen.last().cloned().flatten().as_deref(), Some("Invalid credentials"));
}

#[test]
fn sign_in_while_pending_is_rejected_without_calling_authenticator() {
    let (release, gate) = oneshot::channel();
    let auth = Arc::new(GatedAuth {
        release: Mutex::new(Some(gate)),
        user: profile("ranger1", Role::ForestRanger),
        login_calls: AtomicUsize::new(0),
    });
    let store = SessionStore::new(auth.clone(), Arc::new(MemoryTokens::default()));

    let mut first = Box::pin(store.sign_in("ranger1", "password"));
    assert!(first.as_mut().now_or_never().is_none());
    assert_eq!(store.snapshot().pending, Some(Pending::SignIn));

    let second = store.sign_in("ranger1", "password").now_or_never();
    assert_eq!(second, Some(Err(SessionError::Busy(Pending::SignIn))));
    assert_eq!(auth.login_calls.load(Ordering::SeqCst), 1);

    release.send(()).unwrap();
    let first = block_on(first);
    assert!(first.is_ok());
    assert!(store.snapshot().is_signed_in());
    assert!(store.snapshot().pending.is_none());
}

#[test]
fn listeners_observe_pending_then_settled_state() {
    let user = profile("ranger1", Role::ForestRanger);
    let store = store_with(Arc::new(StubAuth::accepting(user, "T")), Arc::new(MemoryTokens::default()));
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    store.subscribe(move |s| sink.lock().unwrap().push((s.pending, s.is_signed_in())));

    let _ = block_on(store.sign_in("ranger1", "password"));

    assert_eq!(*seen.lock().unwrap(), vec![(Some(Pending::SignIn), false), (None, true)]);
}

// =============================================================
// sign_out
// =============================================================

#[test]
fn sign_out_sends_stored_token_and_clears_state() {
    let user = profile("ranger1", Role::ForestRanger);
    let auth = Arc::new(StubAuth::accepting(user, "T"));
    let tokens = Arc::new(MemoryTokens::default());
    let store = store_with(auth.clone(), tokens.clone());
    block_on(store.sign_in("ranger1", "password")).unwrap();

    let result = block_on(store.sign_out());

    assert_eq!(result, Ok(()));
    assert_eq!(*auth.logout_tokens.lock().unwrap(), vec![Some("T".to_owned())]);
    assert!(!store.snapshot().is_signed_in());
    assert!(store.snapshot().user.is_none());
    assert_eq!(tokens.load(), None);
}

#[test]
fn sign_out_clears_state_even_when_endpoint_fails() {
    let user = profile("ranger1", Role::ForestRanger);
    let auth = Arc::new(StubAuth {
        logout: Err(AuthError::Transport("offline".to_owned())),
        ..StubAuth::accepting(user, "T")
    });
    let tokens = Arc::new(MemoryTokens::default());
    let store = store_with(auth, tokens.clone());
    block_on(store.sign_in("ranger1", "password")).unwrap();

    let result = block_on(store.sign_out());

    assert!(matches!(result, Err(SessionError::Auth(AuthError::Transport(_)))));
    let session = store.snapshot();
    assert!(!session.is_signed_in());
    assert!(session.user.is_none());
    assert!(session.pending.is_none());
    assert_eq!(tokens.load(), None);
}

#[test]
fn sign_out_clears_state_before_the_endpoint_answers() {
    let auth = Arc::new(HangingAuth {
        user: profile("ranger1", Role::ForestRanger),
        logout_calls: AtomicUsize::new(0),
    });
    let tokens = Arc::new(MemoryTokens::default());
    let store = SessionStore::new(auth.clone(), tokens.clone());
    block_on(store.sign_in("ranger1", "password")).unwrap();

    let mut first = Box::pin(store.sign_out());
    assert!(first.as_mut().now_or_never().is_none());

    let session = store.snapshot();
    assert!(!session.is_signed_in());
    assert!(session.pending.is_none());
    assert_eq!(tokens.load(), None);

    // A second click is not blocked by the hung request.
    assert!(store.sign_out().now_or_never().is_none());
    assert_eq!(auth.logout_calls.load(Ordering::SeqCst), 2);

    // Nor is signing in again.
    assert!(block_on(store.sign_in("ranger1", "password")).is_ok());
    assert!(store.snapshot().is_signed_in());
}

#[test]
fn sign_out_during_sign_in_discards_the_late_login() {
    let (release, gate) = oneshot::channel();
    let auth = Arc::new(GatedAuth {
        release: Mutex::new(Some(gate)),
        user: profile("ranger1", Role::ForestRanger),
        login_calls: AtomicUsize::new(0),
    });
    let tokens = Arc::new(MemoryTokens::default());
    let store = SessionStore::new(auth, tokens.clone());

    let mut login = Box::pin(store.sign_in("ranger1", "password"));
    assert!(login.as_mut().now_or_never().is_none());
    block_on(store.sign_out()).unwrap();

    release.send(()).unwrap();
    assert_eq!(block_on(login), Err(SessionError::Superseded));
    let session = store.snapshot();
    assert!(!session.is_signed_in());
    assert!(session.pending.is_none());
    assert_eq!(tokens.load(), None);
}

#[test]
fn sign_out_during_reconcile_ends_the_loading_state() {
    let auth = Arc::new(HangingAuth {
        user: profile("ranger1", Role::ForestRanger),
        logout_calls: AtomicUsize::new(0),
    });
    let tokens = Arc::new(MemoryTokens::with_token("T"));
    let store = SessionStore::new(auth, tokens.clone());

    let mut reconcile = Box::pin(store.reconcile());
    assert!(reconcile.as_mut().now_or_never().is_none());
    assert!(store.snapshot().is_reconciling());

    let _ = store.sign_out().now_or_never();

    assert!(!store.snapshot().is_reconciling());
    assert_eq!(tokens.load(), None);
}

#[test]
fn sign_out_without_token_still_calls_endpoint() {
    let auth = Arc::new(StubAuth::new());
    let store = store_with(auth.clone(), Arc::new(MemoryTokens::default()));

    let _ = block_on(store.sign_out());

    assert_eq!(*auth.logout_tokens.lock().unwrap(), vec![None]);
}

// =============================================================
// reconcile
// =============================================================

#[test]
fn reconcile_without_token_stays_anonymous_without_error() {
    let auth = Arc::new(StubAuth::new());
    let store = store_with(auth.clone(), Arc::new(MemoryTokens::default()));

    block_on(store.reconcile());

    let session = store.snapshot();
    assert!(!session.is_signed_in());
    assert!(session.last_error.is_none());
    assert!(session.pending.is_none());
    assert!(auth.current_user_tokens.lock().unwrap().is_empty());
}

#[test]
fn reconcile_with_valid_token_restores_user() {
    let user = profile("ranger1", Role::ForestRanger);
    let auth = Arc::new(StubAuth::accepting(user.clone(), "T"));
    let store = store_with(auth.clone(), Arc::new(MemoryTokens::with_token("T")));

    block_on(store.reconcile());

    assert_eq!(store.snapshot().user, Some(user));
    assert_eq!(*auth.current_user_tokens.lock().unwrap(), vec!["T".to_owned()]);
}

#[test]
fn reconcile_with_rejected_token_discards_it_silently() {
    let tokens = Arc::new(MemoryTokens::with_token("stale"));
    let store = store_with(Arc::new(StubAuth::new()), tokens.clone());

    block_on(store.reconcile());

    let session = store.snapshot();
    assert!(!session.is_signed_in());
    assert!(session.last_error.is_none());
    assert_eq!(tokens.load(), None);
}

#[test]
fn reconcile_transport_failure_keeps_token_for_next_load() {
    let auth = Arc::new(StubAuth {
        current_user: Err(AuthError::Transport("offline".to_owned())),
        ..StubAuth::new()
    });
    let tokens = Arc::new(MemoryTokens::with_token("T"));
    let store = store_with(auth, tokens.clone());

    block_on(store.reconcile());

    assert!(store.snapshot().last_error.is_none());
    assert_eq!(tokens.load().as_deref(), Some("T"));
}

#[test]
fn reconcile_marks_session_as_reconciling_while_in_flight() {
    let user = profile("ranger1", Role::ForestRanger);
    let store = store_with(Arc::new(StubAuth::accepting(user, "T")), Arc::new(MemoryTokens::with_token("T")));
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    store.subscribe(move |s| sink.lock().unwrap().push(s.is_reconciling()));

    block_on(store.reconcile());

    assert_eq!(*seen.lock().unwrap(), vec![true, false]);
}

// =============================================================
// clear_error
// =============================================================

#[test]
fn clear_error_resets_last_error_without_calls() {
    let auth = Arc::new(StubAuth::new());
    let store = store_with(auth.clone(), Arc::new(MemoryTokens::default()));
    let _ = block_on(store.sign_in("ranger1", "wrong"));
    assert!(store.snapshot().last_error.is_some());

    store.clear_error();

    assert!(store.snapshot().last_error.is_none());
    assert_eq!(auth.login_calls.load(Ordering::SeqCst), 1);
}
