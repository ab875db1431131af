//! REST authenticator for the `/api/auth/*` endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): every call fails with [`AuthError::Unavailable`] since
//! these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures are split into credential rejections (the server answered and
//! said no) and transport failures (no usable answer). The session store
//! turns both into user-facing messages via [`AuthError::user_message`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use async_trait::async_trait;

use super::types::{Credential, LoginResponse, UserProfile};
#[cfg(feature = "hydrate")]
use super::types::{ErrorBody, UserResponse};

pub const API_BASE: &str = "/api";

const LOGIN_PATH: &str = "/auth/login";
const LOGOUT_PATH: &str = "/auth/logout";
const CURRENT_USER_PATH: &str = "/auth/user";

pub const REJECTED_MESSAGE: &str = "Invalid username or password";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";

/// Failure talking to the authentication collaborator.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// The server answered and refused the credential or token.
    #[error("rejected: {0}")]
    Rejected(String),
    /// The request failed or the response could not be understood.
    #[error("transport failure: {0}")]
    Transport(String),
    /// No HTTP client exists in this build (server-side rendering).
    #[error("auth endpoints are not reachable from the server")]
    Unavailable,
}

impl AuthError {
    /// Message suitable for showing next to the login form.
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected(reason) => reason.clone(),
            Self::Transport(_) | Self::Unavailable => NETWORK_ERROR_MESSAGE.to_owned(),
        }
    }
}

/// Seam over the external authentication collaborator.
///
/// Futures are `?Send` because browser fetch futures are not `Send`.
#[async_trait(?Send)]
pub trait Authenticator: Send + Sync {
    /// `POST /api/auth/login`.
    async fn login(&self, credential: &Credential) -> Result<LoginResponse, AuthError>;

    /// `POST /api/auth/logout`, bearer-authorized when a token is known.
    async fn logout(&self, token: Option<&str>) -> Result<(), AuthError>;

    /// `GET /api/auth/user` for the given bearer token.
    async fn current_user(&self, token: &str) -> Result<UserProfile, AuthError>;
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// Map a non-2xx status to an [`AuthError`].
///
/// Client errors (400/401/403) are credential rejections and carry the
/// server's `error` text when present; anything else is a transport failure.
#[cfg(any(test, feature = "hydrate"))]
fn classify_failure(status: u16, server_error: Option<String>) -> AuthError {
    match status {
        400 | 401 | 403 => AuthError::Rejected(
            server_error
                .filter(|message| !message.trim().is_empty())
                .unwrap_or_else(|| REJECTED_MESSAGE.to_owned()),
        ),
        _ => AuthError::Transport(format!("unexpected status {status}")),
    }
}

/// [`Authenticator`] backed by the REST endpoints under [`API_BASE`].
#[derive(Clone, Debug)]
pub struct HttpAuthenticator {
    base: String,
}

impl Default for HttpAuthenticator {
    fn default() -> Self {
        Self::new(API_BASE)
    }
}

impl HttpAuthenticator {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.base.trim_end_matches('/'))
    }
}

#[cfg(feature = "hydrate")]
fn transport(err: impl std::fmt::Display) -> AuthError {
    AuthError::Transport(err.to_string())
}

#[cfg(feature = "hydrate")]
async fn failure_from(resp: gloo_net::http::Response) -> AuthError {
    let body = resp.json::<ErrorBody>().await.ok().unwrap_or_default();
    classify_failure(resp.status(), body.error)
}

#[async_trait(?Send)]
impl Authenticator for HttpAuthenticator {
    async fn login(&self, credential: &Credential) -> Result<LoginResponse, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::post(&self.endpoint(LOGIN_PATH))
                .json(credential)
                .map_err(transport)?
                .send()
                .await
                .map_err(transport)?;
            if !resp.ok() {
                return Err(failure_from(resp).await);
            }
            resp.json::<LoginResponse>().await.map_err(transport)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (credential, self.endpoint(LOGIN_PATH));
            Err(AuthError::Unavailable)
        }
    }

    async fn logout(&self, token: Option<&str>) -> Result<(), AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let mut req = gloo_net::http::Request::post(&self.endpoint(LOGOUT_PATH));
            if let Some(token) = token {
                req = req.header("Authorization", &bearer_header(token));
            }
            let resp = req.send().await.map_err(transport)?;
            if !resp.ok() {
                return Err(failure_from(resp).await);
            }
            Ok(())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, self.endpoint(LOGOUT_PATH));
            Err(AuthError::Unavailable)
        }
    }

    async fn current_user(&self, token: &str) -> Result<UserProfile, AuthError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(&self.endpoint(CURRENT_USER_PATH))
                .header("Authorization", &bearer_header(token))
                .send()
                .await
                .map_err(transport)?;
            if !resp.ok() {
                return Err(failure_from(resp).await);
            }
            let body: UserResponse = resp.json().await.map_err(transport)?;
            Ok(body.user)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (token, self.endpoint(CURRENT_USER_PATH));
            Err(AuthError::Unavailable)
        }
    }
}
