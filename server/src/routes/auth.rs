//! Auth routes: credential login, bearer-token logout, and current user.
//!
//! Wire shapes come from `client::net::types` so the client and this server
//! agree on field names.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRef, FromRequestParts, State};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use client::net::types::{ErrorBody, LoginResponse, UserProfile, UserResponse};
use serde::Deserialize;

use crate::state::AppState;

const MISSING_FIELDS: &str = "Username and password required";
const INVALID_CREDENTIALS: &str = "Invalid credentials";
const INVALID_TOKEN: &str = "Missing or invalid authorization token";

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(ErrorBody::new(message))).into_response()
}

/// Token from an `Authorization: Bearer <token>` header.
pub(crate) fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

// =============================================================================
// AUTH EXTRACTOR
// =============================================================================

/// Signed-in user resolved from the bearer token.
/// Use as a handler parameter to require authentication.
pub struct BearerUser {
    pub user: UserProfile,
}

impl<S> FromRequestParts<S> for BearerUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let unauthorized = || error_response(StatusCode::UNAUTHORIZED, INVALID_TOKEN);
        let token = bearer_token(&parts.headers).ok_or_else(unauthorized)?;

        let app_state = AppState::from_ref(state);
        let username = app_state.sessions.resolve(token).await.ok_or_else(unauthorized)?;
        // The account may have vanished from a reloaded user file.
        let user = app_state.users.profile(&username).ok_or_else(unauthorized)?;

        Ok(Self { user })
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    username: String,
    #[serde(default)]
    password: String,
}

/// `POST /api/auth/login` — verify credentials and issue a session token.
///
/// A body that is not a JSON object gets the same 400 as missing fields, so
/// clients see a credential problem rather than a transport failure.
pub async fn login(State(state): State<AppState>, body: Result<Json<LoginRequest>, JsonRejection>) -> Response {
    let body = match body {
        Ok(Json(body)) => body,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "malformed login body");
            return error_response(StatusCode::BAD_REQUEST, MISSING_FIELDS);
        }
    };
    let username = body.username.trim();
    if username.is_empty() || body.password.is_empty() {
        return error_response(StatusCode::BAD_REQUEST, MISSING_FIELDS);
    }

    match state.users.verify(username, &body.password) {
        Ok(user) => {
            let token = state.sessions.issue(&user.id).await;
            let active_sessions = state.sessions.active_count().await;
            tracing::info!(user = %user.id, role = %user.role, active_sessions, "login succeeded");
            Json(LoginResponse { user, token }).into_response()
        }
        Err(e) => {
            tracing::info!(user = %username, reason = %e, "login rejected");
            error_response(StatusCode::UNAUTHORIZED, INVALID_CREDENTIALS)
        }
    }
}

/// `POST /api/auth/logout` — revoke the bearer token if one is sent.
///
/// Always succeeds; an unknown or missing token is already signed out.
pub async fn logout(State(state): State<AppState>, headers: HeaderMap) -> Response {
    if let Some(token) = bearer_token(&headers) {
        if state.sessions.revoke(token).await {
            tracing::info!("session revoked");
        }
    }
    Json(serde_json::json!({ "message": "Logged out successfully" })).into_response()
}

/// `GET /api/auth/user` — profile of the bearer token's owner.
pub async fn current_user(auth: BearerUser) -> Json<UserResponse> {
    tracing::debug!(user = %auth.user.id, "session resolved");
    Json(UserResponse { user: auth.user })
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
