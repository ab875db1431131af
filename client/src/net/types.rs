//! Shared wire DTOs for the authentication API.
//!
//! DESIGN
//! ======
//! The server crate reuses these types for its responses so the client and
//! the development auth server cannot drift apart on field names.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Role assigned to an EcoGuard account.
///
/// Unknown role strings are kept verbatim so a newer server can introduce
/// roles without breaking older clients.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    ForestRanger,
    RegionalManager,
    SuperUser,
    Other(String),
}

impl Role {
    /// Wire identifier, e.g. `"forest_ranger"`.
    pub fn as_str(&self) -> &str {
        match self {
            Self::ForestRanger => "forest_ranger",
            Self::RegionalManager => "regional_manager",
            Self::SuperUser => "super_user",
            Self::Other(raw) => raw,
        }
    }

    /// Human-readable label shown in the navigation identity block.
    pub fn label(&self) -> String {
        match self {
            Self::ForestRanger => "Forest Ranger".to_owned(),
            Self::RegionalManager => "Regional Manager".to_owned(),
            Self::SuperUser => "Super User".to_owned(),
            Self::Other(raw) => raw.replace('_', " "),
        }
    }
}

impl From<String> for Role {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "forest_ranger" => Self::ForestRanger,
            "regional_manager" => Self::RegionalManager,
            "super_user" => Self::SuperUser,
            _ => Self::Other(raw),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Other(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Profile of the signed-in account as returned by the auth API.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Account identifier (the login username).
    pub id: String,
    /// Display name.
    pub name: String,
    pub role: Role,
    pub organization: String,
    pub region: String,
}

/// Username/password pair submitted to `POST /api/auth/login`.
///
/// Never persisted; the password is redacted from `Debug` output.
#[derive(Clone, Serialize)]
pub struct Credential {
    pub username: String,
    password: String,
}

impl Credential {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: username.into(), password: password.into() }
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Successful `POST /api/auth/login` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: UserProfile,
    /// Bearer token for subsequent authorized calls.
    pub token: String,
}

/// Successful `GET /api/auth/user` body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub user: UserProfile,
}

/// Error body returned with non-2xx auth responses.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self { error: Some(message.into()) }
    }
}
