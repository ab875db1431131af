//! Account directory and credential checks.
//!
//! DESIGN
//! ======
//! Passwords are stored as unsalted SHA-256 hex digests, matching the demo
//! account data this server stands in for. This is a development server;
//! do not point it at real credentials.

#[cfg(test)]
#[path = "users_test.rs"]
mod users_test;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use client::net::types::{Role, UserProfile};
use serde::Deserialize;
use sha2::{Digest, Sha256};

use super::session::bytes_to_hex;

/// SHA-256 of `"password"`, shared by all demo accounts.
const DEMO_PASSWORD_SHA256: &str = "5e884898da28047151d0e56f8dc6292773603d0d6aabbdd62a11ef721d1542d8";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserRecord {
    pub username: String,
    pub password_sha256: String,
    pub name: String,
    pub role: Role,
    pub organization: String,
    pub region: String,
}

impl UserRecord {
    #[must_use]
    pub fn profile(&self) -> UserProfile {
        UserProfile {
            id: self.username.clone(),
            name: self.name.clone(),
            role: self.role.clone(),
            organization: self.organization.clone(),
            region: self.region.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct UserFile {
    users: Vec<UserRecord>,
}

#[derive(Debug, thiserror::Error)]
pub enum UserFileError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: std::io::Error },
    #[error("failed to parse {}: {source}", path.display())]
    Parse { path: PathBuf, source: serde_yaml::Error },
    #[error("{} defines no users", path.display())]
    Empty { path: PathBuf },
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CredentialError {
    #[error("unknown user")]
    UnknownUser,
    #[error("wrong password")]
    WrongPassword,
}

#[must_use]
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    bytes_to_hex(&hasher.finalize())
}

/// Accounts allowed to sign in, keyed by username.
#[derive(Debug, Clone)]
pub struct UserDirectory {
    users: HashMap<String, UserRecord>,
}

impl UserDirectory {
    /// The three built-in demo accounts, all with password `password`.
    #[must_use]
    pub fn demo() -> Self {
        let demo = |username: &str, name: &str, role: Role, organization: &str, region: &str| UserRecord {
            username: username.to_owned(),
            password_sha256: DEMO_PASSWORD_SHA256.to_owned(),
            name: name.to_owned(),
            role,
            organization: organization.to_owned(),
            region: region.to_owned(),
        };
        Self::from_records(vec![
            demo("ranger1", "John Ranger", Role::ForestRanger, "Nairobi Conservation Team", "Nairobi"),
            demo("manager1", "Sarah Manager", Role::RegionalManager, "Central Kenya Forest Authority", "Central Kenya"),
            demo("admin", "System Administrator", Role::SuperUser, "EcoGuard Kenya", "All Regions"),
        ])
    }

    fn from_records(records: Vec<UserRecord>) -> Self {
        let users = records.into_iter().map(|r| (r.username.clone(), r)).collect();
        Self { users }
    }

    /// Parse a YAML document of the form `users: [{username, password_sha256, ...}]`.
    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        let file: UserFile = serde_yaml::from_str(text)?;
        Ok(Self::from_records(file.users))
    }

    /// Load a user file from disk. An empty list is rejected.
    pub fn load(path: &Path) -> Result<Self, UserFileError> {
        let text = std::fs::read_to_string(path).map_err(|source| UserFileError::Read { path: path.to_owned(), source })?;
        let directory = Self::from_yaml(&text).map_err(|source| UserFileError::Parse { path: path.to_owned(), source })?;
        if directory.users.is_empty() {
            return Err(UserFileError::Empty { path: path.to_owned() });
        }
        Ok(directory)
    }

    /// Check a username/password pair.
    pub fn verify(&self, username: &str, password: &str) -> Result<UserProfile, CredentialError> {
        let record = self.users.get(username).ok_or(CredentialError::UnknownUser)?;
        if !record.password_sha256.eq_ignore_ascii_case(&hash_password(password)) {
            return Err(CredentialError::WrongPassword);
        }
        Ok(record.profile())
    }

    #[must_use]
    pub fn profile(&self, username: &str) -> Option<UserProfile> {
        self.users.get(username).map(UserRecord::profile)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
