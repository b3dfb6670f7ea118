// SPDX-License-Identifier: MIT

//! File-backed credential store.
//!
//! Credentials and the cached access token live together in one dotenv-format
//! file (`KEY=VALUE` lines). The login credentials are read-only; a token
//! refresh rewrites `ACCESS_TOKEN` and `ACCESS_TOKEN_EXPIRES_AT` and leaves
//! every other line in place.

use std::path::{Path, PathBuf};

use crate::error::AppError;

const KEY_LOCATION_ID: &str = "LOCATION_ID";
const KEY_EMAIL: &str = "EMAIL";
const KEY_PASSWORD: &str = "PASSWORD";
const KEY_ACCESS_TOKEN: &str = "ACCESS_TOKEN";
const KEY_EXPIRES_AT: &str = "ACCESS_TOKEN_EXPIRES_AT";

/// Everything needed to talk to the members API.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub location_id: String,
    pub email: String,
    pub password: String,
    /// Cached bearer token; may be stale or empty.
    pub access_token: String,
    /// Token expiry, epoch seconds. Zero when no token has been cached yet.
    pub access_token_expires_at: i64,
}

/// Durable key-value store for credentials and the cached token.
#[derive(Debug)]
pub struct CredentialStore {
    path: PathBuf,
    /// All key-value pairs from the file, in file order. Keys we do not own
    /// survive a rewrite untouched.
    entries: Vec<(String, String)>,
    creds: Credentials,
}

impl CredentialStore {
    /// Load and validate the credential file.
    ///
    /// `LOCATION_ID`, `EMAIL` and `PASSWORD` are required; a missing or
    /// unparseable token is treated as expired, not as an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref().to_path_buf();
        let mut entries = Vec::new();
        let iter = dotenvy::from_path_iter(&path)
            .map_err(|e| AppError::Store(format!("read {}: {}", path.display(), e)))?;
        for item in iter {
            let (key, value) =
                item.map_err(|e| AppError::Store(format!("parse {}: {}", path.display(), e)))?;
            entries.push((key, value));
        }

        let get = |key: &str| {
            entries
                .iter()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v.clone())
        };
        let require = |key: &str| {
            get(key).ok_or_else(|| {
                AppError::Store(format!("missing key {} in {}", key, path.display()))
            })
        };

        let creds = Credentials {
            location_id: require(KEY_LOCATION_ID)?,
            email: require(KEY_EMAIL)?,
            password: require(KEY_PASSWORD)?,
            access_token: get(KEY_ACCESS_TOKEN).unwrap_or_default(),
            access_token_expires_at: get(KEY_EXPIRES_AT)
                .and_then(|v| v.parse().ok())
                .unwrap_or(0),
        };

        Ok(Self {
            path,
            entries,
            creds,
        })
    }

    pub fn credentials(&self) -> &Credentials {
        &self.creds
    }

    /// Persist a refreshed token. One durable write per refresh, last writer
    /// wins.
    pub fn update_token(&mut self, access_token: &str, expires_at: i64) -> Result<(), AppError> {
        self.creds.access_token = access_token.to_string();
        self.creds.access_token_expires_at = expires_at;
        self.set_entry(KEY_ACCESS_TOKEN, access_token);
        self.set_entry(KEY_EXPIRES_AT, &expires_at.to_string());
        self.write()
    }

    fn set_entry(&mut self, key: &str, value: &str) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value.to_string(),
            None => self.entries.push((key.to_string(), value.to_string())),
        }
    }

    fn write(&self) -> Result<(), AppError> {
        let mut contents = String::new();
        for (key, value) in &self.entries {
            contents.push_str(key);
            contents.push('=');
            contents.push_str(value);
            contents.push('\n');
        }
        std::fs::write(&self.path, contents)
            .map_err(|e| AppError::Store(format!("write {}: {}", self.path.display(), e)))
    }
}
