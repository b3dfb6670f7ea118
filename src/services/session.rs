// SPDX-License-Identifier: MIT

//! Access-token lifecycle for the members API.
//!
//! Handles:
//! - Returning the cached token while it is still valid (no I/O)
//! - Logging in again when it has expired
//! - Persisting the refreshed token back to the credential store

use std::sync::Arc;

use chrono::Utc;
use serde::Deserialize;
use tokio::sync::Mutex;

use crate::error::AppError;
use crate::store::CredentialStore;

/// Login response wire shape: the token rides inside a `user` object. Both
/// fields are optional so a malformed response surfaces as our own error
/// rather than a deserialization failure.
#[derive(Debug, Deserialize)]
struct SessionResponse {
    user: SessionUser,
}

#[derive(Debug, Deserialize)]
struct SessionUser {
    access_token: Option<String>,
    access_token_expires_at: Option<i64>,
}

/// Provides a valid access token, refreshing and persisting when expired.
///
/// The store sits behind a mutex: when the server handles concurrent requests,
/// only one of them performs the login exchange and the durable write.
#[derive(Clone)]
pub struct SessionProvider {
    http: reqwest::Client,
    base_url: String,
    store: Arc<Mutex<CredentialStore>>,
}

impl SessionProvider {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>, store: CredentialStore) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Get a valid access token, refreshing it when expired.
    pub async fn get_access_token(&self) -> Result<String, AppError> {
        self.get_access_token_at(Utc::now().timestamp()).await
    }

    /// Clock-injected variant of [`get_access_token`](Self::get_access_token).
    ///
    /// Cache hit (`now` before expiry) returns without any network call or
    /// store write. Otherwise: one login exchange, one durable write.
    pub async fn get_access_token_at(&self, now: i64) -> Result<String, AppError> {
        let mut store = self.store.lock().await;

        let (location_id, email, password) = {
            let creds = store.credentials();
            if now < creds.access_token_expires_at {
                return Ok(creds.access_token.clone());
            }
            (
                creds.location_id.clone(),
                creds.email.clone(),
                creds.password.clone(),
            )
        };

        tracing::info!("Access token expired, logging in again");

        let payload = serde_json::json!({
            "location_id": location_id,
            "email": email,
            "password": password,
        });

        let response = self
            .http
            .post(format!("{}/sessions", self.base_url))
            .json(&payload)
            .send()
            .await
            .map_err(|e| AppError::Auth(format!("login request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            return Err(AppError::Auth(format!("login rejected with HTTP {status}")));
        }

        let body: SessionResponse = response
            .json()
            .await
            .map_err(|e| AppError::Auth(format!("malformed login response: {e}")))?;

        let token = body
            .user
            .access_token
            .ok_or_else(|| AppError::Auth("login response missing user.access_token".to_string()))?;
        let expires_at = body.user.access_token_expires_at.ok_or_else(|| {
            AppError::Auth("login response missing user.access_token_expires_at".to_string())
        })?;

        store.update_token(&token, expires_at)?;
        tracing::info!(expires_at, "Access token refreshed and persisted");

        Ok(token)
    }
}
