// SPDX-License-Identifier: MIT

//! Services module - upstream API clients.

pub mod session;
pub mod workouts;

pub use session::SessionProvider;
pub use workouts::WorkoutClient;

use std::time::Duration;

use crate::error::AppError;

/// Build the shared HTTP client with the configured timeout.
///
/// The same client backs both the login and workout-stats calls, so one
/// timeout covers every upstream request.
pub fn http_client(timeout_secs: u64) -> Result<reqwest::Client, AppError> {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .map_err(|e| AppError::Internal(anyhow::anyhow!("failed to build HTTP client: {e}")))
}
