// SPDX-License-Identifier: MIT

//! Workout history retrieval from the members API.

use std::path::Path;

use crate::error::AppError;
use crate::models::record::{ClassRecord, WorkoutStatsResponse};

/// Thin client for the workout-stats endpoint.
#[derive(Clone)]
pub struct WorkoutClient {
    http: reqwest::Client,
    base_url: String,
}

impl WorkoutClient {
    pub fn new(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    /// Fetch the rider's full class history.
    ///
    /// One authenticated request, no retry, no pagination: the upstream
    /// returns the complete history in a single response.
    pub async fn fetch_records(&self, access_token: &str) -> Result<Vec<ClassRecord>, AppError> {
        let url = format!("{}/workout_stats", self.base_url);
        let response = self
            .http
            .get(&url)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AppError::Upstream(format!("workout stats request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Upstream(format!("HTTP {status}: {body}")));
        }

        let payload: WorkoutStatsResponse = response
            .json()
            .await
            .map_err(|e| AppError::Upstream(format!("JSON parse error: {e}")))?;

        let records = payload.into_records()?;
        tracing::debug!(count = records.len(), "Fetched class records");
        Ok(records)
    }
}

/// Offline variant: parse a saved workout-stats response from disk.
///
/// Useful for exercising the aggregation pipeline without live credentials.
pub fn records_from_snapshot(path: &Path) -> Result<Vec<ClassRecord>, AppError> {
    let bytes = std::fs::read(path)
        .map_err(|e| AppError::Upstream(format!("read snapshot {}: {e}", path.display())))?;
    let payload: WorkoutStatsResponse = serde_json::from_slice(&bytes)
        .map_err(|e| AppError::Upstream(format!("parse snapshot {}: {e}", path.display())))?;
    payload.into_records()
}
