// SPDX-License-Identifier: MIT

//! ridestats: monthly ride statistics for CycleBar workouts.
//!
//! Fetches a rider's class history from the members API (or a saved snapshot),
//! aggregates it into a gap-filled monthly series with running totals, and
//! renders the result as a chart page or a JSON API.

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod render;
pub mod routes;
pub mod services;
pub mod store;

use std::path::PathBuf;

use chrono::Utc;

use error::AppError;
use models::record::ClassRecord;
use models::stats::{aggregate_at, AggregateOptions, MonthlySeries};
use services::session::SessionProvider;
use services::workouts::{records_from_snapshot, WorkoutClient};

/// Where class records come from.
pub enum DataSource {
    /// Authenticated members-API fetch.
    Live {
        session: SessionProvider,
        workouts: WorkoutClient,
    },
    /// Saved workout-stats payload on disk.
    Snapshot(PathBuf),
}

/// Shared application state.
pub struct AppState {
    pub source: DataSource,
    pub options: AggregateOptions,
}

impl AppState {
    /// Run the whole pipeline: records, aggregation, current-month trim.
    pub async fn monthly_series(&self) -> Result<MonthlySeries, AppError> {
        let records = self.class_records().await?;
        Ok(aggregate_at(
            &records,
            &self.options,
            Utc::now().date_naive(),
        ))
    }

    async fn class_records(&self) -> Result<Vec<ClassRecord>, AppError> {
        match &self.source {
            DataSource::Live { session, workouts } => {
                let token = session.get_access_token().await?;
                workouts.fetch_records(&token).await
            }
            DataSource::Snapshot(path) => records_from_snapshot(path),
        }
    }
}
