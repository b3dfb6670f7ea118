// SPDX-License-Identifier: MIT

//! ridestats CLI and server entry point.

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use ridestats::cli::{Cli, Command};
use ridestats::config::Config;
use ridestats::error::AppError;
use ridestats::models::month::{MonthKey, ParseMonthKeyError};
use ridestats::models::stats::AggregateOptions;
use ridestats::render::chart::render_chart;
use ridestats::render::json::to_points;
use ridestats::services::{http_client, SessionProvider, WorkoutClient};
use ridestats::store::CredentialStore;
use ridestats::{AppState, DataSource};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();

    let cli = Cli::parse();

    let mut config = Config::from_env();
    if let Some(path) = &cli.snapshot {
        config.snapshot_path = Some(path.clone());
    }
    if let Some(path) = &cli.credentials {
        config.credentials_path = path.clone();
    }

    let options = aggregate_options(&cli)?;
    let state = Arc::new(build_state(&config, options)?);

    match cli.command {
        Command::Serve { port } => serve(state, port.unwrap_or(config.port)).await?,
        Command::Chart { out } => {
            let series = state.monthly_series().await?;
            std::fs::write(&out, render_chart(&series, state.options.track_top_five))?;
            tracing::info!(path = %out.display(), months = series.len(), "Chart written");
        }
        Command::Json => {
            let series = state.monthly_series().await?;
            let points = to_points(&series, state.options.track_top_five);
            println!("{}", serde_json::to_string_pretty(&points)?);
        }
    }

    Ok(())
}

/// Translate CLI flags into aggregation policy.
fn aggregate_options(cli: &Cli) -> Result<AggregateOptions, AppError> {
    let mut options = AggregateOptions {
        drop_last_if_current_month: !cli.keep_current_month,
        track_top_five: !cli.no_top_five,
        ..AggregateOptions::default()
    };
    for raw in &cli.anchor_months {
        let month: MonthKey = raw
            .parse()
            .map_err(|e: ParseMonthKeyError| AppError::BadRequest(e.to_string()))?;
        options.injected_empty_months.insert(month);
    }
    Ok(options)
}

fn build_state(config: &Config, options: AggregateOptions) -> Result<AppState, AppError> {
    let source = match &config.snapshot_path {
        Some(path) => {
            tracing::info!(path = %path.display(), "Using offline snapshot");
            DataSource::Snapshot(path.clone())
        }
        None => {
            let store = CredentialStore::load(&config.credentials_path)?;
            let http = http_client(config.http_timeout_secs)?;
            DataSource::Live {
                session: SessionProvider::new(http.clone(), &config.api_base_url, store),
                workouts: WorkoutClient::new(http, &config.api_base_url),
            }
        }
    };
    Ok(AppState { source, options })
}

async fn serve(state: Arc<AppState>, port: u16) -> Result<(), Box<dyn std::error::Error>> {
    let app = ridestats::routes::create_router(state);

    let addr = format!("0.0.0.0:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize logging, defaulting to info with debug for our own crate.
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("ridestats=debug".parse().unwrap())
                .add_directive("info".parse().unwrap()),
        )
        .init();
}
