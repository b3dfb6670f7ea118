// SPDX-License-Identifier: MIT

//! Ride statistics routes.

use std::sync::Arc;

use axum::{
    extract::State,
    response::Html,
    routing::get,
    Json, Router,
};

use crate::error::Result;
use crate::render::chart::render_chart;
use crate::render::json::{to_points, MonthlyPoint};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(chart_page))
        .route("/api/rides/monthly", get(monthly_rides))
}

/// Ordered monthly series as a JSON array.
async fn monthly_rides(State(state): State<Arc<AppState>>) -> Result<Json<Vec<MonthlyPoint>>> {
    let series = state.monthly_series().await?;
    Ok(Json(to_points(&series, state.options.track_top_five)))
}

/// Dashboard page with the inline SVG chart.
async fn chart_page(State(state): State<Arc<AppState>>) -> Result<Html<String>> {
    let series = state.monthly_series().await?;
    Ok(Html(render_chart(&series, state.options.track_top_five)))
}
