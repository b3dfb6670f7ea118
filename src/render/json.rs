// SPDX-License-Identifier: MIT

//! JSON rendering of the monthly series.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::stats::MonthlySeries;

/// One month of the series, shaped for HTTP consumption.
#[derive(Debug, Clone, Serialize)]
pub struct MonthlyPoint {
    /// First day of the month, ISO 8601.
    pub month: NaiveDate,
    pub rides: u32,
    pub total_rides: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_five: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_top_five: Option<u64>,
}

/// Serialize the series as an ordered array of points.
pub fn to_points(series: &MonthlySeries, include_top_five: bool) -> Vec<MonthlyPoint> {
    series
        .entries()
        .iter()
        .map(|entry| MonthlyPoint {
            month: entry.month.first_day(),
            rides: entry.rides,
            total_rides: entry.total_rides,
            top_five: include_top_five.then_some(entry.top_five),
            total_top_five: include_top_five.then_some(entry.total_top_five),
        })
        .collect()
}
