// SPDX-License-Identifier: MIT

//! Raw class records from the workout-stats payload.

use chrono::NaiveDate;
use serde::Deserialize;

use crate::error::AppError;

/// One class taken by the rider, as extracted from the upstream payload.
///
/// Read-only input to the aggregator; never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassRecord {
    /// Calendar date of the class.
    pub date: NaiveDate,
    /// Leaderboard placement, `None` when the rider was not ranked.
    pub rank: Option<i64>,
}

/// Wire shape of `GET /workout_stats`.
#[derive(Debug, Deserialize)]
pub struct WorkoutStatsResponse {
    pub class_stats: Vec<RawClassStat>,
}

/// One entry of `class_stats`, with only the fields we read. Unknown fields
/// (class name, instructor, calories, ...) are ignored.
#[derive(Debug, Deserialize)]
pub struct RawClassStat {
    pub schedule_entry: ScheduleEntry,
    #[serde(default)]
    pub rank: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub struct ScheduleEntry {
    /// `YYYY-MM-DD`
    pub date: String,
}

impl WorkoutStatsResponse {
    /// Convert the wire payload into class records.
    ///
    /// A record whose date does not parse is a fatal error: skipping it
    /// silently would leave a month undercounted with no trace.
    pub fn into_records(self) -> Result<Vec<ClassRecord>, AppError> {
        self.class_stats.into_iter().map(ClassRecord::try_from).collect()
    }
}

impl TryFrom<RawClassStat> for ClassRecord {
    type Error = AppError;

    fn try_from(raw: RawClassStat) -> Result<Self, AppError> {
        let date = NaiveDate::parse_from_str(&raw.schedule_entry.date, "%Y-%m-%d").map_err(|e| {
            AppError::MalformedRecord(format!(
                "bad schedule_entry.date {:?}: {}",
                raw.schedule_entry.date, e
            ))
        })?;
        Ok(ClassRecord {
            date,
            rank: raw.rank,
        })
    }
}
