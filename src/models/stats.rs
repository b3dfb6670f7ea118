// SPDX-License-Identifier: MIT

//! Monthly ride aggregation.
//!
//! The one non-trivial piece of the system: bucket class records by calendar
//! month, merge in known gap months, walk the months in chronological order,
//! and accumulate running totals.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveDate;

use crate::models::month::MonthKey;
use crate::models::record::ClassRecord;

/// Highest leaderboard placement that still counts as a "top five" finish.
///
/// The studio UI surfaces the top 5 placements per class, hence the cutoff.
pub const TOP_FIVE_MAX_RANK: i64 = 5;

/// Per-month counters accumulated during one aggregation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MonthBucket {
    pub rides: u32,
    pub top_five: u32,
}

/// Month-to-bucket mapping with ordered iteration.
///
/// `BTreeMap` iterates in the year-major order of `MonthKey`, so the final
/// walk needs no separate sort step.
#[derive(Debug, Default)]
struct MonthlyTally {
    buckets: BTreeMap<MonthKey, MonthBucket>,
}

impl MonthlyTally {
    /// Get-or-insert-zero for one month.
    fn bucket_mut(&mut self, month: MonthKey) -> &mut MonthBucket {
        self.buckets.entry(month).or_default()
    }

    /// Put `month` on the timeline with a zero bucket unless real data is
    /// already there. Injection never overwrites.
    fn fill_gap(&mut self, month: MonthKey) {
        self.buckets.entry(month).or_default();
    }
}

/// Aggregation policy switches.
#[derive(Debug, Clone)]
pub struct AggregateOptions {
    /// Months shown on the timeline even with no classes, e.g. the months
    /// before the rider's first class that anchor the chart's start.
    pub injected_empty_months: BTreeSet<MonthKey>,
    /// Count top-five finishes alongside rides.
    pub track_top_five: bool,
    /// Trim the final entry when it is the in-progress current month.
    pub drop_last_if_current_month: bool,
    /// Placement cutoff for a top-five finish.
    pub top_five_max_rank: i64,
}

impl Default for AggregateOptions {
    fn default() -> Self {
        Self {
            injected_empty_months: BTreeSet::new(),
            track_top_five: true,
            drop_last_if_current_month: false,
            top_five_max_rank: TOP_FIVE_MAX_RANK,
        }
    }
}

/// One row of the aggregated series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthlyEntry {
    pub month: MonthKey,
    pub rides: u32,
    pub top_five: u32,
    pub total_rides: u64,
    pub total_top_five: u64,
}

/// Ascending, gap-filled, running-total series. The aggregator's sole output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MonthlySeries {
    entries: Vec<MonthlyEntry>,
}

impl MonthlySeries {
    pub fn entries(&self) -> &[MonthlyEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop the final entry iff it covers `today`.
    ///
    /// An in-progress month shows a partial count that reads as a dip at the
    /// end of every chart; callers that want it anyway skip this step.
    pub fn drop_last_if_current_month(&mut self, today: NaiveDate) {
        let current = MonthKey::from_date(today);
        if self.entries.last().map(|entry| entry.month) == Some(current) {
            self.entries.pop();
        }
    }
}

/// Aggregate raw class records into an ordered monthly series.
///
/// Pure function of its inputs: no clock reads, no I/O. The current-month trim
/// is a separate step applied by [`aggregate_at`].
pub fn aggregate(records: &[ClassRecord], options: &AggregateOptions) -> MonthlySeries {
    let mut tally = MonthlyTally::default();

    for record in records {
        let bucket = tally.bucket_mut(MonthKey::from_date(record.date));
        bucket.rides += 1;
        if options.track_top_five {
            // Presence is the signal: an absent rank means unranked, whatever
            // the placement would have been.
            if let Some(rank) = record.rank {
                if rank <= options.top_five_max_rank {
                    bucket.top_five += 1;
                }
            }
        }
    }

    for &month in &options.injected_empty_months {
        tally.fill_gap(month);
    }

    let mut entries = Vec::with_capacity(tally.buckets.len());
    let mut total_rides = 0u64;
    let mut total_top_five = 0u64;
    for (month, bucket) in tally.buckets {
        total_rides += u64::from(bucket.rides);
        total_top_five += u64::from(bucket.top_five);
        entries.push(MonthlyEntry {
            month,
            rides: bucket.rides,
            top_five: bucket.top_five,
            total_rides,
            total_top_five,
        });
    }

    MonthlySeries { entries }
}

/// Aggregate and apply the configured current-month trim as of `today`.
pub fn aggregate_at(
    records: &[ClassRecord],
    options: &AggregateOptions,
    today: NaiveDate,
) -> MonthlySeries {
    let mut series = aggregate(records, options);
    if options.drop_last_if_current_month {
        series.drop_last_if_current_month(today);
    }
    series
}
