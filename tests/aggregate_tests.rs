// SPDX-License-Identifier: MIT

use ridestats::models::month::MonthKey;
use ridestats::models::record::ClassRecord;
use ridestats::models::stats::{aggregate, AggregateOptions};

fn record(date: &str, rank: Option<i64>) -> ClassRecord {
    ClassRecord {
        date: date.parse().unwrap(),
        rank,
    }
}

fn month(s: &str) -> MonthKey {
    s.parse().unwrap()
}

fn sample_records() -> Vec<ClassRecord> {
    vec![
        record("2022-01-10", Some(1)),
        record("2021-12-15", Some(9)),
        record("2021-11-05", Some(3)),
        record("2021-11-20", Some(8)),
        record("2022-01-28", None),
        record("2022-03-02", Some(5)),
    ]
}

#[test]
fn test_aggregation_is_order_invariant() {
    let options = AggregateOptions::default();
    let records = sample_records();

    let expected = aggregate(&records, &options);

    let mut reversed = records.clone();
    reversed.reverse();
    assert_eq!(aggregate(&reversed, &options), expected);

    let mut rotated = records.clone();
    rotated.rotate_left(3);
    assert_eq!(aggregate(&rotated, &options), expected);
}

#[test]
fn test_running_totals_are_prefix_sums() {
    let series = aggregate(&sample_records(), &AggregateOptions::default());

    let mut rides = 0u64;
    let mut top_five = 0u64;
    for entry in series.entries() {
        rides += u64::from(entry.rides);
        top_five += u64::from(entry.top_five);
        assert_eq!(entry.total_rides, rides);
        assert_eq!(entry.total_top_five, top_five);
    }

    // Non-decreasing by construction of the prefix sum.
    let totals: Vec<u64> = series.entries().iter().map(|e| e.total_rides).collect();
    assert!(totals.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[test]
fn test_months_order_across_year_boundary() {
    let records = vec![record("2022-01-10", None), record("2021-12-15", None)];
    let series = aggregate(&records, &AggregateOptions::default());

    let months: Vec<MonthKey> = series.entries().iter().map(|e| e.month).collect();
    assert_eq!(months, vec![month("12/2021"), month("01/2022")]);
}

#[test]
fn test_every_record_month_appears_exactly_once() {
    let series = aggregate(&sample_records(), &AggregateOptions::default());
    let months: Vec<MonthKey> = series.entries().iter().map(|e| e.month).collect();

    assert_eq!(
        months,
        vec![
            month("11/2021"),
            month("12/2021"),
            month("01/2022"),
            month("03/2022"),
        ]
    );
}

#[test]
fn test_two_month_scenario() {
    let records = vec![
        record("2021-11-05", Some(3)),
        record("2021-11-20", Some(8)),
        record("2021-12-02", None),
    ];
    let series = aggregate(&records, &AggregateOptions::default());
    let entries = series.entries();

    assert_eq!(entries.len(), 2);

    assert_eq!(entries[0].month, month("11/2021"));
    assert_eq!(entries[0].rides, 2);
    assert_eq!(entries[0].total_rides, 2);
    assert_eq!(entries[0].top_five, 1);
    assert_eq!(entries[0].total_top_five, 1);

    assert_eq!(entries[1].month, month("12/2021"));
    assert_eq!(entries[1].rides, 1);
    assert_eq!(entries[1].total_rides, 3);
    assert_eq!(entries[1].top_five, 0);
    assert_eq!(entries[1].total_top_five, 1);
}

#[test]
fn test_empty_input_with_injected_months() {
    let mut options = AggregateOptions::default();
    options.injected_empty_months.insert(month("11/2021"));
    options.injected_empty_months.insert(month("12/2021"));

    let series = aggregate(&[], &options);
    let entries = series.entries();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].month, month("11/2021"));
    assert_eq!(entries[1].month, month("12/2021"));
    for entry in entries {
        assert_eq!(entry.rides, 0);
        assert_eq!(entry.top_five, 0);
        assert_eq!(entry.total_rides, 0);
        assert_eq!(entry.total_top_five, 0);
    }
}

#[test]
fn test_injected_months_sit_in_chronological_position() {
    let mut options = AggregateOptions::default();
    options.injected_empty_months.insert(month("12/2021"));

    let records = vec![record("2021-11-05", None), record("2022-01-10", None)];
    let series = aggregate(&records, &options);

    let months: Vec<MonthKey> = series.entries().iter().map(|e| e.month).collect();
    assert_eq!(
        months,
        vec![month("11/2021"), month("12/2021"), month("01/2022")]
    );
    assert_eq!(series.entries()[1].rides, 0);
    // The gap month leaves the running total flat.
    assert_eq!(series.entries()[1].total_rides, 1);
    assert_eq!(series.entries()[2].total_rides, 2);
}

#[test]
fn test_null_rank_never_counts_as_top_five() {
    // Rank 0 is an odd upstream value but still a present rank below the
    // cutoff; absence is the only "unranked" signal.
    let records = vec![record("2022-05-01", None), record("2022-05-02", Some(0))];
    let series = aggregate(&records, &AggregateOptions::default());

    assert_eq!(series.entries()[0].rides, 2);
    assert_eq!(series.entries()[0].top_five, 1);
}
