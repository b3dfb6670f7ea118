// SPDX-License-Identifier: MIT

//! Offline snapshot mode: the fixture stands in for a live API response.

use std::path::PathBuf;

use ridestats::error::AppError;
use ridestats::services::workouts::records_from_snapshot;

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/workout_stats.json")
}

#[test]
fn test_snapshot_parses_all_records() {
    let records = records_from_snapshot(&fixture_path()).unwrap();

    assert_eq!(records.len(), 5);
    assert_eq!(records.iter().filter(|r| r.rank.is_none()).count(), 1);
}

#[test]
fn test_missing_snapshot_is_upstream_error() {
    let err = records_from_snapshot(&PathBuf::from("no/such/file.json")).unwrap_err();
    assert!(matches!(err, AppError::Upstream(_)));
}

#[test]
fn test_invalid_snapshot_is_upstream_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("snapshot.json");
    std::fs::write(&path, "{\"class_stats\": 42}").unwrap();

    let err = records_from_snapshot(&path).unwrap_err();
    assert!(matches!(err, AppError::Upstream(_)));
}
