// SPDX-License-Identifier: MIT

//! Workout fetcher tests against an in-process mock of the members API.

use std::sync::{Arc, Mutex};

use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::get;
use axum::Router;
use chrono::NaiveDate;

use ridestats::error::AppError;
use ridestats::services::WorkoutClient;

#[derive(Clone)]
struct MockStats {
    status: StatusCode,
    body: String,
    seen_auth: Arc<Mutex<Option<String>>>,
}

async fn workout_stats_handler(
    State(mock): State<MockStats>,
    headers: HeaderMap,
) -> (StatusCode, String) {
    let auth = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(String::from);
    *mock.seen_auth.lock().unwrap() = auth;
    (mock.status, mock.body)
}

async fn spawn_mock(mock: MockStats) -> String {
    let app = Router::new()
        .route("/api/workout_stats", get(workout_stats_handler))
        .with_state(mock);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}/api")
}

#[tokio::test]
async fn test_fetch_sends_bearer_token_and_parses_records() {
    let seen_auth = Arc::new(Mutex::new(None));
    let base_url = spawn_mock(MockStats {
        status: StatusCode::OK,
        body: r#"{
            "class_stats": [
                {"schedule_entry": {"date": "2021-12-15"}, "rank": 2},
                {"schedule_entry": {"date": "2022-01-10"}, "rank": null}
            ]
        }"#
        .to_string(),
        seen_auth: seen_auth.clone(),
    })
    .await;

    let client = WorkoutClient::new(reqwest::Client::new(), base_url);
    let records = client.fetch_records("tok-123").await.unwrap();

    assert_eq!(
        seen_auth.lock().unwrap().as_deref(),
        Some("Bearer tok-123")
    );
    assert_eq!(records.len(), 2);
    assert_eq!(
        records[0].date,
        NaiveDate::from_ymd_opt(2021, 12, 15).unwrap()
    );
    assert_eq!(records[0].rank, Some(2));
    assert_eq!(records[1].rank, None);
}

#[tokio::test]
async fn test_non_success_status_is_upstream_error() {
    let base_url = spawn_mock(MockStats {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        body: "boom".to_string(),
        seen_auth: Arc::new(Mutex::new(None)),
    })
    .await;

    let client = WorkoutClient::new(reqwest::Client::new(), base_url);
    let err = client.fetch_records("tok").await.unwrap_err();
    assert!(matches!(err, AppError::Upstream(_)));
}

#[tokio::test]
async fn test_unparseable_body_is_upstream_error() {
    let base_url = spawn_mock(MockStats {
        status: StatusCode::OK,
        body: "not json".to_string(),
        seen_auth: Arc::new(Mutex::new(None)),
    })
    .await;

    let client = WorkoutClient::new(reqwest::Client::new(), base_url);
    let err = client.fetch_records("tok").await.unwrap_err();
    assert!(matches!(err, AppError::Upstream(_)));
}

#[tokio::test]
async fn test_bad_record_date_is_malformed_record() {
    let base_url = spawn_mock(MockStats {
        status: StatusCode::OK,
        body: r#"{"class_stats": [{"schedule_entry": {"date": "12/15/2021"}, "rank": 1}]}"#
            .to_string(),
        seen_auth: Arc::new(Mutex::new(None)),
    })
    .await;

    let client = WorkoutClient::new(reqwest::Client::new(), base_url);
    let err = client.fetch_records("tok").await.unwrap_err();
    assert!(matches!(err, AppError::MalformedRecord(_)));
}
