// SPDX-License-Identifier: MIT

//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

/// Members API base URL. Override with `API_BASE_URL` (tests point it at a
/// local mock).
pub const DEFAULT_API_BASE_URL: &str = "https://members.cyclebar.com/api";

/// Timeout applied to every upstream call, in seconds.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Application configuration, loaded once at startup. No process-wide globals:
/// everything downstream receives this by value.
#[derive(Debug, Clone)]
pub struct Config {
    /// Members API base URL
    pub api_base_url: String,
    /// Dotenv-format credential file
    pub credentials_path: PathBuf,
    /// Saved workout-stats payload to read instead of the network
    pub snapshot_path: Option<PathBuf>,
    /// Server port
    pub port: u16,
    /// Upstream HTTP timeout, seconds
    pub http_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            credentials_path: PathBuf::from(".env"),
            snapshot_path: None,
            port: 8080,
            http_timeout_secs: DEFAULT_HTTP_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok(); // Load .env file if present

        Self {
            api_base_url: env::var("API_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
            credentials_path: env::var("CREDENTIALS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".env")),
            snapshot_path: env::var("SNAPSHOT_PATH").ok().map(PathBuf::from),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            http_timeout_secs: env::var("HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS),
        }
    }
}
