// SPDX-License-Identifier: MIT

//! Command-line interface definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "ridestats", version, about = "Monthly ride statistics for CycleBar workouts")]
pub struct Cli {
    /// Read the workout-stats payload from a saved JSON file instead of the API
    #[arg(long, global = true, value_name = "PATH")]
    pub snapshot: Option<PathBuf>,

    /// Credential file, dotenv format (default: CREDENTIALS_PATH or .env)
    #[arg(long, global = true, value_name = "PATH")]
    pub credentials: Option<PathBuf>,

    /// Keep the in-progress current month instead of trimming it
    #[arg(long, global = true)]
    pub keep_current_month: bool,

    /// Skip top-five placement tracking
    #[arg(long, global = true)]
    pub no_top_five: bool,

    /// Month (MM/YYYY) to show on the timeline even with no rides; repeatable
    #[arg(
        long = "anchor-month",
        global = true,
        value_name = "MM/YYYY",
        default_values = ["11/2021", "12/2021"]
    )]
    pub anchor_months: Vec<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Serve the chart page and JSON API over HTTP
    Serve {
        /// Listen port (overrides PORT)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Write the chart as a self-contained HTML file
    Chart {
        /// Output path
        #[arg(long, default_value = "rides.html")]
        out: PathBuf,
    },
    /// Print the monthly series as a JSON array
    Json,
}
