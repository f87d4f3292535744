//! Unified application error type.
//! All modules (db, core, cli, server) return AppError to keep the error
//! handling consistent and easy to manage.

use chrono::NaiveDate;
use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Disruption #{0} not found")]
    NotFound(i64),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0} (expected HH:MM)")]
    InvalidTime(String),

    #[error("Invalid widget setting: {0}")]
    InvalidSetting(String),

    // ---------------------------
    // Validation errors
    // ---------------------------
    #[error("Please provide a reason for the disruption")]
    MissingReason,

    #[error("Please provide both start and end times")]
    MissingTimes,

    #[error("Please enter a valid refund amount")]
    InvalidRefund,

    #[error("End date {end} must not be before start date {start}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    #[error("A disruption already exists on {0} that overlaps this time range")]
    Conflict(NaiveDate),

    /// A multi-day submission stopped half-way; earlier days stay persisted.
    #[error(
        "Created {} of the requested days before failing on {failed_on}: {source}",
        created.len()
    )]
    PartialCreate {
        created: Vec<NaiveDate>,
        failed_on: NaiveDate,
        #[source]
        source: Box<AppError>,
    },

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Export / serialization
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Server
    // ---------------------------
    #[error("Server error: {0}")]
    Server(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
