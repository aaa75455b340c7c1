//! Unified application error type.
//! Every module (store, core, db, cli) returns AppError so the command
//! handlers can report failures in one consistent way.

use crate::store::StoreError;
use std::io;
use thiserror::Error;

/// Why the current week column could not be determined.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolutionError {
    #[error("month '{0}' not found in the month header row")]
    MonthNotFound(String),

    #[error("no week on or after day {day} follows the '{month}' column")]
    NoWeekOnOrAfter { month: String, day: u32 },
}

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Audit database
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Roster store
    // ---------------------------
    #[error("Roster store error: {0}")]
    RemoteStore(#[from] StoreError),

    // ---------------------------
    // Roster logic
    // ---------------------------
    #[error("Cannot determine current week column: {0}")]
    Resolution(#[from] ResolutionError),

    #[error("Roster layout error: {0}")]
    Structure(String),

    #[error("Callsign {0} is not on the roster")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// Errors after which no week-dependent operation may continue.
    pub fn is_fatal(&self) -> bool {
        matches!(self, AppError::Resolution(_) | AppError::Structure(_))
    }
}

pub type AppResult<T> = Result<T, AppError>;
