//! Unified application error type.
//! All modules (db, core, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.

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

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format (expected DD.MM.YYYY): {0}")]
    InvalidDate(String),

    #[error("Invalid time format (expected HH:MM or HH:MM:SS): {0}")]
    InvalidTime(String),

    #[error("Invalid month key (expected MM.YYYY): {0}")]
    InvalidMonth(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("No action found with id {0}")]
    UnknownAction(i64),

    #[error("No staff member with login {0}")]
    UnknownStaff(String),

    #[error("Staff login already registered: {0}")]
    DuplicateStaff(String),

    #[error("Action {0} is scheduled for {1} and has not taken place yet")]
    NotPastYet(i64, String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Import / export errors
    // ---------------------------
    #[error("Import error: {0}")]
    Import(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
