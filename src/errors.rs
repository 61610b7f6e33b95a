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
    // Ingestion errors
    // ---------------------------
    #[error("Invalid punch line {line}: {reason}")]
    Validation { line: usize, reason: String },

    #[error("No valid punch dates found in input file")]
    EmptyInput,

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid person id: {0}")]
    InvalidPersonId(String),

    #[error("Invalid reason code: {0}")]
    InvalidReason(String),

    // ---------------------------
    // Logic errors
    // ---------------------------
    #[error("No sessions found for id {0}")]
    NoSessionsForPerson(String),

    #[error("Session {0} not found")]
    SessionNotFound(i64),

    #[error("{0} event(s) still missing a reason; classify all events before this operation")]
    IncompleteClassification(usize),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
