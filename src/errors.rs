//! Unified application error type.
//! All modules (db, core, shell, cli) return AppError to keep the error
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

    #[error("Database migration error: {0}")]
    Migration(String),

    // ---------------------------
    // Catalog errors
    // ---------------------------
    #[error("Duplicate name: {0}")]
    DuplicateName(String),

    #[error("Invalid metric definition: {0}")]
    InvalidDefinition(String),

    #[error("Not found: {0}")]
    NotFound(String),

    // ---------------------------
    // Session errors
    // ---------------------------
    #[error("Not logged in")]
    NotLoggedIn,

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid numeric input: {0}")]
    InvalidInput(String),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
