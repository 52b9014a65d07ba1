//! Unified application error type.
//! All modules (db, storage, core, auth, cli) return AppError to keep the
//! error handling consistent and easy to manage.

use crate::forms::ValidationErrors;
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
    // Storage / serialization
    // ---------------------------
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // ---------------------------
    // Form / logic errors
    // ---------------------------
    #[error("Invalid input:\n{0}")]
    Validation(ValidationErrors),

    #[error("No record at row {0}")]
    InvalidIndex(usize),

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

    // ---------------------------
    // Identity delegation
    // ---------------------------
    #[error("Authentication error: {0}")]
    Auth(#[from] crate::auth::AuthError),
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        AppError::Validation(errors)
    }
}

pub type AppResult<T> = Result<T, AppError>;
