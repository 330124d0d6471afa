//! Unified application error type.
//! All modules (store, core, cli, ui) return AppError to keep the error
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

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Store-related
    // ---------------------------
    #[error("Unable to read scores: {0}")]
    StoreRead(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid value for {label}: '{input}' (use a number or N/A)")]
    Validation {
        field: usize,
        label: &'static str,
        input: String,
    },

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

impl AppError {
    /// Index of the rejected form field, if this is a validation failure.
    pub fn field_index(&self) -> Option<usize> {
        match self {
            AppError::Validation { field, .. } => Some(*field),
            _ => None,
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
