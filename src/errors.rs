//! Unified application error type.
//! All modules (store, core, cli, render) return AppError to keep the error
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
    // Record store
    // ---------------------------
    #[error("Record store error: {0}")]
    Store(#[from] rusqlite::Error),

    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    #[error("Corrupt sheet row in '{0}': {1}")]
    CorruptRow(String, String),

    // ---------------------------
    // Access control
    // ---------------------------
    #[error("Access denied: {0} is not registered in the user directory")]
    AccessDenied(String),

    #[error("No operator email configured; set operator_email or pass --user")]
    NoIdentity,

    // ---------------------------
    // Lookups
    // ---------------------------
    #[error("Project not found: {0}")]
    ProjectNotFound(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid project id: {0}")]
    InvalidProjectId(String),

    #[error("Invalid status code: {0}")]
    InvalidStatus(String),

    #[error("Invalid category: {0}")]
    InvalidCategory(String),

    #[error("Invalid date value: {0}")]
    InvalidDate(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ---------------------------
    // Document generation
    // ---------------------------
    #[error("Template document not found: {0}")]
    TemplateNotFound(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Failed to load configuration")]
    ConfigLoad,

    #[error("Failed to save configuration")]
    ConfigSave,

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
