//! Unified application error type.
//! All modules (db, core, cli, export) return AppError so the dispatcher
//! can surface one specific, user-facing message per failure kind.

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
    // Folder provisioning
    // ---------------------------
    #[error("Please enter a study name")]
    EmptyName,

    #[error("The directory '{0}' does not exist")]
    DestinationNotFound(String),

    #[error("The folder '{0}' already exists")]
    FolderAlreadyExists(String),

    #[error("Template file not found: {0}")]
    TemplateNotFound(String),

    // ---------------------------
    // Spreadsheet sync
    // ---------------------------
    #[error(
        "Invalid file: '{0}' cannot be opened as a spreadsheet. Please ensure the file can be opened with Excel first"
    )]
    UnreadableFile(String),

    #[error("The spreadsheet format is incorrect: {0}")]
    InvalidFormat(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("CSV export error: {0}")]
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
