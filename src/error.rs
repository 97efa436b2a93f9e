//! Error types for required-tasks.
//!
//! This module defines [`CheckError`], the error type used by everything
//! around the checklist evaluator, and a [`Result`] type alias.
//!
//! The evaluator itself never fails. Errors come from locating and reading
//! the pull request body, and `main` reports them as a failed check.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for required-tasks operations.
#[derive(Debug, Error)]
pub enum CheckError {
    /// Neither a body file nor an event payload was configured.
    #[error("No pull request body source: set GITHUB_EVENT_PATH or pass --body-file")]
    NoBodySource,

    /// Event payload file does not exist.
    #[error("Event payload not found: {path}")]
    EventNotFound { path: PathBuf },

    /// Event payload is not valid JSON or has an unexpected shape.
    #[error("Failed to parse event payload at {path}: {message}")]
    EventParse { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    ///
    /// Displays the whole context chain, outermost first.
    #[error("{0:#}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias for required-tasks operations.
pub type Result<T> = std::result::Result<T, CheckError>;
