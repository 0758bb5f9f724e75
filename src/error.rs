//! Errors raised by the input and output layer.
//!
//! Validation itself never fails; an invalid title is a normal
//! [`ValidationResult`](crate::data::ValidationResult).

use thiserror::Error;

/// Input-layer failures.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LintError {
    /// Output format name not recognized.
    #[error("Unknown output format '{0}'. Expected one of: text, json, yaml")]
    UnknownFormat(String),

    /// Commit range could not be split into start and end revisions.
    #[error("Invalid commit range '{0}'. Expected REV, A..B or HEAD")]
    InvalidRange(String),

    /// Nothing to check was provided.
    #[error("No {0} provided")]
    EmptyInput(&'static str),
}

// Note: anyhow already has a blanket impl for thiserror::Error types
