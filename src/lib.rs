//! # taiga-lint
//!
//! Validates commit and merge request titles against the
//! `type: summary (Taiga #PROJECT-NUMBER)` convention and extracts ticket,
//! documentation and testing links from descriptions.
//!
//! ## Quick Start
//!
//! ```rust
//! use taiga_lint::{extract_reference_data, validate_commit_title};
//!
//! let result = validate_commit_title("feat: add user login flow (Taiga #DATB-10353)");
//! assert!(result.is_valid);
//!
//! let refs = extract_reference_data("Testing Link: [https://x.com/y]");
//! assert_eq!(refs.testing_link.map(|l| l.url).as_deref(), Some("https://x.com/y"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod cli;
pub mod data;
pub mod error;
pub mod git;
pub mod lint;
pub mod utils;

pub use crate::cli::Cli;
pub use crate::data::{ReferenceData, ValidationResult};
pub use crate::error::LintError;
pub use crate::lint::{extract_reference_data, validate_commit_title};

/// The current version of taiga-lint.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
