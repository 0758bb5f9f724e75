//! Title validation and reference extraction.
//!
//! Both components are pure: they read only their input, keep no state and
//! never fail. An invalid title is reported through
//! [`ValidationResult`](crate::data::ValidationResult), a missing link through
//! an absent field of [`ReferenceData`](crate::data::ReferenceData).

pub mod message;
pub mod references;
pub mod title;
pub mod types;

pub use message::{check_message, split_message};
pub use references::ReferenceExtractor;
pub use title::TitleValidator;
pub use types::{closest_type, CommitType};

use crate::data::{ReferenceData, ValidationResult};

/// Validates a title with a default [`TitleValidator`].
pub fn validate_commit_title(title: &str) -> ValidationResult {
    TitleValidator::new().validate_title(title)
}

/// Extracts references with a default [`ReferenceExtractor`].
///
/// Accepts `&str` or `None`; absent input yields an empty result.
pub fn extract_reference_data<'a>(description: impl Into<Option<&'a str>>) -> ReferenceData {
    description
        .into()
        .map(|d| ReferenceExtractor::new().extract_references(d))
        .unwrap_or_default()
}
