//! Whole-message checks: title line plus description body.

use crate::data::MessageCheck;
use crate::lint::references::ReferenceExtractor;
use crate::lint::title::TitleValidator;

/// Splits a message into its first line and the remaining body.
pub fn split_message(message: &str) -> (&str, &str) {
    let message = message.trim_start_matches(['\n', '\r']);
    match message.split_once('\n') {
        Some((title, body)) => (title.trim_end_matches('\r'), body),
        None => (message, ""),
    }
}

/// Validates the title of a message and extracts references from its body.
pub fn check_message(message: &str) -> MessageCheck {
    let (title, body) = split_message(message);

    MessageCheck {
        hash: None,
        title: title.trim().to_string(),
        validation: TitleValidator::new().validate_title(title),
        references: ReferenceExtractor::new().extract_references(body),
    }
}
