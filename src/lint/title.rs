//! Title validation against the `type: summary (Taiga #PROJECT-NUMBER)` convention.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::{debug, trace};

use crate::data::{ParsedTitle, ValidationResult};
use crate::lint::types::{closest_type, CommitType};

/// Minimum summary length, in characters, after trimming.
pub const MIN_SUMMARY_LEN: usize = 5;

/// Canonical format shown to authors.
pub const FORMAT_HINT: &str = "<type>: <short summary> (Taiga #<PROJECT>-<TICKET_NUMBER>)";

/// Titles shown when no correction can be derived from the input.
pub const EXAMPLE_TITLES: [&str; 2] = [
    "feat: add user login flow (Taiga #DATB-10353)",
    "fix: repair dashboard chart rendering (Taiga #PROJ-123)",
];

/// Summary used in a suggested title when nothing else is left of the input.
const PLACEHOLDER_SUMMARY: &str = "describe the change";

// The project group accepts any letter case so the uppercase rule is
// reported by semantic validation with a precise fix.
#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static TITLE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?P<type>[a-z]+):\s+(?P<summary>.+?)\s+\(Taiga\s+#(?P<project>[A-Za-z]+)-(?P<ticket>\d+)\)$",
    )
    .unwrap()
});

#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static STRICT_TAIGA_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(Taiga\s+#[A-Z]+-\d+\)").unwrap());

#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static TICKET_SHAPE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#[A-Z]+-\d+").unwrap());

#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static LOOSE_TICKET_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"#?(?P<project>[A-Z]+)-?(?P<ticket>\d+)").unwrap());

#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static LEADING_TYPE_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-z]+").unwrap());

#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static TYPE_PREFIX_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^[a-z]+:?\s*").unwrap());

#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static TAIGA_GROUP_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\(\s*taiga[^)]*\)").unwrap());

#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static TRAILING_PAREN_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(.*?\)$").unwrap());

/// Errors and suggestions collected while diagnosing a title.
#[derive(Debug, Default)]
struct Diagnosis {
    errors: Vec<String>,
    suggestions: Vec<String>,
}

impl Diagnosis {
    fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    fn suggest(&mut self, message: impl Into<String>) {
        self.suggestions.push(message.into());
    }

    fn into_invalid(self) -> ValidationResult {
        ValidationResult::invalid(self.errors, self.suggestions)
    }
}

/// Validates commit and merge request titles.
///
/// Stateless; one instance can be shared freely across threads.
#[derive(Debug, Default, Clone, Copy)]
pub struct TitleValidator;

impl TitleValidator {
    /// Creates a validator.
    pub fn new() -> Self {
        Self
    }

    /// Validates a title, explaining every problem found and suggesting fixes.
    pub fn validate_title(&self, title: &str) -> ValidationResult {
        let title = title.trim();

        if title.is_empty() {
            debug!("Rejecting empty title");
            let mut diagnosis = Diagnosis::default();
            diagnosis.error("Title must not be empty");
            diagnosis.suggest(format!("Correct format: {FORMAT_HINT}"));
            return diagnosis.into_invalid();
        }

        match TITLE_PATTERN.captures(title) {
            Some(captures) => self.validate_components(&captures),
            None => {
                debug!(title, "Title does not match the required shape");
                let mut diagnosis = Diagnosis::default();
                self.analyze_format_errors(title, &mut diagnosis);
                self.suggest_corrections(title, &mut diagnosis);
                diagnosis.into_invalid()
            }
        }
    }

    /// Checks the rules the aggregate pattern cannot express.
    fn validate_components(&self, captures: &Captures<'_>) -> ValidationResult {
        let commit_type = group(captures, "type");
        let summary = group(captures, "summary").trim();
        let project = group(captures, "project");
        let ticket_number = group(captures, "ticket");

        let mut diagnosis = Diagnosis::default();

        if commit_type.parse::<CommitType>().is_err() {
            diagnosis.error(format!("Type '{commit_type}' is not valid"));
            if let Some(closest) = closest_type(commit_type) {
                diagnosis.suggest(format!("Did you mean '{closest}'?"));
            }
            diagnosis.suggest(format!("Allowed types: {}", CommitType::allowed_list()));
        }

        if summary.chars().count() < MIN_SUMMARY_LEN {
            diagnosis.error(format!(
                "Summary too short (minimum {MIN_SUMMARY_LEN} characters)"
            ));
            diagnosis.suggest("Describe the change more clearly");
        }

        if !project.chars().all(|c| c.is_ascii_uppercase()) {
            diagnosis.error(format!(
                "Project name must be uppercase: '{project}' is not valid"
            ));
            diagnosis.suggest(format!(
                "Use: (Taiga #{}-{ticket_number})",
                project.to_uppercase()
            ));
        }

        if !diagnosis.errors.is_empty() {
            debug!(errors = diagnosis.errors.len(), "Title failed semantic checks");
            return diagnosis.into_invalid();
        }

        ValidationResult::valid(ParsedTitle {
            commit_type: commit_type.to_string(),
            summary: summary.to_string(),
            project: project.to_string(),
            ticket_number: ticket_number.to_string(),
        })
    }

    /// Pinpoints which part of a malformed title is wrong.
    fn analyze_format_errors(&self, title: &str, diagnosis: &mut Diagnosis) {
        let Some((raw_type, rest)) = title.split_once(':') else {
            trace!("No separator, skipping remaining format checks");
            diagnosis.error("Invalid format: no ':' separator found after the type");
            diagnosis.suggest(format!("Correct format: {FORMAT_HINT}"));
            return;
        };

        let written_type = raw_type.trim();
        let potential_type = written_type.to_lowercase();

        if potential_type.is_empty() {
            diagnosis.error("Change type not found before ':'");
        } else if potential_type.parse::<CommitType>().is_err() {
            diagnosis.error(format!("Type '{potential_type}' is not valid"));
            diagnosis.suggest(format!("Allowed types: {}", CommitType::allowed_list()));
        } else if potential_type != written_type {
            diagnosis.error("Type must be lowercase");
        }

        self.analyze_taiga_reference(title, diagnosis);

        if !rest.is_empty() && !rest.starts_with(' ') {
            diagnosis.error("A space is required after ':'");
        }

        if diagnosis.errors.is_empty() {
            self.analyze_structure(title, raw_type, rest, diagnosis);
        }
    }

    /// Explains a title whose parts are individually well formed but whose
    /// layout is not. Always records at least one error.
    fn analyze_structure(
        &self,
        title: &str,
        raw_type: &str,
        rest: &str,
        diagnosis: &mut Diagnosis,
    ) {
        if raw_type.trim_end() != raw_type {
            diagnosis.error("No space is allowed before ':'");
        }

        if let Some(reference) = STRICT_TAIGA_PATTERN.find(title) {
            let summary_start = title.len() - rest.len();
            if reference.start() >= summary_start
                && title[summary_start..reference.start()].trim().is_empty()
            {
                diagnosis.error("Summary is missing");
            } else if !title[..reference.start()].ends_with(char::is_whitespace) {
                diagnosis.error("A space is required before '(Taiga ...)'");
            }

            if reference.end() != title.len() {
                diagnosis.error("Text after the Taiga reference is not allowed");
            }
        }

        if diagnosis.errors.is_empty() {
            trace!("No specific structural problem identified");
            diagnosis.error("Title does not follow the required format");
            diagnosis.suggest(format!("Correct format: {FORMAT_HINT}"));
        }
    }

    fn analyze_taiga_reference(&self, title: &str, diagnosis: &mut Diagnosis) {
        if !title.to_lowercase().contains("taiga") {
            diagnosis.error("Taiga reference not found");
            diagnosis.suggest("Add: (Taiga #<PROJECT>-<TICKET_NUMBER>)");
            return;
        }

        if STRICT_TAIGA_PATTERN.is_match(title) {
            return;
        }

        if !title.contains('(') || !title.contains(')') {
            diagnosis.error("Invalid Taiga reference: opening or closing parenthesis missing");
        } else if !title.contains('#') {
            diagnosis.error("Invalid Taiga reference: '#' symbol not found");
        } else if !TICKET_SHAPE_PATTERN.is_match(title) {
            diagnosis.error("Invalid Taiga reference: expected #<PROJECT>-<TICKET_NUMBER>");
            diagnosis.suggest("Example: (Taiga #DATB-10353)");
        } else {
            diagnosis.error("Taiga reference does not follow the standard format");
        }
    }

    /// Derives a corrected title from whatever parts of the input survive.
    fn suggest_corrections(&self, title: &str, diagnosis: &mut Diagnosis) {
        let lowered = title.to_lowercase();
        let leading_type = LEADING_TYPE_PATTERN.find(&lowered);
        let ticket = LOOSE_TICKET_PATTERN.captures(title);

        let (Some(leading_type), Some(ticket)) = (leading_type, ticket) else {
            diagnosis.suggest("Example of the correct format:");
            for example in EXAMPLE_TITLES {
                diagnosis.suggest(example);
            }
            return;
        };

        let commit_type = closest_type(leading_type.as_str()).unwrap_or(CommitType::Feat);
        let summary = extract_summary(title);
        let summary = if summary.is_empty() {
            PLACEHOLDER_SUMMARY
        } else {
            summary.as_str()
        };

        diagnosis.suggest(format!(
            "Suggested title: {commit_type}: {summary} (Taiga #{}-{})",
            group(&ticket, "project"),
            group(&ticket, "ticket"),
        ));
    }
}

/// Strips the type prefix, Taiga references, trailing parenthetical and
/// ticket tokens from a title.
fn extract_summary(title: &str) -> String {
    let without_type = TYPE_PREFIX_PATTERN.replace(title, "");
    let without_reference = TAIGA_GROUP_PATTERN.replace_all(&without_type, " ");
    let without_paren = TRAILING_PAREN_PATTERN.replace(without_reference.trim(), "");
    LOOSE_TICKET_PATTERN
        .replace_all(without_paren.trim(), "")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

fn group<'t>(captures: &Captures<'t>, name: &str) -> &'t str {
    captures.name(name).map_or("", |m| m.as_str())
}
