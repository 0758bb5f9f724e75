//! Allowed change types and typo resolution.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A change type accepted in titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommitType {
    /// New functionality.
    Feat,
    /// Bug fix.
    Fix,
    /// Restructuring without behavior change.
    Refactor,
    /// Documentation only.
    Docs,
    /// Formatting and code style.
    Style,
    /// Tests only.
    Test,
    /// Maintenance tasks.
    Chore,
    /// Performance improvement.
    Perf,
    /// CI/CD pipeline changes.
    Ci,
    /// Build configuration or dependencies.
    Build,
    /// Reverts an earlier change.
    Revert,
}

/// Common synonyms and typos that do not share a prefix with an allowed type.
const TYPO_TABLE: &[(&str, CommitType)] = &[
    ("feature", CommitType::Feat),
    ("bugfix", CommitType::Fix),
    ("bug", CommitType::Fix),
    ("document", CommitType::Docs),
    ("testing", CommitType::Test),
    ("tests", CommitType::Test),
    ("performance", CommitType::Perf),
];

impl CommitType {
    /// Every allowed type in declared order. Resolution depends on this order.
    pub const ALL: [Self; 11] = [
        Self::Feat,
        Self::Fix,
        Self::Refactor,
        Self::Docs,
        Self::Style,
        Self::Test,
        Self::Chore,
        Self::Perf,
        Self::Ci,
        Self::Build,
        Self::Revert,
    ];

    /// Lowercase keyword used in titles.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Feat => "feat",
            Self::Fix => "fix",
            Self::Refactor => "refactor",
            Self::Docs => "docs",
            Self::Style => "style",
            Self::Test => "test",
            Self::Chore => "chore",
            Self::Perf => "perf",
            Self::Ci => "ci",
            Self::Build => "build",
            Self::Revert => "revert",
        }
    }

    /// Short human description.
    pub const fn description(self) -> &'static str {
        match self {
            Self::Feat => "adds a new feature",
            Self::Fix => "fixes a bug",
            Self::Refactor => "restructures code without changing behavior",
            Self::Docs => "updates documentation",
            Self::Style => "formats code or adjusts code style",
            Self::Test => "adds or updates tests",
            Self::Chore => "maintenance task",
            Self::Perf => "improves performance",
            Self::Ci => "updates the CI/CD pipeline",
            Self::Build => "updates build configuration or dependencies",
            Self::Revert => "reverts a previous change",
        }
    }

    /// Comma separated list of allowed keywords, in declared order.
    pub fn allowed_list() -> String {
        Self::ALL.map(Self::as_str).join(", ")
    }
}

impl fmt::Display for CommitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CommitType {
    type Err = ();

    /// Exact, case-sensitive keyword lookup.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|t| t.as_str() == s).ok_or(())
    }
}

/// Resolves an unrecognized type to the allowed type the author most likely meant.
///
/// Tries, in order: exact match, prefix relation in either direction against
/// [`CommitType::ALL`] (first hit in declared order wins, so `c` resolves to
/// `chore` rather than `ci`), then a fixed table of synonyms.
pub fn closest_type(candidate: &str) -> Option<CommitType> {
    let candidate = candidate.to_lowercase();
    if candidate.is_empty() {
        return None;
    }

    if let Ok(exact) = candidate.parse::<CommitType>() {
        return Some(exact);
    }

    if let Some(prefixed) = CommitType::ALL
        .into_iter()
        .find(|t| t.as_str().starts_with(&candidate) || candidate.starts_with(t.as_str()))
    {
        return Some(prefixed);
    }

    TYPO_TABLE
        .iter()
        .find(|(typo, _)| *typo == candidate)
        .map(|(_, resolved)| *resolved)
}
