//! Reference data extracted from change descriptions.

use serde::{Deserialize, Serialize};

/// Labeled links found in a description. Each field is independent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceData {
    /// `Ticket Link:` entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_link: Option<TicketLink>,
    /// `Documentation Link:` entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation_link: Option<NamedLink>,
    /// `Testing Link:` entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub testing_link: Option<NamedLink>,
}

/// A Taiga ticket reference with its tracker URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicketLink {
    /// Project code as written.
    pub project: String,
    /// Ticket number within the project.
    pub ticket_number: String,
    /// Tracker URL.
    pub url: String,
    /// Display form, `Taiga #<project>-<ticket_number>`.
    pub display: String,
}

/// A named link such as a design document or test plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedLink {
    /// Bracketed label.
    pub name: String,
    /// Target URL.
    pub url: String,
}

impl TicketLink {
    /// Builds a ticket link and its display string.
    pub fn new(project: &str, ticket_number: &str, url: &str) -> Self {
        Self {
            project: project.to_string(),
            ticket_number: ticket_number.to_string(),
            url: url.to_string(),
            display: format!("Taiga #{project}-{ticket_number}"),
        }
    }
}

impl ReferenceData {
    /// Returns true when no link of any kind was found.
    pub fn is_empty(&self) -> bool {
        self.ticket_link.is_none() && self.documentation_link.is_none() && self.testing_link.is_none()
    }
}
