//! Extraction of labeled links from change descriptions.

use std::sync::LazyLock;

use regex::{Captures, Regex};
use tracing::debug;

use crate::data::{NamedLink, ReferenceData, TicketLink};

// Labels, the `Taiga` marker and the project code match in any case;
// captured values keep theirs.
#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static TICKET_LINK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i:Ticket\s+Link):\s*\[\((?i:Taiga)\s+#(?P<project>(?i:[A-Z]+))-(?P<ticket>\d+)\)\]\s*\((?P<url>(?i:https?)://[^)]+)\)",
    )
    .unwrap()
});

#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static DOCUMENTATION_LINK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i:Documentation\s+Link):\s*\[(?P<name>[^\]]+)\]\s*\((?P<url>[^)]+)\)").unwrap()
});

#[allow(clippy::unwrap_used)] // Compile-time constant regex pattern
static TESTING_LINK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i:Testing\s+Link):\s*\[(?P<name>[^\]]+)\](?:\s*\((?P<url>[^)]+)\))?").unwrap()
});

/// Pulls ticket, documentation and testing links out of free text.
///
/// Each kind is searched independently and only its first occurrence is kept.
#[derive(Debug, Default, Clone, Copy)]
pub struct ReferenceExtractor;

impl ReferenceExtractor {
    /// Creates an extractor.
    pub fn new() -> Self {
        Self
    }

    /// Extracts every recognized link. Empty input yields an empty result.
    pub fn extract_references(&self, description: &str) -> ReferenceData {
        if description.is_empty() {
            return ReferenceData::default();
        }

        let data = ReferenceData {
            ticket_link: self.extract_ticket_link(description),
            documentation_link: self.extract_documentation_link(description),
            testing_link: self.extract_testing_link(description),
        };

        debug!(
            ticket = data.ticket_link.is_some(),
            documentation = data.documentation_link.is_some(),
            testing = data.testing_link.is_some(),
            "Extracted references"
        );

        data
    }

    /// `Ticket Link: [(Taiga #PROJ-123)] (https://...)`
    fn extract_ticket_link(&self, text: &str) -> Option<TicketLink> {
        TICKET_LINK_PATTERN.captures(text).map(|c| {
            TicketLink::new(
                group(&c, "project"),
                group(&c, "ticket"),
                group(&c, "url"),
            )
        })
    }

    /// `Documentation Link: [name] (url)`
    fn extract_documentation_link(&self, text: &str) -> Option<NamedLink> {
        DOCUMENTATION_LINK_PATTERN.captures(text).map(|c| NamedLink {
            name: group(&c, "name").to_string(),
            url: group(&c, "url").to_string(),
        })
    }

    /// `Testing Link: [name] (url)` or `Testing Link: [url]`
    fn extract_testing_link(&self, text: &str) -> Option<NamedLink> {
        TESTING_LINK_PATTERN.captures(text).map(|c| {
            let name = group(&c, "name");
            let url = c.name("url").map_or(name, |m| m.as_str());
            NamedLink {
                name: name.to_string(),
                url: url.to_string(),
            }
        })
    }
}

fn group<'t>(captures: &Captures<'t>, name: &str) -> &'t str {
    captures.name(name).map_or("", |m| m.as_str())
}
