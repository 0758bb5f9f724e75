//! Result types shared by the validators, the report and the CLI.

pub mod check;
pub mod references;
pub mod validation;
pub mod yaml;

pub use check::{CheckReport, CheckSummary, MessageCheck, OutputFormat};
pub use references::{NamedLink, ReferenceData, TicketLink};
pub use validation::{ParsedTitle, ValidationResult};
pub use yaml::to_yaml;
