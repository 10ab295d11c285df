pub mod parser;

pub use parser::{fingerprint, parse_bytes, parse_content, parse_report};

use serde::Serialize;

/// A single Code Climate entry describing one misspelling
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    pub description: String,
    pub fingerprint: String,
    pub severity: Severity,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    pub path: String,
    pub lines: LinePosition,
}

/// 1-based position of the violation within the file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LinePosition {
    pub begin: i64,
}

/// Misspellings are never ranked, so every entry is reported as minor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Minor,
}
