pub mod cli;
pub mod error;
pub mod report;

pub use error::{ReportError, Result};
pub use report::{parse_report, LinePosition, Location, Severity, Violation};
