use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReportError>;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to read misspell report {}: {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(
        "unsupported misspell report line, expecting report in default format. Received: {line}"
    )]
    MalformedLine { line: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_malformed_line_message_carries_line() {
        let err = ReportError::MalformedLine {
            line: "unexpected format".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unsupported misspell report line, expecting report in default format. Received: unexpected format"
        );
    }

    #[test]
    fn test_source_unavailable_names_path() {
        let err = ReportError::SourceUnavailable {
            path: PathBuf::from("unknown-report.txt"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        };
        let message = err.to_string();
        assert!(message.contains("unknown-report.txt"));
        assert!(message.contains("No such file or directory"));
    }
}
