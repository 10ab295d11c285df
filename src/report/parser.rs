use super::{LinePosition, Location, Severity, Violation};
use crate::error::{ReportError, Result};
use std::fs;
use std::path::Path;

const FIELD_SEPARATOR: u8 = b':';

/// Parse a misspell report file into Code Climate entries
pub fn parse_report(path: impl AsRef<Path>) -> Result<Vec<Violation>> {
    let path = path.as_ref();
    let content = fs::read(path).map_err(|source| ReportError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;

    parse_bytes(&content)
}

/// Parse report text that has already been read into memory.
///
/// A single trailing newline does not produce an extra line, so an empty
/// report yields no entries. Parsing stops at the first malformed line.
pub fn parse_content(content: &str) -> Result<Vec<Violation>> {
    parse_bytes(content.as_bytes())
}

/// Parse raw report bytes. Invalid UTF-8 is replaced with U+FFFD in the
/// decoded fields but fingerprints are taken over the original bytes.
pub fn parse_bytes(content: &[u8]) -> Result<Vec<Violation>> {
    report_lines(content).map(Violation::from_bytes).collect()
}

/// MD5 digest of the raw report line as lowercase hex
pub fn fingerprint(line: impl AsRef<[u8]>) -> String {
    format!("{:x}", md5::compute(line.as_ref()))
}

fn report_lines(content: &[u8]) -> impl Iterator<Item = &[u8]> + '_ {
    content.split_inclusive(|b| *b == b'\n').map(|line| {
        let line = line.strip_suffix(b"\n").unwrap_or(line);
        line.strip_suffix(b"\r").unwrap_or(line)
    })
}

fn parse_line_number(field: &[u8]) -> i64 {
    std::str::from_utf8(field)
        .ok()
        .and_then(|text| text.parse().ok())
        .unwrap_or(0)
}

impl Violation {
    /// Decode a `<path>:<line>:<column>:<message>` report line
    pub fn from_line(line: &str) -> Result<Self> {
        Self::from_bytes(line.as_bytes())
    }

    pub fn from_bytes(line: &[u8]) -> Result<Self> {
        let fields: Vec<&[u8]> = line.split(|b| *b == FIELD_SEPARATOR).collect();

        let [path, begin, _column, message] = fields.as_slice() else {
            return Err(ReportError::MalformedLine {
                line: String::from_utf8_lossy(line).into_owned(),
            });
        };

        Ok(Self {
            description: String::from_utf8_lossy(message).trim().to_string(),
            fingerprint: fingerprint(line),
            severity: Severity::Minor,
            location: Location {
                path: String::from_utf8_lossy(path).into_owned(),
                // Unparseable line numbers fall back to 0 rather than failing
                lines: LinePosition {
                    begin: parse_line_number(begin),
                },
            },
        })
    }
}
