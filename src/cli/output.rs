use crate::Violation;
use anyhow::{Context, Result};
use colored::*;
use std::io::Write;

/// Serialize the report as a JSON array followed by a single newline
pub fn write_report<W: Write>(out: &mut W, violations: &[Violation], pretty: bool) -> Result<()> {
    let encoded = if pretty {
        serde_json::to_writer_pretty(&mut *out, violations)
    } else {
        serde_json::to_writer(&mut *out, violations)
    };
    encoded.context("Failed to serialize codeclimate report")?;

    writeln!(out).context("Failed to write codeclimate report")?;
    out.flush().context("Failed to flush codeclimate report")?;

    Ok(())
}

pub fn print_error(err: &anyhow::Error, colored_output: bool) {
    eprintln!("{}", format_error(err, colored_output));
}

/// Render an error and its cause chain on one line
pub fn format_error(err: &anyhow::Error, colored_output: bool) -> String {
    if colored_output {
        format!("{} {:#}", "Error:".red().bold(), err)
    } else {
        format!("Error: {:#}", err)
    }
}
