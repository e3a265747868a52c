// src/presentation.rs
use std::io::{self, Write};

use patch_version_domain::PatchOutcome;
use patch_version_shared_kernel::{InfrastructureError, Result, VersionTag};
use patch_version_usecase::PatchReport;

use crate::config::OutputFormat;

/// Announce the run before the file is touched.
pub fn print_started(tag: &VersionTag, format: OutputFormat) {
    if format == OutputFormat::Text {
        println!("Patching version: {tag}");
    }
}

/// Print the outcome of a run.
///
/// Text output stays silent when no marker was found; the use case logs a
/// warning for that case instead.
///
/// # Errors
///
/// Fails when the JSON report cannot be serialized or stdout is closed.
pub fn print_report(report: &PatchReport, format: OutputFormat) -> Result<()> {
    let mut out = io::stdout().lock();
    match format {
        OutputFormat::Text => write_text(&mut out, report),
        OutputFormat::Json => write_json(&mut out, report),
    }
}

fn write_text(out: &mut impl Write, report: &PatchReport) -> Result<()> {
    let line = match (&report.outcome, report.written) {
        (PatchOutcome::Patched { .. }, true) => {
            format!("Patched connector version number in {}", report.target)
        }
        (PatchOutcome::Patched { line, previous }, false) => format!(
            "Would patch connector version number in {} (line {line}: {previous} -> {})",
            report.target, report.version
        ),
        (PatchOutcome::NoMatchFound, _) => return Ok(()),
    };
    writeln!(out, "{line}").map_err(stdout_error)?;
    Ok(())
}

fn write_json(out: &mut impl Write, report: &PatchReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report).map_err(|e| {
        InfrastructureError::SerializationError {
            format: "JSON".to_string(),
            details: e.to_string(),
        }
    })?;
    writeln!(out, "{json}").map_err(stdout_error)?;
    Ok(())
}

fn stdout_error(source: io::Error) -> InfrastructureError {
    InfrastructureError::OutputError {
        message: "cannot write to stdout".to_string(),
        source: Some(Box::new(source)),
    }
}
