//! Console output formatter for composition outcomes

use colored::Colorize;
use flow_domain::{Combined, FetchError, OutputFormat};
use serde::Serialize;

/// JSON shape of an outcome
#[derive(Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum OutcomeReport<'a> {
    Success { data: &'a Combined },
    Failure { error: &'a FetchError },
}

/// Formats outcomes for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Success line: indicator plus the merged record
    pub fn format_success(combined: &Combined) -> String {
        format!("{} {}", "Success!".green().bold(), combined)
    }

    /// Failure line: indicator plus the error message
    pub fn format_failure(error: &FetchError) -> String {
        format!("{} {}", "An error occurred:".red().bold(), error.message)
    }

    /// Format as JSON
    pub fn format_json(outcome: &Result<Combined, FetchError>) -> String {
        let report = match outcome {
            Ok(data) => OutcomeReport::Success { data },
            Err(error) => OutcomeReport::Failure { error },
        };
        serde_json::to_string_pretty(&report).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format an outcome in the requested format
    pub fn format(outcome: &Result<Combined, FetchError>, format: OutputFormat) -> String {
        match (format, outcome) {
            (OutputFormat::Json, _) => Self::format_json(outcome),
            (OutputFormat::Text, Ok(combined)) => Self::format_success(combined),
            (OutputFormat::Text, Err(error)) => Self::format_failure(error),
        }
    }
}
