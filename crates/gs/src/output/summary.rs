//! Bulk action summary output formatting.

use gear_search_rs::ActionSummary;
use owo_colors::OwoColorize;
use serde::Serialize;

#[derive(Serialize)]
struct SummaryOutput<'a> {
    action: String,
    query: &'a str,
    matched: usize,
    attempted: usize,
    succeeded: usize,
    failed: usize,
    failures: Vec<FailureOutput<'a>>,
}

#[derive(Serialize)]
struct FailureOutput<'a> {
    id: &'a str,
    error: String,
}

/// Formats a bulk action summary as JSON.
pub fn format_summary_json(
    query: &str,
    matched: usize,
    summary: &ActionSummary,
) -> Result<String, serde_json::Error> {
    let output = SummaryOutput {
        action: summary.action.to_string(),
        query,
        matched,
        attempted: summary.attempted,
        succeeded: summary.succeeded,
        failed: summary.failed(),
        failures: summary
            .failures
            .iter()
            .map(|failure| FailureOutput {
                id: &failure.item_id,
                error: failure.error.to_string(),
            })
            .collect(),
    };

    serde_json::to_string_pretty(&output)
}

/// Formats a bulk action summary for the terminal.
pub fn format_summary_table(summary: &ActionSummary, use_colors: bool) -> String {
    if summary.attempted == 0 {
        return format!("{}: no eligible items\n", summary.action);
    }

    let mut output = if use_colors && summary.is_success() {
        format!("{}\n", summary.to_string().green())
    } else if use_colors {
        format!("{}\n", summary.to_string().yellow())
    } else {
        format!("{summary}\n")
    };

    for failure in &summary.failures {
        output.push_str(&format!("  {}: {}\n", failure.item_id, failure.error));
    }

    output
}
