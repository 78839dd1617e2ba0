//! Common helper functions for output formatting.

use gear_search_rs::SearchError;
use owo_colors::OwoColorize;

/// Truncates a string to a maximum number of characters.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        s.to_string()
    }
}

/// Formats an optional number, blank when absent.
pub fn format_optional(value: Option<u32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Formats a table header line.
pub fn format_header(header: &str, use_colors: bool) -> String {
    if use_colors {
        format!("{}\n", header.dimmed())
    } else {
        format!("{header}\n")
    }
}

/// Formats the lock flag column.
pub fn format_lock(locked: bool, use_colors: bool) -> String {
    match (locked, use_colors) {
        (true, true) => "locked".yellow().to_string(),
        (true, false) => "locked".to_string(),
        (false, _) => String::new(),
    }
}

/// Formats a query diagnostic for stderr.
pub fn format_diagnostic(error: &SearchError, use_colors: bool) -> String {
    if use_colors {
        format!("{} {error}", "warning:".yellow().bold())
    } else {
        format!("warning: {error}")
    }
}
