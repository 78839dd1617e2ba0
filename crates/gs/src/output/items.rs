//! Search result output formatting.

use gear_model_rs::Item;
use gear_search_rs::SearchError;
use owo_colors::OwoColorize;
use serde::Serialize;

use super::helpers::{format_header, format_lock, format_optional, truncate_str};

/// One page of search results.
pub struct ItemsPage<'a> {
    /// The query text.
    pub query: &'a str,
    /// The items to print, already limited.
    pub items: &'a [&'a Item],
    /// Number of matches before the limit.
    pub total: usize,
    /// Whether every match shares one item category.
    pub same_category: bool,
    /// Clause errors from compiling the query.
    pub diagnostics: &'a [SearchError],
}

/// JSON output structure for the search command.
#[derive(Serialize)]
pub struct ItemsListOutput<'a> {
    pub query: &'a str,
    pub items: Vec<ItemOutput<'a>>,
    pub total: usize,
    pub shown: usize,
    pub same_category: bool,
    pub diagnostics: Vec<String>,
}

/// JSON output structure for a single item.
#[derive(Serialize)]
pub struct ItemOutput<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub type_name: &'a str,
    pub owner: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub season: Option<u32>,
    pub masterwork: u32,
    pub locked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tag: Option<&'static str>,
}

impl<'a> From<&'a Item> for ItemOutput<'a> {
    fn from(item: &'a Item) -> Self {
        Self {
            id: &item.id,
            name: &item.name,
            type_name: &item.type_name,
            owner: &item.owner,
            power: item.power,
            season: item.season,
            masterwork: item.masterwork_tier(),
            locked: item.locked,
            tag: item.tag.map(|tag| tag.as_str()),
        }
    }
}

/// JSON output structure for the count command.
#[derive(Serialize)]
struct CountOutput<'a> {
    query: &'a str,
    count: usize,
    diagnostics: Vec<String>,
}

fn diagnostic_strings(diagnostics: &[SearchError]) -> Vec<String> {
    diagnostics.iter().map(ToString::to_string).collect()
}

/// Formats search results as JSON.
pub fn format_items_json(page: &ItemsPage<'_>) -> Result<String, serde_json::Error> {
    let output = ItemsListOutput {
        query: page.query,
        items: page.items.iter().map(|item| ItemOutput::from(*item)).collect(),
        total: page.total,
        shown: page.items.len(),
        same_category: page.same_category,
        diagnostics: diagnostic_strings(page.diagnostics),
    };

    serde_json::to_string_pretty(&output)
}

/// Formats a match count as JSON.
pub fn format_count_json(
    query: &str,
    count: usize,
    diagnostics: &[SearchError],
) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&CountOutput {
        query,
        count,
        diagnostics: diagnostic_strings(diagnostics),
    })
}

/// Formats search results as a table.
///
/// When every match shares a category the type column is dropped and the
/// category is printed once above the table.
pub fn format_items_table(page: &ItemsPage<'_>, use_colors: bool) -> String {
    if page.items.is_empty() {
        return "No items found.\n".to_string();
    }

    let mut output = String::new();

    if page.same_category {
        let category = &page.items[0].type_name;
        if use_colors {
            output.push_str(&format!("{}\n", category.bold()));
        } else {
            output.push_str(&format!("{category}\n"));
        }
    }

    let header = if page.same_category {
        format!(
            "{:<12} {:<28} {:>5} {:>3} {:<10} {:<8} {}",
            "ID", "Name", "Power", "MW", "Owner", "Tag", "Lock"
        )
    } else {
        format!(
            "{:<12} {:<28} {:<16} {:>5} {:>3} {:<10} {:<8} {}",
            "ID", "Name", "Type", "Power", "MW", "Owner", "Tag", "Lock"
        )
    };
    output.push_str(&format_header(&header, use_colors));

    for item in page.items {
        let id = truncate_str(&item.id, 12);
        let name = truncate_str(&item.name, 28);
        let power = format_optional(item.power);
        let owner = truncate_str(&item.owner, 10);
        let tag = item.tag.map(|tag| tag.as_str()).unwrap_or("");
        let lock = format_lock(item.locked, use_colors);

        let line = if page.same_category {
            format!(
                "{:<12} {:<28} {:>5} {:>3} {:<10} {:<8} {}",
                id,
                name,
                power,
                item.masterwork_tier(),
                owner,
                tag,
                lock
            )
        } else {
            format!(
                "{:<12} {:<28} {:<16} {:>5} {:>3} {:<10} {:<8} {}",
                id,
                name,
                truncate_str(&item.type_name, 16),
                power,
                item.masterwork_tier(),
                owner,
                tag,
                lock
            )
        };
        output.push_str(line.trim_end());
        output.push('\n');
    }

    if page.total > page.items.len() {
        let more = format!(
            "... and {} more (use --all to show everything)",
            page.total - page.items.len()
        );
        if use_colors {
            output.push_str(&format!("{}\n", more.dimmed()));
        } else {
            output.push_str(&more);
            output.push('\n');
        }
    }

    output
}
