//! Filter keyword listing.

use gear_search_rs::{FilterDefinition, FilterKind};
use owo_colors::OwoColorize;
use serde::Serialize;

use super::helpers::format_header;

#[derive(Serialize)]
struct KeywordsListOutput<'a> {
    filters: Vec<KeywordOutput<'a>>,
}

#[derive(Serialize)]
struct KeywordOutput<'a> {
    keywords: &'a [&'static str],
    format: String,
    description: &'static str,
    #[serde(skip_serializing_if = "no_values")]
    values: &'a [&'static str],
}

fn no_values(values: &&[&'static str]) -> bool {
    values.is_empty()
}

fn attribute_values(definition: &FilterDefinition) -> &'static [&'static str] {
    match definition.kind {
        FilterKind::Attribute { values, .. } => values,
        _ => &[],
    }
}

/// Formats the registered filters as JSON.
pub fn format_keywords_json(definitions: &[FilterDefinition]) -> Result<String, serde_json::Error> {
    let filters = definitions
        .iter()
        .map(|definition| KeywordOutput {
            keywords: definition.keywords,
            format: definition.format().to_string(),
            description: definition.description,
            values: attribute_values(definition),
        })
        .collect();

    serde_json::to_string_pretty(&KeywordsListOutput { filters })
}

/// Formats the registered filters as a table.
pub fn format_keywords_table(definitions: &[FilterDefinition], use_colors: bool) -> String {
    let mut output = format_header(
        &format!("{:<28} {:<14} {}", "Keyword", "Format", "Description"),
        use_colors,
    );

    for definition in definitions {
        let keywords = definition.keywords.join(", ");
        let keywords = if use_colors {
            format!("{:<28}", keywords).cyan().to_string()
        } else {
            format!("{:<28}", keywords)
        };
        output.push_str(&format!(
            "{} {:<14} {}\n",
            keywords,
            definition.format().to_string(),
            definition.description
        ));

        let values = attribute_values(definition);
        if !values.is_empty() {
            output.push_str(&format!("{:<28} is:{}\n", "", values.join(" | is:")));
        }
    }

    output
}
