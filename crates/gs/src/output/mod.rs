//! Output formatting utilities for the gs CLI.
//!
//! This module provides functions for formatting data as tables or JSON.
//! It is organized into submodules by what is being printed:
//!
//! - [`items`] - Search results and counts
//! - [`keywords`] - The filter keyword listing
//! - [`summary`] - Bulk action summaries
//! - [`helpers`] - Common formatting utilities (truncation, flags, warnings)

pub mod helpers;
mod items;
mod keywords;
mod summary;

// Items
pub use items::{format_count_json, format_items_json, format_items_table, ItemsPage};

// Keywords
pub use keywords::{format_keywords_json, format_keywords_table};

// Bulk actions
pub use summary::{format_summary_json, format_summary_table};
