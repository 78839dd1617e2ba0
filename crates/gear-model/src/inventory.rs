//! JSON-backed inventory snapshot.
//!
//! An [`Inventory`] is the item provider for a search: the ordered store roster,
//! the items in their original order, and the bucket hashes that are shown to
//! the user. It is read from and written to a single JSON document.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::models::{Item, Store};

/// A snapshot of a player's inventory.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    /// Stores ordered characters first, vault last.
    #[serde(default)]
    pub stores: Vec<Store>,

    /// Id of the character the player is currently playing, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_store: Option<String>,

    /// All items, in display order.
    #[serde(default)]
    pub items: Vec<Item>,

    /// Hashes of the buckets that are displayed. Items outside these buckets
    /// are never search results.
    #[serde(default)]
    pub displayable_buckets: HashSet<u32>,
}

impl Inventory {
    /// Loads an inventory from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::ReadError` if the file cannot be read and
    /// `ModelError::Json` if it is not a valid inventory document.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| ModelError::ReadError {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Parses an inventory from a JSON string.
    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// Writes the inventory back to a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::WriteError` if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).map_err(|source| ModelError::WriteError {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Finds an item by instance id.
    pub fn item_mut(&mut self, id: &str) -> Option<&mut Item> {
        self.items.iter_mut().find(|item| item.id == id)
    }
}
