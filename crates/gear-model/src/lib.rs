//! Inventory data model for gear search.
//!
//! This crate defines the items, stores and tags that the search engine reads,
//! plus [`Inventory`], the JSON-backed item provider used by the command line.

pub mod error;
pub mod inventory;
pub mod models;

pub use error::{ModelError, Result};
pub use inventory::Inventory;
pub use models::{
    Bucket, ClassType, Energy, EnergyType, Item, MasterworkInfo, Store, TagValue, VAULT_ID,
};
