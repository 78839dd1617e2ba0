//! Data models for inventory items and the stores that hold them.

mod item;
mod store;
mod tag;

pub use item::{Bucket, Energy, EnergyType, Item, MasterworkInfo};
pub use store::{ClassType, Store, VAULT_ID};
pub use tag::TagValue;
