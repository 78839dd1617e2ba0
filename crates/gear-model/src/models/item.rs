//! Item model.
//!
//! An item is one piece of gear in a player's inventory. The search engine only
//! reads these fields; mutation happens through bulk actions handled elsewhere.

use serde::{Deserialize, Serialize};

use super::store::{ClassType, VAULT_ID};
use super::tag::TagValue;

/// A single inventory item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Unique instance identifier.
    pub id: String,

    /// Definition hash. Two copies of the same weapon share a hash.
    pub hash: u32,

    /// Display name.
    pub name: String,

    /// Item type name (e.g. "Hand Cannon"), used as the comparison category.
    pub type_name: String,

    /// The inventory bucket the item belongs to.
    pub bucket: Bucket,

    /// Id of the store holding the item, or `"vault"`.
    pub owner: String,

    /// Whether the item is waiting in a character's postmaster.
    #[serde(default)]
    pub in_postmaster: bool,

    /// Class restriction.
    #[serde(default)]
    pub class_type: ClassType,

    /// Classified items have incomplete definitions.
    #[serde(default)]
    pub classified: bool,

    /// Power level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power: Option<u32>,

    /// Maximum power the item can be infused to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power_cap: Option<u32>,

    /// Season the item was introduced in.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub season: Option<u32>,

    /// Masterwork state, if the item can be masterworked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub masterwork: Option<MasterworkInfo>,

    /// Armor energy, if the item has an energy socket.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy: Option<Energy>,

    /// Whether the lock state can be changed.
    #[serde(default)]
    pub lockable: bool,

    /// Current lock state.
    #[serde(default)]
    pub locked: bool,

    /// Whether the item accepts a user tag.
    #[serde(default)]
    pub taggable: bool,

    /// User tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<TagValue>,
}

impl Item {
    /// Returns true if the item is stored in the vault.
    pub fn in_vault(&self) -> bool {
        self.owner == VAULT_ID
    }

    /// Returns the masterwork tier, treating a missing masterwork as tier 0.
    pub fn masterwork_tier(&self) -> u32 {
        self.masterwork.as_ref().map_or(0, |mw| mw.tier)
    }
}

/// An inventory bucket (slot type).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bucket {
    /// Bucket hash.
    pub hash: u32,

    /// Bucket name (e.g. "Kinetic Weapons").
    #[serde(default)]
    pub name: String,

    /// Items in account-wide buckets are shared between characters.
    #[serde(default)]
    pub account_wide: bool,
}

/// Masterwork information for an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MasterworkInfo {
    /// Masterwork tier. Some sources report tiers above the in-game cap of 10.
    pub tier: u32,

    /// Hash of the stat boosted by the masterwork.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stat_hash: Option<u32>,
}

/// Armor energy socket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Energy {
    /// Element of the energy socket.
    pub energy_type: EnergyType,

    /// Energy capacity (0-10).
    pub capacity: u32,
}

/// Element of an armor energy socket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnergyType {
    Any,
    Arc,
    Solar,
    Void,
}

impl EnergyType {
    /// Returns the lowercase name used in search queries.
    pub fn as_str(&self) -> &'static str {
        match self {
            EnergyType::Any => "any",
            EnergyType::Arc => "arc",
            EnergyType::Solar => "solar",
            EnergyType::Void => "void",
        }
    }
}
