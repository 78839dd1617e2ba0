//! Store (character or vault) model.

use serde::{Deserialize, Serialize};

/// Owner id used for items held in the vault.
pub const VAULT_ID: &str = "vault";

/// A place items can be held: a character or the vault.
///
/// Store rosters are ordered characters first (left to right as shown in the
/// game), with the vault last.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Store {
    /// Store id; items reference this through [`Item::owner`](super::Item::owner).
    pub id: String,

    /// Display name.
    #[serde(default)]
    pub name: String,

    /// Character class. The vault reports [`ClassType::Unknown`].
    #[serde(default)]
    pub class_type: ClassType,

    /// Whether this store is the vault.
    #[serde(default)]
    pub is_vault: bool,
}

impl Store {
    /// Creates a character store.
    pub fn character(id: impl Into<String>, class_type: ClassType) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            class_type,
            is_vault: false,
        }
    }

    /// Creates the vault store.
    pub fn vault() -> Self {
        Self {
            id: VAULT_ID.to_string(),
            name: "Vault".to_string(),
            class_type: ClassType::Unknown,
            is_vault: true,
        }
    }
}

/// Character class restriction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassType {
    Titan,
    Hunter,
    Warlock,
    /// No class restriction.
    #[default]
    Unknown,
}

impl ClassType {
    /// Returns true if a character of class `store` may equip an item of this class.
    pub fn usable_by(&self, store: &Store) -> bool {
        !store.is_vault && (*self == ClassType::Unknown || *self == store.class_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vault_store() {
        let vault = Store::vault();
        assert_eq!(vault.id, VAULT_ID);
        assert!(vault.is_vault);
    }

    #[test]
    fn test_usable_by() {
        let hunter = Store::character("c1", ClassType::Hunter);
        assert!(ClassType::Hunter.usable_by(&hunter));
        assert!(ClassType::Unknown.usable_by(&hunter));
        assert!(!ClassType::Titan.usable_by(&hunter));
        assert!(!ClassType::Unknown.usable_by(&Store::vault()));
    }

    #[test]
    fn test_class_type_serde() {
        let class: ClassType = serde_json::from_str("\"warlock\"").unwrap();
        assert_eq!(class, ClassType::Warlock);
        assert_eq!(serde_json::to_string(&ClassType::Titan).unwrap(), "\"titan\"");
    }
}
