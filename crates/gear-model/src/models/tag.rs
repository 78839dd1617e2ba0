//! User tags.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// A user-assigned item tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagValue {
    Favorite,
    Keep,
    Junk,
    Infuse,
    Archive,
}

impl TagValue {
    /// All tags, in display order.
    pub const ALL: [TagValue; 5] = [
        TagValue::Favorite,
        TagValue::Keep,
        TagValue::Junk,
        TagValue::Infuse,
        TagValue::Archive,
    ];

    /// Returns the lowercase tag name.
    pub fn as_str(&self) -> &'static str {
        match self {
            TagValue::Favorite => "favorite",
            TagValue::Keep => "keep",
            TagValue::Junk => "junk",
            TagValue::Infuse => "infuse",
            TagValue::Archive => "archive",
        }
    }
}

impl fmt::Display for TagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TagValue {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        TagValue::ALL
            .into_iter()
            .find(|tag| tag.as_str() == lower)
            .ok_or_else(|| ModelError::UnknownTag(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tag_case_insensitive() {
        assert_eq!("junk".parse::<TagValue>().unwrap(), TagValue::Junk);
        assert_eq!("Favorite".parse::<TagValue>().unwrap(), TagValue::Favorite);
    }

    #[test]
    fn test_parse_unknown_tag() {
        let err = "shiny".parse::<TagValue>().unwrap_err();
        assert!(matches!(err, ModelError::UnknownTag(ref t) if t == "shiny"));
    }

    #[test]
    fn test_display_matches_serde() {
        for tag in TagValue::ALL {
            let json = serde_json::to_string(&tag).unwrap();
            assert_eq!(json, format!("\"{}\"", tag));
        }
    }
}
