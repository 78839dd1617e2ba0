//! Static vocabulary used by filters.
//!
//! The [`Lexicon`] holds the word tables that filters consult: season names
//! that stand in for season numbers inside range values (`season:<=forge`),
//! masterwork stat names, energy element names, and the final season of each
//! power cap. The built-in tables can be replaced by a JSON document.

use std::borrow::Cow;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use gear_model_rs::EnergyType;
use serde::{Deserialize, Serialize};

use crate::error::{SearchError, SearchResult};
use crate::range::split_operator;

const SEASON_TAGS: &[(&str, u32)] = &[
    ("red", 1),
    ("osiris", 2),
    ("warmind", 3),
    ("forsaken", 4),
    ("forge", 5),
    ("drifter", 6),
    ("opulence", 7),
    ("undying", 8),
    ("dawn", 9),
    ("worthy", 10),
    ("arrivals", 11),
    ("hunt", 12),
    ("chosen", 13),
    ("splicer", 14),
    ("lost", 15),
];

const STAT_HASHES: &[(&str, u32)] = &[
    ("mobility", 2996146975),
    ("resilience", 392767087),
    ("recovery", 1943323491),
    ("discipline", 1735777505),
    ("intellect", 144602215),
    ("strength", 4244567218),
    ("accuracy", 1591432999),
    ("blastradius", 3614673599),
    ("chargetime", 2961396640),
    ("drawtime", 447667954),
    ("handling", 943549884),
    ("impact", 4043523819),
    ("range", 1240592695),
    ("reload", 4188031367),
    ("stability", 155624089),
    ("velocity", 2523465841),
];

const ENERGY_NAMES: &[(&str, EnergyType)] = &[
    ("any", EnergyType::Any),
    ("arc", EnergyType::Arc),
    ("solar", EnergyType::Solar),
    ("void", EnergyType::Void),
];

const POWER_CAP_FINAL_SEASONS: &[(u32, u32)] = &[(1060, 11), (1260, 12), (1310, 14), (1360, 15)];

/// Word tables consulted by filter definitions.
///
/// Keys are stored lowercase; lookups are case-insensitive.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Lexicon {
    /// Season name to season number.
    #[serde(default)]
    pub seasons: HashMap<String, u32>,

    /// Stat name to stat hash.
    #[serde(default)]
    pub stats: HashMap<String, u32>,

    /// Element name to energy type.
    #[serde(default)]
    pub energies: HashMap<String, EnergyType>,

    /// Power cap to the last season in which it is current.
    #[serde(default)]
    pub power_caps: HashMap<u32, u32>,
}

impl Lexicon {
    /// Returns the built-in tables.
    pub fn builtin() -> Self {
        Self {
            seasons: SEASON_TAGS
                .iter()
                .map(|(name, season)| (name.to_string(), *season))
                .collect(),
            stats: STAT_HASHES
                .iter()
                .map(|(name, hash)| (name.to_string(), *hash))
                .collect(),
            energies: ENERGY_NAMES
                .iter()
                .map(|(name, energy)| (name.to_string(), *energy))
                .collect(),
            power_caps: POWER_CAP_FINAL_SEASONS.iter().copied().collect(),
        }
    }

    /// Parses a lexicon from JSON, normalizing keys to lowercase.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::Lexicon` if the document is malformed.
    pub fn from_json(content: &str) -> SearchResult<Self> {
        let raw: Lexicon =
            serde_json::from_str(content).map_err(|e| SearchError::Lexicon(e.to_string()))?;
        Ok(raw.normalized())
    }

    /// Loads a lexicon from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns `SearchError::Lexicon` if the file cannot be read or parsed.
    pub fn load(path: &Path) -> SearchResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| SearchError::Lexicon(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&content)
    }

    fn normalized(self) -> Self {
        fn lower<V>(map: HashMap<String, V>) -> HashMap<String, V> {
            map.into_iter()
                .map(|(k, v)| (k.to_lowercase(), v))
                .collect()
        }
        Self {
            seasons: lower(self.seasons),
            stats: lower(self.stats),
            energies: lower(self.energies),
            power_caps: self.power_caps,
        }
    }

    /// Looks up a season number by name.
    pub fn season_number(&self, name: &str) -> Option<u32> {
        self.seasons.get(&name.to_lowercase()).copied()
    }

    /// Looks up a stat hash by name.
    pub fn stat_hash(&self, name: &str) -> Option<u32> {
        self.stats.get(&name.to_lowercase()).copied()
    }

    /// Looks up an energy type by element name.
    pub fn energy_type(&self, name: &str) -> Option<EnergyType> {
        self.energies.get(&name.to_lowercase()).copied()
    }

    /// Returns the final season of items with the given power cap.
    pub fn final_season(&self, power_cap: u32) -> Option<u32> {
        self.power_caps.get(&power_cap).copied()
    }

    /// Replaces a season name in a range value with its number.
    ///
    /// Turns `<=forge` into `<=5`. Only applies when everything after the
    /// operator prefix is a single alphabetic word found in the season table;
    /// anything else (numbers, unknown words, mixed tails like `5forge`) is
    /// returned unchanged for the range parser to accept or reject.
    pub fn substitute_season<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let trimmed = text.trim();
        let (_, word) = split_operator(trimmed);
        let word = word.trim();

        if word.is_empty() || !word.chars().all(|c| c.is_ascii_alphabetic()) {
            return Cow::Borrowed(text);
        }

        match self.season_number(word) {
            Some(season) => {
                let prefix = &trimmed[..trimmed.len() - word.len()];
                Cow::Owned(format!("{}{}", prefix.trim_end(), season))
            }
            None => Cow::Borrowed(text),
        }
    }
}
