//! Built-in filter definitions.

use gear_model_rs::{ClassType, Item, TagValue};

use super::{ClauseMatcher, FilterDefinition, FilterKind, Vocabulary};
use crate::context::SearchContext;
use crate::lexicon::Lexicon;

/// Masterwork tiers above this are compared as this.
pub const MASTERWORK_TIER_CAP: f64 = 10.0;

/// Keyword of the filter used for bare free-text words.
pub const FREE_TEXT_KEYWORD: &str = "name";

/// Returns the built-in filter set.
pub fn builtin_definitions() -> Vec<FilterDefinition> {
    vec![
        // ==================== Location ====================
        FilterDefinition {
            keywords: &["location"],
            description: "item is on the left, middle or right character",
            kind: FilterKind::Attribute {
                standalone: false,
                values: &["inleftchar", "inmiddlechar", "inrightchar"],
                matches: location,
            },
        },
        FilterDefinition {
            keywords: &["owner"],
            description: "item is in the vault or on the current character",
            kind: FilterKind::Attribute {
                standalone: false,
                values: &["invault", "incurrentchar"],
                matches: owner,
            },
        },
        FilterDefinition {
            keywords: &["onwrongclass"],
            description: "item is on a character that cannot equip it",
            kind: FilterKind::Attribute {
                standalone: true,
                values: &[],
                matches: on_wrong_class,
            },
        },
        // ==================== State ====================
        FilterDefinition {
            keywords: &["dupe", "duplicate"],
            description: "another copy of the item exists",
            kind: FilterKind::Attribute {
                standalone: true,
                values: &[],
                matches: |item, _, context| context.is_duplicate(item.hash),
            },
        },
        FilterDefinition {
            keywords: &["locked"],
            description: "item is locked",
            kind: FilterKind::Attribute {
                standalone: true,
                values: &[],
                matches: |item, _, _| item.locked,
            },
        },
        FilterDefinition {
            keywords: &["unlocked"],
            description: "item can be locked and is not",
            kind: FilterKind::Attribute {
                standalone: true,
                values: &[],
                matches: |item, _, _| item.lockable && !item.locked,
            },
        },
        FilterDefinition {
            keywords: &["tagged"],
            description: "item has any tag",
            kind: FilterKind::Attribute {
                standalone: true,
                values: &[],
                matches: |item, _, _| item.tag.is_some(),
            },
        },
        FilterDefinition {
            keywords: &["tag"],
            description: "item has the given tag, or none",
            kind: FilterKind::Attribute {
                standalone: false,
                values: &[],
                matches: tag,
            },
        },
        FilterDefinition {
            keywords: &[FREE_TEXT_KEYWORD],
            description: "item name contains the text",
            kind: FilterKind::Attribute {
                standalone: false,
                values: &[],
                matches: |item, value, _| item.name.to_lowercase().contains(value),
            },
        },
        // ==================== Ranges ====================
        FilterDefinition {
            keywords: &["season"],
            description: "item's season of origin, by number or name",
            kind: FilterKind::Range {
                vocabulary: Some(Vocabulary::Seasons),
                extract: |item, _| item.season.map(f64::from),
            },
        },
        FilterDefinition {
            keywords: &["sunsetsafter"],
            description: "last season in which the item's power cap is current",
            kind: FilterKind::Range {
                vocabulary: Some(Vocabulary::Seasons),
                extract: final_season,
            },
        },
        FilterDefinition {
            keywords: &["power", "light"],
            description: "item's power level",
            kind: FilterKind::Range {
                vocabulary: None,
                extract: |item, _| item.power.map(f64::from),
            },
        },
        // ==================== Overloaded ranges ====================
        FilterDefinition {
            keywords: &["masterwork"],
            description: "item's masterwork tier or stat",
            kind: FilterKind::RangeOverload {
                vocabulary: None,
                extract: masterwork_tier,
                cap: Some(MASTERWORK_TIER_CAP),
                symbol: masterwork_stat,
            },
        },
        FilterDefinition {
            keywords: &["energycapacity"],
            description: "item's energy capacity or element",
            kind: FilterKind::RangeOverload {
                vocabulary: None,
                extract: |item, _| item.energy.map(|energy| f64::from(energy.capacity)),
                cap: None,
                symbol: energy_type,
            },
        },
    ]
}

fn location(item: &Item, value: &str, context: &SearchContext<'_>) -> bool {
    let stores = context.stores();
    let index = match value {
        "inleftchar" => 0,
        "inmiddlechar" if stores.len() == 4 => 1,
        "inmiddlechar" => 0,
        "inrightchar" if stores.len() > 2 => stores.len() - 2,
        "inrightchar" => 0,
        _ => return false,
    };

    if item.bucket.account_wide && !item.in_postmaster {
        return !item.in_vault();
    }

    stores.get(index).is_some_and(|store| item.owner == store.id)
}

fn owner(item: &Item, value: &str, context: &SearchContext<'_>) -> bool {
    match value {
        "invault" => item.in_vault(),
        "incurrentchar" => context
            .current_store()
            .is_some_and(|store_id| item.owner == store_id),
        _ => false,
    }
}

fn on_wrong_class(item: &Item, _: &str, context: &SearchContext<'_>) -> bool {
    !item.classified
        && !item.in_vault()
        && !item.bucket.account_wide
        && item.class_type != ClassType::Unknown
        && !item.in_postmaster
        && context
            .store(&item.owner)
            .is_some_and(|store| !item.class_type.usable_by(store))
}

fn tag(item: &Item, value: &str, _: &SearchContext<'_>) -> bool {
    if value == "none" {
        return item.tag.is_none();
    }
    value
        .parse::<TagValue>()
        .is_ok_and(|wanted| item.tag == Some(wanted))
}

fn final_season(item: &Item, lexicon: &Lexicon) -> Option<f64> {
    let season = item
        .power_cap
        .and_then(|cap| lexicon.final_season(cap))
        .unwrap_or(0);
    Some(f64::from(season))
}

fn masterwork_tier(item: &Item, _: &Lexicon) -> Option<f64> {
    let tier = item.masterwork_tier();
    (tier > 0).then(|| f64::from(tier))
}

fn masterwork_stat(word: &str, lexicon: &Lexicon) -> ClauseMatcher {
    let wanted = lexicon.stat_hash(word);
    ClauseMatcher::new(move |item, _| {
        wanted.is_some_and(|hash| {
            item.masterwork
                .and_then(|masterwork| masterwork.stat_hash)
                .is_some_and(|stat_hash| stat_hash == hash)
        })
    })
}

fn energy_type(word: &str, lexicon: &Lexicon) -> ClauseMatcher {
    let wanted = lexicon.energy_type(word);
    ClauseMatcher::new(move |item, _| {
        wanted.is_some_and(|energy_type| {
            item.energy
                .is_some_and(|energy| energy.energy_type == energy_type)
        })
    })
}
