//! Tests for the registry and built-in filter definitions.

use gear_model_rs::{
    Bucket, ClassType, Energy, EnergyType, Item, MasterworkInfo, Store, TagValue,
};

use super::*;

// ==================== Test Helpers ====================

fn make_item(id: &str, hash: u32) -> Item {
    Item {
        id: id.to_string(),
        hash,
        name: format!("Item {id}"),
        type_name: "Auto Rifle".to_string(),
        bucket: Bucket {
            hash: 1,
            name: "Kinetic Weapons".to_string(),
            account_wide: false,
        },
        owner: "vault".to_string(),
        in_postmaster: false,
        class_type: ClassType::Unknown,
        classified: false,
        power: None,
        power_cap: None,
        season: None,
        masterwork: None,
        energy: None,
        lockable: true,
        locked: false,
        taggable: true,
        tag: None,
    }
}

fn registry() -> Registry {
    Registry::builtin(Lexicon::builtin()).unwrap()
}

fn check(registry: &Registry, keyword: &str, value: &str, item: &Item) -> bool {
    let context = SearchContext::default();
    check_in(registry, keyword, value, item, &context)
}

fn check_in(
    registry: &Registry,
    keyword: &str,
    value: &str,
    item: &Item,
    context: &SearchContext<'_>,
) -> bool {
    let definition = registry.resolve(keyword).unwrap();
    registry
        .prepare(definition, value)
        .unwrap()
        .matches(item, context)
}

fn three_characters() -> Vec<Store> {
    vec![
        Store::character("titan", ClassType::Titan),
        Store::character("hunter", ClassType::Hunter),
        Store::character("warlock", ClassType::Warlock),
        Store::vault(),
    ]
}

// ==================== Registry Construction ====================

#[test]
fn test_builtin_registry_builds() {
    let registry = registry();
    assert!(registry.definitions().len() >= 10);
}

#[test]
fn test_resolve_case_insensitive() {
    let registry = registry();
    assert!(registry.resolve("season").is_some());
    assert!(registry.resolve("SEASON").is_some());
    assert!(registry.resolve("Masterwork").is_some());
}

#[test]
fn test_resolve_exact_only() {
    let registry = registry();
    assert!(registry.resolve("seas").is_none());
    assert!(registry.resolve("seasons").is_none());
}

#[test]
fn test_aliases_share_definition() {
    let registry = registry();
    let dupe = registry.resolve("dupe").unwrap();
    let duplicate = registry.resolve("duplicate").unwrap();
    assert_eq!(dupe.name(), duplicate.name());
}

#[test]
fn test_duplicate_keyword_rejected() {
    let mut definitions = builtin_definitions();
    definitions.push(FilterDefinition {
        keywords: &["Season"],
        description: "shadow",
        kind: FilterKind::Attribute {
            standalone: true,
            values: &[],
            matches: |_, _, _| true,
        },
    });
    let err = Registry::new(definitions, Lexicon::builtin()).unwrap_err();
    assert_eq!(err, SearchError::DuplicateKeyword("season".to_string()));
}

#[test]
fn test_duplicate_is_value_rejected() {
    let mut definitions = builtin_definitions();
    definitions.push(FilterDefinition {
        keywords: &["vaultcheck"],
        description: "shadow",
        kind: FilterKind::Attribute {
            standalone: true,
            values: &["invault"],
            matches: |_, _, _| true,
        },
    });
    let err = Registry::new(definitions, Lexicon::builtin()).unwrap_err();
    assert_eq!(err, SearchError::DuplicateKeyword("invault".to_string()));
}

#[test]
fn test_reserved_keyword_rejected() {
    let definitions = vec![FilterDefinition {
        keywords: &["is"],
        description: "reserved",
        kind: FilterKind::Attribute {
            standalone: true,
            values: &[],
            matches: |_, _, _| true,
        },
    }];
    let err = Registry::new(definitions, Lexicon::builtin()).unwrap_err();
    assert_eq!(err, SearchError::ReservedKeyword("is".to_string()));
}

#[test]
fn test_formats() {
    let registry = registry();
    assert_eq!(registry.resolve("location").unwrap().format(), ValueFormat::Attribute);
    assert_eq!(registry.resolve("season").unwrap().format(), ValueFormat::Range);
    assert_eq!(
        registry.resolve("masterwork").unwrap().format(),
        ValueFormat::RangeOverload
    );
}

#[test]
fn test_resolve_is_by_keyword_and_value() {
    let registry = registry();
    assert_eq!(registry.resolve_is("dupe").unwrap().name(), "dupe");
    assert_eq!(registry.resolve_is("inleftchar").unwrap().name(), "location");
    assert_eq!(registry.resolve_is("InVault").unwrap().name(), "owner");
    assert!(registry.resolve_is("season").is_none());
}

#[test]
fn test_resolve_is_skips_keywords_needing_a_value() {
    let registry = registry();
    assert_eq!(registry.resolve_is("tagged").unwrap().name(), "tagged");
    assert!(registry.resolve_is("tag").is_none());
    assert!(registry.resolve_is("location").is_none());
    assert!(registry.resolve_is("owner").is_none());
    assert!(registry.resolve_is("name").is_none());
}

#[test]
fn test_suggest_close_keyword() {
    let registry = registry();
    assert_eq!(registry.suggest("seasn"), Some("season".to_string()));
    assert_eq!(registry.suggest("masterwrk"), Some("masterwork".to_string()));
    assert_eq!(registry.suggest("season"), None);
    assert_eq!(registry.suggest("zzzzzzzz"), None);
}

// ==================== Range Filters ====================

#[test]
fn test_season_number_and_word_are_equivalent() {
    let registry = registry();
    let mut item = make_item("1", 1);
    item.season = Some(5);

    assert!(check(&registry, "season", "5", &item));
    assert!(check(&registry, "season", "forge", &item));

    item.season = Some(6);
    assert!(!check(&registry, "season", "5", &item));
    assert!(!check(&registry, "season", "forge", &item));
}

#[test]
fn test_season_word_with_operator() {
    let registry = registry();
    let mut item = make_item("1", 1);
    item.season = Some(4);
    assert!(check(&registry, "season", "<=forge", &item));
    assert!(!check(&registry, "season", ">forge", &item));
}

#[test]
fn test_season_missing_field_never_matches() {
    let registry = registry();
    let item = make_item("1", 1);
    assert!(!check(&registry, "season", ">=0", &item));
    assert!(!check(&registry, "season", "<100", &item));
}

#[test]
fn test_season_unknown_word_is_parse_error() {
    let registry = registry();
    let definition = registry.resolve("season").unwrap();
    assert!(matches!(
        registry.prepare(definition, "zzz"),
        Err(SearchError::InvalidRange { .. })
    ));
    assert!(matches!(
        registry.prepare(definition, "5forge"),
        Err(SearchError::InvalidRange { .. })
    ));
}

#[test]
fn test_sunsetsafter_uses_final_season() {
    let registry = registry();
    let mut item = make_item("1", 1);
    item.power_cap = Some(1060);

    assert!(check(&registry, "sunsetsafter", "arrivals", &item));
    assert!(check(&registry, "sunsetsafter", "<hunt", &item));
    assert!(!check(&registry, "sunsetsafter", ">=hunt", &item));
}

#[test]
fn test_sunsetsafter_unknown_cap_is_season_zero() {
    let registry = registry();
    let mut item = make_item("1", 1);
    assert!(check(&registry, "sunsetsafter", "0", &item));

    item.power_cap = Some(999_990);
    assert!(check(&registry, "sunsetsafter", "<1", &item));
}

#[test]
fn test_power_range() {
    let registry = registry();
    let mut item = make_item("1", 1);
    item.power = Some(1310);
    assert!(check(&registry, "power", ">=1300", &item));
    assert!(check(&registry, "light", "1310", &item));
    assert!(!check(&registry, "power", "<1300", &item));
}

// ==================== Overloaded Filters ====================

#[test]
fn test_masterwork_tier_clamped_to_cap() {
    let registry = registry();
    let mut item = make_item("1", 1);
    item.masterwork = Some(MasterworkInfo {
        tier: 10,
        stat_hash: None,
    });
    assert!(check(&registry, "masterwork", ">7", &item));

    item.masterwork = Some(MasterworkInfo {
        tier: 5,
        stat_hash: None,
    });
    assert!(!check(&registry, "masterwork", ">7", &item));
}

#[test]
fn test_masterwork_tier_above_cap_compares_as_cap() {
    let registry = registry();
    let mut item = make_item("1", 1);
    item.masterwork = Some(MasterworkInfo {
        tier: 12,
        stat_hash: None,
    });
    assert!(check(&registry, "masterwork", "10", &item));
    assert!(!check(&registry, "masterwork", ">10", &item));
    assert!(!check(&registry, "masterwork", "12", &item));
}

#[test]
fn test_masterwork_tier_zero_never_matches() {
    let registry = registry();
    let mut item = make_item("1", 1);
    item.masterwork = Some(MasterworkInfo {
        tier: 0,
        stat_hash: None,
    });
    assert!(!check(&registry, "masterwork", "<5", &item));
    assert!(!check(&registry, "masterwork", "0", &item));
}

#[test]
fn test_masterwork_stat_name() {
    let registry = registry();
    let handling = registry.lexicon().stat_hash("handling");
    let range = registry.lexicon().stat_hash("range");

    let mut item = make_item("1", 1);
    item.masterwork = Some(MasterworkInfo {
        tier: 3,
        stat_hash: handling,
    });
    assert!(check(&registry, "masterwork", "handling", &item));
    assert!(!check(&registry, "masterwork", "range", &item));

    item.masterwork = Some(MasterworkInfo {
        tier: 10,
        stat_hash: range,
    });
    assert!(!check(&registry, "masterwork", "handling", &item));
}

#[test]
fn test_masterwork_unknown_stat_never_matches() {
    let registry = registry();
    let mut item = make_item("1", 1);
    item.masterwork = Some(MasterworkInfo {
        tier: 10,
        stat_hash: Some(0),
    });
    assert!(!check(&registry, "masterwork", "sparkle", &item));
}

#[test]
fn test_energycapacity_overload() {
    let registry = registry();
    let mut item = make_item("1", 1);
    item.energy = Some(Energy {
        energy_type: EnergyType::Arc,
        capacity: 8,
    });

    assert!(check(&registry, "energycapacity", ">=8", &item));
    assert!(!check(&registry, "energycapacity", ">8", &item));
    assert!(check(&registry, "energycapacity", "arc", &item));
    assert!(!check(&registry, "energycapacity", "void", &item));

    item.energy = None;
    assert!(!check(&registry, "energycapacity", "arc", &item));
    assert!(!check(&registry, "energycapacity", ">=0", &item));
}

#[test]
fn test_energycapacity_word_comes_from_lexicon() {
    let lexicon = Lexicon::from_json(r#"{"energies": {"electric": "arc"}}"#).unwrap();
    let registry = Registry::builtin(lexicon).unwrap();
    let mut item = make_item("1", 1);
    item.energy = Some(Energy {
        energy_type: EnergyType::Arc,
        capacity: 8,
    });

    assert!(check(&registry, "energycapacity", "Electric", &item));
    assert!(!check(&registry, "energycapacity", "arc", &item));
}

// ==================== Attribute Filters ====================

#[test]
fn test_location_by_roster_index() {
    let registry = registry();
    let stores = three_characters();
    let context = SearchContext::new(&stores, &[]);

    let mut item = make_item("1", 1);
    item.owner = "titan".to_string();
    assert!(check_in(&registry, "location", "inleftchar", &item, &context));
    assert!(!check_in(&registry, "location", "inmiddlechar", &item, &context));

    item.owner = "hunter".to_string();
    assert!(check_in(&registry, "location", "inmiddlechar", &item, &context));

    item.owner = "warlock".to_string();
    assert!(check_in(&registry, "location", "inrightchar", &item, &context));
}

#[test]
fn test_location_with_two_characters() {
    let registry = registry();
    let stores = vec![
        Store::character("titan", ClassType::Titan),
        Store::character("hunter", ClassType::Hunter),
        Store::vault(),
    ];
    let context = SearchContext::new(&stores, &[]);

    // Middle falls back to the first character; right is the last character.
    let mut item = make_item("1", 1);
    item.owner = "titan".to_string();
    assert!(check_in(&registry, "location", "inmiddlechar", &item, &context));

    item.owner = "hunter".to_string();
    assert!(check_in(&registry, "location", "inrightchar", &item, &context));
}

#[test]
fn test_location_account_wide_items() {
    let registry = registry();
    let stores = three_characters();
    let context = SearchContext::new(&stores, &[]);

    let mut item = make_item("1", 1);
    item.bucket.account_wide = true;
    item.owner = "hunter".to_string();
    assert!(check_in(&registry, "location", "inleftchar", &item, &context));

    item.owner = "vault".to_string();
    assert!(!check_in(&registry, "location", "inleftchar", &item, &context));
}

#[test]
fn test_location_unknown_value_or_empty_roster() {
    let registry = registry();
    let stores = three_characters();
    let context = SearchContext::new(&stores, &[]);

    let mut item = make_item("1", 1);
    item.owner = "titan".to_string();
    assert!(!check_in(&registry, "location", "inbackpack", &item, &context));

    // No stores: index 0 is out of range.
    assert!(!check(&registry, "location", "inleftchar", &item));
}

#[test]
fn test_owner_filter() {
    let registry = registry();
    let stores = three_characters();
    let context = SearchContext::new(&stores, &[]).with_current_store(Some("hunter"));

    let mut item = make_item("1", 1);
    assert!(check_in(&registry, "owner", "invault", &item, &context));
    assert!(!check_in(&registry, "owner", "incurrentchar", &item, &context));

    item.owner = "hunter".to_string();
    assert!(check_in(&registry, "owner", "incurrentchar", &item, &context));
    assert!(!check_in(&registry, "owner", "elsewhere", &item, &context));

    let no_current = SearchContext::new(&stores, &[]);
    assert!(!check_in(&registry, "owner", "incurrentchar", &item, &no_current));
}

#[test]
fn test_on_wrong_class() {
    let registry = registry();
    let stores = three_characters();
    let context = SearchContext::new(&stores, &[]);

    let mut item = make_item("1", 1);
    item.owner = "hunter".to_string();
    item.class_type = ClassType::Titan;
    assert!(check_in(&registry, "onwrongclass", "", &item, &context));

    item.class_type = ClassType::Hunter;
    assert!(!check_in(&registry, "onwrongclass", "", &item, &context));

    item.class_type = ClassType::Unknown;
    assert!(!check_in(&registry, "onwrongclass", "", &item, &context));

    item.class_type = ClassType::Titan;
    item.in_postmaster = true;
    assert!(!check_in(&registry, "onwrongclass", "", &item, &context));

    item.in_postmaster = false;
    item.owner = "vault".to_string();
    assert!(!check_in(&registry, "onwrongclass", "", &item, &context));
}

#[test]
fn test_dupe_uses_collection() {
    let registry = registry();
    let items = vec![make_item("1", 7), make_item("2", 7), make_item("3", 8)];
    let context = SearchContext::new(&[], &items);

    assert!(check_in(&registry, "dupe", "", &items[0], &context));
    assert!(check_in(&registry, "duplicate", "", &items[1], &context));
    assert!(!check_in(&registry, "dupe", "", &items[2], &context));
}

#[test]
fn test_lock_filters() {
    let registry = registry();
    let mut item = make_item("1", 1);
    assert!(check(&registry, "unlocked", "", &item));
    assert!(!check(&registry, "locked", "", &item));

    item.locked = true;
    assert!(check(&registry, "locked", "", &item));
    assert!(!check(&registry, "unlocked", "", &item));

    item.locked = false;
    item.lockable = false;
    assert!(!check(&registry, "unlocked", "", &item));
}

#[test]
fn test_tag_filters() {
    let registry = registry();
    let mut item = make_item("1", 1);
    assert!(check(&registry, "tag", "none", &item));
    assert!(!check(&registry, "tagged", "", &item));

    item.tag = Some(TagValue::Junk);
    assert!(check(&registry, "tag", "junk", &item));
    assert!(check(&registry, "tag", "JUNK", &item));
    assert!(!check(&registry, "tag", "keep", &item));
    assert!(!check(&registry, "tag", "shiny", &item));
    assert!(check(&registry, "tagged", "", &item));
}

#[test]
fn test_name_filter_substring() {
    let registry = registry();
    let mut item = make_item("1", 1);
    item.name = "Ace of Spades".to_string();
    assert!(check(&registry, "name", "spades", &item));
    assert!(check(&registry, "name", "ACE", &item));
    assert!(!check(&registry, "name", "thorn", &item));
}

#[test]
fn test_prepared_matcher_is_reusable() {
    let registry = registry();
    let definition = registry.resolve("power").unwrap();
    let matcher = registry.prepare(definition, ">100").unwrap();
    let context = SearchContext::default();

    let mut low = make_item("1", 1);
    low.power = Some(50);
    let mut high = make_item("2", 2);
    high.power = Some(150);

    for _ in 0..3 {
        assert!(!matcher.matches(&low, &context));
        assert!(matcher.matches(&high, &context));
    }
}
