//! Applying predicates to an item collection.

use std::collections::HashSet;

use gear_model_rs::{Inventory, Item};

use crate::context::SearchContext;
use crate::query::CompiledQuery;

/// Returns the items matching `predicate`, in input order.
pub fn filter_items<'a, F>(items: &'a [Item], predicate: F) -> Vec<&'a Item>
where
    F: Fn(&Item) -> bool,
{
    items.iter().filter(|&item| predicate(item)).collect()
}

/// Runs a compiled query over the displayable part of an item collection.
///
/// Items whose bucket is not in `displayable_buckets` are never offered to the
/// query. An empty bucket set means nothing is displayable yet, so the result
/// is empty.
pub fn search_items<'a>(
    items: &'a [Item],
    displayable_buckets: &HashSet<u32>,
    query: &CompiledQuery,
    context: &SearchContext<'_>,
) -> Vec<&'a Item> {
    if displayable_buckets.is_empty() {
        return Vec::new();
    }

    let matched = filter_items(items, |item| {
        displayable_buckets.contains(&item.bucket.hash) && query.matches(item, context)
    });
    tracing::debug!(
        query = query.source(),
        total = items.len(),
        matched = matched.len(),
        "search complete"
    );
    matched
}

/// Runs a compiled query over a whole inventory snapshot.
pub fn search_inventory<'a>(inventory: &'a Inventory, query: &CompiledQuery) -> Vec<&'a Item> {
    let context = SearchContext::from_inventory(inventory);
    search_items(
        &inventory.items,
        &inventory.displayable_buckets,
        query,
        &context,
    )
}

/// Returns true if every item shares one `type_name`.
///
/// Gates side-by-side comparison. False for an empty slice.
pub fn all_same_category(items: &[&Item]) -> bool {
    match items.split_first() {
        Some((first, rest)) => rest.iter().all(|item| item.type_name == first.type_name),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use gear_model_rs::{Bucket, ClassType};

    use super::*;
    use crate::lexicon::Lexicon;
    use crate::query::compile;
    use crate::registry::Registry;

    fn make_item(id: &str, bucket_hash: u32, type_name: &str) -> Item {
        Item {
            id: id.to_string(),
            hash: bucket_hash * 100,
            name: format!("Item {id}"),
            type_name: type_name.to_string(),
            bucket: Bucket {
                hash: bucket_hash,
                name: "Bucket".to_string(),
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

    fn ids(items: &[&Item]) -> Vec<String> {
        items.iter().map(|item| item.id.clone()).collect()
    }

    #[test]
    fn test_filter_items_preserves_order() {
        let items = vec![
            make_item("c", 1, "Scout Rifle"),
            make_item("a", 1, "Scout Rifle"),
            make_item("b", 1, "Scout Rifle"),
        ];
        let result = filter_items(&items, |item| item.id != "a");
        assert_eq!(ids(&result), vec!["c", "b"]);
    }

    #[test]
    fn test_filter_items_cardinality() {
        let items = vec![make_item("1", 1, "Bow"), make_item("2", 1, "Bow")];
        assert_eq!(filter_items(&items, |_| true).len(), 2);
        assert!(filter_items(&items, |_| false).is_empty());
        assert!(filter_items(&[], |_| true).is_empty());
    }

    #[test]
    fn test_search_items_respects_displayable_buckets() {
        let items = vec![make_item("1", 1, "Bow"), make_item("2", 2, "Bow")];
        let registry = Registry::builtin(Lexicon::builtin()).unwrap();
        let query = compile("", &registry);
        let context = SearchContext::new(&[], &items);

        let displayable = HashSet::from([1]);
        let result = search_items(&items, &displayable, &query, &context);
        assert_eq!(ids(&result), vec!["1"]);

        let result = search_items(&items, &HashSet::new(), &query, &context);
        assert!(result.is_empty());
    }

    #[test]
    fn test_search_inventory() {
        let mut locked = make_item("1", 1, "Bow");
        locked.locked = true;
        let inventory = Inventory {
            items: vec![locked, make_item("2", 1, "Bow")],
            displayable_buckets: HashSet::from([1]),
            ..Default::default()
        };
        let registry = Registry::builtin(Lexicon::builtin()).unwrap();
        let query = compile("is:locked", &registry);

        let result = search_inventory(&inventory, &query);
        assert_eq!(ids(&result), vec!["1"]);
    }

    #[test]
    fn test_all_same_category() {
        let bow = make_item("1", 1, "Bow");
        let other_bow = make_item("2", 1, "Bow");
        let sword = make_item("3", 1, "Sword");

        assert!(all_same_category(&[&bow, &other_bow]));
        assert!(all_same_category(&[&sword]));
        assert!(!all_same_category(&[&bow, &sword]));
        assert!(!all_same_category(&[]));
    }
}
