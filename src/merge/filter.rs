//! Key-predicate projection over ordered maps

use std::collections::BTreeMap;

/// Keep the entries whose key satisfies `predicate`, leaving keys unchanged.
pub fn filter_keys<K, V, P>(mapping: &BTreeMap<K, V>, predicate: P) -> BTreeMap<K, V>
where
    K: Ord + Clone,
    V: Clone,
    P: Fn(&K) -> bool,
{
    filter_map_keys(mapping, predicate, K::clone)
}

/// Keep the entries whose key satisfies `predicate` and rename each kept key
/// with `transform`.
///
/// Entries are visited in the map's key order, so when two kept keys transform
/// to the same new key the later one overwrites the earlier one.
pub fn filter_map_keys<K, K2, V, P, T>(
    mapping: &BTreeMap<K, V>,
    predicate: P,
    transform: T,
) -> BTreeMap<K2, V>
where
    K: Ord,
    K2: Ord,
    V: Clone,
    P: Fn(&K) -> bool,
    T: Fn(&K) -> K2,
{
    mapping
        .iter()
        .filter(|(key, _)| predicate(key))
        .map(|(key, value)| (transform(key), value.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapping(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_filter_keeps_matching_keys() {
        let input = mapping(&[("a@x", "1"), ("b", "2"), ("c@y", "3")]);
        let kept = filter_keys(&input, |k| k.contains('@'));
        assert_eq!(kept, mapping(&[("a@x", "1"), ("c@y", "3")]));
    }

    #[test]
    fn test_filter_renames_kept_keys() {
        let input = mapping(&[("a@x", "1"), ("b@y", "2")]);
        let kept = filter_map_keys(&input, |k| k.ends_with('x'), |k| k.replace("@x", ""));
        assert_eq!(kept, mapping(&[("a", "1")]));
    }

    #[test]
    fn test_colliding_renames_last_in_order_wins() {
        let input = mapping(&[("a@1", "first"), ("a@2", "second")]);
        let kept = filter_map_keys(&input, |_| true, |k| k[..1].to_string());
        assert_eq!(kept, mapping(&[("a", "second")]));
    }

    #[test]
    fn test_empty_mapping() {
        let input: BTreeMap<String, String> = BTreeMap::new();
        assert!(filter_keys(&input, |_| true).is_empty());
    }
}
