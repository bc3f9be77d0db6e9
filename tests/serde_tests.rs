//! Serde support tests for Collection, OrderedMap and GenerateConfig.

#![cfg(feature = "serde")]

use fluent_collection::collection::{Collection, Nested, OrderedMap};
use fluent_collection::generate::{DEFAULT_MAX_ITEMS, GenerateConfig};
use rstest::rstest;

#[rstest]
fn test_collection_serializes_as_ordered_map() {
    let collection: Collection<String, i32> = [("zeta".to_string(), 1), ("alpha".to_string(), 2)]
        .into_iter()
        .collect();
    let json = serde_json::to_string(&collection).unwrap();
    assert_eq!(json, r#"{"zeta":1,"alpha":2}"#);
}

#[rstest]
fn test_collection_roundtrip_keeps_order() {
    let json = r#"{"b":[1,2],"a":[],"c":[3]}"#;
    let collection: Collection<String, Vec<i32>> = serde_json::from_str(json).unwrap();

    let keys: Vec<&str> = collection.iter().map(|(key, _)| key.as_str()).collect();
    assert_eq!(keys, vec!["b", "a", "c"]);
    assert_eq!(serde_json::to_string(&collection).unwrap(), json);
}

#[rstest]
fn test_grouped_collection_serializes_nested() {
    let groups = Collection::from_sequence(["a", "bb", "cc"]).group_by(|word| word.len());
    let json = serde_json::to_string(&groups).unwrap();
    assert_eq!(json, r#"{"1":{"0":"a"},"2":{"1":"bb","2":"cc"}}"#);
}

#[rstest]
fn test_ordered_map_deserialize_duplicate_keys_keeps_last_value() {
    let map: OrderedMap<String, i32> = serde_json::from_str(r#"{"x":1,"y":2,"x":3}"#).unwrap();
    assert_eq!(map.get("x"), Some(&3));
    assert_eq!(map.keys().next().map(String::as_str), Some("x"));
}

#[rstest]
fn test_nested_is_untagged() {
    let value: Vec<Nested<i32>> = serde_json::from_str("[1,[2,[3]],4]").unwrap();
    let flat = Collection::from_sequence(value).flatten();
    let leaves: Vec<i32> = flat.iter().map(|(_, leaf)| *leaf).collect();
    assert_eq!(leaves, vec![1, 2, 3, 4]);
}

#[rstest]
#[case("{}", DEFAULT_MAX_ITEMS)]
#[case(r#"{"max_items":25}"#, 25)]
fn test_generate_config_deserialize(#[case] json: &str, #[case] expected: usize) {
    let config: GenerateConfig = serde_json::from_str(json).unwrap();
    assert_eq!(config.max_items, expected);
}
