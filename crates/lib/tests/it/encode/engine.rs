use std::collections::HashMap;

use treecodec::{CodingConfig, Node, Scalar, TreeEncoder, encode};

use crate::helpers::*;

#[test]
fn test_scalar_field() {
    let node = encode(&Counter { count: 5 }).unwrap();
    assert_eq!(node, map([("count", Node::from(5i64))]));
    assert_eq!(node.to_string(), r#"{"count":5}"#);
}

#[test]
fn test_optional_field_is_omitted() {
    let node = encode(&Point {
        x: 1,
        y: 2,
        label: None,
    })
    .unwrap();
    assert_eq!(node.len(), 2);
    assert!(node.get("label").is_none());

    let node = encode(&Point {
        x: 1,
        y: 2,
        label: Some("origin".into()),
    })
    .unwrap();
    assert_eq!(node.get("label"), Some(&Node::from("origin")));
}

#[test]
fn test_explicit_none_outside_if_present_is_null() {
    let values: Vec<Option<u8>> = vec![Some(1), None];
    let node = encode(&values).unwrap();
    assert_eq!(node, Node::from(vec![Node::from(1u8), Node::null()]));
}

#[test]
fn test_nested_sequence_of_records() {
    let node = encode(&sample_inventory()).unwrap();

    let items = node.get("items").and_then(Node::as_sequence).unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].get("sku"), Some(&Node::from("bolt")));
    assert_eq!(items[0].get("price"), Some(&Node::from("19.99")));
    assert_eq!(
        items[0].get("dims"),
        Some(&Node::from(vec![Node::from(4u32), Node::from(2u32)]))
    );
    assert!(items[1].get("link").is_none());

    let stock = node.get("stock").unwrap();
    assert_eq!(stock.get("nut"), Some(&Node::from(0u32)));
}

#[test]
fn test_hashmap_keys_become_map_keys() {
    let mut scores: HashMap<&str, i16> = HashMap::new();
    scores.insert("alice", 3);
    scores.insert("bob", -1);
    let node = encode(&scores).unwrap();
    assert_eq!(node.get("bob"), Some(&Node::Scalar(Scalar::I16(-1))));
    assert_eq!(node.len(), 2);
}

#[test]
fn test_empty_collections() {
    assert_eq!(encode(&Vec::<i64>::new()).unwrap(), Node::empty_sequence());
    assert_eq!(
        encode(&HashMap::<String, i64>::new()).unwrap(),
        Node::empty_map()
    );
}

#[test]
fn test_invalid_value_carries_path() {
    let values = vec![NonNegative(1), NonNegative(-4)];
    let err = encode(&values).unwrap_err();
    assert!(err.is_invalid_value());
    assert_eq!(err.path().to_string(), "1");
    assert_eq!(err.description(), "-4 is negative");
}

#[test]
fn test_user_info_reaches_nested_encoders() {
    let config = CodingConfig::new().with_user_info("version", 3i64);
    let encoder = TreeEncoder::with_config(config);

    let node = encoder.encode(&vec![VersionProbe(None)]).unwrap();
    assert_eq!(node, Node::from(vec![Node::from(3i64)]));

    let node = encode(&VersionProbe(None)).unwrap();
    assert!(node.is_null());
}

#[test]
fn test_encoder_is_reusable() {
    let encoder = TreeEncoder::new();
    let first = encoder.encode(&Counter { count: 1 }).unwrap();
    let second = encoder.encode(&Counter { count: 2 }).unwrap();
    assert_ne!(first, second);
    assert_eq!(first.get("count"), Some(&Node::from(1i64)));
}
