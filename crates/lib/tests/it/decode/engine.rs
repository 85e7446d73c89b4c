use std::collections::{BTreeMap, VecDeque};

use treecodec::{CodingConfig, Node, TreeDecoder, decode};

use crate::helpers::*;

#[test]
fn test_scalar_field() {
    let node = map([("count", Node::from(5i64))]);
    assert_eq!(decode::<Counter>(&node).unwrap(), Counter { count: 5 });
}

#[test]
fn test_integer_widths_are_interchangeable_in_range() {
    let node = map([("count", Node::from(5u8))]);
    assert_eq!(decode::<Counter>(&node).unwrap().count, 5);

    let node = map([("count", Node::from(u64::MAX))]);
    let err = decode::<Counter>(&node).unwrap_err();
    assert!(err.is_data_corrupted());
    assert_eq!(err.path().to_string(), "count");
}

#[test]
fn test_shape_mismatch_at_root() {
    let err = decode::<Counter>(&Node::empty_sequence()).unwrap_err();
    assert!(err.is_type_mismatch());
    assert_eq!(err.description(), "expected map, found sequence");
    assert!(err.path().is_empty());
}

#[test]
fn test_missing_required_key() {
    let node = map([("x", Node::from(1i64))]);
    let err = decode::<Point>(&node).unwrap_err();
    assert!(err.is_key_not_found());
    assert_eq!(err.key().map(|k| k.as_str()), Some("y"));
}

#[test]
fn test_extra_keys_are_ignored() {
    let node = map([
        ("count", Node::from(2i64)),
        ("unrelated", Node::from("x")),
    ]);
    assert_eq!(decode::<Counter>(&node).unwrap().count, 2);
}

#[test]
fn test_nested_records_and_maps() {
    let node = map([
        ("owner", Node::from("w")),
        (
            "items",
            Node::from(vec![map([
                ("sku", Node::from("a")),
                ("price", Node::from("0.5")),
                ("dims", Node::from(vec![Node::from(1u32), Node::from(2u32)])),
            ])]),
        ),
        ("stock", map([("a", Node::from(9i64))])),
    ]);

    let inventory = decode::<Inventory>(&node).unwrap();
    assert_eq!(inventory.owner, "w");
    assert_eq!(inventory.items.len(), 1);
    assert_eq!(inventory.items[0].dims, (1, 2));
    assert_eq!(inventory.items[0].link, None);
    assert_eq!(inventory.items[0].price.to_string(), "0.5");
    assert_eq!(inventory.stock.get("a"), Some(&9));
}

#[test]
fn test_super_decoder_for_key() {
    let node = map([
        ("visible", Node::from(false)),
        ("base", map([("x", Node::from(1i64)), ("y", Node::from(2i64))])),
    ]);
    let labeled = decode::<Labeled>(&node).unwrap();
    assert_eq!(labeled.base.x, 1);
    assert!(!labeled.visible);

    let node = map([("visible", Node::from(false))]);
    let err = decode::<Labeled>(&node).unwrap_err();
    assert!(err.is_type_mismatch());
    assert_eq!(err.path().to_string(), "base");
    assert_eq!(err.description(), "expected map, found null");
}

#[test]
fn test_collections() {
    let node = Node::from(vec![Node::from(1i64), Node::from(2i64)]);
    assert_eq!(
        decode::<VecDeque<i32>>(&node).unwrap(),
        VecDeque::from([1, 2])
    );

    let node = map([("k", Node::from(vec![Node::from(true)]))]);
    let decoded: BTreeMap<String, Vec<bool>> = decode(&node).unwrap();
    assert_eq!(decoded["k"], vec![true]);
}

#[test]
fn test_user_info_reaches_nested_decoders() {
    let config = CodingConfig::new().with_user_info("version", 7i64);
    let decoder = TreeDecoder::with_config(config);

    let node = Node::from(vec![Node::null()]);
    let probes: Vec<VersionProbe> = decoder.decode(&node).unwrap();
    assert_eq!(probes, vec![VersionProbe(Some(7))]);
}

#[test]
fn test_input_node_is_not_modified() {
    let node = crate::helpers::assert_roundtrip(&sample_inventory());
    let copy = node.clone();
    let _ = decode::<Inventory>(&node).unwrap();
    assert_eq!(node, copy);
}
