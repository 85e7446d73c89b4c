//! The Node model and its serde bridge.

use serde_json::json;
use treecodec::{CodingConfig, Node, NodeKind, Scalar, decode, encode};

use crate::helpers::*;

#[test]
fn test_node_accessors() {
    let node = map([
        ("list", Node::from(vec![Node::from(1i64), Node::null()])),
        ("name", Node::from("n")),
    ]);
    assert_eq!(node.kind(), NodeKind::Map);
    assert!(node.is_branch());
    assert_eq!(node.len(), 2);

    let list = node.get("list").unwrap();
    assert_eq!(list.kind(), NodeKind::Sequence);
    assert_eq!(list.index(0).and_then(Node::as_i64), Some(1));
    assert!(list.index(1).unwrap().is_null());
    assert!(list.index(2).is_none());

    let name = node.get("name").unwrap();
    assert_eq!(name.kind(), NodeKind::Scalar);
    assert_eq!(name.as_scalar(), Some(&Scalar::String("n".into())));
    assert_eq!(*name, "n");
}

#[test]
fn test_encoded_tree_serializes_to_json() {
    let node = encode(&sample_inventory()).unwrap();
    let value = serde_json::to_value(&node).unwrap();
    assert_eq!(
        value,
        json!({
            "owner": "warehouse-1",
            "items": [
                {
                    "sku": "bolt",
                    "price": "19.99",
                    "link": "https://shop.example/bolt",
                    "dims": [4, 2]
                },
                {
                    "sku": "nut",
                    "price": "19.99",
                    "dims": [4, 2]
                }
            ],
            "stock": { "bolt": 120, "nut": 0 }
        })
    );
}

#[test]
fn test_json_text_decodes_into_records() {
    let text = r#"{"a": [{"b": 1}, {"b": -2}]}"#;
    let node: Node = serde_json::from_str(text).unwrap();
    let outer = decode::<Outer>(&node).unwrap();
    assert_eq!(outer.a[1].b, -2);
}

#[test]
fn test_json_null_is_the_null_marker() {
    let node: Node = serde_json::from_str(r#"{"label": null, "x": 1, "y": 2}"#).unwrap();
    assert!(node.get("label").unwrap().is_null());
    let point = decode::<Point>(&node).unwrap();
    assert_eq!(point.label, None);
}

#[test]
fn test_json_integers_come_back_as_i64() {
    let node: Node = serde_json::from_str("[1, 18446744073709551615, 1.5]").unwrap();
    assert_eq!(node.index(0), Some(&Node::Scalar(Scalar::I64(1))));
    assert_eq!(node.index(1), Some(&Node::Scalar(Scalar::U64(u64::MAX))));
    assert_eq!(node.index(2), Some(&Node::Scalar(Scalar::F64(1.5))));
}

#[test]
fn test_config_serializes_user_info() {
    let config = CodingConfig::new().with_user_info("schema", 2i64);
    let value = serde_json::to_value(&config).unwrap();
    assert_eq!(value, json!({ "user_info": { "schema": 2 } }));

    let back: CodingConfig = serde_json::from_value(value).unwrap();
    assert_eq!(back, config);

    let empty: CodingConfig = serde_json::from_str("{}").unwrap();
    assert!(empty.user_info.is_empty());
    assert_eq!(serde_json::to_string(&empty).unwrap(), "{}");
}

#[test]
fn test_display_is_compact_json() {
    let node = map([("q", Node::from("say \"hi\"")), ("n", Node::null())]);
    assert_eq!(node.to_string(), r#"{"n":null,"q":"say \"hi\""}"#);
    let parsed: serde_json::Value = serde_json::from_str(&node.to_string()).unwrap();
    assert_eq!(parsed["q"], "say \"hi\"");
}
