//! Broken `Encode` implementations are programmer errors and panic instead
//! of returning a `CodingError`.

use treecodec::{Node, TreeDecoder, encode};

use crate::helpers::*;

#[test]
#[should_panic(expected = "requested a second container")]
fn test_second_container_panics() {
    let _ = encode(&TwoContainers);
}

#[test]
#[should_panic(expected = "was never written")]
fn test_unwritten_single_value_panics() {
    let _ = encode(&NeverWritten);
}

#[test]
#[should_panic(expected = "did not request a container")]
fn test_missing_container_panics() {
    let _ = encode(&vec![NoContainer]);
}

#[test]
#[should_panic(expected = "at most one container")]
fn test_second_decode_container_panics() {
    let node = Node::empty_map();
    let decoder = TreeDecoder::new();
    let _: Result<Twice, _> = decoder.decode(&node);
}

#[test]
fn test_failed_container_request_can_be_retried() {
    let node = Node::from(vec![Node::from(1i64)]);
    let value: Twice = TreeDecoder::new().decode(&node).unwrap();
    assert_eq!(value.0, 1);
}

/// Tries the map shape first, then a sequence of one element.
#[derive(Debug)]
struct Twice(i64);

impl treecodec::Decode for Twice {
    fn decode(decoder: &mut treecodec::Decoder<'_>) -> treecodec::Result<Self> {
        if decoder.keyed_container().is_ok() {
            // Asking again after a successful request is a contract violation.
            decoder.keyed_container()?;
            unreachable!();
        }
        let mut seq = decoder.unkeyed_container()?;
        Ok(Twice(seq.decode()?))
    }
}
