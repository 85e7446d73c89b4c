//! The untyped intermediate tree.
//!
//! A [`Node`] is a map with string keys, an ordered sequence, or a
//! [`Scalar`] leaf. It is what [`encode`](fn@crate::encode) produces and what
//! [`decode`](fn@crate::decode) consumes. Nodes are plain values: surrounding
//! code can build, inspect, and compare them directly, and bridge them into
//! any serde wire format.
//!
//! # Examples
//!
//! ```
//! use treecodec::{Node, Scalar};
//!
//! let node: Node = [
//!     ("count", Node::from(5i64)),
//!     ("tags", Node::from(vec![Node::from("a"), Node::from("b")])),
//! ]
//! .into_iter()
//! .collect();
//!
//! assert_eq!(node.get("count"), Some(&Node::Scalar(Scalar::I64(5))));
//! assert_eq!(node.get("tags").and_then(|t| t.index(1)), Some(&Node::from("b")));
//! assert_eq!(node.to_string(), r#"{"count":5,"tags":["a","b"]}"#);
//! ```

use std::{collections::BTreeMap, fmt};

mod scalar;
mod serialization;

pub use scalar::Scalar;

/// The kind of a [`Node`], used in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Map,
    Sequence,
    Scalar,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Map => write!(f, "map"),
            NodeKind::Sequence => write!(f, "sequence"),
            NodeKind::Scalar => write!(f, "scalar"),
        }
    }
}

/// A value in the untyped tree.
///
/// Map key order carries no meaning; `BTreeMap` keeps iteration and
/// equality deterministic.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// String-keyed mapping
    Map(BTreeMap<String, Node>),
    /// Ordered list
    Sequence(Vec<Node>),
    /// Primitive leaf, including the explicit null marker
    Scalar(Scalar),
}

/// Shared null node handed to decoders for absent positions.
pub(crate) static NULL: Node = Node::Scalar(Scalar::Null);

impl Node {
    /// Returns the explicit null marker.
    pub fn null() -> Self {
        Node::Scalar(Scalar::Null)
    }

    /// Returns an empty map.
    pub fn empty_map() -> Self {
        Node::Map(BTreeMap::new())
    }

    /// Returns an empty sequence.
    pub fn empty_sequence() -> Self {
        Node::Sequence(Vec::new())
    }

    /// Returns the shape of this node
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Map(_) => NodeKind::Map,
            Node::Sequence(_) => NodeKind::Sequence,
            Node::Scalar(_) => NodeKind::Scalar,
        }
    }

    /// Describes this node for diagnostics: `map`, `sequence`, or the
    /// scalar's type name.
    pub fn type_name(&self) -> &'static str {
        match self {
            Node::Map(_) => "map",
            Node::Sequence(_) => "sequence",
            Node::Scalar(scalar) => scalar.type_name(),
        }
    }

    /// Returns true if this is the explicit null marker
    pub fn is_null(&self) -> bool {
        matches!(self, Node::Scalar(Scalar::Null))
    }

    /// Returns true if this is a map or a sequence
    pub fn is_branch(&self) -> bool {
        matches!(self, Node::Map(_) | Node::Sequence(_))
    }

    /// Attempts to view as a map
    pub fn as_map(&self) -> Option<&BTreeMap<String, Node>> {
        match self {
            Node::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Attempts to view as a mutable map
    pub fn as_map_mut(&mut self) -> Option<&mut BTreeMap<String, Node>> {
        match self {
            Node::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Attempts to view as a sequence
    pub fn as_sequence(&self) -> Option<&[Node]> {
        match self {
            Node::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Attempts to view as a mutable sequence
    pub fn as_sequence_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Attempts to view as a scalar
    pub fn as_scalar(&self) -> Option<&Scalar> {
        match self {
            Node::Scalar(scalar) => Some(scalar),
            _ => None,
        }
    }

    /// Attempts to convert to a boolean
    pub fn as_bool(&self) -> Option<bool> {
        self.as_scalar().and_then(Scalar::as_bool)
    }

    /// Attempts to convert to an `i64` from any integer width
    pub fn as_i64(&self) -> Option<i64> {
        self.as_scalar().and_then(Scalar::as_i64)
    }

    /// Attempts to convert to a `u64` from any integer width
    pub fn as_u64(&self) -> Option<u64> {
        self.as_scalar().and_then(Scalar::as_u64)
    }

    /// Attempts to convert to an `f64`, widening integers
    pub fn as_f64(&self) -> Option<f64> {
        self.as_scalar().and_then(Scalar::as_f64)
    }

    /// Attempts to convert to a string slice
    pub fn as_str(&self) -> Option<&str> {
        self.as_scalar().and_then(Scalar::as_str)
    }

    /// Looks up `key` if this is a map
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.as_map().and_then(|map| map.get(key))
    }

    /// Looks up element `index` if this is a sequence
    pub fn index(&self, index: usize) -> Option<&Node> {
        self.as_sequence().and_then(|items| items.get(index))
    }

    /// Returns the number of children for branches, `0` for scalars
    pub fn len(&self) -> usize {
        match self {
            Node::Map(map) => map.len(),
            Node::Sequence(items) => items.len(),
            Node::Scalar(_) => 0,
        }
    }

    /// Returns true if this is a branch without children, or a scalar
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Map(map) => {
                write!(f, "{{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    scalar::write_quoted(f, key)?;
                    write!(f, ":{value}")?;
                }
                write!(f, "}}")
            }
            Node::Sequence(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, "]")
            }
            Node::Scalar(scalar) => write!(f, "{scalar}"),
        }
    }
}

impl Default for Node {
    fn default() -> Self {
        Node::null()
    }
}

macro_rules! node_from_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Node {
                fn from(value: $ty) -> Self {
                    Node::Scalar(Scalar::from(value))
                }
            }
        )*
    };
}

node_from_scalar!(
    bool, i8, i16, i32, i64, u8, u16, u32, u64, f32, f64, String, &str, ()
);

impl From<Scalar> for Node {
    fn from(scalar: Scalar) -> Self {
        Node::Scalar(scalar)
    }
}

impl From<Vec<Node>> for Node {
    fn from(items: Vec<Node>) -> Self {
        Node::Sequence(items)
    }
}

impl From<BTreeMap<String, Node>> for Node {
    fn from(map: BTreeMap<String, Node>) -> Self {
        Node::Map(map)
    }
}

impl<K: Into<String>> FromIterator<(K, Node)> for Node {
    fn from_iter<I: IntoIterator<Item = (K, Node)>>(iter: I) -> Self {
        Node::Map(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

impl FromIterator<Node> for Node {
    fn from_iter<I: IntoIterator<Item = Node>>(iter: I) -> Self {
        Node::Sequence(iter.into_iter().collect())
    }
}

impl PartialEq<Scalar> for Node {
    fn eq(&self, other: &Scalar) -> bool {
        self.as_scalar() == Some(other)
    }
}

impl PartialEq<str> for Node {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

impl PartialEq<&str> for Node {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<i64> for Node {
    fn eq(&self, other: &i64) -> bool {
        self.as_i64() == Some(*other)
    }
}

impl PartialEq<bool> for Node {
    fn eq(&self, other: &bool) -> bool {
        self.as_bool() == Some(*other)
    }
}
