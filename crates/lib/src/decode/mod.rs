//! The decoding engine: [`Node`] trees to typed values.
//!
//! A type takes part by implementing [`Decode`]. The engine binds a
//! [`Decoder`] to the node being read; the type requests the container that
//! matches the node's shape and reads its fields by key, by cursor, or as a
//! single value. Nested fields recurse through sub-decoders whose path is
//! extended by one key, so any error carries the full route from the root.
//!
//! # Examples
//!
//! ```
//! use treecodec::{Decode, Decoder, Node, Result};
//!
//! #[derive(Debug, PartialEq)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//!     label: Option<String>,
//! }
//!
//! impl Decode for Point {
//!     fn decode(decoder: &mut Decoder<'_>) -> Result<Self> {
//!         let container = decoder.keyed_container()?;
//!         Ok(Point {
//!             x: container.decode("x")?,
//!             y: container.decode("y")?,
//!             label: container.decode_if_present("label")?,
//!         })
//!     }
//! }
//!
//! let node: Node = [("x", Node::from(1i64)), ("y", Node::from(-2i64))]
//!     .into_iter()
//!     .collect();
//! let point: Point = treecodec::decode(&node)?;
//! assert_eq!(point, Point { x: 1, y: -2, label: None });
//! # Ok::<(), treecodec::CodingError>(())
//! ```

use std::collections::BTreeMap;

use tracing::debug;

use crate::{
    CodingConfig, CodingError, Result,
    container::ContainerKind,
    node::Node,
    path::CodingPath,
};

mod impls;
mod keyed;
mod single;
mod unkeyed;

pub use keyed::KeyedDecoder;
pub use single::SingleValueDecoder;
pub use unkeyed::UnkeyedDecoder;

/// Types that can reconstruct themselves from a [`Decoder`].
pub trait Decode: Sized {
    fn decode(decoder: &mut Decoder<'_>) -> Result<Self>;
}

/// Entry point for decoding typed values from [`Node`] trees.
#[derive(Debug, Clone, Default)]
pub struct TreeDecoder {
    config: CodingConfig,
}

impl TreeDecoder {
    /// Creates a decoder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a decoder with `config`.
    pub fn with_config(config: CodingConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration shared by every coder of a decode.
    pub fn config(&self) -> &CodingConfig {
        &self.config
    }

    /// Decodes a `T` from `node`.
    ///
    /// The node is only borrowed and never modified.
    ///
    /// # Errors
    ///
    /// Returns the first [`CodingError`] raised anywhere in the descent.
    pub fn decode<T: Decode>(&self, node: &Node) -> Result<T> {
        let mut decoder = Decoder::new(node, CodingPath::new(), &self.config);
        T::decode(&mut decoder).inspect_err(|err| {
            debug!(path = %err.path(), error = %err, "decode failed");
        })
    }
}

/// A coder bound to one node of the tree being read.
///
/// Like [`Encoder`](crate::Encoder), a decoder yields at most one container.
/// A request that fails with a shape mismatch does not count, so callers may
/// try an alternative shape.
#[derive(Debug)]
pub struct Decoder<'a> {
    node: &'a Node,
    path: CodingPath,
    config: &'a CodingConfig,
    claimed: Option<ContainerKind>,
}

impl<'a> Decoder<'a> {
    pub(crate) fn new(node: &'a Node, path: CodingPath, config: &'a CodingConfig) -> Self {
        Self {
            node,
            path,
            config,
            claimed: None,
        }
    }

    /// Returns the path from the root to this decoder's node.
    pub fn coding_path(&self) -> &CodingPath {
        &self.path
    }

    /// Returns the caller-supplied context of this decode.
    pub fn user_info(&self) -> &'a BTreeMap<String, Node> {
        &self.config.user_info
    }

    /// Returns the node this decoder reads, without claiming a container.
    pub fn node(&self) -> &'a Node {
        self.node
    }

    fn ensure_unclaimed(&self, kind: ContainerKind) {
        if let Some(previous) = self.claimed {
            panic!(
                "decoder at '{}' requested a {kind} container after a {previous} container; \
                 a coder yields at most one container",
                self.path
            );
        }
    }

    /// Requests a map-shaped container.
    ///
    /// # Errors
    ///
    /// [`CodingError::TypeMismatch`] unless the node is a map.
    ///
    /// # Panics
    ///
    /// Panics if this decoder already yielded a container.
    pub fn keyed_container(&mut self) -> Result<KeyedDecoder<'a>> {
        self.ensure_unclaimed(ContainerKind::Keyed);
        match self.node {
            Node::Map(map) => {
                self.claimed = Some(ContainerKind::Keyed);
                Ok(KeyedDecoder::new(map, self.path.clone(), self.config))
            }
            other => Err(CodingError::type_mismatch(
                self.path.clone(),
                "map",
                other.type_name(),
            )),
        }
    }

    /// Requests a sequence-shaped container.
    ///
    /// # Errors
    ///
    /// [`CodingError::TypeMismatch`] unless the node is a sequence.
    ///
    /// # Panics
    ///
    /// Panics if this decoder already yielded a container.
    pub fn unkeyed_container(&mut self) -> Result<UnkeyedDecoder<'a>> {
        self.ensure_unclaimed(ContainerKind::Unkeyed);
        match self.node {
            Node::Sequence(items) => {
                self.claimed = Some(ContainerKind::Unkeyed);
                Ok(UnkeyedDecoder::new(items, self.path.clone(), self.config))
            }
            other => Err(CodingError::type_mismatch(
                self.path.clone(),
                "sequence",
                other.type_name(),
            )),
        }
    }

    /// Requests a container reading the node as one value.
    ///
    /// Every node shape can provide a single-value container.
    ///
    /// # Panics
    ///
    /// Panics if this decoder already yielded a container.
    pub fn single_value_container(&mut self) -> SingleValueDecoder<'a> {
        self.ensure_unclaimed(ContainerKind::SingleValue);
        self.claimed = Some(ContainerKind::SingleValue);
        SingleValueDecoder::new(self.node, self.path.clone(), self.config)
    }
}
