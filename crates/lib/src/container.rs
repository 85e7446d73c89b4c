//! Capabilities shared by every container kind.
//!
//! Encoders and decoders hand out three kinds of container: keyed
//! (map-shaped), unkeyed (sequence-shaped), and single-value. All of them
//! share the same dispatch core, expressed by the traits in this module:
//!
//! - nil detection through [`Nullable`], without knowing the wrapped type
//! - creation of a sub-coder scoped to an extended [`CodingPath`]
//! - store-or-delegate: a value either lands in the tree directly or
//!   describes itself through a fresh sub-coder
//!
//! The traits are implemented by the concrete container types in
//! [`encode`](mod@crate::encode) and [`decode`](mod@crate::decode).

use crate::{
    CodingConfig, Result,
    decode::{Decode, Decoder},
    encode::{Encode, Encoder, arena::{EncodeState, Slot}},
    node::{Node, Scalar},
    path::CodingPath,
};

/// Types that can report whether they hold a value.
///
/// This is the only thing the engine knows about optional-like wrappers. A
/// position is nil-equivalent when it is missing, holds the explicit null
/// marker, or holds a wrapper whose `has_value` is false.
///
/// ```
/// use treecodec::{Node, Nullable};
///
/// assert!(!Node::null().has_value());
/// assert!(Node::from(0i32).has_value());
/// assert!(!None::<u8>.has_value());
/// assert!(Some(0u8).has_value());
/// ```
pub trait Nullable {
    /// Returns false if this value stands for "no value".
    fn has_value(&self) -> bool;
}

impl Nullable for Node {
    fn has_value(&self) -> bool {
        !self.is_null()
    }
}

impl Nullable for Scalar {
    fn has_value(&self) -> bool {
        !self.is_null()
    }
}

impl<T> Nullable for Option<T> {
    fn has_value(&self) -> bool {
        self.is_some()
    }
}

impl<T: Nullable + ?Sized> Nullable for &T {
    fn has_value(&self) -> bool {
        (**self).has_value()
    }
}

impl<T: Nullable + ?Sized> Nullable for Box<T> {
    fn has_value(&self) -> bool {
        (**self).has_value()
    }
}

/// The three container kinds, used for single-use bookkeeping and messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ContainerKind {
    Keyed,
    Unkeyed,
    SingleValue,
}

impl std::fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContainerKind::Keyed => write!(f, "keyed"),
            ContainerKind::Unkeyed => write!(f, "unkeyed"),
            ContainerKind::SingleValue => write!(f, "single-value"),
        }
    }
}

/// Dispatch core of the encode-side containers.
pub(crate) trait EncodingContainer {
    fn coding_path(&self) -> &CodingPath;

    fn state_mut(&mut self) -> &mut EncodeState;

    /// Returns a fresh encoder whose output lands in a new pending slot.
    fn make_sub_encoder(&mut self, path: CodingPath) -> Encoder<'_> {
        tracing::trace!(path = %path, "creating nested encoder");
        let state = self.state_mut();
        let handle = state.alloc_pending(path.clone());
        Encoder::new(state, handle, path)
    }

    /// Stores `value` directly when it is a leaf (overridden types
    /// included), otherwise lets it describe itself through a sub-encoder
    /// at `path`. Returns the slot holding the result.
    fn store_or_delegate<T: Encode + ?Sized>(
        &mut self,
        path: CodingPath,
        value: &T,
    ) -> Result<Slot> {
        if let Some(scalar) = value.to_scalar() {
            return Ok(Slot::Node(Node::Scalar(scalar)));
        }
        let mut encoder = self.make_sub_encoder(path);
        value.encode(&mut encoder)?;
        Ok(encoder.into_slot())
    }
}

/// Dispatch core of the decode-side containers.
pub(crate) trait DecodingContainer<'a> {
    fn coding_path(&self) -> &CodingPath;

    fn config(&self) -> &'a CodingConfig;

    /// Absent, explicit null, and empty wrappers all count as nil.
    fn is_nil_equivalent<V: Nullable + ?Sized>(&self, value: Option<&V>) -> bool {
        !value.is_some_and(|v| v.has_value())
    }

    /// Returns a fresh decoder reading `node` at `path`.
    fn make_sub_decoder(&self, node: &'a Node, path: CodingPath) -> Decoder<'a> {
        tracing::trace!(path = %path, kind = %node.kind(), "creating nested decoder");
        Decoder::new(node, path, self.config())
    }

    /// Lets `T` reconstruct itself from `node` through a sub-decoder.
    fn decode_or_delegate<T: Decode>(&self, node: &'a Node, path: CodingPath) -> Result<T> {
        T::decode(&mut self.make_sub_decoder(node, path))
    }
}
