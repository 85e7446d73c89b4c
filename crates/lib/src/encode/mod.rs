//! The encoding engine: typed values to [`Node`] trees.
//!
//! A value takes part by implementing [`Encode`]. The engine hands it an
//! [`Encoder`], from which it requests exactly one container and writes its
//! fields. Fields of other `Encode` types recurse through sub-encoders with
//! an extended [`CodingPath`]; nothing is materialized until the top-level
//! call returns and the build arena is flattened.
//!
//! # Examples
//!
//! ```
//! use treecodec::{Encode, Encoder, Node, Result};
//!
//! struct Point {
//!     x: i32,
//!     y: i32,
//!     label: Option<String>,
//! }
//!
//! impl Encode for Point {
//!     fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
//!         let mut container = encoder.keyed_container();
//!         container.encode("x", &self.x)?;
//!         container.encode("y", &self.y)?;
//!         container.encode_if_present("label", &self.label)?;
//!         Ok(())
//!     }
//! }
//!
//! let node = treecodec::encode(&Point { x: 1, y: -2, label: None })?;
//! assert_eq!(node.get("x"), Some(&Node::from(1i32)));
//! assert!(node.get("label").is_none());
//! # Ok::<(), treecodec::CodingError>(())
//! ```

use std::{collections::BTreeMap, sync::Arc};

use tracing::debug;

use crate::{
    CodingConfig, Result,
    container::ContainerKind,
    node::{Node, Scalar},
    path::CodingPath,
};

pub(crate) mod arena;
mod impls;
mod keyed;
mod single;
mod unkeyed;

use arena::{EncodeState, Handle, Slot};

pub use keyed::KeyedEncoder;
pub use single::SingleValueEncoder;
pub use unkeyed::UnkeyedEncoder;

/// Types that can describe themselves into an [`Encoder`].
///
/// Implementations request one container from the encoder and write their
/// fields into it. Returning an error aborts the whole encode.
pub trait Encode {
    fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()>;

    /// Returns the value as a single leaf, if it is one.
    ///
    /// Containers store a `Some` result directly instead of creating a
    /// sub-encoder. The leaf must match what [`encode`](Self::encode)
    /// would have written.
    fn to_scalar(&self) -> Option<Scalar> {
        None
    }
}

/// Entry point for encoding values into [`Node`] trees.
///
/// The encoder is reusable and cheap to clone; each call to
/// [`encode`](Self::encode) builds an independent tree.
#[derive(Debug, Clone, Default)]
pub struct TreeEncoder {
    config: Arc<CodingConfig>,
}

impl TreeEncoder {
    /// Creates an encoder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an encoder with `config`.
    pub fn with_config(config: CodingConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns the configuration shared by every coder of an encode.
    pub fn config(&self) -> &CodingConfig {
        &self.config
    }

    /// Encodes `value` into a tree.
    ///
    /// # Errors
    ///
    /// Returns whatever error the value's own [`Encode`] logic raised, with
    /// the path at which it was raised.
    ///
    /// # Panics
    ///
    /// Panics if an `Encode` implementation breaks the container contract:
    /// requesting two containers from one encoder, never requesting one, or
    /// leaving a single-value container unwritten.
    pub fn encode<T: Encode + ?Sized>(&self, value: &T) -> Result<Node> {
        let mut state = EncodeState::new(Arc::clone(&self.config));
        let root = state.alloc_pending(CodingPath::new());

        let mut encoder = Encoder::new(&mut state, root, CodingPath::new());
        if let Err(err) = value.encode(&mut encoder) {
            debug!(path = %err.path(), error = %err, "encode failed");
            return Err(err);
        }

        let node = state.flatten(root);
        debug!(kind = %node.kind(), len = node.len(), "encoded value");
        Ok(node)
    }
}

/// A coder scoped to one position of the tree being built.
///
/// An `Encoder` yields at most one container over its lifetime. Requesting a
/// second one panics, since it can only come from a broken `Encode`
/// implementation.
#[derive(Debug)]
pub struct Encoder<'s> {
    state: &'s mut EncodeState,
    handle: Handle,
    path: CodingPath,
}

impl<'s> Encoder<'s> {
    pub(crate) fn new(state: &'s mut EncodeState, handle: Handle, path: CodingPath) -> Self {
        Self {
            state,
            handle,
            path,
        }
    }

    /// Consumes the encoder, returning a reference to its output slot.
    pub(crate) fn into_slot(self) -> Slot {
        Slot::Build(self.handle)
    }

    /// Returns the path from the root to this encoder's position.
    pub fn coding_path(&self) -> &CodingPath {
        &self.path
    }

    /// Returns the caller-supplied context of this encode.
    pub fn user_info(&self) -> &BTreeMap<String, Node> {
        &self.state.config().user_info
    }

    /// Requests a map-shaped container.
    ///
    /// # Panics
    ///
    /// Panics if this encoder already yielded a container.
    pub fn keyed_container(&mut self) -> KeyedEncoder<'_> {
        self.state.claim(self.handle, ContainerKind::Keyed);
        KeyedEncoder::new(&mut *self.state, self.handle, self.path.clone())
    }

    /// Requests a sequence-shaped container.
    ///
    /// # Panics
    ///
    /// Panics if this encoder already yielded a container.
    pub fn unkeyed_container(&mut self) -> UnkeyedEncoder<'_> {
        self.state.claim(self.handle, ContainerKind::Unkeyed);
        UnkeyedEncoder::new(&mut *self.state, self.handle, self.path.clone())
    }

    /// Requests a container holding exactly one value.
    ///
    /// # Panics
    ///
    /// Panics if this encoder already yielded a container.
    pub fn single_value_container(&mut self) -> SingleValueEncoder<'_> {
        self.state.claim(self.handle, ContainerKind::SingleValue);
        SingleValueEncoder::new(&mut *self.state, self.handle, self.path.clone())
    }
}
