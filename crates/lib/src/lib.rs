//!
//! treecodec: structural serialization between typed values and an untyped tree.
//! This library converts values to and from [`Node`] trees (maps, sequences, and scalars)
//! through a uniform recursive protocol, independent of any wire format.
//!
//! ## Core Concepts
//!
//! * **Nodes (`node::Node`)**: The untyped intermediate value. A map of string keys, an ordered sequence, or a primitive scalar (including the explicit null marker).
//! * **Coding paths (`path::CodingPath`)**: The key/index route from the root to the value being coded, carried by every coder and every error.
//! * **Containers**: A coder hands out exactly one container for the value it is bound to:
//!     * **Keyed** (`KeyedEncoder`/`KeyedDecoder`): map-shaped, fields by name.
//!     * **Unkeyed** (`UnkeyedEncoder`/`UnkeyedDecoder`): sequence-shaped, elements in order behind a cursor.
//!     * **Single-value** (`SingleValueEncoder`/`SingleValueDecoder`): exactly one value.
//! * **Engines (`TreeEncoder`, `TreeDecoder`)**: Drive the recursion. A type implements [`Encode`]/[`Decode`] to describe itself; the engines create sub-coders with extended paths for every compound field.
//! * **Nil-equivalence (`Nullable`)**: A missing key, an explicit null, and an empty wrapper are treated alike by every `*_if_present` and `*_nil` operation.
//! * **Overrides (`overrides`)**: URLs and arbitrary-precision decimals always travel as canonical strings.
//! * **Errors (`CodingError`)**: Every failure carries the full path to where it happened.
//!
//! ## Example
//!
//! ```
//! use treecodec::{Decode, Decoder, Encode, Encoder, Node, Result};
//!
//! #[derive(Debug, PartialEq)]
//! struct Counter {
//!     count: u32,
//!     note: Option<String>,
//! }
//!
//! impl Encode for Counter {
//!     fn encode(&self, encoder: &mut Encoder<'_>) -> Result<()> {
//!         let mut container = encoder.keyed_container();
//!         container.encode("count", &self.count)?;
//!         container.encode_if_present("note", &self.note)
//!     }
//! }
//!
//! impl Decode for Counter {
//!     fn decode(decoder: &mut Decoder<'_>) -> Result<Self> {
//!         let container = decoder.keyed_container()?;
//!         Ok(Counter {
//!             count: container.decode("count")?,
//!             note: container.decode_if_present("note")?,
//!         })
//!     }
//! }
//!
//! let value = Counter { count: 5, note: None };
//! let node = treecodec::encode(&value)?;
//! assert_eq!(node.to_string(), r#"{"count":5}"#);
//! assert_eq!(treecodec::decode::<Counter>(&node)?, value);
//! # Ok::<(), treecodec::CodingError>(())
//! ```

pub mod config;
pub(crate) mod container;
pub mod decode;
pub mod encode;
pub mod errors;
pub mod node;
pub mod overrides;
pub mod path;

pub use config::CodingConfig;
pub use container::Nullable;
pub use decode::{Decode, Decoder, KeyedDecoder, SingleValueDecoder, TreeDecoder, UnkeyedDecoder};
pub use encode::{Encode, Encoder, KeyedEncoder, SingleValueEncoder, TreeEncoder, UnkeyedEncoder};
pub use errors::CodingError;
pub use node::{Node, NodeKind, Scalar};
pub use overrides::{OverrideKind, ScalarOverride};
pub use path::{CodingKey, CodingPath};

/// Result type used throughout the treecodec library.
pub type Result<T, E = CodingError> = std::result::Result<T, E>;

/// Encodes `value` into a [`Node`] tree with the default configuration.
///
/// Shorthand for `TreeEncoder::new().encode(value)`.
pub fn encode<T: Encode + ?Sized>(value: &T) -> Result<Node> {
    TreeEncoder::new().encode(value)
}

/// Decodes a `T` from `node` with the default configuration.
///
/// Shorthand for `TreeDecoder::new().decode(node)`.
pub fn decode<T: Decode>(node: &Node) -> Result<T> {
    TreeDecoder::new().decode(node)
}
