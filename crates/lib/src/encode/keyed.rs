use crate::{
    CodingError, Result,
    container::{EncodingContainer, Nullable},
    encode::{
        Encode, Encoder,
        arena::{EncodeState, Handle, Slot},
        unkeyed::UnkeyedEncoder,
    },
    node::{Node, Scalar},
    path::CodingPath,
};

/// Map-shaped encode container.
///
/// Writes to an existing key replace the earlier value.
#[derive(Debug)]
pub struct KeyedEncoder<'s> {
    state: &'s mut EncodeState,
    handle: Handle,
    path: CodingPath,
}

impl<'s> KeyedEncoder<'s> {
    pub(crate) fn new(state: &'s mut EncodeState, handle: Handle, path: CodingPath) -> Self {
        Self {
            state,
            handle,
            path,
        }
    }

    /// Returns the path of this container.
    pub fn coding_path(&self) -> &CodingPath {
        &self.path
    }

    fn put(&mut self, key: &str, slot: Slot) {
        self.state.insert(self.handle, key.to_string(), slot);
    }

    /// Encodes `value` under `key` through a sub-encoder.
    pub fn encode<T: Encode + ?Sized>(&mut self, key: &str, value: &T) -> Result<()> {
        let path = self.path.appending(key);
        let slot = self.store_or_delegate(path, value)?;
        self.put(key, slot);
        Ok(())
    }

    /// Encodes `value` under `key` unless it is nil-equivalent, in which
    /// case the key is omitted.
    pub fn encode_if_present<T: Encode + Nullable + ?Sized>(
        &mut self,
        key: &str,
        value: &T,
    ) -> Result<()> {
        if value.has_value() {
            self.encode(key, value)
        } else {
            Ok(())
        }
    }

    /// Stores the explicit null marker under `key`.
    pub fn encode_nil(&mut self, key: &str) {
        self.put(key, Slot::Node(Node::null()));
    }

    /// Stores a primitive leaf under `key` without a sub-encoder.
    pub fn encode_scalar(&mut self, key: &str, value: impl Into<Scalar>) {
        self.put(key, Slot::Node(Node::Scalar(value.into())));
    }

    /// Stores a finished subtree under `key` as-is.
    pub fn encode_node(&mut self, key: &str, node: Node) {
        self.put(key, Slot::Node(node));
    }

    /// Creates a map under `key` and returns a container writing into it.
    pub fn nested_keyed_container(&mut self, key: &str) -> KeyedEncoder<'_> {
        let path = self.path.appending(key);
        let handle = self.state.alloc_map(path.clone());
        self.put(key, Slot::Build(handle));
        KeyedEncoder::new(&mut *self.state, handle, path)
    }

    /// Creates a sequence under `key` and returns a container writing into it.
    pub fn nested_unkeyed_container(&mut self, key: &str) -> UnkeyedEncoder<'_> {
        let path = self.path.appending(key);
        let handle = self.state.alloc_sequence(path.clone());
        self.put(key, Slot::Build(handle));
        UnkeyedEncoder::new(&mut *self.state, handle, path)
    }

    /// Keyless super encoders are not supported.
    ///
    /// There is no slot in a map that an inline encoder without a key could
    /// write to, so this always fails with [`CodingError::DataCorrupted`].
    /// Use [`super_encoder_for_key`](Self::super_encoder_for_key).
    pub fn super_encoder(&mut self) -> Result<Encoder<'_>> {
        Err(CodingError::data_corrupted(
            self.path.clone(),
            "super encoder without a key is not supported",
        ))
    }

    /// Returns an encoder whose output is stored under `key`.
    ///
    /// The slot is linked immediately; whatever the returned encoder writes
    /// lands there. The encoder must request a container before the
    /// top-level encode finishes.
    pub fn super_encoder_for_key(&mut self, key: &str) -> Encoder<'_> {
        let path = self.path.appending(key);
        let handle = self.state.alloc_pending(path.clone());
        self.put(key, Slot::Build(handle));
        Encoder::new(&mut *self.state, handle, path)
    }
}

impl EncodingContainer for KeyedEncoder<'_> {
    fn coding_path(&self) -> &CodingPath {
        &self.path
    }

    fn state_mut(&mut self) -> &mut EncodeState {
        &mut *self.state
    }
}
