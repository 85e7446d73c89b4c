use crate::{
    Result,
    container::EncodingContainer,
    encode::{
        Encode, Encoder,
        arena::{EncodeState, Handle, Slot},
        keyed::KeyedEncoder,
    },
    node::{Node, Scalar},
    path::{CodingKey, CodingPath},
};

/// Sequence-shaped encode container.
///
/// Every write appends one element; the element's path key is its index.
#[derive(Debug)]
pub struct UnkeyedEncoder<'s> {
    state: &'s mut EncodeState,
    handle: Handle,
    path: CodingPath,
}

impl<'s> UnkeyedEncoder<'s> {
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

    /// Returns the number of elements written so far.
    pub fn count(&self) -> usize {
        self.state.sequence_len(self.handle)
    }

    fn next_path(&self) -> CodingPath {
        self.path.appending(CodingKey::index(self.count()))
    }

    fn append(&mut self, slot: Slot) {
        self.state.push(self.handle, slot);
    }

    /// Appends `value` through a sub-encoder.
    pub fn encode<T: Encode + ?Sized>(&mut self, value: &T) -> Result<()> {
        let path = self.next_path();
        let slot = self.store_or_delegate(path, value)?;
        self.append(slot);
        Ok(())
    }

    /// Appends every item of `values`.
    pub fn encode_all<'v, T, I>(&mut self, values: I) -> Result<()>
    where
        T: Encode + ?Sized + 'v,
        I: IntoIterator<Item = &'v T>,
    {
        for value in values {
            self.encode(value)?;
        }
        Ok(())
    }

    /// Appends the explicit null marker.
    pub fn encode_nil(&mut self) {
        self.append(Slot::Node(Node::null()));
    }

    /// Appends a primitive leaf without a sub-encoder.
    pub fn encode_scalar(&mut self, value: impl Into<Scalar>) {
        self.append(Slot::Node(Node::Scalar(value.into())));
    }

    /// Appends a finished subtree as-is.
    pub fn encode_node(&mut self, node: Node) {
        self.append(Slot::Node(node));
    }

    /// Appends a map and returns a container writing into it.
    pub fn nested_keyed_container(&mut self) -> KeyedEncoder<'_> {
        let path = self.next_path();
        let handle = self.state.alloc_map(path.clone());
        self.append(Slot::Build(handle));
        KeyedEncoder::new(&mut *self.state, handle, path)
    }

    /// Appends a sequence and returns a container writing into it.
    pub fn nested_unkeyed_container(&mut self) -> UnkeyedEncoder<'_> {
        let path = self.next_path();
        let handle = self.state.alloc_sequence(path.clone());
        self.append(Slot::Build(handle));
        UnkeyedEncoder::new(&mut *self.state, handle, path)
    }

    /// Appends a placeholder element and returns an encoder that fills it.
    ///
    /// The element's index is its key, so unlike the keyed variant this
    /// needs no explicit key.
    pub fn super_encoder(&mut self) -> Encoder<'_> {
        let path = self.next_path();
        let handle = self.state.alloc_pending(path.clone());
        self.append(Slot::Build(handle));
        Encoder::new(&mut *self.state, handle, path)
    }
}

impl EncodingContainer for UnkeyedEncoder<'_> {
    fn coding_path(&self) -> &CodingPath {
        &self.path
    }

    fn state_mut(&mut self) -> &mut EncodeState {
        &mut *self.state
    }
}
