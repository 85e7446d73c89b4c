use crate::{
    Result,
    container::EncodingContainer,
    encode::{
        Encode,
        arena::{EncodeState, Handle, Slot},
    },
    node::{Node, Scalar},
    path::CodingPath,
};

/// Encode container holding exactly one value.
///
/// A single-value container does not extend the coding path. Writing a
/// second value panics.
#[derive(Debug)]
pub struct SingleValueEncoder<'s> {
    state: &'s mut EncodeState,
    handle: Handle,
    path: CodingPath,
}

impl<'s> SingleValueEncoder<'s> {
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

    /// Writes the explicit null marker.
    pub fn encode_nil(&mut self) {
        self.state.set_value(self.handle, Slot::Node(Node::null()));
    }

    /// Writes a primitive leaf.
    pub fn encode_scalar(&mut self, value: impl Into<Scalar>) {
        self.state
            .set_value(self.handle, Slot::Node(Node::Scalar(value.into())));
    }

    /// Writes a finished subtree as-is.
    pub fn encode_node(&mut self, node: Node) {
        self.state.set_value(self.handle, Slot::Node(node));
    }

    /// Writes `value` through a sub-encoder at the same path.
    pub fn encode<T: Encode + ?Sized>(&mut self, value: &T) -> Result<()> {
        let path = self.path.clone();
        let slot = self.store_or_delegate(path, value)?;
        self.state.set_value(self.handle, slot);
        Ok(())
    }
}

impl EncodingContainer for SingleValueEncoder<'_> {
    fn coding_path(&self) -> &CodingPath {
        &self.path
    }

    fn state_mut(&mut self) -> &mut EncodeState {
        &mut *self.state
    }
}
