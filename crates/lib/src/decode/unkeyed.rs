use crate::{
    CodingConfig, CodingError, Result,
    container::DecodingContainer,
    decode::{Decode, Decoder, keyed::KeyedDecoder},
    node::Node,
    path::{CodingKey, CodingPath},
};

/// Sequence-shaped decode container with a forward-only cursor.
///
/// The cursor starts at zero and moves by one for every element that is
/// consumed successfully. A failed read leaves it where it was.
#[derive(Debug, Clone)]
pub struct UnkeyedDecoder<'a> {
    items: &'a [Node],
    path: CodingPath,
    config: &'a CodingConfig,
    current: usize,
}

impl<'a> UnkeyedDecoder<'a> {
    pub(crate) fn new(items: &'a [Node], path: CodingPath, config: &'a CodingConfig) -> Self {
        Self {
            items,
            path,
            config,
            current: 0,
        }
    }

    /// Returns the path of this container.
    pub fn coding_path(&self) -> &CodingPath {
        &self.path
    }

    /// Returns the number of elements, when known.
    ///
    /// A tree-backed sequence always knows its length.
    pub fn count(&self) -> Option<usize> {
        Some(self.items.len())
    }

    /// Returns true once every element has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.current >= self.items.len()
    }

    /// Returns the index of the next element to be read.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Returns the path key of the next element to be read.
    pub fn current_key(&self) -> CodingKey {
        CodingKey::index(self.current)
    }

    fn current_path(&self) -> CodingPath {
        self.path.appending(self.current_key())
    }

    fn peek(&self) -> Option<&'a Node> {
        self.items.get(self.current)
    }

    fn require(&self) -> Result<&'a Node> {
        self.peek().ok_or_else(|| CodingError::IndexOutOfBounds {
            path: self.path.clone(),
            index: self.current,
            count: self.items.len(),
        })
    }

    /// Decodes the next element and advances the cursor.
    ///
    /// # Errors
    ///
    /// [`CodingError::IndexOutOfBounds`] at the end of the sequence, or
    /// whatever `T` raises for the element. The cursor does not move on
    /// failure.
    pub fn decode<T: Decode>(&mut self) -> Result<T> {
        let node = self.require()?;
        let value = self.decode_or_delegate(node, self.current_path())?;
        self.current += 1;
        Ok(value)
    }

    /// Decodes the next element unless it is null.
    ///
    /// At the end of the sequence this returns `None` without moving. A null
    /// element is consumed and yields `None`.
    pub fn decode_if_present<T: Decode>(&mut self) -> Result<Option<T>> {
        let Some(node) = self.peek() else {
            return Ok(None);
        };
        if self.is_nil_equivalent(Some(node)) {
            self.current += 1;
            return Ok(None);
        }
        self.decode().map(Some)
    }

    /// Returns true if the next element is null, consuming it.
    ///
    /// At the end of the sequence this returns true without moving. A
    /// non-null element is left in place.
    pub fn decode_nil(&mut self) -> bool {
        match self.peek() {
            None => true,
            Some(node) if self.is_nil_equivalent(Some(node)) => {
                self.current += 1;
                true
            }
            Some(_) => false,
        }
    }

    /// Returns a container reading the next element as a map, advancing the
    /// cursor on success.
    pub fn nested_keyed_container(&mut self) -> Result<KeyedDecoder<'a>> {
        let path = self.current_path();
        match self.require()? {
            Node::Map(map) => {
                self.current += 1;
                Ok(KeyedDecoder::new(map, path, self.config))
            }
            other => Err(CodingError::type_mismatch(path, "map", other.type_name())),
        }
    }

    /// Returns a container reading the next element as a sequence, advancing
    /// the cursor on success.
    pub fn nested_unkeyed_container(&mut self) -> Result<UnkeyedDecoder<'a>> {
        let path = self.current_path();
        match self.require()? {
            Node::Sequence(items) => {
                self.current += 1;
                Ok(UnkeyedDecoder::new(items, path, self.config))
            }
            other => Err(CodingError::type_mismatch(
                path,
                "sequence",
                other.type_name(),
            )),
        }
    }

    /// Returns a decoder for the next element and advances the cursor.
    ///
    /// # Errors
    ///
    /// [`CodingError::IndexOutOfBounds`] at the end of the sequence.
    pub fn super_decoder(&mut self) -> Result<Decoder<'a>> {
        let node = self.require()?;
        let decoder = self.make_sub_decoder(node, self.current_path());
        self.current += 1;
        Ok(decoder)
    }
}

impl<'a> DecodingContainer<'a> for UnkeyedDecoder<'a> {
    fn coding_path(&self) -> &CodingPath {
        &self.path
    }

    fn config(&self) -> &'a CodingConfig {
        self.config
    }
}
