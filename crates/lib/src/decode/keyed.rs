use std::{collections::BTreeMap, str::FromStr};

use crate::{
    CodingConfig, CodingError, Result,
    container::DecodingContainer,
    decode::{Decode, Decoder, unkeyed::UnkeyedDecoder},
    node::{NULL, Node},
    path::{CodingKey, CodingPath},
};

/// Map-shaped decode container.
///
/// Lookups do not consume anything; a key may be read any number of times.
#[derive(Debug, Clone)]
pub struct KeyedDecoder<'a> {
    map: &'a BTreeMap<String, Node>,
    path: CodingPath,
    config: &'a CodingConfig,
}

impl<'a> KeyedDecoder<'a> {
    pub(crate) fn new(
        map: &'a BTreeMap<String, Node>,
        path: CodingPath,
        config: &'a CodingConfig,
    ) -> Self {
        Self { map, path, config }
    }

    /// Returns the path of this container.
    pub fn coding_path(&self) -> &CodingPath {
        &self.path
    }

    /// Returns every key of the map that converts to `K`.
    ///
    /// Keys that fail to convert are skipped.
    pub fn all_keys<K: FromStr>(&self) -> Vec<K> {
        self.map.keys().filter_map(|k| k.parse().ok()).collect()
    }

    /// Returns the raw keys of the map in order.
    pub fn keys(&self) -> impl Iterator<Item = &'a str> + use<'a> {
        self.map.keys().map(String::as_str)
    }

    /// Returns true if `key` is present, even if its value is null.
    pub fn contains(&self, key: &str) -> bool {
        self.map.contains_key(key)
    }

    fn require(&self, key: &str) -> Result<&'a Node> {
        self.map.get(key).ok_or_else(|| CodingError::KeyNotFound {
            path: self.path.clone(),
            key: CodingKey::named(key),
        })
    }

    /// Decodes the value under `key`.
    ///
    /// # Errors
    ///
    /// [`CodingError::KeyNotFound`] if the key is absent, or whatever `T`
    /// raises for the value.
    pub fn decode<T: Decode>(&self, key: &str) -> Result<T> {
        let node = self.require(key)?;
        self.decode_or_delegate(node, self.path.appending(key))
    }

    /// Decodes the value under `key`, or returns `None` if the key is absent
    /// or holds null.
    pub fn decode_if_present<T: Decode>(&self, key: &str) -> Result<Option<T>> {
        let node = self.map.get(key);
        if self.is_nil_equivalent(node) {
            return Ok(None);
        }
        match node {
            Some(node) => self
                .decode_or_delegate(node, self.path.appending(key))
                .map(Some),
            None => Ok(None),
        }
    }

    /// Returns true if `key` is absent or holds null.
    pub fn decode_nil(&self, key: &str) -> bool {
        self.is_nil_equivalent(self.map.get(key))
    }

    /// Returns a container reading the map under `key`.
    ///
    /// # Errors
    ///
    /// [`CodingError::KeyNotFound`] if the key is absent,
    /// [`CodingError::TypeMismatch`] if its value is not a map.
    pub fn nested_keyed_container(&self, key: &str) -> Result<KeyedDecoder<'a>> {
        let path = self.path.appending(key);
        match self.require(key)? {
            Node::Map(map) => Ok(KeyedDecoder::new(map, path, self.config)),
            other => Err(CodingError::type_mismatch(path, "map", other.type_name())),
        }
    }

    /// Returns a container reading the sequence under `key`.
    ///
    /// # Errors
    ///
    /// [`CodingError::KeyNotFound`] if the key is absent,
    /// [`CodingError::TypeMismatch`] if its value is not a sequence.
    pub fn nested_unkeyed_container(&self, key: &str) -> Result<UnkeyedDecoder<'a>> {
        let path = self.path.appending(key);
        match self.require(key)? {
            Node::Sequence(items) => Ok(UnkeyedDecoder::new(items, path, self.config)),
            other => Err(CodingError::type_mismatch(
                path,
                "sequence",
                other.type_name(),
            )),
        }
    }

    /// Keyless super decoders are not supported and always fail with
    /// [`CodingError::DataCorrupted`].
    pub fn super_decoder(&self) -> Result<Decoder<'a>> {
        Err(CodingError::data_corrupted(
            self.path.clone(),
            "super decoder without a key is not supported",
        ))
    }

    /// Returns a decoder reading the value under `key`.
    ///
    /// An absent key reads as null, so the returned decoder can still answer
    /// nil checks.
    pub fn super_decoder_for_key(&self, key: &str) -> Decoder<'a> {
        let node = self.map.get(key).unwrap_or(&NULL);
        self.make_sub_decoder(node, self.path.appending(key))
    }
}

impl<'a> DecodingContainer<'a> for KeyedDecoder<'a> {
    fn coding_path(&self) -> &CodingPath {
        &self.path
    }

    fn config(&self) -> &'a CodingConfig {
        self.config
    }
}
