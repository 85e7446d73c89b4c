//! Coding paths for locating values inside a [`Node`](crate::Node) tree.
//!
//! A [`CodingPath`] is the ordered trail of [`CodingKey`]s from the root of a
//! tree to the value currently being encoded or decoded. Every recursive step
//! into a keyed or unkeyed container appends exactly one key. Paths exist only
//! for diagnostics: they are attached to every [`CodingError`](crate::CodingError)
//! and never change engine behavior.
//!
//! # Usage
//!
//! ```rust
//! use treecodec::{CodingKey, CodingPath};
//!
//! let path = CodingPath::new()
//!     .appending(CodingKey::named("a"))
//!     .appending(CodingKey::index(0))
//!     .appending(CodingKey::named("b"));
//!
//! assert_eq!(path.to_string(), "a.0.b");
//! assert_eq!(path.len(), 3);
//! ```

use std::{fmt, slice};

/// One step of a [`CodingPath`].
///
/// A key always has a string form. Keys produced by unkeyed containers also
/// carry the integer index they were synthesized from; their string form is
/// the decimal rendering of that index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CodingKey {
    name: String,
    index: Option<usize>,
}

impl CodingKey {
    /// Creates a key addressing a map entry.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            index: None,
        }
    }

    /// Creates a key addressing a sequence element.
    pub fn index(index: usize) -> Self {
        Self {
            name: index.to_string(),
            index: Some(index),
        }
    }

    /// Creates a key carrying both a string form and an integer index.
    pub fn with_index(name: impl Into<String>, index: usize) -> Self {
        Self {
            name: name.into(),
            index: Some(index),
        }
    }

    /// Returns the string form of the key.
    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// Returns the integer index, if the key has one.
    pub fn int_value(&self) -> Option<usize> {
        self.index
    }

    /// Returns `true` if the key was synthesized from a sequence position.
    pub fn is_index(&self) -> bool {
        self.index.is_some()
    }
}

impl fmt::Display for CodingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl From<&str> for CodingKey {
    fn from(name: &str) -> Self {
        CodingKey::named(name)
    }
}

impl From<String> for CodingKey {
    fn from(name: String) -> Self {
        CodingKey::named(name)
    }
}

impl From<usize> for CodingKey {
    fn from(index: usize) -> Self {
        CodingKey::index(index)
    }
}

/// The route from the tree root to the current coding position.
///
/// Paths are cheap value types: sub-coders receive an extended copy of their
/// parent's path, so a path observed inside an error is never mutated later.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CodingPath {
    keys: Vec<CodingKey>,
}

impl CodingPath {
    /// Creates the empty (root) path.
    pub fn new() -> Self {
        Self { keys: Vec::new() }
    }

    /// Returns a copy of this path with `key` appended.
    pub fn appending(&self, key: impl Into<CodingKey>) -> Self {
        let mut keys = Vec::with_capacity(self.keys.len() + 1);
        keys.extend_from_slice(&self.keys);
        keys.push(key.into());
        Self { keys }
    }

    /// Appends `key` in place.
    pub fn push(&mut self, key: impl Into<CodingKey>) {
        self.keys.push(key.into());
    }

    /// Removes and returns the last key.
    pub fn pop(&mut self) -> Option<CodingKey> {
        self.keys.pop()
    }

    /// Returns the keys from root to leaf.
    pub fn keys(&self) -> &[CodingKey] {
        &self.keys
    }

    /// Returns an iterator over the keys from root to leaf.
    pub fn iter(&self) -> slice::Iter<'_, CodingKey> {
        self.keys.iter()
    }

    /// Returns the last key, or `None` at the root.
    pub fn last(&self) -> Option<&CodingKey> {
        self.keys.last()
    }

    /// Returns the number of keys in the path.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` for the root path.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

impl fmt::Display for CodingPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, key) in self.keys.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            f.write_str(key.as_str())?;
        }
        Ok(())
    }
}

impl FromIterator<CodingKey> for CodingPath {
    fn from_iter<I: IntoIterator<Item = CodingKey>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a CodingPath {
    type Item = &'a CodingKey;
    type IntoIter = slice::Iter<'a, CodingKey>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}
