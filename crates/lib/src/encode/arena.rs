//! Mutable build storage used while an encode is in progress.
//!
//! Containers handed out during encoding do not own their contents. Each one
//! is a handle into an arena of growable maps and sequences owned by the
//! top-level encode call. A parent slot refers to a child by handle, so a
//! container that was already returned to the caller still receives writes
//! made later through a nested container or a super encoder. Once the
//! top-level call returns, [`EncodeState::flatten`] converts the arena into
//! an immutable [`Node`] tree in one pass.

use std::{collections::BTreeMap, mem, sync::Arc};

use crate::{
    CodingConfig,
    container::ContainerKind,
    node::Node,
    path::CodingPath,
};

/// Index of a build container in the arena.
pub(crate) type Handle = usize;

/// An entry of a build map or sequence.
#[derive(Debug)]
pub(crate) enum Slot {
    /// A finished subtree or leaf
    Node(Node),
    /// A build container that is flattened at the end
    Build(Handle),
}

#[derive(Debug)]
enum Build {
    /// Owned by a coder that has not requested a container yet
    Pending,
    Map(BTreeMap<String, Slot>),
    Sequence(Vec<Slot>),
    /// Single-value container, `None` until written
    Value(Option<Slot>),
    /// Already consumed by `flatten`
    Taken,
}

#[derive(Debug)]
struct Entry {
    path: CodingPath,
    build: Build,
}

/// Arena plus configuration for one top-level encode.
#[derive(Debug)]
pub(crate) struct EncodeState {
    entries: Vec<Entry>,
    config: Arc<CodingConfig>,
}

impl EncodeState {
    pub(crate) fn new(config: Arc<CodingConfig>) -> Self {
        Self {
            entries: Vec::new(),
            config,
        }
    }

    pub(crate) fn config(&self) -> &CodingConfig {
        &self.config
    }

    fn alloc(&mut self, path: CodingPath, build: Build) -> Handle {
        self.entries.push(Entry { path, build });
        self.entries.len() - 1
    }

    /// Allocates a slot for a coder that has not chosen a container yet.
    pub(crate) fn alloc_pending(&mut self, path: CodingPath) -> Handle {
        self.alloc(path, Build::Pending)
    }

    /// Allocates an empty map for a nested keyed container.
    pub(crate) fn alloc_map(&mut self, path: CodingPath) -> Handle {
        self.alloc(path, Build::Map(BTreeMap::new()))
    }

    /// Allocates an empty sequence for a nested unkeyed container.
    pub(crate) fn alloc_sequence(&mut self, path: CodingPath) -> Handle {
        self.alloc(path, Build::Sequence(Vec::new()))
    }

    /// Turns a pending slot into a container of `kind`.
    ///
    /// # Panics
    ///
    /// Panics if the slot's coder already requested a container.
    pub(crate) fn claim(&mut self, handle: Handle, kind: ContainerKind) {
        let entry = &mut self.entries[handle];
        if !matches!(entry.build, Build::Pending) {
            panic!(
                "encoder at '{}' requested a second container ({kind}); \
                 a coder yields at most one container",
                entry.path
            );
        }
        entry.build = match kind {
            ContainerKind::Keyed => Build::Map(BTreeMap::new()),
            ContainerKind::Unkeyed => Build::Sequence(Vec::new()),
            ContainerKind::SingleValue => Build::Value(None),
        };
    }

    /// Stores `slot` under `key`, replacing any earlier value.
    pub(crate) fn insert(&mut self, handle: Handle, key: String, slot: Slot) {
        match &mut self.entries[handle].build {
            Build::Map(map) => {
                map.insert(key, slot);
            }
            other => unreachable!("keyed write into {other:?}"),
        }
    }

    /// Appends `slot` to a sequence.
    pub(crate) fn push(&mut self, handle: Handle, slot: Slot) {
        match &mut self.entries[handle].build {
            Build::Sequence(items) => items.push(slot),
            other => unreachable!("unkeyed write into {other:?}"),
        }
    }

    /// Returns the current length of a sequence.
    pub(crate) fn sequence_len(&self, handle: Handle) -> usize {
        match &self.entries[handle].build {
            Build::Sequence(items) => items.len(),
            other => unreachable!("unkeyed count of {other:?}"),
        }
    }

    /// Writes the value of a single-value container.
    ///
    /// # Panics
    ///
    /// Panics if the container already holds a value.
    pub(crate) fn set_value(&mut self, handle: Handle, slot: Slot) {
        let entry = &mut self.entries[handle];
        match &mut entry.build {
            Build::Value(value @ None) => *value = Some(slot),
            Build::Value(Some(_)) => panic!(
                "single-value container at '{}' already holds a value",
                entry.path
            ),
            other => unreachable!("single-value write into {other:?}"),
        }
    }

    /// Converts the build container at `root` into an immutable tree.
    ///
    /// # Panics
    ///
    /// Panics if any reachable slot belongs to a coder that never requested
    /// a container, or to a single-value container that was never written.
    pub(crate) fn flatten(mut self, root: Handle) -> Node {
        self.take(root)
    }

    fn take(&mut self, handle: Handle) -> Node {
        match mem::replace(&mut self.entries[handle].build, Build::Taken) {
            Build::Map(map) => Node::Map(
                map.into_iter()
                    .map(|(key, slot)| (key, self.resolve(slot)))
                    .collect(),
            ),
            Build::Sequence(items) => {
                Node::Sequence(items.into_iter().map(|slot| self.resolve(slot)).collect())
            }
            Build::Value(Some(slot)) => self.resolve(slot),
            Build::Value(None) => panic!(
                "single-value container at '{}' was never written",
                self.entries[handle].path
            ),
            Build::Pending => panic!(
                "value at '{}' did not request a container",
                self.entries[handle].path
            ),
            Build::Taken => unreachable!(
                "build container at '{}' flattened twice",
                self.entries[handle].path
            ),
        }
    }

    fn resolve(&mut self, slot: Slot) -> Node {
        match slot {
            Slot::Node(node) => node,
            Slot::Build(handle) => self.take(handle),
        }
    }
}
