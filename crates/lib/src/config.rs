//! Configuration shared by every coder in one encode or decode operation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::node::Node;

/// Settings for a [`TreeEncoder`](crate::TreeEncoder) or
/// [`TreeDecoder`](crate::TreeDecoder).
///
/// # Example
///
/// ```
/// use treecodec::{CodingConfig, Node, TreeEncoder};
///
/// let mut config = CodingConfig::default();
/// config.user_info.insert("schema".to_string(), Node::from(2u8));
///
/// let encoder = TreeEncoder::with_config(config);
/// assert_eq!(encoder.config().user_info.len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CodingConfig {
    /// Caller-supplied context made available to every `Encode`/`Decode`
    /// implementation through `user_info()`.
    ///
    /// The engine never reads it.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub user_info: BTreeMap<String, Node>,
}

impl CodingConfig {
    /// Creates an empty configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a `user_info` entry, builder style.
    pub fn with_user_info(mut self, key: impl Into<String>, value: impl Into<Node>) -> Self {
        self.user_info.insert(key.into(), value.into());
        self
    }
}
