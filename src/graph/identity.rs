use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Per-type monotonic counters used to mint human-readable node ids.
///
/// The registry is plain owned state inside the [`GraphStore`](super::GraphStore)
/// and is serialized alongside the graph, so ids minted across sessions never
/// collide with previously used ids of the same type. Counters are never
/// decremented: removing a node does not free its id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdRegistry {
    counters: AHashMap<String, u64>,
}

impl IdRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mints the next id for `node_type` as `"{type}-{n}"`.
    ///
    /// The counter is pre-incremented, so the first id for a type is
    /// `"{type}-1"`. Any string is accepted; validating against the palette
    /// is the caller's concern.
    pub fn allocate(&mut self, node_type: &str) -> String {
        let counter = self.counters.entry(node_type.to_string()).or_insert(0);
        *counter += 1;
        format!("{}-{}", node_type, counter)
    }

    /// How many ids have been minted for `node_type` so far.
    pub fn count_for(&self, node_type: &str) -> u64 {
        self.counters.get(node_type).copied().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }

    /// Forgets all counters. Only meaningful as part of a full state reset.
    pub fn clear(&mut self) {
        self.counters.clear();
    }
}
