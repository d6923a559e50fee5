//! Persistence of the flow state: one JSON record per editor, written after
//! every mutation, read once at startup.
//!
//! Durability is best-effort. A write failure is reported to the caller (the
//! store logs and swallows it), and a missing or malformed record on load
//! degrades to the empty graph rather than failing startup.

use crate::error::PersistError;
use crate::graph::{Edge, IdRegistry, Node};
use chrono::Utc;
use serde::{Deserialize, Serialize};

mod slot;

pub use slot::{FileSlot, MemorySlot, StateSlot};

/// The single persisted record: the full graph plus the id registry, stamped
/// with the write time.
///
/// The registry travels with the graph so ids minted in a later session
/// never collide with ids handed out before a reload.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlowSnapshot {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<Edge>,
    #[serde(rename = "nodeIDs", default)]
    pub node_ids: IdRegistry,
    #[serde(default)]
    pub timestamp: String,
}

impl FlowSnapshot {
    /// Captures a snapshot stamped with the current time (ISO-8601).
    pub fn capture(nodes: Vec<Node>, edges: Vec<Edge>, node_ids: IdRegistry) -> Self {
        Self {
            nodes,
            edges,
            node_ids,
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

/// Serializes the snapshot and writes it into the slot.
pub fn save_snapshot(slot: &mut dyn StateSlot, snapshot: &FlowSnapshot) -> Result<(), PersistError> {
    let payload = serde_json::to_string(snapshot)?;
    slot.write(&payload)
}

/// Loads the stored record, degrading to the empty graph when the slot is
/// empty, unreadable, or holds malformed JSON. Never fails.
pub fn load_snapshot(slot: &dyn StateSlot) -> FlowSnapshot {
    match slot.read() {
        Ok(Some(raw)) => match serde_json::from_str::<FlowSnapshot>(&raw) {
            Ok(snapshot) => {
                tracing::debug!(timestamp = %snapshot.timestamp, "loaded persisted flow state");
                snapshot
            }
            Err(e) => {
                tracing::warn!(error = %e, "persisted flow state is malformed, starting empty");
                FlowSnapshot::default()
            }
        },
        Ok(None) => FlowSnapshot::default(),
        Err(e) => {
            tracing::warn!(error = %e, "could not read persisted flow state, starting empty");
            FlowSnapshot::default()
        }
    }
}
