use super::node::Position;
use serde::{Deserialize, Serialize};

/// A single item in a UI-driven node change batch (drag, rubber-band select,
/// multi-delete). Batches are applied in one pass by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum NodeChange {
    Move { id: String, position: Position },
    Select { id: String, selected: bool },
    Remove { id: String },
}

/// A single item in a UI-driven edge change batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum EdgeChange {
    Select { id: String, selected: bool },
    Remove { id: String },
}
