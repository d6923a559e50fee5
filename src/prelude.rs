//! Prelude module for convenient imports
//!
//! Re-exports the types most editors need: the store and its operation
//! surface, the model types, handle derivation, and the persistence
//! adapters.
//!
//! # Example
//!
//! ```rust
//! use flowstate::prelude::*;
//!
//! let mut store = GraphStore::in_memory();
//! let id = store.spawn_node("llm", Position::default());
//! assert_eq!(id, "llm-1");
//! ```

// The store and its operation surface
pub use crate::graph::{GraphStore, IgnoreReason, OpStatus};

// Model types
pub use crate::graph::{
    Connection, Edge, EdgeChange, EdgeMarker, IdRegistry, Node, NodeChange, NodeKind, Position,
};

// Handle derivation
pub use crate::handles::{Handle, HandleDirection, HandleSide, derive_handles};

// Persistence boundary
pub use crate::error::PersistError;
pub use crate::persist::{FileSlot, FlowSnapshot, MemorySlot, StateSlot};

// Map type used for node configuration data
pub use ahash::AHashMap;
