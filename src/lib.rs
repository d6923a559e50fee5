//! # Flowstate - Graph State Engine for Pipeline Editors
//!
//! **Flowstate** is the state and consistency core for interactive node-graph
//! ("pipeline") editors: the data model for nodes and edges, human-readable
//! id allocation, the mutation operations with their invariants, cascade
//! delete for groups, handle derivation from node content, and best-effort
//! persistence of the whole graph.
//!
//! Rendering, drag physics, and pipeline execution are explicitly someone
//! else's job. The presentation layer talks to this crate through a small
//! operation surface and reads the node/edge sequences back for drawing.
//!
//! ## Core Workflow
//!
//! 1.  **Open a store**: [`GraphStore::new`](graph::GraphStore::new) restores
//!     whatever the [`StateSlot`](persist::StateSlot) holds; a missing or
//!     malformed record degrades to the empty graph instead of failing
//!     startup.
//! 2.  **Mutate**: the UI feeds user gestures into the store — node drops
//!     become [`spawn_node`](graph::GraphStore::spawn_node), form edits
//!     become [`update_node_field`](graph::GraphStore::update_node_field),
//!     finished connection gestures become
//!     [`connect`](graph::GraphStore::connect), and drag/select/delete
//!     batches go through
//!     [`apply_node_changes`](graph::GraphStore::apply_node_changes) /
//!     [`apply_edge_changes`](graph::GraphStore::apply_edge_changes).
//! 3.  **Render**: read [`nodes`](graph::GraphStore::nodes) and
//!     [`edges`](graph::GraphStore::edges), and ask
//!     [`derive_handles`](handles::derive_handles) for each node's current
//!     connection points.
//!
//! Every successful mutation is persisted through the slot; a persistence
//! failure is logged and swallowed, keeping the in-memory graph
//! authoritative for the session.
//!
//! ## Quick Start
//!
//! ```rust
//! use flowstate::prelude::*;
//!
//! let mut store = GraphStore::in_memory();
//!
//! // Drop two nodes onto the canvas.
//! let input = store.spawn_node("customInput", Position::new(100.0, 100.0));
//! let text = store.spawn_node("text", Position::new(400.0, 100.0));
//! assert_eq!(input, "customInput-1");
//!
//! // A text node derives its input handles from its placeholders.
//! store.update_node_field(&text, "text", serde_json::json!("Hello {{name}}!"));
//! let handles = derive_handles(store.node(&text).expect("node exists"));
//! assert_eq!(handles[0].id, "name");
//!
//! // Wire them up, then tear one down: the edge cascades away with it.
//! store.connect(Connection::new(&input, "value", &text, "name"));
//! assert_eq!(store.edges().len(), 1);
//! store.remove_node(&input);
//! assert!(store.edges().is_empty());
//! ```

pub mod error;
pub mod graph;
pub mod handles;
pub mod persist;
pub mod prelude;
