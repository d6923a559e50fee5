//! The graph domain: model types, identity allocation, change batches, and
//! the store that owns it all.

mod change;
mod edge;
mod identity;
mod node;
mod store;

pub use change::{EdgeChange, NodeChange};
pub use edge::{Connection, Edge, EdgeMarker};
pub use identity::IdRegistry;
pub use node::{Node, NodeKind, Position};
pub use store::{GraphStore, IgnoreReason, OpStatus};
