use super::change::{EdgeChange, NodeChange};
use super::edge::{Connection, Edge};
use super::identity::IdRegistry;
use super::node::{Node, NodeKind, Position};
use crate::persist::{FlowSnapshot, MemorySlot, StateSlot, load_snapshot, save_snapshot};
use ahash::{AHashMap, AHashSet};

/// Outcome of a graph mutation.
///
/// Operations referencing unknown ids are tolerated as no-ops rather than
/// errors (the UI may fire stale events); the status lets callers log or
/// assert without changing that lenient default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpStatus {
    Applied,
    Ignored(IgnoreReason),
}

impl OpStatus {
    pub fn is_applied(self) -> bool {
        matches!(self, OpStatus::Applied)
    }
}

/// Why a mutation was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    NodeNotFound,
    EdgeNotFound,
    DuplicateNode,
    DuplicateEdge,
}

/// The canonical owner of the node and edge collections.
///
/// All mutation goes through this type; it enforces the one hard invariant
/// of the graph — node-id referential integrity, maintained by cascade
/// delete — and writes a [`FlowSnapshot`] through its slot after every
/// mutation. Operations are synchronous and atomic: no partial state is
/// observable between them.
///
/// Node insertion order is z-order for the renderer and carries no
/// connectivity meaning.
pub struct GraphStore {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    registry: IdRegistry,
    /// Parent id -> child ids, kept in sync with `nodes` so group cascade
    /// does not rescan the whole sequence per removal.
    children: AHashMap<String, Vec<String>>,
    slot: Box<dyn StateSlot>,
}

impl GraphStore {
    /// Opens a store over the given slot, restoring whatever state it holds.
    /// A missing or malformed record yields an empty graph.
    pub fn new(slot: Box<dyn StateSlot>) -> Self {
        let snapshot = load_snapshot(slot.as_ref());
        let mut store = Self {
            nodes: snapshot.nodes,
            edges: snapshot.edges,
            registry: snapshot.node_ids,
            children: AHashMap::new(),
            slot,
        };
        store.rebuild_children_index();
        store
    }

    /// A store with no durable backing. Nothing survives the process.
    pub fn in_memory() -> Self {
        Self::new(Box::new(MemorySlot::new()))
    }

    // ---- read surface -------------------------------------------------

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, node_id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == node_id)
    }

    pub fn edge(&self, edge_id: &str) -> Option<&Edge> {
        self.edges.iter().find(|e| e.id == edge_id)
    }

    pub fn registry(&self) -> &IdRegistry {
        &self.registry
    }

    /// Direct children of a group node. Empty for leaves and unknown ids.
    pub fn children_of(&self, node_id: &str) -> &[String] {
        self.children.get(node_id).map(Vec::as_slice).unwrap_or(&[])
    }

    // ---- mutation surface ---------------------------------------------

    /// Mints a fresh id for `node_type`. The registry mutation is persisted
    /// immediately so a reload cannot re-issue the id.
    pub fn allocate_id(&mut self, node_type: &str) -> String {
        let id = self.registry.allocate(node_type);
        self.persist();
        id
    }

    /// Appends a node. The id must have come from [`allocate_id`]; an id
    /// already present in the sequence is ignored as a duplicate.
    ///
    /// A `parent_id` must name a node already in the sequence. Since a
    /// freshly added node has no children yet, this keeps containment a
    /// tree: a cycle through parent references cannot be formed.
    ///
    /// [`allocate_id`]: GraphStore::allocate_id
    pub fn add_node(&mut self, node: Node) -> OpStatus {
        if self.node(&node.id).is_some() {
            return OpStatus::Ignored(IgnoreReason::DuplicateNode);
        }
        if let Some(parent) = &node.parent_id
            && self.node(parent).is_none()
        {
            return OpStatus::Ignored(IgnoreReason::NodeNotFound);
        }
        if let Some(parent) = &node.parent_id {
            self.children
                .entry(parent.clone())
                .or_default()
                .push(node.id.clone());
        }
        self.nodes.push(node);
        self.log_state("add_node");
        self.persist();
        OpStatus::Applied
    }

    /// Drag-initiated creation: allocates an id, fills in the kind's default
    /// configuration, appends the node, and returns the new id.
    pub fn spawn_node(&mut self, node_type: &str, position: Position) -> String {
        let id = self.registry.allocate(node_type);
        let mut node = Node::new(id.clone(), node_type, position);
        if let Some(kind) = NodeKind::parse(node_type) {
            node.data = kind.default_data();
        }
        self.add_node(node);
        id
    }

    /// Replaces `data[key]` on one node, leaving every other field alone.
    ///
    /// An unknown `node_id` is a silent no-op (stale form events are
    /// expected); the stored record is still refreshed either way.
    pub fn update_node_field(
        &mut self,
        node_id: &str,
        key: &str,
        value: serde_json::Value,
    ) -> OpStatus {
        let status = match self.nodes.iter_mut().find(|n| n.id == node_id) {
            Some(node) => {
                node.data.insert(key.to_string(), value);
                OpStatus::Applied
            }
            None => OpStatus::Ignored(IgnoreReason::NodeNotFound),
        };
        self.log_state("update_node_field");
        self.persist();
        status
    }

    /// Creates the edge for a completed connection gesture.
    ///
    /// Both node ids must exist. Handle ids are deliberately not validated:
    /// content-derived handle sets can change after an edge is drawn, so
    /// node-id integrity is the only hard invariant enforced here. Drawing
    /// an identical connection twice is ignored as a duplicate.
    pub fn connect(&mut self, connection: Connection) -> OpStatus {
        if self.node(&connection.source).is_none() || self.node(&connection.target).is_none() {
            return OpStatus::Ignored(IgnoreReason::NodeNotFound);
        }
        let edge = Edge::from_connection(connection);
        if self.edge(&edge.id).is_some() {
            return OpStatus::Ignored(IgnoreReason::DuplicateEdge);
        }
        self.edges.push(edge);
        self.log_state("connect");
        self.persist();
        OpStatus::Applied
    }

    /// Removes a node, every edge touching it, and — when the node is a
    /// group — its contained descendants, recursively, with their edges.
    /// The cascade is applied in one pass; no intermediate state is
    /// observable.
    pub fn remove_node(&mut self, node_id: &str) -> OpStatus {
        if self.node(node_id).is_none() {
            return OpStatus::Ignored(IgnoreReason::NodeNotFound);
        }
        let doomed = self.containment_closure(node_id);
        self.remove_closure(&doomed);
        self.log_state("remove_node");
        self.persist();
        OpStatus::Applied
    }

    /// Removes exactly one edge; no cascade.
    pub fn remove_edge(&mut self, edge_id: &str) -> OpStatus {
        let before = self.edges.len();
        self.edges.retain(|e| e.id != edge_id);
        if self.edges.len() == before {
            return OpStatus::Ignored(IgnoreReason::EdgeNotFound);
        }
        self.log_state("remove_edge");
        self.persist();
        OpStatus::Applied
    }

    /// Applies a UI change batch over the node sequence in one pass.
    /// Removals inside the batch run the same cascade as [`remove_node`];
    /// the whole batch persists once.
    ///
    /// [`remove_node`]: GraphStore::remove_node
    pub fn apply_node_changes(&mut self, changes: Vec<NodeChange>) {
        let mut doomed = AHashSet::new();
        for change in changes {
            match change {
                NodeChange::Move { id, position } => {
                    if let Some(node) = self.nodes.iter_mut().find(|n| n.id == id) {
                        node.position = position;
                    }
                }
                NodeChange::Select { id, selected } => {
                    if let Some(node) = self.nodes.iter_mut().find(|n| n.id == id) {
                        node.selected = selected;
                    }
                }
                NodeChange::Remove { id } => {
                    if self.node(&id).is_some() {
                        doomed.extend(self.containment_closure(&id));
                    }
                }
            }
        }
        if !doomed.is_empty() {
            self.remove_closure(&doomed);
        }
        self.log_state("apply_node_changes");
        self.persist();
    }

    /// Applies a UI change batch over the edge sequence in one pass.
    pub fn apply_edge_changes(&mut self, changes: Vec<EdgeChange>) {
        for change in changes {
            match change {
                EdgeChange::Select { id, selected } => {
                    if let Some(edge) = self.edges.iter_mut().find(|e| e.id == id) {
                        edge.selected = selected;
                    }
                }
                EdgeChange::Remove { id } => {
                    self.edges.retain(|e| e.id != id);
                }
            }
        }
        self.log_state("apply_edge_changes");
        self.persist();
    }

    /// Full wipe: nodes, edges, and the id registry. The stored record is
    /// rewritten to the empty graph's shape ("reset flow").
    pub fn reset(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.registry.clear();
        self.children.clear();
        self.log_state("reset");
        self.persist();
    }

    /// Deletes the stored record outright ("clear storage"). In-memory
    /// state is untouched; the next load yields the empty graph.
    pub fn clear_persisted(&mut self) {
        if let Err(e) = self.slot.clear() {
            tracing::error!(error = %e, "failed to clear persisted flow state");
        }
    }

    // ---- internals -----------------------------------------------------

    /// `node_id` plus every descendant reachable through group containment.
    fn containment_closure(&self, node_id: &str) -> AHashSet<String> {
        let mut doomed = AHashSet::new();
        let mut pending = vec![node_id.to_string()];
        while let Some(id) = pending.pop() {
            if !doomed.insert(id.clone()) {
                continue;
            }
            if let Some(kids) = self.children.get(&id) {
                pending.extend(kids.iter().cloned());
            }
        }
        doomed
    }

    /// Drops the given nodes, all edges touching any of them, and their
    /// entries in the children index.
    fn remove_closure(&mut self, doomed: &AHashSet<String>) {
        self.nodes.retain(|n| !doomed.contains(&n.id));
        self.edges
            .retain(|e| !doomed.contains(&e.source) && !doomed.contains(&e.target));
        for id in doomed {
            self.children.remove(id);
        }
        for kids in self.children.values_mut() {
            kids.retain(|k| !doomed.contains(k));
        }
        self.children.retain(|_, kids| !kids.is_empty());
    }

    fn rebuild_children_index(&mut self) {
        self.children.clear();
        for node in &self.nodes {
            if let Some(parent) = &node.parent_id {
                self.children
                    .entry(parent.clone())
                    .or_default()
                    .push(node.id.clone());
            }
        }
    }

    /// Persistence is fire-and-forget: a failure is logged and swallowed,
    /// never rolled back into the in-memory graph.
    fn persist(&mut self) {
        let snapshot =
            FlowSnapshot::capture(self.nodes.clone(), self.edges.clone(), self.registry.clone());
        if let Err(e) = save_snapshot(self.slot.as_mut(), &snapshot) {
            tracing::error!(error = %e, "failed to persist flow state, keeping in-memory graph");
        }
    }

    fn log_state(&self, action: &str) {
        tracing::debug!(
            action,
            nodes = self.nodes.len(),
            edges = self.edges.len(),
            "state update"
        );
    }
}
