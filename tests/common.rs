//! Common test utilities for building graphs and stores.
use flowstate::prelude::*;

/// Creates a bare node of the given type, bypassing the allocator. Useful
/// when a test wants full control over the id.
#[allow(dead_code)]
pub fn node(id: &str, node_type: &str) -> Node {
    Node::new(id, node_type, Position::default())
}

/// Creates a text node carrying the given body.
#[allow(dead_code)]
pub fn text_node(id: &str, text: &str) -> Node {
    node(id, "text").with_field("text", serde_json::json!(text))
}

/// Creates a template node with an explicit input count.
#[allow(dead_code)]
pub fn template_node(id: &str, target_count: i64) -> Node {
    node(id, "template").with_field("targetCount", serde_json::json!(target_count))
}

/// An in-memory store pre-populated with one input and one output node
/// (`customInput-1`, `customOutput-1`), ids minted through the allocator.
#[allow(dead_code)]
pub fn store_with_endpoints() -> GraphStore {
    let mut store = GraphStore::in_memory();
    store.spawn_node("customInput", Position::new(0.0, 0.0));
    store.spawn_node("customOutput", Position::new(300.0, 0.0));
    store
}

/// Ids of target-direction handles for a node, in derivation order.
#[allow(dead_code)]
pub fn input_handle_ids(node: &Node) -> Vec<String> {
    derive_handles(node)
        .into_iter()
        .filter(|h| h.direction == HandleDirection::Target)
        .map(|h| h.id)
        .collect()
}
