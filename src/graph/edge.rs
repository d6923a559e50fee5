use serde::{Deserialize, Serialize};

/// Marker drawn at the target end of an edge. Presentation metadata; carried
/// so a rendered graph round-trips through persistence unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeMarker {
    #[serde(rename = "type")]
    pub marker_type: String,
}

impl Default for EdgeMarker {
    fn default() -> Self {
        Self {
            marker_type: "arrowclosed".to_string(),
        }
    }
}

/// A resolved connection-drawing gesture: both endpoints are known, the edge
/// has not been created yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub source: String,
    #[serde(rename = "sourceHandle")]
    pub source_handle: String,
    pub target: String,
    #[serde(rename = "targetHandle")]
    pub target_handle: String,
}

impl Connection {
    pub fn new(
        source: impl Into<String>,
        source_handle: impl Into<String>,
        target: impl Into<String>,
        target_handle: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            source_handle: source_handle.into(),
            target: target.into(),
            target_handle: target_handle.into(),
        }
    }
}

/// A directed connection between a named output handle on one node and a
/// named input handle on another.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub id: String,
    pub source: String,
    #[serde(rename = "sourceHandle")]
    pub source_handle: String,
    pub target: String,
    #[serde(rename = "targetHandle")]
    pub target_handle: String,
    #[serde(rename = "type", default = "default_edge_type")]
    pub edge_type: String,
    #[serde(default)]
    pub animated: bool,
    #[serde(rename = "markerEnd", default)]
    pub marker_end: EdgeMarker,
    #[serde(default)]
    pub selected: bool,
}

fn default_edge_type() -> String {
    "default".to_string()
}

impl Edge {
    /// Builds the default-styled edge for a freshly drawn connection.
    ///
    /// The id is derived from the endpoint quadruple, so drawing the same
    /// connection twice yields the same id (and the store treats the second
    /// attempt as a duplicate).
    pub fn from_connection(connection: Connection) -> Self {
        let id = format!(
            "edge-{}{}-{}{}",
            connection.source, connection.source_handle, connection.target, connection.target_handle
        );
        Self {
            id,
            source: connection.source,
            source_handle: connection.source_handle,
            target: connection.target,
            target_handle: connection.target_handle,
            edge_type: default_edge_type(),
            animated: false,
            marker_end: EdgeMarker::default(),
            selected: false,
        }
    }

    /// Whether this edge touches the given node on either end.
    pub fn touches(&self, node_id: &str) -> bool {
        self.source == node_id || self.target == node_id
    }
}
