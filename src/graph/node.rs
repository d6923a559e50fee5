use ahash::AHashMap;
use serde::{Deserialize, Serialize};

/// Canvas coordinates of a node. Written by drag interaction on the UI side;
/// the core treats it as opaque payload.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A vertex in the pipeline graph: a typed, configurable unit.
///
/// `id` and `node_type` are immutable once the node is added to a store;
/// everything the node is configured with lives in `data`, which the core
/// never interprets except where a kind's handle set is derived from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    #[serde(rename = "type")]
    pub node_type: String,
    #[serde(default)]
    pub position: Position,
    #[serde(default)]
    pub data: AHashMap<String, serde_json::Value>,
    /// Group containment: at most one parent, forming a tree.
    #[serde(rename = "parentId", default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(default)]
    pub selected: bool,
}

impl Node {
    /// Creates a bare node with empty configuration data.
    pub fn new(id: impl Into<String>, node_type: impl Into<String>, position: Position) -> Self {
        Self {
            id: id.into(),
            node_type: node_type.into(),
            position,
            data: AHashMap::new(),
            parent_id: None,
            selected: false,
        }
    }

    /// Places the node inside a group.
    pub fn with_parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    /// Sets a single configuration field, builder-style.
    pub fn with_field(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.data.insert(key.into(), value);
        self
    }
}

/// The closed set of node kinds the editor palette offers.
///
/// Node types travel as strings on the wire; this enum is the parsed view
/// used by handle derivation. Unknown type strings simply parse to `None`
/// and expose no handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Input,
    Output,
    Text,
    Llm,
    Filter,
    Condition,
    DataSource,
    Template,
    Visualization,
    Math,
    WebScraper,
    Group,
}

impl NodeKind {
    /// Parses one of the known palette type strings.
    pub fn parse(type_str: &str) -> Option<Self> {
        match type_str {
            "customInput" => Some(Self::Input),
            "customOutput" => Some(Self::Output),
            "text" => Some(Self::Text),
            "llm" => Some(Self::Llm),
            "filter" => Some(Self::Filter),
            "condition" => Some(Self::Condition),
            "dataSource" => Some(Self::DataSource),
            "template" => Some(Self::Template),
            "visualization" => Some(Self::Visualization),
            "math" => Some(Self::Math),
            "webScraper" => Some(Self::WebScraper),
            "group" => Some(Self::Group),
            _ => None,
        }
    }

    /// The wire/palette type string for this kind.
    pub fn type_str(self) -> &'static str {
        match self {
            Self::Input => "customInput",
            Self::Output => "customOutput",
            Self::Text => "text",
            Self::Llm => "llm",
            Self::Filter => "filter",
            Self::Condition => "condition",
            Self::DataSource => "dataSource",
            Self::Template => "template",
            Self::Visualization => "visualization",
            Self::Math => "math",
            Self::WebScraper => "webScraper",
            Self::Group => "group",
        }
    }

    /// Default configuration for a freshly dropped node of this kind.
    ///
    /// Kinds whose handle set is content-derived start out with the content
    /// their editor form shows by default; everything else starts empty.
    pub fn default_data(self) -> AHashMap<String, serde_json::Value> {
        let mut data = AHashMap::new();
        match self {
            Self::Text => {
                data.insert("text".to_string(), serde_json::json!("{{input}}"));
            }
            Self::Template => {
                data.insert("targetCount".to_string(), serde_json::json!(3));
            }
            _ => {}
        }
        data
    }
}
