//! Handle derivation: computing the ordered connection points a node
//! currently exposes from its type and configuration.
//!
//! Derivation is pure and content-addressed: the same node data always
//! yields the same handle sequence. The store itself never consults this
//! module — handle existence is a rendering concern, not a graph-integrity
//! concern — but the UI uses it to draw connection points and to decide
//! which partial connections look possible.

use crate::graph::{Node, NodeKind};
use itertools::Itertools;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Placeholder tokens like `{{input}}`: an identifier of letters, digits and
/// underscores (not starting with a digit) between double braces.
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*([a-zA-Z_][a-zA-Z0-9_]*)\s*\}\}").expect("placeholder pattern is valid")
});

/// Number of template inputs when the node carries no explicit count.
const TEMPLATE_DEFAULT_TARGETS: i64 = 3;
/// Inclusive clamp range for the template input count.
const TEMPLATE_MIN_TARGETS: i64 = 2;
const TEMPLATE_MAX_TARGETS: i64 = 10;

/// Whether a handle accepts an incoming edge or emits an outgoing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandleDirection {
    /// Output: edges start here.
    Source,
    /// Input: edges end here.
    Target,
}

/// Which side of the node the handle is drawn on. Pure layout hint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandleSide {
    Left,
    Right,
}

/// A named connection point on a node.
///
/// Handle ids are unique per node, not globally; an edge endpoint is the
/// pair `(node id, handle id)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Handle {
    pub id: String,
    pub direction: HandleDirection,
    pub side: HandleSide,
    /// Vertical placement hint as a percentage of node height, for kinds
    /// that pin their handles to fixed spots.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_percent: Option<u8>,
}

impl Handle {
    fn source(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            direction: HandleDirection::Source,
            side: HandleSide::Right,
            top_percent: None,
        }
    }

    fn target(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            direction: HandleDirection::Target,
            side: HandleSide::Left,
            top_percent: None,
        }
    }

    fn at(mut self, percent: u8) -> Self {
        self.top_percent = Some(percent);
        self
    }
}

/// Computes the ordered handle sequence for `node`.
///
/// Static kinds expose a set fixed by type alone; `text` and `template`
/// derive theirs from `data`. Group nodes are pure containers and unknown
/// type strings expose nothing.
pub fn derive_handles(node: &Node) -> Vec<Handle> {
    let Some(kind) = NodeKind::parse(&node.node_type) else {
        return Vec::new();
    };
    match kind {
        NodeKind::Input => vec![Handle::source("value")],
        NodeKind::Output => vec![Handle::target("value")],
        NodeKind::Filter | NodeKind::Visualization | NodeKind::Math | NodeKind::WebScraper => {
            vec![Handle::target("input"), Handle::source("output")]
        }
        NodeKind::DataSource => vec![Handle::target("config"), Handle::source("response")],
        NodeKind::Condition => vec![
            Handle::target("input"),
            Handle::source("true").at(33),
            Handle::source("false").at(66),
        ],
        NodeKind::Llm => vec![
            Handle::target("system").at(33),
            Handle::target("prompt").at(67),
            Handle::source("response"),
        ],
        NodeKind::Text => text_handles(node),
        NodeKind::Template => template_handles(node),
        NodeKind::Group => Vec::new(),
    }
}

/// Extracts the distinct placeholder identifiers from a text body, in order
/// of first appearance.
pub fn extract_placeholders(text: &str) -> Vec<String> {
    PLACEHOLDER
        .captures_iter(text)
        .map(|captures| captures[1].to_string())
        .unique()
        .collect()
}

/// One input per distinct placeholder, then the fixed `output`.
///
/// Handles are keyed by placeholder name, so renaming a placeholder is
/// indistinguishable from removing one and adding another; an edge bound to
/// the old name dangles. Known limitation of the name-keyed scheme.
fn text_handles(node: &Node) -> Vec<Handle> {
    let text = node
        .data
        .get("text")
        .and_then(|value| value.as_str())
        .unwrap_or("");
    // Text inputs are stacked at a fixed pixel step down the left edge,
    // which the percent hint cannot express; they carry no hint and the
    // renderer lays them out by sequence position instead.
    let mut handles: Vec<Handle> = extract_placeholders(text)
        .into_iter()
        .map(Handle::target)
        .collect();
    handles.push(Handle::source("output"));
    handles
}

/// `var1..varN` inputs spread evenly down the left side, then the fixed
/// `output`. N comes from `data["targetCount"]`, clamped to [2, 10].
fn template_handles(node: &Node) -> Vec<Handle> {
    let requested = node
        .data
        .get("targetCount")
        .and_then(|value| value.as_i64().or_else(|| value.as_f64().map(|f| f as i64)))
        .unwrap_or(TEMPLATE_DEFAULT_TARGETS);
    let count = requested.clamp(TEMPLATE_MIN_TARGETS, TEMPLATE_MAX_TARGETS);

    let mut handles: Vec<Handle> = (1..=count)
        .map(|i| {
            let percent = ((i as f64 / (count + 1) as f64) * 100.0).round() as u8;
            Handle::target(format!("var{}", i)).at(percent)
        })
        .collect();
    handles.push(Handle::source("output"));
    handles
}
