//! Pipeline model
//!
//! A pipeline is an ordered list of nodes. Node inputs are references of the
//! form `params:<dotted.key>` resolved against the project parameters.

use serde::Serialize;

/// Operation a node performs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// Stage a local file (`source` -> `destination`)
    ImportLocal,
}

/// A named step in a pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    /// Node name, unique within a pipeline
    pub name: String,
    /// What the node does
    pub kind: NodeKind,
    /// Named inputs (`argument`, `params:key`)
    pub inputs: Vec<(String, String)>,
}

impl Node {
    /// Create a node
    #[must_use]
    pub fn new(name: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            inputs: Vec::new(),
        }
    }

    /// Add a named input
    #[must_use]
    pub fn input(mut self, argument: &str, reference: &str) -> Self {
        self.inputs.push((argument.to_string(), reference.to_string()));
        self
    }

    /// Look up the reference bound to an argument
    #[must_use]
    pub fn reference(&self, argument: &str) -> Option<&str> {
        self.inputs.iter().find(|(arg, _)| arg == argument).map(|(_, r)| r.as_str())
    }
}

/// An ordered collection of nodes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Pipeline {
    /// Nodes in execution order
    pub nodes: Vec<Node>,
}

impl Pipeline {
    /// Create a pipeline from nodes
    #[must_use]
    pub const fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }
}

/// Strip the `params:` prefix from a node input reference
#[must_use]
pub fn param_key(reference: &str) -> Option<&str> {
    reference.strip_prefix("params:")
}
