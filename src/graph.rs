// Copyright 2025 Cowboy AI, LLC.

//! Rule network view
//!
//! A [`RuleGraph`] links antecedent variables to rules and rules to
//! consequent variables. Drawing it is left entirely to a
//! [`GraphRenderer`]; [`ControlSystemVisualizer`] only forwards the graph.

use crate::errors::{OverlayError, VizResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Node ID - only meaningful within one rule graph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(Uuid);

impl NodeId {
    /// Create a new random node ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// What a node in the rule graph stands for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKind {
    /// Variable read by rules
    Antecedent,
    /// A rule
    Rule,
    /// Variable written by rules
    Consequent,
}

/// Node of a rule graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    /// Identity within the graph
    pub id: NodeId,
    /// Display label
    pub label: String,
    /// Role of the node
    pub kind: NodeKind,
}

/// Directed graph of variables and rules
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuleGraph {
    nodes: Vec<GraphNode>,
    edges: Vec<(NodeId, NodeId)>,
}

impl RuleGraph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rule reading `antecedents` and writing `consequents`
    ///
    /// Variable nodes are shared between rules by label. A label used both
    /// as antecedent and consequent is a configuration error.
    pub fn add_rule(
        &mut self,
        rule: impl Into<String>,
        antecedents: &[&str],
        consequents: &[&str],
    ) -> VizResult<NodeId> {
        if let Some(label) = antecedents.iter().find(|a| consequents.contains(*a)) {
            return Err(OverlayError::configuration(format!(
                "variable '{label}' cannot be both antecedent and consequent of one rule"
            )));
        }
        for label in antecedents {
            self.check_side(label, NodeKind::Antecedent)?;
        }
        for label in consequents {
            self.check_side(label, NodeKind::Consequent)?;
        }

        let rule_id = self.push_node(rule.into(), NodeKind::Rule);
        for label in antecedents {
            let var = self.variable_node(label, NodeKind::Antecedent);
            self.edges.push((var, rule_id));
        }
        for label in consequents {
            let var = self.variable_node(label, NodeKind::Consequent);
            self.edges.push((rule_id, var));
        }
        Ok(rule_id)
    }

    /// All nodes in insertion order
    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    /// All directed edges
    pub fn edges(&self) -> &[(NodeId, NodeId)] {
        &self.edges
    }

    /// Find a node by id
    pub fn node(&self, id: NodeId) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    fn push_node(&mut self, label: String, kind: NodeKind) -> NodeId {
        let id = NodeId::new();
        self.nodes.push(GraphNode { id, label, kind });
        id
    }

    fn find_variable(&self, label: &str) -> Option<&GraphNode> {
        self.nodes
            .iter()
            .find(|n| n.kind != NodeKind::Rule && n.label == label)
    }

    fn check_side(&self, label: &str, kind: NodeKind) -> VizResult<()> {
        match self.find_variable(label) {
            Some(node) if node.kind != kind => Err(OverlayError::configuration(format!(
                "variable '{}' is already a {:?} and cannot also be a {:?}",
                label, node.kind, kind
            ))),
            _ => Ok(()),
        }
    }

    fn variable_node(&mut self, label: &str, kind: NodeKind) -> NodeId {
        match self.find_variable(label).map(|n| n.id) {
            Some(id) => id,
            None => self.push_node(label.to_string(), kind),
        }
    }
}

/// Something that can draw a rule graph
pub trait GraphRenderer {
    /// Whatever the renderer hands back (a figure, a file handle, ...)
    type Handle;

    /// Draw `graph`
    fn draw(&mut self, graph: &RuleGraph) -> Self::Handle;
}

/// Forwards a rule graph to a renderer
#[derive(Debug, Clone, Copy)]
pub struct ControlSystemVisualizer<'a> {
    graph: &'a RuleGraph,
}

impl<'a> ControlSystemVisualizer<'a> {
    /// Visualize `graph`
    pub fn new(graph: &'a RuleGraph) -> Self {
        Self { graph }
    }

    /// Draw the graph with `renderer`
    pub fn view<R: GraphRenderer + ?Sized>(&self, renderer: &mut R) -> R::Handle {
        renderer.draw(self.graph)
    }
}
