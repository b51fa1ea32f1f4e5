//! Graph records: nodes, edges, triangles, and the analysis result.
//!
//! The graph is rebuilt fresh per analysis call from caller-supplied nodes
//! and edges; nothing here persists inside the core. `BTreeMap` keys give
//! reproducible iteration order, which the triangle ranking depends on.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Trait scores attached to a person node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TraitScores {
    /// Neuroticism on the unit scale.
    pub neuroticism: f64,
}

/// The slice of a latent state the graph engine consumes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StateSlice {
    pub bis: f64,
    pub recovery: f64,
}

/// Trait and state inputs for one person, both optional.
///
/// Missing values fall back to 0.5 in every formula.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NodeProfile {
    pub traits: Option<TraitScores>,
    pub state: Option<StateSlice>,
}

impl NodeProfile {
    pub(crate) fn neuroticism(&self) -> f64 {
        self.traits.map(|t| t.neuroticism).unwrap_or(0.5)
    }

    pub(crate) fn bis(&self) -> f64 {
        self.state.map(|s| s.bis).unwrap_or(0.5)
    }

    pub(crate) fn recovery(&self) -> f64 {
        self.state.map(|s| s.recovery).unwrap_or(0.5)
    }
}

/// One person in the relational graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonNode {
    pub person_id: String,
    /// Declared role within the group (e.g. "parent", "sibling").
    pub role: String,
    #[serde(default)]
    pub profile: Option<NodeProfile>,
}

/// A declared relationship between two people.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationEdge {
    pub from: String,
    pub to: String,
    pub relationship: String,
    /// Filled in by edge annotation; [0, 1].
    #[serde(default)]
    pub conflict_risk: Option<f64>,
}

/// An undirected relational graph over person nodes.
#[derive(Debug, Clone, Default)]
pub struct RelationGraph {
    pub(crate) nodes: BTreeMap<String, PersonNode>,
    /// Undirected edges keyed by the ordered id pair.
    pub(crate) edges: BTreeMap<(String, String), RelationEdge>,
}

impl RelationGraph {
    /// Build a graph from caller-supplied nodes and edges.
    ///
    /// Edges are undirected; an edge naming an unknown endpoint implicitly
    /// creates a bare node with no profile (formulas then see the 0.5
    /// defaults). A duplicate edge between the same pair replaces the
    /// earlier one.
    pub fn build(nodes: Vec<PersonNode>, edges: Vec<RelationEdge>) -> Self {
        let mut graph = Self::default();
        for node in nodes {
            graph.nodes.insert(node.person_id.clone(), node);
        }
        for edge in edges {
            for endpoint in [&edge.from, &edge.to] {
                if !graph.nodes.contains_key(endpoint) {
                    graph.nodes.insert(
                        endpoint.clone(),
                        PersonNode {
                            person_id: endpoint.clone(),
                            role: String::new(),
                            profile: None,
                        },
                    );
                }
            }
            let key = Self::edge_key(&edge.from, &edge.to);
            graph.edges.insert(key, edge);
        }
        graph
    }

    pub(crate) fn edge_key(a: &str, b: &str) -> (String, String) {
        if a <= b {
            (a.to_string(), b.to_string())
        } else {
            (b.to_string(), a.to_string())
        }
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// The node for an id, if present.
    pub fn node(&self, person_id: &str) -> Option<&PersonNode> {
        self.nodes.get(person_id)
    }

    /// The undirected edge between two ids, if present.
    pub fn edge(&self, a: &str, b: &str) -> Option<&RelationEdge> {
        self.edges.get(&Self::edge_key(a, b))
    }

    /// Whether an undirected edge exists between two ids.
    pub fn has_edge(&self, a: &str, b: &str) -> bool {
        self.edges.contains_key(&Self::edge_key(a, b))
    }

    /// Node ids in sorted order.
    pub fn node_ids(&self) -> Vec<&str> {
        self.nodes.keys().map(String::as_str).collect()
    }

    /// All edges, in ordered-key order.
    pub fn edges(&self) -> impl Iterator<Item = &RelationEdge> {
        self.edges.values()
    }
}

/// A fully-connected three-person subgraph with its aggregate risk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    /// The three member ids, in sorted order (order-independent identity).
    pub nodes: [String; 3],
    /// Aggregate conflict risk in [0, 1].
    pub risk: f64,
}

/// Result of the Bowen-style analysis pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BowenAnalysis {
    /// Differentiation proxy per node, [0, 1], higher = better regulated.
    pub differentiation_proxy: BTreeMap<String, f64>,
    /// Risk-ranked triangles, strongest first, truncated per config.
    pub triangles: Vec<Triangle>,
}
