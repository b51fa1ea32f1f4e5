//! Relational graph analytics for the Synastry state core.
//!
//! Turns a set of people and their declared relationships into a
//! risk-annotated graph: per-edge conflict risk, a per-node differentiation
//! proxy, and risk-ranked triangles (Bowen family-systems terminology).
//!
//! The graph is plain data, rebuilt per analysis call; the caller owns
//! storage. Enumeration order is deterministic so rankings are
//! reproducible across runs.
//!
//! # Example
//!
//! ```
//! use synastry_core::config::GraphConfig;
//! use synastry_graph::{annotate_edges, compute_bowen, PersonNode, RelationEdge, RelationGraph};
//!
//! let nodes = vec![
//!     PersonNode { person_id: "ana".into(), role: "parent".into(), profile: None },
//!     PersonNode { person_id: "ben".into(), role: "child".into(), profile: None },
//! ];
//! let edges = vec![RelationEdge {
//!     from: "ana".into(),
//!     to: "ben".into(),
//!     relationship: "parent_of".into(),
//!     conflict_risk: None,
//! }];
//! let mut graph = RelationGraph::build(nodes, edges);
//! annotate_edges(&mut graph);
//! let analysis = compute_bowen(&graph, &GraphConfig::default());
//! assert_eq!(analysis.differentiation_proxy.len(), 2);
//! ```

pub mod bowen;
pub mod conflict;
pub mod types;

pub use bowen::{compute_bowen, differentiation_proxy, triangle_risk};
pub use conflict::{annotate_edges, edge_conflict_risk};
pub use types::{
    BowenAnalysis, NodeProfile, PersonNode, RelationEdge, RelationGraph, StateSlice, TraitScores,
    Triangle,
};
