//! Edge conflict-risk annotation.

use crate::types::{NodeProfile, RelationGraph};

/// Symmetric conflict risk for one edge.
///
/// `r = clamp((0.35 * (N_a + N_b) + 0.25 * (BIS_a + BIS_b)) / 1.2, 0, 1)`
///
/// A simple symmetric heuristic over the endpoint traits and states, not
/// inferred from graph topology. Missing profiles contribute the 0.5
/// defaults.
pub fn edge_conflict_risk(a: Option<&NodeProfile>, b: Option<&NodeProfile>) -> f64 {
    let default = NodeProfile::default();
    let a = a.unwrap_or(&default);
    let b = b.unwrap_or(&default);
    let r = 0.35 * (a.neuroticism() + b.neuroticism()) + 0.25 * (a.bis() + b.bis());
    (r / 1.2).clamp(0.0, 1.0)
}

/// Annotate every edge in place with its conflict risk.
pub fn annotate_edges(graph: &mut RelationGraph) {
    let risks: Vec<((String, String), f64)> = graph
        .edges
        .keys()
        .map(|key| {
            let a = graph.nodes.get(&key.0).and_then(|n| n.profile.as_ref());
            let b = graph.nodes.get(&key.1).and_then(|n| n.profile.as_ref());
            (key.clone(), edge_conflict_risk(a, b))
        })
        .collect();
    for (key, risk) in risks {
        if let Some(edge) = graph.edges.get_mut(&key) {
            edge.conflict_risk = Some(risk);
        }
    }
    tracing::debug!(edges = graph.edge_count(), "edge conflict risk annotated");
}
