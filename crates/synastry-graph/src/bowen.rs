//! Bowen-style analysis: differentiation proxy and triangle enumeration.

use std::collections::BTreeMap;

use synastry_core::config::GraphConfig;

use crate::types::{BowenAnalysis, NodeProfile, RelationGraph, Triangle};

/// Differentiation-of-self proxy for one node.
///
/// `dos = clamp(0.45 * (1 - N) + 0.35 * (1 - BIS) + 0.20 * recovery, 0, 1)`
///
/// Higher = more differentiated (better self-regulated under the
/// heuristic). Missing profile values contribute the 0.5 defaults.
pub fn differentiation_proxy(profile: Option<&NodeProfile>) -> f64 {
    let default = NodeProfile::default();
    let p = profile.unwrap_or(&default);
    let dos =
        0.45 * (1.0 - p.neuroticism()) + 0.35 * (1.0 - p.bis()) + 0.20 * p.recovery();
    dos.clamp(0.0, 1.0)
}

fn edge_risk(graph: &RelationGraph, a: &str, b: &str) -> f64 {
    graph
        .edge(a, b)
        .and_then(|e| e.conflict_risk)
        .unwrap_or(0.0)
}

/// Aggregate risk for a fully-connected triple.
///
/// `risk = clamp(sum of the three edge conflict risks / 2, 0, 1)`
pub fn triangle_risk(graph: &RelationGraph, a: &str, b: &str, c: &str) -> f64 {
    let sum = edge_risk(graph, a, b) + edge_risk(graph, a, c) + edge_risk(graph, b, c);
    (sum / 2.0).clamp(0.0, 1.0)
}

/// Compute per-node differentiation and risk-ranked triangles.
///
/// Triangle enumeration is an exhaustive O(n³) scan over ordered node
/// triples where all three pairwise edges exist - acceptable at
/// family/small-group scale. At larger node counts this must be revisited
/// (adjacency-list pruning), not silently degraded; a warning is logged
/// past 64 nodes. Only triangles with risk above the configured threshold
/// are retained, sorted by descending risk (ties keep ordered-triple
/// order) and truncated to the configured maximum.
pub fn compute_bowen(graph: &RelationGraph, config: &GraphConfig) -> BowenAnalysis {
    let ids = graph.node_ids();
    if ids.len() > 64 {
        tracing::warn!(
            nodes = ids.len(),
            "triangle scan is O(n^3); revisit before using at this scale"
        );
    }

    let differentiation_proxy: BTreeMap<String, f64> = graph
        .nodes
        .iter()
        .map(|(id, node)| (id.clone(), differentiation_proxy(node.profile.as_ref())))
        .collect();

    let mut triangles = Vec::new();
    for i in 0..ids.len() {
        for j in (i + 1)..ids.len() {
            if !graph.has_edge(ids[i], ids[j]) {
                continue;
            }
            for k in (j + 1)..ids.len() {
                if graph.has_edge(ids[i], ids[k]) && graph.has_edge(ids[j], ids[k]) {
                    let risk = triangle_risk(graph, ids[i], ids[j], ids[k]);
                    if risk > config.triangle_risk_threshold {
                        triangles.push(Triangle {
                            nodes: [
                                ids[i].to_string(),
                                ids[j].to_string(),
                                ids[k].to_string(),
                            ],
                            risk,
                        });
                    }
                }
            }
        }
    }
    triangles.sort_by(|a, b| b.risk.total_cmp(&a.risk));
    triangles.truncate(config.max_triangles);

    BowenAnalysis {
        differentiation_proxy,
        triangles,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PersonNode, RelationEdge, StateSlice, TraitScores};

    fn node(id: &str, n: f64, bis: f64, recovery: f64) -> PersonNode {
        PersonNode {
            person_id: id.to_string(),
            role: "member".to_string(),
            profile: Some(NodeProfile {
                traits: Some(TraitScores { neuroticism: n }),
                state: Some(StateSlice { bis, recovery }),
            }),
        }
    }

    fn edge(a: &str, b: &str, risk: f64) -> RelationEdge {
        RelationEdge {
            from: a.to_string(),
            to: b.to_string(),
            relationship: "kin".to_string(),
            conflict_risk: Some(risk),
        }
    }

    #[test]
    fn test_differentiation_formula() {
        let p = NodeProfile {
            traits: Some(TraitScores { neuroticism: 0.8 }),
            state: Some(StateSlice {
                bis: 0.6,
                recovery: 0.4,
            }),
        };
        let dos = differentiation_proxy(Some(&p));
        let expected = 0.45 * 0.2 + 0.35 * 0.4 + 0.20 * 0.4;
        assert!((dos - expected).abs() < 1e-12);
    }

    #[test]
    fn test_differentiation_defaults() {
        let dos = differentiation_proxy(None);
        let expected = 0.45 * 0.5 + 0.35 * 0.5 + 0.20 * 0.5;
        assert!((dos - expected).abs() < 1e-12);
    }

    #[test]
    fn test_triangle_risk_halves_and_clamps() {
        let graph = RelationGraph::build(
            vec![
                node("a", 0.5, 0.5, 0.5),
                node("b", 0.5, 0.5, 0.5),
                node("c", 0.5, 0.5, 0.5),
            ],
            vec![
                edge("a", "b", 0.9),
                edge("a", "c", 0.8),
                edge("b", "c", 0.7),
            ],
        );
        let risk = triangle_risk(&graph, "a", "b", "c");
        assert!((risk - 1.0).abs() < 1e-12); // 2.4 / 2 clamps to 1
    }

    #[test]
    fn test_unannotated_edges_count_as_zero_risk() {
        let graph = RelationGraph::build(
            vec![node("a", 0.5, 0.5, 0.5), node("b", 0.5, 0.5, 0.5)],
            vec![RelationEdge {
                from: "a".into(),
                to: "b".into(),
                relationship: "kin".into(),
                conflict_risk: None,
            }],
        );
        assert_eq!(triangle_risk(&graph, "a", "b", "missing"), 0.0);
    }

    #[test]
    fn test_low_risk_triangles_filtered() {
        let graph = RelationGraph::build(
            vec![
                node("a", 0.1, 0.1, 0.9),
                node("b", 0.1, 0.1, 0.9),
                node("c", 0.1, 0.1, 0.9),
            ],
            vec![
                edge("a", "b", 0.2),
                edge("a", "c", 0.2),
                edge("b", "c", 0.2),
            ],
        );
        let analysis = compute_bowen(&graph, &GraphConfig::default());
        // risk = 0.6/2 = 0.3, below the 0.4 threshold.
        assert!(analysis.triangles.is_empty());
        assert_eq!(analysis.differentiation_proxy.len(), 3);
    }

    #[test]
    fn test_triangles_ranked_and_truncated() {
        // Two overlapping triangles with different risk.
        let graph = RelationGraph::build(
            vec![
                node("a", 0.5, 0.5, 0.5),
                node("b", 0.5, 0.5, 0.5),
                node("c", 0.5, 0.5, 0.5),
                node("d", 0.5, 0.5, 0.5),
            ],
            vec![
                edge("a", "b", 0.9),
                edge("a", "c", 0.9),
                edge("b", "c", 0.9),
                edge("a", "d", 0.4),
                edge("b", "d", 0.4),
            ],
        );
        let analysis = compute_bowen(&graph, &GraphConfig::default());
        assert_eq!(analysis.triangles.len(), 2);
        assert!(analysis.triangles[0].risk >= analysis.triangles[1].risk);
        assert_eq!(analysis.triangles[0].nodes, ["a", "b", "c"]);

        let capped = compute_bowen(
            &graph,
            &GraphConfig {
                max_triangles: 1,
                ..Default::default()
            },
        );
        assert_eq!(capped.triangles.len(), 1);
        assert_eq!(capped.triangles[0].nodes, ["a", "b", "c"]);
    }
}
