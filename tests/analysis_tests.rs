//! End-to-end analysis tests over the public API.
//!
//! Run with: cargo test --test analysis_tests

use graph_metrics::graph::{
    compute_all, degree_centrality, find_components, local_clustering, AnalysisConfig,
    AnalysisReport, EdgeListLoader, Graph, GraphAnalyzer, GraphError,
};
use std::io::Write;

const EPS: f64 = 1e-9;

fn analyze(graph: &Graph) -> AnalysisReport {
    compute_all(graph, &AnalysisConfig::default())
}

// ============================================================================
// Reference scenarios
// ============================================================================

#[test]
fn test_single_edge() {
    let g = Graph::from_edges(&[("A", "B")]);
    let report = analyze(&g);

    assert_eq!(report.node_count, 2);
    assert_eq!(report.edge_count, 1);
    assert_eq!(report.component_count, 1);
    assert_eq!(report.diameter, 1);
    assert!((report.average_path_length - 1.0).abs() < EPS);
    assert_eq!(report.average_clustering, 0.0);

    let config = AnalysisConfig {
        top_k: 1,
        ..AnalysisConfig::default()
    };
    let top = compute_all(&g, &config).top_centrality;
    assert_eq!(top.len(), 1);
    assert_eq!(top[0].node, "A");
    assert!((top[0].value - 1.0).abs() < EPS);
}

#[test]
fn test_triangle() {
    let g = Graph::from_edges(&[("A", "B"), ("B", "C"), ("A", "C")]);
    let report = analyze(&g);

    assert_eq!(report.node_count, 3);
    assert_eq!(report.edge_count, 3);
    assert_eq!(report.component_count, 1);
    assert_eq!(report.diameter, 1);
    assert!((report.average_path_length - 1.0).abs() < EPS);
    assert!((report.average_clustering - 1.0).abs() < EPS);

    let names: Vec<&str> = report
        .top_centrality
        .iter()
        .map(|e| e.node.as_str())
        .collect();
    assert_eq!(names, vec!["A", "B", "C"]);
    for entry in &report.top_centrality {
        assert!((entry.value - 1.0).abs() < EPS);
    }
}

#[test]
fn test_two_disjoint_edges() {
    let g = Graph::from_edges(&[("A", "B"), ("C", "D")]);
    let report = analyze(&g);

    assert_eq!(report.node_count, 4);
    assert_eq!(report.edge_count, 2);
    assert_eq!(report.component_count, 2);
    for component in &report.components {
        assert_eq!(component.diameter, 1);
        assert!((component.average_path_length - 1.0).abs() < EPS);
    }
    assert_eq!(report.diameter, 1);
    assert!((report.average_path_length - 1.0).abs() < EPS);
}

#[test]
fn test_single_isolated_node() {
    let mut g = Graph::new();
    g.add_node("A");
    let report = analyze(&g);

    assert_eq!(report.node_count, 1);
    assert_eq!(report.edge_count, 0);
    assert_eq!(report.component_count, 1);
    assert_eq!(report.diameter, 0);
    assert_eq!(report.average_path_length, 0.0);
    assert_eq!(report.average_clustering, 0.0);
    assert_eq!(report.top_centrality.len(), 1);
    assert_eq!(report.top_centrality[0].value, 0.0);
}

#[test]
fn test_empty_graph() {
    let report = analyze(&Graph::new());
    assert_eq!(report.node_count, 0);
    assert_eq!(report.component_count, 0);
    assert_eq!(report.diameter, 0);
    assert_eq!(report.average_path_length, 0.0);
    assert_eq!(report.average_clustering, 0.0);
    assert!(report.top_centrality.is_empty());
}

// ============================================================================
// Properties over a mixed graph
// ============================================================================

/// Lollipop (K4 + tail), a star, a self-loop node and an isolated node.
fn mixed_graph() -> Graph {
    let mut g = Graph::new();
    for (u, v) in [
        ("k0", "k1"),
        ("k0", "k2"),
        ("k0", "k3"),
        ("k1", "k2"),
        ("k1", "k3"),
        ("k2", "k3"),
        ("k3", "t0"),
        ("t0", "t1"),
        ("t1", "t2"),
    ] {
        g.add_edge(u, v);
    }
    for i in 0..6 {
        g.add_edge("hub", &format!("spoke_{}", i));
    }
    g.add_edge("selfie", "selfie");
    g.add_node("hermit");
    g
}

#[test]
fn test_mixed_graph_properties() {
    let g = mixed_graph();
    let report = analyze(&g);

    // partition
    let components = find_components(&g);
    let total: usize = components.iter().map(|c| c.size()).sum();
    assert_eq!(total, g.node_count());
    assert_eq!(report.component_count, 4);

    // bounds
    for node in g.nodes() {
        let c = local_clustering(&g, node).unwrap();
        assert!((0.0..=1.0).contains(&c));
    }
    for entry in degree_centrality(&g) {
        assert!((0.0..=1.0).contains(&entry.value));
    }

    // diameter dominates mean, per component and overall
    for summary in &report.components {
        assert!(summary.diameter as f64 + EPS >= summary.average_path_length);
    }
    assert_eq!(report.diameter, 4, "k0..k2 to t2 across the tail");

    // self-loop counts as an edge but not as a neighbor
    assert_eq!(report.edge_count, 9 + 6 + 1);
    assert_eq!(g.degree("selfie").unwrap(), 0);
}

#[test]
fn test_unknown_node_surfaces() {
    let g = mixed_graph();
    assert_eq!(
        g.neighbors("nobody").unwrap_err(),
        GraphError::UnknownNode("nobody".to_string())
    );
    assert!(local_clustering(&g, "nobody").is_err());
}

#[test]
fn test_repeated_runs_identical() {
    let g = mixed_graph();
    let analyzer = GraphAnalyzer::new(AnalysisConfig {
        top_k: 5,
        parallel_threshold: 2,
    });
    let first = analyzer.analyze(&g);
    let second = analyzer.analyze(&g);
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

// ============================================================================
// Loader → analysis
// ============================================================================

#[test]
fn test_edge_list_file_to_report() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "# two triangles sharing node C").unwrap();
    for line in ["A B", "B C", "A C", "C D", "D E", "C E", "B A"] {
        writeln!(file, "{}", line).unwrap();
    }

    let graph = EdgeListLoader::new().load_path(file.path()).unwrap();
    assert_eq!(graph.node_count(), 5);
    assert_eq!(graph.edge_count(), 6);

    let report = GraphAnalyzer::default().analyze(&graph);
    assert_eq!(report.component_count, 1);
    assert_eq!(report.diameter, 2);
    assert_eq!(report.top_centrality[0].node, "C");
    assert!((report.top_centrality[0].value - 1.0).abs() < EPS);
    // A, B, D, E at 1.0; C links 2 of its 6 neighbor pairs
    let expected = (4.0 + 2.0 / 6.0) / 5.0;
    assert!((report.average_clustering - expected).abs() < EPS);
}
