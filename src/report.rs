//! Report rendering for the command-line front end.
//!
//! The analysis core never prints; everything user-facing is formatted here.

use anyhow::{Context, Result};

use crate::graph::{AnalysisReport, Graph};

/// One-line summary printed by `load`.
pub fn render_load_summary(graph: &Graph) -> String {
    format!(
        "loaded graph with {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    )
}

/// Multi-line human-readable report.
pub fn render_text(report: &AnalysisReport) -> String {
    let mut lines = vec![
        "Graph analysis".to_string(),
        format!("  nodes:               {}", report.node_count),
        format!("  edges:               {}", report.edge_count),
        format!("  components:          {}", report.component_count),
        format!("  diameter:            {}", report.diameter),
        format!("  average path length: {:.4}", report.average_path_length),
        format!("  average clustering:  {:.4}", report.average_clustering),
    ];

    if report.components.len() > 1 {
        lines.push(String::new());
        lines.push("Components:".to_string());
        lines.extend(report.components.iter().map(|c| {
            format!(
                "  #{:<4} size {:<6} diameter {:<4} avg path {:.4}{}",
                c.id,
                c.size,
                c.diameter,
                c.average_path_length,
                if c.is_main { "  (main)" } else { "" }
            )
        }));
    }

    if !report.top_centrality.is_empty() {
        let width = report
            .top_centrality
            .iter()
            .map(|e| e.node.len())
            .max()
            .unwrap_or(0);
        lines.push(String::new());
        lines.push(format!(
            "Top {} nodes by degree centrality:",
            report.top_centrality.len()
        ));
        lines.extend(report.top_centrality.iter().enumerate().map(|(rank, entry)| {
            format!(
                "  {:>3}. {:<width$}  {:.4}",
                rank + 1,
                entry.node,
                entry.value,
                width = width
            )
        }));
    }

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Pretty-printed JSON report.
pub fn render_json(report: &AnalysisReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("Failed to serialize analysis report")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{compute_all, AnalysisConfig};

    fn triangle_report() -> AnalysisReport {
        let g = Graph::from_edges(&[("A", "B"), ("B", "C"), ("A", "C")]);
        compute_all(&g, &AnalysisConfig::default())
    }

    #[test]
    fn test_render_load_summary() {
        let g = Graph::from_edges(&[("a", "b"), ("b", "c")]);
        assert_eq!(
            render_load_summary(&g),
            "loaded graph with 3 nodes and 2 edges"
        );
    }

    #[test]
    fn test_render_text_contains_metrics() {
        let text = render_text(&triangle_report());
        assert!(text.contains("nodes:               3"));
        assert!(text.contains("components:          1"));
        assert!(text.contains("average clustering:  1.0000"));
        assert!(text.contains("Top 3 nodes by degree centrality:"));
        assert!(text.contains("  1. A  1.0000"));
        assert!(!text.contains("Components:"), "single component is not listed");
    }

    #[test]
    fn test_render_text_lists_components_when_disconnected() {
        let g = Graph::from_edges(&[("a", "b"), ("b", "c"), ("x", "y")]);
        let text = render_text(&compute_all(&g, &AnalysisConfig::default()));
        assert!(text.contains("Components:"));
        assert!(text.contains("(main)"));
    }

    #[test]
    fn test_render_text_layout() {
        let text = render_text(&triangle_report());
        assert!(text.ends_with("1.0000\n"));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 12);
        assert_eq!(lines[0], "Graph analysis");
        assert_eq!(lines[7], "");
        assert_eq!(lines[8], "Top 3 nodes by degree centrality:");
    }

    #[test]
    fn test_render_text_empty_report() {
        let text = render_text(&AnalysisReport::empty());
        assert!(text.contains("nodes:               0"));
        assert!(!text.contains("Top"));
    }

    #[test]
    fn test_render_json_roundtrip() {
        let report = triangle_report();
        let json = render_json(&report).unwrap();
        let parsed: AnalysisReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }
}
