//! Analysis engine: orchestrates the full pipeline.
//!
//! `GraphAnalyzer` is the single entry point for report consumers (CLI,
//! report printer). It encapsulates:
//!
//! 1. **Loading**: edge list → `Graph` via `EdgeListLoader`
//! 2. **Computation**: components, path metrics, clustering, centrality
//!
//! Each run takes an explicit `Graph` and returns an explicit
//! `AnalysisReport`; no graph instance is shared between runs.

use anyhow::{Context, Result};
use std::path::Path;
use std::time::Instant;

use super::algorithms::compute_all;
use super::loader::EdgeListLoader;
use super::models::{AnalysisConfig, AnalysisReport, Graph};

/// Composes `EdgeListLoader` (loading) and `compute_all` (algorithms).
#[derive(Debug, Clone, Default)]
pub struct GraphAnalyzer {
    loader: EdgeListLoader,
    config: AnalysisConfig,
}

impl GraphAnalyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        Self {
            loader: EdgeListLoader::new(),
            config,
        }
    }

    /// Use a custom loader (e.g. strict mode) for `analyze_file`.
    pub fn with_loader(mut self, loader: EdgeListLoader) -> Self {
        self.loader = loader;
        self
    }

    /// Load an edge list without analyzing it.
    pub fn load(&self, path: &Path) -> Result<Graph> {
        self.loader
            .load_path(path)
            .with_context(|| format!("Failed to load graph from {}", path.display()))
    }

    /// Run every metric over an already-built graph.
    pub fn analyze(&self, graph: &Graph) -> AnalysisReport {
        let start = Instant::now();
        let report = compute_all(graph, &self.config);
        tracing::info!(
            "Analyzed {} nodes / {} edges in {}ms ({} components)",
            report.node_count,
            report.edge_count,
            start.elapsed().as_millis(),
            report.component_count
        );
        report
    }

    /// Pipeline: load edge list → compute_all → return report.
    pub fn analyze_file(&self, path: &Path) -> Result<AnalysisReport> {
        let graph = self.load(path)?;
        Ok(self.analyze(&graph))
    }
}
