//! Graph metrics engine.
//!
//! Computes structural metrics over a simple undirected graph: connected
//! components, per-component diameter and average shortest-path length,
//! local/average clustering coefficient and a degree-centrality ranking.
//!
//! ## Architecture
//!
//! ```text
//! edge list ──► loader ──► Graph (petgraph::UnGraph)
//!                              │
//!                         algorithms
//!                              │
//!                       AnalysisReport
//!                              │
//!                 GraphAnalyzer (orchestrator)
//! ```
//!
//! ## Modules
//!
//! - [`models`]: Data structures (Graph, Component, CentralityEntry, AnalysisReport, AnalysisConfig)
//! - [`algorithms`]: Algorithm implementations (components, BFS paths, clustering, centrality)
//! - [`loader`]: Edge list → Graph conversion
//! - [`engine`]: `GraphAnalyzer` orchestrator
//! - [`error`]: `GraphError` and `LoadError`

pub mod algorithms;
pub mod engine;
pub mod error;
pub mod loader;
pub mod models;

// Re-export primary types for convenience
pub use algorithms::{
    analyze_component, average_clustering, clustering_coefficient, compute_all, degree_centrality,
    distance_table, find_components, local_clustering, top_k,
};
pub use engine::GraphAnalyzer;
pub use error::{GraphError, LoadError};
pub use loader::EdgeListLoader;
pub use models::{
    AnalysisConfig, AnalysisReport, CentralityEntry, Component, ComponentMetrics,
    ComponentSummary, DistanceTable, Graph,
};
