//! Graph metrics data models.
//!
//! Defines the complete type system for a metrics run:
//!
//! ## Input types
//! - [`Graph`]: petgraph wrapper with label ↔ NodeIndex mapping (the graph store)
//!
//! ## Derived types (per run)
//! - [`Component`]: a connected component, members in discovery order
//! - [`ComponentMetrics`]: diameter, average path length and eccentricities of one component
//! - [`DistanceTable`]: all-pairs hop distances within one component
//! - [`CentralityEntry`]: normalized degree centrality of one node
//!
//! ## Output types
//! - [`ComponentSummary`]: per-component line of the report
//! - [`AnalysisReport`]: aggregated result of a full analysis run
//!
//! ## Configuration
//! - [`AnalysisConfig`]: tuning parameters for the analysis

use petgraph::graph::{NodeIndex, UnGraph};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::error::GraphError;

// ============================================================================
// Graph: petgraph wrapper with label mapping
// ============================================================================

/// Simple undirected graph keyed by node label.
///
/// Node indices follow insertion (first-seen) order, which is the order every
/// traversal in this crate uses. Repeated pairs collapse into one edge and a
/// self-pair never makes a node its own neighbor.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    graph: UnGraph<String, ()>,
    id_to_index: HashMap<String, NodeIndex>,
}

impl Graph {
    /// Create a new empty Graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a Graph with pre-allocated capacity.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            graph: UnGraph::with_capacity(nodes, edges),
            id_to_index: HashMap::with_capacity(nodes),
        }
    }

    /// Build a graph from a list of label pairs.
    pub fn from_edges<S: AsRef<str>>(edges: &[(S, S)]) -> Self {
        let mut graph = Self::with_capacity(edges.len(), edges.len());
        for (u, v) in edges {
            graph.add_edge(u.as_ref(), v.as_ref());
        }
        graph
    }

    /// Add a node. If a node with the same label already exists, returns its existing index.
    pub fn add_node(&mut self, id: &str) -> NodeIndex {
        if let Some(&idx) = self.id_to_index.get(id) {
            return idx;
        }
        let idx = self.graph.add_node(id.to_string());
        self.id_to_index.insert(id.to_string(), idx);
        idx
    }

    /// Add an undirected edge, inserting both endpoints if needed.
    ///
    /// Returns `false` when the unordered pair was already present.
    pub fn add_edge(&mut self, u: &str, v: &str) -> bool {
        let a = self.add_node(u);
        let b = self.add_node(v);
        if self.graph.find_edge(a, b).is_some() {
            return false;
        }
        self.graph.add_edge(a, b, ());
        true
    }

    /// Number of nodes in the graph.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of unique unordered pairs, self-pairs included.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.id_to_index.contains_key(id)
    }

    /// Node labels in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &str> + '_ {
        self.graph.node_indices().map(move |idx| self.graph[idx].as_str())
    }

    /// Neighbors of `id`, in insertion order of the neighbor nodes.
    pub fn neighbors(&self, id: &str) -> Result<Vec<&str>, GraphError> {
        let idx = self.require(id)?;
        Ok(self
            .neighbor_indices(idx)
            .into_iter()
            .map(|n| self.graph[n].as_str())
            .collect())
    }

    /// Number of distinct neighbors of `id`.
    pub fn degree(&self, id: &str) -> Result<usize, GraphError> {
        let idx = self.require(id)?;
        Ok(self.neighbor_indices(idx).len())
    }

    pub(crate) fn position(&self, id: &str) -> Result<usize, GraphError> {
        self.require(id).map(|idx| idx.index())
    }

    pub(crate) fn label(&self, idx: usize) -> &str {
        self.graph[NodeIndex::new(idx)].as_str()
    }

    /// Sorted neighbor positions of the node at `idx`, without self-loops.
    pub(crate) fn neighbor_positions(&self, idx: usize) -> Vec<usize> {
        self.neighbor_indices(NodeIndex::new(idx))
            .into_iter()
            .map(|n| n.index())
            .collect()
    }

    /// Adjacency lists indexed by node position, sorted, without self-loops.
    pub(crate) fn adjacency(&self) -> Vec<Vec<usize>> {
        (0..self.node_count())
            .map(|idx| self.neighbor_positions(idx))
            .collect()
    }

    fn require(&self, id: &str) -> Result<NodeIndex, GraphError> {
        self.id_to_index
            .get(id)
            .copied()
            .ok_or_else(|| GraphError::UnknownNode(id.to_string()))
    }

    fn neighbor_indices(&self, idx: NodeIndex) -> Vec<NodeIndex> {
        let mut neighbors: Vec<NodeIndex> =
            self.graph.neighbors(idx).filter(|&n| n != idx).collect();
        neighbors.sort_unstable();
        neighbors
    }
}

// ============================================================================
// Derived types: one analysis run
// ============================================================================

/// A maximal set of mutually reachable nodes.
///
/// Only produced by [`find_components`](super::algorithms::find_components).
/// Path queries against any other graph fail with
/// [`GraphError::ForeignComponent`] or [`GraphError::UnknownNode`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    /// Position of this component in discovery order
    pub id: u32,
    /// Node labels in BFS discovery order
    pub members: Vec<String>,
    pub(crate) indices: Vec<usize>,
}

impl Component {
    pub fn size(&self) -> usize {
        self.members.len()
    }
}

/// Path metrics for a single component.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentMetrics {
    /// Largest hop distance between two members
    pub diameter: usize,
    /// Mean hop distance over ordered member pairs (s ≠ t)
    pub average_path_length: f64,
    /// Eccentricity of each member, in member order
    pub eccentricities: Vec<usize>,
}

/// All-pairs hop distances within one component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistanceTable {
    /// Row/column labels (component member order)
    pub members: Vec<String>,
    /// `distances[i][j]` = hops from `members[i]` to `members[j]`
    pub distances: Vec<Vec<usize>>,
}

impl DistanceTable {
    /// Hop distance between two members, `None` if either is not in this component.
    pub fn distance(&self, source: &str, target: &str) -> Option<usize> {
        let s = self.members.iter().position(|m| m == source)?;
        let t = self.members.iter().position(|m| m == target)?;
        Some(self.distances[s][t])
    }
}

/// Normalized degree centrality of a node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CentralityEntry {
    pub node: String,
    /// degree / (node_count - 1), 0.0 for a one-node graph
    pub value: f64,
}

// ============================================================================
// Output types: Analysis report
// ============================================================================

/// Per-component line of the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentSummary {
    /// Component identifier (discovery order)
    pub id: u32,
    /// Number of nodes in this component
    pub size: usize,
    pub diameter: usize,
    pub average_path_length: f64,
    /// Whether this is the first component of maximal size
    pub is_main: bool,
}

/// Complete result of an analysis run.
///
/// Graph-level `diameter` and `average_path_length` are the maxima over all
/// components; cross-component distances are never averaged together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Total number of nodes analyzed
    pub node_count: usize,
    /// Total number of unique edges analyzed
    pub edge_count: usize,
    pub component_count: usize,
    /// Maximum component diameter
    pub diameter: usize,
    /// Maximum component average shortest-path length
    pub average_path_length: f64,
    /// Mean local clustering coefficient over all nodes
    pub average_clustering: f64,
    /// Highest degree centrality first, ties by ascending node label
    pub top_centrality: Vec<CentralityEntry>,
    /// Component summaries in discovery order
    pub components: Vec<ComponentSummary>,
}

impl AnalysisReport {
    /// Report for a graph with no nodes.
    pub fn empty() -> Self {
        Self {
            node_count: 0,
            edge_count: 0,
            component_count: 0,
            diameter: 0,
            average_path_length: 0.0,
            average_clustering: 0.0,
            top_centrality: vec![],
            components: vec![],
        }
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Tuning parameters for an analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Number of entries in the centrality ranking (default: 10)
    pub top_k: usize,
    /// Component size from which per-source BFS runs in parallel (default: 64)
    pub parallel_threshold: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_k: 10,
            parallel_threshold: 64,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
