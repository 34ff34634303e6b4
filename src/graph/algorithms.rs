//! Graph metrics algorithms.
//!
//! Implements the structural metrics on a [`Graph`]:
//! - **Connected components**: BFS over nodes in insertion order
//! - **Shortest paths**: BFS from every member of a component (diameter,
//!   average path length, eccentricity)
//! - **Clustering coefficient**: local clustering per node and the mean over all nodes
//! - **Degree centrality**: normalized degree and a deterministic top-K ranking
//!
//! All traversals run on a plain adjacency list built once from the graph
//! (`Vec<Vec<usize>>`, indexed by node insertion position), so results never
//! depend on hash iteration order.

use rayon::prelude::*;
use std::collections::{HashMap, VecDeque};

use super::error::GraphError;
use super::models::{
    AnalysisConfig, AnalysisReport, CentralityEntry, Component, ComponentMetrics,
    ComponentSummary, DistanceTable, Graph,
};

const UNREACHED: usize = usize::MAX;

// ============================================================================
// Connected Components
// ============================================================================

/// Partition the graph into connected components.
///
/// Seeds are taken in node insertion order, so component order and member
/// order (BFS discovery) are reproducible for a given construction order.
pub fn find_components(graph: &Graph) -> Vec<Component> {
    components_from_adjacency(graph, &graph.adjacency())
}

fn components_from_adjacency(graph: &Graph, adj: &[Vec<usize>]) -> Vec<Component> {
    let n = adj.len();
    let mut visited = vec![false; n];
    let mut components = Vec::new();

    for start in 0..n {
        if visited[start] {
            continue;
        }
        let mut indices = Vec::new();
        let mut queue = VecDeque::new();
        queue.push_back(start);
        visited[start] = true;

        while let Some(current) = queue.pop_front() {
            indices.push(current);
            for &neighbor in &adj[current] {
                if !visited[neighbor] {
                    visited[neighbor] = true;
                    queue.push_back(neighbor);
                }
            }
        }

        components.push(Component {
            id: components.len() as u32,
            members: indices.iter().map(|&i| graph.label(i).to_string()).collect(),
            indices,
        });
    }

    components
}

// ============================================================================
// Shortest Paths (per component)
// ============================================================================

/// Compute diameter, average path length and eccentricities for one component.
///
/// A singleton component reports 0 for both diameter and average path length.
/// Fails when `component` was not found in `graph`.
pub fn analyze_component(
    graph: &Graph,
    component: &Component,
    config: &AnalysisConfig,
) -> Result<ComponentMetrics, GraphError> {
    let adj = graph.adjacency();
    let position = checked_positions(graph, &adj, component)?;
    Ok(component_metrics(
        &adj,
        &position,
        component,
        config.parallel_threshold,
    ))
}

/// Full hop-distance matrix of one component, rows in member order.
pub fn distance_table(graph: &Graph, component: &Component) -> Result<DistanceTable, GraphError> {
    let adj = graph.adjacency();
    let position = checked_positions(graph, &adj, component)?;
    let distances = (0..component.size())
        .map(|s| bfs_row(&adj, &position, &component.indices, s))
        .collect();
    Ok(DistanceTable {
        members: component.members.clone(),
        distances,
    })
}

/// Map each node's graph position to its position inside its component.
fn local_positions(n: usize, components: &[Component]) -> Vec<usize> {
    let mut position = vec![UNREACHED; n];
    for component in components {
        for (local, &global) in component.indices.iter().enumerate() {
            position[global] = local;
        }
    }
    position
}

/// Local positions for a caller-supplied component.
///
/// Every member must sit at the same position and under the same label in
/// `graph`, and no member may have a neighbor outside the component.
fn checked_positions(
    graph: &Graph,
    adj: &[Vec<usize>],
    component: &Component,
) -> Result<Vec<usize>, GraphError> {
    for (member, &idx) in component.members.iter().zip(&component.indices) {
        if !graph.contains(member) {
            return Err(GraphError::UnknownNode(member.clone()));
        }
        if idx >= adj.len() || graph.label(idx) != member {
            return Err(GraphError::ForeignComponent(component.id));
        }
    }

    let position = local_positions(adj.len(), std::slice::from_ref(component));
    let closed = component
        .indices
        .iter()
        .all(|&idx| adj[idx].iter().all(|&n| position[n] != UNREACHED));
    if !closed {
        return Err(GraphError::ForeignComponent(component.id));
    }
    Ok(position)
}

/// BFS from `members[source]`, returning hop distances in member order.
fn bfs_row(adj: &[Vec<usize>], position: &[usize], members: &[usize], source: usize) -> Vec<usize> {
    let mut dist = vec![UNREACHED; members.len()];
    let mut queue = VecDeque::with_capacity(members.len());
    dist[source] = 0;
    queue.push_back(members[source]);

    while let Some(current) = queue.pop_front() {
        let next = dist[position[current]] + 1;
        for &neighbor in &adj[current] {
            let slot = position[neighbor];
            if dist[slot] == UNREACHED {
                dist[slot] = next;
                queue.push_back(neighbor);
            }
        }
    }
    dist
}

fn component_metrics(
    adj: &[Vec<usize>],
    position: &[usize],
    component: &Component,
    parallel_threshold: usize,
) -> ComponentMetrics {
    let k = component.size();
    if k < 2 {
        return ComponentMetrics {
            diameter: 0,
            average_path_length: 0.0,
            eccentricities: vec![0; k],
        };
    }

    // (sum of distances, eccentricity) per source; each run owns its row.
    let summarize = |source: usize| -> (u64, usize) {
        bfs_row(adj, position, &component.indices, source)
            .into_iter()
            .filter(|&d| d != UNREACHED)
            .fold((0u64, 0usize), |(sum, max), d| (sum + d as u64, max.max(d)))
    };

    let rows: Vec<(u64, usize)> = if k >= parallel_threshold {
        (0..k).into_par_iter().map(summarize).collect()
    } else {
        (0..k).map(summarize).collect()
    };

    let total: u64 = rows.iter().map(|(sum, _)| sum).sum();
    let eccentricities: Vec<usize> = rows.iter().map(|&(_, ecc)| ecc).collect();
    let diameter = eccentricities.iter().copied().max().unwrap_or(0);
    let ordered_pairs = (k * (k - 1)) as f64;

    ComponentMetrics {
        diameter,
        average_path_length: total as f64 / ordered_pairs,
        eccentricities,
    }
}

// ============================================================================
// Clustering Coefficient
// ============================================================================

/// Local clustering coefficient of `node`.
///
/// coefficient = links among neighbors / (k * (k-1) / 2); 0.0 when k < 2.
/// Only the node's own neighborhood is read.
pub fn local_clustering(graph: &Graph, node: &str) -> Result<f64, GraphError> {
    let neighbors = graph.neighbor_positions(graph.position(node)?);
    if neighbors.len() < 2 {
        return Ok(0.0);
    }
    let rows: Vec<Vec<usize>> = neighbors
        .iter()
        .map(|&n| graph.neighbor_positions(n))
        .collect();
    let rows: Vec<&[usize]> = rows.iter().map(Vec::as_slice).collect();
    Ok(clustering_ratio(&neighbors, &rows))
}

/// Local clustering coefficient for every node, keyed by label.
pub fn clustering_coefficient(graph: &Graph) -> HashMap<String, f64> {
    let adj = graph.adjacency();
    (0..adj.len())
        .map(|i| (graph.label(i).to_string(), clustering_at(&adj, i)))
        .collect()
}

/// Mean local clustering over all nodes, degree-0/1 nodes included.
pub fn average_clustering(graph: &Graph) -> f64 {
    mean_clustering(&graph.adjacency())
}

fn mean_clustering(adj: &[Vec<usize>]) -> f64 {
    if adj.is_empty() {
        return 0.0;
    }
    let total: f64 = (0..adj.len()).map(|i| clustering_at(adj, i)).sum();
    total / adj.len() as f64
}

fn clustering_at(adj: &[Vec<usize>], idx: usize) -> f64 {
    let neighbors = &adj[idx];
    if neighbors.len() < 2 {
        return 0.0;
    }
    let rows: Vec<&[usize]> = neighbors.iter().map(|&n| adj[n].as_slice()).collect();
    clustering_ratio(neighbors, &rows)
}

/// `rows[i]` is the sorted adjacency of `neighbors[i]`.
fn clustering_ratio(neighbors: &[usize], rows: &[&[usize]]) -> f64 {
    let k = neighbors.len();
    let mut links = 0usize;
    for i in 0..k {
        for j in (i + 1)..k {
            if rows[i].binary_search(&neighbors[j]).is_ok() {
                links += 1;
            }
        }
    }

    let possible = k * (k - 1) / 2;
    links as f64 / possible as f64
}

// ============================================================================
// Degree Centrality
// ============================================================================

/// Normalized degree centrality for every node, in insertion order.
pub fn degree_centrality(graph: &Graph) -> Vec<CentralityEntry> {
    centrality_from_adjacency(graph, &graph.adjacency())
}

fn centrality_from_adjacency(graph: &Graph, adj: &[Vec<usize>]) -> Vec<CentralityEntry> {
    let n = adj.len();
    let norm = if n > 1 { (n - 1) as f64 } else { 0.0 };
    adj.iter()
        .enumerate()
        .map(|(i, neighbors)| CentralityEntry {
            node: graph.label(i).to_string(),
            value: if norm > 0.0 {
                neighbors.len() as f64 / norm
            } else {
                0.0
            },
        })
        .collect()
}

/// The `k` highest entries; ties are ordered by ascending node label.
pub fn top_k(entries: &[CentralityEntry], k: usize) -> Vec<CentralityEntry> {
    let mut ranked = entries.to_vec();
    ranked.sort_by(|a, b| {
        b.value
            .total_cmp(&a.value)
            .then_with(|| a.node.cmp(&b.node))
    });
    ranked.truncate(k);
    ranked
}

// ============================================================================
// Orchestrator: compute_all
// ============================================================================

/// Run every metric and assemble the `AnalysisReport`.
///
/// Graph-level diameter and average path length are each the maximum over
/// components. The two maxima may come from different components.
pub fn compute_all(graph: &Graph, config: &AnalysisConfig) -> AnalysisReport {
    if graph.node_count() == 0 {
        return AnalysisReport::empty();
    }

    let adj = graph.adjacency();

    // 1. Components
    let components = components_from_adjacency(graph, &adj);
    tracing::debug!(
        components = components.len(),
        nodes = graph.node_count(),
        "found connected components"
    );

    // 2. Path metrics per component
    let position = local_positions(adj.len(), &components);
    let max_size = components.iter().map(Component::size).max().unwrap_or(0);
    let mut main_marked = false;
    let summaries: Vec<ComponentSummary> = components
        .iter()
        .map(|component| {
            let metrics = component_metrics(&adj, &position, component, config.parallel_threshold);
            let is_main = !main_marked && component.size() == max_size;
            main_marked |= is_main;
            ComponentSummary {
                id: component.id,
                size: component.size(),
                diameter: metrics.diameter,
                average_path_length: metrics.average_path_length,
                is_main,
            }
        })
        .collect();

    let diameter = summaries.iter().map(|s| s.diameter).max().unwrap_or(0);
    let average_path_length = summaries
        .iter()
        .map(|s| s.average_path_length)
        .fold(0.0f64, f64::max);

    // 3. Clustering
    let average_clustering = mean_clustering(&adj);

    // 4. Centrality
    let centrality = centrality_from_adjacency(graph, &adj);
    let top_centrality = top_k(&centrality, config.top_k);

    AnalysisReport {
        node_count: graph.node_count(),
        edge_count: graph.edge_count(),
        component_count: components.len(),
        diameter,
        average_path_length,
        average_clustering,
        top_centrality,
        components: summaries,
    }
}

// ============================================================================
// Tests
// ============================================================================
