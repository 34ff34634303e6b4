//! Graph Metrics
//!
//! Structural metrics for simple undirected graphs:
//! - Connected-component decomposition
//! - Per-component diameter and average shortest-path length (BFS from every node)
//! - Local and average clustering coefficient
//! - Normalized degree centrality with a deterministic top-K ranking
//!
//! The analysis core ([`graph`]) consumes an already-built [`graph::Graph`]
//! and returns an immutable [`graph::AnalysisReport`]. Loading edge lists and
//! rendering reports ([`report`]) are kept outside the core.

pub mod graph;
pub mod report;

use anyhow::Result;
use serde::Deserialize;
use std::path::Path;

use graph::AnalysisConfig;

// ============================================================================
// YAML config structs (deserialization targets)
// ============================================================================

/// Top-level YAML configuration file structure
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct YamlConfig {
    pub analysis: AnalysisConfig,
}

// ============================================================================
// Runtime config (what the application actually uses)
// ============================================================================

/// Application configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub analysis: AnalysisConfig,
}

impl Config {
    /// Load configuration from an optional YAML file, then override with env vars.
    ///
    /// Priority: env var > YAML > default
    ///
    /// If `yaml_path` is None, tries "graph-metrics.yaml" in CWD. If the file
    /// doesn't exist, falls back to pure env var / defaults.
    pub fn from_yaml_and_env(yaml_path: Option<&Path>) -> Result<Self> {
        // 1. Load YAML config (or defaults if file not found)
        let yaml = Self::load_yaml(yaml_path);

        // 2. Build Config with env var overrides
        Ok(Self {
            analysis: AnalysisConfig {
                top_k: env_parse("GRAPH_METRICS_TOP_K").unwrap_or(yaml.analysis.top_k),
                parallel_threshold: env_parse("GRAPH_METRICS_PARALLEL_THRESHOLD")
                    .unwrap_or(yaml.analysis.parallel_threshold),
            },
        })
    }

    /// Try to load and parse a YAML config file. Returns defaults on any failure.
    fn load_yaml(yaml_path: Option<&Path>) -> YamlConfig {
        let default_path = Path::new("graph-metrics.yaml");
        let path = yaml_path.unwrap_or(default_path);

        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_yaml::from_str(&contents) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {}. Using defaults.", path.display(), e);
                    YamlConfig::default()
                }
            },
            Err(_) => {
                tracing::debug!(
                    "No config file at {}, using env vars / defaults",
                    path.display()
                );
                YamlConfig::default()
            }
        }
    }
}

fn env_parse(var: &str) -> Option<usize> {
    std::env::var(var).ok().and_then(|s| s.trim().parse().ok())
}
