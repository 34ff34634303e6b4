//! Error types for graph construction and loading.

use std::path::PathBuf;
use thiserror::Error;

/// Misuse of the graph store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The node was never added to the graph.
    #[error("unknown node: {0}")]
    UnknownNode(String),

    /// The component was found in a different graph.
    #[error("component {0} does not belong to this graph")]
    ForeignComponent(u32),
}

/// Failures while reading an edge list.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read edge list {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Only raised by strict loaders, for lines with more than two labels.
    #[error("malformed edge list line {line}: {content:?}")]
    MalformedLine { line: usize, content: String },
}
