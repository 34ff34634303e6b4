//! Edge list → Graph loading.
//!
//! Reads a whitespace-separated edge list into an in-memory [`Graph`]
//! suitable for analysis:
//!
//! ```text
//! # comment
//! alice bob
//! bob   carol  0.7     <- extra columns (e.g. weights) are ignored
//! dave                 <- a single label adds an isolated node
//! ```
//!
//! Blank lines and lines starting with `#` or `%` are skipped. In strict mode
//! a line with more than two labels is rejected instead of truncated.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use super::error::LoadError;
use super::models::Graph;

/// Builds graphs from edge-list text.
#[derive(Debug, Clone, Copy, Default)]
pub struct EdgeListLoader {
    strict: bool,
}

impl EdgeListLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject lines with more than two labels.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Load an edge list from a file.
    pub fn load_path(&self, path: &Path) -> Result<Graph, LoadError> {
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let graph = self.read(BufReader::new(file), path)?;
        tracing::info!(
            "Loaded {}: {} nodes, {} edges",
            path.display(),
            graph.node_count(),
            graph.edge_count()
        );
        Ok(graph)
    }

    /// Load an edge list from any reader (stdin, in-memory buffers).
    pub fn load_reader<R: Read>(&self, reader: R) -> Result<Graph, LoadError> {
        self.read(BufReader::new(reader), Path::new("<reader>"))
    }

    fn read<R: BufRead>(&self, reader: R, origin: &Path) -> Result<Graph, LoadError> {
        let mut graph = Graph::new();
        let mut duplicates = 0usize;

        for (line_no, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| LoadError::Io {
                path: origin.to_path_buf(),
                source,
            })?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with('%') {
                continue;
            }

            let tokens: Vec<&str> = trimmed.split_whitespace().collect();
            match tokens.as_slice() {
                [node] => {
                    graph.add_node(node);
                }
                [u, v] => {
                    if !graph.add_edge(u, v) {
                        duplicates += 1;
                    }
                }
                [u, v, rest @ ..] => {
                    if self.strict {
                        return Err(LoadError::MalformedLine {
                            line: line_no + 1,
                            content: line.clone(),
                        });
                    }
                    tracing::debug!(
                        line = line_no + 1,
                        ignored = rest.len(),
                        "ignoring extra columns"
                    );
                    if !graph.add_edge(u, v) {
                        duplicates += 1;
                    }
                }
                [] => {}
            }
        }

        if duplicates > 0 {
            tracing::debug!(duplicates, "collapsed repeated edges");
        }
        Ok(graph)
    }
}
