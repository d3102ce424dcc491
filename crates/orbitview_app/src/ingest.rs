// SPDX-License-Identifier: MIT OR Apache-2.0
//! Edge-list ingestion.
//!
//! Input is lines of whitespace-separated node-id pairs. `#`-prefixed
//! comment lines are ignored; malformed lines, self-loops, and ids above
//! the configured bound are skipped with a warning rather than aborting
//! the load. Only I/O failures are fatal.

use orbitview_graph::SimpleGraph;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Fatal ingestion failure.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    /// The edge-list file could not be read.
    #[error("failed to read edge list {path}: {source}")]
    Io {
        /// Path that failed to open or read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Load a directed or undirected graph from the edge-list file at `path`,
/// admitting node ids in `0..=max_node`.
pub fn load_edge_list(
    path: &Path,
    max_node: u32,
    directed: bool,
) -> Result<SimpleGraph<String>, IngestError> {
    let io_err = |source| IngestError::Io {
        path: path.to_owned(),
        source,
    };
    let file = File::open(path).map_err(io_err)?;
    read_edge_list(BufReader::new(file), max_node, directed).map_err(io_err)
}

/// Parse an edge list from any buffered reader. See [`load_edge_list`].
pub fn read_edge_list<R: BufRead>(
    reader: R,
    max_node: u32,
    directed: bool,
) -> std::io::Result<SimpleGraph<String>> {
    let mut graph = if directed {
        SimpleGraph::directed()
    } else {
        SimpleGraph::undirected()
    };
    let mut skipped = 0usize;
    for (lineno, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        match parse_pair(line, max_node) {
            Some((source, target)) => graph.add_edge(source, target),
            None => {
                skipped += 1;
                tracing::warn!(line = lineno + 1, content = line, "skipping edge-list line");
            }
        }
    }
    if skipped > 0 {
        tracing::info!(skipped, "edge-list lines skipped");
    }
    Ok(graph)
}

// An admissible line is two numeric ids within range, not a self-loop.
fn parse_pair(line: &str, max_node: u32) -> Option<(String, String)> {
    let mut fields = line.split_whitespace();
    let source = fields.next()?;
    let target = fields.next()?;
    let s: u32 = source.parse().ok()?;
    let t: u32 = target.parse().ok()?;
    if s > max_node || t > max_node || s == t {
        return None;
    }
    Some((source.to_owned(), target.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(input: &str) -> SimpleGraph<String> {
        read_edge_list(input.as_bytes(), 40, true).unwrap()
    }

    #[test]
    fn parses_pairs_and_skips_comments() {
        let g = load("# comment line\n0 1\n1 2\n");
        assert_eq!(g.node_count(), 3);
        assert!(g.has_edge(&"0".into(), &"1".into()));
        assert!(g.has_edge(&"1".into(), &"2".into()));
        assert!(!g.has_edge(&"1".into(), &"0".into()));
    }

    #[test]
    fn skips_malformed_lines() {
        let g = load("0 1\nnot numbers\n3\n2 3\n");
        assert_eq!(g.node_count(), 4);
        assert!(g.has_edge(&"2".into(), &"3".into()));
    }

    #[test]
    fn drops_self_loops_and_out_of_range_ids() {
        let g = load("5 5\n0 99\n0 1\n");
        assert_eq!(g.node_count(), 2);
        assert!(!g.has_edge(&"5".into(), &"5".into()));
        assert!(g.nodes().all(|n| n.as_str() != "99" && n.as_str() != "5"));
    }

    #[test]
    fn undirected_load_connects_both_ways() {
        let g = read_edge_list("0 1\n".as_bytes(), 40, false).unwrap();
        assert!(g.has_edge(&"0".into(), &"1".into()));
        assert!(g.has_edge(&"1".into(), &"0".into()));
    }

    #[test]
    fn missing_file_is_fatal() {
        let err = load_edge_list(Path::new("/nonexistent/edges.txt"), 40, true).unwrap_err();
        assert!(matches!(err, IngestError::Io { .. }));
    }
}
