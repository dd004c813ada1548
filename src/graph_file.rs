//! Reader for graph files with explicit vertex and edge declarations.
//!
//! ```text
//! Anything before the vertex section is a comment.
//! [Vertex]
//! a, b, c
//! d
//! [Edges]
//! a:b, b:c
//! c:d
//! ```
//!
//! Edges are directed exactly as written. Every edge endpoint must have been
//! declared in the vertex section; the file is rejected otherwise.

use std::fs;
use std::path::Path;

use tracing::info;

use crate::data_cleaning::normalize;
use crate::error::{LadderError, Result};
use crate::graph::Graph;

const VERTEX_HEADER: &str = "[Vertex]";
const EDGES_HEADER: &str = "[Edges]";

enum Section {
    Preamble,
    Vertices,
    Edges,
}

fn is_header(line: &str, header: &str) -> bool {
    line.trim().eq_ignore_ascii_case(header)
}

// a trailing comma is allowed; empty entries elsewhere are not
fn entries(line: &str) -> impl Iterator<Item = &str> {
    line.trim().trim_end_matches(',').split(',').map(str::trim)
}

fn parse_edge(entry: &str, line: usize) -> Result<(String, String)> {
    let mut parts = entry.split(':').map(normalize);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(v), Some(w), None) if !v.is_empty() && !w.is_empty() => Ok((v, w)),
        _ => Err(LadderError::file_format(
            line,
            format!("edge '{entry}' is not of the form source:destination"),
        )),
    }
}

/// Parses graph file contents.
pub fn parse_graph(contents: &str) -> Result<Graph> {
    let mut graph = Graph::new();
    let mut section = Section::Preamble;
    let mut last_line = 0;

    for (index, line) in contents.lines().enumerate() {
        let number = index + 1;
        last_line = number;
        match section {
            Section::Preamble => {
                // everything before [Vertex] is a comment
                if is_header(line, VERTEX_HEADER) {
                    section = Section::Vertices;
                }
            }
            Section::Vertices => {
                if is_header(line, EDGES_HEADER) {
                    section = Section::Edges;
                    continue;
                }
                if line.trim().is_empty() {
                    continue; // blank lines between declarations
                }
                for name in entries(line) {
                    if name.is_empty() {
                        return Err(LadderError::file_format(number, "empty vertex name"));
                    }
                    if name.contains(':') {
                        // could never appear in an edge
                        return Err(LadderError::file_format(
                            number,
                            format!("vertex name '{name}' contains ':'"),
                        ));
                    }
                    graph.add_node(&normalize(name)); // repeats are ignored
                }
            }
            Section::Edges => {
                if line.trim().is_empty() {
                    continue;
                }
                for entry in entries(line) {
                    let (v, w) = parse_edge(entry, number)?;
                    for endpoint in [&v, &w] {
                        if !graph.contains(endpoint) {
                            return Err(LadderError::file_format(
                                number,
                                format!("edge '{entry}' references undeclared vertex '{endpoint}'"),
                            ));
                        }
                    }
                    graph.add_edge(&v, &w); // directed, only v -> w
                }
            }
        }
    }

    match section {
        Section::Preamble => Err(LadderError::file_format(
            last_line,
            format!("no {VERTEX_HEADER} section found"),
        )),
        Section::Vertices => Err(LadderError::file_format(
            last_line,
            format!("no {EDGES_HEADER} section found"),
        )),
        Section::Edges => Ok(graph),
    }
}

pub fn read_graph_file(path: impl AsRef<Path>) -> Result<Graph> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| LadderError::io(path, e))?;
    let graph = parse_graph(&contents)?;
    info!(
        path = %path.display(),
        nodes = graph.len(),
        edges = graph.edge_count(),
        "loaded graph file"
    );
    Ok(graph)
}
