//! Console text for search results and graph dumps.

use crate::graph::Graph;

/// `start -> ... -> goal`, or the not-found line when there is no path.
pub fn describe_result(start: &str, goal: &str, path: Option<&[String]>) -> String {
    match path {
        Some(path) => path.join(" -> "),
        None => format!("There is no path between {start} and {goal}"),
    }
}

/// One `v -> w` line per edge, sorted.
pub fn adjacency_listing(graph: &Graph) -> String {
    let mut lines: Vec<String> = graph
        .edges()
        .map(|(from, to)| format!("{from} -> {to}"))
        .collect();
    lines.sort();
    lines.join("\n")
}
