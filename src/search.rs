//! Unweighted shortest-path search over a word graph.

use std::collections::VecDeque;

use tracing::debug;

use crate::graph::{Graph, NodeId};

/// Breadth-first search from `start` to `goal`.
///
/// Returns the node names on a minimum-edge path, both endpoints included,
/// or `None` when either endpoint is not in the graph or `goal` is not
/// reachable along the edge directions. Among equally short paths the one
/// found first in adjacency order wins.
pub fn shortest_path(graph: &Graph, start: &str, goal: &str) -> Option<Vec<String>> {
    let start_id = graph.id_of(start)?;
    let goal_id = graph.id_of(goal)?;

    let ids = bfs(graph, start_id, goal_id)?;
    ids.into_iter()
        .map(|id| graph.node(id).map(|node| node.name().to_string()))
        .collect()
}

fn bfs(graph: &Graph, start: NodeId, goal: NodeId) -> Option<Vec<NodeId>> {
    let mut queue = VecDeque::new();
    let mut visited = vec![false; graph.len()];
    let mut previous: Vec<Option<NodeId>> = vec![None; graph.len()];

    queue.push_back(start);
    *visited.get_mut(start)? = true; // start is never re-enqueued
    let mut expanded = 0usize;

    while let Some(current) = queue.pop_front() {
        if current == goal {
            debug!(expanded, "goal reached");
            // walk predecessors back to start, then flip
            let mut path = vec![goal];
            let mut node = goal;
            while let Some(parent) = previous.get(node).copied().flatten() {
                path.push(parent);
                node = parent;
            }
            path.reverse();
            return Some(path);
        }
        expanded += 1;

        let Some(node) = graph.node(current) else {
            continue;
        };
        for &neighbor in node.adjacent() {
            // first discovery is at minimum depth
            if let Some(seen) = visited.get_mut(neighbor) {
                if !*seen {
                    *seen = true;
                    if let Some(slot) = previous.get_mut(neighbor) {
                        *slot = Some(current);
                    }
                    queue.push_back(neighbor);
                }
            }
        }
    }

    debug!(expanded, "frontier exhausted without reaching goal");
    None
}
