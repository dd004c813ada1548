//! Builds the word-ladder graph from a dictionary.

use std::collections::HashSet;

use tracing::info;

use crate::graph::{Graph, NodeId};

/// True when `a` and `b` have the same length and differ in exactly one
/// character position. Inputs are expected to be normalized already.
pub fn differs_by_one(a: &str, b: &str) -> bool {
    a.chars().count() == b.chars().count() && one_substitution(a, b)
}

// assumes equal lengths, checked by the caller
fn one_substitution(a: &str, b: &str) -> bool {
    let mut differences = a.chars().zip(b.chars()).filter(|(x, y)| x != y);
    differences.next().is_some() && differences.next().is_none()
}

/// Connects every pair of words that differ by one substitution, adding the
/// edge in both directions.
///
/// Words missing from `graph` are skipped, and repeated words are compared
/// only once.
pub fn build_edges_from_words<S: AsRef<str>>(graph: &mut Graph, words: &[S]) {
    let mut seen = HashSet::new();
    let nodes: Vec<(NodeId, &str, usize)> = words
        .iter()
        .map(AsRef::as_ref)
        .filter(|word| seen.insert(*word))
        .filter_map(|word| graph.id_of(word).map(|id| (id, word, word.chars().count())))
        .collect();

    for (i, &(a, word_a, len_a)) in nodes.iter().enumerate() {
        for &(b, word_b, len_b) in &nodes[i + 1..] {
            if len_a == len_b && one_substitution(word_a, word_b) {
                graph.connect(a, b); // both directions
                graph.connect(b, a);
            }
        }
    }
}

/// Creates one node per distinct word and links the one-letter neighbors.
pub fn build_graph<S: AsRef<str>>(words: &[S]) -> Graph {
    let mut graph = Graph::new();
    for word in words {
        graph.add_node(word.as_ref());
    }
    build_edges_from_words(&mut graph, words);
    info!(
        nodes = graph.len(),
        edges = graph.edge_count(),
        "built word graph"
    );
    graph
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_differs_by_one() {
        assert!(differs_by_one("cat", "cot"));
        assert!(differs_by_one("a", "b"));
        assert!(!differs_by_one("cat", "cat")); // distance 0
        assert!(!differs_by_one("cat", "dog")); // distance 3
        assert!(!differs_by_one("cat", "cog")); // distance 2
        assert!(!differs_by_one("cat", "cats")); // lengths differ
        assert!(!differs_by_one("", ""));
        assert!(!differs_by_one("", "a"));
    }

    #[test]
    fn test_differs_by_one_counts_characters_not_bytes() {
        assert!(differs_by_one("båt", "bät"));
        assert!(differs_by_one("båt", "bat"));
        assert!(!differs_by_one("båt", "bått"));
    }

    #[test]
    fn test_build_graph_edges_are_symmetric() {
        let words = ["cat", "cot", "cog", "dog", "dot"];
        let graph = build_graph(&words);

        assert_eq!(graph.len(), 5);
        // cat-cot, cot-cog, cot-dot, cog-dog, dot-dog, each both ways
        assert_eq!(graph.edge_count(), 10);
        for (from, to) in graph.edges() {
            assert!(differs_by_one(from, to));
            assert!(graph.edges().any(|edge| edge == (to, from)));
        }
        assert_eq!(graph.in_degree("cot"), Some(3));
        assert_eq!(graph.in_degree("cat"), Some(1));
    }

    #[test]
    fn test_build_graph_ignores_duplicates_and_other_lengths() {
        let words = ["cat", "cot", "cat", "coat", "at"];
        let graph = build_graph(&words);

        assert_eq!(graph.len(), 4);
        assert_eq!(graph.edge_count(), 2);
        assert!(graph.get("coat").unwrap().adjacent().is_empty());
        assert!(graph.get("at").unwrap().adjacent().is_empty());
    }

    #[test]
    fn test_build_graph_compares_full_length() {
        // "ab" matches the first two letters of "xbc" except one
        let graph = build_graph(&["ab", "xbc", "xb"]);
        assert!(graph.get("xbc").unwrap().adjacent().is_empty());
        assert_eq!(graph.edge_count(), 2); // ab <-> xb only
    }

    #[test]
    fn test_build_edges_skips_words_without_nodes() {
        let mut graph = Graph::new();
        graph.add_node("hot");
        graph.add_node("dot");
        build_edges_from_words(&mut graph, &["hot", "dot", "hit"]);

        assert!(!graph.contains("hit"));
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_build_graph_empty_dictionary() {
        let words: [&str; 0] = [];
        let graph = build_graph(&words);
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
    }
}
