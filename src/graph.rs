//! Graph data model: words as nodes, directed adjacency between them.
//!
//! The graph owns every node. Adjacency is stored as dense indices into the
//! graph's own node map, so an edge can never point outside the graph.

use indexmap::IndexMap;
use tracing::debug;

/// Dense index of a node inside its owning `Graph`.
pub type NodeId = usize;

/// One dictionary word and the nodes reachable from it in one step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    name: String,
    adjacent: Vec<NodeId>,
    in_degree: usize,
}

impl Node {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            adjacent: Vec::new(),
            in_degree: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Outgoing neighbors, in the order the edges were added.
    pub fn adjacent(&self) -> &[NodeId] {
        &self.adjacent
    }

    /// Number of edges ending at this node. Diagnostic only.
    pub fn in_degree(&self) -> usize {
        self.in_degree
    }
}

/// Directed graph keyed by normalized word.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: IndexMap<String, Node>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a node named `name` and returns its id.
    ///
    /// Re-adding an existing name is a no-op that returns the existing id, so
    /// edges already pointing at that node stay intact.
    pub fn add_node(&mut self, name: &str) -> NodeId {
        if let Some(id) = self.nodes.get_index_of(name) {
            return id;
        }
        let (id, _) = self.nodes.insert_full(name.to_string(), Node::new(name));
        id
    }

    /// Adds the directed edge `v -> w`.
    ///
    /// Returns `false` without touching the graph when either endpoint is
    /// unknown.
    pub fn add_edge(&mut self, v: &str, w: &str) -> bool {
        match (self.id_of(v), self.id_of(w)) {
            (Some(source), Some(destination)) => self.connect(source, destination),
            _ => {
                debug!(source = v, destination = w, "ignoring edge with unknown endpoint");
                false
            }
        }
    }

    /// Id-based variant of `add_edge` used by the builder.
    pub(crate) fn connect(&mut self, source: NodeId, destination: NodeId) -> bool {
        if destination >= self.nodes.len() {
            return false;
        }
        let Some((_, from)) = self.nodes.get_index_mut(source) else {
            return false;
        };
        from.adjacent.push(destination);
        if let Some((_, to)) = self.nodes.get_index_mut(destination) {
            to.in_degree += 1;
        }
        true
    }

    pub fn id_of(&self, name: &str) -> Option<NodeId> {
        self.nodes.get_index_of(name)
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get_index(id).map(|(_, node)| node)
    }

    pub fn get(&self, name: &str) -> Option<&Node> {
        self.nodes.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    pub fn in_degree(&self, name: &str) -> Option<usize> {
        self.get(name).map(Node::in_degree)
    }

    /// Number of nodes.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.nodes.values().map(|node| node.adjacent.len()).sum()
    }

    /// Every edge as a `(source, destination)` name pair.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.nodes.values().flat_map(move |node| {
            node.adjacent.iter().filter_map(move |&target| {
                self.node(target)
                    .map(|to| (node.name.as_str(), to.name.as_str()))
            })
        })
    }

    /// Shortest path from `start` to `goal`, see [`crate::search::shortest_path`].
    pub fn shortest_path(&self, start: &str, goal: &str) -> Option<Vec<String>> {
        crate::search::shortest_path(self, start, goal)
    }
}
