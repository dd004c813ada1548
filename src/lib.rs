//! Shortest word ladders: a graph of dictionary words where neighbors differ
//! by one letter, searched breadth-first.

pub mod builder;
pub mod config;
pub mod data_cleaning;
pub mod error;
pub mod graph;
pub mod graph_file;
pub mod render;
pub mod search;

pub use builder::{build_graph, differs_by_one};
pub use error::{LadderError, Result};
pub use graph::{Graph, Node, NodeId};
pub use search::shortest_path;
