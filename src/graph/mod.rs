//! In-memory graph operations — the core data structure.

pub mod builder;
pub mod directed_graph;
pub mod traversal;

pub use builder::GraphBuilder;
pub use directed_graph::DirectedGraph;
pub use traversal::{bfs, bfs_all_paths, bft, dfs, dfs_recursive, dft, dft_recursive};
