//! graph-walks — traversal and path search over unweighted directed graphs.
//!
//! Provides a hash-backed [`DirectedGraph`], breadth- and depth-first
//! traversal and search, an earliest-ancestor query over parent/child pairs,
//! and a [`SocialNetwork`] that computes shortest friendship paths.

pub mod engine;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use engine::{
    ancestry_graph, earliest_ancestor, earliest_ancestor_in, earliest_ancestor_or_sentinel,
    NetworkSnapshot, SocialNetwork,
};
pub use graph::{
    bfs, bfs_all_paths, bft, dfs, dfs_recursive, dft, dft_recursive, DirectedGraph, GraphBuilder,
};
pub use types::{
    FriendshipStatus, GraphError, GraphResult, Path, User, UserId, VertexId, FIRST_USER_ID,
    NO_ANCESTOR,
};
