//! Error types for the graph-walks library.

use thiserror::Error;

use super::UserId;

/// All errors that can occur in the graph-walks library.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Vertex not present in the graph.
    #[error("Vertex {0} does not exist")]
    UnknownVertex(String),

    /// User ID never issued by the social network.
    #[error("User ID {0} not found")]
    UnknownUser(UserId),

    /// Snapshot could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl GraphError {
    /// Build a [`GraphError::UnknownVertex`] from any identifier.
    pub fn unknown_vertex<V: std::fmt::Debug>(id: &V) -> Self {
        Self::UnknownVertex(format!("{:?}", id))
    }
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
