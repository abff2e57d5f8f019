//! Fluent API for building DirectedGraph instances.

use log::debug;

use crate::types::{GraphResult, VertexId};

use super::DirectedGraph;

/// Fluent builder for constructing a DirectedGraph.
///
/// Vertices and edges are collected in any order and validated together by
/// [`build`](GraphBuilder::build).
pub struct GraphBuilder<V: VertexId> {
    vertices: Vec<V>,
    edges: Vec<(V, V)>,
}

impl<V: VertexId> GraphBuilder<V> {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Register a vertex.
    pub fn add_vertex(&mut self, id: V) -> &mut Self {
        self.vertices.push(id);
        self
    }

    /// Register several vertices at once.
    pub fn add_vertices<I: IntoIterator<Item = V>>(&mut self, ids: I) -> &mut Self {
        self.vertices.extend(ids);
        self
    }

    /// Add a directed edge between two vertices.
    pub fn link(&mut self, from: V, to: V) -> &mut Self {
        self.edges.push((from, to));
        self
    }

    /// Build the final DirectedGraph.
    ///
    /// Fails if an edge names a vertex that was never registered.
    pub fn build(&self) -> GraphResult<DirectedGraph<V>> {
        let mut graph = DirectedGraph::new();
        for id in &self.vertices {
            graph.add_vertex(id.clone());
        }
        for (from, to) in &self.edges {
            graph.add_edge(from.clone(), to.clone())?;
        }
        debug!(
            "built graph with {} vertices and {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );
        Ok(graph)
    }
}

impl<V: VertexId> Default for GraphBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}
