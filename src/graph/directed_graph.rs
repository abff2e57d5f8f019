//! Core graph structure — vertices with outbound adjacency sets.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use crate::types::{GraphError, GraphResult, VertexId};

/// An unweighted directed graph keyed by vertex identifier.
///
/// Edges can only be added between vertices that already exist, and every
/// vertex maps to a set of outbound neighbors, so parallel edges collapse.
#[derive(Debug, Clone)]
pub struct DirectedGraph<V: VertexId> {
    /// Adjacency index: vertex -> outbound neighbors.
    vertices: HashMap<V, HashSet<V>>,
}

impl<V: VertexId> DirectedGraph<V> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            vertices: HashMap::new(),
        }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.vertices.values().map(HashSet::len).sum()
    }

    /// Whether `id` has been added.
    pub fn contains_vertex(&self, id: &V) -> bool {
        self.vertices.contains_key(id)
    }

    /// Whether the edge `from -> to` exists.
    pub fn has_edge(&self, from: &V, to: &V) -> bool {
        self.vertices
            .get(from)
            .is_some_and(|neighbors| neighbors.contains(to))
    }

    /// Iterate over all vertex identifiers, in no particular order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.vertices.keys()
    }

    /// Add a vertex. Adding one that already exists leaves its edges intact.
    pub fn add_vertex(&mut self, id: V) {
        self.vertices.entry(id).or_default();
    }

    /// Add a directed edge between two existing vertices.
    pub fn add_edge(&mut self, from: V, to: V) -> GraphResult<()> {
        if !self.vertices.contains_key(&to) {
            return Err(GraphError::unknown_vertex(&to));
        }
        let neighbors = self
            .vertices
            .get_mut(&from)
            .ok_or_else(|| GraphError::unknown_vertex(&from))?;
        neighbors.insert(to);
        Ok(())
    }

    /// Get the outbound neighbors of a vertex.
    pub fn neighbors(&self, id: &V) -> GraphResult<&HashSet<V>> {
        self.vertices
            .get(id)
            .ok_or_else(|| GraphError::unknown_vertex(id))
    }

    /// Fail with [`GraphError::UnknownVertex`] unless `id` exists.
    pub fn ensure_vertex(&self, id: &V) -> GraphResult<()> {
        self.neighbors(id).map(|_| ())
    }
}

impl<V: VertexId + Ord> DirectedGraph<V> {
    /// Sorted copy of the adjacency mapping, suitable for display and comparison.
    pub fn adjacency_snapshot(&self) -> BTreeMap<V, BTreeSet<V>> {
        self.vertices
            .iter()
            .map(|(id, neighbors)| (id.clone(), neighbors.iter().cloned().collect()))
            .collect()
    }
}

impl<V: VertexId> Default for DirectedGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}
