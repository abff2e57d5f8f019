//! Earliest-ancestor queries over parent/child pairs.

use std::collections::VecDeque;

use log::{debug, trace};

use crate::graph::{DirectedGraph, GraphBuilder};
use crate::types::{GraphResult, Path, VertexId, NO_ANCESTOR};

/// Build a graph whose edges point from child to parent.
///
/// Each `(parent, child)` pair becomes the edge `child -> parent`, so walking
/// forward edges climbs the family tree.
pub fn ancestry_graph<V: VertexId>(pairs: &[(V, V)]) -> GraphResult<DirectedGraph<V>> {
    let mut builder = GraphBuilder::new();
    for (parent, child) in pairs {
        builder
            .add_vertex(parent.clone())
            .add_vertex(child.clone())
            .link(child.clone(), parent.clone());
    }
    builder.build()
}

/// The most distant ancestor of `individual` in an ancestry graph.
///
/// Among ancestors at the maximum distance the smallest identifier wins.
/// Returns `None` when `individual` has no parents.
pub fn earliest_ancestor_in<V: VertexId + Ord>(
    graph: &DirectedGraph<V>,
    individual: &V,
) -> GraphResult<Option<V>> {
    graph.ensure_vertex(individual)?;

    let mut max_path_length = 1;
    let mut earliest: Option<V> = None;
    let mut queue: VecDeque<Path<V>> = VecDeque::new();
    queue.push_back(vec![individual.clone()]);

    while let Some(path) = queue.pop_front() {
        let Some(vertex) = path.last() else {
            continue;
        };
        if path.len() > max_path_length {
            max_path_length = path.len();
            earliest = Some(vertex.clone());
        } else if path.len() == max_path_length && earliest.as_ref().is_some_and(|e| vertex < e) {
            earliest = Some(vertex.clone());
        }
        trace!("ancestry: {:?} at generation {}", vertex, path.len() - 1);

        for parent in graph.neighbors(vertex)? {
            // Cyclic input would otherwise never drain the queue.
            if path.contains(parent) {
                continue;
            }
            let mut extended = path.clone();
            extended.push(parent.clone());
            queue.push_back(extended);
        }
    }

    debug!(
        "earliest ancestor of {:?}: {:?} ({} generations)",
        individual,
        earliest,
        max_path_length - 1
    );
    Ok(earliest)
}

/// Earliest ancestor of `individual` given `(parent, child)` pairs.
///
/// An individual that appears in no pair has no recorded ancestors.
pub fn earliest_ancestor<V: VertexId + Ord>(
    pairs: &[(V, V)],
    individual: &V,
) -> GraphResult<Option<V>> {
    let graph = ancestry_graph(pairs)?;
    if !graph.contains_vertex(individual) {
        return Ok(None);
    }
    earliest_ancestor_in(&graph, individual)
}

/// Integer form of [`earliest_ancestor`] returning [`NO_ANCESTOR`] when there is none.
pub fn earliest_ancestor_or_sentinel(pairs: &[(i64, i64)], individual: i64) -> GraphResult<i64> {
    Ok(earliest_ancestor(pairs, &individual)?.unwrap_or(NO_ANCESTOR))
}
