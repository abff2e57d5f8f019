//! Graph traversal and path search (BFS and DFS).
//!
//! Every entry point takes the graph and a start vertex and fails with
//! [`GraphError::UnknownVertex`](crate::types::GraphError::UnknownVertex) when
//! the start is missing. Neighbor sets are unordered, so ties between vertices
//! at the same depth come out in arbitrary order.

use std::collections::{HashMap, HashSet, VecDeque};

use log::{debug, trace};

use crate::types::{GraphResult, Path, VertexId};

use super::DirectedGraph;

/// Breadth-first traversal: every vertex reachable from `start`, once each,
/// in non-decreasing distance order.
pub fn bft<V: VertexId>(graph: &DirectedGraph<V>, start: &V) -> GraphResult<Vec<V>> {
    graph.ensure_vertex(start)?;

    let mut visited: HashSet<V> = HashSet::new();
    let mut order: Vec<V> = Vec::new();
    let mut queue: VecDeque<V> = VecDeque::new();
    queue.push_back(start.clone());

    // A vertex may sit in the queue several times; only the first dequeue counts.
    while let Some(vertex) = queue.pop_front() {
        if !visited.insert(vertex.clone()) {
            continue;
        }
        trace!("bft: visiting {:?}", vertex);
        for next in graph.neighbors(&vertex)? {
            if !visited.contains(next) {
                queue.push_back(next.clone());
            }
        }
        order.push(vertex);
    }

    Ok(order)
}

/// Iterative depth-first traversal driven by an explicit stack.
pub fn dft<V: VertexId>(graph: &DirectedGraph<V>, start: &V) -> GraphResult<Vec<V>> {
    graph.ensure_vertex(start)?;

    let mut visited: HashSet<V> = HashSet::new();
    let mut order: Vec<V> = Vec::new();
    let mut stack: Vec<V> = vec![start.clone()];

    while let Some(vertex) = stack.pop() {
        if !visited.insert(vertex.clone()) {
            continue;
        }
        trace!("dft: visiting {:?}", vertex);
        for next in graph.neighbors(&vertex)? {
            if !visited.contains(next) {
                stack.push(next.clone());
            }
        }
        order.push(vertex);
    }

    Ok(order)
}

/// Recursive depth-first traversal producing a pre-order sequence.
///
/// Recursion depth grows with the longest simple path from `start`; prefer
/// [`dft`] on very deep graphs.
pub fn dft_recursive<V: VertexId>(graph: &DirectedGraph<V>, start: &V) -> GraphResult<Vec<V>> {
    graph.ensure_vertex(start)?;

    let mut visited = HashSet::new();
    let mut order = Vec::new();
    dft_visit(graph, start, &mut visited, &mut order)?;
    Ok(order)
}

fn dft_visit<V: VertexId>(
    graph: &DirectedGraph<V>,
    vertex: &V,
    visited: &mut HashSet<V>,
    order: &mut Vec<V>,
) -> GraphResult<()> {
    visited.insert(vertex.clone());
    order.push(vertex.clone());
    for next in graph.neighbors(vertex)? {
        if !visited.contains(next) {
            dft_visit(graph, next, visited, order)?;
        }
    }
    Ok(())
}

/// Shortest path (by edge count) from `start` to `destination`.
///
/// Returns `Ok(None)` when `destination` is unreachable, including when it is
/// not in the graph at all.
pub fn bfs<V: VertexId>(
    graph: &DirectedGraph<V>,
    start: &V,
    destination: &V,
) -> GraphResult<Option<Path<V>>> {
    graph.ensure_vertex(start)?;
    if start == destination {
        return Ok(Some(vec![start.clone()]));
    }

    let mut visited: HashSet<V> = HashSet::new();
    let mut queue: VecDeque<Path<V>> = VecDeque::new();
    queue.push_back(vec![start.clone()]);

    while let Some(path) = queue.pop_front() {
        let Some(vertex) = path.last() else {
            continue;
        };
        if vertex == destination {
            debug!("bfs: reached {:?} in {} hops", destination, path.len() - 1);
            return Ok(Some(path));
        }
        // Marked on expansion so the destination is still recognized when dequeued.
        if !visited.insert(vertex.clone()) {
            continue;
        }
        for next in graph.neighbors(vertex)? {
            let mut extended = path.clone();
            extended.push(next.clone());
            queue.push_back(extended);
        }
    }

    debug!("bfs: {:?} unreachable from {:?}", destination, start);
    Ok(None)
}

/// Some path from `start` to `destination` in depth-first order, using an
/// explicit stack. No shortest-path guarantee.
pub fn dfs<V: VertexId>(
    graph: &DirectedGraph<V>,
    start: &V,
    destination: &V,
) -> GraphResult<Option<Path<V>>> {
    graph.ensure_vertex(start)?;
    if start == destination {
        return Ok(Some(vec![start.clone()]));
    }

    let mut visited: HashSet<V> = HashSet::new();
    let mut stack: Vec<Path<V>> = vec![vec![start.clone()]];

    while let Some(path) = stack.pop() {
        let Some(vertex) = path.last() else {
            continue;
        };
        if vertex == destination {
            debug!("dfs: reached {:?} in {} hops", destination, path.len() - 1);
            return Ok(Some(path));
        }
        if !visited.insert(vertex.clone()) {
            continue;
        }
        for next in graph.neighbors(vertex)? {
            let mut extended = path.clone();
            extended.push(next.clone());
            stack.push(extended);
        }
    }

    Ok(None)
}

/// Recursive depth-first search for some path from `start` to `destination`.
pub fn dfs_recursive<V: VertexId>(
    graph: &DirectedGraph<V>,
    start: &V,
    destination: &V,
) -> GraphResult<Option<Path<V>>> {
    graph.ensure_vertex(start)?;

    let mut visited = HashSet::new();
    let mut path = Vec::new();
    if dfs_visit(graph, start, destination, &mut visited, &mut path)? {
        Ok(Some(path))
    } else {
        Ok(None)
    }
}

/// Extends `path` with `vertex`; on a dead end the vertex is popped again.
fn dfs_visit<V: VertexId>(
    graph: &DirectedGraph<V>,
    vertex: &V,
    destination: &V,
    visited: &mut HashSet<V>,
    path: &mut Path<V>,
) -> GraphResult<bool> {
    visited.insert(vertex.clone());
    path.push(vertex.clone());
    if vertex == destination {
        return Ok(true);
    }
    for next in graph.neighbors(vertex)? {
        if !visited.contains(next) && dfs_visit(graph, next, destination, visited, path)? {
            return Ok(true);
        }
    }
    path.pop();
    Ok(false)
}

/// Shortest path from `start` to every reachable vertex.
///
/// `start` itself maps to `[start]`. The first path to reach a vertex under
/// breadth-first order is kept.
pub fn bfs_all_paths<V: VertexId>(
    graph: &DirectedGraph<V>,
    start: &V,
) -> GraphResult<HashMap<V, Path<V>>> {
    graph.ensure_vertex(start)?;

    let mut paths: HashMap<V, Path<V>> = HashMap::new();
    let mut queue: VecDeque<Path<V>> = VecDeque::new();
    queue.push_back(vec![start.clone()]);

    while let Some(path) = queue.pop_front() {
        let Some(vertex) = path.last().cloned() else {
            continue;
        };
        if paths.contains_key(&vertex) {
            continue;
        }
        for next in graph.neighbors(&vertex)? {
            if !paths.contains_key(next) {
                let mut extended = path.clone();
                extended.push(next.clone());
                queue.push_back(extended);
            }
        }
        paths.insert(vertex, path);
    }

    debug!("bfs_all_paths: {} vertices reachable from {:?}", paths.len(), start);
    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn diamond() -> DirectedGraph<u32> {
        let mut graph = DirectedGraph::new();
        for v in 1..=4 {
            graph.add_vertex(v);
        }
        graph.add_edge(1, 2).unwrap();
        graph.add_edge(1, 3).unwrap();
        graph.add_edge(2, 4).unwrap();
        graph.add_edge(3, 4).unwrap();
        graph
    }

    #[test]
    fn test_dfs_visit_pops_dead_ends() {
        let graph = diamond();
        let mut visited = HashSet::new();
        let mut path = Vec::new();
        assert!(!dfs_visit(&graph, &2, &3, &mut visited, &mut path).unwrap());
        assert!(path.is_empty());
        assert!(visited.contains(&4));
    }

    #[test]
    fn test_dft_visit_is_preorder() {
        let graph = diamond();
        let mut visited = HashSet::new();
        let mut order = Vec::new();
        dft_visit(&graph, &1, &mut visited, &mut order).unwrap();
        assert_eq!(order[0], 1);
        // 4 always follows whichever of 2 or 3 is entered first
        assert_eq!(order[2], 4);
        assert_eq!(order.len(), 4);
    }
}
