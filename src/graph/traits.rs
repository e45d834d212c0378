use std::fmt::Debug;
use std::hash::Hash;
use num_traits::Float;

use crate::Result;

/// Which way a connection between two vertices runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// The edge goes from the first vertex to the second
    Forward,
    /// Only the opposite edge exists
    Reverse,
}

/// Trait representing a weighted directed graph
///
/// This is the only capability the shortest-path engine needs: an ordered
/// vertex sequence and the outgoing edges of a vertex. Any other graph
/// representation plugs into the engine by implementing it.
pub trait Graph<V, W>: Debug
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Debug,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns all vertices in insertion order
    ///
    /// The order must be stable between calls; traces depend on it.
    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_>;

    /// Returns the outgoing edges of a vertex as `(target, weight)` pairs
    ///
    /// Fails with `UnknownVertex` when the vertex was never added, which is
    /// distinct from a vertex that simply has no outgoing edges.
    fn neighbors(&self, vertex: &V) -> Result<Box<dyn Iterator<Item = (&V, W)> + '_>>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: &V) -> bool;

    /// Gets the weight of a direct edge if it exists
    fn edge_weight(&self, from: &V, to: &V) -> Option<W> {
        self.neighbors(from)
            .ok()?
            .find(|(target, _)| *target == to)
            .map(|(_, weight)| weight)
    }

    /// Weight of the edge `a -> b`, or of `b -> a` when only that one exists
    fn connection_weight(&self, a: &V, b: &V) -> Option<(W, Direction)> {
        self.edge_weight(a, b)
            .map(|weight| (weight, Direction::Forward))
            .or_else(|| self.edge_weight(b, a).map(|weight| (weight, Direction::Reverse)))
    }

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: &V, to: &V) -> bool {
        self.edge_weight(from, to).is_some()
    }

    /// Sums the direct edge weights along a vertex sequence
    ///
    /// Returns `None` if the sequence is empty, names an unknown vertex, or
    /// any consecutive pair lacks a direct edge.
    fn path_weight(&self, path: &[V]) -> Option<W> {
        let first = path.first()?;
        if !self.has_vertex(first) {
            return None;
        }

        path.windows(2).try_fold(W::zero(), |total, hop| {
            self.edge_weight(&hop[0], &hop[1]).map(|weight| total + weight)
        })
    }
}

/// Trait for mutable graph operations
pub trait MutableGraph<V, W>: Graph<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Debug,
{
    /// Adds a vertex; returns false if it was already present
    fn add_vertex(&mut self, vertex: V) -> bool;

    /// Adds a directed edge, inserting missing endpoints
    ///
    /// Fails with `InvalidWeight` without touching the graph when the weight
    /// is not a finite positive number.
    fn add_edge(&mut self, from: V, to: V, weight: W) -> Result<()>;

    /// Removes an edge from the graph
    fn remove_edge(&mut self, from: &V, to: &V) -> bool;

    /// Adds the edge in both directions with the same weight
    fn add_undirected_edge(&mut self, a: V, b: V, weight: W) -> Result<()> {
        self.add_edge(a.clone(), b.clone(), weight)?;
        self.add_edge(b, a, weight)
    }
}
