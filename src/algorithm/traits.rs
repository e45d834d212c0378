use std::fmt::Debug;
use std::hash::Hash;

use num_traits::Float;
use serde::Serialize;

use crate::algorithm::path::reconstruct;
use crate::algorithm::trace::VisitTrace;
use crate::collections::FxIndexMap;
use crate::graph::Graph;
use crate::Result;

/// Predecessor table produced by a run
///
/// Maps every vertex known to the run to the vertex it was last reached
/// from, or `None` for the source and for unreached vertices. The run's
/// source travels with the table so path reconstruction can tell a chain
/// that ends at the source from one that ends anywhere else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Predecessors<V>
where
    V: Eq + Hash,
{
    source: V,
    links: FxIndexMap<V, Option<V>>,
}

impl<V> Predecessors<V>
where
    V: Eq + Hash + Clone + Debug,
{
    /// Builds a table from `(vertex, predecessor)` pairs
    ///
    /// Used by the engine, and by callers that load a table produced
    /// elsewhere.
    pub fn from_links<I>(source: V, links: I) -> Self
    where
        I: IntoIterator<Item = (V, Option<V>)>,
    {
        Predecessors {
            source,
            links: links.into_iter().collect(),
        }
    }

    /// Source vertex of the run that produced this table
    pub fn source(&self) -> &V {
        &self.source
    }

    /// Predecessor of a vertex, if it has one
    pub fn get(&self, vertex: &V) -> Option<&V> {
        self.links.get(vertex).and_then(|previous| previous.as_ref())
    }

    /// Returns true if the vertex has an entry in the table
    pub fn contains(&self, vertex: &V) -> bool {
        self.links.contains_key(vertex)
    }

    /// Number of vertices in the table
    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Iterates over `(vertex, predecessor)` in vertex order
    pub fn iter(&self) -> impl Iterator<Item = (&V, Option<&V>)> + '_ {
        self.links.iter().map(|(vertex, previous)| (vertex, previous.as_ref()))
    }
}

/// Result of a shortest path algorithm execution
///
/// Unreached vertices keep an infinite distance, which serializes to `null`
/// in JSON.
#[derive(Debug, Clone, Serialize)]
pub struct ShortestPathResult<V, W>
where
    V: Eq + Hash,
{
    /// Source vertex
    pub source: V,

    /// Distances from source to each vertex, in graph vertex order
    pub distances: FxIndexMap<V, W>,

    /// Predecessor vertices in the shortest path tree
    pub predecessors: Predecessors<V>,

    /// Extraction order with the relaxations each extraction caused
    pub visit_trace: VisitTrace<V, W>,
}

impl<V, W> ShortestPathResult<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Debug,
{
    /// Distance to a vertex; `None` if the vertex was not part of the run
    pub fn distance(&self, vertex: &V) -> Option<W> {
        self.distances.get(vertex).copied()
    }

    /// Returns true if the vertex has a finite distance
    pub fn is_reachable(&self, vertex: &V) -> bool {
        self.distance(vertex).map_or(false, |distance| distance.is_finite())
    }

    /// Number of vertices with a finite distance
    pub fn reachable_count(&self) -> usize {
        self.distances.values().filter(|distance| distance.is_finite()).count()
    }

    /// Shortest path from the source to `target`, empty if unreachable
    pub fn path_to(&self, target: &V) -> Result<Vec<V>> {
        reconstruct(&self.predecessors, target)
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<V, W, G>
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Debug,
    G: Graph<V, W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: &V) -> Result<ShortestPathResult<V, W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
