use std::fmt::Debug;
use std::hash::Hash;

use log::trace;
use num_traits::Float;

use crate::collections::FxIndexMap;
use crate::graph::traits::{Graph, MutableGraph};
use crate::{Error, Result};

/// A directed graph keyed by arbitrary vertex identifiers
///
/// Vertices keep their insertion order. Each vertex owns its ordered list of
/// outgoing edges, stored as `(target index, weight)` where the index points
/// back into the vertex table. Vertices are never removed, so the indices
/// stay valid for the lifetime of the store.
#[derive(Debug, Clone)]
pub struct GraphStore<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Debug,
{
    /// vertex -> [(target_index, weight)]
    adjacency: FxIndexMap<V, Vec<(usize, W)>>,

    /// Number of directed edges
    edge_count: usize,
}

impl<V, W> Default for GraphStore<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, W> GraphStore<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Debug,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        GraphStore {
            adjacency: FxIndexMap::default(),
            edge_count: 0,
        }
    }

    /// Creates a new empty graph with room for `vertices` vertices
    pub fn with_capacity(vertices: usize) -> Self {
        GraphStore {
            adjacency: FxIndexMap::with_capacity_and_hasher(vertices, Default::default()),
            edge_count: 0,
        }
    }

    /// Position of a vertex in insertion order
    pub fn index_of(&self, vertex: &V) -> Option<usize> {
        self.adjacency.get_index_of(vertex)
    }

    /// Vertex stored at the given insertion position
    pub fn vertex_at(&self, index: usize) -> Option<&V> {
        self.adjacency.get_index(index).map(|(vertex, _)| vertex)
    }

    /// Returns the index of a vertex, inserting it if absent
    fn ensure_vertex(&mut self, vertex: V) -> usize {
        let entry = self.adjacency.entry(vertex);
        let index = entry.index();
        entry.or_default();
        index
    }

    /// Iterates over every edge as `(from, to, weight)` in insertion order
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V, W)> + '_ {
        self.adjacency.iter().flat_map(move |(from, edges)| {
            edges.iter().filter_map(move |&(target, weight)| {
                self.vertex_at(target).map(|to| (from, to, weight))
            })
        })
    }
}

/// Rejects anything that is not a finite, strictly positive weight
pub(crate) fn check_weight<V, W>(from: &V, to: &V, weight: W) -> Result<()>
where
    V: Debug,
    W: Float + Debug,
{
    if weight.is_finite() && weight > W::zero() {
        Ok(())
    } else {
        Err(Error::InvalidWeight {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
            weight: format!("{:?}", weight),
        })
    }
}

impl<V, W> Graph<V, W> for GraphStore<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Debug,
{
    fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        Box::new(self.adjacency.keys())
    }

    fn neighbors(&self, vertex: &V) -> Result<Box<dyn Iterator<Item = (&V, W)> + '_>> {
        let edges = self
            .adjacency
            .get(vertex)
            .ok_or_else(|| Error::UnknownVertex(format!("{:?}", vertex)))?;

        Ok(Box::new(edges.iter().filter_map(move |&(target, weight)| {
            self.vertex_at(target).map(|to| (to, weight))
        })))
    }

    fn has_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    fn edge_weight(&self, from: &V, to: &V) -> Option<W> {
        let target = self.index_of(to)?;
        self.adjacency
            .get(from)?
            .iter()
            .find(|(index, _)| *index == target)
            .map(|(_, weight)| *weight)
    }
}

impl<V, W> MutableGraph<V, W> for GraphStore<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Debug,
{
    fn add_vertex(&mut self, vertex: V) -> bool {
        if self.adjacency.contains_key(&vertex) {
            return false;
        }
        self.adjacency.insert(vertex, Vec::new());
        true
    }

    fn add_edge(&mut self, from: V, to: V, weight: W) -> Result<()> {
        check_weight(&from, &to, weight)?;

        let source = self.ensure_vertex(from);
        let target = self.ensure_vertex(to);

        let existing = self.adjacency[source]
            .iter()
            .position(|(index, _)| *index == target);
        match existing {
            // Edge already exists, replace the weight in place
            Some(position) => {
                let previous = std::mem::replace(&mut self.adjacency[source][position].1, weight);
                if let (Some(from), Some(to)) = (self.vertex_at(source), self.vertex_at(target)) {
                    trace!(
                        "replacing weight of edge {:?} -> {:?}: {:?} -> {:?}",
                        from,
                        to,
                        previous,
                        weight
                    );
                }
            }
            None => {
                self.adjacency[source].push((target, weight));
                self.edge_count += 1;
            }
        }

        Ok(())
    }

    fn remove_edge(&mut self, from: &V, to: &V) -> bool {
        let Some(target) = self.index_of(to) else {
            return false;
        };
        let Some(edges) = self.adjacency.get_mut(from) else {
            return false;
        };

        let len_before = edges.len();
        edges.retain(|(index, _)| *index != target);
        let removed = len_before - edges.len();
        self.edge_count -= removed;
        removed > 0
    }
}
