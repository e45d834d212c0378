use std::fmt::Debug;
use std::hash::Hash;

use log::warn;
use num_traits::Float;
use serde::Serialize;

use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::trace::VisitTrace;
use crate::algorithm::Predecessors;
use crate::graph::Graph;
use crate::{Error, Result};

/// Outcome of a source -> target query
///
/// "No path" is a normal outcome: `path` is empty and `distance` is
/// infinite.
#[derive(Debug, Clone, Serialize)]
pub struct PathResult<V, W>
where
    V: Eq + Hash,
{
    /// Vertices from source to target inclusive
    pub path: Vec<V>,
    /// Total weight of `path`
    pub distance: W,
    /// Predecessor table of the underlying run
    pub predecessors: Predecessors<V>,
    /// Visit trace of the underlying run
    pub visit_trace: VisitTrace<V, W>,
}

impl<V, W> PathResult<V, W>
where
    V: Eq + Hash,
{
    /// Returns true if a path was found
    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty()
    }
}

/// Materializes the path from the table's source to `target`
///
/// Walks backwards through the predecessor table until it reaches a vertex
/// without a predecessor. The path is returned only if that vertex is the
/// source of the run; otherwise, or if `target` is not in the table, the
/// result is empty. A walk longer than the table itself means the chain
/// loops, which fails with `CorruptPredecessorChain`.
pub fn reconstruct<V>(predecessors: &Predecessors<V>, target: &V) -> Result<Vec<V>>
where
    V: Eq + Hash + Clone + Debug,
{
    if !predecessors.contains(target) {
        return Ok(Vec::new());
    }

    let bound = predecessors.len();
    let mut path = vec![target.clone()];
    let mut current = target;

    while let Some(previous) = predecessors.get(current) {
        if path.len() > bound {
            warn!("predecessor chain for {:?} exceeds {} vertices", target, bound);
            return Err(Error::CorruptPredecessorChain {
                target: format!("{:?}", target),
                steps: bound,
            });
        }
        path.push(previous.clone());
        current = previous;
    }

    if current != predecessors.source() {
        return Ok(Vec::new());
    }

    path.reverse();
    Ok(path)
}

/// Runs Dijkstra from `source` and returns the path to `target`
///
/// Unknown `source` is an error; an unreachable or absent `target` is not.
pub fn find_shortest_path<V, W, G>(graph: &G, source: &V, target: &V) -> Result<PathResult<V, W>>
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Debug,
    G: Graph<V, W> + ?Sized,
{
    Dijkstra::new().shortest_path(graph, source, target)
}
