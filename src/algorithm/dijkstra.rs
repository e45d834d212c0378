use std::fmt::Debug;
use std::hash::Hash;

use log::{debug, trace, warn};
use num_traits::Float;

use crate::algorithm::path::{reconstruct, PathResult};
use crate::algorithm::trace::{Relaxation, VisitTrace};
use crate::algorithm::{Predecessors, ShortestPathAlgorithm, ShortestPathResult};
use crate::collections::{FxIndexMap, FxIndexSet};
use crate::data_structures::IndexedPriorityQueue;
use crate::graph::Graph;
use crate::{Error, Result};

/// Classic Dijkstra's algorithm with a recorded visit trace
///
/// Every vertex is queued up front at its initial distance and extracted at
/// most once. Ties in the queue go to the vertex that comes first in the
/// graph's vertex order, so two runs over the same graph produce identical
/// traces.
#[derive(Debug, Clone)]
pub struct Dijkstra {
    /// Whether each trace step lists the relaxations it caused
    record_relaxations: bool,
}

impl Default for Dijkstra {
    fn default() -> Self {
        Self::new()
    }
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra {
            record_relaxations: true,
        }
    }

    /// Enables or disables relaxation events in the trace
    ///
    /// The extraction order is recorded either way.
    pub fn with_relaxation_events(mut self, enabled: bool) -> Self {
        self.record_relaxations = enabled;
        self
    }

    /// Runs the algorithm from `source` over the whole graph
    pub fn run<V, W, G>(&self, graph: &G, source: &V) -> Result<ShortestPathResult<V, W>>
    where
        V: Eq + Hash + Clone + Debug,
        W: Float + Debug,
        G: Graph<V, W> + ?Sized,
    {
        if !graph.has_vertex(source) {
            return Err(Error::UnknownVertex(format!("{:?}", source)));
        }

        // Dense indices in the graph's vertex order double as tie-break ranks
        let order: FxIndexSet<&V> = graph.vertices().collect();
        let source_index = order
            .get_index_of(&source)
            .ok_or_else(|| Error::UnknownVertex(format!("{:?}", source)))?;
        let n = order.len();

        debug!("running Dijkstra from {:?} over {} vertices", source, n);

        let mut distances: Vec<W> = vec![W::infinity(); n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        distances[source_index] = W::zero();

        let mut queue = IndexedPriorityQueue::with_capacity(n);
        for (index, &distance) in distances.iter().enumerate() {
            queue.insert(index, distance);
        }

        let mut visit_trace = VisitTrace::with_capacity(n);

        while !queue.is_empty() {
            let (u, _) = queue.extract_min()?;
            let vertex: &V = order[u];
            let distance_u = distances[u];

            visit_trace.push_step(vertex.clone(), distance_u);
            trace!("extracted {:?} at distance {:?}", vertex, distance_u);

            // Everything still queued is unreachable
            if distance_u.is_infinite() {
                debug!(
                    "stopping early, {} vertices unreachable from {:?}",
                    queue.len() + 1,
                    source
                );
                break;
            }

            for (neighbor, weight) in graph.neighbors(vertex)? {
                let Some(v) = order.get_index_of(&neighbor) else {
                    warn!(
                        "edge {:?} -> {:?} points outside the vertex set, skipping",
                        vertex, neighbor
                    );
                    continue;
                };

                let candidate = distance_u + weight;
                if candidate < distances[v] {
                    trace!(
                        "relaxed {:?} -> {:?}: {:?} -> {:?}",
                        vertex,
                        neighbor,
                        distances[v],
                        candidate
                    );

                    if self.record_relaxations {
                        visit_trace.record_relaxation(Relaxation {
                            target: neighbor.clone(),
                            weight,
                            previous: distances[v],
                            distance: candidate,
                        });
                    }

                    distances[v] = candidate;
                    predecessors[v] = Some(u);
                    queue.decrease_key(&v, candidate);
                }
            }
        }

        debug!(
            "Dijkstra from {:?} finished after {} extractions",
            source,
            visit_trace.len()
        );

        let distance_table: FxIndexMap<V, W> = order
            .iter()
            .zip(&distances)
            .map(|(vertex, &distance)| ((*vertex).clone(), distance))
            .collect();

        let predecessor_table = Predecessors::from_links(
            source.clone(),
            order.iter().zip(&predecessors).map(|(vertex, previous)| {
                ((*vertex).clone(), previous.map(|index| order[index].clone()))
            }),
        );

        Ok(ShortestPathResult {
            source: source.clone(),
            distances: distance_table,
            predecessors: predecessor_table,
            visit_trace,
        })
    }

    /// Runs from `source` and extracts the path to `target`
    ///
    /// An unreachable target, or one that is not in the graph at all, yields
    /// an empty path with infinite distance. Only an unknown source is an
    /// error.
    pub fn shortest_path<V, W, G>(
        &self,
        graph: &G,
        source: &V,
        target: &V,
    ) -> Result<PathResult<V, W>>
    where
        V: Eq + Hash + Clone + Debug,
        W: Float + Debug,
        G: Graph<V, W> + ?Sized,
    {
        let result = self.run(graph, source)?;

        if !graph.has_vertex(target) {
            warn!("target {:?} is not in the graph, reporting it as unreachable", target);
        }

        let distance = result.distance(target).unwrap_or_else(W::infinity);
        let path = reconstruct(&result.predecessors, target)?;

        Ok(PathResult {
            path,
            distance,
            predecessors: result.predecessors,
            visit_trace: result.visit_trace,
        })
    }
}

impl<V, W, G> ShortestPathAlgorithm<V, W, G> for Dijkstra
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Debug,
    G: Graph<V, W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: &V) -> Result<ShortestPathResult<V, W>> {
        self.run(graph, source)
    }
}
