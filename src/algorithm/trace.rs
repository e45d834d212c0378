//! Visit trace of a shortest-path run.
//!
//! A trace is an ordered list of extraction steps. Each step names the vertex
//! taken from the priority queue, its final distance, and the relaxations
//! that extraction caused. Consumers replay the steps in order; the engine
//! never suspends mid-run to feed them.

use std::fmt::Debug;
use std::hash::Hash;

use serde::Serialize;

use crate::collections::FxIndexMap;

/// A successful relaxation of the edge `step.vertex -> target`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Relaxation<V, W> {
    /// Vertex whose distance improved
    pub target: V,
    /// Weight of the relaxed edge
    pub weight: W,
    /// Distance of `target` before the relaxation
    pub previous: W,
    /// Distance of `target` after the relaxation
    pub distance: W,
}

/// One extraction from the priority queue
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TraceStep<V, W> {
    /// Extracted vertex
    pub vertex: V,
    /// Its distance at extraction time, final from here on
    pub distance: W,
    /// Relaxations caused by this extraction, in neighbor order
    pub relaxations: Vec<Relaxation<V, W>>,
}

/// Append-only log of extractions produced by one run
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct VisitTrace<V, W> {
    steps: Vec<TraceStep<V, W>>,
}

impl<V, W> VisitTrace<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Copy + Debug,
{
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        VisitTrace {
            steps: Vec::with_capacity(capacity),
        }
    }

    pub(crate) fn push_step(&mut self, vertex: V, distance: W) {
        self.steps.push(TraceStep {
            vertex,
            distance,
            relaxations: Vec::new(),
        });
    }

    /// Attaches a relaxation to the most recent step
    pub(crate) fn record_relaxation(&mut self, relaxation: Relaxation<V, W>) {
        if let Some(step) = self.steps.last_mut() {
            step.relaxations.push(relaxation);
        }
    }

    /// All steps in extraction order
    pub fn steps(&self) -> &[TraceStep<V, W>] {
        &self.steps
    }

    /// Number of extractions
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Extracted vertices in order
    pub fn order(&self) -> impl Iterator<Item = &V> + '_ {
        self.steps.iter().map(|step| &step.vertex)
    }

    /// Index of the step that extracted `vertex`
    pub fn position(&self, vertex: &V) -> Option<usize> {
        self.steps.iter().position(|step| step.vertex == *vertex)
    }

    /// Total number of recorded relaxations
    pub fn relaxation_count(&self) -> usize {
        self.steps.iter().map(|step| step.relaxations.len()).sum()
    }

    /// Replays the trace one extraction at a time
    ///
    /// The iterator keeps the running predecessor table, rebuilt from the
    /// recorded relaxations; read it between frames with
    /// [`Replay::predecessors`]. A trace recorded without relaxation events
    /// replays with an empty table.
    pub fn replay(&self) -> Replay<'_, V, W> {
        Replay {
            steps: self.steps.iter(),
            index: 0,
            predecessors: FxIndexMap::default(),
        }
    }
}

/// One extraction as seen by a replay
#[derive(Debug, Clone)]
pub struct ReplayFrame<'a, V, W> {
    /// Position of this step in the trace
    pub index: usize,
    /// The extraction itself
    pub step: &'a TraceStep<V, W>,
    /// Edges whose relaxation changed a predecessor in this step
    pub updated: Vec<(&'a V, &'a V)>,
}

/// Iterator returned by [`VisitTrace::replay`]
#[derive(Debug)]
pub struct Replay<'a, V, W>
where
    V: Eq + Hash,
{
    steps: std::slice::Iter<'a, TraceStep<V, W>>,
    index: usize,
    predecessors: FxIndexMap<&'a V, &'a V>,
}

impl<'a, V, W> Replay<'a, V, W>
where
    V: Eq + Hash,
{
    /// vertex -> predecessor as it stands after the last yielded frame
    pub fn predecessors(&self) -> &FxIndexMap<&'a V, &'a V> {
        &self.predecessors
    }

    /// Predecessor of one vertex after the last yielded frame
    pub fn predecessor(&self, vertex: &V) -> Option<&'a V> {
        self.predecessors.get(vertex).copied()
    }
}

impl<'a, V, W> Iterator for Replay<'a, V, W>
where
    V: Eq + Hash,
{
    type Item = ReplayFrame<'a, V, W>;

    fn next(&mut self) -> Option<Self::Item> {
        let step = self.steps.next()?;

        let updated: Vec<(&'a V, &'a V)> = step
            .relaxations
            .iter()
            .map(|relaxation| (&step.vertex, &relaxation.target))
            .collect();
        for &(from, to) in &updated {
            self.predecessors.insert(to, from);
        }

        let frame = ReplayFrame {
            index: self.index,
            step,
            updated,
        };
        self.index += 1;
        Some(frame)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.steps.size_hint()
    }
}
