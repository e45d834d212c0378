//! SSSP Trace - Single-Source Shortest Paths with a replayable trace
//!
//! This library runs Dijkstra's algorithm over a strictly positively weighted
//! directed graph and records, next to the final distance and predecessor
//! tables, the exact order in which vertices were extracted from the priority
//! queue and every relaxation performed after each extraction.
//!
//! Renderers and explainers consume the [`VisitTrace`] read-only and replay it
//! step by step; the engine itself knows nothing about presentation.

pub mod algorithm;
pub mod collections;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    dijkstra::Dijkstra,
    path::{find_shortest_path, reconstruct, PathResult},
    trace::{Relaxation, Replay, ReplayFrame, TraceStep, VisitTrace},
    Predecessors, ShortestPathAlgorithm, ShortestPathResult,
};
pub use data_structures::IndexedPriorityQueue;
/// Re-export main types for convenient use
pub use graph::{Graph, GraphStore, MutableGraph};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid weight {weight} on edge {from} -> {to}: weights must be finite and positive")]
    InvalidWeight {
        from: String,
        to: String,
        weight: String,
    },

    #[error("Unknown vertex: {0}")]
    UnknownVertex(String),

    #[error("extract_min called on an empty priority queue")]
    EmptyQueue,

    #[error("Predecessor chain for {target} did not terminate within {steps} steps")]
    CorruptPredecessorChain { target: String, steps: usize },

    #[error("Invalid graph description: {0}")]
    InvalidGraph(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
