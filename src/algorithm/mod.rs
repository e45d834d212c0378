pub mod dijkstra;
pub mod path;
pub mod trace;
pub mod traits;

pub use traits::{Predecessors, ShortestPathAlgorithm, ShortestPathResult};
