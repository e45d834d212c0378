pub mod adapters;
pub mod samples;
pub mod store;
pub mod traits;

pub use store::GraphStore;
pub use traits::{Direction, Graph, MutableGraph};
