use std::hash::BuildHasherDefault;

use indexmap::{IndexMap, IndexSet};
use rustc_hash::FxHasher;

/// Insertion-ordered map with fast hashing, used for every per-vertex table
pub type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;

/// Insertion-ordered set with fast hashing
pub type FxIndexSet<K> = IndexSet<K, BuildHasherDefault<FxHasher>>;
