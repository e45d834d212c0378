//! Conversions between [`GraphStore`] and external graph descriptions.
//!
//! Raw adjacency maps, JSON documents and adjacency matrices all enter the
//! engine through these constructors, so every weight is validated once at
//! construction time.

use std::collections::HashSet;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::io::Read;

use log::debug;
use num_traits::Float;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::error::Category;

use crate::collections::FxIndexMap;
use crate::graph::store::{check_weight, GraphStore};
use crate::graph::traits::{Graph, MutableGraph};
use crate::{Error, Result};

/// JSON adjacency document: `{"A": {"B": 1, "C": 4}, ...}`
type AdjacencyDocument<W> = FxIndexMap<String, FxIndexMap<String, W>>;

impl<V, W> GraphStore<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Debug,
{
    /// Builds a graph from an adjacency map
    ///
    /// Every key becomes a vertex in iteration order before any edge is
    /// added, so vertices that only appear as targets come last. Weights are
    /// all checked before anything is inserted.
    pub fn from_adjacency<I, E>(adjacency: I) -> Result<Self>
    where
        I: IntoIterator<Item = (V, E)>,
        E: IntoIterator<Item = (V, W)>,
    {
        let rows: Vec<(V, Vec<(V, W)>)> = adjacency
            .into_iter()
            .map(|(vertex, edges)| (vertex, edges.into_iter().collect()))
            .collect();

        for (from, edges) in &rows {
            for (to, weight) in edges {
                check_weight(from, to, *weight)?;
            }
        }

        let mut graph = GraphStore::with_capacity(rows.len());
        for (vertex, _) in &rows {
            graph.add_vertex(vertex.clone());
        }
        for (from, edges) in rows {
            for (to, weight) in edges {
                graph.add_edge(from.clone(), to, weight)?;
            }
        }

        Ok(graph)
    }
}

impl<W> GraphStore<String, W>
where
    W: Float + Debug + DeserializeOwned,
{
    /// Parses a JSON adjacency document, keeping the document's key order
    pub fn from_json_str(json: &str) -> Result<Self> {
        let document: AdjacencyDocument<W> = serde_json::from_str(json).map_err(document_error)?;
        debug!("parsed adjacency document with {} vertices", document.len());
        Self::from_adjacency(document)
    }

    /// Reads a JSON adjacency document from any reader
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let document: AdjacencyDocument<W> =
            serde_json::from_reader(reader).map_err(document_error)?;
        debug!("read adjacency document with {} vertices", document.len());
        Self::from_adjacency(document)
    }
}

impl<W> GraphStore<String, W>
where
    W: Float + Debug,
{
    /// Builds a graph from a square adjacency matrix
    ///
    /// `matrix[i][j]` is the weight of the edge from vertex `i` to vertex
    /// `j`; zero and infinite cells mean "no edge". Without explicit labels
    /// vertices are named `A`..`Z`, then `A1`, `B1`, and so on.
    pub fn from_matrix(matrix: &[Vec<W>], labels: Option<&[String]>) -> Result<Self> {
        let n = matrix.len();
        let labels: Vec<String> = match labels {
            Some(labels) if labels.len() == n => labels.to_vec(),
            Some(labels) => {
                return Err(Error::InvalidGraph(format!(
                    "{} labels given for a {}x{} matrix",
                    labels.len(),
                    n,
                    n
                )))
            }
            None => (0..n).map(default_label).collect(),
        };

        if let Some((row, cells)) = matrix.iter().enumerate().find(|(_, cells)| cells.len() != n) {
            return Err(Error::InvalidGraph(format!(
                "matrix row {} has {} cells, expected {}",
                row,
                cells.len(),
                n
            )));
        }

        let rows = labels.iter().zip(matrix).map(|(from, cells)| {
            let edges: Vec<(String, W)> = labels
                .iter()
                .zip(cells)
                .filter(|(_, weight)| **weight != W::zero() && !weight.is_infinite())
                .map(|(to, weight)| (to.clone(), *weight))
                .collect();
            (from.clone(), edges)
        });

        Self::from_adjacency(rows)
    }
}

/// Well-formed JSON of the wrong shape is an invalid graph; anything else
/// stays a JSON error
fn document_error(err: serde_json::Error) -> Error {
    match err.classify() {
        Category::Data => Error::InvalidGraph(err.to_string()),
        Category::Io | Category::Syntax | Category::Eof => Error::Json(err),
    }
}

/// Default vertex label for matrix position `index`
pub fn default_label(index: usize) -> String {
    let letter = char::from(b'A' + (index % 26) as u8);
    if index < 26 {
        letter.to_string()
    } else {
        format!("{}{}", letter, index / 26)
    }
}

impl<V, W> GraphStore<V, W>
where
    V: Eq + Hash + Clone + Debug + Display,
    W: Float + Debug + Display,
{
    /// Renders the graph in Graphviz DOT format
    ///
    /// In undirected mode each vertex pair is written once, using the first
    /// direction encountered.
    pub fn to_dot(&self, directed: bool) -> String {
        let (kind, arrow) = if directed { ("digraph", "->") } else { ("graph", "--") };

        let mut dot = format!("{} G {{\n", kind);
        for vertex in self.vertices() {
            dot.push_str(&format!("  \"{}\";\n", vertex));
        }

        let mut written: HashSet<(&V, &V)> = HashSet::new();
        for (from, to, weight) in self.edges() {
            if !directed {
                if written.contains(&(to, from)) || written.contains(&(from, to)) {
                    continue;
                }
                written.insert((from, to));
            }
            dot.push_str(&format!(
                "  \"{}\" {} \"{}\" [label=\"{}\"];\n",
                from, arrow, to, weight
            ));
        }

        dot.push('}');
        dot
    }
}

impl<V, W> GraphStore<V, W>
where
    V: Eq + Hash + Clone + Debug + Serialize,
    W: Float + Debug + Serialize,
{
    /// Serializes the graph back into a JSON adjacency document
    pub fn to_json_string(&self) -> Result<String> {
        let mut document: FxIndexMap<&V, FxIndexMap<&V, W>> = FxIndexMap::default();
        for vertex in self.vertices() {
            document.insert(vertex, FxIndexMap::default());
        }
        for (from, to, weight) in self.edges() {
            if let Some(row) = document.get_mut(from) {
                row.insert(to, weight);
            }
        }
        Ok(serde_json::to_string_pretty(&document)?)
    }
}
