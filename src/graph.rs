//! Undirected graphs stored as adjacency matrices
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};

/// An undirected graph on vertices `0..n`.
///
/// The matrix is symmetric: edges are only ever added between in-range vertices, and never
/// removed. A loop `v - v` sets the diagonal entry and counts once toward the degree of `v`.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(into = "EdgeList", from = "EdgeList")]
pub struct Graph {
    vertex_count: usize,
    // row-major, vertex_count * vertex_count
    adjacency: Vec<bool>,
}

impl Graph {
    /// A graph with `n` isolated vertices
    pub fn new(n: usize) -> Self {
        Self {
            vertex_count: n,
            adjacency: vec![false; n * n],
        }
    }

    /// Like [`Graph::new`], but for a signed count as it comes out of a parser.
    pub fn with_vertex_count(n: i64) -> Result<Self> {
        let n = usize::try_from(n).map_err(|_| Error::InvalidArgument { vertex_count: n })?;
        Ok(Self::new(n))
    }

    pub fn from_edges(n: usize, edges: impl IntoIterator<Item = (usize, usize)>) -> Self {
        let mut graph = Self::new(n);
        for (u, v) in edges {
            graph.add_edge(u, v);
        }
        graph
    }

    /// Add the undirected edge `u - v`.
    ///
    /// Calls naming a vertex outside `0..n` are ignored.
    pub fn add_edge(&mut self, u: usize, v: usize) {
        let n = self.vertex_count;
        if u >= n || v >= n {
            return;
        }
        self.adjacency[u * n + v] = true;
        self.adjacency[v * n + u] = true;
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    /// # Panics
    ///
    /// If `u` or `v` is not a vertex of this graph.
    pub fn is_adjacent(&self, u: usize, v: usize) -> bool {
        self.row(u)[v]
    }

    /// Number of edges incident to `v`
    pub fn degree(&self, v: usize) -> usize {
        self.row(v).iter().filter(|&&x| x).count()
    }

    /// Degrees of all vertices, sorted ascending
    pub fn degree_sequence(&self) -> Vec<usize> {
        let mut degrees: Vec<usize> = (0..self.vertex_count).map(|v| self.degree(v)).collect();
        degrees.sort_unstable();
        degrees
    }

    /// Each undirected edge once, as `(u, v)` with `u <= v`
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.vertex_count;
        (0..n).flat_map(move |u| {
            (u..n)
                .filter(move |&v| self.is_adjacent(u, v))
                .map(move |v| (u, v))
        })
    }

    pub(crate) fn row(&self, v: usize) -> &[bool] {
        let n = self.vertex_count;
        &self.adjacency[v * n..(v + 1) * n]
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Graph with {} vertices:", self.vertex_count)?;
        for v in 0..self.vertex_count {
            let entries: Vec<&str> = self
                .row(v)
                .iter()
                .map(|&x| if x { "1" } else { "0" })
                .collect();
            writeln!(f, "{}: [{}]", v, entries.join(" "))?;
        }
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////
// Serialized form

#[derive(Serialize, Deserialize)]
struct EdgeList {
    vertex_count: usize,
    edges: Vec<(usize, usize)>,
}

impl From<Graph> for EdgeList {
    fn from(graph: Graph) -> Self {
        EdgeList {
            vertex_count: graph.vertex_count,
            edges: graph.edges().collect(),
        }
    }
}

impl From<EdgeList> for Graph {
    fn from(list: EdgeList) -> Self {
        Graph::from_edges(list.vertex_count, list.edges)
    }
}
