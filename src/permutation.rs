use serde::{Deserialize, Serialize};
use std::ops::Deref;

use crate::error::Error;
use crate::graph::Graph;

/// A bijection on `0..n`.
///
/// As a vertex mapping, `p[i] = j` sends vertex `i` of one graph to vertex `j` of another (or of
/// the same graph, for automorphisms).
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct Permutation(Vec<usize>);

impl Permutation {
    pub fn new(values: impl IntoIterator<Item = usize>) -> Option<Self> {
        let vec: Vec<usize> = values.into_iter().collect();

        let n = vec.len();
        let mut seen = vec![false; n];

        for &value in &vec {
            if value >= n || seen[value] {
                return None;
            }
            seen[value] = true;
        }

        // n values, all distinct and in range: every slot is hit
        Some(Self(vec))
    }

    pub fn identity(size: usize) -> Self {
        Self((0..size).collect())
    }

    /// Wrap a mapping the search has already kept bijective.
    pub(crate) fn from_search(mapping: Vec<usize>) -> Self {
        debug_assert!(Permutation::new(mapping.iter().copied()).is_some());
        Self(mapping)
    }

    pub fn is_identity(&self) -> bool {
        self.0.iter().enumerate().all(|(i, &x)| i == x)
    }

    /// True when this permutation carries the adjacency of `g1` exactly onto `g2`, checked over
    /// the whole matrix.
    pub fn is_isomorphism(&self, g1: &Graph, g2: &Graph) -> bool {
        let n = g1.vertex_count();
        n == g2.vertex_count() && self.len() == n && is_mapping_valid(g1, g2, &self.0)
    }

    /// Relabel `graph` along this permutation: vertex `i` becomes `self[i]`.
    ///
    /// The result `h` satisfies `self.is_isomorphism(graph, &h)`.
    ///
    /// # Panics
    ///
    /// If the permutation and graph differ in size.
    pub fn apply(&self, graph: &Graph) -> Graph {
        assert_eq!(
            self.len(),
            graph.vertex_count(),
            "permutation must have one entry per vertex"
        );
        Graph::from_edges(
            graph.vertex_count(),
            graph.edges().map(|(u, v)| (self.0[u], self.0[v])),
        )
    }
}

/// Full adjacency-preservation check: `g1[i][j] == g2[mapping[i]][mapping[j]]` for all `i, j`.
pub(crate) fn is_mapping_valid(g1: &Graph, g2: &Graph, mapping: &[usize]) -> bool {
    (0..g1.vertex_count()).all(|i| {
        let row1 = g1.row(i);
        let row2 = g2.row(mapping[i]);
        row1.iter().zip(mapping).all(|(&edge, &j)| edge == row2[j])
    })
}

impl Deref for Permutation {
    type Target = [usize];

    fn deref(&self) -> &[usize] {
        &self.0
    }
}

impl TryFrom<Vec<usize>> for Permutation {
    type Error = Error;

    fn try_from(values: Vec<usize>) -> Result<Self, Error> {
        Permutation::new(values).ok_or(Error::InvalidPermutation)
    }
}

impl From<Permutation> for Vec<usize> {
    fn from(p: Permutation) -> Vec<usize> {
        p.0
    }
}
