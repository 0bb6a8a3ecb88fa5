//! Vertex orbits under a set of automorphisms
use serde::Serialize;
use std::collections::BTreeMap;
use std::ops::Deref;

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::permutation::Permutation;

/// Disjoint sets over `0..n` with path compression.
///
/// `union(x, y)` always makes the root of `x` the parent of the root of `y`.
#[derive(Clone, Debug)]
pub struct UnionFind {
    parent: Vec<usize>,
}

impl UnionFind {
    pub fn new(n: usize) -> Self {
        UnionFind {
            parent: (0..n).collect(),
        }
    }

    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }

        let mut current = x;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }

    pub fn union(&mut self, x: usize, y: usize) {
        let root_x = self.find(x);
        let root_y = self.find(y);
        if root_x != root_y {
            self.parent[root_y] = root_x;
        }
    }
}

/// A partition of the vertices of a graph into orbits.
///
/// Each orbit lists its vertices in ascending order, and orbits are ordered by their smallest
/// vertex.
#[derive(Clone, PartialEq, Eq, Debug, Serialize)]
#[serde(transparent)]
pub struct Orbits(Vec<Vec<usize>>);

impl Orbits {
    /// The orbit containing `v`, if `v` is a vertex
    pub fn orbit_of(&self, v: usize) -> Option<&[usize]> {
        self.0
            .iter()
            .find(|orbit| orbit.binary_search(&v).is_ok())
            .map(Vec::as_slice)
    }

    /// Smallest vertex of each orbit, ascending
    pub fn representatives(&self) -> Vec<usize> {
        self.0.iter().map(|orbit| orbit[0]).collect()
    }

    pub fn into_inner(self) -> Vec<Vec<usize>> {
        self.0
    }
}

impl Deref for Orbits {
    type Target = [Vec<usize>];

    fn deref(&self) -> &[Vec<usize>] {
        &self.0
    }
}

/// Merge `i` with `p[i]` for every vertex `i` and every automorphism `p`, and return the
/// resulting classes.
///
/// With no automorphisms every vertex is its own orbit. Fails with [`Error::SizeMismatch`] if a
/// permutation does not have one entry per vertex of `g`.
pub fn compute_orbits(g: &Graph, automorphisms: &[Permutation]) -> Result<Orbits> {
    let n = g.vertex_count();
    let mut uf = UnionFind::new(n);

    for p in automorphisms {
        if p.len() != n {
            return Err(Error::SizeMismatch {
                expected: n,
                found: p.len(),
            });
        }
        for (i, &j) in p.iter().enumerate() {
            uf.union(i, j);
        }
    }

    let mut classes: BTreeMap<usize, Vec<usize>> = BTreeMap::new();
    for v in 0..n {
        classes.entry(uf.find(v)).or_default().push(v);
    }

    // vertices were pushed in ascending order, so orbit[0] is the minimum
    let mut orbits: Vec<Vec<usize>> = classes.into_values().collect();
    orbits.sort_unstable_by_key(|orbit| orbit[0]);
    Ok(Orbits(orbits))
}

/// `markers[v]` is true exactly when `v` is the smallest vertex of its orbit.
///
/// Empty orbits are skipped. Fails with [`Error::VertexOutOfRange`] if an orbit names a vertex
/// outside `0..n`.
pub fn representative_markers(orbits: &[Vec<usize>], n: usize) -> Result<Vec<bool>> {
    let mut markers = vec![false; n];
    for orbit in orbits {
        if let Some(&vertex) = orbit.iter().find(|&&v| v >= n) {
            return Err(Error::VertexOutOfRange {
                vertex,
                vertex_count: n,
            });
        }
        if let Some(&min) = orbit.iter().min() {
            markers[min] = true;
        }
    }
    Ok(markers)
}
