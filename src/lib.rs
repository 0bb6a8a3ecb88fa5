//! Isomorphism testing, automorphism enumeration and vertex orbits for small undirected graphs,
//! by exhaustive backtracking.
pub mod automorphism;
pub mod error;
pub mod graph;
pub mod isomorphism;
pub mod orbit;
pub mod permutation;

// fast nogood checks
mod nogood;

#[cfg(test)]
mod test_util;

pub use automorphism::all_automorphisms;
pub use error::{Error, Result};
pub use graph::Graph;
pub use isomorphism::{
    Strategy, are_isomorphic, are_isomorphic_symmetry_breaking, are_isomorphic_with,
    find_isomorphism, find_isomorphism_constrained, find_isomorphism_symmetry_breaking,
    find_isomorphism_with,
};
pub use orbit::{Orbits, UnionFind, compute_orbits, representative_markers};
pub use permutation::Permutation;
