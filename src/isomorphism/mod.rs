//! Isomorphism testing for undirected graphs by backtracking search
use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::graph::Graph;
use crate::permutation::Permutation;

/// Forced vertex correspondences used for symmetry breaking
pub mod constraint;

// Backtracking engine shared with automorphism enumeration
pub(crate) mod search;

use constraint::Constraints;
use search::SearchState;

/// Which variant of the backtracking search to run.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Try every unused target at every position
    Plain,
    /// Pin vertices of uniquely-occurring degree to their only possible image first
    #[default]
    SymmetryBreaking,
}

/// Find a mapping `m` with `g1[i][j] == g2[m[i]][m[j]]` for all `i, j`, or `None` if the graphs
/// are not isomorphic.
///
/// Graphs with different vertex counts or degree multisets are rejected before any search.
/// Otherwise the search is exponential in the worst case.
pub fn find_isomorphism_with(g1: &Graph, g2: &Graph, strategy: Strategy) -> Option<Permutation> {
    crate::nogood::nogood(g1, g2)?;

    let n = g1.vertex_count();
    let constraints = match strategy {
        Strategy::Plain => Constraints::unconstrained(n),
        Strategy::SymmetryBreaking => {
            let constraints = Constraints::unique_degrees(g1, g2);
            debug!("{} vertices pinned by unique degree", constraints.forced().count());
            constraints
        }
    };
    search_constrained(g1, g2, &constraints)
}

/// Like [`find_isomorphism_with`], but with a precomputed constraint set.
///
/// Each [`Constraint::Forced`](constraint::Constraint::Forced) position tries only its forced
/// target. The fast rejects still run first.
///
/// # Panics
///
/// If the graphs pass the fast rejects and `constraints` does not have one entry per vertex.
pub fn find_isomorphism_constrained(
    g1: &Graph,
    g2: &Graph,
    constraints: &Constraints,
) -> Option<Permutation> {
    crate::nogood::nogood(g1, g2)?;
    assert_eq!(
        constraints.len(),
        g1.vertex_count(),
        "constraints must have one entry per vertex"
    );
    search_constrained(g1, g2, constraints)
}

fn search_constrained(g1: &Graph, g2: &Graph, constraints: &Constraints) -> Option<Permutation> {
    let mut state = SearchState::new(g1, g2);
    if !state.search(0, constraints) {
        debug!("search exhausted without a mapping");
        return None;
    }

    let mapping = state.into_permutation();
    trace!("found isomorphism {:?}", &*mapping);
    Some(mapping)
}

pub fn are_isomorphic_with(g1: &Graph, g2: &Graph, strategy: Strategy) -> bool {
    find_isomorphism_with(g1, g2, strategy).is_some()
}

pub fn are_isomorphic(g1: &Graph, g2: &Graph) -> bool {
    are_isomorphic_with(g1, g2, Strategy::Plain)
}

pub fn find_isomorphism(g1: &Graph, g2: &Graph) -> Option<Permutation> {
    find_isomorphism_with(g1, g2, Strategy::Plain)
}

pub fn are_isomorphic_symmetry_breaking(g1: &Graph, g2: &Graph) -> bool {
    are_isomorphic_with(g1, g2, Strategy::SymmetryBreaking)
}

pub fn find_isomorphism_symmetry_breaking(g1: &Graph, g2: &Graph) -> Option<Permutation> {
    find_isomorphism_with(g1, g2, Strategy::SymmetryBreaking)
}
