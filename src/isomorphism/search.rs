//! Backtracking search over vertex correspondences.
//!
//! Positions `0..n` of the mapping are assigned in order, trying targets in ascending order and
//! skipping those already used. A complete assignment is accepted only if it passes the full
//! adjacency check; partial assignments are not pruned beyond the bijection constraint.
use super::constraint::{Constraint, Constraints};
use crate::graph::Graph;
use crate::permutation::{Permutation, is_mapping_valid};

/// A partial mapping from `g1` into `g2`, threaded through the recursion.
///
/// `used[j]` is true exactly when some assigned position `i < index` has `mapping[i] == j`.
pub(crate) struct SearchState<'a> {
    g1: &'a Graph,
    g2: &'a Graph,
    mapping: Vec<usize>,
    used: Vec<bool>,
}

impl<'a> SearchState<'a> {
    /// Both graphs must have the same vertex count.
    pub(crate) fn new(g1: &'a Graph, g2: &'a Graph) -> Self {
        let n = g1.vertex_count();
        debug_assert_eq!(n, g2.vertex_count());
        SearchState {
            g1,
            g2,
            mapping: vec![0; n],
            used: vec![false; n],
        }
    }

    fn n(&self) -> usize {
        self.mapping.len()
    }

    /// Run `f` with `index ↦ candidate` committed, then release `candidate` again.
    ///
    /// The mapping entry is left in place, so after a successful search `mapping` holds the
    /// complete assignment.
    fn with_candidate<R>(
        &mut self,
        index: usize,
        candidate: usize,
        f: impl FnOnce(&mut Self) -> R,
    ) -> R {
        self.mapping[index] = candidate;
        self.used[candidate] = true;
        let result = f(self);
        self.used[candidate] = false;
        result
    }

    /// Find the first valid complete mapping extending positions `0..index`.
    ///
    /// A position with a [`Constraint::Forced`] target tries only that target, and fails
    /// outright if it is already used.
    pub(crate) fn search(&mut self, index: usize, constraints: &Constraints) -> bool {
        if index == self.n() {
            return is_mapping_valid(self.g1, self.g2, &self.mapping);
        }

        match constraints.get(index) {
            Constraint::Forced(target) => {
                if self.used[target] {
                    return false;
                }
                self.with_candidate(index, target, |s| s.search(index + 1, constraints))
            }
            Constraint::Any => {
                for candidate in 0..self.n() {
                    if self.used[candidate] {
                        continue;
                    }
                    let found = self.with_candidate(index, candidate, |s| {
                        s.search(index + 1, constraints)
                    });
                    if found {
                        return true;
                    }
                }
                false
            }
        }
    }

    /// Visit every complete mapping extending positions `0..index`, collecting the valid ones.
    pub(crate) fn enumerate(&mut self, index: usize, results: &mut Vec<Permutation>) {
        if index == self.n() {
            if is_mapping_valid(self.g1, self.g2, &self.mapping) {
                results.push(Permutation::from_search(self.mapping.clone()));
            }
            return;
        }

        for candidate in 0..self.n() {
            if !self.used[candidate] {
                self.with_candidate(index, candidate, |s| s.enumerate(index + 1, results));
            }
        }
    }

    pub(crate) fn into_permutation(self) -> Permutation {
        Permutation::from_search(self.mapping)
    }
}
