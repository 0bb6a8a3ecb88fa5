use log::debug;

use crate::graph::Graph;
use crate::isomorphism::search::SearchState;
use crate::permutation::Permutation;

/// Every automorphism of `g`, in lexicographic order.
///
/// This visits all `n!` permutations with a full adjacency check at each, and is only practical
/// for small graphs. The identity is always the first element.
pub fn all_automorphisms(g: &Graph) -> Vec<Permutation> {
    let mut results = Vec::new();
    SearchState::new(g, g).enumerate(0, &mut results);
    debug!(
        "found {} automorphisms of a graph with {} vertices",
        results.len(),
        g.vertex_count()
    );
    results
}
