//! Graphs and proptest strategies shared by the test modules
use proptest::prelude::*;

use crate::graph::Graph;

pub(crate) fn cycle(n: usize) -> Graph {
    Graph::from_edges(n, (0..n).map(|i| (i, (i + 1) % n)))
}

/// Random graphs on at most `max_vertices` vertices, loops included
pub(crate) fn arb_graph(max_vertices: usize) -> impl Strategy<Value = Graph> {
    (0..=max_vertices).prop_flat_map(|n| {
        let bound = n.max(1);
        prop::collection::vec((0..bound, 0..bound), 0..=n * n)
            .prop_map(move |edges| Graph::from_edges(n, edges))
    })
}
