use log::debug;

use crate::graph::Graph;

/// Cheap necessary conditions for `g1` and `g2` to be isomorphic. `None` means they certainly
/// are not.
pub(crate) fn nogood(g1: &Graph, g2: &Graph) -> Option<()> {
    if g1.vertex_count() != g2.vertex_count() {
        debug!(
            "vertex counts differ ({} vs {})",
            g1.vertex_count(),
            g2.vertex_count()
        );
        return None;
    }

    if !is_sorted_equal(&degrees(g1), &degrees(g2)) {
        debug!("degree sequences differ");
        return None;
    }

    Some(())
}

/// Per-vertex degrees, in vertex order
fn degrees(g: &Graph) -> Vec<usize> {
    (0..g.vertex_count()).map(|v| g.degree(v)).collect()
}

/// Check that two sequences are equal once sorted (exact length and elements)
fn is_sorted_equal<T: Ord + Clone>(x: &[T], y: &[T]) -> bool {
    if x.len() != y.len() {
        return false;
    }

    let mut x = x.to_vec();
    let mut y = y.to_vec();
    x.sort_unstable();
    y.sort_unstable();
    x == y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_sorted_equal_empty() {
        let x: Vec<usize> = vec![];
        assert!(is_sorted_equal(&x, &x));
    }

    #[test]
    fn test_is_sorted_equal_different_lengths() {
        assert!(!is_sorted_equal(&[1, 2], &[1]));
    }

    #[test]
    fn test_is_sorted_equal_same_elements_different_order() {
        assert!(is_sorted_equal(&[3, 1, 2], &[2, 3, 1]));
    }

    #[test]
    fn test_is_sorted_equal_different_duplicate_counts() {
        assert!(!is_sorted_equal(&[1, 2, 2], &[1, 1, 2]));
    }

    #[test]
    fn test_vertex_count_mismatch() {
        assert!(nogood(&Graph::new(2), &Graph::new(3)).is_none());
    }

    #[test]
    fn test_degree_mismatch() {
        let triangle = Graph::from_edges(3, [(0, 1), (1, 2), (2, 0)]);
        let path = Graph::from_edges(3, [(0, 1), (1, 2)]);
        assert!(nogood(&triangle, &path).is_none());
    }

    #[test]
    fn test_degree_multiset_ignores_vertex_order() {
        // degrees [1, 2, 1] and [2, 1, 1]
        let path = Graph::from_edges(3, [(0, 1), (1, 2)]);
        let star = Graph::from_edges(3, [(0, 1), (0, 2)]);
        assert!(nogood(&path, &star).is_some());
    }

    #[test]
    fn test_loop_changes_degrees() {
        // degrees [2, 1] vs [1, 1]
        let with_loop = Graph::from_edges(2, [(0, 0), (0, 1)]);
        let edge = Graph::from_edges(2, [(0, 1)]);
        assert!(nogood(&with_loop, &edge).is_none());
    }
}
