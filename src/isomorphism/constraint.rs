use std::collections::HashMap;

use crate::graph::Graph;

/// What a vertex of the first graph may map to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Constraint {
    Any,
    Forced(usize),
}

/// Forced correspondences derived from degrees, indexed by vertex of the first graph.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Constraints(Vec<Constraint>);

impl Constraints {
    /// No vertex constrained
    pub fn unconstrained(n: usize) -> Self {
        Constraints(vec![Constraint::Any; n])
    }

    /// Map every vertex whose degree occurs exactly once in *both* graphs to the unique vertex of
    /// that degree in `g2`. Any isomorphism must agree with these pairs.
    ///
    /// Both graphs are assumed to have the same vertex count.
    pub fn unique_degrees(g1: &Graph, g2: &Graph) -> Self {
        let n = g1.vertex_count();
        debug_assert_eq!(n, g2.vertex_count());

        let table1 = DegreeTable::new(g1);
        let table2 = DegreeTable::new(g2);

        let mut constraints = Self::unconstrained(n);
        for (degree, &(count, v1)) in &table1.0 {
            if count != 1 {
                continue;
            }
            if let Some(&(1, v2)) = table2.0.get(degree) {
                constraints.0[v1] = Constraint::Forced(v2);
            }
        }
        constraints
    }

    #[cfg(test)]
    pub(crate) fn force(&mut self, v: usize, w: usize) {
        self.0[v] = Constraint::Forced(w);
    }

    /// Number of vertices covered
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, v: usize) -> Constraint {
        self.0[v]
    }

    /// Iterate over the forced pairs `(v1, v2)`, ordered by `v1`
    pub fn forced(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.0.iter().enumerate().filter_map(|(v, c)| match c {
            Constraint::Forced(w) => Some((v, *w)),
            Constraint::Any => None,
        })
    }
}

/// degree => (number of vertices with that degree, last such vertex seen)
struct DegreeTable(HashMap<usize, (usize, usize)>);

impl DegreeTable {
    fn new(g: &Graph) -> Self {
        let mut table = HashMap::new();
        for v in 0..g.vertex_count() {
            let entry = table.entry(g.degree(v)).or_insert((0, v));
            entry.0 += 1;
            entry.1 = v;
        }
        DegreeTable(table)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_forces_middle_vertex() {
        // degrees [1, 2, 1] and [2, 1, 1]: only degree 2 is unique
        let path = Graph::from_edges(3, [(0, 1), (1, 2)]);
        let star = Graph::from_edges(3, [(0, 1), (0, 2)]);

        let constraints = Constraints::unique_degrees(&path, &star);
        assert_eq!(constraints.forced().collect::<Vec<_>>(), vec![(1, 0)]);
        assert_eq!(constraints.get(0), Constraint::Any);
        assert_eq!(constraints.get(1), Constraint::Forced(0));
    }

    #[test]
    fn test_regular_graph_has_no_constraints() {
        let cycle = Graph::from_edges(4, [(0, 1), (1, 2), (2, 3), (3, 0)]);
        let constraints = Constraints::unique_degrees(&cycle, &cycle);
        assert_eq!(constraints, Constraints::unconstrained(4));
    }

    #[test]
    fn test_degree_unique_in_one_graph_only() {
        // degree 2 is unique in g1 but absent from g2, degree 0 the other way round
        let g1 = Graph::from_edges(3, [(0, 1), (0, 2)]); // degrees [2, 1, 1]
        let g2 = Graph::from_edges(3, [(0, 1)]); // degrees [1, 1, 0]
        let constraints = Constraints::unique_degrees(&g1, &g2);
        assert_eq!(constraints.forced().count(), 0);
    }

    #[test]
    fn test_several_unique_degrees() {
        // "paw": triangle 0-1-2 with pendant 3 on vertex 0, degrees [3, 2, 2, 1]
        let g1 = Graph::from_edges(4, [(0, 1), (1, 2), (2, 0), (0, 3)]);
        // same shape relabelled: triangle 1-2-3, pendant 0 on vertex 3
        let g2 = Graph::from_edges(4, [(1, 2), (2, 3), (3, 1), (3, 0)]);

        let constraints = Constraints::unique_degrees(&g1, &g2);
        assert_eq!(constraints.forced().collect::<Vec<_>>(), vec![(0, 3), (3, 0)]);
    }
}
