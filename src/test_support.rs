//! Quickcheck generators for property tests.

use quickcheck::{Arbitrary, Gen};

use crate::directedness::Directedness;
use crate::graph::Graph;
use crate::matrix::AdjacencyMatrix;

/// A randomly generated graph for property testing.
///
/// Orders are kept small, self-loops are never generated, and the
/// matrix is symmetric whenever the directedness comes out undirected —
/// so every generated graph satisfies the invariants the converters
/// assume.  The edge count is an honest recount of the matrix.
#[derive(Debug, Clone)]
pub struct ArbGraph {
    pub graph: Graph,
}

impl Arbitrary for ArbGraph {
    fn arbitrary(g: &mut Gen) -> Self {
        let order = usize::arbitrary(g) % 12;
        let directedness = if bool::arbitrary(g) {
            Directedness::Directed
        } else {
            Directedness::Undirected
        };

        let mut matrix = AdjacencyMatrix::with_order(order);
        for row in 0..order {
            for col in 0..order {
                if row == col {
                    continue;
                }
                if !directedness.is_directed() && row > col {
                    continue;
                }
                if bool::arbitrary(g) {
                    matrix.set(row, col, true);
                    if !directedness.is_directed() {
                        matrix.set(col, row, true);
                    }
                }
            }
        }

        let num_edges = matrix.count_edges(directedness);
        ArbGraph {
            graph: Graph::from_matrix(matrix, num_edges, directedness),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_undirected_graphs_are_symmetric() {
        let mut g = Gen::new(50);
        for _ in 0..100 {
            let arb = ArbGraph::arbitrary(&mut g);
            if !arb.graph.is_directed() {
                assert!(arb.graph.matrix().is_symmetric());
            }
            for vertex in 0..arb.graph.num_vertices() {
                assert!(!arb.graph.matrix().get(vertex, vertex));
            }
        }
    }
}
