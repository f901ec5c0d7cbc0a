//! Conversions between graph representations.
//!
//! Every function here is pure: given a consistent input it produces the
//! corresponding representation without touching anything else.  Inputs
//! are trusted to be in range — the [`Graph`](crate::Graph) constructors
//! and the readers validate before calling in.
//!
//! Edges are always enumerated row-major (source ascending, then target
//! ascending).  Incidence derivation and edge printing both depend on
//! this ordering, so it is part of the contract, not an accident.

use crate::directedness::Directedness;
use crate::edge::Edge;
use crate::matrix::AdjacencyMatrix;
use crate::repr::{AdjacencyList, EdgeList, IncidenceMatrix};

/// Builds an adjacency matrix from 0-based neighbor lists.
///
/// Sets `matrix[v][n] = 1` for every neighbor `n` of `v`, nothing more:
/// no symmetrizing happens here.  An undirected caller must already have
/// listed both directions (the adjacency-list reader does).
pub fn adjacency_list_to_matrix(list: &AdjacencyList) -> AdjacencyMatrix {
    let mut matrix = AdjacencyMatrix::with_order(list.len());
    for (vertex, neighbors) in list.iter().enumerate() {
        for &neighbor in neighbors {
            matrix.set(vertex, neighbor, true);
        }
    }
    matrix
}

/// Builds an adjacency matrix from 1-based edge pairs.
///
/// Undirected graphs also get the mirrored cell for each edge.
pub fn edge_list_to_matrix(
    order: usize,
    edges: &[Edge],
    directedness: Directedness,
) -> AdjacencyMatrix {
    let mut matrix = AdjacencyMatrix::with_order(order);
    for edge in edges {
        matrix.set(edge.from - 1, edge.to - 1, true);
        if !directedness.is_directed() {
            matrix.set(edge.to - 1, edge.from - 1, true);
        }
    }
    matrix
}

/// Builds an adjacency matrix from an incidence matrix.
///
/// Directed columns name their head with `1` and their tail with any
/// other nonzero value; undirected columns are read top-down, first
/// nonzero row as tail, second as head.  A column with fewer than two
/// nonzero entries contributes no edge and is skipped without error —
/// deliberate leniency toward malformed columns.
pub fn incidence_to_matrix(
    incidence: &IncidenceMatrix,
    directedness: Directedness,
) -> AdjacencyMatrix {
    let order = incidence.vertices();
    let mut matrix = AdjacencyMatrix::with_order(order);
    for column in 0..incidence.columns() {
        let mut from = None;
        let mut to = None;
        for vertex in 0..order {
            let cell = incidence.get(vertex, column);
            if cell == 0 {
                continue;
            }
            if directedness.is_directed() {
                if cell == 1 {
                    to = Some(vertex);
                } else {
                    from = Some(vertex);
                }
            } else if from.is_none() {
                from = Some(vertex);
            } else {
                to = Some(vertex);
            }
        }
        if let (Some(from), Some(to)) = (from, to) {
            matrix.set(from, to, true);
            if !directedness.is_directed() {
                matrix.set(to, from, true);
            }
        }
    }
    matrix
}

/// Derives 0-based neighbor lists, each in ascending order.
pub fn matrix_to_adjacency_list(matrix: &AdjacencyMatrix) -> AdjacencyList {
    (0..matrix.order())
        .map(|vertex| matrix.neighbors(vertex).collect())
        .collect()
}

/// Derives the 1-based edge list in row-major order.
///
/// Directed graphs emit one arc per set cell; undirected graphs emit
/// each edge once, from the upper triangle (`row < col`), so the pair
/// `(i, j)`/`(j, i)` is never duplicated.
pub fn matrix_to_edge_list(matrix: &AdjacencyMatrix, directedness: Directedness) -> EdgeList {
    let mut edges = Vec::new();
    for row in 0..matrix.order() {
        for col in matrix.neighbors(row) {
            if !directedness.is_directed() && row >= col {
                continue;
            }
            edges.push(Edge::new(row + 1, col + 1));
        }
    }
    edges
}

/// Derives the incidence matrix with `columns` edge columns.
///
/// The edge list is derived first (same row-major ordering), then the
/// k-th edge fills the k-th column: tail gets `-1` when directed and `1`
/// when undirected, head gets `1`.  `columns` is the declared edge count
/// of the graph: declared-but-absent edges stay all-zero columns, and
/// derived edges beyond the declaration are not written.
pub fn matrix_to_incidence(
    matrix: &AdjacencyMatrix,
    columns: usize,
    directedness: Directedness,
) -> IncidenceMatrix {
    let edges = matrix_to_edge_list(matrix, directedness);
    let mut incidence = IncidenceMatrix::zeroed(matrix.order(), columns);
    for (column, edge) in edges.iter().take(columns).enumerate() {
        let tail = if directedness.is_directed() { -1 } else { 1 };
        incidence.set(edge.from - 1, column, tail);
        incidence.set(edge.to - 1, column, 1);
    }
    incidence
}
