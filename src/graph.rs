//! The graph entity.
//!
//! A [`Graph`] owns exactly one canonical representation — the adjacency
//! matrix — plus the directedness and the edge count its input declared.
//! Every other representation is derived on demand and never stored, so
//! the representations cannot drift apart.  A graph is immutable once
//! constructed: there are no vertex or edge mutation operations.

use crate::convert;
use crate::directedness::Directedness;
use crate::edge::Edge;
use crate::error::GraphError;
use crate::matrix::AdjacencyMatrix;
use crate::repr::{AdjacencyList, EdgeList, IncidenceMatrix};
use crate::traversal::{self, Component, TraversalKind};

/// The degree of a single vertex.
///
/// Directed graphs report out- and in-degree separately; undirected
/// graphs report `(out + in) / 2`, which on a symmetric matrix equals
/// the row count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Degree {
    Undirected(usize),
    Directed { outgoing: usize, incoming: usize },
}

/// A loaded graph: directedness, declared edge count, and the canonical
/// adjacency matrix.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Graph {
    directedness: Directedness,
    num_edges: usize,
    matrix: AdjacencyMatrix,
}

impl Graph {
    /// Constructs a graph directly from an adjacency matrix.
    ///
    /// `num_edges` is the declared edge count from the input header; it
    /// is trusted as-is and reported by [`num_edges`](Graph::num_edges)
    /// without recounting.  For undirected graphs the matrix is expected
    /// to be symmetric; like the rest of the loaders, this constructor
    /// trusts the caller on that invariant.
    pub fn from_matrix(
        matrix: AdjacencyMatrix,
        num_edges: usize,
        directedness: Directedness,
    ) -> Self {
        Graph {
            directedness,
            num_edges,
            matrix,
        }
    }

    /// Constructs a graph from 0-based neighbor lists.
    ///
    /// The lists are taken literally (no symmetrizing — an undirected
    /// caller must already list both directions, as the reader does).
    /// Fails if any neighbor index is out of range.
    pub fn from_adjacency_list(
        list: &AdjacencyList,
        num_edges: usize,
        directedness: Directedness,
    ) -> Result<Self, GraphError> {
        let order = list.len();
        for neighbors in list {
            for &neighbor in neighbors {
                if neighbor >= order {
                    return Err(GraphError::VertexOutOfRange {
                        vertex: neighbor + 1,
                        order,
                    });
                }
            }
        }
        Ok(Graph::from_matrix(
            convert::adjacency_list_to_matrix(list),
            num_edges,
            directedness,
        ))
    }

    /// Constructs a graph from 1-based edge pairs; the edge count is the
    /// length of the list.  Fails if any endpoint is out of range.
    pub fn from_edge_list(
        order: usize,
        edges: &[Edge],
        directedness: Directedness,
    ) -> Result<Self, GraphError> {
        for edge in edges {
            for vertex in [edge.from, edge.to] {
                if vertex == 0 || vertex > order {
                    return Err(GraphError::VertexOutOfRange { vertex, order });
                }
            }
        }
        Ok(Graph::from_matrix(
            convert::edge_list_to_matrix(order, edges, directedness),
            edges.len(),
            directedness,
        ))
    }

    /// Constructs a graph from an incidence matrix; the edge count is
    /// the declared column count.  Malformed columns (fewer than two
    /// nonzero entries) are dropped silently, so the adjacency matrix
    /// may hold fewer edges than [`num_edges`](Graph::num_edges) claims.
    pub fn from_incidence(incidence: &IncidenceMatrix, directedness: Directedness) -> Self {
        Graph::from_matrix(
            convert::incidence_to_matrix(incidence, directedness),
            incidence.columns(),
            directedness,
        )
    }

    pub fn directedness(&self) -> Directedness {
        self.directedness
    }

    pub fn is_directed(&self) -> bool {
        self.directedness.is_directed()
    }

    /// The number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.matrix.order()
    }

    /// The declared edge (or arc) count, captured at load time.  Never
    /// recomputed from the matrix — callers trust input consistency.
    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    pub fn matrix(&self) -> &AdjacencyMatrix {
        &self.matrix
    }

    pub fn to_adjacency_list(&self) -> AdjacencyList {
        convert::matrix_to_adjacency_list(&self.matrix)
    }

    pub fn to_edge_list(&self) -> EdgeList {
        convert::matrix_to_edge_list(&self.matrix, self.directedness)
    }

    pub fn to_incidence(&self) -> IncidenceMatrix {
        convert::matrix_to_incidence(&self.matrix, self.num_edges, self.directedness)
    }

    /// Whole-graph traversal: one discovery-ordered group per connected
    /// component (undirected) or per forward-reachable set from each
    /// unvisited root (directed; see the [`traversal`] module docs).
    pub fn traverse(&self, kind: TraversalKind) -> Vec<Component> {
        traversal::components(&self.matrix, kind)
    }

    /// Degree of the 0-based `vertex`.
    ///
    /// # Panics
    /// Panics if `vertex >= num_vertices()`.
    pub fn degree(&self, vertex: usize) -> Degree {
        let outgoing = self.matrix.neighbors(vertex).count();
        let incoming = (0..self.num_vertices())
            .filter(|&other| self.matrix.get(other, vertex))
            .count();
        match self.directedness {
            Directedness::Directed => Degree::Directed { outgoing, incoming },
            Directedness::Undirected => Degree::Undirected((outgoing + incoming) / 2),
        }
    }

    /// Degrees of all vertices, in vertex order.
    pub fn degrees(&self) -> Vec<Degree> {
        (0..self.num_vertices()).map(|v| self.degree(v)).collect()
    }
}
