//! Renderers for representations, traversal reports, and metrics.
//!
//! Every function takes the output sink as an explicit `io::Write`
//! argument, owned by the caller for the duration of that one call —
//! there is no process-wide output path.  All vertex and edge numbers
//! are rendered 1-based, matching the input encodings.

use std::io::Write;

use crate::graph::{Degree, Graph};
use crate::traversal::TraversalKind;

/// Tab-separated adjacency matrix with 1-based row and column labels.
pub fn write_adjacency_matrix<W: Write>(graph: &Graph, out: &mut W) -> std::io::Result<()> {
    let order = graph.num_vertices();
    write!(out, "\t")?;
    for col in 1..=order {
        write!(out, "{col}\t")?;
    }
    writeln!(out)?;
    for row in 0..order {
        write!(out, "{}\t", row + 1)?;
        for col in 0..order {
            write!(out, "{}\t", graph.matrix().get(row, col) as u8)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// One `vertex | neighbors...` line per vertex, 1-based.
pub fn write_adjacency_list<W: Write>(graph: &Graph, out: &mut W) -> std::io::Result<()> {
    for (vertex, neighbors) in graph.to_adjacency_list().iter().enumerate() {
        write!(out, "{} | ", vertex + 1)?;
        for neighbor in neighbors {
            write!(out, "{} ", neighbor + 1)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// One `from to` line per edge, row-major order.
pub fn write_edge_list<W: Write>(graph: &Graph, out: &mut W) -> std::io::Result<()> {
    for edge in graph.to_edge_list() {
        writeln!(out, "{edge}")?;
    }
    Ok(())
}

/// Tab-separated incidence matrix with 1-based vertex-row and
/// edge-column labels.
pub fn write_incidence_matrix<W: Write>(graph: &Graph, out: &mut W) -> std::io::Result<()> {
    let incidence = graph.to_incidence();
    write!(out, "\t")?;
    for column in 1..=incidence.columns() {
        write!(out, "{column}\t")?;
    }
    writeln!(out)?;
    for vertex in 0..incidence.vertices() {
        write!(out, "{}\t", vertex + 1)?;
        for column in 0..incidence.columns() {
            write!(out, "{}\t", incidence.get(vertex, column))?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Whole-graph traversal report: a numbered heading per group, one
/// `vertex #k` line per visited vertex, and a dashed separator.
pub fn write_traversal<W: Write>(
    graph: &Graph,
    kind: TraversalKind,
    out: &mut W,
) -> std::io::Result<()> {
    for (index, component) in graph.traverse(kind).iter().enumerate() {
        writeln!(out, "component #{}:", index + 1)?;
        for &vertex in component {
            writeln!(out, "vertex #{}", vertex + 1)?;
        }
        writeln!(out, "-------------------------")?;
    }
    Ok(())
}

/// Per-vertex degree report: `i : out = X, in = Y` for directed graphs,
/// `i : degree = D` for undirected ones.
pub fn write_degrees<W: Write>(graph: &Graph, out: &mut W) -> std::io::Result<()> {
    for (vertex, degree) in graph.degrees().iter().enumerate() {
        match *degree {
            Degree::Directed { outgoing, incoming } => {
                writeln!(out, "{} : out = {}, in = {}", vertex + 1, outgoing, incoming)?;
            }
            Degree::Undirected(degree) => {
                writeln!(out, "{} : degree = {}", vertex + 1, degree)?;
            }
        }
    }
    Ok(())
}

/// The declared edge count: `arcs = E` for directed graphs, `edges = E`
/// for undirected ones.
pub fn write_edge_count<W: Write>(graph: &Graph, out: &mut W) -> std::io::Result<()> {
    if graph.is_directed() {
        writeln!(out, "arcs = {}", graph.num_edges())
    } else {
        writeln!(out, "edges = {}", graph.num_edges())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directedness::Directedness::{Directed, Undirected};
    use crate::edge::Edge;

    fn rendered(write: impl Fn(&mut Vec<u8>) -> std::io::Result<()>) -> String {
        let mut out = Vec::new();
        write(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn chain() -> Graph {
        Graph::from_edge_list(3, &[Edge::new(1, 2), Edge::new(2, 3)], Undirected).unwrap()
    }

    #[test]
    fn test_adjacency_matrix_layout() {
        let text = rendered(|out| write_adjacency_matrix(&chain(), out));
        assert_eq!(
            text,
            "\t1\t2\t3\t\n\
             1\t0\t1\t0\t\n\
             2\t1\t0\t1\t\n\
             3\t0\t1\t0\t\n"
        );
    }

    #[test]
    fn test_adjacency_list_layout() {
        let text = rendered(|out| write_adjacency_list(&chain(), out));
        assert_eq!(text, "1 | 2 \n2 | 1 3 \n3 | 2 \n");
    }

    #[test]
    fn test_edge_list_layout() {
        let text = rendered(|out| write_edge_list(&chain(), out));
        assert_eq!(text, "1 2\n2 3\n");
    }

    #[test]
    fn test_incidence_layout_directed() {
        let graph =
            Graph::from_edge_list(3, &[Edge::new(1, 2), Edge::new(3, 2)], Directed).unwrap();
        let text = rendered(|out| write_incidence_matrix(&graph, out));
        assert_eq!(
            text,
            "\t1\t2\t\n\
             1\t-1\t0\t\n\
             2\t1\t1\t\n\
             3\t0\t-1\t\n"
        );
    }

    #[test]
    fn test_traversal_report() {
        let graph =
            Graph::from_edge_list(4, &[Edge::new(1, 2), Edge::new(3, 4)], Undirected).unwrap();
        let text = rendered(|out| write_traversal(&graph, TraversalKind::Bfs, out));
        assert_eq!(
            text,
            "component #1:\nvertex #1\nvertex #2\n-------------------------\n\
             component #2:\nvertex #3\nvertex #4\n-------------------------\n"
        );
    }

    #[test]
    fn test_degree_report_both_directednesses() {
        let undirected = rendered(|out| write_degrees(&chain(), out));
        assert_eq!(undirected, "1 : degree = 1\n2 : degree = 2\n3 : degree = 1\n");

        let graph = Graph::from_edge_list(2, &[Edge::new(1, 2)], Directed).unwrap();
        let directed = rendered(|out| write_degrees(&graph, out));
        assert_eq!(directed, "1 : out = 1, in = 0\n2 : out = 0, in = 1\n");
    }

    #[test]
    fn test_edge_count_report_wording() {
        assert_eq!(rendered(|out| write_edge_count(&chain(), out)), "edges = 2\n");
        let graph = Graph::from_edge_list(2, &[Edge::new(1, 2)], Directed).unwrap();
        assert_eq!(rendered(|out| write_edge_count(&graph, out)), "arcs = 1\n");
    }
}
