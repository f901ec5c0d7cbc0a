//! End-to-end checks of the text encodings: the same graph loaded from
//! all four formats, rendered output layouts, and the documented
//! lenient/strict edges of the parsers.

use graphforms::io::read::{read_graph, read_graph_file};
use graphforms::io::write::{
    write_adjacency_list, write_adjacency_matrix, write_edge_count, write_edge_list,
    write_incidence_matrix,
};
use graphforms::{Directedness, GraphError};

fn rendered(write: impl Fn(&mut Vec<u8>) -> std::io::Result<()>) -> String {
    let mut out = Vec::new();
    write(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

/// The same undirected triangle-with-tail in all four encodings:
/// edges (1,2), (1,3), (2,3), (3,4).
const AS_MATRIX: &str = "0\n0 4 4\n0 1 1 0\n1 0 1 0\n1 1 0 1\n0 0 1 0\n";
const AS_LIST: &str = "1\n0 4 4\n2 3\n3\n4\n\n";
const AS_EDGES: &str = "2\n0 4 4\n1 2\n1 3\n2 3\n3 4\n";
const AS_INCIDENCE: &str = "3\n0 4 4\n1 1 0 0\n1 0 1 0\n0 1 1 1\n0 0 0 1\n";

#[test]
fn test_all_formats_load_the_same_graph() {
    let from_matrix = read_graph(AS_MATRIX.as_bytes()).unwrap();
    for input in [AS_LIST, AS_EDGES, AS_INCIDENCE] {
        let graph = read_graph(input.as_bytes()).unwrap();
        assert_eq!(graph.matrix(), from_matrix.matrix());
        assert_eq!(graph.num_edges(), 4);
        assert!(!graph.is_directed());
    }
}

#[test]
fn test_loaded_graph_renders_every_representation() {
    let graph = read_graph(AS_EDGES.as_bytes()).unwrap();
    assert_eq!(
        rendered(|out| write_adjacency_matrix(&graph, out)),
        "\t1\t2\t3\t4\t\n\
         1\t0\t1\t1\t0\t\n\
         2\t1\t0\t1\t0\t\n\
         3\t1\t1\t0\t1\t\n\
         4\t0\t0\t1\t0\t\n"
    );
    assert_eq!(
        rendered(|out| write_adjacency_list(&graph, out)),
        "1 | 2 3 \n2 | 1 3 \n3 | 1 2 4 \n4 | 3 \n"
    );
    assert_eq!(
        rendered(|out| write_edge_list(&graph, out)),
        "1 2\n1 3\n2 3\n3 4\n"
    );
    assert_eq!(
        rendered(|out| write_incidence_matrix(&graph, out)),
        "\t1\t2\t3\t4\t\n\
         1\t1\t1\t0\t0\t\n\
         2\t1\t0\t1\t0\t\n\
         3\t0\t1\t1\t1\t\n\
         4\t0\t0\t0\t1\t\n"
    );
    assert_eq!(rendered(|out| write_edge_count(&graph, out)), "edges = 4\n");
}

#[test]
fn test_directed_incidence_round_trips_through_text() {
    let graph = read_graph("2\n1 3 3\n1 2\n3 1\n3 2\n".as_bytes()).unwrap();
    let incidence_text = rendered(|out| write_incidence_matrix(&graph, out));
    let reloaded = read_graph(format!("3\n1 3 3\n{}", strip_labels(&incidence_text)).as_bytes())
        .unwrap();
    assert_eq!(reloaded.matrix(), graph.matrix());
}

/// Drops the 1-based row/column labels the writer adds, leaving the raw
/// cell grid a reader accepts.
fn strip_labels(text: &str) -> String {
    text.lines()
        .skip(1)
        .map(|line| {
            line.split('\t')
                .skip(1)
                .filter(|cell| !cell.is_empty())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_incidence_column_with_single_entry_is_dropped() {
    // Column 2 names only one endpoint; it contributes no edge and no
    // error.  The declared edge count still reports 2.
    let graph = read_graph("3\n0 3 2\n1 0\n1 0\n0 1\n".as_bytes()).unwrap();
    assert!(graph.matrix().get(0, 1));
    assert!(graph.matrix().get(1, 0));
    assert_eq!(graph.matrix().count_edges(Directedness::Undirected), 1);
    assert_eq!(graph.num_edges(), 2);
}

#[test]
fn test_unknown_format_code_fails_the_load() {
    assert!(matches!(
        read_graph("9\n0 2 1\n1 2\n".as_bytes()),
        Err(GraphError::UnknownFormat(9))
    ));
}

#[test]
fn test_missing_input_file_fails_the_load() {
    assert!(matches!(
        read_graph_file("definitely/not/a/real/input.txt"),
        Err(GraphError::Io(_))
    ));
}

#[test]
fn test_directed_edge_list_keeps_orientation() {
    let graph = read_graph("2\n1 2 1\n2 1\n".as_bytes()).unwrap();
    assert!(graph.matrix().get(1, 0));
    assert!(!graph.matrix().get(0, 1));
    assert_eq!(rendered(|out| write_edge_count(&graph, out)), "arcs = 1\n");
}
