//! Parsers for the four input encodings.
//!
//! Every encoding starts with a `<directed:0|1> <V> <E>` header.  The
//! adjacency matrix, edge list, and incidence matrix bodies are plain
//! whitespace-separated token streams (line breaks carry no meaning);
//! the adjacency list body is line-oriented, one vertex per line, where
//! a blank line means an isolated vertex.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;
use std::str::FromStr;

use crate::directedness::Directedness;
use crate::edge::Edge;
use crate::error::GraphError;
use crate::graph::Graph;
use crate::io::FormatCode;
use crate::matrix::AdjacencyMatrix;
use crate::repr::{AdjacencyList, IncidenceMatrix};
use crate::tracing_support::debug_event;

/// The `<directed:0|1> <V> <E>` line that leads every encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Header {
    pub directedness: Directedness,
    pub vertices: usize,
    pub edges: usize,
}

/// Whitespace-token reader over buffered lines.
///
/// Tokens are drawn across line boundaries; [`next_raw_line`] drops any
/// tokens left on the current line and switches to whole-line reading,
/// which the adjacency-list body needs.
///
/// [`next_raw_line`]: TokenReader::next_raw_line
struct TokenReader<R> {
    lines: Lines<R>,
    buffer: Vec<String>,
}

impl<R: BufRead> TokenReader<R> {
    fn new(reader: R) -> Self {
        TokenReader {
            lines: reader.lines(),
            buffer: Vec::new(),
        }
    }

    fn next_token(&mut self) -> Result<Option<String>, GraphError> {
        loop {
            if !self.buffer.is_empty() {
                return Ok(Some(self.buffer.remove(0)));
            }
            match self.lines.next() {
                None => return Ok(None),
                Some(line) => {
                    self.buffer
                        .extend(line?.split_whitespace().map(String::from));
                }
            }
        }
    }

    /// Parses the next token as `T`, failing with [`GraphError::InvalidToken`]
    /// on a malformed token and [`GraphError::TruncatedInput`] at end of
    /// input.
    fn expect<T: FromStr>(&mut self, what: &'static str) -> Result<T, GraphError> {
        let token = self
            .next_token()?
            .ok_or(GraphError::TruncatedInput(what))?;
        token
            .parse()
            .map_err(|_| GraphError::InvalidToken { what, token })
    }

    /// Discards the remainder of the current line and returns the next
    /// full line, or `None` at end of input.
    fn next_raw_line(&mut self) -> Result<Option<String>, GraphError> {
        self.buffer.clear();
        match self.lines.next() {
            None => Ok(None),
            Some(line) => Ok(Some(line?)),
        }
    }
}

fn header_field<T: FromStr>(
    tokens: &mut TokenReader<impl BufRead>,
    field: &'static str,
) -> Result<T, GraphError> {
    let token = tokens
        .next_token()?
        .ok_or(GraphError::TruncatedInput(field))?;
    token
        .parse()
        .map_err(|_| GraphError::InvalidHeader { field, value: token })
}

fn read_header(tokens: &mut TokenReader<impl BufRead>) -> Result<Header, GraphError> {
    let flag: u64 = header_field(tokens, "directedness flag")?;
    let directedness =
        Directedness::from_flag(flag).ok_or(GraphError::InvalidHeader {
            field: "directedness flag",
            value: flag.to_string(),
        })?;
    let vertices = header_field(tokens, "vertex count")?;
    let edges = header_field(tokens, "edge count")?;
    Ok(Header {
        directedness,
        vertices,
        edges,
    })
}

/// Reads a graph whose first token is the format code.
pub fn read_graph<R: BufRead>(reader: R) -> Result<Graph, GraphError> {
    let mut tokens = TokenReader::new(reader);
    let code: usize = tokens.expect("format code")?;
    read_body(&mut tokens, FormatCode::from_code(code)?)
}

/// Reads a graph body (header included) in an already-known format.
pub fn read_graph_with_format<R: BufRead>(
    reader: R,
    format: FormatCode,
) -> Result<Graph, GraphError> {
    read_body(&mut TokenReader::new(reader), format)
}

/// Opens and reads a graph file; the file's leading token is the format
/// code.  A failed open fails the whole load.
pub fn read_graph_file<P: AsRef<Path>>(path: P) -> Result<Graph, GraphError> {
    read_graph(BufReader::new(File::open(path)?))
}

fn read_body(
    tokens: &mut TokenReader<impl BufRead>,
    format: FormatCode,
) -> Result<Graph, GraphError> {
    let header = read_header(tokens)?;
    let graph = match format {
        FormatCode::AdjacencyMatrix => read_adjacency_matrix(tokens, &header)?,
        FormatCode::AdjacencyList => read_adjacency_list(tokens, &header)?,
        FormatCode::EdgeList => read_edge_list(tokens, &header)?,
        FormatCode::IncidenceMatrix => read_incidence(tokens, &header)?,
    };
    debug_event!(
        format = format.code(),
        vertices = graph.num_vertices(),
        edges = graph.num_edges(),
        directed = graph.is_directed(),
        "graph loaded"
    );
    Ok(graph)
}

/// V rows of V integers; any nonzero cell is an edge.
fn read_adjacency_matrix(
    tokens: &mut TokenReader<impl BufRead>,
    header: &Header,
) -> Result<Graph, GraphError> {
    let mut matrix = AdjacencyMatrix::with_order(header.vertices);
    for row in 0..header.vertices {
        for col in 0..header.vertices {
            let cell: i64 = tokens.expect("adjacency matrix cell")?;
            if cell != 0 {
                matrix.set(row, col, true);
            }
        }
    }
    Ok(Graph::from_matrix(matrix, header.edges, header.directedness))
}

/// V lines of 1-based neighbor indices; a blank line is an isolated
/// vertex.  For undirected input the reverse edge is added for every
/// listed neighbor, so the derived matrix comes out symmetric even when
/// the input lists each edge once.
fn read_adjacency_list(
    tokens: &mut TokenReader<impl BufRead>,
    header: &Header,
) -> Result<Graph, GraphError> {
    let mut list: AdjacencyList = vec![Vec::new(); header.vertices];
    for vertex in 0..header.vertices {
        let Some(line) = tokens.next_raw_line()? else {
            // Missing trailing lines read as isolated vertices.
            break;
        };
        for token in line.split_whitespace() {
            let neighbor: usize = token.parse().map_err(|_| GraphError::InvalidToken {
                what: "adjacency list neighbor",
                token: token.to_string(),
            })?;
            if neighbor == 0 || neighbor > header.vertices {
                return Err(GraphError::VertexOutOfRange {
                    vertex: neighbor,
                    order: header.vertices,
                });
            }
            list[vertex].push(neighbor - 1);
            if !header.directedness.is_directed() {
                list[neighbor - 1].push(vertex);
            }
        }
    }
    Graph::from_adjacency_list(&list, header.edges, header.directedness)
}

/// E lines of `<from> <to>`, 1-based.
fn read_edge_list(
    tokens: &mut TokenReader<impl BufRead>,
    header: &Header,
) -> Result<Graph, GraphError> {
    let mut edges = Vec::with_capacity(header.edges);
    for _ in 0..header.edges {
        let from = tokens.expect("edge source")?;
        let to = tokens.expect("edge target")?;
        edges.push(Edge::new(from, to));
    }
    Graph::from_edge_list(header.vertices, &edges, header.directedness)
}

/// V rows of E integers; directed cells must be -1, 0, or 1, undirected
/// cells 0 or 1.
fn read_incidence(
    tokens: &mut TokenReader<impl BufRead>,
    header: &Header,
) -> Result<Graph, GraphError> {
    let mut incidence = IncidenceMatrix::zeroed(header.vertices, header.edges);
    for vertex in 0..header.vertices {
        for column in 0..header.edges {
            let cell: i64 = tokens.expect("incidence matrix cell")?;
            let valid = match header.directedness {
                Directedness::Directed => (-1..=1).contains(&cell),
                Directedness::Undirected => (0..=1).contains(&cell),
            };
            if !valid {
                return Err(GraphError::InvalidToken {
                    what: "incidence matrix cell",
                    token: cell.to_string(),
                });
            }
            incidence.set(vertex, column, cell as i8);
        }
    }
    Ok(Graph::from_incidence(&incidence, header.directedness))
}
