use std::io;

use thiserror::Error;

/// Errors produced while loading or rendering graphs.
///
/// Failures never leave a partially constructed [`Graph`](crate::Graph)
/// behind: loading is all-or-nothing, and a failed write only aborts the
/// single operation that owned the sink.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum GraphError {
    /// An underlying read or write failed, including failure to open an
    /// input or output file.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),

    /// The leading format-code token named none of the four supported
    /// encodings.
    #[error("unknown graph format code {0}")]
    UnknownFormat(usize),

    /// A header field (directedness flag, vertex count, edge count) was
    /// missing or not a valid integer.
    #[error("invalid header field {field}: {value:?}")]
    InvalidHeader {
        field: &'static str,
        value: String,
    },

    /// A body token could not be parsed as the expected integer.
    #[error("invalid value for {what}: {token:?}")]
    InvalidToken {
        what: &'static str,
        token: String,
    },

    /// The input ended before the declared amount of data was read.
    #[error("input ended while reading {0}")]
    TruncatedInput(&'static str),

    /// A 1-based vertex reference exceeded the declared vertex count.
    #[error("vertex {vertex} out of range for graph of order {order}")]
    VertexOutOfRange {
        vertex: usize,
        order: usize,
    },
}
