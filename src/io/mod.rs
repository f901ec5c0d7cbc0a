//! Reading and writing the four text encodings.
//!
//! Input is line/token-oriented text: a leading format-code token
//! selects the encoding, a `<directed:0|1> <V> <E>` header follows, then
//! the body of the chosen format ([`read`]).  Output renders any derived
//! representation, traversal report, or metric to a caller-supplied
//! `io::Write` sink, opened and closed per operation ([`write`]).

pub mod read;
pub mod write;

use std::str::FromStr;

use crate::error::GraphError;

pub use read::{Header, read_graph, read_graph_file, read_graph_with_format};

/// Identifier for one of the supported text encodings.
///
/// The numeric values are the on-the-wire format codes that lead every
/// input.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FormatCode {
    AdjacencyMatrix = 0,
    AdjacencyList = 1,
    EdgeList = 2,
    IncidenceMatrix = 3,
}

impl FormatCode {
    /// Maps a wire code to the encoding it selects.
    pub fn from_code(code: usize) -> Result<Self, GraphError> {
        match code {
            0 => Ok(FormatCode::AdjacencyMatrix),
            1 => Ok(FormatCode::AdjacencyList),
            2 => Ok(FormatCode::EdgeList),
            3 => Ok(FormatCode::IncidenceMatrix),
            other => Err(GraphError::UnknownFormat(other)),
        }
    }

    pub fn code(self) -> usize {
        self as usize
    }
}

impl FromStr for FormatCode {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, GraphError> {
        let code = s.parse().map_err(|_| GraphError::InvalidToken {
            what: "format code",
            token: s.to_string(),
        })?;
        FormatCode::from_code(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_code_round_trip() {
        for code in 0..4 {
            assert_eq!(FormatCode::from_code(code).unwrap().code(), code);
        }
    }

    #[test]
    fn test_unknown_code_is_rejected() {
        assert!(matches!(
            FormatCode::from_code(4),
            Err(GraphError::UnknownFormat(4))
        ));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("2".parse::<FormatCode>().unwrap(), FormatCode::EdgeList);
        assert!("edges".parse::<FormatCode>().is_err());
    }
}
