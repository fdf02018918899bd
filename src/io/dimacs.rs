//! Reader for DIMACS clique/coloring files: line-oriented text with `c`
//! comment lines, a `p <problem> V E` header line and `e u v` edge lines.

use std::{io::BufRead, str::FromStr};

use itertools::Itertools;
use tracing::warn;

use crate::{
    error::ConvertError,
    graph::{NumEdges, NumNodes, RawGraph},
};

/// Counts declared on the `p` line, kept as provenance only. The writer
/// always emits the post-normalization counts, so these never constrain or
/// validate the parsed edge set.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DimacsHeader {
    pub declared_nodes: Option<NumNodes>,
    pub declared_edges: Option<NumEdges>,
}

/// Parses an entire DIMACS file into a [`RawGraph`].
///
/// Vertex identifiers are taken as they appear in the `e` lines; they need
/// not be contiguous nor fall within the declared vertex count. Any line
/// that is neither blank nor a `c`/`p`/`e` line of the expected shape
/// rejects the whole file — no partial graph is ever returned.
pub fn read_dimacs<R: BufRead>(reader: R) -> Result<(RawGraph, DimacsHeader), ConvertError> {
    let mut graph = RawGraph::new();
    let mut header = DimacsHeader::default();

    for line in reader.lines() {
        let line = line?;
        let mut tokens = line.split_whitespace();

        match tokens.next() {
            None | Some("c") => continue,
            Some("p") => {
                let (_problem, nodes, edges): (&str, &str, &str) = tokens
                    .collect_tuple()
                    .ok_or_else(|| format_error("expected `p <problem> V E`", &line))?;

                header.declared_nodes = Some(parse_field(nodes, &line)?);
                header.declared_edges = Some(parse_field(edges, &line)?);
            }
            Some("e") => {
                let (u, v): (&str, &str) = tokens
                    .collect_tuple()
                    .ok_or_else(|| format_error("expected `e <u> <v>`", &line))?;

                graph.add_edge(parse_field(u, &line)?, parse_field(v, &line)?);
            }
            Some(token) => {
                return Err(format_error(
                    &format!("unknown line token {token:?}"),
                    &line,
                ));
            }
        }
    }

    if let Some(declared) = header.declared_edges {
        if declared != graph.number_of_edges() {
            warn!(
                declared,
                actual = graph.number_of_edges(),
                "edge count on p line does not match parsed edges"
            );
        }
    }

    Ok((graph, header))
}

fn parse_field<T: FromStr>(token: &str, line: &str) -> Result<T, ConvertError> {
    token
        .parse()
        .map_err(|_| format_error(&format!("invalid integer {token:?}"), line))
}

fn format_error(reason: &str, line: &str) -> ConvertError {
    ConvertError::Format(format!("{reason} in line {line:?}"))
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::graph::Edge;

    fn read(input: &str) -> Result<(RawGraph, DimacsHeader), ConvertError> {
        read_dimacs(input.as_bytes())
    }

    #[test]
    fn parses_edges_and_header() {
        let (graph, header) = read("c demo\np edge 4 3\ne 1 2\n\ne 2 3\ne 1 1\n").unwrap();

        assert_eq!(header.declared_nodes, Some(4));
        assert_eq!(header.declared_edges, Some(3));
        assert_eq!(graph.number_of_edges(), 3);

        let normalized = graph.normalize();
        assert_eq!(normalized.number_of_nodes(), 3);
        assert_eq!(normalized.edges(), [Edge(0, 1), Edge(1, 2)]);
    }

    #[test]
    fn header_is_optional_metadata() {
        let (graph, header) = read("e 7 9\n").unwrap();

        assert_eq!(header, DimacsHeader::default());
        assert_eq!(graph.number_of_edges(), 1);
    }

    #[test]
    fn identifiers_beyond_declared_bound_are_accepted() {
        let (graph, _) = read("p edge 2 1\ne 100 200\n").unwrap();

        let normalized = graph.normalize();
        assert_eq!(normalized.number_of_nodes(), 2);
        assert_eq!(normalized.edges(), [Edge(0, 1)]);
    }

    #[test]
    fn duplicate_edge_lines_collapse() {
        let (graph, _) = read("e 1 2\ne 2 1\ne 1 2\n").unwrap();

        assert_eq!(graph.number_of_edges(), 1);
    }

    #[test]
    fn tolerates_extra_whitespace() {
        let (graph, header) = read("p  edge  3   2 \n e  1   2\ne 2 3\n").unwrap();

        assert_eq!(header.declared_nodes, Some(3));
        assert_eq!(graph.number_of_edges(), 2);
    }

    #[test]
    fn rejects_unknown_token() {
        assert!(matches!(
            read("e 1 2\nn 1 5\n"),
            Err(ConvertError::Format(_))
        ));
    }

    #[test]
    fn rejects_wrong_arity() {
        assert!(matches!(read("e 1\n"), Err(ConvertError::Format(_))));
        assert!(matches!(read("e 1 2 3\n"), Err(ConvertError::Format(_))));
        assert!(matches!(read("p edge 4\n"), Err(ConvertError::Format(_))));
    }

    #[test]
    fn rejects_non_integer_fields() {
        assert!(matches!(read("e 1 x\n"), Err(ConvertError::Format(_))));
        assert!(matches!(
            read("p edge four 3\n"),
            Err(ConvertError::Format(_))
        ));
    }
}
