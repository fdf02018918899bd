//! Reader for Matrix Market sparse coordinate files interpreted as
//! adjacency matrices: any stored nonzero entry (i, j) contributes the
//! undirected edge {i-1, j-1}, magnitudes are discarded.

use std::io::BufRead;

use crate::{
    error::ConvertError,
    graph::{Node, RawGraph},
};

/// Value field of the coordinate format. Dictates how many value tokens
/// follow the two indices on each entry line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Pattern,
    Integer,
    Real,
    Complex,
}

impl Field {
    fn value_tokens(self) -> usize {
        match self {
            Field::Pattern => 0,
            Field::Integer | Field::Real => 1,
            Field::Complex => 2,
        }
    }
}

/// Parses a Matrix Market file into a [`RawGraph`].
///
/// The matrix must be square ([`ConvertError::Shape`] otherwise). Diagonal
/// entries become self-loops in the raw graph and are stripped by
/// normalization; their endpoint still counts as a referenced vertex.
pub fn read_matrix_market<R: BufRead>(reader: R) -> Result<RawGraph, ConvertError> {
    let mut lines = reader.lines();

    let banner = lines
        .next()
        .ok_or_else(|| parse_error("empty file"))??;
    let field = parse_banner(&banner)?;

    let size_line = loop {
        let line = lines
            .next()
            .ok_or_else(|| parse_error("no size line found"))??;
        if !line.trim().is_empty() && !line.starts_with('%') {
            break line;
        }
    };

    let (rows, cols, declared_entries) = parse_size_line(&size_line)?;
    if rows != cols {
        return Err(ConvertError::Shape { rows, cols });
    }

    let mut graph = RawGraph::new();
    let mut entries = 0u64;

    for line in lines {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let mut tokens = line.split_whitespace();
        let i = parse_index(tokens.next(), rows, &line)?;
        let j = parse_index(tokens.next(), cols, &line)?;

        let values: Vec<&str> = tokens.collect();
        if values.len() != field.value_tokens() {
            return Err(parse_error(format!(
                "expected {} value token(s) in entry {line:?}",
                field.value_tokens()
            )));
        }

        let mut nonzero = field == Field::Pattern;
        for value in values {
            let value: f64 = value
                .parse()
                .map_err(|_| parse_error(format!("invalid value {value:?} in entry {line:?}")))?;
            nonzero |= value != 0.0;
        }

        // explicitly stored zeros carry no structure
        if nonzero {
            graph.add_edge(i, j);
        }
        entries += 1;
    }

    if entries != declared_entries {
        return Err(parse_error(format!(
            "size line declares {declared_entries} entries, found {entries}"
        )));
    }

    Ok(graph)
}

/// `%%MatrixMarket matrix coordinate <field> <symmetry>`. Only the
/// coordinate storage format is supported; the symmetry token is accepted
/// as-is since the undirected interpretation makes general and symmetric
/// matrices equivalent here.
fn parse_banner(line: &str) -> Result<Field, ConvertError> {
    let mut tokens = line.split_whitespace().map(str::to_ascii_lowercase);

    if tokens.next().as_deref() != Some("%%matrixmarket") {
        return Err(parse_error("missing %%MatrixMarket banner"));
    }
    if tokens.next().as_deref() != Some("matrix") {
        return Err(parse_error("banner does not describe a matrix"));
    }
    match tokens.next().as_deref() {
        Some("coordinate") => {}
        other => {
            return Err(parse_error(format!(
                "unsupported storage format {other:?}, only coordinate is supported"
            )));
        }
    }

    match tokens.next().as_deref() {
        Some("pattern") => Ok(Field::Pattern),
        Some("integer") => Ok(Field::Integer),
        Some("real") => Ok(Field::Real),
        Some("complex") => Ok(Field::Complex),
        other => Err(parse_error(format!("unsupported value field {other:?}"))),
    }
}

fn parse_size_line(line: &str) -> Result<(u64, u64, u64), ConvertError> {
    let mut tokens = line.split_whitespace().map(|token| {
        token
            .parse::<u64>()
            .map_err(|_| parse_error(format!("invalid size line {line:?}")))
    });

    match (tokens.next(), tokens.next(), tokens.next(), tokens.next()) {
        (Some(rows), Some(cols), Some(entries), None) => Ok((rows?, cols?, entries?)),
        _ => Err(parse_error(format!("invalid size line {line:?}"))),
    }
}

/// Entry indices are 1-based in the file; returned 0-based.
fn parse_index(token: Option<&str>, bound: u64, line: &str) -> Result<Node, ConvertError> {
    let token = token.ok_or_else(|| parse_error(format!("truncated entry {line:?}")))?;
    let index: u64 = token
        .parse()
        .map_err(|_| parse_error(format!("invalid index {token:?} in entry {line:?}")))?;

    if index == 0 || index > bound {
        return Err(parse_error(format!(
            "index {index} out of bounds in entry {line:?}"
        )));
    }

    Ok((index - 1) as Node)
}

fn parse_error(msg: impl Into<String>) -> ConvertError {
    ConvertError::Parse(msg.into())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::graph::Edge;

    fn read(input: &str) -> Result<RawGraph, ConvertError> {
        read_matrix_market(input.as_bytes())
    }

    #[test]
    fn parses_symmetric_pattern_matrix() {
        let graph = read(
            "%%MatrixMarket matrix coordinate pattern symmetric\n\
             % adjacency of a path on three vertices\n\
             3 3 2\n\
             2 1\n\
             3 2\n",
        )
        .unwrap()
        .normalize();

        assert_eq!(graph.number_of_nodes(), 3);
        assert_eq!(graph.edges(), [Edge(0, 1), Edge(1, 2)]);
    }

    #[test]
    fn general_matrix_with_both_triangles_collapses() {
        let graph = read(
            "%%MatrixMarket matrix coordinate real general\n\
             3 3 4\n\
             1 2 1.5\n\
             2 1 1.5\n\
             2 3 -2.0\n\
             3 2 -2.0\n",
        )
        .unwrap()
        .normalize();

        assert_eq!(graph.number_of_nodes(), 3);
        assert_eq!(graph.edges(), [Edge(0, 1), Edge(1, 2)]);
    }

    #[test]
    fn diagonal_entries_become_loops_and_are_stripped() {
        let graph = read(
            "%%MatrixMarket matrix coordinate pattern general\n\
             2 2 2\n\
             1 1\n\
             1 2\n",
        )
        .unwrap()
        .normalize();

        assert_eq!(graph.number_of_nodes(), 2);
        assert_eq!(graph.edges(), [Edge(0, 1)]);
    }

    #[test]
    fn explicit_zero_entries_carry_no_edge() {
        let graph = read(
            "%%MatrixMarket matrix coordinate real symmetric\n\
             3 3 2\n\
             2 1 0.0\n\
             3 1 1.0\n",
        )
        .unwrap();

        assert_eq!(graph.number_of_edges(), 1);
    }

    #[test]
    fn non_square_matrix_is_rejected() {
        let err = read(
            "%%MatrixMarket matrix coordinate pattern general\n\
             3 4 1\n\
             1 2\n",
        )
        .unwrap_err();

        assert!(matches!(err, ConvertError::Shape { rows: 3, cols: 4 }));
    }

    #[test]
    fn rejects_missing_banner() {
        assert!(matches!(read("3 3 0\n"), Err(ConvertError::Parse(_))));
    }

    #[test]
    fn rejects_array_storage() {
        assert!(matches!(
            read("%%MatrixMarket matrix array real general\n"),
            Err(ConvertError::Parse(_))
        ));
    }

    #[test]
    fn rejects_truncated_entries() {
        let err = read(
            "%%MatrixMarket matrix coordinate pattern symmetric\n\
             3 3 2\n\
             2 1\n",
        )
        .unwrap_err();

        assert!(matches!(err, ConvertError::Parse(_)));
    }

    #[test]
    fn rejects_out_of_bounds_index() {
        assert!(matches!(
            read(
                "%%MatrixMarket matrix coordinate pattern general\n\
                 2 2 1\n\
                 1 5\n"
            ),
            Err(ConvertError::Parse(_))
        ));
    }

    #[test]
    fn rejects_wrong_value_arity() {
        assert!(matches!(
            read(
                "%%MatrixMarket matrix coordinate pattern general\n\
                 2 2 1\n\
                 1 2 1.0\n"
            ),
            Err(ConvertError::Parse(_))
        ));
    }
}
