//! Serializes a [`NormalizedGraph`] as plain text, one `u v` line per edge
//! with the smaller endpoint first, in sorted order.

use std::io::Write;

use crate::{
    error::ConvertError,
    graph::{Edge, NormalizedGraph},
};

/// Writes the bare edge list.
pub fn write_plain<W: Write>(graph: &NormalizedGraph, mut writer: W) -> Result<(), ConvertError> {
    write_edges(graph, &mut writer)
}

/// Writes a `N M` count line followed by the edge list. The counts are the
/// post-normalization ones, not whatever the input file declared.
pub fn write_with_header<W: Write>(
    graph: &NormalizedGraph,
    mut writer: W,
) -> Result<(), ConvertError> {
    writeln!(
        writer,
        "{} {}",
        graph.number_of_nodes(),
        graph.number_of_edges()
    )?;
    write_edges(graph, &mut writer)
}

fn write_edges<W: Write>(graph: &NormalizedGraph, writer: &mut W) -> Result<(), ConvertError> {
    for &Edge(u, v) in graph.edges() {
        writeln!(writer, "{u} {v}")?;
    }
    Ok(())
}
