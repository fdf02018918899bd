//! Batch conversion of graph files into a normalized edge-list format.
//!
//! Two input families are supported: Matrix Market sparse adjacency matrices
//! (`.mtx`) and DIMACS clique/coloring files (`.clq`, `.col`, `.txt`,
//! `.dimacs`). Every input is parsed into a [`graph::RawGraph`], canonicalized
//! by [`graph::RawGraph::normalize`] (self-loops removed, multi-edges
//! collapsed, vertices relabeled to a dense zero-based range) and written back
//! out as a plain edge list, with a `N M` count header on the DIMACS path.

pub mod driver;
pub mod error;
pub mod graph;
pub mod io;
