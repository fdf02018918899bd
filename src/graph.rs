use std::collections::HashSet;

use itertools::Itertools;

pub type Node = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge(pub Node, pub Node);

impl Edge {
    pub fn new(u: Node, v: Node) -> Self {
        Self(u, v)
    }

    /// Returns the edge with the smaller endpoint first.
    pub fn normalized(&self) -> Self {
        if self.0 < self.1 {
            *self
        } else {
            Self(self.1, self.0)
        }
    }

    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }
}

pub type NumNodes = Node;
pub type NumEdges = u64;

/// An undirected graph as parsed from an input file: vertex identifiers are
/// whatever integers the source used (not necessarily contiguous or
/// zero-based) and self-loops are permitted.
///
/// Edges are stored orientation-normalized in a set, so parallel edges and
/// reversed duplicates collapse on insertion.
#[derive(Debug, Default, Clone)]
pub struct RawGraph {
    edges: HashSet<Edge>,
}

impl RawGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_edge(&mut self, u: Node, v: Node) {
        self.edges.insert(Edge(u, v).normalized());
    }

    pub fn number_of_edges(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }

    /// Canonicalizes the graph: drops self-loops and relabels the vertices to
    /// `[0, n)` such that the i-th smallest original identifier becomes `i`.
    ///
    /// The vertex set is the union of all edge endpoints, self-loops
    /// included; a vertex incident only to a loop survives as an isolated
    /// vertex. The result depends solely on the edge set, never on insertion
    /// or iteration order.
    pub fn normalize(self) -> NormalizedGraph {
        let nodes: Vec<Node> = self
            .edges
            .iter()
            .flat_map(|&Edge(u, v)| [u, v])
            .sorted_unstable()
            .dedup()
            .collect();

        let relabel = |u: Node| {
            nodes
                .binary_search(&u)
                .expect("every endpoint was collected above") as Node
        };

        let edges: Vec<Edge> = self
            .edges
            .iter()
            .filter(|e| !e.is_loop())
            .map(|&Edge(u, v)| Edge(relabel(u), relabel(v)).normalized())
            .sorted_unstable()
            .collect();

        NormalizedGraph {
            number_of_nodes: nodes.len() as NumNodes,
            edges,
        }
    }
}

/// A simple undirected graph with dense zero-based vertex labels, no
/// self-loops and no duplicate edges. Edges are sorted with the smaller
/// endpoint first. Only [`RawGraph::normalize`] constructs these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedGraph {
    number_of_nodes: NumNodes,
    edges: Vec<Edge>,
}

impl NormalizedGraph {
    pub fn number_of_nodes(&self) -> NumNodes {
        self.number_of_nodes
    }

    pub fn number_of_edges(&self) -> NumEdges {
        self.edges.len() as NumEdges
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }
}
