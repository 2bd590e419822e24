use crate::core::scoring::connection_strength;
use crate::models::{ConnectionWeights, StudentId, StudentRegistry};
use std::fmt;

/// Weighted link to a neighbouring student
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub neighbor: StudentId,
    /// Connection strength, always >= 1
    pub weight: u32,
}

/// Undirected weighted graph over every student in a registry
///
/// A snapshot: it is derived from the registry at build time and has to be
/// rebuilt after roommates change for the roommate bonus to show up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SocialGraph {
    adjacency: Vec<Vec<Edge>>,
}

impl SocialGraph {
    fn with_nodes(count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); count],
        }
    }

    fn add_edge(&mut self, a: StudentId, b: StudentId, weight: u32) {
        self.adjacency[a.index()].push(Edge { neighbor: b, weight });
        self.adjacency[b.index()].push(Edge { neighbor: a, weight });
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    pub fn nodes(&self) -> impl Iterator<Item = StudentId> + '_ {
        (0..self.adjacency.len()).map(StudentId)
    }

    /// Incident edges of a student; empty for ids outside the graph
    pub fn neighbors(&self, id: StudentId) -> &[Edge] {
        self.adjacency
            .get(id.index())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn weight(&self, a: StudentId, b: StudentId) -> Option<u32> {
        self.neighbors(a)
            .iter()
            .find(|edge| edge.neighbor == b)
            .map(|edge| edge.weight)
    }

    /// Every undirected edge once, as (lower id, higher id, weight)
    pub fn edges(&self) -> Vec<(StudentId, StudentId, u32)> {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(index, edges)| {
                edges
                    .iter()
                    .filter(move |edge| index < edge.neighbor.index())
                    .map(move |edge| (StudentId(index), edge.neighbor, edge.weight))
            })
            .collect()
    }

    /// Render adjacency lists with student names
    pub fn display<'a>(&'a self, registry: &'a StudentRegistry) -> GraphDisplay<'a> {
        GraphDisplay { graph: self, registry }
    }
}

pub struct GraphDisplay<'a> {
    graph: &'a SocialGraph,
    registry: &'a StudentRegistry,
}

impl fmt::Display for GraphDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for id in self.graph.nodes() {
            write!(f, "{} ->", self.registry.student(id).name)?;
            for edge in self.graph.neighbors(id) {
                write!(f, " ({}, {})", self.registry.student(edge.neighbor).name, edge.weight)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Build the social graph by scoring every unordered pair of students
///
/// Pairs scoring zero get no edge. Every student gets an entry, even
/// without neighbours.
pub fn build_graph(registry: &StudentRegistry, weights: &ConnectionWeights) -> SocialGraph {
    let mut graph = SocialGraph::with_nodes(registry.len());

    for a in registry.ids() {
        for b in registry.ids().skip(a.index() + 1) {
            let weight = connection_strength(registry, a, b, weights);
            if weight > 0 {
                graph.add_edge(a, b, weight);
            }
        }
    }

    tracing::debug!(
        "Built social graph with {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    graph
}
