use crate::core::graph::SocialGraph;
use crate::models::{StudentId, StudentRegistry};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Pending node in the search frontier
#[derive(Debug, Clone, Copy)]
struct Frontier {
    cost: f64,
    id: StudentId,
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Frontier {
    // Reversed so the max-heap pops the cheapest entry; equal costs pop the lower id first
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.id.cmp(&self.id))
    }
}

/// Traversal cost of an edge: stronger connections are cheaper
#[inline]
fn edge_cost(weight: u32) -> f64 {
    1.0 / weight as f64
}

/// Find the cheapest chain of students from `start` to anyone who interned at
/// `target_company` (case-insensitive)
///
/// Runs Dijkstra over the graph with an edge cost of `1 / weight` and stops at
/// the first target-bearing student popped from the frontier. Returns the path
/// start-first, `[start]` when the start student already qualifies, or an
/// empty vector when nobody reachable does. A graph that was not built from
/// `registry` (different node count) also yields an empty vector.
pub fn find_referral_path(
    graph: &SocialGraph,
    registry: &StudentRegistry,
    start: StudentId,
    target_company: &str,
) -> Vec<StudentId> {
    let node_count = graph.node_count();
    if node_count != registry.len() {
        tracing::debug!(
            "Graph with {} nodes does not match registry of {} students",
            node_count,
            registry.len()
        );
        return Vec::new();
    }
    if start.index() >= node_count {
        return Vec::new();
    }

    let mut distance = vec![f64::INFINITY; node_count];
    let mut previous: Vec<Option<StudentId>> = vec![None; node_count];
    let mut visited = vec![false; node_count];
    let mut frontier = BinaryHeap::new();

    distance[start.index()] = 0.0;
    frontier.push(Frontier { cost: 0.0, id: start });

    while let Some(Frontier { cost, id }) = frontier.pop() {
        if visited[id.index()] {
            continue;
        }
        visited[id.index()] = true;

        if registry.student(id).has_worked_at(target_company) {
            let path = reconstruct_path(&previous, id);
            tracing::debug!(
                "Referral path to {} found via {} hops (cost {:.3})",
                target_company,
                path.len() - 1,
                cost
            );
            return path;
        }

        for edge in graph.neighbors(id) {
            let next = edge.neighbor;
            if visited[next.index()] {
                continue;
            }

            let candidate = cost + edge_cost(edge.weight);
            if candidate < distance[next.index()] {
                distance[next.index()] = candidate;
                previous[next.index()] = Some(id);
                frontier.push(Frontier {
                    cost: candidate,
                    id: next,
                });
            }
        }
    }

    tracing::debug!(
        "No student reachable from {} has interned at {}",
        registry.student(start).name,
        target_company
    );

    Vec::new()
}

fn reconstruct_path(previous: &[Option<StudentId>], target: StudentId) -> Vec<StudentId> {
    let mut path = vec![target];
    let mut current = target;
    while let Some(prev) = previous[current.index()] {
        path.push(prev);
        current = prev;
    }
    path.reverse();
    path
}
