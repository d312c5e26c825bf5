use crate::collections::FxIndexSet;
use crate::errors::RouteError;
use crate::graph::Graph;
use super::check_endpoints;

use std::{collections::BinaryHeap, cmp::Ordering, fmt::Debug};
use num_traits::Zero;




/// Frontier entry for the cost-ordered search
/// Unlike plain Dijkstra each entry carries its own stop counter and visited set,
/// since a single global best-distance array cannot express the stop bound
#[derive(Debug)]
struct Frontier<C> {
    cost: C, // Accumulated cost from the source
    node: usize,
    stops: usize, // Edges taken so far
    visited: FxIndexSet<usize>, // Nodes on this branch's path, in path order
}

impl<C: Ord> Ord for Frontier<C> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Binary heap sorts biggest to smallest, so reverse for cheapest-first
        // Ties fall back to node id then stop count to keep pop order deterministic
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
            .then_with(|| other.stops.cmp(&self.stops))
    }
}
impl<C: Ord> PartialOrd for Frontier<C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<C: Ord> PartialEq for Frontier<C> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl<C: Ord> Eq for Frontier<C> {}


/// Cheapest route cost from `src` to `dst` using at most `max_stops` intermediate stops
/// Cost-ordered best-first search: the first pop of the destination is final,
/// which holds only because edge costs are non-negative (enforced at graph construction)
/// Per-branch visited sets make the frontier exponential in the worst case -
/// this variant trades the layered DP's predictability for early termination
/// Returns Ok(None) when the destination cannot be reached within the stop budget
pub fn constrained_dijkstra<C>(graph: &Graph<C>, src: usize, dst: usize, max_stops: usize) -> Result<Option<C>, RouteError>
where
    C: Zero + Ord + Copy + Debug,
    {

    check_endpoints(graph.node_count(), src, dst)?;

    let max_edges = max_stops + 1;

    // Best known cost per node - a pruning table only, never the answer:
    // the answer is read exclusively at pop time so an entry that was enqueued
    // through the budget clause can never surface as a final cost
    let mut best_cost: Vec<Option<C>> = vec![None; graph.node_count()];
    best_cost[src] = Some(Zero::zero());

    let mut frontier: BinaryHeap<Frontier<C>> = BinaryHeap::new();
    let mut start_visited = FxIndexSet::default();
    start_visited.insert(src);
    frontier.push(Frontier {
        cost: Zero::zero(),
        node: src,
        stops: 0,
        visited: start_visited,
    });

    while let Some(Frontier { cost, node, stops, visited }) = frontier.pop() {

        // First pop of the destination is the cheapest route -
        // no later pop can carry a lower cost
        if node == dst {
            return Ok(Some(cost));
        }

        // Every neighbor of this entry would overrun the edge budget
        if stops + 1 > max_edges {
            continue;
        }

        for &(neighbor, edge_cost) in graph.neighbors(node) {
            // A branch never revisits its own path
            if visited.contains(&neighbor) {
                continue;
            }

            let next_cost = cost + edge_cost;
            let improves = best_cost[neighbor].is_none_or(|c| next_cost < c);

            // Enqueue when the cost improves, or when enough budget remains that a
            // costlier branch may still reach the destination in fewer hops later
            if improves || stops + 1 < max_edges {
                if improves {
                    best_cost[neighbor] = Some(next_cost);
                }

                let mut next_visited = visited.clone();
                next_visited.insert(neighbor);
                frontier.push(Frontier {
                    cost: next_cost,
                    node: neighbor,
                    stops: stops + 1,
                    visited: next_visited,
                });
            }
        }
    }

    // Frontier emptied without the destination ever being popped
    Ok(None)
}
