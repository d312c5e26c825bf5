use crate::errors::RouteError;
use crate::graph::Graph;
use super::check_endpoints;

use std::fmt::Debug;
use num_traits::Zero;




/// Cheapest route cost from `src` to `dst` using at most `max_stops` intermediate stops
/// Dynamic programming over edge-count budgets: row `b` holds the cheapest cost
/// to reach each node using at most `b` edges, for `b` from 0 to `max_stops + 1`
/// Returns Ok(None) when the destination cannot be reached within the stop budget
pub fn layered_dp<C>(graph: &Graph<C>, src: usize, dst: usize, max_stops: usize) -> Result<Option<C>, RouteError>
where
    C: Zero + Ord + Copy + Debug,
    {

    check_endpoints(graph.node_count(), src, dst)?;

    let node_count = graph.node_count();

    // layers[b][v] = cheapest cost to reach v with at most b edges, None when unreachable
    // All rows are kept rather than a rolling pair - the table doubles as a debugging aid
    let mut layers: Vec<Vec<Option<C>>> = Vec::with_capacity(max_stops + 2);

    let mut first: Vec<Option<C>> = vec![None; node_count];
    first[src] = Some(Zero::zero());
    layers.push(first);

    for budget in 1..=max_stops + 1 {
        // Start from a copy of the previous row - taking no edge is always allowed
        let mut row = layers[budget - 1].clone();

        for from in 0..node_count {
            // Nodes unreachable in the previous row cannot relax anything
            let Some(from_cost) = layers[budget - 1][from] else {
                continue;
            };

            for &(to, edge_cost) in graph.neighbors(from) {
                // Relax from the previous row only, so one sweep adds at most one edge
                let relaxed = from_cost + edge_cost;
                if row[to].is_none_or(|c| relaxed < c) {
                    row[to] = Some(relaxed);
                }
            }
        }

        layers.push(row);
    }

    // Rows are non-increasing once a node is reachable, but the minimum
    // over every row is the always-correct formulation
    Ok(layers.iter().filter_map(|row| row[dst]).min())
}
