
pub mod bounded_dfs;
pub mod layered_dp;
pub mod constrained_dijkstra;

pub use bounded_dfs::bounded_dfs;
pub use layered_dp::layered_dp;
pub use constrained_dijkstra::constrained_dijkstra;

use crate::errors::RouteError;
use crate::graph::{Edge, Graph};


/// Sentinel returned by the `cheapest_route_*` entry points
/// when no route exists within the stop budget
pub const NO_ROUTE: i64 = -1;


/// Confirm both route endpoints are valid node ids
pub(crate) fn check_endpoints(node_count: usize, src: usize, dst: usize) -> Result<(), RouteError> {
    for node in [src, dst] {
        if node >= node_count {
            return Err(RouteError::NodeOutOfBounds { node, node_count });
        }
    }
    Ok(())
}


/// Cheapest cost to fly from `src` to `dst` with at most `max_stops` stops,
/// searched depth-first over simple paths with branch-and-bound pruning
/// Returns NO_ROUTE when the destination is out of reach within the budget
pub fn cheapest_route_dfs(
    node_count: usize,
    flights: &[Edge<i64>],
    src: usize,
    dst: usize,
    max_stops: usize,
) -> Result<i64, RouteError> {
    let graph = Graph::from_edges(node_count, flights)?;
    Ok(bounded_dfs(&graph, src, dst, max_stops)?.unwrap_or(NO_ROUTE))
}

/// Cheapest cost to fly from `src` to `dst` with at most `max_stops` stops,
/// computed by dynamic programming over edge-count budgets
/// Returns NO_ROUTE when the destination is out of reach within the budget
pub fn cheapest_route_dp(
    node_count: usize,
    flights: &[Edge<i64>],
    src: usize,
    dst: usize,
    max_stops: usize,
) -> Result<i64, RouteError> {
    let graph = Graph::from_edges(node_count, flights)?;
    Ok(layered_dp(&graph, src, dst, max_stops)?.unwrap_or(NO_ROUTE))
}

/// Cheapest cost to fly from `src` to `dst` with at most `max_stops` stops,
/// searched cheapest-cost-first with a per-branch stop counter and visited set
/// Returns NO_ROUTE when the destination is out of reach within the budget
pub fn cheapest_route_dijkstra(
    node_count: usize,
    flights: &[Edge<i64>],
    src: usize,
    dst: usize,
    max_stops: usize,
) -> Result<i64, RouteError> {
    let graph = Graph::from_edges(node_count, flights)?;
    Ok(constrained_dijkstra(&graph, src, dst, max_stops)?.unwrap_or(NO_ROUTE))
}
