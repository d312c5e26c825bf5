//! Cheapest-route search under a stop budget
//!
//! Finds the minimum cost to travel between two nodes of a directed,
//! non-negatively weighted graph using at most `k` intermediate stops,
//! i.e. at most `k + 1` edges. Three interchangeable solvers are provided:
//! a bounded depth-first search with branch-and-bound pruning, a layered
//! dynamic program over edge-count budgets, and a cost-ordered search that
//! carries a per-branch visited set and stop counter.

mod collections;
pub mod errors;
pub mod graph;
pub mod route_algos;

pub use errors::RouteError;
pub use graph::{Edge, Graph};
pub use route_algos::{
    NO_ROUTE, cheapest_route_dfs, cheapest_route_dijkstra, cheapest_route_dp,
};
