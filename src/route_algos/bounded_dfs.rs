use crate::collections::FxIndexSet;
use crate::errors::RouteError;
use crate::graph::Graph;
use super::check_endpoints;

use std::fmt::Debug;
use num_traits::Zero;




/// Cheapest route cost from `src` to `dst` using at most `max_stops` intermediate stops
/// Depth-first search over simple paths with branch-and-bound pruning:
/// a branch is abandoned once its accumulated cost can no longer beat the best route found
/// Returns Ok(None) when the destination cannot be reached within the stop budget
pub fn bounded_dfs<C>(graph: &Graph<C>, src: usize, dst: usize, max_stops: usize) -> Result<Option<C>, RouteError>
where
    C: Zero + Ord + Copy + Debug,
    {

    check_endpoints(graph.node_count(), src, dst)?;

    // `max_stops` intermediate nodes permit one more edge than stops
    let mut on_path = FxIndexSet::default();
    let mut best = None;

    visit(graph, src, dst, max_stops + 1, Zero::zero(), &mut best, &mut on_path);

    Ok(best)
}


/// Recursive walk from `node` with `edges_left` edges still allowed
/// `on_path` holds exactly the nodes of the current call stack -
/// nodes are unmarked on backtrack so other branches may reuse them
fn visit<C>(
    graph: &Graph<C>,
    node: usize,
    dst: usize,
    edges_left: usize,
    route_cost: C,
    best: &mut Option<C>,
    on_path: &mut FxIndexSet<usize>,
) where
    C: Zero + Ord + Copy + Debug,
    {

    if node == dst {
        *best = Some(match *best {
            Some(b) => b.min(route_cost),
            None => route_cost,
        });
        return;
    }

    // No further edges may be taken
    if edges_left == 0 {
        return;
    }

    on_path.insert(node);

    for &(neighbor, edge_cost) in graph.neighbors(node) {
        let next_cost = route_cost + edge_cost;

        // Descend only into neighbors off the current path whose cost
        // still strictly improves on the best route found so far
        if !on_path.contains(&neighbor) && best.is_none_or(|b| next_cost < b) {
            visit(graph, neighbor, dst, edges_left - 1, next_cost, best, on_path);
        }
    }

    on_path.pop();
}


#[cfg(test)]
mod tests {
    use super::*;

    // Triangle 0 -> 1 -> 2 -> 0 with two spokes into node 3
    fn create_test_graph() -> Graph<i64> {
        Graph::from_edges(
            4,
            &[(0, 1, 100), (1, 2, 100), (2, 0, 100), (1, 3, 600), (2, 3, 200)],
        )
        .unwrap()
    }

    #[test]
    fn test_bounded_dfs_finds_cheapest_route_within_budget() {
        let graph = create_test_graph();

        // One stop allows 0 -> 1 -> 3, the cheaper 0 -> 1 -> 2 -> 3 needs two
        assert_eq!(bounded_dfs(&graph, 0, 3, 1).unwrap(), Some(700));
        assert_eq!(bounded_dfs(&graph, 0, 3, 2).unwrap(), Some(400));
    }

    #[test]
    fn test_bounded_dfs_respects_zero_stop_budget() {
        let graph = create_test_graph();

        // No direct edge 0 -> 3
        assert_eq!(bounded_dfs(&graph, 0, 3, 0).unwrap(), None);
        assert_eq!(bounded_dfs(&graph, 0, 1, 0).unwrap(), Some(100));
    }

    #[test]
    fn test_bounded_dfs_same_source_and_destination() {
        let graph = create_test_graph();

        assert_eq!(bounded_dfs(&graph, 2, 2, 0).unwrap(), Some(0));
        assert_eq!(bounded_dfs(&graph, 2, 2, 5).unwrap(), Some(0));
    }

    #[test]
    fn test_bounded_dfs_unreachable_destination() {
        // 3 has no outgoing edges, so nothing can reach 0 from it
        let graph = create_test_graph();

        assert_eq!(bounded_dfs(&graph, 3, 0, 10).unwrap(), None);
    }

    #[test]
    fn test_bounded_dfs_picks_cheaper_parallel_edge() {
        let graph: Graph<i64> = Graph::from_edges(2, &[(0, 1, 10), (0, 1, 5)]).unwrap();

        assert_eq!(bounded_dfs(&graph, 0, 1, 0).unwrap(), Some(5));
    }

    #[test]
    fn test_bounded_dfs_cycle_does_not_trap_search() {
        // 0 -> 1 -> 2 -> 1 cycle next to the 2 -> 3 exit
        let graph: Graph<i64> =
            Graph::from_edges(4, &[(0, 1, 1), (1, 2, 1), (2, 1, 1), (2, 3, 1)]).unwrap();

        assert_eq!(bounded_dfs(&graph, 0, 3, 5).unwrap(), Some(3));
    }

    #[test]
    fn test_bounded_dfs_rejects_out_of_bounds_endpoint() {
        let graph = create_test_graph();

        let result = bounded_dfs(&graph, 0, 9, 1);
        assert!(matches!(
            result,
            Err(RouteError::NodeOutOfBounds { node: 9, node_count: 4 })
        ));
    }
}
