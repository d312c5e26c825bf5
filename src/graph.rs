use crate::errors::RouteError;

use num_traits::Zero;


/// Directed edge as a (from, to, cost) triple
pub type Edge<C> = (usize, usize, C);


/// Directed graph over integer node ids `0..node_count`, stored as adjacency lists
/// Parallel edges are kept as given - each one is weighed on its own during a search
#[derive(Debug, Clone)]
pub struct Graph<C> {
    adjacency: Vec<Vec<(usize, C)>>,
}

impl<C> Graph<C>
where
    C: Zero + Ord + Copy,
{

    /// Build the adjacency lists from a flat edge list
    /// Slot `i` holds the outgoing (neighbor, cost) pairs of node `i`, in input order
    /// Edges with endpoints outside `[0, node_count)` or a negative cost are rejected
    pub fn from_edges(node_count: usize, edges: &[Edge<C>]) -> Result<Self, RouteError> {
        let mut adjacency: Vec<Vec<(usize, C)>> = vec![Vec::new(); node_count];

        for &(from, to, cost) in edges {
            if from >= node_count {
                return Err(RouteError::NodeOutOfBounds { node: from, node_count });
            }
            if to >= node_count {
                return Err(RouteError::NodeOutOfBounds { node: to, node_count });
            }
            if cost < Zero::zero() {
                return Err(RouteError::NegativeEdgeCost { from, to });
            }
            adjacency[from].push((to, cost));
        }

        Ok(Self { adjacency })
    }

    /// Number of nodes the graph was built with
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Outgoing (neighbor, cost) pairs of `node`, in insertion order
    pub fn neighbors(&self, node: usize) -> &[(usize, C)] {
        &self.adjacency[node]
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_edges_preserves_input_order() {
        let graph: Graph<i64> = Graph::from_edges(3, &[(0, 2, 7), (0, 1, 3), (1, 2, 1)]).unwrap();

        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.neighbors(0), &[(2, 7), (1, 3)]);
        assert_eq!(graph.neighbors(1), &[(2, 1)]);
        assert!(graph.neighbors(2).is_empty());
    }

    #[test]
    fn test_from_edges_keeps_parallel_edges() {
        let graph: Graph<i64> = Graph::from_edges(2, &[(0, 1, 10), (0, 1, 5)]).unwrap();

        // Both edges survive, in input order - no dedup or min-merge
        assert_eq!(graph.neighbors(0), &[(1, 10), (1, 5)]);
    }

    #[test]
    fn test_from_edges_rejects_out_of_bounds_endpoint() {
        let result: Result<Graph<i64>, _> = Graph::from_edges(2, &[(0, 2, 1)]);

        assert!(matches!(
            result,
            Err(RouteError::NodeOutOfBounds { node: 2, node_count: 2 })
        ));
    }

    #[test]
    fn test_from_edges_rejects_negative_cost() {
        let result: Result<Graph<i64>, _> = Graph::from_edges(2, &[(0, 1, -4)]);

        assert!(matches!(result, Err(RouteError::NegativeEdgeCost { from: 0, to: 1 })));
    }

    #[test]
    fn test_from_edges_with_no_edges() {
        let graph: Graph<i64> = Graph::from_edges(2, &[]).unwrap();

        assert_eq!(graph.node_count(), 2);
        assert!(graph.neighbors(0).is_empty());
        assert!(graph.neighbors(1).is_empty());
    }
}
