
#[derive(Debug)]
pub enum RouteError {
    NodeOutOfBounds { node: usize, node_count: usize }, // Node id falls outside [0, node_count)
    NegativeEdgeCost { from: usize, to: usize }, // Edge costs must be non-negative
}
