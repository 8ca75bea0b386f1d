//! Oriented node-by-edge incidence matrix.

use gn_graph::LevelGraph;
use nalgebra::DMatrix;

/// `N×E` matrix with -1 at the tail and +1 at the head of every edge.
///
/// `incidence · pipe_flows` is the net pipe inflow of each node.
pub fn incidence_matrix(graph: &LevelGraph) -> DMatrix<f64> {
    let mut inc = DMatrix::zeros(graph.node_count(), graph.edge_count());
    for edge in graph.edges() {
        inc[(edge.tail.slot(), edge.id.slot())] = -1.0;
        inc[(edge.head.slot(), edge.id.slot())] = 1.0;
    }
    inc
}
