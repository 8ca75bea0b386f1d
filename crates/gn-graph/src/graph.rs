//! Ordered level graph.

use gn_core::{EdgeId, NodeId};
use gn_network::{BusRole, PressureLevel};

/// A bus of the level, in bus table order.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelNode {
    pub id: NodeId,
    pub name: String,
    pub role: BusRole,
    /// Row of the bus in the network bus table.
    pub bus_index: usize,
}

/// An in-service pipe of the level, oriented from `tail` to `head`.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelEdge {
    pub id: EdgeId,
    pub name: String,
    pub tail: NodeId,
    pub head: NodeId,
    pub length_m: f64,
    pub diameter_m: f64,
    pub material: String,
    /// Row of the pipe in the network pipe table.
    pub pipe_index: usize,
}

impl LevelEdge {
    pub fn area_m2(&self) -> f64 {
        std::f64::consts::PI * self.diameter_m * self.diameter_m / 4.0
    }
}

/// Directed multigraph of one pressure level.
///
/// Node and edge ids are positions in the ordered vectors, so they double
/// as offsets into the pressure, pipe-flow and node-flow blocks of the
/// solution vector.
#[derive(Debug, Clone)]
pub struct LevelGraph {
    pub(crate) level: PressureLevel,
    pub(crate) nodes: Vec<LevelNode>,
    pub(crate) edges: Vec<LevelEdge>,
}

impl LevelGraph {
    pub fn level(&self) -> PressureLevel {
        self.level
    }

    pub fn nodes(&self) -> &[LevelNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[LevelEdge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn node(&self, id: NodeId) -> &LevelNode {
        &self.nodes[id.slot()]
    }

    pub fn node_by_name(&self, name: &str) -> Option<&LevelNode> {
        self.nodes.iter().find(|n| n.name == name)
    }

    pub fn count_role(&self, role: BusRole) -> usize {
        self.nodes.iter().filter(|n| n.role == role).count()
    }

    /// Edges incident to a node, with +1 when the node is the head and -1 when it is the tail.
    pub fn incident_edges(&self, node: NodeId) -> impl Iterator<Item = (&LevelEdge, f64)> {
        self.edges.iter().filter_map(move |e| {
            if e.head == node {
                Some((e, 1.0))
            } else if e.tail == node {
                Some((e, -1.0))
            } else {
                None
            }
        })
    }
}
