//! Incremental level graph builder.

use gn_core::{EdgeId, NodeId};
use gn_network::{BusRole, PressureLevel};

use crate::error::GraphResult;
use crate::graph::{LevelEdge, LevelGraph, LevelNode};
use crate::validate;

/// Builder for one level graph.
///
/// Nodes and edges keep insertion order; `build()` validates references
/// and freezes the result.
#[derive(Debug)]
pub struct LevelGraphBuilder {
    level: PressureLevel,
    nodes: Vec<LevelNode>,
    edges: Vec<LevelEdge>,
}

impl LevelGraphBuilder {
    pub fn new(level: PressureLevel) -> Self {
        Self {
            level,
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    pub fn add_node(&mut self, name: impl Into<String>, role: BusRole, bus_index: usize) -> NodeId {
        let id = NodeId::from_index(self.nodes.len() as u32);
        self.nodes.push(LevelNode {
            id,
            name: name.into(),
            role,
            bus_index,
        });
        id
    }

    #[allow(clippy::too_many_arguments)]
    pub fn add_edge(
        &mut self,
        name: impl Into<String>,
        tail: NodeId,
        head: NodeId,
        length_m: f64,
        diameter_m: f64,
        material: impl Into<String>,
        pipe_index: usize,
    ) -> EdgeId {
        let id = EdgeId::from_index(self.edges.len() as u32);
        self.edges.push(LevelEdge {
            id,
            name: name.into(),
            tail,
            head,
            length_m,
            diameter_m,
            material: material.into(),
            pipe_index,
        });
        id
    }

    pub fn build(self) -> GraphResult<LevelGraph> {
        validate::validate_structure(&self.nodes, &self.edges)?;
        Ok(LevelGraph {
            level: self.level,
            nodes: self.nodes,
            edges: self.edges,
        })
    }
}
