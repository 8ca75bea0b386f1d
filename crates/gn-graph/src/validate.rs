//! Level graph validation.

use std::collections::{BTreeMap, HashSet};

use gn_network::BusRole;
use petgraph::unionfind::UnionFind;

use crate::error::{GraphError, GraphResult};
use crate::graph::{LevelEdge, LevelGraph, LevelNode};

pub(crate) fn validate_structure(nodes: &[LevelNode], edges: &[LevelEdge]) -> GraphResult<()> {
    let mut names = HashSet::new();
    for node in nodes {
        if !names.insert(node.name.as_str()) {
            return Err(GraphError::DuplicateNode {
                name: node.name.clone(),
            });
        }
    }

    for edge in edges {
        for node in [edge.tail, edge.head] {
            if node.slot() >= nodes.len() {
                return Err(GraphError::InvalidNodeRef {
                    edge: edge.id,
                    node,
                });
            }
        }
        if edge.tail == edge.head {
            return Err(GraphError::SelfLoop {
                edge: edge.id,
                node: edge.tail,
            });
        }
    }
    Ok(())
}

/// Connected parts of the level (ignoring pipe direction) that contain no
/// SOURCE node, each listed by bus name in node order.
///
/// Pressure in such a part is not pinned, so its linear system is singular.
pub fn unsupplied_components(graph: &LevelGraph) -> Vec<Vec<String>> {
    let mut sets = UnionFind::<usize>::new(graph.node_count());
    for edge in graph.edges() {
        sets.union(edge.tail.slot(), edge.head.slot());
    }
    let labels = sets.into_labeling();

    let mut parts: BTreeMap<usize, (bool, Vec<String>)> = BTreeMap::new();
    for node in graph.nodes() {
        let entry = parts.entry(labels[node.id.slot()]).or_default();
        entry.0 |= node.role == BusRole::Source;
        entry.1.push(node.name.clone());
    }

    let mut unsupplied: Vec<Vec<String>> = parts
        .into_values()
        .filter(|(supplied, _)| !supplied)
        .map(|(_, names)| names)
        .collect();
    unsupplied.sort_by_key(|names| graph.node_by_name(&names[0]).map(|n| n.id));
    unsupplied
}

impl LevelGraph {
    /// Fails with [`GraphError::Unsupplied`] for the first part without a source.
    pub fn check_supplied(&self) -> GraphResult<()> {
        match unsupplied_components(self).into_iter().next() {
            Some(buses) => Err(GraphError::Unsupplied {
                level: self.level,
                buses,
            }),
            None => Ok(()),
        }
    }
}
