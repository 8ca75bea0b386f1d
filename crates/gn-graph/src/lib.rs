//! gn-graph: per-pressure-level graphs for gasnet.
//!
//! Provides:
//! - Ordered level graph (buses as nodes, in-service pipes as edges)
//! - Builder with structural validation
//! - Partitioning of a network into one graph per level
//! - Supply check (every connected part of a level needs a source)
//!
//! # Example
//!
//! ```
//! use gn_graph::LevelGraphBuilder;
//! use gn_network::{BusRole, PressureLevel};
//!
//! let mut builder = LevelGraphBuilder::new(PressureLevel::Bp);
//! let a = builder.add_node("A", BusRole::Source, 0);
//! let b = builder.add_node("B", BusRole::Sink, 1);
//! builder.add_edge("AB", a, b, 100.0, 0.05, "steel", 0);
//! let graph = builder.build().unwrap();
//!
//! assert_eq!(graph.node_count(), 2);
//! assert_eq!(graph.edge_count(), 1);
//! ```

pub mod builder;
pub mod error;
pub mod graph;
pub mod partition;
pub mod validate;

pub use builder::LevelGraphBuilder;
pub use error::{GraphError, GraphResult};
pub use graph::{LevelEdge, LevelGraph, LevelNode};
pub use partition::{graph_for_level, graphs_by_level};
pub use validate::unsupplied_components;
