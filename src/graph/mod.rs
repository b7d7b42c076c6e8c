//! In-memory graph state: the editable store, dependent-set resolution,
//! and the color decoration handed to the canvas widget.

mod decorate;
mod resolver;
mod store;

pub use decorate::{DecoratedEdge, DecoratedGraph, DecoratedNode, GraphStyle, decorate};
pub use resolver::{Dependents, dependents_of};
pub use store::{AddEdgeError, Edge, EdgeId, Graph, Node, NodeId, Shape};
