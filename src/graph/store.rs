use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Unique identifier for a node, assigned by [`Graph::add_node`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.0.fmt(f)
	}
}

/// Identifier of an edge: its position in the edge sequence. Edges are
/// never removed, so the position is stable and gives duplicate
/// `(from, to)` pairs distinct identities.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EdgeId(pub usize);

/// Display shape for a node.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Shape {
	#[default]
	Ellipse,
	Circle,
	Box,
}

impl fmt::Display for Shape {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Shape::Ellipse => write!(f, "ellipse"),
			Shape::Circle => write!(f, "circle"),
			Shape::Box => write!(f, "box"),
		}
	}
}

impl FromStr for Shape {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"ellipse" => Ok(Shape::Ellipse),
			"circle" => Ok(Shape::Circle),
			"box" => Ok(Shape::Box),
			_ => Err(format!("unknown shape: {s}")),
		}
	}
}

/// A labeled vertex. Immutable once created; there is no delete operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
	pub id: NodeId,
	pub label: String,
	pub shape: Shape,
}

/// A directed connection between two node ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
	pub from: NodeId,
	pub to: NodeId,
}

/// Failure of [`Graph::add_edge`]: a label resolved to no node.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AddEdgeError {
	#[error("no node labeled {0:?}")]
	NodeNotFound(String),
}

/// The editable graph: ordered node and edge sequences. Edge endpoints
/// are valid by construction since `add_edge` only accepts labels that
/// resolve to existing nodes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
	nodes: Vec<Node>,
	edges: Vec<Edge>,
}

impl Graph {
	pub fn new() -> Self {
		Self::default()
	}

	/// Append a new node and return its id.
	///
	/// Labels are not validated; empty and duplicate labels are allowed.
	/// Ids are `count + 1`, unique only because nodes are never removed.
	pub fn add_node(&mut self, label: impl Into<String>, shape: Shape) -> NodeId {
		let id = NodeId(self.nodes.len() as u32 + 1);
		self.nodes.push(Node {
			id,
			label: label.into(),
			shape,
		});
		id
	}

	/// Append an edge connecting the nodes the two labels resolve to.
	///
	/// A duplicate label resolves to the earliest-created node carrying
	/// it, and the same `(from, to)` pair may be added repeatedly; every
	/// call appends a distinct edge. On failure the edge sequence is
	/// left untouched.
	pub fn add_edge(
		&mut self,
		source_label: &str,
		target_label: &str,
	) -> Result<EdgeId, AddEdgeError> {
		let from = self
			.find_by_label(source_label)
			.ok_or_else(|| AddEdgeError::NodeNotFound(source_label.to_string()))?
			.id;
		let to = self
			.find_by_label(target_label)
			.ok_or_else(|| AddEdgeError::NodeNotFound(target_label.to_string()))?
			.id;
		let id = EdgeId(self.edges.len());
		self.edges.push(Edge { from, to });
		Ok(id)
	}

	pub fn node(&self, id: NodeId) -> Option<&Node> {
		self.nodes.iter().find(|n| n.id == id)
	}

	/// First node with the given label, in insertion order.
	pub fn find_by_label(&self, label: &str) -> Option<&Node> {
		self.nodes.iter().find(|n| n.label == label)
	}

	pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
		self.edges.get(id.0)
	}

	/// Outgoing edges of a node, in sequence order.
	pub fn edges_from(&self, id: NodeId) -> impl Iterator<Item = (EdgeId, &Edge)> {
		self.edges
			.iter()
			.enumerate()
			.filter(move |(_, e)| e.from == id)
			.map(|(i, e)| (EdgeId(i), e))
	}

	pub fn nodes(&self) -> &[Node] {
		&self.nodes
	}

	pub fn edges(&self) -> &[Edge] {
		&self.edges
	}

	pub fn node_count(&self) -> usize {
		self.nodes.len()
	}

	pub fn edge_count(&self) -> usize {
		self.edges.len()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn node_ids_are_monotonic_from_one() {
		let mut g = Graph::new();
		let ids: Vec<NodeId> = (0..4).map(|i| g.add_node(format!("n{i}"), Shape::Circle)).collect();
		assert_eq!(ids, vec![NodeId(1), NodeId(2), NodeId(3), NodeId(4)]);
	}

	#[test]
	fn empty_and_duplicate_labels_are_accepted() {
		let mut g = Graph::new();
		let a = g.add_node("", Shape::Ellipse);
		let b = g.add_node("", Shape::Box);
		assert_ne!(a, b);
		assert_eq!(g.node_count(), 2);
	}

	#[test]
	fn add_edge_resolves_labels_to_ids() {
		let mut g = Graph::new();
		let a = g.add_node("A", Shape::Ellipse);
		let b = g.add_node("B", Shape::Ellipse);

		let id = g.add_edge("A", "B").unwrap();
		assert_eq!(id, EdgeId(0));
		assert_eq!(g.edges(), &[Edge { from: a, to: b }]);
	}

	#[test]
	fn add_edge_with_unknown_label_changes_nothing() {
		let mut g = Graph::new();
		g.add_node("B", Shape::Ellipse);

		let err = g.add_edge("X", "B").unwrap_err();
		assert_eq!(err, AddEdgeError::NodeNotFound("X".into()));
		assert_eq!(g.edge_count(), 0);

		let err = g.add_edge("B", "Y").unwrap_err();
		assert_eq!(err, AddEdgeError::NodeNotFound("Y".into()));
		assert_eq!(g.edge_count(), 0);
	}

	#[test]
	fn duplicate_labels_resolve_to_earliest_node() {
		let mut g = Graph::new();
		let first_a = g.add_node("A", Shape::Ellipse);
		let b = g.add_node("B", Shape::Ellipse);
		g.add_node("A", Shape::Box);

		let id = g.add_edge("A", "B").unwrap();
		assert_eq!(g.edge(id), Some(&Edge { from: first_a, to: b }));
	}

	#[test]
	fn duplicate_edge_pairs_are_kept_as_distinct_edges() {
		let mut g = Graph::new();
		g.add_node("A", Shape::Ellipse);
		g.add_node("B", Shape::Ellipse);

		let first = g.add_edge("A", "B").unwrap();
		let second = g.add_edge("A", "B").unwrap();
		assert_ne!(first, second);
		assert_eq!(g.edge_count(), 2);
		assert_eq!(g.edge(first), g.edge(second));
	}

	#[test]
	fn edges_from_preserves_sequence_order() {
		let mut g = Graph::new();
		let a = g.add_node("A", Shape::Ellipse);
		g.add_node("B", Shape::Ellipse);
		g.add_node("C", Shape::Ellipse);

		g.add_edge("A", "C").unwrap();
		g.add_edge("B", "C").unwrap();
		g.add_edge("A", "B").unwrap();

		let out: Vec<EdgeId> = g.edges_from(a).map(|(id, _)| id).collect();
		assert_eq!(out, vec![EdgeId(0), EdgeId(2)]);
	}

	#[test]
	fn shape_round_trips_through_display_and_parse() {
		for shape in [Shape::Ellipse, Shape::Circle, Shape::Box] {
			assert_eq!(shape.to_string().parse::<Shape>(), Ok(shape));
		}
		assert!("diamond".parse::<Shape>().is_err());
	}
}
