use super::resolver::Dependents;
use super::store::{EdgeId, Graph, NodeId, Shape};

/// Color palette handed to the canvas widget along with the decorated
/// graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphStyle {
	pub background: &'static str,
	pub node_fill: &'static str,
	pub node_border: &'static str,
	pub selected_border: &'static str,
	pub highlight_fill: &'static str,
	pub font_color: &'static str,
	pub edge_color: &'static str,
	pub highlight_edge_color: &'static str,
}

impl Default for GraphStyle {
	fn default() -> Self {
		Self {
			background: "white",
			node_fill: "lightblue",
			node_border: "black",
			selected_border: "black",
			highlight_fill: "red",
			font_color: "black",
			edge_color: "black",
			highlight_edge_color: "red",
		}
	}
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecoratedNode {
	pub id: NodeId,
	pub label: String,
	pub shape: Shape,
	pub color: &'static str,
	pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecoratedEdge {
	pub from: NodeId,
	pub to: NodeId,
	pub color: &'static str,
}

/// Widget input: the graph with per-node and per-edge display colors
/// applied.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DecoratedGraph {
	pub nodes: Vec<DecoratedNode>,
	pub edges: Vec<DecoratedEdge>,
}

/// Project the graph into its displayed form: members of the dependent
/// sets get the highlight colors, everything else the defaults. With no
/// selection the dependent sets are empty and the whole graph renders
/// in default colors.
pub fn decorate(
	graph: &Graph,
	selected: Option<NodeId>,
	deps: &Dependents,
	style: &GraphStyle,
) -> DecoratedGraph {
	let nodes = graph
		.nodes()
		.iter()
		.map(|n| DecoratedNode {
			id: n.id,
			label: n.label.clone(),
			shape: n.shape,
			color: if deps.contains_node(n.id) {
				style.highlight_fill
			} else {
				style.node_fill
			},
			selected: selected == Some(n.id),
		})
		.collect();
	let edges = graph
		.edges()
		.iter()
		.enumerate()
		.map(|(i, e)| DecoratedEdge {
			from: e.from,
			to: e.to,
			color: if deps.contains_edge(EdgeId(i)) {
				style.highlight_edge_color
			} else {
				style.edge_color
			},
		})
		.collect();

	DecoratedGraph { nodes, edges }
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::graph::dependents_of;

	fn cycle_graph() -> Graph {
		let mut g = Graph::new();
		g.add_node("A", Shape::Ellipse);
		g.add_node("B", Shape::Circle);
		g.add_node("C", Shape::Box);
		g.add_edge("A", "B").unwrap();
		g.add_edge("B", "C").unwrap();
		g.add_edge("C", "A").unwrap();
		g
	}

	#[test]
	fn no_selection_renders_everything_in_default_colors() {
		let g = cycle_graph();
		let style = GraphStyle::default();
		let deps = dependents_of(&g, None);

		let decorated = decorate(&g, None, &deps, &style);
		assert!(decorated.nodes.iter().all(|n| n.color == style.node_fill));
		assert!(decorated.nodes.iter().all(|n| !n.selected));
		assert!(decorated.edges.iter().all(|e| e.color == style.edge_color));
	}

	#[test]
	fn dependents_get_highlight_colors_and_selection_is_flagged() {
		let g = cycle_graph();
		let style = GraphStyle::default();
		let a = NodeId(1);
		let deps = dependents_of(&g, Some(a));

		let decorated = decorate(&g, Some(a), &deps, &style);
		let colors: Vec<&str> = decorated.nodes.iter().map(|n| n.color).collect();
		// B and C are downstream of A; A keeps the default fill.
		assert_eq!(colors, vec![style.node_fill, style.highlight_fill, style.highlight_fill]);
		assert!(decorated.nodes[0].selected);
		assert!(decorated.edges.iter().all(|e| e.color == style.highlight_edge_color));
	}

	#[test]
	fn decoration_preserves_node_identity_and_order() {
		let g = cycle_graph();
		let deps = Dependents::default();
		let decorated = decorate(&g, None, &deps, &GraphStyle::default());

		let ids: Vec<NodeId> = decorated.nodes.iter().map(|n| n.id).collect();
		assert_eq!(ids, vec![NodeId(1), NodeId(2), NodeId(3)]);
		let shapes: Vec<Shape> = decorated.nodes.iter().map(|n| n.shape).collect();
		assert_eq!(shapes, vec![Shape::Ellipse, Shape::Circle, Shape::Box]);
	}
}
