use std::collections::HashMap;
use std::f64::consts::PI;

use force_graph::{DefaultNodeIdx, EdgeData, ForceGraph, NodeData, SimulationParameters};

use crate::graph::{DecoratedGraph, GraphStyle, NodeId, Shape};

pub const NODE_RADIUS: f64 = 10.0;
pub const HIT_RADIUS: f64 = 16.0;

/// Per-node display data carried inside the force simulation.
#[derive(Clone, Debug)]
pub struct NodePaint {
	pub id: NodeId,
	pub label: String,
	pub shape: Shape,
	pub color: &'static str,
	pub selected: bool,
}

/// An edge of the decorated graph resolved to simulation indices.
#[derive(Clone, Copy, Debug)]
pub struct EdgePaint {
	pub from: DefaultNodeIdx,
	pub to: DefaultNodeIdx,
	pub color: &'static str,
}

#[derive(Clone, Debug, Default)]
pub struct ViewTransform {
	pub x: f64,
	pub y: f64,
	pub k: f64,
}

#[derive(Clone, Debug, Default)]
pub struct DragState {
	pub active: bool,
	pub node_idx: Option<DefaultNodeIdx>,
	pub start_x: f64,
	pub start_y: f64,
	pub node_start_x: f32,
	pub node_start_y: f32,
}

#[derive(Clone, Debug, Default)]
pub struct PanState {
	pub active: bool,
	pub start_x: f64,
	pub start_y: f64,
	pub transform_start_x: f64,
	pub transform_start_y: f64,
}

pub struct GraphCanvasState {
	pub graph: ForceGraph<NodePaint, ()>,
	pub style: GraphStyle,
	pub transform: ViewTransform,
	pub drag: DragState,
	pub pan: PanState,
	pub width: f64,
	pub height: f64,
	pub animation_running: bool,
	id_to_idx: HashMap<NodeId, DefaultNodeIdx>,
	edges: Vec<EdgePaint>,
	synced_edges: usize,
}

impl GraphCanvasState {
	pub fn new(style: GraphStyle, width: f64, height: f64) -> Self {
		let graph = ForceGraph::new(SimulationParameters {
			force_charge: 150.0,
			force_spring: 0.05,
			force_max: 100.0,
			node_speed: 3000.0,
			damping_factor: 0.9,
		});

		Self {
			graph,
			style,
			transform: ViewTransform {
				x: width / 2.0,
				y: height / 2.0,
				k: 1.0,
			},
			drag: DragState::default(),
			pan: PanState::default(),
			width,
			height,
			animation_running: true,
			id_to_idx: HashMap::new(),
			edges: Vec::new(),
			synced_edges: 0,
		}
	}

	/// Bring the simulation in line with the decorated graph. Nodes and
	/// edges are append-only, so existing entries only need their colors
	/// refreshed and layout positions are never lost.
	pub fn sync(&mut self, data: &DecoratedGraph) {
		let decor: HashMap<NodeId, (&'static str, bool)> = data
			.nodes
			.iter()
			.map(|n| (n.id, (n.color, n.selected)))
			.collect();
		self.graph.visit_nodes_mut(|node| {
			if let Some(&(color, selected)) = decor.get(&node.data.user_data.id) {
				node.data.user_data.color = color;
				node.data.user_data.selected = selected;
			}
		});

		for dn in &data.nodes {
			if self.id_to_idx.contains_key(&dn.id) {
				continue;
			}
			// Seed new nodes on a loose spiral around the center so the
			// simulation starts them apart from each other.
			let i = self.id_to_idx.len() as f64;
			let angle = i * 2.0 * PI / 12.0;
			let radius = 100.0 + 6.0 * i;
			let idx = self.graph.add_node(NodeData {
				x: (self.width / 2.0 + radius * angle.cos()) as f32,
				y: (self.height / 2.0 + radius * angle.sin()) as f32,
				mass: 10.0,
				is_anchor: false,
				user_data: NodePaint {
					id: dn.id,
					label: dn.label.clone(),
					shape: dn.shape,
					color: dn.color,
					selected: dn.selected,
				},
			});
			self.id_to_idx.insert(dn.id, idx);
		}

		for de in &data.edges[self.synced_edges..] {
			if let (Some(&from), Some(&to)) =
				(self.id_to_idx.get(&de.from), self.id_to_idx.get(&de.to))
			{
				// Self-loops stay out of the simulation; a spring from a
				// node to itself has no layout effect. They still render.
				if from != to {
					self.graph.add_edge(from, to, EdgeData::default());
				}
			}
		}
		self.synced_edges = data.edges.len();

		self.edges = data
			.edges
			.iter()
			.filter_map(|de| {
				match (self.id_to_idx.get(&de.from), self.id_to_idx.get(&de.to)) {
					(Some(&from), Some(&to)) => Some(EdgePaint {
						from,
						to,
						color: de.color,
					}),
					_ => None,
				}
			})
			.collect();
	}

	pub fn edges(&self) -> &[EdgePaint] {
		&self.edges
	}

	pub fn screen_to_graph(&self, sx: f64, sy: f64) -> (f64, f64) {
		(
			(sx - self.transform.x) / self.transform.k,
			(sy - self.transform.y) / self.transform.k,
		)
	}

	pub fn node_at_position(&self, sx: f64, sy: f64) -> Option<DefaultNodeIdx> {
		let (gx, gy) = self.screen_to_graph(sx, sy);
		let mut found = None;
		self.graph.visit_nodes(|node| {
			let (dx, dy) = (node.x() as f64 - gx, node.y() as f64 - gy);
			// HIT_RADIUS is in world-space, scales with zoom like nodes
			if (dx * dx + dy * dy).sqrt() < HIT_RADIUS {
				found = Some(node.index());
			}
		});
		found
	}

	pub fn node_id_at(&self, idx: DefaultNodeIdx) -> Option<NodeId> {
		let mut found = None;
		self.graph.visit_nodes(|node| {
			if node.index() == idx {
				found = Some(node.data.user_data.id);
			}
		});
		found
	}

	pub fn tick(&mut self, dt: f32) {
		self.graph.update(dt);
	}
}
