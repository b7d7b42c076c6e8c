use std::collections::HashMap;
use std::f64::consts::{FRAC_1_SQRT_2, PI};

use force_graph::DefaultNodeIdx;
use web_sys::CanvasRenderingContext2d;

use crate::graph::Shape;

use super::state::{GraphCanvasState, NODE_RADIUS};

pub fn render(state: &GraphCanvasState, ctx: &CanvasRenderingContext2d) {
	ctx.set_fill_style_str(state.style.background);
	ctx.fill_rect(0.0, 0.0, state.width, state.height);
	ctx.save();
	let _ = ctx.translate(state.transform.x, state.transform.y);
	let _ = ctx.scale(state.transform.k, state.transform.k);
	let positions = node_positions(state);
	draw_edges(state, ctx, &positions);
	draw_nodes(state, ctx);
	ctx.restore();
}

fn node_positions(state: &GraphCanvasState) -> HashMap<DefaultNodeIdx, (f64, f64, Shape)> {
	let mut positions = HashMap::new();
	state.graph.visit_nodes(|node| {
		positions.insert(
			node.index(),
			(node.x() as f64, node.y() as f64, node.data.user_data.shape),
		);
	});
	positions
}

fn half_extents(shape: Shape) -> (f64, f64) {
	match shape {
		Shape::Ellipse => (NODE_RADIUS * 1.5, NODE_RADIUS),
		Shape::Circle => (NODE_RADIUS, NODE_RADIUS),
		Shape::Box => (NODE_RADIUS * 1.4, NODE_RADIUS * 0.9),
	}
}

/// Distance from a node's center to its outline along the unit direction
/// `(ux, uy)`, so edges and arrowheads stop at the shape instead of its
/// center.
fn boundary_radius(shape: Shape, ux: f64, uy: f64) -> f64 {
	let (hw, hh) = half_extents(shape);
	match shape {
		Shape::Box => {
			let rx = if ux.abs() > 1e-6 { hw / ux.abs() } else { f64::INFINITY };
			let ry = if uy.abs() > 1e-6 { hh / uy.abs() } else { f64::INFINITY };
			rx.min(ry)
		}
		Shape::Ellipse | Shape::Circle => {
			let denom = (hh * ux).powi(2) + (hw * uy).powi(2);
			if denom < 1e-9 { hw } else { hw * hh / denom.sqrt() }
		}
	}
}

fn draw_edges(
	state: &GraphCanvasState,
	ctx: &CanvasRenderingContext2d,
	positions: &HashMap<DefaultNodeIdx, (f64, f64, Shape)>,
) {
	let k = state.transform.k;
	let (line_width, arrow_size) = (1.5 / k, 8.0 / k);

	for edge in state.edges() {
		let Some(&(x1, y1, shape1)) = positions.get(&edge.from) else {
			continue;
		};
		let Some(&(x2, y2, shape2)) = positions.get(&edge.to) else {
			continue;
		};

		if edge.from == edge.to {
			draw_self_loop(ctx, x1, y1, shape1, edge.color, line_width);
			continue;
		}

		let (dx, dy) = (x2 - x1, y2 - y1);
		let dist = (dx * dx + dy * dy).sqrt();
		if dist < 0.001 {
			continue;
		}
		let (ux, uy) = (dx / dist, dy / dist);
		let start = boundary_radius(shape1, ux, uy);
		let end = boundary_radius(shape2, ux, uy);

		ctx.set_stroke_style_str(edge.color);
		ctx.set_line_width(line_width);
		ctx.begin_path();
		ctx.move_to(x1 + ux * start, y1 + uy * start);
		ctx.line_to(x2 - ux * (end + arrow_size), y2 - uy * (end + arrow_size));
		ctx.stroke();

		ctx.set_fill_style_str(edge.color);
		let (tip_x, tip_y) = (x2 - ux * end, y2 - uy * end);
		let (back_x, back_y) = (tip_x - ux * arrow_size, tip_y - uy * arrow_size);
		let (px, py) = (-uy * arrow_size * 0.5, ux * arrow_size * 0.5);
		ctx.begin_path();
		ctx.move_to(tip_x, tip_y);
		ctx.line_to(back_x + px, back_y + py);
		ctx.line_to(back_x - px, back_y - py);
		ctx.close_path();
		ctx.fill();
	}
}

fn draw_self_loop(
	ctx: &CanvasRenderingContext2d,
	x: f64,
	y: f64,
	shape: Shape,
	color: &str,
	line_width: f64,
) {
	let offset = boundary_radius(shape, FRAC_1_SQRT_2, -FRAC_1_SQRT_2);
	ctx.set_stroke_style_str(color);
	ctx.set_line_width(line_width);
	ctx.begin_path();
	let _ = ctx.arc(x + offset, y - offset, NODE_RADIUS * 0.8, 0.0, 2.0 * PI);
	ctx.stroke();
}

fn draw_nodes(state: &GraphCanvasState, ctx: &CanvasRenderingContext2d) {
	let k = state.transform.k;
	let style = &state.style;

	state.graph.visit_nodes(|node| {
		let paint = &node.data.user_data;
		let (x, y) = (node.x() as f64, node.y() as f64);
		let (hw, hh) = half_extents(paint.shape);

		shape_path(ctx, paint.shape, x, y, hw, hh);
		ctx.set_fill_style_str(paint.color);
		ctx.fill();
		ctx.set_stroke_style_str(style.node_border);
		ctx.set_line_width(1.0 / k);
		ctx.stroke();

		if paint.selected {
			let gap = 3.0 / k;
			shape_path(ctx, paint.shape, x, y, hw + gap, hh + gap);
			ctx.set_stroke_style_str(style.selected_border);
			ctx.set_line_width(2.0 / k);
			ctx.stroke();
		}

		if !paint.label.is_empty() {
			ctx.set_fill_style_str(style.font_color);
			ctx.set_font(&format!("{}px sans-serif", 11.0 / k.max(0.5)));
			let _ = ctx.fill_text(&paint.label, x + hw + 4.0, y + 3.0);
		}
	});
}

fn shape_path(ctx: &CanvasRenderingContext2d, shape: Shape, x: f64, y: f64, hw: f64, hh: f64) {
	ctx.begin_path();
	match shape {
		Shape::Ellipse => {
			let _ = ctx.ellipse(x, y, hw, hh, 0.0, 0.0, 2.0 * PI);
		}
		Shape::Circle => {
			let _ = ctx.arc(x, y, hw, 0.0, 2.0 * PI);
		}
		Shape::Box => {
			ctx.rect(x - hw, y - hh, hw * 2.0, hh * 2.0);
		}
	}
}
