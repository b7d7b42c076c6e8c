use leptos::prelude::*;

use crate::graph::{Dependents, Graph, NodeId};

/// Detail panel for the current selection: the node's identity plus the
/// labels of its dependent nodes and the endpoints of its dependent
/// edges.
#[component]
pub fn SelectionPanel(
	graph: RwSignal<Graph>,
	#[prop(into)] selected: Signal<Option<NodeId>>,
	#[prop(into)] dependents: Signal<Dependents>,
) -> impl IntoView {
	view! {
		<div class="side-panel">
			{move || {
				let g = graph.get();
				let node = selected.get().and_then(|id| g.node(id).cloned());
				let Some(node) = node else {
					return view! {
						<p class="hint">"Click a node to inspect its dependents."</p>
					}
					.into_any();
				};

				let deps = dependents.get();
				let dep_nodes: Vec<String> = deps
					.nodes
					.iter()
					.filter_map(|&id| g.node(id))
					.map(|n| n.label.clone())
					.collect();
				let dep_edges: Vec<String> = deps
					.edges
					.iter()
					.filter_map(|&id| g.edge(id))
					.map(|e| format!("{} -> {}", e.from, e.to))
					.collect();

				view! {
					<div>
						<h3>"Selected Node"</h3>
						<p>"ID: " {node.id.to_string()}</p>
						<p>"Label: " {node.label.clone()}</p>
						<p>"Shape: " {node.shape.to_string()}</p>
						<h4>"Dependent Nodes"</h4>
						<ul>
							{dep_nodes.into_iter().map(|label| view! { <li>{label}</li> }).collect_view()}
						</ul>
						<h4>"Dependent Edges"</h4>
						<ul>
							{dep_edges.into_iter().map(|pair| view! { <li>{pair}</li> }).collect_view()}
						</ul>
					</div>
				}
				.into_any()
			}}
		</div>
	}
}
