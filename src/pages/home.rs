use leptos::prelude::*;

use crate::components::{EdgeForm, GraphCanvas, NodeForm, SelectionPanel};
use crate::graph::{Graph, GraphStyle, NodeId, decorate, dependents_of};

/// Graph editor page: creation forms on top, the canvas on the left and
/// the selection panel on the right.
#[component]
pub fn Home() -> impl IntoView {
	let graph = RwSignal::new(Graph::new());
	let selected = RwSignal::new(None::<NodeId>);
	let edge_status = RwSignal::new(None::<String>);

	let dependents = Signal::derive(move || dependents_of(&graph.get(), selected.get()));
	let decorated = Signal::derive(move || {
		decorate(
			&graph.get(),
			selected.get(),
			&dependents.get(),
			&GraphStyle::default(),
		)
	});

	let on_select = Callback::new(move |id: Option<NodeId>| selected.set(id));

	view! {
		<ErrorBoundary fallback=|errors| {
			view! {
				<h1>"Uh oh! Something went wrong!"</h1>

				<p>"Errors: "</p>
				<ul>
					{move || {
						errors
							.get()
							.into_iter()
							.map(|(_, e)| view! { <li>{e.to_string()}</li> })
							.collect_view()
					}}
				</ul>
			}
		}>

			<div class="editor">
				<div class="toolbar">
					<NodeForm graph=graph />
					<EdgeForm graph=graph status=edge_status />
				</div>
				<div class="workspace">
					<div class="canvas-pane">
						<GraphCanvas data=decorated on_select=on_select />
					</div>
					<SelectionPanel graph=graph selected=selected dependents=dependents />
				</div>
			</div>
		</ErrorBoundary>
	}
}
