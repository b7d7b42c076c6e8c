use leptos::prelude::*;
use log::warn;

use crate::graph::{Graph, Shape};

/// Node creation form: a label input and a shape selector. The label
/// clears on submit; creation never fails.
#[component]
pub fn NodeForm(graph: RwSignal<Graph>) -> impl IntoView {
	let (label, set_label) = signal(String::new());
	let (shape, set_shape) = signal(Shape::default());

	let add_node = move |_| {
		graph.update(|g| {
			g.add_node(label.get(), shape.get());
		});
		set_label.set(String::new());
	};

	view! {
		<div class="form-row">
			<input
				type="text"
				placeholder="Node name"
				prop:value=label
				on:input=move |ev| set_label.set(event_target_value(&ev))
			/>
			<select on:change=move |ev| {
				if let Ok(parsed) = event_target_value(&ev).parse() {
					set_shape.set(parsed);
				}
			}>
				<option value="ellipse">"Ellipse"</option>
				<option value="circle">"Circle"</option>
				<option value="box">"Box"</option>
			</select>
			<button on:click=add_node>"Add Node"</button>
		</div>
	}
}

/// Edge creation form: source and target labels resolved against the
/// graph on submit. Inputs clear whether or not resolution succeeds; a
/// failed lookup is logged and shown next to the form until the next
/// successful submit.
#[component]
pub fn EdgeForm(graph: RwSignal<Graph>, status: RwSignal<Option<String>>) -> impl IntoView {
	let (source, set_source) = signal(String::new());
	let (target, set_target) = signal(String::new());

	let add_edge = move |_| {
		let outcome = graph.try_update(|g| g.add_edge(&source.get(), &target.get()));
		match outcome {
			Some(Ok(_)) => status.set(None),
			Some(Err(err)) => {
				warn!("add edge failed: {err}");
				status.set(Some(err.to_string()));
			}
			None => {}
		}
		set_source.set(String::new());
		set_target.set(String::new());
	};

	view! {
		<div class="form-row">
			<input
				type="text"
				placeholder="Edge source"
				prop:value=source
				on:input=move |ev| set_source.set(event_target_value(&ev))
			/>
			<input
				type="text"
				placeholder="Edge target"
				prop:value=target
				on:input=move |ev| set_target.set(event_target_value(&ev))
			/>
			<button on:click=add_edge>"Add Edge"</button>
			{move || status.get().map(|msg| view! { <span class="form-error">{msg}</span> })}
		</div>
	}
}
