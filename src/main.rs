//! Trunk entrypoint: mount the app to the document body.

use impact_canvas::{App, init_logging};

fn main() {
	init_logging();
	leptos::mount::mount_to_body(App);
}
