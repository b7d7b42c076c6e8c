mod controls;
mod graph_canvas;
mod side_panel;

pub use controls::{EdgeForm, NodeForm};
pub use graph_canvas::GraphCanvas;
pub use side_panel::SelectionPanel;
