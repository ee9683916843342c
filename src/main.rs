//! Entrypoint emitting the initial state of both views as JSON.

// Bin target reuses lib deps, silence noisy lint.
#![allow(unused_crate_dependencies)]

use netlens::{Session, SessionConfig, init_logging};

fn main() -> netlens::Result<()> {
	init_logging();

	let session = Session::new(&SessionConfig::default())?;
	let network = session.full_graph_figure();
	let neighborhood = session.subgraph_figure(None)?;

	// Initial page state: the full graph next to the nothing-selected
	// placeholder, keyed by view for the rendering layer.
	println!(
		"{}",
		serde_json::json!({
			"network": network,
			"neighborhood": neighborhood,
		})
	);
	Ok(())
}
