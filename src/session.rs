//! Session state and the two render-request handlers.
//!
//! A [`Session`] owns the single graph of the process and its layout,
//! created once at startup and read-only afterwards. The surrounding
//! wiring layer (out of scope here) calls the handlers whenever its views
//! need content: the full-graph view on page load and on any viewport
//! change of the sibling view, the neighborhood view on node clicks.

use log::{debug, info};

use crate::error::{Error, Result};
use crate::figure::{self, ClickEvent, Figure};
use crate::graph::{self, Graph};

/// Shape of the session graph, fixed at creation.
#[derive(Clone, Copy, Debug)]
pub struct SessionConfig {
	/// Node count of the generated graph.
	pub nodes: usize,
	/// Edge count of the generated graph.
	pub edges: usize,
}

impl Default for SessionConfig {
	fn default() -> Self {
		Self {
			nodes: 50,
			edges: 100,
		}
	}
}

/// The one graph of a session plus its precomputed layout.
pub struct Session {
	graph: Graph,
	layout: Vec<(f64, f64)>,
}

impl Session {
	/// Generate the session graph and lay it out, exactly once. An
	/// impossible node/edge combination fails here and aborts startup;
	/// there is no session without a graph.
	pub fn new(config: &SessionConfig) -> Result<Self> {
		let graph = graph::erdos_renyi(config.nodes, config.edges)?;
		let layout = graph::force_layout(&graph);
		info!(
			"session graph ready: {} nodes, {} edges",
			graph.node_count(),
			graph.edge_count()
		);
		Ok(Self { graph, layout })
	}

	/// The session graph.
	pub fn graph(&self) -> &Graph {
		&self.graph
	}

	/// Render the full-graph view.
	///
	/// Deliberately takes no event payload: the triggers (page load, any
	/// viewport change on the neighborhood view) carry nothing the content
	/// depends on, so this is plain recompute-on-request. Community
	/// detection reruns on every call and the colors are drawn fresh with
	/// it; the stored layout is reused unchanged.
	pub fn full_graph_figure(&self) -> Figure {
		let communities = graph::communities(&self.graph);
		figure::network_figure(&self.graph, &self.layout, &communities)
	}

	/// Render the neighborhood view for a click event.
	///
	/// No event, or one with a cleared selection, yields the empty
	/// placeholder. Otherwise the clicked index is resolved against the
	/// original session graph (never against a previously rendered
	/// subgraph) and its closed 1-hop neighborhood is cut out, laid out,
	/// and partitioned from scratch. An out-of-range index fails the whole
	/// request; the session is untouched either way.
	pub fn subgraph_figure(&self, click: Option<&ClickEvent>) -> Result<Figure> {
		let Some(index) = click.and_then(ClickEvent::node_index) else {
			return Ok(figure::empty_figure());
		};
		if index >= self.graph.node_count() {
			return Err(Error::InvalidSelection {
				index,
				nodes: self.graph.node_count(),
			});
		}

		let members = self.graph.closed_neighborhood(index);
		let subgraph = self.graph.induced_subgraph(&members);
		debug!(
			"node {index} selected: neighborhood has {} nodes, {} edges",
			subgraph.node_count(),
			subgraph.edge_count()
		);

		let layout = graph::force_layout(&subgraph);
		let communities = graph::communities(&subgraph);
		Ok(figure::network_figure(&subgraph, &layout, &communities))
	}
}
