//! Figure construction from a graph, its layout, and its communities.

use rand::thread_rng;

use crate::figure::color::Color;
use crate::figure::types::{
	EdgeSegment, Figure, LayoutOptions, LineStyle, MarkerStyle, NodeTrace,
};
use crate::graph::Graph;

/// Build the render-ready description of a graph.
///
/// `layout` and `communities` must each carry one entry per node of
/// `graph`. Every community id gets a fresh uniform-random color on every
/// call; nodes sharing a community share the color within this figure, but
/// a later build of the same graph draws new colors. Hover captions show
/// the node name and its degree in `graph`.
pub fn network_figure(graph: &Graph, layout: &[(f64, f64)], communities: &[usize]) -> Figure {
	debug_assert_eq!(layout.len(), graph.node_count());
	debug_assert_eq!(communities.len(), graph.node_count());

	let mut rng = thread_rng();
	let community_count = communities.iter().copied().max().map_or(0, |c| c + 1);
	let palette: Vec<String> = (0..community_count)
		.map(|_| Color::random(&mut rng).to_css_rgb())
		.collect();

	let edges = graph
		.edges()
		.iter()
		.map(|&(u, v)| EdgeSegment {
			x: [Some(layout[u].0), Some(layout[v].0), None],
			y: [Some(layout[u].1), Some(layout[v].1), None],
		})
		.collect();

	let n = graph.node_count();
	let nodes = NodeTrace {
		x: layout.iter().map(|p| p.0).collect(),
		y: layout.iter().map(|p| p.1).collect(),
		text: (0..n).map(|i| graph.name(i).to_string()).collect(),
		hover_text: (0..n)
			.map(|i| format!("{}<br>Degree: {}", graph.name(i), graph.degree(i)))
			.collect(),
		colors: communities.iter().map(|&c| palette[c].clone()).collect(),
		marker: MarkerStyle::default(),
	};

	Figure {
		edges,
		edge_style: LineStyle::default(),
		nodes,
		layout_options: LayoutOptions::default(),
	}
}

/// The "nothing selected" placeholder: zero markers, zero segments, and the
/// same hidden-axes styling as every other figure. Deterministic.
pub fn empty_figure() -> Figure {
	Figure {
		edges: Vec::new(),
		edge_style: LineStyle::default(),
		nodes: NodeTrace {
			x: Vec::new(),
			y: Vec::new(),
			text: Vec::new(),
			hover_text: Vec::new(),
			colors: Vec::new(),
			marker: MarkerStyle::default(),
		},
		layout_options: LayoutOptions::default(),
	}
}
