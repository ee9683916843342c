//! Force-directed 2D layout.
//!
//! Wraps the `force_graph` physics simulation (spring attraction along
//! edges, charge repulsion between all node pairs) as a batch pass: seed
//! positions on a circle, step the simulation a fixed number of times, read
//! coordinates back. The embedding is approximate by nature; callers get
//! one coordinate pair per node and no reproducibility promises beyond
//! that.

use std::collections::HashMap;
use std::f64::consts::PI;

use force_graph::{EdgeData, ForceGraph, NodeData, SimulationParameters};
use log::warn;

use crate::graph::Graph;

/// Tuning for one layout pass.
#[derive(Clone, Debug)]
pub struct LayoutParams {
	/// Simulation steps before positions are read back.
	pub iterations: usize,
	/// Simulated seconds per step.
	pub time_step: f32,
	/// Radius of the circle the nodes are seeded on, centered at the
	/// origin. Also the fallback placement if the simulation diverges.
	pub seed_radius: f32,
}

impl Default for LayoutParams {
	fn default() -> Self {
		Self {
			iterations: 300,
			time_step: 0.016,
			seed_radius: 100.0,
		}
	}
}

/// Compute a force-directed embedding with default parameters.
///
/// Returns exactly one `(x, y)` pair per node index. Must be recomputed
/// whenever the node set changes; positions from one graph are meaningless
/// for another.
pub fn force_layout(graph: &Graph) -> Vec<(f64, f64)> {
	force_layout_with(graph, &LayoutParams::default())
}

/// [`force_layout`] with explicit parameters.
///
/// Degenerate inputs short-circuit: an empty graph yields an empty layout
/// and a single node sits at the origin. If the simulation produces a
/// non-finite coordinate the initial circle placement is returned instead,
/// so callers always receive usable positions.
pub fn force_layout_with(graph: &Graph, params: &LayoutParams) -> Vec<(f64, f64)> {
	let n = graph.node_count();
	if n == 0 {
		return Vec::new();
	}
	if n == 1 {
		return vec![(0.0, 0.0)];
	}

	let mut sim: ForceGraph = ForceGraph::new(SimulationParameters {
		force_charge: 150.0,
		force_spring: 0.05,
		force_max: 100.0,
		node_speed: 3000.0,
		damping_factor: 0.9,
	});

	let seeds = circle_positions(n, params.seed_radius);
	let mut handles = Vec::with_capacity(n);
	let mut handle_to_node = HashMap::new();
	for (i, &(x, y)) in seeds.iter().enumerate() {
		let handle = sim.add_node(NodeData {
			x,
			y,
			mass: 10.0,
			is_anchor: false,
			user_data: (),
		});
		handle_to_node.insert(handle, i);
		handles.push(handle);
	}
	for &(u, v) in graph.edges() {
		if u != v {
			sim.add_edge(handles[u], handles[v], EdgeData::default());
		}
	}

	for _ in 0..params.iterations {
		sim.update(params.time_step);
	}

	let mut positions = vec![(0.0f64, 0.0f64); n];
	sim.visit_nodes(|node| {
		let i = handle_to_node[&node.index()];
		positions[i] = (node.x() as f64, node.y() as f64);
	});

	if positions
		.iter()
		.any(|&(x, y)| !x.is_finite() || !y.is_finite())
	{
		warn!("layout diverged on a {n}-node graph, using circle placement");
		return seeds
			.iter()
			.map(|&(x, y)| (f64::from(x), f64::from(y)))
			.collect();
	}
	positions
}

fn circle_positions(n: usize, radius: f32) -> Vec<(f32, f32)> {
	(0..n)
		.map(|i| {
			let angle = (i as f64) * 2.0 * PI / n as f64;
			(
				(f64::from(radius) * angle.cos()) as f32,
				(f64::from(radius) * angle.sin()) as f32,
			)
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn named(n: usize) -> Vec<String> {
		(0..n).map(|i| format!("Node-{i}")).collect()
	}

	#[test]
	fn one_position_per_node() {
		let mut g = Graph::new(named(8));
		g.add_edge(0, 1);
		g.add_edge(1, 2);
		g.add_edge(2, 3);
		let layout = force_layout(&g);
		assert_eq!(layout.len(), 8);
		assert!(layout.iter().all(|&(x, y)| x.is_finite() && y.is_finite()));
	}

	#[test]
	fn empty_graph_yields_empty_layout() {
		let g = Graph::new(Vec::new());
		assert!(force_layout(&g).is_empty());
	}

	#[test]
	fn single_node_sits_at_origin() {
		let g = Graph::new(named(1));
		assert_eq!(force_layout(&g), vec![(0.0, 0.0)]);
	}

	#[test]
	fn edge_free_nodes_do_not_overlap() {
		let g = Graph::new(named(6));
		let layout = force_layout(&g);
		for i in 0..6 {
			for j in (i + 1)..6 {
				assert_ne!(layout[i], layout[j], "nodes {i} and {j} coincide");
			}
		}
	}

	#[test]
	fn fewer_iterations_still_cover_every_node() {
		let mut g = Graph::new(named(4));
		g.add_edge(0, 1);
		g.add_edge(2, 3);
		let params = LayoutParams {
			iterations: 10,
			..LayoutParams::default()
		};
		assert_eq!(force_layout_with(&g, &params).len(), 4);
	}
}
