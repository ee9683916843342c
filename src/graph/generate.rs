//! Random graph generation.

use std::collections::HashSet;

use rand::{Rng, thread_rng};

use crate::error::{Error, Result};
use crate::graph::Graph;

/// Generate a uniform random simple graph with exactly `n` nodes and `m`
/// edges (Erdos-Renyi G(n, m)): `m` distinct unordered pairs drawn uniformly
/// from all possible pairs, no self-loops, no connectivity guarantee.
///
/// Node `i` is labeled `"Node-{i}"`. Unseeded: repeated calls produce
/// different graphs.
pub fn erdos_renyi(n: usize, m: usize) -> Result<Graph> {
	if n < 1 {
		return Err(Error::InvalidParameters(
			"node count must be at least 1".into(),
		));
	}
	let max_edges = n * (n - 1) / 2;
	if m > max_edges {
		return Err(Error::InvalidParameters(format!(
			"{m} edges requested but {n} nodes admit at most {max_edges}"
		)));
	}

	let mut graph = Graph::new((0..n).map(|i| format!("Node-{i}")).collect());

	// Rejection-sample distinct unordered pairs.
	let mut rng = thread_rng();
	let mut seen: HashSet<(usize, usize)> = HashSet::with_capacity(m);
	while seen.len() < m {
		let u = rng.gen_range(0..n);
		let v = rng.gen_range(0..n);
		if u == v {
			continue;
		}
		let pair = (u.min(v), u.max(v));
		if seen.insert(pair) {
			graph.add_edge(pair.0, pair.1);
		}
	}

	Ok(graph)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn counts_match_request() {
		let g = erdos_renyi(50, 100).unwrap();
		assert_eq!(g.node_count(), 50);
		assert_eq!(g.edge_count(), 100);
	}

	#[test]
	fn labels_are_unique_and_indexed() {
		let g = erdos_renyi(10, 5).unwrap();
		for i in 0..10 {
			assert_eq!(g.name(i), format!("Node-{i}"));
		}
	}

	#[test]
	fn edges_are_simple_and_distinct() {
		let g = erdos_renyi(20, 50).unwrap();
		let mut seen = HashSet::new();
		for &(u, v) in g.edges() {
			assert_ne!(u, v, "self-loop generated");
			assert!(seen.insert((u.min(v), u.max(v))), "parallel edge generated");
		}
	}

	#[test]
	fn saturated_graph_is_allowed() {
		let g = erdos_renyi(5, 10).unwrap();
		assert_eq!(g.edge_count(), 10);
	}

	#[test]
	fn rejects_zero_nodes() {
		assert!(matches!(
			erdos_renyi(0, 0),
			Err(Error::InvalidParameters(_))
		));
	}

	#[test]
	fn rejects_too_many_edges() {
		assert!(matches!(
			erdos_renyi(5, 11),
			Err(Error::InvalidParameters(_))
		));
	}
}
