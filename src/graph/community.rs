//! Community detection by greedy multilevel modularity optimization.
//!
//! The classic two-phase scheme: a local-move pass greedily reassigns nodes
//! to the neighboring community with the best modularity gain until nothing
//! improves, then communities collapse into super-nodes (intra-community
//! weight becoming self-loops) and the pass repeats on the coarser graph.
//! Levels stop when a pass moves no node; the surviving partition is the
//! modularity maximum over the hierarchy.

use std::collections::HashMap;

use crate::graph::Graph;

/// Working graph for one level of the hierarchy. `adj` holds every
/// inter-node edge in both endpoint lists; self-loop weight lives in
/// `loops` (counted twice in a node's strength, like a doubled stub).
struct LevelGraph {
	adj: Vec<Vec<(usize, f64)>>,
	loops: Vec<f64>,
}

impl LevelGraph {
	fn strength(&self, node: usize) -> f64 {
		self.adj[node].iter().map(|&(_, w)| w).sum::<f64>() + 2.0 * self.loops[node]
	}
}

/// Assign every node of `graph` to exactly one community.
///
/// Returns one community id per node index, compacted to `0..k` in order of
/// first appearance. Isolated nodes end up in singleton communities; an
/// edge-free graph partitions into all singletons. Tied moves resolve
/// arbitrarily, so equally-good partitions may differ between calls.
pub fn communities(graph: &Graph) -> Vec<usize> {
	let n = graph.node_count();
	if n == 0 || graph.edge_count() == 0 {
		return (0..n).collect();
	}

	let mut level = LevelGraph {
		adj: {
			let mut adj = vec![Vec::new(); n];
			for &(u, v) in graph.edges() {
				if u != v {
					adj[u].push((v, 1.0));
					adj[v].push((u, 1.0));
				}
			}
			adj
		},
		loops: {
			let mut loops = vec![0.0; n];
			for &(u, v) in graph.edges() {
				if u == v {
					loops[u] += 1.0;
				}
			}
			loops
		},
	};

	// Twice the total edge weight; invariant across levels.
	let m2: f64 = (0..n).map(|i| level.strength(i)).sum();

	let mut node_to_comm: Vec<usize> = (0..n).collect();
	loop {
		let (assignment, moved) = local_move(&level, m2);
		if !moved {
			break;
		}
		let (coarser, compact) = aggregate(&level, &assignment);
		for c in &mut node_to_comm {
			*c = compact[*c];
		}

		// A pass that moved nodes without shrinking the graph would repeat
		// itself forever on the same-size level; stop instead.
		if coarser.adj.len() == level.adj.len() {
			break;
		}
		level = coarser;
	}

	compact_ids(node_to_comm)
}

/// One local-move phase: sweep nodes repeatedly, each time reassigning the
/// node to the adjacent community with the largest modularity gain (staying
/// put counts as a candidate). Returns the node -> community assignment and
/// whether any node moved at all.
fn local_move(g: &LevelGraph, m2: f64) -> (Vec<usize>, bool) {
	let n = g.adj.len();
	let strength: Vec<f64> = (0..n).map(|i| g.strength(i)).collect();
	let mut comm: Vec<usize> = (0..n).collect();
	let mut tot = strength.clone();

	let mut moved_any = false;
	let mut improved = true;
	while improved {
		improved = false;
		for i in 0..n {
			let current = comm[i];

			// Edge weight from i into each adjacent community.
			let mut links: HashMap<usize, f64> = HashMap::new();
			for &(j, w) in &g.adj[i] {
				*links.entry(comm[j]).or_insert(0.0) += w;
			}

			// Gain comparison with i lifted out of its community; the
			// shared k_i^2/m2 term cancels between candidates.
			tot[current] -= strength[i];
			let mut best = current;
			let mut best_gain =
				links.get(&current).copied().unwrap_or(0.0) - tot[current] * strength[i] / m2;
			for (&c, &k_in) in &links {
				if c == current {
					continue;
				}
				let gain = k_in - tot[c] * strength[i] / m2;
				if gain > best_gain + f64::EPSILON {
					best_gain = gain;
					best = c;
				}
			}
			tot[best] += strength[i];

			if best != current {
				comm[i] = best;
				improved = true;
				moved_any = true;
			}
		}
	}

	(comm, moved_any)
}

/// Collapse each community into a super-node. Returns the coarser graph and
/// the community -> super-node compaction, indexed by fine-level node.
fn aggregate(g: &LevelGraph, comm: &[usize]) -> (LevelGraph, Vec<usize>) {
	let compact = compact_ids(comm.to_vec());
	let k = compact.iter().copied().max().map_or(0, |m| m + 1);

	let mut loops = vec![0.0; k];
	let mut weights: HashMap<(usize, usize), f64> = HashMap::new();
	for i in 0..g.adj.len() {
		loops[compact[i]] += g.loops[i];
		for &(j, w) in &g.adj[i] {
			if i < j {
				let (a, b) = (compact[i], compact[j]);
				if a == b {
					loops[a] += w;
				} else {
					*weights.entry((a.min(b), a.max(b))).or_insert(0.0) += w;
				}
			}
		}
	}

	let mut adj = vec![Vec::new(); k];
	for (&(a, b), &w) in &weights {
		adj[a].push((b, w));
		adj[b].push((a, w));
	}

	(LevelGraph { adj, loops }, compact)
}

/// Renumber arbitrary ids to `0..k`, ordered by first appearance.
fn compact_ids(mut ids: Vec<usize>) -> Vec<usize> {
	let mut remap: HashMap<usize, usize> = HashMap::new();
	for id in &mut ids {
		let next = remap.len();
		*id = *remap.entry(*id).or_insert(next);
	}
	ids
}

#[cfg(test)]
mod tests {
	use super::*;

	fn named(n: usize) -> Vec<String> {
		(0..n).map(|i| format!("Node-{i}")).collect()
	}

	#[test]
	fn every_node_assigned_exactly_once() {
		let mut g = Graph::new(named(6));
		g.add_edge(0, 1);
		g.add_edge(2, 3);
		g.add_edge(4, 5);
		let comm = communities(&g);
		assert_eq!(comm.len(), 6);
	}

	#[test]
	fn edge_free_graph_is_all_singletons() {
		let g = Graph::new(named(5));
		assert_eq!(communities(&g), vec![0, 1, 2, 3, 4]);
	}

	#[test]
	fn single_node_is_one_singleton() {
		let g = Graph::new(named(1));
		assert_eq!(communities(&g), vec![0]);
	}

	#[test]
	fn bridged_triangles_split_in_two() {
		let mut g = Graph::new(named(6));
		g.add_edge(0, 1);
		g.add_edge(1, 2);
		g.add_edge(0, 2);
		g.add_edge(3, 4);
		g.add_edge(4, 5);
		g.add_edge(3, 5);
		g.add_edge(2, 3);
		let comm = communities(&g);
		assert_eq!(comm[0], comm[1]);
		assert_eq!(comm[1], comm[2]);
		assert_eq!(comm[3], comm[4]);
		assert_eq!(comm[4], comm[5]);
		assert_ne!(comm[0], comm[3]);
	}

	#[test]
	fn isolated_node_stays_singleton() {
		let mut g = Graph::new(named(4));
		g.add_edge(0, 1);
		g.add_edge(1, 2);
		g.add_edge(0, 2);
		let comm = communities(&g);
		assert_ne!(comm[3], comm[0]);
	}

	#[test]
	fn ids_are_compact_from_zero() {
		let mut g = Graph::new(named(6));
		g.add_edge(0, 1);
		g.add_edge(1, 2);
		g.add_edge(0, 2);
		g.add_edge(3, 4);
		g.add_edge(4, 5);
		g.add_edge(3, 5);
		let comm = communities(&g);
		let max = comm.iter().copied().max().unwrap();
		for id in 0..=max {
			assert!(comm.contains(&id), "community id {id} unused");
		}
		assert_eq!(comm[0], 0, "ids ordered by first appearance");
	}
}
