//! Error types shared across the crate.

use thiserror::Error;

/// Convenience alias used by every fallible operation in this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced to callers of the graph pipeline.
#[derive(Error, Debug)]
pub enum Error {
	/// Graph generation was asked for an impossible node/edge combination.
	/// Fatal at startup: without a graph there is no session.
	#[error("invalid graph parameters: {0}")]
	InvalidParameters(String),

	/// A click event referenced a node index outside the session graph.
	/// The render request fails as a whole; the previous view stays up.
	#[error("selected node {index} is out of range (graph has {nodes} nodes)")]
	InvalidSelection {
		/// Index extracted from the click event.
		index: usize,
		/// Node count of the graph the index was resolved against.
		nodes: usize,
	},
}
