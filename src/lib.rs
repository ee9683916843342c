//! netlens: interactive network visualization core.
//!
//! Generates a random graph once per session, partitions it into
//! communities, computes a force-directed layout, and builds declarative
//! render-ready figures for two linked views: the full graph, and the
//! closed 1-hop neighborhood of whichever node was clicked. The renderer,
//! web server, and transport are external collaborators; the boundary is
//! a serialized [`Figure`] going out and a [`ClickEvent`] coming in.

use log::info;

pub mod error;
pub mod figure;
pub mod graph;
pub mod session;

pub use error::{Error, Result};
pub use figure::{ClickEvent, Figure};
pub use graph::Graph;
pub use session::{Session, SessionConfig};

/// Initialize logging. Safe to call more than once; later calls are no-ops.
pub fn init_logging() {
	let _ = env_logger::try_init();
	info!("netlens: logging initialized");
}
