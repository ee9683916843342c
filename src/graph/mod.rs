//! Graph model and the algorithms that feed the figure pipeline:
//! random generation, community detection, and force-directed layout.

mod community;
mod generate;
mod layout;
mod types;

pub use community::communities;
pub use generate::erdos_renyi;
pub use layout::{LayoutParams, force_layout, force_layout_with};
pub use types::Graph;
