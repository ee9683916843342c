//! Render-ready figure descriptions and their construction.

mod build;
mod color;
mod types;

pub use build::{empty_figure, network_figure};
pub use color::Color;
pub use types::{
	AxisOptions, ClickEvent, ClickPoint, EdgeSegment, Figure, LayoutOptions, LineStyle,
	MarkerStyle, NodeTrace,
};
