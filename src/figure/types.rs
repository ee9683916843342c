//! Declarative figure description exchanged with the rendering layer.
//!
//! The renderer is a black box that turns these structs (as JSON) into
//! pixels and hands back click payloads. Field names follow the wire
//! contract, hence the camelCase renames.

use log::warn;
use serde::{Deserialize, Serialize};

/// A complete render-ready figure: edge segments, node markers, and the
/// axis/legend styling shared by every view. Built fresh per render call
/// and never mutated afterwards.
#[derive(Clone, Debug, Serialize)]
pub struct Figure {
	/// One isolated segment per edge.
	pub edges: Vec<EdgeSegment>,
	/// Line styling shared by all segments.
	#[serde(rename = "edgeStyle")]
	pub edge_style: LineStyle,
	/// All node markers, struct-of-arrays.
	pub nodes: NodeTrace,
	/// Legend, hover, margin, and axis configuration.
	#[serde(rename = "layoutOptions")]
	pub layout_options: LayoutOptions,
}

/// One edge drawn as a separate two-point segment. The trailing `null`
/// keeps the renderer from connecting this segment to the next one.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct EdgeSegment {
	/// `[x0, x1, null]`.
	pub x: [Option<f64>; 3],
	/// `[y0, y1, null]`.
	pub y: [Option<f64>; 3],
}

/// Node markers of one figure, one array entry per node.
#[derive(Clone, Debug, Serialize)]
pub struct NodeTrace {
	/// Marker x coordinates.
	pub x: Vec<f64>,
	/// Marker y coordinates.
	pub y: Vec<f64>,
	/// Display label per marker.
	pub text: Vec<String>,
	/// Hover caption per marker: node name plus its degree in the graph
	/// being rendered.
	#[serde(rename = "hoverText")]
	pub hover_text: Vec<String>,
	/// CSS hex color per marker; nodes of one community share one color.
	pub colors: Vec<String>,
	/// Marker styling shared by all nodes.
	pub marker: MarkerStyle,
}

/// Marker styling.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct MarkerStyle {
	/// Marker diameter in renderer units.
	pub size: f64,
	/// Marker outline width.
	#[serde(rename = "lineWidth")]
	pub line_width: f64,
	/// Where the label sits relative to the marker.
	#[serde(rename = "textPosition")]
	pub text_position: &'static str,
}

impl Default for MarkerStyle {
	fn default() -> Self {
		Self {
			size: 10.0,
			line_width: 2.0,
			text_position: "top center",
		}
	}
}

/// Edge line styling.
#[derive(Clone, Debug, Serialize)]
pub struct LineStyle {
	/// Line width in renderer units.
	pub width: f64,
	/// CSS color.
	pub color: String,
}

impl Default for LineStyle {
	fn default() -> Self {
		Self {
			width: 0.5,
			color: "#888".into(),
		}
	}
}

/// Figure-level options. Every view uses the same ones: no legend,
/// closest-point hover matching, zero margins, both axes hidden.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct LayoutOptions {
	/// Legend visibility.
	#[serde(rename = "showLegend")]
	pub show_legend: bool,
	/// Hover matching mode.
	#[serde(rename = "hoverMode")]
	pub hover_mode: &'static str,
	/// Uniform margin on all four sides.
	pub margins: f64,
	/// Horizontal axis styling.
	pub xaxis: AxisOptions,
	/// Vertical axis styling.
	pub yaxis: AxisOptions,
}

impl Default for LayoutOptions {
	fn default() -> Self {
		Self {
			show_legend: false,
			hover_mode: "closest",
			margins: 0.0,
			xaxis: AxisOptions::hidden(),
			yaxis: AxisOptions::hidden(),
		}
	}
}

/// Per-axis styling.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct AxisOptions {
	/// Grid line visibility.
	#[serde(rename = "showGrid")]
	pub show_grid: bool,
	/// Zero-line visibility.
	#[serde(rename = "zeroLine")]
	pub zero_line: bool,
	/// Tick label visibility.
	#[serde(rename = "showTickLabels")]
	pub show_tick_labels: bool,
}

impl AxisOptions {
	/// Fully hidden axis: no grid, no zero-line, no tick labels.
	pub fn hidden() -> Self {
		Self {
			show_grid: false,
			zero_line: false,
			show_tick_labels: false,
		}
	}
}

/// Click payload delivered by the renderer when a marker is selected.
#[derive(Clone, Debug, Deserialize)]
pub struct ClickEvent {
	/// Selected markers; the first one identifies the clicked node.
	pub points: Vec<ClickPoint>,
}

impl ClickEvent {
	/// Parse a click payload from the renderer's JSON. A malformed payload
	/// is logged and treated as no selection.
	pub fn from_json(json: &str) -> Option<Self> {
		match serde_json::from_str(json) {
			Ok(event) => Some(event),
			Err(e) => {
				warn!("netlens: unparseable click payload: {e}");
				None
			}
		}
	}

	/// Index of the clicked node, if the payload names one. An empty
	/// `points` list means the selection was cleared.
	pub fn node_index(&self) -> Option<usize> {
		self.points.first().map(|p| p.point_index)
	}
}

/// One selected marker inside a [`ClickEvent`].
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct ClickPoint {
	/// Index of the marker within the node trace it was clicked on.
	#[serde(rename = "pointIndex")]
	pub point_index: usize,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn click_event_parses_renderer_json() {
		let ev: ClickEvent = serde_json::from_str(r#"{"points":[{"pointIndex":7}]}"#).unwrap();
		assert_eq!(ev.node_index(), Some(7));
	}

	#[test]
	fn empty_points_means_cleared_selection() {
		let ev: ClickEvent = serde_json::from_str(r#"{"points":[]}"#).unwrap();
		assert_eq!(ev.node_index(), None);
	}

	#[test]
	fn malformed_payload_reads_as_no_selection() {
		assert!(ClickEvent::from_json("not json").is_none());
		assert!(ClickEvent::from_json(r#"{"points":[{"pointIndex":2}]}"#).is_some());
	}

	#[test]
	fn edge_segment_serializes_with_null_separator() {
		let seg = EdgeSegment {
			x: [Some(1.0), Some(2.0), None],
			y: [Some(3.0), Some(4.0), None],
		};
		let json = serde_json::to_value(seg).unwrap();
		assert_eq!(json["x"], serde_json::json!([1.0, 2.0, null]));
	}
}
