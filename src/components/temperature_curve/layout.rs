//! Graph geometry for the hourly temperature curve.
//!
//! # Coordinate Spaces
//!
//! - **Column space**: hour cards are laid out left to right, each
//!   `point_width` wide with `gap` between them. Column `i` starts at
//!   `i * (point_width + gap)`.
//! - **Graph space**: SVG user units. The origin is the top-left corner of the
//!   graph strip, `y` grows downward, and the strip is `graph_height` tall.
//!   `left_margin` shifts the curve so its vertices sit under the point markers.

/// Fixed layout shared by the point markers and the connecting path.
#[derive(Clone, Debug, PartialEq)]
pub struct CurveLayout {
	/// Width of one hour column in pixels.
	pub point_width: f64,
	/// Gap between hour columns in pixels.
	pub gap: f64,
	/// Horizontal offset of the first vertex.
	pub left_margin: f64,
	/// Height of the graph strip; 100% maps to `y = 0`, 0% to `y = graph_height`.
	pub graph_height: f64,
}

impl Default for CurveLayout {
	fn default() -> Self {
		Self {
			point_width: 80.0,
			gap: 24.0,
			left_margin: 40.0,
			graph_height: 96.0,
		}
	}
}

impl CurveLayout {
	/// Horizontal distance between consecutive samples.
	pub fn spacing(&self) -> f64 {
		self.point_width + self.gap
	}

	/// Graph height with non-positive values collapsed to zero.
	pub fn height(&self) -> f64 {
		self.graph_height.max(0.0)
	}

	/// Width the SVG needs to show `samples` vertices.
	pub fn graph_width(&self, samples: usize) -> f64 {
		if samples == 0 {
			return 0.0;
		}
		self.left_margin + (samples - 1) as f64 * self.spacing() + self.point_width
	}
}
