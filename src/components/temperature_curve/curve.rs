//! Maps an hourly temperature series onto a drawable curve.
//!
//! The mapping is pure: the same series and layout always yield bit-identical
//! percentages, vertices and path commands.

use std::fmt::Write as _;

use super::layout::CurveLayout;

/// Vertical position used for every sample of a flat series.
pub const FLAT_PERCENT: f64 = 50.0;

/// A single path command in graph space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
	/// Start a new subpath at `(x, y)`.
	MoveTo(f64, f64),
	/// Straight segment to `(x, y)`.
	LineTo(f64, f64),
}

/// Normalized temperatures, their graph-space vertices and the path joining them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TemperatureCurve {
	/// Position of each sample between the series min (0) and max (100).
	pub percents: Vec<f64>,
	/// Graph-space vertex of each sample, in series order.
	pub points: Vec<(f64, f64)>,
	/// `MoveTo` the first vertex, then `LineTo` each following vertex.
	pub commands: Vec<PathCommand>,
}

/// Percent of the series range each sample sits at.
///
/// A flat series (including a single sample) maps every sample to
/// [`FLAT_PERCENT`] instead of dividing by zero.
///
/// Operands are halved before subtracting so the range of any finite series
/// stays finite, even when `max - min` would exceed `f64::MAX`.
pub fn normalize(temperatures: &[f64]) -> Vec<f64> {
	let Some(&first) = temperatures.first() else {
		return Vec::new();
	};
	let (min, max) = temperatures
		.iter()
		.fold((first, first), |(lo, hi), &t| (lo.min(t), hi.max(t)));
	let (lo, hi) = (min / 2.0, max / 2.0);
	let range = hi - lo;

	if range == 0.0 || !range.is_finite() {
		return vec![FLAT_PERCENT; temperatures.len()];
	}
	temperatures
		.iter()
		.map(|&t| ((t / 2.0 - lo) / range * 100.0).clamp(0.0, 100.0))
		.collect()
}

impl TemperatureCurve {
	/// Maps `temperatures` onto `layout`, one vertex per sample.
	pub fn new(temperatures: &[f64], layout: &CurveLayout) -> Self {
		let percents = normalize(temperatures);
		let height = layout.height();

		let points: Vec<(f64, f64)> = percents
			.iter()
			.enumerate()
			.map(|(i, pct)| {
				let x = i as f64 * layout.spacing() + layout.left_margin;
				let y = height - (pct / 100.0) * height;
				(x, y)
			})
			.collect();

		let commands = points
			.iter()
			.enumerate()
			.map(|(i, &(x, y))| {
				if i == 0 {
					PathCommand::MoveTo(x, y)
				} else {
					PathCommand::LineTo(x, y)
				}
			})
			.collect();

		Self {
			percents,
			points,
			commands,
		}
	}

	/// True for an empty series.
	pub fn is_empty(&self) -> bool {
		self.points.is_empty()
	}

	/// SVG path data, e.g. `"M 40 48 L 144 0"`.
	pub fn to_svg_path(&self) -> String {
		let mut d = String::new();
		for cmd in &self.commands {
			if !d.is_empty() {
				d.push(' ');
			}
			let _ = match cmd {
				PathCommand::MoveTo(x, y) => write!(d, "M {} {}", x, y),
				PathCommand::LineTo(x, y) => write!(d, "L {} {}", x, y),
			};
		}
		d
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const SERIES: [f64; 10] = [72.0, 74.0, 76.0, 78.0, 77.0, 75.0, 73.0, 70.0, 68.0, 66.0];

	#[test]
	fn worked_example() {
		let curve = TemperatureCurve::new(&SERIES, &CurveLayout::default());

		assert_eq!(curve.percents[3], 100.0);
		assert_eq!(curve.percents[9], 0.0);
		assert!((curve.percents[8] - 200.0 / 12.0).abs() < 1e-9);
		assert_eq!(curve.points[3], (3.0 * 104.0 + 40.0, 0.0));
		assert_eq!(curve.points[9], (9.0 * 104.0 + 40.0, 96.0));
	}

	#[test]
	fn percents_stay_in_bounds() {
		let curve = TemperatureCurve::new(&[-12.5, 3.0, 0.0, 41.25, -40.0], &CurveLayout::default());
		assert!(curve.percents.iter().all(|p| (0.0..=100.0).contains(p)));
		assert_eq!(curve.percents[4], 0.0);
		assert_eq!(curve.percents[3], 100.0);
	}

	#[test]
	fn extreme_range_does_not_overflow() {
		let curve = TemperatureCurve::new(&[-1e308, 0.0, 1e308], &CurveLayout::default());
		assert_eq!(curve.percents, vec![0.0, 50.0, 100.0]);
		assert!(curve.points.iter().all(|&(_, y)| y.is_finite()));
		assert_eq!(curve.to_svg_path(), "M 40 96 L 144 48 L 248 0");
	}

	#[test]
	fn path_visits_every_point_in_order() {
		let curve = TemperatureCurve::new(&SERIES, &CurveLayout::default());

		assert_eq!(curve.points.len(), SERIES.len());
		assert_eq!(curve.commands.len(), SERIES.len());
		assert_eq!(
			curve.commands[0],
			PathCommand::MoveTo(curve.points[0].0, curve.points[0].1)
		);
		for (cmd, &(x, y)) in curve.commands[1..].iter().zip(&curve.points[1..]) {
			assert_eq!(*cmd, PathCommand::LineTo(x, y));
		}
	}

	#[test]
	fn mapping_is_deterministic() {
		let layout = CurveLayout::default();
		let a = TemperatureCurve::new(&SERIES, &layout);
		let b = TemperatureCurve::new(&SERIES, &layout);
		for (pa, pb) in a.points.iter().zip(&b.points) {
			assert_eq!(pa.0.to_bits(), pb.0.to_bits());
			assert_eq!(pa.1.to_bits(), pb.1.to_bits());
		}
		assert_eq!(a.to_svg_path(), b.to_svg_path());
	}

	#[test]
	fn empty_series() {
		let curve = TemperatureCurve::new(&[], &CurveLayout::default());
		assert!(curve.is_empty());
		assert!(curve.percents.is_empty());
		assert!(curve.commands.is_empty());
		assert_eq!(curve.to_svg_path(), "");
	}

	#[test]
	fn single_sample() {
		let curve = TemperatureCurve::new(&[72.0], &CurveLayout::default());
		assert_eq!(curve.percents, vec![FLAT_PERCENT]);
		assert_eq!(curve.commands, vec![PathCommand::MoveTo(40.0, 48.0)]);
		assert_eq!(curve.to_svg_path(), "M 40 48");
	}

	#[test]
	fn flat_series_does_not_divide_by_zero() {
		let curve = TemperatureCurve::new(&[55.0; 4], &CurveLayout::default());
		assert_eq!(curve.percents, vec![FLAT_PERCENT; 4]);
		assert!(curve.points.iter().all(|&(_, y)| y == 48.0));
	}

	#[test]
	fn svg_path_format() {
		let curve = TemperatureCurve::new(&[60.0, 70.0], &CurveLayout::default());
		assert_eq!(curve.to_svg_path(), "M 40 96 L 144 0");
	}

	#[test]
	fn degenerate_height_collapses_to_baseline() {
		let layout = CurveLayout {
			graph_height: -10.0,
			..CurveLayout::default()
		};
		let curve = TemperatureCurve::new(&SERIES, &layout);
		assert!(curve.points.iter().all(|&(_, y)| y == 0.0));
	}

	#[test]
	fn default_vertices_sit_on_hour_markers() {
		// Markers are centred in each card and lifted `pct`% up a track of
		// `graph_height`, so the curve must pass through the same spots.
		let layout = CurveLayout::default();
		let curve = TemperatureCurve::new(&SERIES, &layout);
		for (i, (&(x, y), pct)) in curve.points.iter().zip(&curve.percents).enumerate() {
			let card_centre = i as f64 * layout.spacing() + layout.point_width / 2.0;
			assert_eq!(x, card_centre);
			assert!((layout.graph_height - y - pct / 100.0 * layout.graph_height).abs() < 1e-9);
		}
	}

	#[test]
	fn graph_width_covers_last_column() {
		let layout = CurveLayout::default();
		assert_eq!(layout.graph_width(0), 0.0);
		assert_eq!(layout.graph_width(1), 120.0);
		assert_eq!(layout.graph_width(10), 40.0 + 9.0 * 104.0 + 80.0);
	}
}
