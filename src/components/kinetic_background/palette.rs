//! Background gradients keyed by time of day and weather condition.

use serde::Deserialize;

use crate::components::color::Color;
use crate::types::WeatherCondition;

/// Coarse part of the day used to pick the base sky gradient.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeOfDay {
	/// 05:00 to 06:59.
	Sunrise,
	/// 07:00 to 17:59.
	#[default]
	Day,
	/// 18:00 to 19:59.
	Sunset,
	/// Everything else.
	Night,
}

impl TimeOfDay {
	/// Classifies a local wall-clock hour (0..=23).
	pub fn from_hour(hour: u32) -> Self {
		match hour {
			5..=6 => Self::Sunrise,
			7..=17 => Self::Day,
			18..=19 => Self::Sunset,
			_ => Self::Night,
		}
	}
}

/// Three-stop diagonal gradient.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Gradient {
	/// Top-left stop.
	pub from: Color,
	/// Middle stop.
	pub via: Color,
	/// Bottom-right stop.
	pub to: Color,
}

impl Gradient {
	const fn new(from: Color, via: Color, to: Color) -> Self {
		Self { from, via, to }
	}

	/// CSS `background-image` value.
	pub fn to_css(self) -> String {
		format!(
			"linear-gradient(to bottom right, {}, {}, {})",
			self.from.to_css(),
			self.via.to_css(),
			self.to.to_css()
		)
	}
}

/// Sky gradient for a time of day.
pub fn base_gradient(time: TimeOfDay) -> Gradient {
	match time {
		TimeOfDay::Day => Gradient::new(
			Color::rgb(96, 165, 250),  // Blue
			Color::rgb(103, 232, 249), // Cyan
			Color::rgb(191, 219, 254), // Pale blue
		),
		TimeOfDay::Night => Gradient::new(
			Color::rgb(15, 23, 42),  // Deep slate
			Color::rgb(88, 28, 135), // Purple
			Color::rgb(30, 41, 59),  // Slate
		),
		TimeOfDay::Sunrise => Gradient::new(
			Color::rgb(251, 146, 60),  // Orange
			Color::rgb(244, 114, 182), // Pink
			Color::rgb(192, 132, 252), // Lilac
		),
		TimeOfDay::Sunset => Gradient::new(
			Color::rgb(249, 115, 22),  // Deep orange
			Color::rgb(248, 113, 113), // Coral
			Color::rgb(168, 85, 247),  // Violet
		),
	}
}

/// Translucent tint laid over the sky for a condition.
///
/// Conditions without a tint of their own use the partly-cloudy one.
pub fn overlay_gradient(condition: WeatherCondition) -> Gradient {
	match condition {
		WeatherCondition::Sunny => Gradient::new(
			Color::rgba(250, 204, 21, 0.2),
			Color::rgba(253, 186, 116, 0.1),
			Color::TRANSPARENT,
		),
		WeatherCondition::Rainy => Gradient::new(
			Color::rgba(71, 85, 105, 0.3),
			Color::rgba(30, 58, 138, 0.2),
			Color::rgba(51, 65, 85, 0.3),
		),
		WeatherCondition::Cloudy => Gradient::new(
			Color::rgba(107, 114, 128, 0.2),
			Color::rgba(148, 163, 184, 0.1),
			Color::rgba(75, 85, 99, 0.2),
		),
		WeatherCondition::Stormy => Gradient::new(
			Color::rgba(30, 41, 59, 0.4),
			Color::rgba(88, 28, 135, 0.3),
			Color::rgba(15, 23, 42, 0.4),
		),
		_ => Gradient::new(
			Color::rgba(147, 197, 253, 0.2),
			Color::rgba(203, 213, 225, 0.1),
			Color::rgba(96, 165, 250, 0.2),
		),
	}
}
