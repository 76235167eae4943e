//! Weather snapshot structures supplied by the surrounding application.

use std::fmt;

use serde::Deserialize;

use crate::components::kinetic_background::TimeOfDay;

/// Condition category driving particles and background overlays.
///
/// Unrecognised strings map to [`WeatherCondition::Unknown`] rather than failing,
/// so a provider introducing new categories only disables the effects. A
/// `null` condition is treated the same way.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "Option<String>")]
pub enum WeatherCondition {
	/// Clear sky.
	Sunny,
	/// Overcast; drifting motes.
	Cloudy,
	/// Rain streaks.
	Rainy,
	/// Mixed sun and cloud.
	PartlyCloudy,
	/// Falling flakes.
	Snowy,
	/// Light rain, drawn as flakes.
	Drizzle,
	/// Windy.
	Windy,
	/// Thunderstorms.
	Stormy,
	/// Anything unrecognised or missing. Never animates.
	#[default]
	Unknown,
}

impl WeatherCondition {
	/// Canonical lowercase name, as used in the snapshot JSON.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Sunny => "sunny",
			Self::Cloudy => "cloudy",
			Self::Rainy => "rainy",
			Self::PartlyCloudy => "partly-cloudy",
			Self::Snowy => "snowy",
			Self::Drizzle => "drizzle",
			Self::Windy => "windy",
			Self::Stormy => "stormy",
			Self::Unknown => "unknown",
		}
	}
}

impl From<&str> for WeatherCondition {
	fn from(value: &str) -> Self {
		match value.trim().to_ascii_lowercase().as_str() {
			"sunny" => Self::Sunny,
			"cloudy" => Self::Cloudy,
			"rainy" => Self::Rainy,
			"partly-cloudy" => Self::PartlyCloudy,
			"snowy" => Self::Snowy,
			"drizzle" => Self::Drizzle,
			"windy" => Self::Windy,
			"stormy" => Self::Stormy,
			_ => Self::Unknown,
		}
	}
}

impl From<Option<String>> for WeatherCondition {
	fn from(value: Option<String>) -> Self {
		value.as_deref().map_or(Self::Unknown, Self::from)
	}
}

impl fmt::Display for WeatherCondition {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// One entry of the hourly series.
///
/// Only `temperature` is transformed by the visuals; everything else is
/// displayed as-is.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct HourSample {
	/// Display label for the hour (e.g. "3 PM").
	#[serde(default, alias = "time")]
	pub label: String,
	/// Temperature in whatever unit the provider chose.
	#[serde(alias = "temp")]
	pub temperature: f64,
	/// Chance of precipitation, 0..=100.
	#[serde(default, alias = "precipitation", alias = "precipitationPct")]
	pub precipitation_pct: f64,
	/// Wind speed, displayed as-is.
	#[serde(default, alias = "wind", alias = "windSpeed")]
	pub wind_speed: f64,
	/// UV index, 0..=11+.
	#[serde(default, alias = "uv", alias = "uvIndex")]
	pub uv_index: f64,
	/// Condition for this hour.
	#[serde(default)]
	pub condition: WeatherCondition,
}

/// Highest UV index shown as a full bar.
const UV_SCALE_MAX: f64 = 11.0;

impl HourSample {
	/// Width of the UV bar as a percentage of its track.
	pub fn uv_fill_percent(&self) -> f64 {
		(self.uv_index / UV_SCALE_MAX * 100.0).clamp(0.0, 100.0)
	}
}

/// Read-only weather data consumed by the visual components.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct WeatherSnapshot {
	/// Current condition.
	#[serde(default)]
	pub condition: WeatherCondition,
	/// Chronological hourly samples.
	#[serde(default, alias = "hourlySeries")]
	pub hourly: Vec<HourSample>,
	/// Explicit time of day; when absent the local clock decides.
	#[serde(default, alias = "timeOfDay")]
	pub time_of_day: Option<TimeOfDay>,
}

impl WeatherSnapshot {
	/// Temperatures of the hourly series, in order.
	pub fn temperatures(&self) -> Vec<f64> {
		self.hourly.iter().map(|h| h.temperature).collect()
	}
}
