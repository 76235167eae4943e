//! kinetic-weather: animated visuals for a live weather dashboard.
//!
//! This crate provides WASM components that turn a weather snapshot into
//! condition-driven particles, an hourly temperature curve and a time-of-day
//! gradient background.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
pub mod types;

pub use components::kinetic_background::{KineticBackground, TimeOfDay};
pub use components::temperature_curve::{CurveLayout, HourlyTimeline, TemperatureCurve};
pub use components::weather_particles::{ParticleSystem, WeatherParticles, pool_size};
pub use types::{HourSample, WeatherCondition, WeatherSnapshot};

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("kinetic-weather: logging initialized");
}

/// Parses a snapshot from JSON, logging and returning `None` on malformed input.
pub fn parse_snapshot(json_text: &str) -> Option<WeatherSnapshot> {
	match serde_json::from_str::<WeatherSnapshot>(json_text) {
		Ok(data) => {
			info!(
				"kinetic-weather: loaded '{}' with {} hourly samples",
				data.condition,
				data.hourly.len()
			);
			Some(data)
		}
		Err(e) => {
			warn!("kinetic-weather: failed to parse weather data: {}", e);
			None
		}
	}
}

/// Load the weather snapshot from a script element with id="weather-data".
/// Expected format: JSON with { condition, hourly: [...], timeOfDay? }
fn load_weather_snapshot() -> Option<WeatherSnapshot> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("weather-data")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;
	parse_snapshot(&json_text)
}

/// Main application component.
/// Loads the snapshot from the DOM and layers background, particles and timeline.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let snapshot = load_weather_snapshot().unwrap_or_default();
	let time_of_day = snapshot
		.time_of_day
		.unwrap_or_else(components::kinetic_background::local_time_of_day);
	let condition = snapshot.condition;
	let hourly = snapshot.hourly;

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="Weather" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<div class="weather-dashboard">
			<KineticBackground condition=condition time_of_day=time_of_day />
			<WeatherParticles condition=condition />
			<main class="weather-content" style="position: relative; z-index: 10;">
				<HourlyTimeline hourly=hourly />
			</main>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn malformed_snapshot_is_rejected() {
		assert!(parse_snapshot("{ not json").is_none());
		assert!(parse_snapshot(r#"{ "hourly": "soon" }"#).is_none());
	}

	#[test]
	fn snapshot_feeds_the_engines() {
		let snapshot = parse_snapshot(
			r#"{ "condition": "rainy", "hourly": [{ "temp": 60 }, { "temp": 70 }] }"#,
		)
		.unwrap();

		assert_eq!(pool_size(snapshot.condition), 150);
		let curve = TemperatureCurve::new(&snapshot.temperatures(), &CurveLayout::default());
		assert_eq!(curve.percents, vec![0.0, 100.0]);
	}

	#[test]
	fn null_condition_degrades_to_idle() {
		let snapshot =
			parse_snapshot(r#"{ "condition": null, "hourly": [{ "temp": 60 }, { "temp": 70 }] }"#)
				.unwrap();

		assert_eq!(snapshot.condition, WeatherCondition::Unknown);
		assert_eq!(pool_size(snapshot.condition), 0);
		assert_eq!(snapshot.hourly.len(), 2);
	}
}
