//! Full-viewport gradient layers behind the dashboard.

use leptos::prelude::*;

use super::palette::{TimeOfDay, base_gradient, overlay_gradient};
use crate::types::WeatherCondition;

const LAYER_STYLE: &str = "position: absolute; inset: 0;";

/// Local time of day from the browser clock.
pub fn local_time_of_day() -> TimeOfDay {
	TimeOfDay::from_hour(js_sys::Date::new_0().get_hours())
}

/// Sky gradient for the time of day with a condition tint on top.
#[component]
pub fn KineticBackground(
	#[prop(into)] condition: Signal<WeatherCondition>,
	#[prop(into)] time_of_day: Signal<TimeOfDay>,
) -> impl IntoView {
	let base = move || {
		format!(
			"{LAYER_STYLE} background-image: {};",
			base_gradient(time_of_day.get()).to_css()
		)
	};
	let overlay = move || {
		format!(
			"{LAYER_STYLE} background-image: {};",
			overlay_gradient(condition.get()).to_css()
		)
	};

	view! {
		<div class="kinetic-background" style="position: fixed; inset: 0; z-index: -10;">
			<div class="kinetic-base" style=base />
			<div class="kinetic-overlay" style=overlay />
		</div>
	}
}
