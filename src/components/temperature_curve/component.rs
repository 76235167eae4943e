//! Hourly timeline: one card per hour with a temperature marker, joined by
//! an SVG curve computed from the same series.

use leptos::prelude::*;

use super::curve::TemperatureCurve;
use super::layout::CurveLayout;
use crate::types::HourSample;

const LINE_COLOR: &str = "rgba(34, 211, 238, 0.8)";

/// Height of the label row above the marker track. The curve is offset by
/// the same amount so it lines up with the markers.
const LABEL_HEIGHT: f64 = 24.0;

#[component]
fn HourCard(hour: HourSample, percent: f64, width: f64, track_height: f64) -> impl IntoView {
	let precipitation = (hour.precipitation_pct > 0.0).then(|| {
		view! { <span class="hour-precipitation">{format!("{}%", hour.precipitation_pct)}</span> }
	});

	view! {
		<div class="hour-card" style=format!("min-width: {width}px;")>
			<p class="hour-label" style=format!("height: {LABEL_HEIGHT}px; line-height: {LABEL_HEIGHT}px; margin: 0;")>
				{hour.label.clone()}
			</p>
			<div class="hour-marker-track" style=format!("position: relative; height: {track_height}px;")>
				<div
					class="hour-marker"
					style=format!(
						"position: absolute; left: 50%; bottom: {percent}%; transform: translate(-50%, 50%);",
					)
				/>
			</div>
			<p class="hour-temperature">{format!("{}°", hour.temperature)}</p>
			<div class="hour-metrics">
				{precipitation}
				<span class="hour-wind">{hour.wind_speed.to_string()}</span>
			</div>
			<div class="hour-uv">
				<div class="hour-uv-track">
					<div class="hour-uv-fill" style=format!("width: {}%;", hour.uv_fill_percent()) />
				</div>
				<p class="hour-uv-label">{format!("UV {}", hour.uv_index)}</p>
			</div>
		</div>
	}
}

/// Scrollable hourly forecast with a temperature curve over the point markers.
#[component]
pub fn HourlyTimeline(
	#[prop(into)] hourly: Signal<Vec<HourSample>>,
	#[prop(default = CurveLayout::default())] layout: CurveLayout,
) -> impl IntoView {
	let curve_layout = layout.clone();
	let curve = Signal::derive(move || {
		let temps: Vec<f64> = hourly.with(|h| h.iter().map(|s| s.temperature).collect());
		TemperatureCurve::new(&temps, &curve_layout)
	});

	let (gap, point_width, graph_height) = (layout.gap, layout.point_width, layout.height());
	let cards = move || {
		let percents = curve.with(|c| c.percents.clone());
		hourly
			.get()
			.into_iter()
			.zip(percents)
			.map(|(hour, percent)| {
				view! {
					<HourCard hour=hour percent=percent width=point_width track_height=graph_height />
				}
			})
			.collect_view()
	};
	let svg_width = move || layout.graph_width(hourly.with(Vec::len)).to_string();

	view! {
		<section class="hourly-timeline">
			<h2>"Hourly Forecast"</h2>
			<div class="hourly-scroll" style="position: relative; overflow-x: auto;">
				<div class="hourly-track" style=format!("display: flex; gap: {gap}px;")>
					{cards}
				</div>
				<svg
					class="temperature-line"
					width=svg_width
					height=graph_height.to_string()
					style=format!(
						"position: absolute; top: {LABEL_HEIGHT}px; left: 0; overflow: visible; pointer-events: none;",
					)
				>
					<path
						d=move || curve.with(TemperatureCurve::to_svg_path)
						stroke=LINE_COLOR
						stroke-width="2"
						fill="none"
					/>
				</svg>
			</div>
		</section>
	}
}
