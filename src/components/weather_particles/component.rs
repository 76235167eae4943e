//! Leptos component hosting the ambient weather particle canvas.
//!
//! The component owns at most one running engine. Whenever the condition
//! changes the previous engine is dropped (its frame loop cancelled and its
//! resize listener detached) before a new one is seeded, and unmounting drops
//! whatever is left.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, info, warn};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::frame::{AnimationLoop, BrowserFrames};
use super::particles::ParticleSystem;
use super::render;
use super::surface::DrawSurface;
use super::theme::ParticleTheme;
use crate::types::WeatherCondition;

/// A running engine: frame loop plus the listener that keeps the canvas sized
/// to the viewport.
struct ParticleLayer {
	window: Window,
	on_resize: Closure<dyn FnMut()>,
	_animation: AnimationLoop<BrowserFrames>,
}

impl Drop for ParticleLayer {
	fn drop(&mut self) {
		let _ = self
			.window
			.remove_event_listener_with_callback("resize", self.on_resize.as_ref().unchecked_ref());
	}
}

fn viewport_size(window: &Window) -> (f64, f64) {
	let dim = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
	(dim(window.inner_width()), dim(window.inner_height()))
}

fn random_seed() -> u64 {
	((js_sys::Math::random() * u64::MAX as f64) as u64) ^ (js_sys::Date::now() as u64)
}

fn start_layer(
	canvas: HtmlCanvasElement,
	condition: WeatherCondition,
	theme: ParticleTheme,
) -> Option<ParticleLayer> {
	let Some(window) = web_sys::window() else {
		warn!("weather particles: no window, particles disabled");
		return None;
	};
	let ctx: CanvasRenderingContext2d = match canvas.get_context("2d") {
		Ok(Some(ctx)) => match ctx.dyn_into() {
			Ok(ctx) => ctx,
			Err(_) => {
				warn!("weather particles: context is not a 2d canvas context");
				return None;
			}
		},
		_ => {
			warn!("weather particles: 2d canvas context unavailable");
			return None;
		}
	};

	let (w, h) = viewport_size(&window);
	canvas.set_width(w as u32);
	canvas.set_height(h as u32);

	let system = ParticleSystem::new(
		condition,
		w,
		h,
		&theme.motion,
		SmallRng::seed_from_u64(random_seed()),
	);
	if !system.is_active() {
		ctx.clear();
		debug!("weather particles: '{}' is not animated", condition);
		return None;
	}
	info!(
		"weather particles: {} particles for '{}' on {}x{}",
		system.particles.len(),
		condition,
		w,
		h
	);
	let system = Rc::new(RefCell::new(system));

	let (system_resize, canvas_resize) = (system.clone(), canvas.clone());
	let on_resize: Closure<dyn FnMut()> = Closure::new(move || {
		let Some(win) = web_sys::window() else {
			return;
		};
		let (nw, nh) = viewport_size(&win);
		canvas_resize.set_width(nw as u32);
		canvas_resize.set_height(nh as u32);
		system_resize.borrow_mut().resize(nw, nh);
		debug!("weather particles: resized to {}x{}", nw, nh);
	});
	let _ = window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());

	let animation = AnimationLoop::start(BrowserFrames::new(window.clone()), move || {
		render::frame(&mut *system.borrow_mut(), &ctx, &theme);
	});

	Some(ParticleLayer {
		window,
		on_resize,
		_animation: animation,
	})
}

/// Full-viewport canvas drawing condition-driven particles behind the page.
///
/// Rain, cloud, snow and drizzle animate; every other condition leaves the
/// canvas empty and schedules no frames.
#[component]
pub fn WeatherParticles(
	#[prop(into)] condition: Signal<WeatherCondition>,
	#[prop(default = ParticleTheme::default())] theme: ParticleTheme,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let layer = StoredValue::new_local(None::<ParticleLayer>);

	Effect::new(move |_| {
		let condition = condition.get();
		layer.update_value(|slot| *slot = None);

		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		let canvas: HtmlCanvasElement = canvas.into();
		let started = start_layer(canvas, condition, theme.clone());
		layer.set_value(started);
	});

	on_cleanup(move || {
		if layer.try_update_value(|slot| *slot = None).is_some() {
			debug!("weather particles: unmounted");
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="weather-particles"
			style="position: fixed; inset: 0; pointer-events: none; z-index: 5; mix-blend-mode: screen;"
		/>
	}
}
