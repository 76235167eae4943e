//! Per-frame draw pass for weather particles.
//!
//! Each frame fully clears the surface (no trails) and then draws every
//! particle in the style of the active condition:
//! - rain: a streak from the particle back along its velocity
//! - everything else: a filled circle of the particle's size

use rand::Rng;

use super::particles::{ParticleKind, ParticleSystem};
use super::surface::DrawSurface;
use super::theme::ParticleTheme;

/// Advances the simulation one frame, then draws it.
///
/// All particles are moved before any is drawn, so the drawn frame always
/// reflects this frame's motion.
pub fn frame<R: Rng, S: DrawSurface>(system: &mut ParticleSystem<R>, surface: &S, theme: &ParticleTheme) {
	if !system.is_active() {
		return;
	}
	system.update();
	render(system, surface, theme);
}

/// Draws the current particle positions. Idle systems and empty surfaces
/// produce no draw calls.
pub fn render<R, S: DrawSurface>(system: &ParticleSystem<R>, surface: &S, theme: &ParticleTheme) {
	let Some(kind) = system.kind() else {
		return;
	};
	let (w, h) = surface.size();
	if w <= 0.0 || h <= 0.0 {
		return;
	}

	surface.clear();

	match kind {
		ParticleKind::Rain => {
			for p in &system.particles {
				let tail = (
					p.x - p.vx * theme.streak_drift,
					p.y - p.vy * theme.streak_length,
				);
				surface.stroke_line((p.x, p.y), tail, p.size, theme.rain_color, p.opacity);
			}
		}
		ParticleKind::Cloud | ParticleKind::Flake => {
			for p in &system.particles {
				surface.fill_circle(p.x, p.y, p.size, theme.flake_color, p.opacity);
			}
		}
	}
}
