//! Visual and motion configuration for weather particles.

use crate::components::color::Color;

/// Ranges the engine draws particle attributes from.
///
/// Every range is half-open `[min, max)`. The same ranges apply to every
/// condition; only the pool size and draw style vary.
#[derive(Clone, Debug)]
pub struct ParticleMotion {
	/// Maximum horizontal drift per frame, in either direction.
	pub drift: f64,
	/// Slowest fall speed (pixels per frame). Floored at [`MIN_FALL_SPEED`].
	pub fall_speed_min: f64,
	/// Fastest fall speed (pixels per frame).
	pub fall_speed_max: f64,
	/// Smallest radius (or streak width).
	pub size_min: f64,
	/// Largest radius (or streak width).
	pub size_max: f64,
	/// Faintest draw alpha.
	pub opacity_min: f64,
	/// Strongest draw alpha.
	pub opacity_max: f64,
}

/// Particles must always fall, so fall speed never drops below this.
pub const MIN_FALL_SPEED: f64 = 0.1;

impl Default for ParticleMotion {
	fn default() -> Self {
		Self {
			drift: 0.25,
			fall_speed_min: 1.0,
			fall_speed_max: 3.0,
			size_min: 1.0,
			size_max: 4.0,
			opacity_min: 0.3,
			opacity_max: 0.8,
		}
	}
}

/// Complete particle theme: motion ranges plus per-style drawing parameters.
#[derive(Clone, Debug)]
pub struct ParticleTheme {
	/// Stroke colour for rain streaks.
	pub rain_color: Color,
	/// Fill colour for flakes and cloud motes.
	pub flake_color: Color,
	/// Streak tail offset along `-vx`, as a multiple of `vx`.
	pub streak_drift: f64,
	/// Streak tail offset along `-vy`, as a multiple of `vy`.
	pub streak_length: f64,
	/// Attribute ranges for spawned particles.
	pub motion: ParticleMotion,
}

impl Default for ParticleTheme {
	fn default() -> Self {
		Self {
			rain_color: Color::rgba(174, 223, 255, 0.6),
			flake_color: Color::rgba(255, 255, 255, 0.8),
			streak_drift: 2.0,
			streak_length: 8.0,
			motion: ParticleMotion::default(),
		}
	}
}
