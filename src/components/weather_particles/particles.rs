//! Condition-driven particle pool with in-place recycling.

use rand::Rng;
use rand::rngs::SmallRng;

use super::theme::{MIN_FALL_SPEED, ParticleMotion};
use crate::types::WeatherCondition;

/// Distance past the surface edges where particles enter and leave.
pub const EDGE_MARGIN: f64 = 10.0;

/// Draw style and density class of an animated condition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleKind {
	/// Short streaks along the velocity vector.
	Rain,
	/// Sparse drifting motes.
	Cloud,
	/// Round flakes (snow, drizzle).
	Flake,
}

impl ParticleKind {
	/// Animated kind for `condition`, or `None` when the engine stays idle.
	pub fn for_condition(condition: WeatherCondition) -> Option<Self> {
		match condition {
			WeatherCondition::Rainy => Some(Self::Rain),
			WeatherCondition::Cloudy => Some(Self::Cloud),
			WeatherCondition::Snowy | WeatherCondition::Drizzle => Some(Self::Flake),
			_ => None,
		}
	}

	/// Particles kept alive for this kind.
	pub fn pool_size(self) -> usize {
		match self {
			Self::Rain => 150,
			Self::Cloud => 50,
			Self::Flake => 30,
		}
	}
}

/// Number of particles the engine keeps alive for `condition`.
pub fn pool_size(condition: WeatherCondition) -> usize {
	ParticleKind::for_condition(condition).map_or(0, ParticleKind::pool_size)
}

/// A single falling particle in surface pixel coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	/// Horizontal position.
	pub x: f64,
	/// Vertical position, growing downwards.
	pub y: f64,
	/// Horizontal drift per frame.
	pub vx: f64,
	/// Fall speed per frame, always positive.
	pub vy: f64,
	/// Circle radius or streak width.
	pub size: f64,
	/// Draw alpha.
	pub opacity: f64,
}

impl Particle {
	/// A particle entering just above the top edge.
	fn spawn<R: Rng>(rng: &mut R, motion: &ParticleMotion, width: f64) -> Self {
		let fall_min = motion.fall_speed_min.max(MIN_FALL_SPEED);
		let fall_max = motion.fall_speed_max.max(fall_min);
		Self {
			x: rng.random::<f64>() * width,
			y: -EDGE_MARGIN,
			vx: (rng.random::<f64>() - 0.5) * 2.0 * motion.drift,
			vy: lerp(fall_min, fall_max, rng.random()),
			size: lerp(motion.size_min, motion.size_max, rng.random()),
			opacity: lerp(motion.opacity_min, motion.opacity_max, rng.random()),
		}
	}
}

fn lerp(min: f64, max: f64, t: f64) -> f64 {
	min + (max - min) * t
}

/// Owns the particle pool for one condition and surface.
///
/// The pool length is fixed at construction. Particles leaving the bottom edge
/// are overwritten in place, so slot identity never changes.
pub struct ParticleSystem<R = SmallRng> {
	/// The pool, in slot order.
	pub particles: Vec<Particle>,
	kind: Option<ParticleKind>,
	motion: ParticleMotion,
	width: f64,
	height: f64,
	rng: R,
}

impl<R: Rng> ParticleSystem<R> {
	/// Seeds the pool for `condition`.
	///
	/// Initial particles are scattered over the whole height so the first frame
	/// already looks populated. Non-positive dimensions are treated as zero.
	pub fn new(
		condition: WeatherCondition,
		width: f64,
		height: f64,
		motion: &ParticleMotion,
		mut rng: R,
	) -> Self {
		let (width, height) = (width.max(0.0), height.max(0.0));
		let kind = ParticleKind::for_condition(condition);
		let count = kind.map_or(0, ParticleKind::pool_size);

		let particles = (0..count)
			.map(|_| {
				let mut p = Particle::spawn(&mut rng, motion, width);
				p.y = rng.random::<f64>() * height;
				p
			})
			.collect();

		Self {
			particles,
			kind,
			motion: motion.clone(),
			width,
			height,
			rng,
		}
	}

	/// Advances every particle by its velocity and recycles those that fell
	/// past the bottom edge. Returns how many were recycled.
	pub fn update(&mut self) -> usize {
		let Self {
			particles,
			motion,
			width,
			height,
			rng,
			..
		} = self;
		let floor = *height + EDGE_MARGIN;
		let mut recycled = 0;

		for p in particles.iter_mut() {
			p.x += p.vx;
			p.y += p.vy;

			if p.y > floor {
				*p = Particle::spawn(rng, motion, *width);
				recycled += 1;
			}
		}

		recycled
	}
}

impl<R> ParticleSystem<R> {
	/// Draw style of the pool, `None` when idle.
	pub fn kind(&self) -> Option<ParticleKind> {
		self.kind
	}

	/// Whether the current condition animates at all.
	pub fn is_active(&self) -> bool {
		self.kind.is_some()
	}

	/// Current surface bounds as `(width, height)`.
	pub fn size(&self) -> (f64, f64) {
		(self.width, self.height)
	}

	/// Adopts new surface bounds. Particles keep their positions; only
	/// recycling and the recycle threshold see the new size.
	pub fn resize(&mut self, width: f64, height: f64) {
		self.width = width.max(0.0);
		self.height = height.max(0.0);
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rand::SeedableRng;

	fn system(condition: WeatherCondition, w: f64, h: f64) -> ParticleSystem {
		ParticleSystem::new(
			condition,
			w,
			h,
			&ParticleMotion::default(),
			SmallRng::seed_from_u64(7),
		)
	}

	#[test]
	fn pool_size_law() {
		use WeatherCondition::*;
		assert_eq!(pool_size(Rainy), 150);
		assert_eq!(pool_size(Cloudy), 50);
		assert_eq!(pool_size(Snowy), 30);
		assert_eq!(pool_size(Drizzle), 30);
		for idle in [Sunny, PartlyCloudy, Windy, Stormy, Unknown] {
			assert_eq!(pool_size(idle), 0, "{idle} should not animate");
		}
	}

	#[test]
	fn initial_pool_matches_condition() {
		assert_eq!(system(WeatherCondition::Rainy, 800.0, 600.0).particles.len(), 150);
		assert_eq!(system(WeatherCondition::Cloudy, 800.0, 600.0).particles.len(), 50);

		let sunny = system(WeatherCondition::Sunny, 800.0, 600.0);
		assert!(sunny.particles.is_empty());
		assert!(!sunny.is_active());
	}

	#[test]
	fn initial_particles_cover_surface() {
		let ps = system(WeatherCondition::Rainy, 800.0, 600.0);
		let motion = ParticleMotion::default();
		for p in &ps.particles {
			assert!((0.0..800.0).contains(&p.x));
			assert!((0.0..600.0).contains(&p.y));
			assert!(p.vx.abs() <= motion.drift);
			assert!(p.vy >= motion.fall_speed_min && p.vy < motion.fall_speed_max);
			assert!(p.size >= motion.size_min && p.size < motion.size_max);
			assert!(p.opacity >= motion.opacity_min && p.opacity < motion.opacity_max);
		}
		// Seeded over the full height rather than stacked at the top edge.
		assert!(ps.particles.iter().any(|p| p.y > 300.0));
	}

	#[test]
	fn particles_only_fall() {
		let mut ps = system(WeatherCondition::Snowy, 400.0, 300.0);
		for _ in 0..500 {
			let before: Vec<f64> = ps.particles.iter().map(|p| p.y).collect();
			ps.update();
			for (old, p) in before.iter().zip(&ps.particles) {
				if p.y != -EDGE_MARGIN {
					assert!(p.y >= *old);
				}
			}
		}
	}

	#[test]
	fn recycles_in_place_at_top_edge() {
		let mut ps = system(WeatherCondition::Rainy, 320.0, 200.0);
		ps.particles[3].y = 200.0 + EDGE_MARGIN + 5.0;
		let untouched = ps.particles[4].clone();

		let recycled = ps.update();

		assert!(recycled >= 1);
		assert_eq!(ps.particles.len(), 150);
		assert_eq!(ps.particles[3].y, -EDGE_MARGIN);
		assert!((0.0..320.0).contains(&ps.particles[3].x));
		assert_eq!(ps.particles[4].y, untouched.y + untouched.vy);
	}

	#[test]
	fn pool_size_is_stable_over_time() {
		let mut ps = system(WeatherCondition::Cloudy, 100.0, 50.0);
		let total: usize = (0..1000).map(|_| ps.update()).sum();
		assert!(total > 0);
		assert_eq!(ps.particles.len(), 50);
	}

	#[test]
	fn resize_keeps_positions() {
		let mut ps = system(WeatherCondition::Snowy, 800.0, 600.0);
		let before = ps.particles.clone();
		ps.resize(400.0, 300.0);
		assert_eq!(ps.particles, before);
		assert_eq!(ps.size(), (400.0, 300.0));
	}

	#[test]
	fn recycling_follows_new_bounds_after_resize() {
		let mut ps = system(WeatherCondition::Rainy, 800.0, 600.0);
		ps.resize(50.0, 100.0);
		let floor = 100.0 + EDGE_MARGIN;

		let recycled = ps.update();
		assert!(recycled > 0);
		for p in &ps.particles {
			assert!(p.y <= floor);
			if p.y == -EDGE_MARGIN {
				assert!((0.0..50.0).contains(&p.x), "recycled at x = {}", p.x);
			}
		}

		for _ in 0..300 {
			ps.update();
			assert!(ps.particles.iter().all(|p| p.y <= floor));
		}
		assert_eq!(ps.particles.len(), 150);
	}

	#[test]
	fn zero_and_negative_surfaces_are_tolerated() {
		let mut ps = system(WeatherCondition::Rainy, 0.0, -20.0);
		assert_eq!(ps.size(), (0.0, 0.0));
		for _ in 0..100 {
			ps.update();
		}
		assert_eq!(ps.particles.len(), 150);
		assert!(ps.particles.iter().all(|p| p.y.is_finite() && p.y <= EDGE_MARGIN + 3.0));
	}

	#[test]
	fn same_seed_same_pool() {
		let a = system(WeatherCondition::Drizzle, 640.0, 480.0);
		let b = system(WeatherCondition::Drizzle, 640.0, 480.0);
		assert_eq!(a.particles, b.particles);
	}

	#[test]
	fn fall_speed_floor_applies() {
		let motion = ParticleMotion {
			fall_speed_min: -5.0,
			fall_speed_max: 0.0,
			..ParticleMotion::default()
		};
		let ps = ParticleSystem::new(
			WeatherCondition::Snowy,
			100.0,
			100.0,
			&motion,
			SmallRng::seed_from_u64(1),
		);
		assert!(ps.particles.iter().all(|p| p.vy >= MIN_FALL_SPEED));
	}
}
