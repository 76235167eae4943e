//! Ambient weather particles.
//!
//! Renders a condition-driven particle animation on a full-viewport canvas:
//! - A fixed-size pool per condition (rain 150, cloud 50, snow/drizzle 30)
//! - Constant-velocity motion with in-place recycling at the bottom edge
//! - Streaks for rain, filled circles for everything else
//! - A cancellable `requestAnimationFrame` loop, one per canvas
//!
//! # Example
//!
//! ```ignore
//! use kinetic_weather::{WeatherCondition, WeatherParticles};
//!
//! let condition = Signal::derive(|| WeatherCondition::Rainy);
//! view! { <WeatherParticles condition=condition /> }
//! ```

mod component;
pub mod frame;
pub mod particles;
mod render;
pub mod surface;
pub mod theme;

pub use component::WeatherParticles;
pub use particles::{Particle, ParticleKind, ParticleSystem, pool_size};
pub use render::{frame as advance_frame, render};
pub use theme::{ParticleMotion, ParticleTheme};
