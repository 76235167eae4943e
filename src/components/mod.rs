//! Dashboard visual components.

pub mod color;
pub mod kinetic_background;
pub mod temperature_curve;
pub mod weather_particles;
