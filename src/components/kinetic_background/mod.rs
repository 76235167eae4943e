//! Time-of-day sky gradient tinted by the current condition.

mod component;
pub mod palette;

pub use component::{KineticBackground, local_time_of_day};
pub use palette::{Gradient, TimeOfDay, base_gradient, overlay_gradient};
