//! Hourly temperature graph.
//!
//! [`TemperatureCurve`] normalizes an hourly series to percentages of its
//! range and turns them into graph-space vertices plus a linear path.
//! [`HourlyTimeline`] renders the per-hour cards and overlays the path.

mod component;
pub mod curve;
pub mod layout;

pub use component::HourlyTimeline;
pub use curve::{FLAT_PERCENT, PathCommand, TemperatureCurve, normalize};
pub use layout::CurveLayout;
