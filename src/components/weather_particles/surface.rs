//! Drawing primitives the particle renderer needs from its host.

use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

use crate::components::color::Color;

/// A 2D target that can be cleared and drawn into with circles and lines.
///
/// `alpha` is applied on top of the colour's own alpha, matching canvas
/// `globalAlpha` semantics.
pub trait DrawSurface {
	/// Current pixel size of the surface.
	fn size(&self) -> (f64, f64);
	/// Clears every pixel of the surface.
	fn clear(&self);
	fn fill_circle(&self, x: f64, y: f64, radius: f64, color: Color, alpha: f64);
	fn stroke_line(&self, from: (f64, f64), to: (f64, f64), width: f64, color: Color, alpha: f64);
}

impl DrawSurface for CanvasRenderingContext2d {
	fn size(&self) -> (f64, f64) {
		self.canvas()
			.map(|c| (c.width() as f64, c.height() as f64))
			.unwrap_or((0.0, 0.0))
	}

	fn clear(&self) {
		let (w, h) = DrawSurface::size(self);
		self.clear_rect(0.0, 0.0, w, h);
	}

	fn fill_circle(&self, x: f64, y: f64, radius: f64, color: Color, alpha: f64) {
		self.save();
		self.set_global_alpha(alpha);
		self.set_fill_style_str(&color.to_css());
		self.begin_path();
		let _ = self.arc(x, y, radius.max(0.0), 0.0, TAU);
		self.fill();
		self.restore();
	}

	fn stroke_line(&self, from: (f64, f64), to: (f64, f64), width: f64, color: Color, alpha: f64) {
		self.save();
		self.set_global_alpha(alpha);
		self.set_stroke_style_str(&color.to_css());
		self.set_line_width(width);
		self.begin_path();
		self.move_to(from.0, from.1);
		self.line_to(to.0, to.1);
		self.stroke();
		self.restore();
	}
}
