//! Drawing-surface abstraction.
//!
//! The field draws through this trait rather than against the canvas
//! directly, which keeps the simulation and its draw decisions testable
//! off-browser. The only production implementation wraps the 2D canvas
//! context.

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::theme::Color;

/// Immediate-mode primitives the particle field needs from its host.
pub trait Surface {
	/// Clear the whole surface to transparent.
	fn clear(&mut self, width: f64, height: f64);

	/// Draw a filled circle.
	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color, alpha: f64);

	/// Stroke a line segment.
	#[allow(clippy::too_many_arguments)]
	fn stroke_line(
		&mut self,
		x1: f64,
		y1: f64,
		x2: f64,
		y2: f64,
		width: f64,
		color: Color,
		alpha: f64,
	);
}

/// [`Surface`] backed by a `CanvasRenderingContext2d`.
pub struct CanvasSurface {
	ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
	/// Wrap a canvas 2D context.
	pub fn new(ctx: CanvasRenderingContext2d) -> Self {
		Self { ctx }
	}
}

impl Surface for CanvasSurface {
	fn clear(&mut self, width: f64, height: f64) {
		self.ctx.clear_rect(0.0, 0.0, width, height);
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color, alpha: f64) {
		self.ctx.begin_path();
		let _ = self.ctx.arc(x, y, radius, 0.0, PI * 2.0);
		self.ctx.set_fill_style_str(&color.to_css(alpha));
		self.ctx.fill();
	}

	fn stroke_line(
		&mut self,
		x1: f64,
		y1: f64,
		x2: f64,
		y2: f64,
		width: f64,
		color: Color,
		alpha: f64,
	) {
		self.ctx.begin_path();
		self.ctx.set_stroke_style_str(&color.to_css(alpha));
		self.ctx.set_line_width(width);
		self.ctx.move_to(x1, y1);
		self.ctx.line_to(x2, y2);
		self.ctx.stroke();
	}
}
