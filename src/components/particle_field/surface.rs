//! The 2D drawing surface the field renders into.
//!
//! The field never owns or resizes its surface; it only reads the current
//! size and issues drawing commands. [`CanvasSurface`] is the browser
//! implementation backed by an HTML canvas.

use std::f64::consts::PI;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use super::style::Color;
use crate::error::{Error, Result};

/// Drawing primitives needed by the particle field.
pub trait Surface {
	fn width(&self) -> f64;
	fn height(&self) -> f64;
	/// Erase the whole surface.
	fn clear(&mut self);
	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color, alpha: f64);
	fn stroke_line(
		&mut self,
		from: (f64, f64),
		to: (f64, f64),
		color: Color,
		alpha: f64,
		width: f64,
	);
}

/// A [`Surface`] backed by a canvas element and its 2D context.
pub struct CanvasSurface {
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
	/// Acquire the 2D context of `canvas`.
	pub fn new(canvas: HtmlCanvasElement) -> Result<Self> {
		let ctx: CanvasRenderingContext2d = canvas
			.get_context("2d")?
			.ok_or(Error::NoDrawingContext)?
			.dyn_into()
			.map_err(|_| Error::NoDrawingContext)?;
		Ok(Self { canvas, ctx })
	}

	/// Size the backing canvas to the browser viewport.
	pub fn fit_to_window(canvas: &HtmlCanvasElement) -> Result<()> {
		let window: Window = web_sys::window().ok_or(Error::MissingElement("window"))?;
		let width = window.inner_width()?.as_f64().unwrap_or(0.0);
		let height = window.inner_height()?.as_f64().unwrap_or(0.0);
		canvas.set_width(width as u32);
		canvas.set_height(height as u32);
		Ok(())
	}
}

impl Surface for CanvasSurface {
	fn width(&self) -> f64 {
		self.canvas.width() as f64
	}

	fn height(&self) -> f64 {
		self.canvas.height() as f64
	}

	fn clear(&mut self) {
		self.ctx.clear_rect(0.0, 0.0, self.width(), self.height());
	}

	fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: Color, alpha: f64) {
		self.ctx.set_global_alpha(alpha);
		self.ctx.begin_path();
		let _ = self.ctx.arc(x, y, radius, 0.0, PI * 2.0);
		self.ctx.set_fill_style_str(&color.to_css());
		self.ctx.fill();
		self.ctx.set_global_alpha(1.0);
	}

	fn stroke_line(
		&mut self,
		from: (f64, f64),
		to: (f64, f64),
		color: Color,
		alpha: f64,
		width: f64,
	) {
		self.ctx.set_global_alpha(alpha);
		self.ctx.set_stroke_style_str(&color.to_css());
		self.ctx.set_line_width(width);
		self.ctx.begin_path();
		self.ctx.move_to(from.0, from.1);
		self.ctx.line_to(to.0, to.1);
		self.ctx.stroke();
		self.ctx.set_global_alpha(1.0);
	}
}
