//! Leptos component hosting the particle field.
//!
//! The component creates a viewport-sized canvas, keeps it sized to the
//! window, and runs the field on a `requestAnimationFrame` loop. Resizing only
//! touches the canvas; the field picks up the new size on its next frame.

use leptos::prelude::*;
use log::{debug, info, warn};
use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use super::particles::ParticleField;
use super::style::ParticleStyle;
use super::surface::{CanvasSurface, Surface};
use crate::components::scheduler::start_frame_loop;
use crate::error::{Error, Result};

/// Full-viewport background canvas with drifting, connected particles.
#[component]
pub fn ParticleCanvas(#[prop(optional)] particles: ParticleStyle) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if let Err(e) = start(canvas.into(), particles.clone()) {
			warn!("portfolio-fx: particle field disabled: {}", e);
		}
	});

	view! { <canvas node_ref=canvas_ref id="particle-canvas" /> }
}

fn start(canvas: HtmlCanvasElement, style: ParticleStyle) -> Result<()> {
	CanvasSurface::fit_to_window(&canvas)?;
	let window = web_sys::window().ok_or(Error::MissingElement("window"))?;
	let mut surface = CanvasSurface::new(canvas.clone())?;

	let on_resize = Closure::<dyn FnMut()>::new(move || {
		if let Err(e) = CanvasSurface::fit_to_window(&canvas) {
			debug!("portfolio-fx: canvas resize skipped: {}", e);
		}
	});
	window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())?;
	on_resize.forget();

	let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
	let mut field = ParticleField::new(style, surface.width(), surface.height(), seed);
	info!(
		"portfolio-fx: particle field started ({} particles, {}x{})",
		field.len(),
		surface.width(),
		surface.height()
	);

	start_frame_loop(move || field.tick(&mut surface))
}
