//! Custom cursor: a dot pinned to the pointer and an outline easing after it.

use leptos::ev;
use leptos::prelude::*;
use log::warn;
use wasm_bindgen::JsCast;

use super::capability::Hoverable;
use super::scheduler::start_frame_loop;
use crate::config::CursorConfig;

/// Elements that expand the cursor outline while hovered.
pub const HOVER_TARGETS: &str = "a, button, .skill-tag, .project-card, .social-btn";

/// Pointer position plus the smoothed outline that trails it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CursorFollower {
	pub pointer: (f64, f64),
	pub outline: (f64, f64),
	pub hovered: bool,
	smoothing: f64,
}

impl CursorFollower {
	pub fn new(smoothing: f64) -> Self {
		Self {
			smoothing: smoothing.clamp(0.0, 1.0),
			..Self::default()
		}
	}

	pub fn point_at(&mut self, x: f64, y: f64) {
		self.pointer = (x, y);
	}

	/// Move the outline a fixed fraction of the way to the pointer.
	pub fn step(&mut self) {
		self.outline.0 += (self.pointer.0 - self.outline.0) * self.smoothing;
		self.outline.1 += (self.pointer.1 - self.outline.1) * self.smoothing;
	}

	pub fn set_hovered(&mut self, hovered: bool) {
		self.hovered = hovered;
	}
}

fn px(v: f64) -> String {
	format!("{v}px")
}

/// Cursor dot and outline. Hover targets are picked up once after mount.
#[component]
pub fn Cursor(#[prop(optional)] config: CursorConfig) -> impl IntoView {
	let follower = RwSignal::new(CursorFollower::new(config.smoothing));

	let _ = window_event_listener(ev::mousemove, move |e| {
		follower.update(|f| f.point_at(e.client_x() as f64, e.client_y() as f64));
	});

	Effect::new(move |_| {
		if let Err(e) = start_frame_loop(move || follower.update(CursorFollower::step)) {
			warn!("portfolio-fx: cursor animation disabled: {}", e);
		}
		attach_hover_targets(follower);
	});

	view! {
		<div
			class="cursor-dot"
			style:left=move || px(follower.with(|f| f.pointer.0))
			style:top=move || px(follower.with(|f| f.pointer.1))
		/>
		<div
			class="cursor-outline"
			class:hovered=move || follower.with(|f| f.hovered)
			style:left=move || px(follower.with(|f| f.outline.0))
			style:top=move || px(follower.with(|f| f.outline.1))
		/>
	}
}

fn attach_hover_targets(follower: RwSignal<CursorFollower>) {
	let Some(document) = web_sys::window().and_then(|w| w.document()) else {
		return;
	};
	let Ok(targets) = document.query_selector_all(HOVER_TARGETS) else {
		return;
	};
	for i in 0..targets.length() {
		let Some(el) = targets.item(i).and_then(|n| n.dyn_into::<web_sys::Element>().ok()) else {
			continue;
		};
		if let Err(e) = el.on_hover(move |on| follower.update(|f| f.set_hovered(on))) {
			warn!("portfolio-fx: hover target skipped: {}", e);
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn outline_eases_toward_the_pointer() {
		let mut f = CursorFollower::new(0.15);
		f.point_at(100.0, 200.0);
		f.step();
		assert!((f.outline.0 - 15.0).abs() < 1e-12);
		assert!((f.outline.1 - 30.0).abs() < 1e-12);
		f.step();
		assert!((f.outline.0 - 27.75).abs() < 1e-12);
	}

	#[test]
	fn outline_converges_without_overshoot() {
		let mut f = CursorFollower::new(0.15);
		f.point_at(-40.0, 80.0);
		for _ in 0..200 {
			f.step();
			assert!(f.outline.0 >= -40.0 && f.outline.1 <= 80.0);
		}
		assert!((f.outline.0 + 40.0).abs() < 1e-9);
		assert!((f.outline.1 - 80.0).abs() < 1e-9);
	}

	#[test]
	fn pointer_moves_are_immediate() {
		let mut f = CursorFollower::new(0.15);
		f.point_at(5.0, 6.0);
		assert_eq!(f.pointer, (5.0, 6.0));
		assert_eq!(f.outline, (0.0, 0.0));
		f.set_hovered(true);
		assert!(f.hovered);
	}
}
