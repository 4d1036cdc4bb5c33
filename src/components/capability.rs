//! Capabilities the page's behaviours rely on.
//!
//! Each behaviour talks to elements through one of these traits rather than
//! poking at DOM nodes directly, and [`Watcher`] owns the attach/detach
//! lifecycle for viewport-triggered behaviours: elements are attached
//! explicitly and detached automatically once they have fired.

use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::Result;

/// Something that can switch a named visual state on or off.
pub trait Highlightable {
	fn set_highlighted(&self, state: &str, on: bool);
}

impl Highlightable for Element {
	fn set_highlighted(&self, state: &str, on: bool) {
		let _ = self.class_list().toggle_with_force(state, on);
	}
}

/// Something the pointer can enter and leave.
pub trait Hoverable {
	/// Call `on_change(true)` on enter and `on_change(false)` on leave.
	fn on_hover(&self, on_change: impl Fn(bool) + Clone + 'static) -> Result<()>;
}

impl Hoverable for Element {
	fn on_hover(&self, on_change: impl Fn(bool) + Clone + 'static) -> Result<()> {
		let leave = on_change.clone();
		let enter = Closure::<dyn FnMut()>::new(move || on_change(true));
		let leave = Closure::<dyn FnMut()>::new(move || leave(false));
		self.add_event_listener_with_callback("mouseenter", enter.as_ref().unchecked_ref())?;
		self.add_event_listener_with_callback("mouseleave", leave.as_ref().unchecked_ref())?;
		enter.forget();
		leave.forget();
		Ok(())
	}
}

/// Something that becomes visible once, optionally after a delay.
pub trait Revealable {
	fn reveal_delay_ms(&self) -> u32;
	fn reveal(&self);
}

/// Reads a millisecond delay attribute. Missing or malformed means no delay.
pub fn parse_delay(raw: Option<&str>) -> u32 {
	raw.and_then(|s| s.trim().parse().ok()).unwrap_or(0)
}

impl Revealable for Element {
	fn reveal_delay_ms(&self) -> u32 {
		parse_delay(self.get_attribute("data-delay").as_deref())
	}

	fn reveal(&self) {
		self.set_highlighted("visible", true);
	}
}

/// Something that displays a number counting up to a target.
pub trait Countable {
	fn count_target(&self) -> Option<u32>;
	fn show_count(&self, value: u32);
}

impl Countable for Element {
	fn count_target(&self) -> Option<u32> {
		self.get_attribute("data-count")?.trim().parse().ok()
	}

	fn show_count(&self, value: u32) {
		self.set_text_content(Some(&value.to_string()));
	}
}

/// One-shot viewport watcher.
///
/// Attached elements are handed to the callback the first time they
/// intersect the viewport, and are detached in the same step.
pub struct Watcher {
	observer: IntersectionObserver,
}

impl Watcher {
	pub fn new(threshold: f64, root_margin: Option<&str>, mut on_enter: impl FnMut(Element) + 'static) -> Result<Self> {
		let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
			move |entries: js_sys::Array, observer: IntersectionObserver| {
				for entry in entries.iter() {
					let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
						continue;
					};
					if !entry.is_intersecting() {
						continue;
					}
					let target = entry.target();
					observer.unobserve(&target);
					on_enter(target);
				}
			},
		);

		let options = IntersectionObserverInit::new();
		options.set_threshold(&JsValue::from_f64(threshold));
		if let Some(margin) = root_margin {
			options.set_root_margin(margin);
		}
		let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
		// The observer outlives this handle; so must its callback.
		callback.forget();
		Ok(Self { observer })
	}

	pub fn attach(&self, element: &Element) {
		self.observer.observe(element);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn delay_attribute_parsing() {
		assert_eq!(parse_delay(None), 0);
		assert_eq!(parse_delay(Some("150")), 150);
		assert_eq!(parse_delay(Some(" 300 ")), 300);
		assert_eq!(parse_delay(Some("soon")), 0);
		assert_eq!(parse_delay(Some("-5")), 0);
	}
}
