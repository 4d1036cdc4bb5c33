//! Reveal-on-scroll: elements fade in once when they first scroll into view.

use leptos::prelude::*;
use log::{info, warn};
use wasm_bindgen::JsCast;
use web_sys::Element;

use super::capability::{Revealable, Watcher};
use super::scheduler::run_after;
use crate::config::RevealConfig;
use crate::error::{Error, Result};

/// Every element carrying one of these classes is revealed on scroll.
pub const REVEAL_SELECTOR: &str = ".reveal-up, .reveal-left, .reveal-right";

/// Direction an element slides in from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealFrom {
	#[default]
	Up,
	Left,
	Right,
}

impl RevealFrom {
	pub fn class(self) -> &'static str {
		match self {
			RevealFrom::Up => "reveal-up",
			RevealFrom::Left => "reveal-left",
			RevealFrom::Right => "reveal-right",
		}
	}
}

/// Wraps its children in a block revealed the first time it is scrolled to.
#[component]
pub fn Reveal(
	#[prop(optional)] from: RevealFrom,
	#[prop(optional)] delay_ms: u32,
	children: Children,
) -> impl IntoView {
	view! {
		<div class=from.class() data-delay=delay_ms.to_string()>
			{children()}
		</div>
	}
}

/// Attach every revealable element on the page to a one-shot watcher.
pub fn attach_reveals(config: &RevealConfig) -> Result<u32> {
	let watcher = Watcher::new(config.threshold, Some(config.root_margin.as_str()), |el: Element| {
		let delay = el.reveal_delay_ms();
		if delay == 0 {
			el.reveal();
		} else if let Err(e) = run_after(delay, move || el.reveal()) {
			warn!("portfolio-fx: delayed reveal failed: {}", e);
		}
	})?;

	let document = web_sys::window()
		.and_then(|w| w.document())
		.ok_or(Error::MissingElement("document"))?;
	let nodes = document.query_selector_all(REVEAL_SELECTOR)?;
	let mut attached = 0;
	for i in 0..nodes.length() {
		if let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
			watcher.attach(&el);
			attached += 1;
		}
	}
	info!("portfolio-fx: watching {} reveal elements", attached);
	Ok(attached)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn every_direction_matches_the_selector() {
		for from in [RevealFrom::Up, RevealFrom::Left, RevealFrom::Right] {
			assert!(REVEAL_SELECTOR.contains(&format!(".{}", from.class())));
		}
		assert_eq!(RevealFrom::default(), RevealFrom::Up);
	}
}
