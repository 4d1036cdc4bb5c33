//! Stat counters that count up from zero when scrolled into view.

use leptos::prelude::*;
use log::{info, warn};
use wasm_bindgen::JsCast;
use web_sys::Element;

use super::capability::{Countable, Watcher};
use super::scheduler::start_timer_loop;
use crate::config::CounterConfig;
use crate::error::{Error, Result};

pub const COUNTER_SELECTOR: &str = ".stat-num[data-count]";

/// Count from 0 to `target` in unit steps spread over a fixed duration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountUp {
	target: u32,
	current: u32,
	interval_ms: u32,
}

impl CountUp {
	pub fn new(target: u32, duration_ms: u32) -> Self {
		let interval_ms = if target == 0 {
			0
		} else {
			(duration_ms / target).max(1)
		};
		Self {
			target,
			current: 0,
			interval_ms,
		}
	}

	/// Delay between two increments: `duration_ms / target`, truncated.
	///
	/// Browser timers take whole milliseconds and truncate fractional
	/// delays, so this is the step a timer would actually fire at.
	pub fn interval_ms(&self) -> u32 {
		self.interval_ms
	}

	pub fn current(&self) -> u32 {
		self.current
	}

	pub fn is_done(&self) -> bool {
		self.current >= self.target
	}

	/// The next value to show, or `None` once the target is reached.
	pub fn advance(&mut self) -> Option<u32> {
		if self.is_done() {
			return None;
		}
		self.current += 1;
		Some(self.current)
	}
}

/// A labelled number that counts up to `target`.
#[component]
pub fn StatCounter(target: u32, #[prop(into)] label: String, #[prop(optional, into)] suffix: String) -> impl IntoView {
	view! {
		<div class="stat">
			<span class="stat-num" data-count=target.to_string()>"0"</span>
			<span class="stat-suffix">{suffix}</span>
			<span class="stat-label">{label}</span>
		</div>
	}
}

fn run(el: Element, duration_ms: u32) {
	let Some(target) = el.count_target() else {
		return;
	};
	let mut count = CountUp::new(target, duration_ms);
	if count.is_done() {
		el.show_count(count.current());
		return;
	}
	let interval = count.interval_ms();
	let started = start_timer_loop(interval, move || {
		let value = count.advance()?;
		el.show_count(value);
		(!count.is_done()).then_some(interval)
	});
	if let Err(e) = started {
		warn!("portfolio-fx: counter disabled: {}", e);
	}
}

/// Attach every stat counter on the page to a one-shot watcher.
pub fn attach_counters(config: &CounterConfig) -> Result<u32> {
	let duration_ms = config.duration_ms;
	let watcher = Watcher::new(config.threshold, None, move |el| run(el, duration_ms))?;

	let document = web_sys::window()
		.and_then(|w| w.document())
		.ok_or(Error::MissingElement("document"))?;
	let nodes = document.query_selector_all(COUNTER_SELECTOR)?;
	let mut attached = 0;
	for i in 0..nodes.length() {
		if let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
			watcher.attach(&el);
			attached += 1;
		}
	}
	info!("portfolio-fx: watching {} stat counters", attached);
	Ok(attached)
}
