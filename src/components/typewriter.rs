//! Typewriter text cycling through a list of phrases.
//!
//! [`Typewriter`] is a plain state machine: each [`Typewriter::advance`]
//! returns the text to show and how long to wait before the next call. The
//! component just feeds it to a timer loop.

use leptos::prelude::*;
use log::warn;

use super::scheduler::start_timer_loop;
use crate::config::TypewriterConfig;

/// Output of one typewriter step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Step {
	pub text: String,
	/// Milliseconds until the next step.
	pub delay_ms: u32,
}

/// Character-by-character type/delete cycle over a fixed list of phrases.
#[derive(Clone, Debug)]
pub struct Typewriter {
	phrases: Vec<Vec<char>>,
	phrase: usize,
	chars: usize,
	deleting: bool,
	type_ms: u32,
	delete_ms: u32,
	hold_ms: u32,
	gap_ms: u32,
}

impl Typewriter {
	/// `None` when there are no phrases to cycle through.
	pub fn new(config: &TypewriterConfig) -> Option<Self> {
		if config.phrases.is_empty() {
			return None;
		}
		Some(Self {
			phrases: config.phrases.iter().map(|p| p.chars().collect()).collect(),
			phrase: 0,
			chars: 0,
			deleting: false,
			type_ms: config.type_ms,
			delete_ms: config.delete_ms,
			hold_ms: config.hold_ms,
			gap_ms: config.gap_ms,
		})
	}

	/// Index of the phrase currently being typed or deleted.
	pub fn phrase_index(&self) -> usize {
		self.phrase
	}

	pub fn is_deleting(&self) -> bool {
		self.deleting
	}

	/// Type or delete one character.
	pub fn advance(&mut self) -> Step {
		let current = &self.phrases[self.phrase];
		if self.deleting {
			self.chars = self.chars.saturating_sub(1);
		} else {
			self.chars = (self.chars + 1).min(current.len());
		}
		let text = current[..self.chars].iter().collect();

		let delay_ms = if !self.deleting && self.chars == current.len() {
			self.deleting = true;
			self.hold_ms
		} else if self.deleting && self.chars == 0 {
			self.deleting = false;
			self.phrase = (self.phrase + 1) % self.phrases.len();
			self.gap_ms
		} else if self.deleting {
			self.delete_ms
		} else {
			self.type_ms
		};

		Step { text, delay_ms }
	}
}

/// Inline text that types out the configured phrases forever.
#[component]
pub fn TypewriterText(#[prop(optional)] config: TypewriterConfig) -> impl IntoView {
	let text = RwSignal::new(String::new());
	let machine = Typewriter::new(&config);

	Effect::new(move |_| {
		let Some(mut machine) = machine.clone() else {
			warn!("portfolio-fx: typewriter has no phrases");
			return;
		};
		let started = start_timer_loop(0, move || {
			let step = machine.advance();
			text.set(step.text);
			Some(step.delay_ms)
		});
		if let Err(e) = started {
			warn!("portfolio-fx: typewriter disabled: {}", e);
		}
	});

	view! { <span id="typewriter" class="typewriter">{move || text.get()}</span> }
}
